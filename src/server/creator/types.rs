use serde::{ Deserialize, Serialize };
use uuid::Uuid;

/// A company or sculptor producing miniatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: Uuid,
    pub name: String,
}

impl Creator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
