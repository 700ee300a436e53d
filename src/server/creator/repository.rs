use uuid::Uuid;
use super::types::Creator;

pub trait CreatorRepository {
    fn find_all(&self) -> Vec<Creator>;
    fn find_by_id(&self, id: Uuid) -> Option<Creator>;
    fn find_by_name(&self, name: &str) -> Option<Creator>;
    /// Inserts, or replaces the creator with the same id.
    fn save(&mut self, creator: Creator) -> Creator;
    fn delete(&mut self, id: Uuid) -> bool;
}

/// Keeps creators in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCreatorRepository {
    creators: Vec<Creator>,
}

impl CreatorRepository for InMemoryCreatorRepository {
    fn find_all(&self) -> Vec<Creator> {
        self.creators.clone()
    }

    fn find_by_id(&self, id: Uuid) -> Option<Creator> {
        self.creators.iter().find(|c| c.id == id).cloned()
    }

    fn find_by_name(&self, name: &str) -> Option<Creator> {
        self.creators.iter().find(|c| c.name == name).cloned()
    }

    fn save(&mut self, creator: Creator) -> Creator {
        match self.creators.iter_mut().find(|c| c.id == creator.id) {
            Some(existing) => *existing = creator.clone(),
            None => self.creators.push(creator.clone()),
        }
        creator
    }

    fn delete(&mut self, id: Uuid) -> bool {
        let before = self.creators.len();
        self.creators.retain(|c| c.id != id);
        self.creators.len() != before
    }
}
