use std::cell::{ Cell, RefCell };
use std::collections::HashMap;
use std::rc::Rc;
use super::{ ColorSchemeMedia, PreferenceStore };

/// In-process store. Clones share the same entries, so a clone handed to a
/// fresh `AppearancePreference` behaves like a reload from durable storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// System signal with a value the caller controls.
#[derive(Clone, Debug, Default)]
pub struct FixedMedia {
    dark: Rc<Cell<bool>>,
}

impl FixedMedia {
    pub fn new(dark: bool) -> Self {
        Self {
            dark: Rc::new(Cell::new(dark)),
        }
    }

    pub fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
    }
}

impl ColorSchemeMedia for FixedMedia {
    fn matches_dark_preference(&self) -> bool {
        self.dark.get()
    }
}
