use std::cell::RefCell;
use uuid::Uuid;
use crate::server::creator::{ Creator, CreatorRepository, InMemoryCreatorRepository };

/// Repository that records the name of every call it receives.
#[derive(Default)]
pub struct RecordingRepository {
    inner: InMemoryCreatorRepository,
    pub calls: RefCell<Vec<&'static str>>,
}

impl RecordingRepository {
    pub fn times(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }

    fn record(&self, call: &'static str) {
        self.calls.borrow_mut().push(call);
    }
}

impl CreatorRepository for RecordingRepository {
    fn find_all(&self) -> Vec<Creator> {
        self.record("find_all");
        self.inner.find_all()
    }

    fn find_by_id(&self, id: Uuid) -> Option<Creator> {
        self.record("find_by_id");
        self.inner.find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> Option<Creator> {
        self.record("find_by_name");
        self.inner.find_by_name(name)
    }

    fn save(&mut self, creator: Creator) -> Creator {
        self.record("save");
        self.inner.save(creator)
    }

    fn delete(&mut self, id: Uuid) -> bool {
        self.record("delete");
        self.inner.delete(id)
    }
}
