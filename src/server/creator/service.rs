use log::{ debug, warn };
use uuid::Uuid;
use crate::error::CreatorError;
use super::repository::CreatorRepository;
use super::types::Creator;

pub struct CreatorService<R: CreatorRepository> {
    repository: R,
}

impl<R: CreatorRepository> CreatorService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Adds each seed name, skipping ones that fail validation.
    pub fn with_seed(repository: R, names: &[String]) -> Self {
        let mut service = Self::new(repository);
        for name in names {
            if let Err(e) = service.add_creator(name) {
                warn!("Skipping seed creator {:?}: {}", name, e);
            }
        }
        service
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn get_all(&self) -> Vec<Creator> {
        debug!("get all Creators");
        self.repository.find_all()
    }

    pub fn get_one(&self, id: Uuid) -> Result<Creator, CreatorError> {
        debug!("get Creator with ID={}", id);
        self.repository.find_by_id(id).ok_or(CreatorError::NotFound(id))
    }

    pub fn add_creator(&mut self, name: &str) -> Result<Creator, CreatorError> {
        debug!("add new Creator with name={}", name);
        let name = self.validate_name(name, None)?;
        Ok(self.repository.save(Creator::new(name)))
    }

    pub fn update_creator(&mut self, id: Uuid, name: &str) -> Result<Creator, CreatorError> {
        debug!("update Creator with ID={}", id);
        self.get_one(id)?;
        let name = self.validate_name(name, Some(id))?;
        Ok(self.repository.save(Creator { id, name }))
    }

    pub fn delete_creator(&mut self, id: Uuid) -> Result<(), CreatorError> {
        debug!("delete Creator with ID={}", id);
        let creator = self.get_one(id)?;
        if self.repository.delete(creator.id) {
            Ok(())
        } else {
            Err(CreatorError::NotFound(id))
        }
    }

    /// Trims the name and enforces non-empty, unique names. `owner` is the
    /// creator being renamed, which may keep its own name.
    fn validate_name(&self, name: &str, owner: Option<Uuid>) -> Result<String, CreatorError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CreatorError::InvalidName("name must not be empty".to_string()));
        }
        match self.repository.find_by_name(name) {
            Some(existing) if Some(existing.id) != owner =>
                Err(CreatorError::DuplicateName(name.to_string())),
            _ => Ok(name.to_string()),
        }
    }
}
