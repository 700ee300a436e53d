use std::fmt::{ Display, Formatter };
use dioxus::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum CreatorError {
    NotFound(Uuid),
    InvalidName(String),
    DuplicateName(String),
    Storage(String),
}

impl CreatorError {
    /// HTTP status reported in the response envelope.
    pub fn status_code(&self) -> u16 {
        match self {
            CreatorError::NotFound(_) => 404,
            CreatorError::InvalidName(_) => 400,
            CreatorError::DuplicateName(_) => 409,
            CreatorError::Storage(_) => 500,
        }
    }

    /// Short summary used as the envelope message.
    pub fn summary(&self) -> &'static str {
        match self {
            CreatorError::NotFound(_) => "Resource not found",
            CreatorError::InvalidName(_) => "Invalid creator",
            CreatorError::DuplicateName(_) => "Creator already exists",
            CreatorError::Storage(_) => "Internal error",
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CreatorError::NotFound(_) => "ResourceNotFoundException",
            CreatorError::InvalidName(_) => "InvalidNameException",
            CreatorError::DuplicateName(_) => "DuplicateNameException",
            CreatorError::Storage(_) => "StorageException",
        }
    }
}

impl Display for CreatorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CreatorError::NotFound(id) =>
                write!(f, "Resource with the id '{}' could not be found", id),
            CreatorError::InvalidName(msg) => write!(f, "Invalid name: {}", msg),
            CreatorError::DuplicateName(name) =>
                write!(f, "A creator named '{}' already exists", name),
            CreatorError::Storage(msg) => write!(f, "Storage Error: {}", msg),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for CreatorError {
    fn from(error: std::sync::PoisonError<T>) -> Self {
        CreatorError::Storage(error.to_string())
    }
}

impl From<CreatorError> for ServerFnError {
    fn from(err: CreatorError) -> ServerFnError {
        ServerFnError::ServerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let id = Uuid::parse_str("eeb41c5f-9026-4cf1-9da1-23a2ef0cd9c1").unwrap();
        let err = CreatorError::NotFound(id);
        assert_eq!(
            err.to_string(),
            "Resource with the id 'eeb41c5f-9026-4cf1-9da1-23a2ef0cd9c1' could not be found"
        );
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.summary(), "Resource not found");
    }

    #[test]
    fn test_into_server_fn_error() {
        let err: ServerFnError = CreatorError::Storage("lock poisoned".to_string()).into();
        assert!(err.to_string().contains("lock poisoned"));
    }
}
