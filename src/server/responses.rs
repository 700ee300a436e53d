use chrono::{ SecondsFormat, Utc };
use serde::{ Deserialize, Serialize };
use crate::error::CreatorError;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;

/// JSON envelope returned by every catalogue endpoint.
///
/// `data` is only present on success and `error` only on failure; absent
/// fields are left out of the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

impl<T> ApiResponse<T> {
    pub fn success(status: u16, data: T) -> Self {
        Self {
            status,
            data: Some(data),
            error: None,
        }
    }

    /// Success without a payload, e.g. after a delete.
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            data: None,
            error: None,
        }
    }

    pub fn failure(err: &CreatorError) -> Self {
        Self {
            status: err.status_code(),
            data: None,
            error: Some(ErrorDetails::new(err.summary(), &err.to_string(), Some(err.kind()))),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Splits the envelope into its payload or its error details.
    pub fn into_result(self) -> Result<Option<T>, ErrorDetails> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}

impl<T> From<Result<T, CreatorError>> for ApiResponse<T> {
    fn from(result: Result<T, CreatorError>) -> Self {
        match result {
            Ok(data) => ApiResponse::success(STATUS_OK, data),
            Err(e) => ApiResponse::failure(&e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_type: Option<String>,
    pub message: String,
    pub details: String,
    pub timestamp: String,
}

impl ErrorDetails {
    /// Stamps the details with the current time.
    pub fn new(message: &str, details: &str, exception_type: Option<&str>) -> Self {
        Self {
            exception_type: exception_type.map(str::to_string),
            message: message.to_string(),
            details: details.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, false),
        }
    }
}
