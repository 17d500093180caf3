use thiserror::Error;
use tonic::Status;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Inventory number {0} already exists")]
    DuplicateInventoryNumber(String),

    #[error("Item {0} is already in maintenance")]
    AlreadyInMaintenance(String),

    #[error("{0}")]
    InvalidState(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Mail error: {0}")]
    Mail(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Database(e) => Status::internal(format!("Database error: {}", e)),
            AppError::NotFound(msg) => Status::not_found(msg),
            AppError::InvalidInput(msg) => Status::invalid_argument(msg),
            e @ AppError::DuplicateInventoryNumber(_) => Status::already_exists(e.to_string()),
            e @ AppError::AlreadyInMaintenance(_) => Status::already_exists(e.to_string()),
            AppError::InvalidState(msg) => Status::failed_precondition(msg),
            AppError::PermissionDenied(msg) => Status::permission_denied(msg),
            AppError::Storage(msg) => Status::internal(format!("Storage error: {}", msg)),
            AppError::Mail(msg) => Status::internal(format!("Mail error: {}", msg)),
            AppError::Internal(msg) => Status::internal(msg),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_duplicate_maps_to_already_exists() {
        let status: Status = AppError::DuplicateInventoryNumber("INV-1".to_string()).into();
        assert_eq!(status.code(), Code::AlreadyExists);
        assert_eq!(status.message(), "Inventory number INV-1 already exists");
    }

    #[test]
    fn test_invalid_state_maps_to_failed_precondition() {
        let status: Status =
            AppError::InvalidState("Quote has not been priced yet".to_string()).into();
        assert_eq!(status.code(), Code::FailedPrecondition);
        assert_eq!(status.message(), "Quote has not been priced yet");
    }
}
