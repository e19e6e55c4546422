use thiserror::Error;
use std::io;

/// Client-specific error type
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("gRPC client error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Server returned error: {0}")]
    ServerError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Client-specific result type
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<tonic::Status> for ClientError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::Unauthenticated => ClientError::Authentication(status.message().to_string()),
            tonic::Code::PermissionDenied => ClientError::Authentication(status.message().to_string()),
            tonic::Code::Unavailable => ClientError::Connection(status.message().to_string()),
            tonic::Code::Internal => ClientError::ServerError(status.message().to_string()),
            tonic::Code::NotFound => ClientError::NotFound(status.message().to_string()),
            tonic::Code::AlreadyExists => ClientError::AlreadyExists(status.message().to_string()),
            tonic::Code::InvalidArgument => ClientError::InvalidArgument(status.message().to_string()),
            _ => ClientError::RequestFailed(format!("{}: {}", status.code(), status.message())),
        }
    }
}

impl From<tonic::transport::Error> for ClientError {
    fn from(err: tonic::transport::Error) -> Self {
        ClientError::Transport(format!("Transport error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::{Code, Status};

    #[test]
    fn test_status_already_exists_maps_to_already_exists() {
        let err = ClientError::from(Status::new(Code::AlreadyExists, "schema warren_example"));
        assert!(matches!(err, ClientError::AlreadyExists(_)));
        assert_eq!(err.to_string(), "Already exists: schema warren_example");
    }

    #[test]
    fn test_status_not_found_maps_to_not_found() {
        let err = ClientError::from(Status::new(Code::NotFound, "entity cedd"));
        assert!(matches!(err, ClientError::NotFound(_)));
        assert_eq!(err.to_string(), "Not found: entity cedd");
    }

    #[test]
    fn test_status_invalid_argument_maps_to_invalid_argument() {
        let err = ClientError::from(Status::new(Code::InvalidArgument, "bad dimension"));
        assert!(matches!(err, ClientError::InvalidArgument(_)));
    }

    #[test]
    fn test_status_unauthenticated_maps_to_authentication() {
        let err = ClientError::from(Status::new(Code::Unauthenticated, "missing api key"));
        assert!(matches!(err, ClientError::Authentication(_)));
    }

    #[test]
    fn test_status_unavailable_maps_to_connection() {
        let err = ClientError::from(Status::new(Code::Unavailable, "server down"));
        assert!(matches!(err, ClientError::Connection(_)));
    }

    #[test]
    fn test_status_other_codes_map_to_request_failed() {
        let err = ClientError::from(Status::new(Code::Aborted, "tx conflict"));
        assert!(matches!(err, ClientError::RequestFailed(_)));
    }
}
