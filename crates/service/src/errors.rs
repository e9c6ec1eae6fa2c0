use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

/// Failure talking to the address service. Non-2xx responses keep the status
/// line and body text for diagnostic logging upstream.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("address service returned {status} {status_text}: {body}")]
    Status { status: u16, status_text: String, body: String },
    #[error("address service transport failure: {0}")]
    Transport(String),
    #[error("address service response decode failure: {0}")]
    Decode(String),
}
