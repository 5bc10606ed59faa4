use thiserror::Error;

/// Response bodies that do not match the expected wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("missing field `{0}`")]
    MissingField(String),
    #[error("invalid format for field `{0}`")]
    InvalidFormat(String),
    #[error("malformed body: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Harvest API error: {status} {message}")]
    Status { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Network(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type HarvestResult<T> = Result<T, HarvestError>;

const MISSING_FIELD_PREFIX: &str = "missing field `";
pub(crate) const INVALID_FORMAT_PREFIX: &str = "invalid format for field `";

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        if let Some(field) = quoted_after(&message, MISSING_FIELD_PREFIX) {
            return DecodeError::MissingField(field);
        }
        if let Some(field) = quoted_after(&message, INVALID_FORMAT_PREFIX) {
            return DecodeError::InvalidFormat(field);
        }
        DecodeError::Malformed(message)
    }
}

fn quoted_after(message: &str, prefix: &str) -> Option<String> {
    let rest = message.strip_prefix(prefix)?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}
