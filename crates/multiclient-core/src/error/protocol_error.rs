//! Protocol errors - failures decoding or encoding packets

use thiserror::Error;

/// Errors raised while converting packets to and from their wire form
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Malformed packet: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Packet batch must be a JSON array")]
    NotABatch,
}

impl ProtocolError {
    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "MALFORMED_PACKET",
            Self::NotABatch => "NOT_A_BATCH",
        }
    }
}
