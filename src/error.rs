// src/error.rs

use thiserror::Error;

/// Pipeline failure taxonomy. Any variant aborts the run before the output
/// file is touched; the caller only sees a message and a non-zero exit.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: status {status}")]
    Fetch { status: u16 },

    /// The body failed the content-plausibility check (too short, or the
    /// schedule object is absent). Usually an Incapsula challenge page.
    #[error("protection page received instead of content ({size} bytes)")]
    ProtectionDetected { size: usize },

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("invalid JSON in {block} block: {source}")]
    Decode {
        block: &'static str,
        source: serde_json::Error,
    },

    #[error("failed to encode output document: {0}")]
    Encode(serde_json::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Embedded-block extraction failures. Fatal for the fact block; the preset
/// block degrades to an empty object instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("marker `{0}` not found")]
    MarkerNotFound(String),

    #[error("no object literal after marker `{0}`")]
    ObjectNotFound(String),

    #[error("unterminated object literal after marker `{0}`")]
    Unterminated(String),
}
