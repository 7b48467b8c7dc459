//! Core error types for Protoforge

/// Errors raised by the codecs.
///
/// Bad file content is tolerated and never shows up here. Only inaccessible
/// data, caller mistakes and collaborator failures do.
#[derive(thiserror::Error, Debug)]
pub enum ProtoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Unknown file kind: {0}")]
    UnknownKind(String),

    #[error("Unknown format version: {0}")]
    UnknownVersion(String),

    #[error("Name lookup failed: {0}")]
    Lookup(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ProtoError>;
