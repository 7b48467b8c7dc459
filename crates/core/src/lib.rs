//! Protoforge Core - shared types for the proto file codecs

mod codepage;
mod error;
mod types;

pub use codepage::*;
pub use error::*;
pub use types::*;
