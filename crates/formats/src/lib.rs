//! # Protoforge Formats
//!
//! Generic machinery shared by the item and mob codecs.
//!
//! ## Modules
//!
//! - `tabular` - delimiter separated proto files (`item_proto`, names, lists)
//! - `section` - `Group name { ... }` and `section ... end` block files
//! - `resolver` - second pass that turns name references into vnums
//! - `persist` - column-prefixed rows for the bulk insert layer
//!
//! ## Failure policy
//!
//! Proto files are hand-maintained design artifacts. A row or block that is
//! missing a mandatory field is dropped without an error, and an unknown
//! name reference is logged and dropped. Only a file that cannot be read at
//! all is an error.

pub mod persist;
pub mod resolver;
pub mod section;
pub mod tabular;

pub use persist::{chunked, prefixed_row, PersistRow};
pub use resolver::{resolve_references, NameLookup, Resolvable};
pub use section::{quoted, split_blocks, tokenize, BlockRows, BlockWriter, MemberLine, SectionBlock};
pub use tabular::{
    format_vnum, read_table, write_rows, write_table, ProtoRow, TabularReader, TabularRecord,
};

use protoforge_core::{FileKind, Result};
use std::path::Path;
use tracing::debug;

/// Read a proto file and decode it with the codepage of `kind`
///
/// This is the only place where a proto read can fail: content problems are
/// tolerated further down, an unreadable file is not.
pub fn read_source(path: &Path, kind: FileKind) -> Result<String> {
    let bytes = std::fs::read(path)?;
    debug!("Read {} ({} bytes) from {:?}", kind, bytes.len(), path);
    Ok(kind.codepage().decode(&bytes))
}
