//! # Protoforge Constant Tables
//!
//! Named bit flags and enumerations shared by the item and mob codecs.
//!
//! ## Leniency
//!
//! Both lookups accept sloppy hand-edited input:
//!
//! - **Flags**: packing a token the table does not know contributes nothing.
//!   `RARE|BOGUS` packs to the value of `RARE` alone, without an error.
//!   Unknown bits in a mask are dropped when it is unpacked.
//! - **Enumerations**: an unknown token matches nothing and the caller falls
//!   back to a default (usually 0). Subtype lookups under an unknown parent
//!   type also yield nothing.

pub mod enums;
pub mod flags;
pub mod item;
pub mod mob;

pub use enums::{EnumTable, SubtypeTables};
pub use flags::FlagTable;
