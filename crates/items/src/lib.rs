//! # Protoforge Items
//!
//! Readers and writers for the item side of the proto file family.
//!
//! ## Files
//! - `item_proto.txt` - item prototypes, three format versions
//! - `item_names.txt`, `itemdesc.txt`, `item_list.txt` - client text files
//! - `blend.txt` - random bonus items
//! - `special_item_group.txt` - chests, bonus tables and quest rewards
//! - `cube.txt` - crafting recipes
//!
//! Everything goes through [`ItemCodec`].

pub mod blend;
pub mod codec;
pub mod cube;
pub mod names;
pub mod proto;
pub mod special;

pub use blend::Blend;
pub use codec::{Cubes, ItemCodec, SpecialItemGroups};
pub use cube::{Cube, CubeMaterial};
pub use names::{ItemDesc, ItemListEntry, ItemName};
pub use proto::Item;
pub use special::{SpecialGroupType, SpecialItemGroup, SpecialItemGroupMember, SpecialTarget};
