//! # Protoforge Mobs
//!
//! Readers and writers for the mob side of the proto file family.
//!
//! ## Files
//! - `mob_proto.txt` - mob prototypes, three format versions
//! - `mob_names.txt` - localized names
//! - `mob_drop_item.txt` - per mob drop groups
//! - `common_drop_item.txt` - drops shared by rank and level band
//! - `group.txt`, `group_group.txt` - spawn groups
//!
//! Everything goes through [`MobCodec`].

pub mod codec;
pub mod common;
pub mod drop;
pub mod group;
pub mod names;
pub mod proto;

pub use codec::{MobCodec, MobDrops, MobGroupGroups, MobGroups};
pub use common::CommonDrop;
pub use drop::{DropItem, DropType, MobDropGroup};
pub use group::{MobGroup, MobGroupGroup, MobGroupGroupMember, MobGroupMember};
pub use names::MobName;
pub use proto::Mob;
