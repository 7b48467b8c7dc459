//! Item file orchestration
//!
//! Every `read_*` opens and decodes a file, then hands it to the matching
//! `parse_*`. Every `create_*` returns the encoded file contents.

use crate::blend::Blend;
use crate::cube::{Cube, CubeMaterial};
use crate::names::{ItemDesc, ItemListEntry, ItemName};
use crate::proto::Item;
use crate::special::{SpecialItemGroup, SpecialItemGroupMember};
use bytes::Bytes;
use protoforge_core::{FileKind, FormatVersion, LineEnding, Result};
use protoforge_formats::{
    read_source, read_table, resolve_references, split_blocks, write_table, BlockRows, BlockWriter,
    NameLookup,
};
use std::path::Path;
use tracing::debug;

/// Special item groups with their member lines
pub type SpecialItemGroups = BlockRows<SpecialItemGroup, SpecialItemGroupMember>;

/// Cube recipes with their input items
pub type Cubes = BlockRows<Cube, CubeMaterial>;

/// Reads and writes every item side proto file
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemCodec {
    line_ending: LineEnding,
}

impl ItemCodec {
    pub fn new(line_ending: LineEnding) -> Self {
        Self { line_ending }
    }

    pub fn read_item_proto<P: AsRef<Path>>(&self, path: P, version: FormatVersion) -> Result<Vec<Item>> {
        let text = read_source(path.as_ref(), FileKind::ItemProto)?;
        Ok(self.parse_item_proto(&text, version))
    }

    pub fn parse_item_proto(&self, text: &str, version: FormatVersion) -> Vec<Item> {
        let items: Vec<Item> = read_table(text, version).collect();
        debug!("Parsed {} items ({})", items.len(), version);
        items
    }

    pub fn create_item_proto(&self, items: &[Item], version: FormatVersion) -> Bytes {
        write_table(items, version, self.line_ending)
    }

    pub fn read_item_names<P: AsRef<Path>>(&self, path: P) -> Result<Vec<ItemName>> {
        let text = read_source(path.as_ref(), FileKind::ItemNames)?;
        Ok(self.parse_item_names(&text))
    }

    pub fn parse_item_names(&self, text: &str) -> Vec<ItemName> {
        read_table(text, FormatVersion::default()).collect()
    }

    pub fn create_item_names(&self, names: &[ItemName]) -> Bytes {
        write_table(names, FormatVersion::default(), self.line_ending)
    }

    pub fn read_item_desc<P: AsRef<Path>>(&self, path: P) -> Result<Vec<ItemDesc>> {
        let text = read_source(path.as_ref(), FileKind::ItemDesc)?;
        Ok(self.parse_item_desc(&text))
    }

    pub fn parse_item_desc(&self, text: &str) -> Vec<ItemDesc> {
        read_table(text, FormatVersion::default()).collect()
    }

    pub fn create_item_desc(&self, descs: &[ItemDesc]) -> Bytes {
        write_table(descs, FormatVersion::default(), self.line_ending)
    }

    pub fn read_item_list<P: AsRef<Path>>(&self, path: P) -> Result<Vec<ItemListEntry>> {
        let text = read_source(path.as_ref(), FileKind::ItemList)?;
        Ok(self.parse_item_list(&text))
    }

    pub fn parse_item_list(&self, text: &str) -> Vec<ItemListEntry> {
        read_table(text, FormatVersion::default()).collect()
    }

    /// Entries without an icon are left out
    pub fn create_item_list(&self, entries: &[ItemListEntry]) -> Bytes {
        write_table(entries, FormatVersion::default(), self.line_ending)
    }

    pub fn read_blend<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Blend>> {
        let text = read_source(path.as_ref(), FileKind::Blend)?;
        Ok(self.parse_blend(&text))
    }

    pub fn parse_blend(&self, text: &str) -> Vec<Blend> {
        let blends: Vec<Blend> = split_blocks(text)
            .iter()
            .filter(|block| block.is_section())
            .filter_map(Blend::from_block)
            .collect();
        debug!("Parsed {} blend entries", blends.len());
        blends
    }

    pub fn create_blend(&self, blends: &[Blend]) -> Bytes {
        let mut writer = BlockWriter::new(self.line_ending);
        for blend in blends {
            blend.write(&mut writer);
        }
        writer.finish(FileKind::Blend)
    }

    /// Read special item groups and resolve item names with one lookup
    pub async fn read_special_item_groups<P, L>(&self, path: P, lookup: &L) -> Result<SpecialItemGroups>
    where
        P: AsRef<Path>,
        L: NameLookup + ?Sized,
    {
        let text = read_source(path.as_ref(), FileKind::SpecialItemGroup)?;
        self.parse_special_item_groups(&text, lookup).await
    }

    pub async fn parse_special_item_groups<L>(&self, text: &str, lookup: &L) -> Result<SpecialItemGroups>
    where
        L: NameLookup + ?Sized,
    {
        let mut rows = SpecialItemGroups::default();
        for block in split_blocks(text).iter().filter(|block| !block.is_section()) {
            if let Some((group, members)) = SpecialItemGroup::from_block(block) {
                rows.headers.push(group);
                rows.members.extend(members);
            }
        }

        rows.members = resolve_references(rows.members, lookup).await?;
        debug!(
            "Parsed {} special item groups with {} members",
            rows.headers.len(),
            rows.members.len()
        );
        Ok(rows)
    }

    /// Write groups with their members, matched by group vnum
    pub fn create_special_item_groups(
        &self,
        groups: &[SpecialItemGroup],
        members: &[SpecialItemGroupMember],
    ) -> Bytes {
        let mut writer = BlockWriter::new(self.line_ending);
        for group in groups {
            group.write(
                &mut writer,
                members.iter().filter(|member| member.group_vnum == group.vnum),
            );
        }
        writer.finish(FileKind::SpecialItemGroup)
    }

    pub fn read_cubes<P: AsRef<Path>>(&self, path: P) -> Result<Cubes> {
        let text = read_source(path.as_ref(), FileKind::Cube)?;
        Ok(self.parse_cubes(&text))
    }

    /// Recipes are numbered from 1 in file order, skipping dropped blocks
    pub fn parse_cubes(&self, text: &str) -> Cubes {
        let mut rows = Cubes::default();
        for block in split_blocks(text).iter().filter(|block| block.is_section()) {
            let id = rows.headers.len() as u32 + 1;
            if let Some((cube, materials)) = Cube::from_block(block, id) {
                rows.headers.push(cube);
                rows.members.extend(materials);
            }
        }
        debug!("Parsed {} cube recipes", rows.headers.len());
        rows
    }

    /// Write recipes with their materials, matched by cube id
    pub fn create_cubes(&self, cubes: &[Cube], materials: &[CubeMaterial]) -> Bytes {
        let mut writer = BlockWriter::new(self.line_ending);
        for cube in cubes {
            cube.write(
                &mut writer,
                materials.iter().filter(|material| material.cube_id == cube.id),
            );
        }
        writer.finish(FileKind::Cube)
    }
}
