//! Mob file orchestration
//!
//! Same shape as the item codec: `read_*` decodes a file from disk,
//! `parse_*` works on decoded text, `create_*` returns encoded bytes.

use crate::common::{read_common_drops, write_common_drops, CommonDrop};
use crate::drop::{DropItem, MobDropGroup};
use crate::group::{MobGroup, MobGroupGroup, MobGroupGroupMember, MobGroupMember};
use crate::names::MobName;
use crate::proto::Mob;
use bytes::Bytes;
use protoforge_core::{FileKind, FormatVersion, LineEnding, Result};
use protoforge_formats::{
    read_source, read_table, resolve_references, split_blocks, write_table, BlockRows, BlockWriter,
    NameLookup, SectionBlock,
};
use std::path::Path;
use tracing::debug;

/// Drop groups with their items
pub type MobDrops = BlockRows<MobDropGroup, DropItem>;

/// Spawn groups with their mobs
pub type MobGroups = BlockRows<MobGroup, MobGroupMember>;

/// Groups of spawn groups with their weighted entries
pub type MobGroupGroups = BlockRows<MobGroupGroup, MobGroupGroupMember>;

/// Reads and writes every mob side proto file
#[derive(Debug, Clone, Copy, Default)]
pub struct MobCodec {
    line_ending: LineEnding,
}

impl MobCodec {
    pub fn new(line_ending: LineEnding) -> Self {
        Self { line_ending }
    }

    pub fn read_mob_proto<P: AsRef<Path>>(&self, path: P, version: FormatVersion) -> Result<Vec<Mob>> {
        let text = read_source(path.as_ref(), FileKind::MobProto)?;
        Ok(self.parse_mob_proto(&text, version))
    }

    pub fn parse_mob_proto(&self, text: &str, version: FormatVersion) -> Vec<Mob> {
        let mobs: Vec<Mob> = read_table(text, version).collect();
        debug!("Parsed {} mobs ({})", mobs.len(), version);
        mobs
    }

    pub fn create_mob_proto(&self, mobs: &[Mob], version: FormatVersion) -> Bytes {
        write_table(mobs, version, self.line_ending)
    }

    pub fn read_mob_names<P: AsRef<Path>>(&self, path: P) -> Result<Vec<MobName>> {
        let text = read_source(path.as_ref(), FileKind::MobNames)?;
        Ok(self.parse_mob_names(&text))
    }

    pub fn parse_mob_names(&self, text: &str) -> Vec<MobName> {
        read_table(text, FormatVersion::default()).collect()
    }

    pub fn create_mob_names(&self, names: &[MobName]) -> Bytes {
        write_table(names, FormatVersion::default(), self.line_ending)
    }

    /// Read drop groups and resolve item names with one lookup
    pub async fn read_drop_items<P, L>(&self, path: P, lookup: &L) -> Result<MobDrops>
    where
        P: AsRef<Path>,
        L: NameLookup + ?Sized,
    {
        let text = read_source(path.as_ref(), FileKind::MobDropItem)?;
        self.parse_drop_items(&text, lookup).await
    }

    /// Groups are numbered from 1 in file order, skipping dropped blocks
    pub async fn parse_drop_items<L>(&self, text: &str, lookup: &L) -> Result<MobDrops>
    where
        L: NameLookup + ?Sized,
    {
        let mut rows = MobDrops::default();
        for block in group_blocks(text) {
            let id = rows.headers.len() as u32 + 1;
            if let Some((group, items)) = MobDropGroup::from_block(&block, id) {
                rows.headers.push(group);
                rows.members.extend(items);
            }
        }

        rows.members = resolve_references(rows.members, lookup).await?;
        debug!(
            "Parsed {} drop groups with {} items",
            rows.headers.len(),
            rows.members.len()
        );
        Ok(rows)
    }

    /// Write drop groups with their items, matched by group id
    pub fn create_drop_items(&self, groups: &[MobDropGroup], items: &[DropItem]) -> Bytes {
        let mut writer = BlockWriter::new(self.line_ending);
        for group in groups {
            group.write(&mut writer, items.iter().filter(|item| item.group_id == group.id));
        }
        writer.finish(FileKind::MobDropItem)
    }

    pub async fn read_common_drops<P, L>(&self, path: P, lookup: &L) -> Result<Vec<CommonDrop>>
    where
        P: AsRef<Path>,
        L: NameLookup + ?Sized,
    {
        let text = read_source(path.as_ref(), FileKind::CommonDropItem)?;
        self.parse_common_drops(&text, lookup).await
    }

    pub async fn parse_common_drops<L>(&self, text: &str, lookup: &L) -> Result<Vec<CommonDrop>>
    where
        L: NameLookup + ?Sized,
    {
        let drops = resolve_references(read_common_drops(text), lookup).await?;
        debug!("Parsed {} common drops", drops.len());
        Ok(drops)
    }

    pub fn create_common_drops(&self, drops: &[CommonDrop]) -> Bytes {
        write_common_drops(drops, self.line_ending)
    }

    pub fn read_groups<P: AsRef<Path>>(&self, path: P) -> Result<MobGroups> {
        let text = read_source(path.as_ref(), FileKind::MobGroup)?;
        Ok(self.parse_groups(&text))
    }

    pub fn parse_groups(&self, text: &str) -> MobGroups {
        let mut rows = MobGroups::default();
        for (group, members) in group_blocks(text).iter().filter_map(MobGroup::from_block) {
            rows.headers.push(group);
            rows.members.extend(members);
        }
        debug!("Parsed {} mob groups", rows.headers.len());
        rows
    }

    /// Write spawn groups with their mobs, matched by group vnum
    pub fn create_groups(&self, groups: &[MobGroup], members: &[MobGroupMember]) -> Bytes {
        let mut writer = BlockWriter::new(self.line_ending);
        for group in groups {
            group.write(
                &mut writer,
                members.iter().filter(|member| member.group_vnum == group.vnum),
            );
        }
        writer.finish(FileKind::MobGroup)
    }

    pub fn read_group_groups<P: AsRef<Path>>(&self, path: P) -> Result<MobGroupGroups> {
        let text = read_source(path.as_ref(), FileKind::MobGroupGroup)?;
        Ok(self.parse_group_groups(&text))
    }

    pub fn parse_group_groups(&self, text: &str) -> MobGroupGroups {
        let mut rows = MobGroupGroups::default();
        for (group, members) in group_blocks(text).iter().filter_map(MobGroupGroup::from_block) {
            rows.headers.push(group);
            rows.members.extend(members);
        }
        debug!("Parsed {} groups of groups", rows.headers.len());
        rows
    }

    pub fn create_group_groups(
        &self,
        groups: &[MobGroupGroup],
        members: &[MobGroupGroupMember],
    ) -> Bytes {
        let mut writer = BlockWriter::new(self.line_ending);
        for group in groups {
            group.write(
                &mut writer,
                members.iter().filter(|member| member.group_group_vnum == group.vnum),
            );
        }
        writer.finish(FileKind::MobGroupGroup)
    }
}

fn group_blocks(text: &str) -> Vec<SectionBlock> {
    split_blocks(text).into_iter().filter(|block| !block.is_section()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoforge_core::{ProtoError, Reference, Vnum};
    use protoforge_formats::TabularRecord;
    use std::collections::HashMap;

    fn codec() -> MobCodec {
        MobCodec::new(LineEnding::Lf)
    }

    fn lookup() -> HashMap<String, Vnum> {
        HashMap::from([("Sword of Flame".to_string(), 30203)])
    }

    #[test]
    fn test_read_mob_proto_from_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("mob_proto.txt");
        let header = Mob::columns(FormatVersion::Classic).join("\t");
        let text = format!("{}\r\n101\t들개\tPAWN\tMONSTER\tMELEE\t1\r\n", header);
        std::fs::write(&path, FileKind::MobProto.codepage().encode(&text)).unwrap();

        let mobs = codec().read_mob_proto(&path, FormatVersion::Classic).unwrap();
        assert_eq!(mobs.len(), 1);
        assert_eq!(mobs[0].vnum, 101);
        assert_eq!(mobs[0].name, "들개");
        assert_eq!(mobs[0].level, 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = codec()
            .read_drop_items(temp_dir.path().join("mob_drop_item.txt"), &lookup())
            .await;
        assert!(matches!(result, Err(ProtoError::Io(_))));
    }

    #[tokio::test]
    async fn test_drop_items_resolve_names() {
        let text = "Group\tWildDog\n{\n\tMob\t101\n\tType\tdrop\n\t1\tSword of Flame\t1\t0.5\n\t2\tWooden Shield\t1\t2\n}\n\
            Group\tBroken\n{\n\tType\tdrop\n}\n\
            Group\tWolf\n{\n\tMob\t102\n\tType\tlimit\n\tlevel_limit\t30\n\t1\t27001\t5\t10\n}\n";

        let rows = codec().parse_drop_items(text, &lookup()).await.unwrap();
        assert_eq!(rows.headers.len(), 2);
        assert_eq!(rows.headers[1].id, 2);
        assert_eq!(rows.headers[1].mob_vnum, 102);

        assert_eq!(rows.members.len(), 2);
        assert_eq!(rows.members[0].item, Reference::Vnum(30203));
        assert_eq!(rows.members[1].group_id, 2);
    }

    #[tokio::test]
    async fn test_drop_items_export_is_stable() {
        let text = "Group\tWildDog\n{\n\tMob\t101\n\tType\tkill\n\tkill_drop\t50\n\t1\t27001\t1\t10\t5\n}\nGroup\tWolf\n{\n\tMob\t102\n\tType\tdrop\n\t1\t27002\t2\t0.5\n}\n";

        let rows = codec().parse_drop_items(text, &lookup()).await.unwrap();
        let bytes = codec().create_drop_items(&rows.headers, &rows.members);
        assert_eq!(FileKind::MobDropItem.codepage().decode(&bytes), text);
    }

    #[tokio::test]
    async fn test_common_drops_from_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("common_drop_item.txt");
        std::fs::write(&path, "Potion\t1\t15\t1\t27001\t\t\t\t\t\tBook\t30\t60\t0.1\tSword of Flame\r\n").unwrap();

        let drops = codec().read_common_drops(&path, &lookup()).await.unwrap();
        assert_eq!(drops.len(), 2);
        assert_eq!(drops[1].rank, 2);
        assert_eq!(drops[1].item, Reference::Vnum(30203));
    }

    #[test]
    fn test_groups_round_trip() {
        let text = "Group\tWolfPack\n{\n\tVnum\t101\n\tLeader\tGrey Wolf\t102\n\t1\tWolf\t101\n\t2\tWolf\t101\n}\nGroup\tBears\n{\n\tVnum\t102\n\tLeader\tBear\t110\n}\n";

        let rows = codec().parse_groups(text);
        assert_eq!(rows.headers.len(), 2);
        assert_eq!(rows.members.len(), 4);

        let bytes = codec().create_groups(&rows.headers, &rows.members);
        assert_eq!(FileKind::MobGroup.codepage().decode(&bytes), text);
    }

    #[test]
    fn test_group_groups_round_trip() {
        let text = "Group\tPacks\n{\n\tVnum\t1001\n\t1\t101\t60\n\t2\t102\t40\n}\n";

        let rows = codec().parse_group_groups(text);
        assert_eq!(rows.members.len(), 2);
        assert!(rows.members.iter().all(|member| member.group_group_vnum == 1001));

        let bytes = codec().create_group_groups(&rows.headers, &rows.members);
        assert_eq!(FileKind::MobGroupGroup.codepage().decode(&bytes), text);
    }
}
