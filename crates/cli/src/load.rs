//! Dispatch from a file kind to the matching codec

use anyhow::{bail, Context, Result};
use protoforge_core::{FileKind, FormatVersion, Layout, LineEnding, Vnum};
use protoforge_items::ItemCodec;
use protoforge_mobs::MobCodec;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Parsed rows of one entity type, named after its persistence table
#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    pub rows: Vec<Value>,
}

fn table<T: Serialize>(name: &'static str, rows: &[T]) -> Result<Table> {
    let rows = rows
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("serializing {} rows", name))?;
    Ok(Table { name, rows })
}

/// Everything a command needs to read one file
pub struct Loader {
    items: ItemCodec,
    mobs: MobCodec,
    lookup: HashMap<String, Vnum>,
}

impl Loader {
    pub fn new(line_ending: LineEnding) -> Self {
        Self {
            items: ItemCodec::new(line_ending),
            mobs: MobCodec::new(line_ending),
            lookup: HashMap::new(),
        }
    }

    /// Resolve item names against an item_names file; the first vnum per name wins
    pub fn with_item_names(mut self, path: &Path) -> Result<Self> {
        let names = self
            .items
            .read_item_names(path)
            .with_context(|| format!("reading item names from {:?}", path))?;
        for name in names {
            self.lookup.entry(name.name).or_insert(name.vnum);
        }
        info!("Loaded {} item names for lookups", self.lookup.len());
        Ok(self)
    }

    pub async fn load(&self, kind: FileKind, path: &Path, version: FormatVersion) -> Result<Vec<Table>> {
        let tables = match kind {
            FileKind::ItemProto => vec![table("item", &self.items.read_item_proto(path, version)?)?],
            FileKind::ItemNames => vec![table("item_name", &self.items.read_item_names(path)?)?],
            FileKind::ItemDesc => vec![table("item_desc", &self.items.read_item_desc(path)?)?],
            FileKind::ItemList => vec![table("item_list", &self.items.read_item_list(path)?)?],
            FileKind::Blend => vec![table("blend", &self.items.read_blend(path)?)?],
            FileKind::SpecialItemGroup => {
                let rows = self.items.read_special_item_groups(path, &self.lookup).await?;
                vec![
                    table("special_item_group", &rows.headers)?,
                    table("special_item_group_member", &rows.members)?,
                ]
            }
            FileKind::Cube => {
                let rows = self.items.read_cubes(path)?;
                vec![table("cube", &rows.headers)?, table("cube_material", &rows.members)?]
            }
            FileKind::MobProto => vec![table("mob", &self.mobs.read_mob_proto(path, version)?)?],
            FileKind::MobNames => vec![table("mob_name", &self.mobs.read_mob_names(path)?)?],
            FileKind::MobDropItem => {
                let rows = self.mobs.read_drop_items(path, &self.lookup).await?;
                vec![
                    table("mob_drop_group", &rows.headers)?,
                    table("mob_drop_item", &rows.members)?,
                ]
            }
            FileKind::CommonDropItem => {
                vec![table("common_drop", &self.mobs.read_common_drops(path, &self.lookup).await?)?]
            }
            FileKind::MobGroup => {
                let rows = self.mobs.read_groups(path)?;
                vec![table("mob_group", &rows.headers)?, table("mob_group_member", &rows.members)?]
            }
            FileKind::MobGroupGroup => {
                let rows = self.mobs.read_group_groups(path)?;
                vec![
                    table("mob_group_group", &rows.headers)?,
                    table("mob_group_group_member", &rows.members)?,
                ]
            }
        };
        Ok(tables)
    }

    /// Re-encode a proto table from one column layout to another
    pub fn convert(
        &self,
        kind: FileKind,
        input: &Path,
        output: &Path,
        from: FormatVersion,
        to: FormatVersion,
    ) -> Result<usize> {
        let (count, bytes) = match kind {
            FileKind::ItemProto => {
                let items = self.items.read_item_proto(input, from)?;
                (items.len(), self.items.create_item_proto(&items, to))
            }
            FileKind::MobProto => {
                let mobs = self.mobs.read_mob_proto(input, from)?;
                (mobs.len(), self.mobs.create_mob_proto(&mobs, to))
            }
            other => match other.layout() {
                Layout::Sectioned => bail!("{} is a block file, it has no column layouts", other),
                Layout::Tabular => bail!("{} has a single column layout, only item_proto and mob_proto convert", other),
            },
        };

        std::fs::write(output, &bytes).with_context(|| format!("writing {:?}", output))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoforge_items::{Item, ItemName};

    fn write_names(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("item_names.txt");
        let names = vec![
            ItemName { vnum: 30203, vnum_end: None, name: "Sword of Flame".to_string() },
            ItemName { vnum: 30204, vnum_end: None, name: "Sword of Flame".to_string() },
        ];
        std::fs::write(&path, ItemCodec::default().create_item_names(&names)).unwrap();
        path
    }

    #[tokio::test]
    async fn test_drop_items_use_item_names() {
        let temp_dir = tempfile::tempdir().unwrap();
        let names = write_names(temp_dir.path());
        let drops = temp_dir.path().join("mob_drop_item.txt");
        std::fs::write(&drops, "Group\tWolf\r\n{\r\n\tMob\t101\r\n\tType\tdrop\r\n\t1\tSword of Flame\t1\t5\r\n}\r\n").unwrap();

        let loader = Loader::new(LineEnding::Crlf).with_item_names(&names).unwrap();
        let tables = loader.load(FileKind::MobDropItem, &drops, FormatVersion::Legacy).await.unwrap();

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].name, "mob_drop_item");
        assert_eq!(tables[1].rows[0]["item"], serde_json::json!(30203));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let loader = Loader::new(LineEnding::Crlf);
        let result = loader
            .load(FileKind::Blend, &temp_dir.path().join("blend.txt"), FormatVersion::Legacy)
            .await;
        assert!(result.is_err());
    }

    #[test]
    fn test_convert_item_proto() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("item_proto.txt");
        let output = temp_dir.path().join("item_proto_modern.txt");
        let codec = ItemCodec::default();
        let items = vec![Item { vnum: 10, name: "Sword".to_string(), ..Default::default() }];
        std::fs::write(&input, codec.create_item_proto(&items, FormatVersion::Legacy)).unwrap();

        let loader = Loader::new(LineEnding::Crlf);
        let count = loader
            .convert(FileKind::ItemProto, &input, &output, FormatVersion::Legacy, FormatVersion::Modern)
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(codec.read_item_proto(&output, FormatVersion::Modern).unwrap(), items);
    }

    #[test]
    fn test_convert_rejects_single_layout_kinds() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("blend.txt");
        let loader = Loader::new(LineEnding::Crlf);
        let result = loader.convert(FileKind::Blend, &path, &path, FormatVersion::Legacy, FormatVersion::Modern);
        assert!(result.unwrap_err().to_string().contains("block file"));

        let path = temp_dir.path().join("item_names.txt");
        let result = loader.convert(FileKind::ItemNames, &path, &path, FormatVersion::Legacy, FormatVersion::Modern);
        assert!(result.unwrap_err().to_string().contains("single column layout"));
        assert!(!path.exists());
    }
}
