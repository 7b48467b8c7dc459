//! cube.txt records
//!
//! # Format
//! ```text
//! section
//! npc	20018
//! item	30050	2
//! item	30051	1
//! reward	30052	1
//! gold	10000
//! percent	50
//! end
//! ```

use protoforge_core::Vnum;
use protoforge_formats::{BlockWriter, SectionBlock};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A crafting recipe offered by an npc
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    /// Position of the recipe in the file, from 1
    pub id: u32,
    pub npc_vnum: Vnum,
    pub reward_vnum: Vnum,
    pub reward_count: u32,
    pub gold: i64,
    pub percent: u32,
}

/// An input item of a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeMaterial {
    pub cube_id: u32,
    pub item_vnum: Vnum,
    pub count: u32,
}

impl Cube {
    /// Build a recipe from a block
    ///
    /// `npc`, `reward` and `percent` are mandatory. `item` lines missing a
    /// count are skipped.
    pub fn from_block(block: &SectionBlock, id: u32) -> Option<(Self, Vec<CubeMaterial>)> {
        let Some(cube) = Self::header(block, id) else {
            trace!("cube at line {} is incomplete", block.line);
            return None;
        };

        let materials = block
            .scalars("item")
            .filter_map(|values| {
                Some(CubeMaterial {
                    cube_id: id,
                    item_vnum: values.first()?.parse().ok()?,
                    count: values.get(1)?.parse().ok()?,
                })
            })
            .collect();

        Some((cube, materials))
    }

    fn header(block: &SectionBlock, id: u32) -> Option<Self> {
        let reward = block.scalar("reward")?;
        Some(Self {
            id,
            npc_vnum: block.parse_scalar("npc")?,
            reward_vnum: reward.first()?.parse().ok()?,
            reward_count: reward.get(1).and_then(|count| count.parse().ok()).unwrap_or(1),
            gold: block.parse_scalar("gold").unwrap_or_default(),
            percent: block.parse_scalar("percent")?,
        })
    }

    pub fn write<'a, I>(&self, writer: &mut BlockWriter, materials: I)
    where
        I: IntoIterator<Item = &'a CubeMaterial>,
    {
        writer.open_section().scalar("npc", &[self.npc_vnum]);
        for material in materials {
            writer.scalar("item", &[material.item_vnum, material.count]);
        }
        writer.scalar("reward", &[self.reward_vnum, self.reward_count]);
        if self.gold > 0 {
            writer.scalar("gold", &[self.gold]);
        }
        writer.scalar("percent", &[self.percent]).close_section();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoforge_core::LineEnding;
    use protoforge_formats::split_blocks;

    const RECIPES: &str = "section\nnpc\t20018\nitem\t30050\t2\nitem\t30051\t1\nreward\t30052\t1\ngold\t10000\npercent\t50\nend\n\
        section\nnpc\t20018\nitem\t30053\t1\npercent\t30\nend\n\
        section\nnpc 20017\nitem 30060 5\nreward 30061 2\npercent 100\nend\n";

    fn parse(text: &str) -> Vec<(Cube, Vec<CubeMaterial>)> {
        let mut id = 0;
        split_blocks(text)
            .iter()
            .filter_map(|block| {
                let parsed = Cube::from_block(block, id + 1)?;
                id += 1;
                Some(parsed)
            })
            .collect()
    }

    #[test]
    fn test_cube_sections() {
        let cubes = parse(RECIPES);
        assert_eq!(cubes.len(), 2);

        let (first, materials) = &cubes[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.npc_vnum, 20018);
        assert_eq!(first.gold, 10000);
        assert_eq!(materials.len(), 2);
        assert_eq!(materials[1], CubeMaterial { cube_id: 1, item_vnum: 30051, count: 1 });

        let (second, materials) = &cubes[1];
        assert_eq!(second.id, 2);
        assert_eq!(second.reward_count, 2);
        assert_eq!(second.gold, 0);
        assert_eq!(materials[0].count, 5);
    }

    #[test]
    fn test_write_then_read() {
        let cubes = parse(RECIPES);
        let mut writer = BlockWriter::new(LineEnding::Crlf);
        for (cube, materials) in &cubes {
            cube.write(&mut writer, materials);
        }
        assert_eq!(parse(writer.as_str()), cubes);
    }
}
