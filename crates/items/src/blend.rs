//! blend.txt records
//!
//! # Format
//! ```text
//! section
//! 	item_vnum	50821
//! 	apply_type	CON
//! 	apply_value	5	8	12	16	20
//! 	apply_duration	60	120	180	240	300
//! end
//! ```

use protoforge_core::Vnum;
use protoforge_formats::{BlockWriter, SectionBlock};
use protoforge_tables::item::{apply_short_name, match_apply};
use serde::{Deserialize, Serialize};

pub const BLEND_SLOTS: usize = 5;

/// Random bonus rolled when a blend item is used
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blend {
    pub item_id: Vnum,
    pub apply_type: u32,
    pub values: [i64; BLEND_SLOTS],
    pub durations: [i64; BLEND_SLOTS],
}

impl Blend {
    /// Build a blend from a block; `item_vnum` and `apply_type` are mandatory
    pub fn from_block(block: &SectionBlock) -> Option<Self> {
        let item_id = block.parse_scalar("item_vnum")?;
        let apply_type = block.scalar_value("apply_type")?;

        Some(Self {
            item_id,
            apply_type: match_apply(apply_type).unwrap_or_default(),
            values: slots(block, "apply_value"),
            durations: slots(block, "apply_duration"),
        })
    }

    pub fn write(&self, writer: &mut BlockWriter) {
        writer
            .open_section()
            .scalar("item_vnum", &[self.item_id])
            .scalar("apply_type", &[apply_short_name(self.apply_type)])
            .scalar("apply_value", &self.values)
            .scalar("apply_duration", &self.durations)
            .close_section();
    }
}

fn slots(block: &SectionBlock, tag: &str) -> [i64; BLEND_SLOTS] {
    let values = block.scalar(tag).unwrap_or_default();
    std::array::from_fn(|i| {
        values
            .get(i)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoforge_core::LineEnding;
    use protoforge_formats::split_blocks;

    #[test]
    fn test_blend_section() {
        let text = "section\n\titem_vnum\t501\n\tapply_type\tCON\n\tapply_value\t5\t0\t0\t0\t0\n\tapply_duration\t0\t0\t0\t0\t0\nend\n";
        let blends: Vec<Blend> = split_blocks(text).iter().filter_map(Blend::from_block).collect();

        assert_eq!(
            blends,
            vec![Blend {
                item_id: 501,
                apply_type: 3,
                values: [5, 0, 0, 0, 0],
                durations: [0; BLEND_SLOTS],
            }]
        );
    }

    #[test]
    fn test_missing_item_vnum_drops_block() {
        let text = "section\n\tapply_type\tCON\nend\nsection\n\titem_vnum\t502\n\tapply_type\tAPPLY_STR\nend\n";
        let blends: Vec<Blend> = split_blocks(text).iter().filter_map(Blend::from_block).collect();
        assert_eq!(blends.len(), 1);
        assert_eq!(blends[0].item_id, 502);
        assert_eq!(blends[0].apply_type, 5);
    }

    #[test]
    fn test_write_uses_short_apply_name() {
        let blend = Blend {
            item_id: 50821,
            apply_type: 3,
            values: [5, 8, 12, 16, 20],
            durations: [60, 120, 180, 240, 300],
        };
        let mut writer = BlockWriter::new(LineEnding::Lf);
        blend.write(&mut writer);

        assert_eq!(
            writer.as_str(),
            "section\n\titem_vnum\t50821\n\tapply_type\tCON\n\tapply_value\t5\t8\t12\t16\t20\n\tapply_duration\t60\t120\t180\t240\t300\nend\n"
        );
        let read = Blend::from_block(&split_blocks(writer.as_str())[0]);
        assert_eq!(read, Some(blend));
    }
}
