//! mob_drop_item.txt records
//!
//! # Format
//! ```text
//! Group	WildDog
//! {
//! 	Mob	101
//! 	Type	kill
//! 	kill_drop	50
//! 	level_limit	10
//! 	1	27001	1	10	5
//! 	2	Sword of Flame	1	0.5	0
//! }
//! ```
//!
//! Member lines are `index item count probability [rare]`. The item may be
//! a vnum or a name. The rare column only means something for `kill` groups.

use protoforge_core::{Reference, Vnum};
use protoforge_formats::{BlockWriter, MemberLine, Resolvable, SectionBlock};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// When a drop group is rolled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropType {
    Drop,
    Kill,
    Limit,
    ThiefGloves,
}

impl DropType {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "drop" => Some(DropType::Drop),
            "kill" => Some(DropType::Kill),
            "limit" => Some(DropType::Limit),
            "thiefgloves" => Some(DropType::ThiefGloves),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DropType::Drop => "drop",
            DropType::Kill => "kill",
            DropType::Limit => "limit",
            DropType::ThiefGloves => "thiefgloves",
        }
    }
}

/// Header of one drop block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobDropGroup {
    /// Position of the block in the file, from 1
    pub id: u32,
    pub name: String,
    pub mob_vnum: Vnum,
    pub drop_type: DropType,
    pub level_limit: u32,
    pub kill_drop: u32,
}

/// One item of a drop block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropItem {
    pub group_id: u32,
    pub index: u32,
    pub item: Reference,
    pub count: u32,
    pub probability: f64,
    pub rare_pct: f64,
}

impl MobDropGroup {
    /// Build a drop group from a block; `Mob` and a known `Type` are mandatory
    pub fn from_block(block: &SectionBlock, id: u32) -> Option<(Self, Vec<DropItem>)> {
        let mob_vnum = block.parse_scalar::<Vnum>("Mob");
        let drop_type = block.scalar_value("Type").and_then(DropType::parse);
        let (Some(mob_vnum), Some(drop_type)) = (mob_vnum, drop_type) else {
            trace!("drop group at line {} has no Mob or Type", block.line);
            return None;
        };

        let group = Self {
            id,
            name: block.name.clone().unwrap_or_default(),
            mob_vnum,
            drop_type,
            level_limit: block.parse_scalar("level_limit").unwrap_or_default(),
            kill_drop: block.parse_scalar("kill_drop").unwrap_or_default(),
        };
        let items = block
            .members()
            .filter_map(|line| DropItem::from_line(&group, &line))
            .collect();

        Some((group, items))
    }

    pub fn write<'a, I>(&self, writer: &mut BlockWriter, items: I)
    where
        I: IntoIterator<Item = &'a DropItem>,
    {
        writer
            .open_group(&self.name)
            .scalar("Mob", &[self.mob_vnum])
            .scalar("Type", &[self.drop_type.as_str()]);
        if self.kill_drop > 0 {
            writer.scalar("kill_drop", &[self.kill_drop]);
        }
        if self.level_limit > 0 {
            writer.scalar("level_limit", &[self.level_limit]);
        }
        for item in items {
            let mut fields = vec![item.item.to_string(), item.count.to_string(), item.probability.to_string()];
            if self.drop_type == DropType::Kill {
                fields.push(item.rare_pct.to_string());
            }
            writer.member(item.index, fields.as_slice());
        }
        writer.close_group();
    }
}

impl DropItem {
    fn from_line(group: &MobDropGroup, line: &MemberLine<'_>) -> Option<Self> {
        let item = line.field(0).filter(|token| !token.is_empty())?;
        let rare_pct = match group.drop_type {
            DropType::Kill => line.parse(3).unwrap_or_default(),
            _ => 0.0,
        };

        Some(Self {
            group_id: group.id,
            index: line.index,
            item: Reference::parse(item),
            count: line.parse(1)?,
            probability: line.parse(2)?,
            rare_pct,
        })
    }
}

impl Resolvable for DropItem {
    fn pending_name(&self) -> Option<&str> {
        self.item.name()
    }

    fn resolve(&mut self, vnum: Vnum) {
        self.item = Reference::Vnum(vnum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoforge_core::LineEnding;
    use protoforge_formats::split_blocks;

    const DROPS: &str = "Group\tWildDog\n{\n\tMob\t101\n\tType\tkill\n\tkill_drop\t50\n\tlevel_limit\t10\n\t1\t27001\t1\t10\t5\n\t2\tSword of Flame\t1\t0.5\t0\n}\n";

    #[test]
    fn test_kill_group() {
        let (group, items) = MobDropGroup::from_block(&split_blocks(DROPS)[0], 1).unwrap();
        assert_eq!(group.mob_vnum, 101);
        assert_eq!(group.drop_type, DropType::Kill);
        assert_eq!(group.kill_drop, 50);
        assert_eq!(group.level_limit, 10);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item, Reference::Vnum(27001));
        assert_eq!(items[0].rare_pct, 5.0);
        assert_eq!(items[1].pending_name(), Some("Sword of Flame"));
        assert_eq!(items[1].probability, 0.5);
    }

    #[test]
    fn test_rare_only_kept_for_kill_groups() {
        let text = "Group A\n{\n\tMob\t101\n\tType\tdrop\n\t1\t27001\t1\t10\t5\n}\n";
        let (group, items) = MobDropGroup::from_block(&split_blocks(text)[0], 1).unwrap();
        assert_eq!(group.level_limit, 0);
        assert_eq!(group.kill_drop, 0);
        assert_eq!(items[0].rare_pct, 0.0);
    }

    #[test]
    fn test_mandatory_scalars() {
        let text = "Group A\n{\n\tType\tdrop\n\t1\t27001\t1\t10\n}\nGroup B\n{\n\tMob\t101\n\tType\tsometimes\n}\nGroup C\n{\n\tMob\t102\n\tType\tlimit\n}\n";
        let groups: Vec<_> = split_blocks(text)
            .iter()
            .filter_map(|block| MobDropGroup::from_block(block, 1))
            .collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0.mob_vnum, 102);
        assert_eq!(groups[0].0.drop_type, DropType::Limit);
    }

    #[test]
    fn test_unnamed_group_keeps_empty_name() {
        let text = "Group\n{\n\tMob\t101\n\tType\tdrop\n\t1\t27001\t1\t10\n}\n";
        let (group, items) = MobDropGroup::from_block(&split_blocks(text)[0], 1).unwrap();
        assert_eq!(group.name, "");

        let mut writer = BlockWriter::new(LineEnding::Lf);
        group.write(&mut writer, &items);
        assert_eq!(writer.as_str(), text);
    }

    #[test]
    fn test_write_reproduces_block() {
        let (group, items) = MobDropGroup::from_block(&split_blocks(DROPS)[0], 1).unwrap();
        let mut writer = BlockWriter::new(LineEnding::Lf);
        group.write(&mut writer, &items);
        assert_eq!(writer.as_str(), DROPS);
    }
}
