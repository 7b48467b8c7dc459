//! special_item_group.txt records
//!
//! # Format
//! ```text
//! Group	GoldenChest
//! {
//! 	Vnum	50011
//! 	Type	pct
//! 	effect	"d:/ymir work/effect/etc/buff/buff_item1.mse"
//! 	1	27001	5	50
//! 	2	Red Potion (L)	1	20	5
//! 	3	exp	10000	20
//! 	4	mob	101	10
//! }
//! ```
//!
//! Member lines are `index target count probability [rare]`. The target is
//! a vnum, an item name, or one of the keywords below. For `mob` and `group`
//! the count column holds the vnum to spawn; for the reward keywords it holds
//! the amount. In `attr` groups the target is an apply type instead of an item.

use protoforge_core::{Reference, Vnum};
use protoforge_formats::{quoted, BlockWriter, MemberLine, Resolvable, SectionBlock};
use protoforge_tables::item::{apply_short_name, match_apply};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// How the members of a group are rolled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialGroupType {
    #[default]
    Normal,
    Pct,
    Attr,
    Quest,
    Special,
}

impl SpecialGroupType {
    /// Unknown or missing values fall back to `Normal`
    pub fn parse(token: Option<&str>) -> Self {
        match token.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("pct") => SpecialGroupType::Pct,
            Some("attr") => SpecialGroupType::Attr,
            Some("quest") => SpecialGroupType::Quest,
            Some("special") => SpecialGroupType::Special,
            _ => SpecialGroupType::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialGroupType::Normal => "normal",
            SpecialGroupType::Pct => "pct",
            SpecialGroupType::Attr => "attr",
            SpecialGroupType::Quest => "quest",
            SpecialGroupType::Special => "special",
        }
    }
}

/// What a member line hands out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum SpecialTarget {
    Item(Reference),
    Apply(u32),
    Mob,
    Group,
    Exp,
    Slow,
    Poison,
    DrainHp,
}

impl SpecialTarget {
    fn parse(token: &str, group_type: SpecialGroupType) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "mob" => return SpecialTarget::Mob,
            "group" => return SpecialTarget::Group,
            "exp" => return SpecialTarget::Exp,
            "slow" => return SpecialTarget::Slow,
            "poison" => return SpecialTarget::Poison,
            "drain_hp" => return SpecialTarget::DrainHp,
            _ => {}
        }

        if group_type == SpecialGroupType::Attr {
            let apply = match Reference::parse(token) {
                Reference::Vnum(value) => value,
                Reference::Name(name) => match_apply(&name).unwrap_or_default(),
            };
            return SpecialTarget::Apply(apply);
        }

        SpecialTarget::Item(Reference::parse(token))
    }
}

impl fmt::Display for SpecialTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialTarget::Item(reference) => write!(f, "{}", reference),
            SpecialTarget::Apply(value) => f.write_str(&apply_short_name(*value)),
            SpecialTarget::Mob => f.write_str("mob"),
            SpecialTarget::Group => f.write_str("group"),
            SpecialTarget::Exp => f.write_str("exp"),
            SpecialTarget::Slow => f.write_str("slow"),
            SpecialTarget::Poison => f.write_str("poison"),
            SpecialTarget::DrainHp => f.write_str("drain_hp"),
        }
    }
}

/// A special item group header, keyed by the vnum of the item that opens it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialItemGroup {
    pub vnum: Vnum,
    pub name: String,
    pub group_type: SpecialGroupType,
    pub effect: Option<String>,
}

/// One line of a special item group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialItemGroupMember {
    pub group_vnum: Vnum,
    pub index: u32,
    pub target: SpecialTarget,
    pub count: i64,
    pub probability: f64,
    pub rare_pct: f64,
}

impl SpecialItemGroup {
    /// Build the header and members of one block
    ///
    /// The block is dropped when `Vnum` is missing. Member lines without a
    /// target, count and probability are dropped on their own.
    pub fn from_block(block: &SectionBlock) -> Option<(Self, Vec<SpecialItemGroupMember>)> {
        let Some(vnum) = block.parse_scalar::<Vnum>("Vnum") else {
            trace!("special item group at line {} has no Vnum", block.line);
            return None;
        };
        let group_type = SpecialGroupType::parse(block.scalar_value("Type"));

        let group = Self {
            vnum,
            name: block.name.clone().unwrap_or_default(),
            group_type,
            effect: block.scalar_value("effect").map(str::to_string),
        };
        let members = block
            .members()
            .filter_map(|line| SpecialItemGroupMember::from_line(vnum, group_type, &line))
            .collect();

        Some((group, members))
    }

    pub fn write<'a, I>(&self, writer: &mut BlockWriter, members: I)
    where
        I: IntoIterator<Item = &'a SpecialItemGroupMember>,
    {
        writer.open_group(&self.name).scalar("Vnum", &[self.vnum]);
        if self.group_type != SpecialGroupType::Normal {
            writer.scalar("Type", &[self.group_type.as_str()]);
        }
        if let Some(effect) = &self.effect {
            writer.scalar("effect", &[quoted(effect)]);
        }
        for member in members {
            member.write(writer);
        }
        writer.close_group();
    }
}

impl SpecialItemGroupMember {
    fn from_line(group_vnum: Vnum, group_type: SpecialGroupType, line: &MemberLine<'_>) -> Option<Self> {
        let target = line.field(0).filter(|token| !token.is_empty())?;
        Some(Self {
            group_vnum,
            index: line.index,
            target: SpecialTarget::parse(target, group_type),
            count: line.parse(1)?,
            probability: line.parse(2)?,
            rare_pct: line.parse(3).unwrap_or_default(),
        })
    }

    fn write(&self, writer: &mut BlockWriter) {
        let mut fields = vec![
            self.target.to_string(),
            self.count.to_string(),
            self.probability.to_string(),
        ];
        if self.rare_pct > 0.0 {
            fields.push(self.rare_pct.to_string());
        }
        writer.member(self.index, fields.as_slice());
    }
}

impl Resolvable for SpecialItemGroupMember {
    fn pending_name(&self) -> Option<&str> {
        match &self.target {
            SpecialTarget::Item(reference) => reference.name(),
            _ => None,
        }
    }

    fn resolve(&mut self, vnum: Vnum) {
        self.target = SpecialTarget::Item(Reference::Vnum(vnum));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoforge_formats::split_blocks;

    const CHEST: &str = r#"
Group	GoldenChest
{
	Vnum	50011
	Type	PCT
	effect	"d:/ymir work/effect/etc/buff/buff_item1.mse"
	1	27001	5	50
	2	Red Potion (L)	1	20	5
	3	exp	10000	20
	4	mob	101	10
}
"#;

    #[test]
    fn test_member_targets() {
        let blocks = split_blocks(CHEST);
        let (group, members) = SpecialItemGroup::from_block(&blocks[0]).unwrap();

        assert_eq!(group.vnum, 50011);
        assert_eq!(group.name, "GoldenChest");
        assert_eq!(group.group_type, SpecialGroupType::Pct);
        assert_eq!(group.effect.as_deref(), Some("d:/ymir work/effect/etc/buff/buff_item1.mse"));

        assert_eq!(members.len(), 4);
        assert_eq!(members[0].target, SpecialTarget::Item(Reference::Vnum(27001)));
        assert_eq!(members[1].pending_name(), Some("Red Potion (L)"));
        assert_eq!(members[1].rare_pct, 5.0);
        assert_eq!(members[2].target, SpecialTarget::Exp);
        assert_eq!(members[2].count, 10000);
        assert_eq!(members[3].target, SpecialTarget::Mob);
        assert_eq!(members[3].count, 101);
    }

    #[test]
    fn test_attr_group_targets_are_applies() {
        let text = "Group Bonus\n{\n\tVnum\t71\n\tType\tattr\n\t1\tMAX_HP\t500\t10\n\t2\t5\t10\t20\n}\n";
        let (group, members) = SpecialItemGroup::from_block(&split_blocks(text)[0]).unwrap();
        assert_eq!(group.group_type, SpecialGroupType::Attr);
        assert_eq!(members[0].target, SpecialTarget::Apply(1));
        assert_eq!(members[1].target, SpecialTarget::Apply(5));
        assert_eq!(members[0].pending_name(), None);
    }

    #[test]
    fn test_missing_type_is_normal_and_missing_vnum_drops() {
        let text = "Group A\n{\n\tVnum\t1\n\t1\t10\t1\t100\n}\nGroup B\n{\n\tType\tpct\n\t1\t10\t1\t100\n}\n";
        let groups: Vec<_> = split_blocks(text).iter().filter_map(SpecialItemGroup::from_block).collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0.group_type, SpecialGroupType::Normal);
        assert_eq!(groups[0].0.effect, None);
    }

    #[test]
    fn test_incomplete_member_line_is_dropped() {
        let text = "Group A\n{\n\tVnum\t1\n\t1\t10\n\t2\t11\t1\t100\n}\n";
        let (_, members) = SpecialItemGroup::from_block(&split_blocks(text)[0]).unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].index, 2);
    }

    #[test]
    fn test_unnamed_group_keeps_empty_name() {
        let text = "Group\n{\n\tVnum\t50012\n\t1\t27001\t5\t50\n}\n";
        let (group, members) = SpecialItemGroup::from_block(&split_blocks(text)[0]).unwrap();
        assert_eq!(group.name, "");

        let mut writer = BlockWriter::new(protoforge_core::LineEnding::Lf);
        group.write(&mut writer, &members);
        assert_eq!(writer.as_str(), text);
    }

    #[test]
    fn test_write_then_read() {
        let blocks = split_blocks(CHEST);
        let (group, members) = SpecialItemGroup::from_block(&blocks[0]).unwrap();

        let mut writer = BlockWriter::new(protoforge_core::LineEnding::Lf);
        group.write(&mut writer, &members);
        assert!(writer.as_str().contains("\tType\tpct\n"));
        assert!(writer.as_str().contains("\t2\tRed Potion (L)\t1\t20\t5\n"));

        let (read_group, read_members) = SpecialItemGroup::from_block(&split_blocks(writer.as_str())[0]).unwrap();
        assert_eq!(read_group, group);
        assert_eq!(read_members, members);
    }
}
