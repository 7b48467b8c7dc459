//! common_drop_item.txt records
//!
//! # Format
//! Each line holds four groups of five tab separated fields, one group per
//! mob rank in the order `PAWN`, `S_PAWN`, `KNIGHT`, `S_KNIGHT`:
//! ```text
//! label	min_level	max_level	percent	item	label	min_level	...
//! ```
//! A rank whose group is empty on a line simply has no drop there.

use bytes::Bytes;
use protoforge_core::{FileKind, LineEnding, Reference, Vnum};
use protoforge_formats::{write_rows, ProtoRow, Resolvable, TabularReader};
use protoforge_tables::mob::MOB_RANKS;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Ranks covered by the file, in column order
pub const COMMON_DROP_RANKS: [&str; 4] = ["PAWN", "S_PAWN", "KNIGHT", "S_KNIGHT"];

const GROUP_WIDTH: usize = 5;

const COLUMNS: &[&str] = &[
    "PawnLabel", "PawnMinLevel", "PawnMaxLevel", "PawnPercent", "PawnItem",
    "SPawnLabel", "SPawnMinLevel", "SPawnMaxLevel", "SPawnPercent", "SPawnItem",
    "KnightLabel", "KnightMinLevel", "KnightMaxLevel", "KnightPercent", "KnightItem",
    "SKnightLabel", "SKnightMinLevel", "SKnightMaxLevel", "SKnightPercent", "SKnightItem",
];

/// A drop shared by every mob of a rank within a level band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonDrop {
    pub rank: u32,
    pub label: String,
    pub min_level: u32,
    pub max_level: u32,
    pub percent: f64,
    pub item: Reference,
}

impl Resolvable for CommonDrop {
    fn pending_name(&self) -> Option<&str> {
        self.item.name()
    }

    fn resolve(&mut self, vnum: Vnum) {
        self.item = Reference::Vnum(vnum);
    }
}

/// Read every rank group of every line
pub fn read_common_drops(text: &str) -> Vec<CommonDrop> {
    let mut drops = Vec::new();
    for row in TabularReader::new(text, COLUMNS, 0) {
        for (slot, rank_name) in COMMON_DROP_RANKS.iter().enumerate() {
            let base = slot * GROUP_WIDTH;
            if row.field(base + 4).is_empty() {
                continue;
            }
            match group_at(&row, base, rank_name) {
                Some(drop) => drops.push(drop),
                None => trace!("Incomplete {} group on line {}", rank_name, row.line),
            }
        }
    }
    drops
}

fn group_at(row: &ProtoRow<'_>, base: usize, rank_name: &str) -> Option<CommonDrop> {
    Some(CommonDrop {
        rank: MOB_RANKS.match_token(rank_name)?,
        label: row.field(base).to_string(),
        min_level: row.field(base + 1).parse().ok()?,
        max_level: row.field(base + 2).parse().ok()?,
        percent: row.field(base + 3).parse().ok()?,
        item: Reference::parse(row.field(base + 4)),
    })
}

/// Lay drops out four ranks per line
///
/// The n-th drop of each rank goes on line n. Drops of other ranks are not
/// representable and are skipped.
pub fn write_common_drops(drops: &[CommonDrop], line_ending: LineEnding) -> Bytes {
    let columns: Vec<Vec<&CommonDrop>> = COMMON_DROP_RANKS
        .iter()
        .map(|name| {
            let rank = MOB_RANKS.match_token(name);
            drops.iter().filter(|drop| Some(drop.rank) == rank).collect()
        })
        .collect();
    let lines = columns.iter().map(Vec::len).max().unwrap_or(0);

    let rows = (0..lines).map(|line| {
        let mut fields = Vec::with_capacity(COLUMNS.len());
        for column in &columns {
            match column.get(line) {
                Some(drop) => fields.extend([
                    drop.label.clone(),
                    drop.min_level.to_string(),
                    drop.max_level.to_string(),
                    drop.percent.to_string(),
                    drop.item.to_string(),
                ]),
                None => fields.extend(std::iter::repeat(String::new()).take(GROUP_WIDTH)),
            }
        }
        fields
    });

    write_rows(None, rows, FileKind::CommonDropItem, line_ending)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DROPS: &str = "Potion\t1\t15\t1.5\t27001\tPotion\t1\t15\t2\t27001\t\t\t\t\t\tBook\t30\t60\t0.1\tSword of Flame\n\
        Gem\t10\t20\t0.5\t50001\n";

    #[test]
    fn test_groups_by_position() {
        let drops = read_common_drops(DROPS);
        assert_eq!(drops.len(), 4);

        assert_eq!(drops[0].rank, 0);
        assert_eq!(drops[0].percent, 1.5);
        assert_eq!(drops[1].rank, 1);
        assert_eq!(drops[2].rank, 3);
        assert_eq!(drops[2].pending_name(), Some("Sword of Flame"));
        assert_eq!(drops[3].label, "Gem");
        assert_eq!(drops[3].item, Reference::Vnum(50001));
    }

    #[test]
    fn test_incomplete_group_is_skipped() {
        let drops = read_common_drops("Potion\tabc\t15\t1\t27001\tPotion\t1\t15\t1\t27002\n");
        assert_eq!(drops.len(), 1);
        assert_eq!(drops[0].item, Reference::Vnum(27002));
    }

    #[test]
    fn test_label_with_tilde_is_kept() {
        let drops = read_common_drops("Lv1~15\t1\t15\t1.5\t27001\n");
        assert_eq!(drops.len(), 1);
        assert_eq!(drops[0].label, "Lv1~15");
        assert_eq!(drops[0].min_level, 1);

        let bytes = write_common_drops(&drops, LineEnding::Lf);
        let text = FileKind::CommonDropItem.codepage().decode(&bytes);
        assert!(text.starts_with("Lv1~15\t1\t15\t1.5\t27001\t"));
    }

    #[test]
    fn test_write_then_read() {
        let drops = read_common_drops(DROPS);
        let bytes = write_common_drops(&drops, LineEnding::Lf);
        let text = FileKind::CommonDropItem.codepage().decode(&bytes);

        assert!(text.starts_with("Potion\t1\t15\t1.5\t27001\tPotion\t1\t15\t2\t27001\t\t\t\t\t\tBook"));
        assert_eq!(read_common_drops(&text), drops_sorted(drops));
    }

    // Writing regroups drops rank by rank across lines
    fn drops_sorted(drops: Vec<CommonDrop>) -> Vec<CommonDrop> {
        let mut lines: Vec<Vec<CommonDrop>> = Vec::new();
        for name in COMMON_DROP_RANKS {
            let rank = MOB_RANKS.match_token(name).unwrap();
            for (line, drop) in drops.iter().filter(|d| d.rank == rank).enumerate() {
                if lines.len() <= line {
                    lines.push(Vec::new());
                }
                lines[line].push(drop.clone());
            }
        }
        lines.into_iter().flatten().collect()
    }
}
