//! mob_proto records
//!
//! # Format
//! One tab separated row per mob, with a header row. The later format
//! versions only append columns, so every version shares the legacy prefix.

use protoforge_core::{FileKind, FormatVersion, Vnum};
use protoforge_formats::{format_vnum, ProtoRow, TabularRecord};
use protoforge_tables::mob::{
    AI_FLAGS, BATTLE_TYPES, CLICK_TYPES, IMMUNE_FLAGS, MOB_RANKS, MOB_SIZES, MOB_TYPES, RACE_FLAGS,
};
use serde::{Deserialize, Serialize};

pub const ENCHANT_COLUMNS: [&str; 6] = [
    "EnchantCurse",
    "EnchantSlow",
    "EnchantPoison",
    "EnchantStun",
    "EnchantCritical",
    "EnchantPenetrate",
];

pub const RESIST_COLUMNS: [&str; 11] = [
    "ResistSword",
    "ResistTwohand",
    "ResistDagger",
    "ResistBell",
    "ResistFan",
    "ResistBow",
    "ResistFire",
    "ResistElect",
    "ResistMagic",
    "ResistWind",
    "ResistPoison",
];

pub const SKILL_LEVEL_COLUMNS: [&str; 5] =
    ["SkillLevel0", "SkillLevel1", "SkillLevel2", "SkillLevel3", "SkillLevel4"];

pub const SKILL_VNUM_COLUMNS: [&str; 5] =
    ["SkillVnum0", "SkillVnum1", "SkillVnum2", "SkillVnum3", "SkillVnum4"];

pub const SPECIAL_COLUMNS: [&str; 5] =
    ["SpBerserk", "SpStoneskin", "SpGodspeed", "SpDeathblow", "SpRevive"];

const LEGACY_COLUMNS: &[&str] = &[
    "Vnum", "Name", "Rank", "Type", "BattleType", "Level", "Size", "AiFlags", "MountCapacity",
    "RaceFlags", "ImmuneFlags", "Empire", "Folder", "OnClick", "St", "Dx", "Ht", "Iq",
    "MinDamage", "MaxDamage", "MaxHp", "RegenCycle", "RegenPercent", "MinGold", "MaxGold", "Exp",
    "Def", "AttackSpeed", "MoveSpeed", "AggressiveHpPct", "AggressiveSight", "AttackRange",
    "DropItemGroup", "ResurrectionVnum",
    "EnchantCurse", "EnchantSlow", "EnchantPoison", "EnchantStun", "EnchantCritical", "EnchantPenetrate",
    "ResistSword", "ResistTwohand", "ResistDagger", "ResistBell", "ResistFan", "ResistBow",
    "ResistFire", "ResistElect", "ResistMagic", "ResistWind", "ResistPoison",
    "DamMultiply", "SummonVnum", "DrainSp", "MobColor", "PolymorphItem",
    "SkillLevel0", "SkillVnum0", "SkillLevel1", "SkillVnum1", "SkillLevel2", "SkillVnum2",
    "SkillLevel3", "SkillVnum3", "SkillLevel4", "SkillVnum4",
    "SpBerserk", "SpStoneskin", "SpGodspeed", "SpDeathblow", "SpRevive",
];

const CLASSIC_COLUMNS: &[&str] = &[
    "Vnum", "Name", "Rank", "Type", "BattleType", "Level", "Size", "AiFlags", "MountCapacity",
    "RaceFlags", "ImmuneFlags", "Empire", "Folder", "OnClick", "St", "Dx", "Ht", "Iq",
    "MinDamage", "MaxDamage", "MaxHp", "RegenCycle", "RegenPercent", "MinGold", "MaxGold", "Exp",
    "Def", "AttackSpeed", "MoveSpeed", "AggressiveHpPct", "AggressiveSight", "AttackRange",
    "DropItemGroup", "ResurrectionVnum",
    "EnchantCurse", "EnchantSlow", "EnchantPoison", "EnchantStun", "EnchantCritical", "EnchantPenetrate",
    "ResistSword", "ResistTwohand", "ResistDagger", "ResistBell", "ResistFan", "ResistBow",
    "ResistFire", "ResistElect", "ResistMagic", "ResistWind", "ResistPoison",
    "DamMultiply", "SummonVnum", "DrainSp", "MobColor", "PolymorphItem",
    "SkillLevel0", "SkillVnum0", "SkillLevel1", "SkillVnum1", "SkillLevel2", "SkillVnum2",
    "SkillLevel3", "SkillVnum3", "SkillLevel4", "SkillVnum4",
    "SpBerserk", "SpStoneskin", "SpGodspeed", "SpDeathblow", "SpRevive",
    "ResistClaw",
];

const MODERN_COLUMNS: &[&str] = &[
    "Vnum", "Name", "Rank", "Type", "BattleType", "Level", "Size", "AiFlags", "MountCapacity",
    "RaceFlags", "ImmuneFlags", "Empire", "Folder", "OnClick", "St", "Dx", "Ht", "Iq",
    "MinDamage", "MaxDamage", "MaxHp", "RegenCycle", "RegenPercent", "MinGold", "MaxGold", "Exp",
    "Def", "AttackSpeed", "MoveSpeed", "AggressiveHpPct", "AggressiveSight", "AttackRange",
    "DropItemGroup", "ResurrectionVnum",
    "EnchantCurse", "EnchantSlow", "EnchantPoison", "EnchantStun", "EnchantCritical", "EnchantPenetrate",
    "ResistSword", "ResistTwohand", "ResistDagger", "ResistBell", "ResistFan", "ResistBow",
    "ResistFire", "ResistElect", "ResistMagic", "ResistWind", "ResistPoison",
    "DamMultiply", "SummonVnum", "DrainSp", "MobColor", "PolymorphItem",
    "SkillLevel0", "SkillVnum0", "SkillLevel1", "SkillVnum1", "SkillLevel2", "SkillVnum2",
    "SkillLevel3", "SkillVnum3", "SkillLevel4", "SkillVnum4",
    "SpBerserk", "SpStoneskin", "SpGodspeed", "SpDeathblow", "SpRevive",
    "ResistClaw", "ResistBleeding", "HitRange",
];

/// A mob prototype
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mob {
    pub vnum: Vnum,
    pub vnum_end: Option<Vnum>,
    pub name: String,
    pub rank: u32,
    pub mob_type: u32,
    pub battle_type: u32,
    pub level: u32,
    pub size: u32,
    pub ai_flags: u64,
    pub mount_capacity: u32,
    pub race_flags: u64,
    pub immune_flags: u64,
    pub empire: u32,
    pub folder: String,
    pub on_click: u32,
    pub st: u32,
    pub dx: u32,
    pub ht: u32,
    pub iq: u32,
    pub min_damage: u32,
    pub max_damage: u32,
    pub max_hp: u32,
    pub regen_cycle: u32,
    pub regen_percent: u32,
    pub min_gold: u64,
    pub max_gold: u64,
    pub exp: u64,
    pub def: u32,
    pub attack_speed: u32,
    pub move_speed: u32,
    pub aggressive_hp_pct: u32,
    pub aggressive_sight: u32,
    pub attack_range: u32,
    pub drop_item_group: u32,
    pub resurrection_vnum: Vnum,
    pub enchants: [i32; 6],
    pub resists: [i32; 11],
    pub dam_multiply: f64,
    pub summon_vnum: Vnum,
    pub drain_sp: u32,
    pub mob_color: u32,
    pub polymorph_item: Vnum,
    pub skill_levels: [u32; 5],
    pub skill_vnums: [u32; 5],
    pub specials: [u32; 5],
    pub resist_claw: i32,
    pub resist_bleeding: i32,
    pub hit_range: u32,
}

fn position(columns: &[&str], column: &str) -> Option<usize> {
    columns.iter().position(|c| *c == column)
}

impl Mob {
    /// Render one column the way mob_proto stores it
    fn column_value(&self, column: &str) -> String {
        if let Some(i) = position(&ENCHANT_COLUMNS, column) {
            return self.enchants[i].to_string();
        }
        if let Some(i) = position(&RESIST_COLUMNS, column) {
            return self.resists[i].to_string();
        }
        if let Some(i) = position(&SKILL_LEVEL_COLUMNS, column) {
            return self.skill_levels[i].to_string();
        }
        if let Some(i) = position(&SKILL_VNUM_COLUMNS, column) {
            return self.skill_vnums[i].to_string();
        }
        if let Some(i) = position(&SPECIAL_COLUMNS, column) {
            return self.specials[i].to_string();
        }

        match column {
            "Vnum" => format_vnum(self.vnum, self.vnum_end),
            "Name" => self.name.clone(),
            "Rank" => MOB_RANKS.format(self.rank),
            "Type" => MOB_TYPES.format(self.mob_type),
            "BattleType" => BATTLE_TYPES.format(self.battle_type),
            "Level" => self.level.to_string(),
            "Size" => MOB_SIZES.format(self.size),
            "AiFlags" => AI_FLAGS.format(self.ai_flags),
            "MountCapacity" => self.mount_capacity.to_string(),
            "RaceFlags" => RACE_FLAGS.format(self.race_flags),
            "ImmuneFlags" => IMMUNE_FLAGS.format(self.immune_flags),
            "Empire" => self.empire.to_string(),
            "Folder" => self.folder.clone(),
            "OnClick" => CLICK_TYPES.format(self.on_click),
            "St" => self.st.to_string(),
            "Dx" => self.dx.to_string(),
            "Ht" => self.ht.to_string(),
            "Iq" => self.iq.to_string(),
            "MinDamage" => self.min_damage.to_string(),
            "MaxDamage" => self.max_damage.to_string(),
            "MaxHp" => self.max_hp.to_string(),
            "RegenCycle" => self.regen_cycle.to_string(),
            "RegenPercent" => self.regen_percent.to_string(),
            "MinGold" => self.min_gold.to_string(),
            "MaxGold" => self.max_gold.to_string(),
            "Exp" => self.exp.to_string(),
            "Def" => self.def.to_string(),
            "AttackSpeed" => self.attack_speed.to_string(),
            "MoveSpeed" => self.move_speed.to_string(),
            "AggressiveHpPct" => self.aggressive_hp_pct.to_string(),
            "AggressiveSight" => self.aggressive_sight.to_string(),
            "AttackRange" => self.attack_range.to_string(),
            "DropItemGroup" => self.drop_item_group.to_string(),
            "ResurrectionVnum" => self.resurrection_vnum.to_string(),
            "DamMultiply" => self.dam_multiply.to_string(),
            "SummonVnum" => self.summon_vnum.to_string(),
            "DrainSp" => self.drain_sp.to_string(),
            "MobColor" => self.mob_color.to_string(),
            "PolymorphItem" => self.polymorph_item.to_string(),
            "ResistClaw" => self.resist_claw.to_string(),
            "ResistBleeding" => self.resist_bleeding.to_string(),
            "HitRange" => self.hit_range.to_string(),
            _ => String::new(),
        }
    }
}

impl TabularRecord for Mob {
    const KIND: FileKind = FileKind::MobProto;
    const HEADER_ROWS: usize = 1;
    const RANGE_IDS: bool = true;

    fn columns(version: FormatVersion) -> &'static [&'static str] {
        match version {
            FormatVersion::Legacy => LEGACY_COLUMNS,
            FormatVersion::Classic => CLASSIC_COLUMNS,
            FormatVersion::Modern => MODERN_COLUMNS,
        }
    }

    fn from_row(row: &ProtoRow<'_>, _version: FormatVersion) -> Option<Self> {
        Some(Self {
            vnum: row.vnum()?,
            vnum_end: row.vnum_end(),
            name: row.get("Name").to_string(),
            rank: MOB_RANKS.value_or(row.get("Rank"), 0),
            mob_type: MOB_TYPES.value_or(row.get("Type"), 0),
            battle_type: BATTLE_TYPES.value_or(row.get("BattleType"), 0),
            level: row.parse("Level"),
            size: MOB_SIZES.value_or(row.get("Size"), 0),
            ai_flags: AI_FLAGS.pack(row.get("AiFlags")),
            mount_capacity: row.parse("MountCapacity"),
            race_flags: RACE_FLAGS.pack(row.get("RaceFlags")),
            immune_flags: IMMUNE_FLAGS.pack(row.get("ImmuneFlags")),
            empire: row.parse("Empire"),
            folder: row.get("Folder").to_string(),
            on_click: CLICK_TYPES.value_or(row.get("OnClick"), 0),
            st: row.parse("St"),
            dx: row.parse("Dx"),
            ht: row.parse("Ht"),
            iq: row.parse("Iq"),
            min_damage: row.parse("MinDamage"),
            max_damage: row.parse("MaxDamage"),
            max_hp: row.parse("MaxHp"),
            regen_cycle: row.parse("RegenCycle"),
            regen_percent: row.parse("RegenPercent"),
            min_gold: row.parse("MinGold"),
            max_gold: row.parse("MaxGold"),
            exp: row.parse("Exp"),
            def: row.parse("Def"),
            attack_speed: row.parse("AttackSpeed"),
            move_speed: row.parse("MoveSpeed"),
            aggressive_hp_pct: row.parse("AggressiveHpPct"),
            aggressive_sight: row.parse("AggressiveSight"),
            attack_range: row.parse("AttackRange"),
            drop_item_group: row.parse("DropItemGroup"),
            resurrection_vnum: row.parse("ResurrectionVnum"),
            enchants: std::array::from_fn(|i| row.parse(ENCHANT_COLUMNS[i])),
            resists: std::array::from_fn(|i| row.parse(RESIST_COLUMNS[i])),
            dam_multiply: row.parse("DamMultiply"),
            summon_vnum: row.parse("SummonVnum"),
            drain_sp: row.parse("DrainSp"),
            mob_color: row.parse("MobColor"),
            polymorph_item: row.parse("PolymorphItem"),
            skill_levels: std::array::from_fn(|i| row.parse(SKILL_LEVEL_COLUMNS[i])),
            skill_vnums: std::array::from_fn(|i| row.parse(SKILL_VNUM_COLUMNS[i])),
            specials: std::array::from_fn(|i| row.parse(SPECIAL_COLUMNS[i])),
            resist_claw: row.parse("ResistClaw"),
            resist_bleeding: row.parse("ResistBleeding"),
            hit_range: row.parse("HitRange"),
        })
    }

    fn to_fields(&self, version: FormatVersion) -> Option<Vec<String>> {
        Some(
            Self::columns(version)
                .iter()
                .map(|column| self.column_value(column))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoforge_core::LineEnding;
    use protoforge_formats::{read_table, write_table};

    fn wolf() -> Mob {
        Mob {
            vnum: 101,
            name: "Wild Dog".to_string(),
            rank: 0,
            mob_type: 0,
            battle_type: 0,
            level: 1,
            size: 1,
            ai_flags: AI_FLAGS.pack("AGGR|NOMOVE"),
            race_flags: RACE_FLAGS.pack("ANIMAL"),
            folder: "wolf".to_string(),
            st: 4,
            dx: 6,
            ht: 6,
            iq: 2,
            min_damage: 6,
            max_damage: 8,
            max_hp: 210,
            regen_cycle: 7,
            regen_percent: 5,
            min_gold: 2,
            max_gold: 7,
            exp: 17,
            def: 6,
            attack_speed: 100,
            move_speed: 100,
            aggressive_sight: 2000,
            attack_range: 175,
            enchants: [0, 0, 5, 0, 0, 0],
            resists: [0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 10],
            dam_multiply: 1.5,
            skill_levels: [1, 0, 0, 0, 0],
            skill_vnums: [101, 0, 0, 0, 0],
            ..Default::default()
        }
    }

    #[test]
    fn test_field_count_matches_columns() {
        for version in FormatVersion::ALL {
            assert_eq!(wolf().to_fields(version).unwrap().len(), Mob::columns(version).len());
        }
        assert_eq!(LEGACY_COLUMNS.len(), 71);
    }

    #[test]
    fn test_enums_and_flags_by_name() {
        let mut line = vec!["101", "Wild Dog", "boss", "NPC", "MAGIC", "10", "BIG", "AGGR|COWARD|??"];
        line.resize(LEGACY_COLUMNS.len(), "");
        let raw = line.join("\t");
        let row = ProtoRow::ranged(LEGACY_COLUMNS, &raw, 2);
        let mob = Mob::from_row(&row, FormatVersion::Legacy).unwrap();

        assert_eq!(mob.rank, 4);
        assert_eq!(mob.mob_type, 1);
        assert_eq!(mob.battle_type, 2);
        assert_eq!(mob.size, 2);
        assert_eq!(mob.ai_flags, (1 << 0) | (1 << 2));
    }

    #[test]
    fn test_round_trip_every_version() {
        for version in FormatVersion::ALL {
            let mut mob = wolf();
            if version != FormatVersion::Legacy {
                mob.resist_claw = 15;
            }
            if version == FormatVersion::Modern {
                mob.resist_bleeding = 5;
                mob.hit_range = 100;
            }

            let mobs = vec![mob, Mob { vnum: 102, vnum_end: Some(105), ..wolf() }];
            let bytes = write_table(&mobs, version, LineEnding::Crlf);
            let text = FileKind::MobProto.codepage().decode(&bytes);
            let read: Vec<Mob> = read_table(&text, version).collect();
            assert_eq!(read, mobs, "{}", version);
        }
    }

    #[test]
    fn test_legacy_ignores_appended_columns() {
        let mut mob = wolf();
        mob.resist_claw = 15;
        let fields = mob.to_fields(FormatVersion::Legacy).unwrap();
        assert_eq!(fields.last().map(String::as_str), Some("0"));
        assert_eq!(fields[2], "PAWN");
        assert_eq!(fields[7], "AGGR|NOMOVE");
        assert_eq!(fields[51], "1.5");
    }
}
