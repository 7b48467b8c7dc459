//! Mob tables: rank, type, battle type, size, click type and flags

use crate::enums::EnumTable;
use crate::flags::FlagTable;

pub use crate::item::IMMUNE_FLAGS;

pub static MOB_RANKS: EnumTable = EnumTable::new(
    "mob rank",
    &[
        ("PAWN", 0),
        ("S_PAWN", 1),
        ("KNIGHT", 2),
        ("S_KNIGHT", 3),
        ("BOSS", 4),
        ("KING", 5),
    ],
);

pub static MOB_TYPES: EnumTable = EnumTable::new(
    "mob type",
    &[
        ("MONSTER", 0),
        ("NPC", 1),
        ("STONE", 2),
        ("WARP", 3),
        ("DOOR", 4),
        ("BUILDING", 5),
        ("PC", 6),
        ("POLYMORPH_PC", 7),
        ("HORSE", 8),
        ("GOTO", 9),
    ],
);

pub static BATTLE_TYPES: EnumTable = EnumTable::new(
    "battle type",
    &[
        ("MELEE", 0),
        ("RANGE", 1),
        ("MAGIC", 2),
        ("SPECIAL", 3),
        ("POWER", 4),
        ("TANKER", 5),
        ("SUPER_POWER", 6),
        ("SUPER_TANKER", 7),
    ],
);

pub static MOB_SIZES: EnumTable = EnumTable::new(
    "mob size",
    &[("SMALL", 0), ("MEDIUM", 1), ("BIG", 2)],
);

pub static CLICK_TYPES: EnumTable = EnumTable::new(
    "click type",
    &[
        ("NONE", 0),
        ("SHOP", 1),
        ("TALK", 2),
    ],
);

pub static AI_FLAGS: FlagTable = FlagTable::new(
    "ai flag",
    &[
        ("AGGR", 1 << 0),
        ("NOMOVE", 1 << 1),
        ("COWARD", 1 << 2),
        ("NOATTSHINSU", 1 << 3),
        ("NOATTCHUNJO", 1 << 4),
        ("NOATTJINNO", 1 << 5),
        ("ATTMOB", 1 << 6),
        ("BERSERK", 1 << 7),
        ("STONESKIN", 1 << 8),
        ("GODSPEED", 1 << 9),
        ("DEATHBLOW", 1 << 10),
        ("REVIVE", 1 << 11),
    ],
);

pub static RACE_FLAGS: FlagTable = FlagTable::new(
    "race flag",
    &[
        ("ANIMAL", 1 << 0),
        ("UNDEAD", 1 << 1),
        ("DEVIL", 1 << 2),
        ("HUMAN", 1 << 3),
        ("ORC", 1 << 4),
        ("MILGYO", 1 << 5),
        ("INSECT", 1 << 6),
        ("FIRE", 1 << 7),
        ("ICE", 1 << 8),
        ("DESERT", 1 << 9),
        ("TREE", 1 << 10),
        ("ATT_ELEC", 1 << 11),
        ("ATT_FIRE", 1 << 12),
        ("ATT_ICE", 1 << 13),
        ("ATT_WIND", 1 << 14),
        ("ATT_EARTH", 1 << 15),
        ("ATT_DARK", 1 << 16),
    ],
);
