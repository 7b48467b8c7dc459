//! Item tables: types, subtypes, masks, limits, applies and flags

use crate::enums::{EnumTable, SubtypeTables};
use crate::flags::FlagTable;

pub const ITEM_NONE: u32 = 0;
pub const ITEM_WEAPON: u32 = 1;
pub const ITEM_ARMOR: u32 = 2;
pub const ITEM_USE: u32 = 3;
pub const ITEM_AUTOUSE: u32 = 4;
pub const ITEM_MATERIAL: u32 = 5;
pub const ITEM_SPECIAL: u32 = 6;
pub const ITEM_TOOL: u32 = 7;
pub const ITEM_LOTTERY: u32 = 8;
pub const ITEM_METIN: u32 = 10;
pub const ITEM_FISH: u32 = 12;
pub const ITEM_RESOURCE: u32 = 14;
pub const ITEM_UNIQUE: u32 = 16;
pub const ITEM_QUEST: u32 = 18;
pub const ITEM_COSTUME: u32 = 28;
pub const ITEM_DS: u32 = 29;
pub const ITEM_EXTRACT: u32 = 31;

pub static ITEM_TYPES: EnumTable = EnumTable::new(
    "item type",
    &[
        ("ITEM_NONE", ITEM_NONE),
        ("ITEM_WEAPON", ITEM_WEAPON),
        ("ITEM_ARMOR", ITEM_ARMOR),
        ("ITEM_USE", ITEM_USE),
        ("ITEM_AUTOUSE", ITEM_AUTOUSE),
        ("ITEM_MATERIAL", ITEM_MATERIAL),
        ("ITEM_SPECIAL", ITEM_SPECIAL),
        ("ITEM_TOOL", ITEM_TOOL),
        ("ITEM_LOTTERY", ITEM_LOTTERY),
        ("ITEM_ELK", 9),
        ("ITEM_METIN", ITEM_METIN),
        ("ITEM_CONTAINER", 11),
        ("ITEM_FISH", ITEM_FISH),
        ("ITEM_ROD", 13),
        ("ITEM_RESOURCE", ITEM_RESOURCE),
        ("ITEM_CAMPFIRE", 15),
        ("ITEM_UNIQUE", ITEM_UNIQUE),
        ("ITEM_SKILLBOOK", 17),
        ("ITEM_QUEST", ITEM_QUEST),
        ("ITEM_POLYMORPH", 19),
        ("ITEM_TREASURE_BOX", 20),
        ("ITEM_TREASURE_KEY", 21),
        ("ITEM_SKILLFORGET", 22),
        ("ITEM_GIFTBOX", 23),
        ("ITEM_PICK", 24),
        ("ITEM_HAIR", 25),
        ("ITEM_TOTEM", 26),
        ("ITEM_BLEND", 27),
        ("ITEM_COSTUME", ITEM_COSTUME),
        ("ITEM_DS", ITEM_DS),
        ("ITEM_SPECIAL_DS", 30),
        ("ITEM_EXTRACT", ITEM_EXTRACT),
        ("ITEM_SECONDARY_COIN", 32),
        ("ITEM_RING", 33),
        ("ITEM_BELT", 34),
    ],
);

static WEAPON_SUBTYPES: EnumTable = EnumTable::new(
    "weapon subtype",
    &[
        ("WEAPON_SWORD", 0),
        ("WEAPON_DAGGER", 1),
        ("WEAPON_BOW", 2),
        ("WEAPON_TWO_HANDED", 3),
        ("WEAPON_BELL", 4),
        ("WEAPON_FAN", 5),
        ("WEAPON_ARROW", 6),
        ("WEAPON_MOUNT_SPEAR", 7),
    ],
);

static ARMOR_SUBTYPES: EnumTable = EnumTable::new(
    "armor subtype",
    &[
        ("ARMOR_BODY", 0),
        ("ARMOR_HEAD", 1),
        ("ARMOR_SHIELD", 2),
        ("ARMOR_WRIST", 3),
        ("ARMOR_FOOTS", 4),
        ("ARMOR_NECK", 5),
        ("ARMOR_EAR", 6),
    ],
);

static USE_SUBTYPES: EnumTable = EnumTable::new(
    "use subtype",
    &[
        ("USE_POTION", 0),
        ("USE_TALISMAN", 1),
        ("USE_TUNING", 2),
        ("USE_MOVE", 3),
        ("USE_TREASURE_BOX", 4),
        ("USE_MONEYBAG", 5),
        ("USE_BAIT", 6),
        ("USE_ABILITY_UP", 7),
        ("USE_AFFECT", 8),
        ("USE_CREATE_STONE", 9),
        ("USE_SPECIAL", 10),
        ("USE_POTION_NODELAY", 11),
        ("USE_CLEAR", 12),
        ("USE_INVISIBILITY", 13),
        ("USE_DETACHMENT", 14),
        ("USE_BUCKET", 15),
        ("USE_POTION_CONTINUE", 16),
        ("USE_CLEAN_SOCKET", 17),
        ("USE_CHANGE_ATTRIBUTE", 18),
        ("USE_ADD_ATTRIBUTE", 19),
        ("USE_ADD_ACCESSORY_SOCKET", 20),
        ("USE_PUT_INTO_ACCESSORY_SOCKET", 21),
        ("USE_ADD_ATTRIBUTE2", 22),
        ("USE_RECIPE", 23),
        ("USE_CHANGE_ATTRIBUTE2", 24),
        ("USE_BIND", 25),
        ("USE_UNBIND", 26),
        ("USE_TIME_CHARGE_PER", 27),
        ("USE_TIME_CHARGE_FIX", 28),
        ("USE_PUT_INTO_BELT_SOCKET", 29),
        ("USE_PUT_INTO_RING_SOCKET", 30),
    ],
);

static AUTOUSE_SUBTYPES: EnumTable = EnumTable::new(
    "autouse subtype",
    &[
        ("AUTOUSE_POTION", 0),
        ("AUTOUSE_ABILITY_UP", 1),
        ("AUTOUSE_BOMB", 2),
        ("AUTOUSE_GOLD", 3),
        ("AUTOUSE_MONEYBAG", 4),
        ("AUTOUSE_TREASURE_BOX", 5),
    ],
);

static MATERIAL_SUBTYPES: EnumTable = EnumTable::new(
    "material subtype",
    &[
        ("MATERIAL_LEATHER", 0),
        ("MATERIAL_BLOOD", 1),
        ("MATERIAL_ROOT", 2),
        ("MATERIAL_NEEDLE", 3),
        ("MATERIAL_JEWEL", 4),
        ("MATERIAL_DS_REFINE_NORMAL", 5),
        ("MATERIAL_DS_REFINE_BLESSED", 6),
        ("MATERIAL_DS_REFINE_HOLLY", 7),
    ],
);

static SPECIAL_SUBTYPES: EnumTable = EnumTable::new(
    "special subtype",
    &[
        ("SPECIAL_MAP", 0),
        ("SPECIAL_KEY", 1),
        ("SPECIAL_DOC", 2),
        ("SPECIAL_SPIRIT", 3),
    ],
);

static TOOL_SUBTYPES: EnumTable = EnumTable::new("tool subtype", &[("TOOL_FISHING_ROD", 0)]);

static LOTTERY_SUBTYPES: EnumTable = EnumTable::new(
    "lottery subtype",
    &[("LOTTERY_TICKET", 0), ("LOTTERY_INSTANT", 1)],
);

static METIN_SUBTYPES: EnumTable = EnumTable::new(
    "metin subtype",
    &[("METIN_NORMAL", 0), ("METIN_GOLD", 1)],
);

static FISH_SUBTYPES: EnumTable = EnumTable::new(
    "fish subtype",
    &[("FISH_ALIVE", 0), ("FISH_DEAD", 1)],
);

static RESOURCE_SUBTYPES: EnumTable = EnumTable::new(
    "resource subtype",
    &[
        ("RESOURCE_FISHBONE", 0),
        ("RESOURCE_WATERSTONEPIECE", 1),
        ("RESOURCE_WATERSTONE", 2),
        ("RESOURCE_BLOOD_PEARL", 3),
        ("RESOURCE_BLUE_PEARL", 4),
        ("RESOURCE_WHITE_PEARL", 5),
        ("RESOURCE_BUCKET", 6),
        ("RESOURCE_CRYSTAL", 7),
        ("RESOURCE_GEM", 8),
        ("RESOURCE_STONE", 9),
        ("RESOURCE_METIN", 10),
        ("RESOURCE_ORE", 11),
    ],
);

static UNIQUE_SUBTYPES: EnumTable = EnumTable::new(
    "unique subtype",
    &[
        ("UNIQUE_NONE", 0),
        ("UNIQUE_BOOK", 1),
        ("UNIQUE_SPECIAL_RIDE", 2),
        ("UNIQUE_SPECIAL_MOUNT_RIDE", 3),
    ],
);

static QUEST_SUBTYPES: EnumTable = EnumTable::new(
    "quest subtype",
    &[("QUEST_NONE", 0), ("QUEST_PET_PAY", 1), ("QUEST_WARP", 2)],
);

static COSTUME_SUBTYPES: EnumTable = EnumTable::new(
    "costume subtype",
    &[("COSTUME_BODY", 0), ("COSTUME_HAIR", 1)],
);

static DS_SUBTYPES: EnumTable = EnumTable::new(
    "dragon soul subtype",
    &[
        ("DS_SLOT1", 0),
        ("DS_SLOT2", 1),
        ("DS_SLOT3", 2),
        ("DS_SLOT4", 3),
        ("DS_SLOT5", 4),
        ("DS_SLOT6", 5),
    ],
);

static EXTRACT_SUBTYPES: EnumTable = EnumTable::new(
    "extract subtype",
    &[("EXTRACT_DRAGON_SOUL", 0), ("EXTRACT_DRAGON_HEART", 1)],
);

/// Item subtypes, selected by item type
pub static ITEM_SUBTYPES: SubtypeTables = SubtypeTables::new("item subtype", &ITEM_SUBTYPE_TABLES);

static ITEM_SUBTYPE_TABLES: [(u32, &EnumTable); 16] = [
    (ITEM_WEAPON, &WEAPON_SUBTYPES),
    (ITEM_ARMOR, &ARMOR_SUBTYPES),
    (ITEM_USE, &USE_SUBTYPES),
    (ITEM_AUTOUSE, &AUTOUSE_SUBTYPES),
    (ITEM_MATERIAL, &MATERIAL_SUBTYPES),
    (ITEM_SPECIAL, &SPECIAL_SUBTYPES),
    (ITEM_TOOL, &TOOL_SUBTYPES),
    (ITEM_LOTTERY, &LOTTERY_SUBTYPES),
    (ITEM_METIN, &METIN_SUBTYPES),
    (ITEM_FISH, &FISH_SUBTYPES),
    (ITEM_RESOURCE, &RESOURCE_SUBTYPES),
    (ITEM_UNIQUE, &UNIQUE_SUBTYPES),
    (ITEM_QUEST, &QUEST_SUBTYPES),
    (ITEM_COSTUME, &COSTUME_SUBTYPES),
    (ITEM_DS, &DS_SUBTYPES),
    (ITEM_EXTRACT, &EXTRACT_SUBTYPES),
];

pub static MASK_TYPES: EnumTable = EnumTable::new(
    "mask type",
    &[
        ("MASK_ITEM_TYPE_NONE", 0),
        ("MASK_ITEM_TYPE_MOUNT_PET", 1),
        ("MASK_ITEM_TYPE_EQUIPMENT_WEAPON", 2),
        ("MASK_ITEM_TYPE_EQUIPMENT_ARMOR", 3),
        ("MASK_ITEM_TYPE_EQUIPMENT_JEWELRY", 4),
        ("MASK_ITEM_TYPE_TUNING", 5),
        ("MASK_ITEM_TYPE_POTION", 6),
        ("MASK_ITEM_TYPE_FISHING_PICK", 7),
        ("MASK_ITEM_TYPE_DRAGON_STONE", 8),
        ("MASK_ITEM_TYPE_COSTUMES", 9),
        ("MASK_ITEM_TYPE_SKILL", 10),
        ("MASK_ITEM_TYPE_UNIQUE", 11),
        ("MASK_ITEM_TYPE_ETC", 12),
    ],
);

static MASK_MOUNT_PET_SUBTYPES: EnumTable = EnumTable::new(
    "mount/pet mask subtype",
    &[
        ("MASK_ITEM_SUBTYPE_MOUNT_PET_MOUNT", 0),
        ("MASK_ITEM_SUBTYPE_MOUNT_PET_CHARGED_PET", 1),
        ("MASK_ITEM_SUBTYPE_MOUNT_PET_FREE_PET", 2),
        ("MASK_ITEM_SUBTYPE_MOUNT_PET_EGG", 3),
    ],
);

static MASK_WEAPON_SUBTYPES: EnumTable = EnumTable::new(
    "weapon mask subtype",
    &[
        ("MASK_ITEM_SUBTYPE_WEAPON_WEAPON_SWORD", 0),
        ("MASK_ITEM_SUBTYPE_WEAPON_WEAPON_TWO_HANDED", 1),
        ("MASK_ITEM_SUBTYPE_WEAPON_WEAPON_DAGGER", 2),
        ("MASK_ITEM_SUBTYPE_WEAPON_WEAPON_BOW", 3),
        ("MASK_ITEM_SUBTYPE_WEAPON_WEAPON_BELL", 4),
        ("MASK_ITEM_SUBTYPE_WEAPON_WEAPON_FAN", 5),
    ],
);

static MASK_ARMOR_SUBTYPES: EnumTable = EnumTable::new(
    "armor mask subtype",
    &[
        ("MASK_ITEM_SUBTYPE_ARMOR_ARMOR_BODY", 0),
        ("MASK_ITEM_SUBTYPE_ARMOR_ARMOR_HELMET", 1),
        ("MASK_ITEM_SUBTYPE_ARMOR_ARMOR_SHIELD", 2),
    ],
);

static MASK_JEWELRY_SUBTYPES: EnumTable = EnumTable::new(
    "jewelry mask subtype",
    &[
        ("MASK_ITEM_SUBTYPE_JEWELRY_ARMOR_WRIST", 0),
        ("MASK_ITEM_SUBTYPE_JEWELRY_ARMOR_NECK", 1),
        ("MASK_ITEM_SUBTYPE_JEWELRY_ARMOR_EAR", 2),
        ("MASK_ITEM_SUBTYPE_JEWELRY_ITEM_BELT", 3),
        ("MASK_ITEM_SUBTYPE_JEWELRY_ARMOR_FOOTS", 4),
    ],
);

static MASK_TUNING_SUBTYPES: EnumTable = EnumTable::new(
    "tuning mask subtype",
    &[
        ("MASK_ITEM_SUBTYPE_TUNING_RESOURCE", 0),
        ("MASK_ITEM_SUBTYPE_TUNING_STONE", 1),
        ("MASK_ITEM_SUBTYPE_TUNING_ETC", 2),
    ],
);

static MASK_POTION_SUBTYPES: EnumTable = EnumTable::new(
    "potion mask subtype",
    &[
        ("MASK_ITEM_SUBTYPE_POTION_ABILITY", 0),
        ("MASK_ITEM_SUBTYPE_POTION_HAIRDYE", 1),
        ("MASK_ITEM_SUBTYPE_POTION_ETC", 2),
    ],
);

/// Mask subtypes, selected by mask type
pub static MASK_SUBTYPES: SubtypeTables = SubtypeTables::new("mask subtype", &MASK_SUBTYPE_TABLES);

static MASK_SUBTYPE_TABLES: [(u32, &EnumTable); 6] = [
    (1, &MASK_MOUNT_PET_SUBTYPES),
    (2, &MASK_WEAPON_SUBTYPES),
    (3, &MASK_ARMOR_SUBTYPES),
    (4, &MASK_JEWELRY_SUBTYPES),
    (5, &MASK_TUNING_SUBTYPES),
    (6, &MASK_POTION_SUBTYPES),
];

pub static LIMIT_TYPES: EnumTable = EnumTable::new(
    "limit type",
    &[
        ("LIMIT_NONE", 0),
        ("LIMIT_LEVEL", 1),
        ("LIMIT_STR", 2),
        ("LIMIT_DEX", 3),
        ("LIMIT_INT", 4),
        ("LIMIT_CON", 5),
        ("LIMIT_PCBANG", 6),
        ("LIMIT_REAL_TIME", 7),
        ("LIMIT_REAL_TIME_START_FIRST_USE", 8),
        ("LIMIT_TIMER_BASED_ON_WEAR", 9),
    ],
);

pub static APPLY_TYPES: EnumTable = EnumTable::new(
    "apply type",
    &[
        ("APPLY_NONE", 0),
        ("APPLY_MAX_HP", 1),
        ("APPLY_MAX_SP", 2),
        ("APPLY_CON", 3),
        ("APPLY_INT", 4),
        ("APPLY_STR", 5),
        ("APPLY_DEX", 6),
        ("APPLY_ATT_SPEED", 7),
        ("APPLY_MOV_SPEED", 8),
        ("APPLY_CAST_SPEED", 9),
        ("APPLY_HP_REGEN", 10),
        ("APPLY_SP_REGEN", 11),
        ("APPLY_POISON_PCT", 12),
        ("APPLY_STUN_PCT", 13),
        ("APPLY_SLOW_PCT", 14),
        ("APPLY_CRITICAL_PCT", 15),
        ("APPLY_PENETRATE_PCT", 16),
        ("APPLY_ATTBONUS_HUMAN", 17),
        ("APPLY_ATTBONUS_ANIMAL", 18),
        ("APPLY_ATTBONUS_ORC", 19),
        ("APPLY_ATTBONUS_MILGYO", 20),
        ("APPLY_ATTBONUS_UNDEAD", 21),
        ("APPLY_ATTBONUS_DEVIL", 22),
        ("APPLY_STEAL_HP", 23),
        ("APPLY_STEAL_SP", 24),
        ("APPLY_MANA_BURN_PCT", 25),
        ("APPLY_DAMAGE_SP_RECOVER", 26),
        ("APPLY_BLOCK", 27),
        ("APPLY_DODGE", 28),
        ("APPLY_RESIST_SWORD", 29),
        ("APPLY_RESIST_TWOHAND", 30),
        ("APPLY_RESIST_DAGGER", 31),
        ("APPLY_RESIST_BELL", 32),
        ("APPLY_RESIST_FAN", 33),
        ("APPLY_RESIST_BOW", 34),
        ("APPLY_RESIST_FIRE", 35),
        ("APPLY_RESIST_ELEC", 36),
        ("APPLY_RESIST_MAGIC", 37),
        ("APPLY_RESIST_WIND", 38),
        ("APPLY_REFLECT_MELEE", 39),
        ("APPLY_REFLECT_CURSE", 40),
        ("APPLY_POISON_REDUCE", 41),
        ("APPLY_KILL_SP_RECOVER", 42),
        ("APPLY_EXP_DOUBLE_BONUS", 43),
        ("APPLY_GOLD_DOUBLE_BONUS", 44),
        ("APPLY_ITEM_DROP_BONUS", 45),
        ("APPLY_POTION_BONUS", 46),
        ("APPLY_KILL_HP_RECOVER", 47),
        ("APPLY_IMMUNE_STUN", 48),
        ("APPLY_IMMUNE_SLOW", 49),
        ("APPLY_IMMUNE_FALL", 50),
        ("APPLY_SKILL", 51),
        ("APPLY_BOW_DISTANCE", 52),
        ("APPLY_ATT_GRADE_BONUS", 53),
        ("APPLY_DEF_GRADE_BONUS", 54),
        ("APPLY_MAGIC_ATT_GRADE", 55),
        ("APPLY_MAGIC_DEF_GRADE", 56),
        ("APPLY_CURSE_PCT", 57),
        ("APPLY_MAX_STAMINA", 58),
        ("APPLY_ATTBONUS_WARRIOR", 59),
        ("APPLY_ATTBONUS_ASSASSIN", 60),
        ("APPLY_ATTBONUS_SURA", 61),
        ("APPLY_ATTBONUS_SHAMAN", 62),
        ("APPLY_ATTBONUS_MONSTER", 63),
        ("APPLY_MALL_ATTBONUS", 64),
        ("APPLY_MALL_DEFBONUS", 65),
        ("APPLY_MALL_EXPBONUS", 66),
        ("APPLY_MALL_ITEMBONUS", 67),
        ("APPLY_MALL_GOLDBONUS", 68),
        ("APPLY_MAX_HP_PCT", 69),
        ("APPLY_MAX_SP_PCT", 70),
        ("APPLY_SKILL_DAMAGE_BONUS", 71),
        ("APPLY_NORMAL_HIT_DAMAGE_BONUS", 72),
        ("APPLY_SKILL_DEFEND_BONUS", 73),
        ("APPLY_NORMAL_HIT_DEFEND_BONUS", 74),
    ],
);

const APPLY_PREFIX: &str = "APPLY_";

/// Match an apply type written with or without the `APPLY_` prefix
///
/// Blend and special group files write bare names such as `CON`.
pub fn match_apply(token: &str) -> Option<u32> {
    APPLY_TYPES.match_token(token).or_else(|| {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        APPLY_TYPES.match_token(&format!("{}{}", APPLY_PREFIX, token))
    })
}

/// Apply type name without the `APPLY_` prefix
pub fn apply_short_name(value: u32) -> String {
    match APPLY_TYPES.name_of(value) {
        Some(name) => name.trim_start_matches(APPLY_PREFIX).to_string(),
        None => value.to_string(),
    }
}

pub static ANTI_FLAGS: FlagTable = FlagTable::new(
    "anti flag",
    &[
        ("ANTI_FEMALE", 1 << 0),
        ("ANTI_MALE", 1 << 1),
        ("ANTI_WARRIOR", 1 << 2),
        ("ANTI_ASSASSIN", 1 << 3),
        ("ANTI_SURA", 1 << 4),
        ("ANTI_MUDANG", 1 << 5),
        ("ANTI_GET", 1 << 6),
        ("ANTI_DROP", 1 << 7),
        ("ANTI_SELL", 1 << 8),
        ("ANTI_EMPIRE_A", 1 << 9),
        ("ANTI_EMPIRE_B", 1 << 10),
        ("ANTI_EMPIRE_C", 1 << 11),
        ("ANTI_SAVE", 1 << 12),
        ("ANTI_GIVE", 1 << 13),
        ("ANTI_PKDROP", 1 << 14),
        ("ANTI_STACK", 1 << 15),
        ("ANTI_MYSHOP", 1 << 16),
        ("ANTI_SAFEBOX", 1 << 17),
    ],
);

pub static ITEM_FLAGS: FlagTable = FlagTable::new(
    "item flag",
    &[
        ("REFINEABLE", 1 << 0),
        ("SAVE", 1 << 1),
        ("STACKABLE", 1 << 2),
        ("COUNT_PER_1GOLD", 1 << 3),
        ("SLOW_QUERY", 1 << 4),
        ("RARE", 1 << 5),
        ("UNIQUE", 1 << 6),
        ("MAKECOUNT", 1 << 7),
        ("IRREMOVABLE", 1 << 8),
        ("CONFIRM_WHEN_USE", 1 << 9),
        ("QUEST_USE", 1 << 10),
        ("QUEST_USE_MULTIPLE", 1 << 11),
        ("QUEST_GIVE", 1 << 12),
        ("LOG", 1 << 13),
        ("APPLICABLE", 1 << 14),
    ],
);

pub static WEAR_FLAGS: FlagTable = FlagTable::new(
    "wear flag",
    &[
        ("WEAR_BODY", 1 << 0),
        ("WEAR_HEAD", 1 << 1),
        ("WEAR_FOOTS", 1 << 2),
        ("WEAR_WRIST", 1 << 3),
        ("WEAR_WEAPON", 1 << 4),
        ("WEAR_NECK", 1 << 5),
        ("WEAR_EAR", 1 << 6),
        ("WEAR_UNIQUE", 1 << 7),
        ("WEAR_SHIELD", 1 << 8),
        ("WEAR_ARROW", 1 << 9),
        ("WEAR_HAIR", 1 << 10),
        ("WEAR_ABILITY", 1 << 11),
    ],
);

/// Immunities, shared by items and mobs
pub static IMMUNE_FLAGS: FlagTable = FlagTable::new(
    "immune flag",
    &[
        ("PARA", 1 << 0),
        ("CURSE", 1 << 1),
        ("STUN", 1 << 2),
        ("SLEEP", 1 << 3),
        ("SLOW", 1 << 4),
        ("POISON", 1 << 5),
        ("TERROR", 1 << 6),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_prefix_is_optional() {
        assert_eq!(match_apply("CON"), Some(3));
        assert_eq!(match_apply("APPLY_CON"), Some(3));
        assert_eq!(match_apply("con"), Some(3));
        assert_eq!(match_apply("CHARISMA"), None);
        assert_eq!(match_apply(""), None);
    }

    #[test]
    fn test_apply_short_name() {
        assert_eq!(apply_short_name(3), "CON");
        assert_eq!(apply_short_name(999), "999");
    }

    #[test]
    fn test_every_subtype_parent_is_a_type() {
        for (parent, _) in ITEM_SUBTYPES.entries {
            assert!(ITEM_TYPES.name_of(*parent).is_some());
        }
        for (parent, _) in MASK_SUBTYPES.entries {
            assert!(MASK_TYPES.name_of(*parent).is_some());
        }
    }
}
