//! item_proto records
//!
//! # Format
//! One tab separated row per item, with a header row. Enumerations and
//! flags are written by name (`ITEM_WEAPON`, `ANTI_DROP|ANTI_SELL`), the
//! rest as plain numbers.

use protoforge_core::{FileKind, FormatVersion, Vnum};
use protoforge_formats::{format_vnum, ProtoRow, TabularRecord};
use protoforge_tables::item::{
    match_apply, ANTI_FLAGS, APPLY_TYPES, IMMUNE_FLAGS, ITEM_FLAGS, ITEM_SUBTYPES, ITEM_TYPES,
    LIMIT_TYPES, MASK_SUBTYPES, MASK_TYPES, WEAR_FLAGS,
};
use serde::{Deserialize, Serialize};

pub const LIMIT_SLOTS: usize = 2;
pub const APPLY_SLOTS: usize = 4;
pub const VALUE_SLOTS: usize = 6;

const LEGACY_COLUMNS: &[&str] = &[
    "Vnum", "Name", "Type", "SubType", "Size", "AntiFlags", "Flags", "WearFlags",
    "ImmuneFlags", "Gold", "ShopBuyPrice", "RefinedVnum", "RefineSet", "MagicPct",
    "LimitType0", "LimitValue0", "LimitType1", "LimitValue1",
    "ApplyType0", "ApplyValue0", "ApplyType1", "ApplyValue1", "ApplyType2", "ApplyValue2",
    "Value0", "Value1", "Value2", "Value3", "Value4", "Value5",
    "Specular", "Socket", "AddonType",
];

const CLASSIC_COLUMNS: &[&str] = &[
    "Vnum", "Name", "Type", "SubType", "Size", "AntiFlags", "Flags", "WearFlags",
    "ImmuneFlags", "Gold", "ShopBuyPrice", "RefinedVnum", "RefineSet", "MagicPct",
    "LimitType0", "LimitValue0", "LimitType1", "LimitValue1",
    "ApplyType0", "ApplyValue0", "ApplyType1", "ApplyValue1", "ApplyType2", "ApplyValue2",
    "Value0", "Value1", "Value2", "Value3", "Value4", "Value5",
    "Specular", "Socket", "AddonType",
    "MaskType", "MaskSubType",
];

const MODERN_COLUMNS: &[&str] = &[
    "Vnum", "Name", "Type", "SubType", "Size", "AntiFlags", "Flags", "WearFlags",
    "ImmuneFlags", "Gold", "ShopBuyPrice", "RefinedVnum", "RefineSet", "MagicPct",
    "LimitType0", "LimitValue0", "LimitType1", "LimitValue1",
    "ApplyType0", "ApplyValue0", "ApplyType1", "ApplyValue1", "ApplyType2", "ApplyValue2",
    "ApplyType3", "ApplyValue3",
    "Value0", "Value1", "Value2", "Value3", "Value4", "Value5",
    "Specular", "Socket", "AddonType",
    "MaskType", "MaskSubType",
];

/// Number of apply slots a version stores
pub fn apply_slots(version: FormatVersion) -> usize {
    match version {
        FormatVersion::Modern => 4,
        FormatVersion::Legacy | FormatVersion::Classic => 3,
    }
}

/// Whether a version stores the mask type columns
pub fn has_mask(version: FormatVersion) -> bool {
    version != FormatVersion::Legacy
}

/// An item prototype
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub vnum: Vnum,
    /// Last vnum of a `start~end` range row
    pub vnum_end: Option<Vnum>,
    pub name: String,
    pub item_type: u32,
    pub sub_type: u32,
    pub size: u32,
    pub anti_flags: u64,
    pub flags: u64,
    pub wear_flags: u64,
    pub immune_flags: u64,
    pub gold: i64,
    pub shop_buy_price: i64,
    pub refined_vnum: Vnum,
    pub refine_set: u32,
    pub magic_pct: u32,
    pub limit_types: [u32; LIMIT_SLOTS],
    pub limit_values: [i64; LIMIT_SLOTS],
    pub apply_types: [u32; APPLY_SLOTS],
    pub apply_values: [i64; APPLY_SLOTS],
    pub values: [i64; VALUE_SLOTS],
    pub specular: u32,
    pub socket_pct: u32,
    pub addon_type: i32,
    pub mask_type: u32,
    pub mask_sub_type: u32,
}

impl TabularRecord for Item {
    const KIND: FileKind = FileKind::ItemProto;
    const HEADER_ROWS: usize = 1;
    const RANGE_IDS: bool = true;

    fn columns(version: FormatVersion) -> &'static [&'static str] {
        match version {
            FormatVersion::Legacy => LEGACY_COLUMNS,
            FormatVersion::Classic => CLASSIC_COLUMNS,
            FormatVersion::Modern => MODERN_COLUMNS,
        }
    }

    // Columns the version does not declare read as "" and fall back to 0
    fn from_row(row: &ProtoRow<'_>, _version: FormatVersion) -> Option<Self> {
        let vnum = row.vnum()?;
        let item_type = ITEM_TYPES.match_token(row.get("Type"));
        let mask_type = MASK_TYPES.match_token(row.get("MaskType"));

        Some(Self {
            vnum,
            vnum_end: row.vnum_end(),
            name: row.get("Name").to_string(),
            item_type: item_type.unwrap_or_default(),
            sub_type: ITEM_SUBTYPES
                .match_token(item_type, row.get("SubType"))
                .unwrap_or_default(),
            size: row.parse("Size"),
            anti_flags: ANTI_FLAGS.pack(row.get("AntiFlags")),
            flags: ITEM_FLAGS.pack(row.get("Flags")),
            wear_flags: WEAR_FLAGS.pack(row.get("WearFlags")),
            immune_flags: IMMUNE_FLAGS.pack(row.get("ImmuneFlags")),
            gold: row.parse("Gold"),
            shop_buy_price: row.parse("ShopBuyPrice"),
            refined_vnum: row.parse("RefinedVnum"),
            refine_set: row.parse("RefineSet"),
            magic_pct: row.parse("MagicPct"),
            limit_types: std::array::from_fn(|i| {
                LIMIT_TYPES.value_or(row.get(&format!("LimitType{}", i)), 0)
            }),
            limit_values: std::array::from_fn(|i| row.parse(&format!("LimitValue{}", i))),
            apply_types: std::array::from_fn(|i| {
                match_apply(row.get(&format!("ApplyType{}", i))).unwrap_or_default()
            }),
            apply_values: std::array::from_fn(|i| row.parse(&format!("ApplyValue{}", i))),
            values: std::array::from_fn(|i| row.parse(&format!("Value{}", i))),
            specular: row.parse("Specular"),
            socket_pct: row.parse("Socket"),
            addon_type: row.parse("AddonType"),
            mask_type: mask_type.unwrap_or_default(),
            mask_sub_type: MASK_SUBTYPES
                .match_token(mask_type, row.get("MaskSubType"))
                .unwrap_or_default(),
        })
    }

    fn to_fields(&self, version: FormatVersion) -> Option<Vec<String>> {
        let mut fields = vec![
            format_vnum(self.vnum, self.vnum_end),
            self.name.clone(),
            ITEM_TYPES.format(self.item_type),
            ITEM_SUBTYPES.format(self.item_type, self.sub_type),
            self.size.to_string(),
            ANTI_FLAGS.format(self.anti_flags),
            ITEM_FLAGS.format(self.flags),
            WEAR_FLAGS.format(self.wear_flags),
            IMMUNE_FLAGS.format(self.immune_flags),
            self.gold.to_string(),
            self.shop_buy_price.to_string(),
            self.refined_vnum.to_string(),
            self.refine_set.to_string(),
            self.magic_pct.to_string(),
        ];

        for (kind, value) in self.limit_types.iter().zip(&self.limit_values) {
            fields.push(LIMIT_TYPES.format(*kind));
            fields.push(value.to_string());
        }
        for (kind, value) in self.apply_types.iter().zip(&self.apply_values).take(apply_slots(version)) {
            fields.push(APPLY_TYPES.format(*kind));
            fields.push(value.to_string());
        }
        fields.extend(self.values.iter().map(i64::to_string));
        fields.push(self.specular.to_string());
        fields.push(self.socket_pct.to_string());
        fields.push(self.addon_type.to_string());

        if has_mask(version) {
            fields.push(MASK_TYPES.format(self.mask_type));
            fields.push(MASK_SUBTYPES.format(self.mask_type, self.mask_sub_type));
        }

        Some(fields)
    }
}
