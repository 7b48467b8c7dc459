//! Client side item text files: item_names, itemdesc and item_list

use protoforge_core::{FileKind, FormatVersion, Vnum};
use protoforge_formats::{format_vnum, ProtoRow, TabularRecord};
use serde::{Deserialize, Serialize};

const NAME_COLUMNS: &[&str] = &["Vnum", "Name"];
const DESC_COLUMNS: &[&str] = &["Vnum", "Name", "Description", "Category"];
const LIST_COLUMNS: &[&str] = &["Vnum", "Type", "Icon", "Model", "Trailer"];

/// Placeholder written in the last item_list column
pub const LIST_TRAILER: &str = "_";

/// Localized item name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemName {
    pub vnum: Vnum,
    pub vnum_end: Option<Vnum>,
    pub name: String,
}

impl TabularRecord for ItemName {
    const KIND: FileKind = FileKind::ItemNames;
    const HEADER_ROWS: usize = 1;
    const RANGE_IDS: bool = true;

    fn columns(_version: FormatVersion) -> &'static [&'static str] {
        NAME_COLUMNS
    }

    fn from_row(row: &ProtoRow<'_>, _version: FormatVersion) -> Option<Self> {
        Some(Self {
            vnum: row.vnum()?,
            vnum_end: row.vnum_end(),
            name: row.get("Name").to_string(),
        })
    }

    fn to_fields(&self, _version: FormatVersion) -> Option<Vec<String>> {
        Some(vec![format_vnum(self.vnum, self.vnum_end), self.name.clone()])
    }
}

/// Tooltip text of an item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDesc {
    pub vnum: Vnum,
    pub name: String,
    pub description: String,
    pub category: String,
}

impl TabularRecord for ItemDesc {
    const KIND: FileKind = FileKind::ItemDesc;

    fn columns(_version: FormatVersion) -> &'static [&'static str] {
        DESC_COLUMNS
    }

    fn from_row(row: &ProtoRow<'_>, _version: FormatVersion) -> Option<Self> {
        Some(Self {
            vnum: row.vnum()?,
            name: row.get("Name").to_string(),
            description: row.get("Description").to_string(),
            category: row.get("Category").to_string(),
        })
    }

    fn to_fields(&self, _version: FormatVersion) -> Option<Vec<String>> {
        Some(vec![
            self.vnum.to_string(),
            self.name.clone(),
            self.description.clone(),
            self.category.clone(),
        ])
    }
}

/// Icon and model of an item
///
/// # Format
/// `vnum<TAB>type<TAB>icon<TAB>model<TAB>_`. The last column is kept as
/// read and written back; an empty one is written as `_`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemListEntry {
    pub vnum: Vnum,
    pub list_type: String,
    pub icon: String,
    pub model: String,
    pub trailer: String,
}

impl TabularRecord for ItemListEntry {
    const KIND: FileKind = FileKind::ItemList;

    fn columns(_version: FormatVersion) -> &'static [&'static str] {
        LIST_COLUMNS
    }

    fn from_row(row: &ProtoRow<'_>, _version: FormatVersion) -> Option<Self> {
        Some(Self {
            vnum: row.vnum()?,
            list_type: row.get("Type").to_string(),
            icon: row.get("Icon").to_string(),
            model: row.get("Model").to_string(),
            trailer: row.get("Trailer").to_string(),
        })
    }

    // The client cannot show an entry without an icon
    fn to_fields(&self, _version: FormatVersion) -> Option<Vec<String>> {
        if self.icon.is_empty() {
            return None;
        }
        Some(vec![
            self.vnum.to_string(),
            self.list_type.clone(),
            self.icon.clone(),
            self.model.clone(),
            if self.trailer.is_empty() { LIST_TRAILER.to_string() } else { self.trailer.clone() },
        ])
    }
}
