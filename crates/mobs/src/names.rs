//! mob_names.txt records

use protoforge_core::{FileKind, FormatVersion, Vnum};
use protoforge_formats::{format_vnum, ProtoRow, TabularRecord};
use serde::{Deserialize, Serialize};

const COLUMNS: &[&str] = &["Vnum", "Name"];

/// Localized mob name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MobName {
    pub vnum: Vnum,
    pub vnum_end: Option<Vnum>,
    pub name: String,
}

impl TabularRecord for MobName {
    const KIND: FileKind = FileKind::MobNames;
    const HEADER_ROWS: usize = 1;
    const RANGE_IDS: bool = true;

    fn columns(_version: FormatVersion) -> &'static [&'static str] {
        COLUMNS
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

#[cfg(test)]
mod tests {
    use super::*;
    use protoforge_core::LineEnding;
    use protoforge_formats::{read_table, write_table};

    #[test]
    fn test_names_are_western_encoded() {
        let names = vec![MobName { vnum: 101, vnum_end: None, name: "Chien sauvage égaré".to_string() }];
        let bytes = write_table(&names, FormatVersion::Legacy, LineEnding::Crlf);

        // header row, then the single record
        assert!(bytes.ends_with(b"101\tChien sauvage \xE9gar\xE9\r\n"));

        let text = FileKind::MobNames.codepage().decode(&bytes);
        let read: Vec<MobName> = read_table(&text, FormatVersion::Legacy).collect();
        assert_eq!(read, names);
    }
}
