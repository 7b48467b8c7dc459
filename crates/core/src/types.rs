//! Core type definitions

use crate::codepage::Codepage;
use crate::error::ProtoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Legacy numeric id of an item or mob
pub type Vnum = u32;

/// A reference to an entity by vnum or by name
///
/// Group style files let designers write either `27001` or `Red Potion`.
/// Names stay unresolved until the name resolver swaps them for a vnum.
/// Serializes as a bare number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Vnum(Vnum),
    Name(String),
}

impl Reference {
    /// Classify a raw token; all-digit tokens are vnums, anything else a name
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(vnum) = token.parse() {
                return Reference::Vnum(vnum);
            }
        }
        Reference::Name(token.to_string())
    }

    pub fn vnum(&self) -> Option<Vnum> {
        match self {
            Reference::Vnum(vnum) => Some(*vnum),
            Reference::Name(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Reference::Vnum(_) => None,
            Reference::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Vnum(vnum) => write!(f, "{}", vnum),
            Reference::Name(name) => f.write_str(name),
        }
    }
}

impl From<Vnum> for Reference {
    fn from(vnum: Vnum) -> Self {
        Reference::Vnum(vnum)
    }
}

/// On-disk schema revision of item_proto / mob_proto
///
/// Each revision has its own ordered column list. `Legacy` is what the
/// oldest tools emit and is used whenever a caller does not say otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FormatVersion {
    #[default]
    Legacy,
    Classic,
    Modern,
}

impl FormatVersion {
    pub const ALL: [FormatVersion; 3] = [
        FormatVersion::Legacy,
        FormatVersion::Classic,
        FormatVersion::Modern,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatVersion::Legacy => "legacy",
            FormatVersion::Classic => "classic",
            FormatVersion::Modern => "modern",
        }
    }
}

impl FromStr for FormatVersion {
    type Err = ProtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "legacy" | "default" | "v1" => Ok(FormatVersion::Legacy),
            "classic" | "v2" => Ok(FormatVersion::Classic),
            "modern" | "v3" => Ok(FormatVersion::Modern),
            other => Err(ProtoError::UnknownVersion(other.to_string())),
        }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line terminator used when writing proto files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineEnding {
    /// `\r\n`, what the original Windows tools write
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = ProtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crlf" | "windows" => Ok(LineEnding::Crlf),
            "lf" | "unix" => Ok(LineEnding::Lf),
            other => Err(ProtoError::Config(format!("unknown line ending '{}'", other))),
        }
    }
}

/// How a file kind is laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One delimiter separated record per line
    Tabular,
    /// `Group name { ... }` or `section ... end` blocks
    Sectioned,
}

/// Every proto file the codecs understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    ItemProto,
    ItemNames,
    ItemDesc,
    ItemList,
    Blend,
    SpecialItemGroup,
    Cube,
    MobProto,
    MobNames,
    MobDropItem,
    CommonDropItem,
    MobGroup,
    MobGroupGroup,
}

impl FileKind {
    pub const ALL: [FileKind; 13] = [
        FileKind::ItemProto,
        FileKind::ItemNames,
        FileKind::ItemDesc,
        FileKind::ItemList,
        FileKind::Blend,
        FileKind::SpecialItemGroup,
        FileKind::Cube,
        FileKind::MobProto,
        FileKind::MobNames,
        FileKind::MobDropItem,
        FileKind::CommonDropItem,
        FileKind::MobGroup,
        FileKind::MobGroupGroup,
    ];

    /// Codepage the file is stored in
    pub fn codepage(&self) -> Codepage {
        match self {
            FileKind::ItemNames | FileKind::ItemDesc | FileKind::ItemList | FileKind::MobNames => {
                Codepage::Western
            }
            _ => Codepage::Korean,
        }
    }

    /// Conventional file name inside a client/server data folder
    pub fn file_name(&self) -> &'static str {
        match self {
            FileKind::ItemProto => "item_proto.txt",
            FileKind::ItemNames => "item_names.txt",
            FileKind::ItemDesc => "itemdesc.txt",
            FileKind::ItemList => "item_list.txt",
            FileKind::Blend => "blend.txt",
            FileKind::SpecialItemGroup => "special_item_group.txt",
            FileKind::Cube => "cube.txt",
            FileKind::MobProto => "mob_proto.txt",
            FileKind::MobNames => "mob_names.txt",
            FileKind::MobDropItem => "mob_drop_item.txt",
            FileKind::CommonDropItem => "common_drop_item.txt",
            FileKind::MobGroup => "group.txt",
            FileKind::MobGroupGroup => "group_group.txt",
        }
    }

    /// Whether the file holds one record per line or named blocks
    pub fn layout(&self) -> Layout {
        match self {
            FileKind::ItemProto
            | FileKind::ItemNames
            | FileKind::ItemDesc
            | FileKind::ItemList
            | FileKind::MobProto
            | FileKind::MobNames
            | FileKind::CommonDropItem => Layout::Tabular,
            FileKind::Blend
            | FileKind::SpecialItemGroup
            | FileKind::Cube
            | FileKind::MobDropItem
            | FileKind::MobGroup
            | FileKind::MobGroupGroup => Layout::Sectioned,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.file_name().trim_end_matches(".txt")
    }
}

impl FromStr for FileKind {
    type Err = ProtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_end_matches(".txt").to_ascii_lowercase().replace('-', "_");
        FileKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .or(match wanted.as_str() {
                "item_desc" => Some(FileKind::ItemDesc),
                "mob_group" => Some(FileKind::MobGroup),
                "mob_group_group" => Some(FileKind::MobGroupGroup),
                _ => None,
            })
            .ok_or_else(|| ProtoError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_parse() {
        assert_eq!(Reference::parse("27001"), Reference::Vnum(27001));
        assert_eq!(Reference::parse(" 42 "), Reference::Vnum(42));
        assert_eq!(
            Reference::parse("Sword of Flame"),
            Reference::Name("Sword of Flame".to_string())
        );
        assert_eq!(Reference::parse("-5"), Reference::Name("-5".to_string()));
    }

    #[test]
    fn test_format_version_names() {
        assert_eq!("".parse::<FormatVersion>().unwrap(), FormatVersion::Legacy);
        assert_eq!("Classic".parse::<FormatVersion>().unwrap(), FormatVersion::Classic);
        assert_eq!("v3".parse::<FormatVersion>().unwrap(), FormatVersion::Modern);
        assert!("v9".parse::<FormatVersion>().is_err());
        assert_eq!(FormatVersion::default(), FormatVersion::Legacy);
    }

    #[test]
    fn test_file_kind_lookup() {
        assert_eq!("item_proto".parse::<FileKind>().unwrap(), FileKind::ItemProto);
        assert_eq!("group_group.txt".parse::<FileKind>().unwrap(), FileKind::MobGroupGroup);
        assert_eq!("mob-drop-item".parse::<FileKind>().unwrap(), FileKind::MobDropItem);
        assert!("skill_proto".parse::<FileKind>().is_err());
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(LineEnding::default().as_str(), "\r\n");
        assert_eq!("LF".parse::<LineEnding>().unwrap(), LineEnding::Lf);
        assert!("cr".parse::<LineEnding>().is_err());
    }

    #[test]
    fn test_file_kind_codepages() {
        assert_eq!(FileKind::ItemNames.codepage(), Codepage::Western);
        assert_eq!(FileKind::ItemList.codepage(), Codepage::Western);
        assert_eq!(FileKind::ItemProto.codepage(), Codepage::Korean);
        assert_eq!(FileKind::MobGroup.codepage(), Codepage::Korean);
    }

    #[test]
    fn test_file_kind_layouts() {
        assert_eq!(FileKind::ItemProto.layout(), Layout::Tabular);
        assert_eq!(FileKind::CommonDropItem.layout(), Layout::Tabular);
        assert_eq!(FileKind::Blend.layout(), Layout::Sectioned);
        assert_eq!(FileKind::MobGroupGroup.layout(), Layout::Sectioned);
        assert_eq!(FileKind::ALL.iter().filter(|kind| kind.layout() == Layout::Tabular).count(), 7);
    }
}
