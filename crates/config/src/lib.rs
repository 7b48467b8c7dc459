//! Protoforge Configuration
//!
//! Loads codec settings from `protoforge.txt`:
//!
//! ```text
//! # format versions of the proto tables
//! itemformat = classic
//! mobformat = legacy
//! lineending = crlf
//! datadir = locale/germany
//! chunksize = 500
//! ```

use protoforge_core::{FileKind, FormatVersion, LineEnding, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default name of the configuration file
pub const CONFIG_FILE: &str = "protoforge.txt";

/// Settings shared by every codec invocation
#[derive(Debug, Clone, PartialEq)]
pub struct CodecConfig {
    /// Column layout of item_proto
    pub item_format: FormatVersion,
    /// Column layout of mob_proto
    pub mob_format: FormatVersion,
    /// Line terminator for written files
    pub line_ending: LineEnding,
    /// Folder holding the proto files
    pub data_dir: PathBuf,
    /// Rows per batch handed to the persistence layer
    pub chunk_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            item_format: FormatVersion::Legacy,
            mob_format: FormatVersion::Legacy,
            line_ending: LineEnding::Crlf,
            data_dir: PathBuf::from("."),
            chunk_size: 500,
        }
    }
}

impl CodecConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Load `path`, falling back to defaults when it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Parse `key = value` lines; unknown keys and bad values are ignored
    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                config.parse_option(&key.trim().to_ascii_lowercase(), value.trim());
            }
        }

        config
    }

    fn parse_option(&mut self, key: &str, value: &str) {
        match key {
            "itemformat" => {
                self.item_format = value.parse().unwrap_or(self.item_format);
            }
            "mobformat" => {
                self.mob_format = value.parse().unwrap_or(self.mob_format);
            }
            "lineending" => {
                self.line_ending = value.parse().unwrap_or(self.line_ending);
            }
            "datadir" => self.data_dir = PathBuf::from(value),
            "chunksize" => {
                self.chunk_size = value.parse().unwrap_or(self.chunk_size);
            }
            _ => debug!("Unknown config option: {} = {}", key, value),
        }
    }

    /// Format version used for `kind`; only the proto tables have several
    pub fn version_for(&self, kind: FileKind) -> FormatVersion {
        match kind {
            FileKind::ItemProto => self.item_format,
            FileKind::MobProto => self.mob_format,
            _ => FormatVersion::default(),
        }
    }

    /// Conventional location of `kind` inside the data folder
    pub fn path_for(&self, kind: FileKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }
}
