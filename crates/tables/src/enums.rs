//! Case-insensitive enumeration lookups

use tracing::trace;

/// A table of named enumeration values
#[derive(Debug)]
pub struct EnumTable {
    pub name: &'static str,
    pub entries: &'static [(&'static str, u32)],
}

impl EnumTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, u32)]) -> Self {
        Self { name, entries }
    }

    /// Look up a token
    ///
    /// Names match case-insensitively. A plain number is accepted when it is
    /// one of the declared values, since some files store the raw value.
    /// Returns `None` for anything else and lets the caller pick a default.
    pub fn match_token(&self, token: &str) -> Option<u32> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        let upper = token.to_ascii_uppercase();
        if let Some((_, value)) = self.entries.iter().find(|(name, _)| *name == upper) {
            return Some(*value);
        }

        if let Ok(value) = token.parse::<u32>() {
            if self.name_of(value).is_some() {
                return Some(value);
            }
        }

        trace!("No {} entry for '{}'", self.name, token);
        None
    }

    /// Look up a token, falling back to `default`
    pub fn value_or(&self, token: &str, default: u32) -> u32 {
        self.match_token(token).unwrap_or(default)
    }

    /// Name of a value
    pub fn name_of(&self, value: u32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(name, _)| *name)
    }

    /// Name of a value, or the value itself when it is not declared
    pub fn format(&self, value: u32) -> String {
        match self.name_of(value) {
            Some(name) => name.to_string(),
            None => value.to_string(),
        }
    }
}

/// Subtype tables keyed by an already resolved parent value
///
/// The subtype of an item only means something once its type is known:
/// `WEAPON_SWORD` lives under `ITEM_WEAPON`, `ARMOR_BODY` under `ITEM_ARMOR`.
#[derive(Debug)]
pub struct SubtypeTables {
    pub name: &'static str,
    pub entries: &'static [(u32, &'static EnumTable)],
}

impl SubtypeTables {
    pub const fn new(name: &'static str, entries: &'static [(u32, &'static EnumTable)]) -> Self {
        Self { name, entries }
    }

    /// Subtype table for a parent; `None` when the parent is unresolved or
    /// has no subtypes
    pub fn for_parent(&self, parent: Option<u32>) -> Option<&'static EnumTable> {
        let parent = parent?;
        self.entries
            .iter()
            .find(|(value, _)| *value == parent)
            .map(|(_, table)| *table)
    }

    /// Resolve a subtype token under `parent`
    pub fn match_token(&self, parent: Option<u32>, token: &str) -> Option<u32> {
        self.for_parent(parent)?.match_token(token)
    }

    /// Render a subtype value under `parent`
    ///
    /// Falls back to the raw number when the parent has no subtype table.
    pub fn format(&self, parent: u32, value: u32) -> String {
        match self.for_parent(Some(parent)) {
            Some(table) => table.format(value),
            None => value.to_string(),
        }
    }
}
