//! Bit flag packing and unpacking

use tracing::trace;

/// A table of named, independent bits
///
/// # Format
/// Flags are written as names joined by `|`, for example `RARE | UNIQUE`.
/// Commas and whitespace are accepted as separators as well.
#[derive(Debug)]
pub struct FlagTable {
    /// Table name, used in log output
    pub name: &'static str,
    /// Flag names and their bit values, in declaration order
    pub entries: &'static [(&'static str, u64)],
}

impl FlagTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, u64)]) -> Self {
        Self { name, entries }
    }

    /// Bit value of a single flag name (case-insensitive)
    pub fn value_of(&self, token: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(token))
            .map(|(_, value)| *value)
    }

    /// Pack a flag string into a mask
    ///
    /// Unknown tokens contribute nothing.
    pub fn pack(&self, text: &str) -> u64 {
        self.pack_names(
            text.split(|c: char| c == '|' || c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty()),
        )
    }

    /// Pack a list of flag names into a mask
    pub fn pack_names<'a, I>(&self, names: I) -> u64
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().fold(0, |mask, token| match self.value_of(token) {
            Some(value) => mask | value,
            None => {
                trace!("Ignoring unknown {} flag '{}'", self.name, token);
                mask
            }
        })
    }

    /// Names of all flags set in `mask`, in declaration order
    pub fn unpack(&self, mask: u64) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|(_, value)| mask & value != 0)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Render a mask the way proto files store it
    pub fn format(&self, mask: u64) -> String {
        self.unpack(mask).join("|")
    }

    /// Union of every declared bit
    pub fn known_bits(&self) -> u64 {
        self.entries.iter().fold(0, |mask, (_, value)| mask | value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ANTI_FLAGS, ITEM_FLAGS, WEAR_FLAGS};
    use crate::mob::{AI_FLAGS, RACE_FLAGS};

    #[test]
    fn test_pack_rare_unique() {
        assert_eq!(ITEM_FLAGS.pack("RARE|UNIQUE"), (1 << 5) | (1 << 6));
        assert_eq!(ITEM_FLAGS.unpack((1 << 5) | (1 << 6)), vec!["RARE", "UNIQUE"]);
    }

    #[test]
    fn test_unknown_token_is_ignored() {
        assert_eq!(ITEM_FLAGS.pack("RARE|BOGUS"), 1 << 5);
        assert_eq!(ITEM_FLAGS.pack("BOGUS"), 0);
        assert_eq!(ITEM_FLAGS.pack(""), 0);
    }

    #[test]
    fn test_separators_and_case() {
        assert_eq!(ITEM_FLAGS.pack("rare , unique"), (1 << 5) | (1 << 6));
        assert_eq!(ITEM_FLAGS.pack("RARE | UNIQUE\tLOG"), ITEM_FLAGS.pack("LOG|RARE|UNIQUE"));
    }

    #[test]
    fn test_unpack_follows_declaration_order() {
        let mask = ITEM_FLAGS.value_of("LOG").unwrap() | ITEM_FLAGS.value_of("STACKABLE").unwrap();
        assert_eq!(ITEM_FLAGS.unpack(mask), vec!["STACKABLE", "LOG"]);
        assert_eq!(ITEM_FLAGS.format(mask), "STACKABLE|LOG");
    }

    #[test]
    fn test_repack_is_identity_on_known_bits() {
        for table in [&ITEM_FLAGS, &ANTI_FLAGS, &WEAR_FLAGS, &AI_FLAGS, &RACE_FLAGS] {
            let known = table.known_bits();
            for mask in [0, 1, known, known & 0b1010_1010_1010, known & !1] {
                assert_eq!(table.pack(&table.format(mask)), mask, "table {}", table.name);
            }
        }
    }

    #[test]
    fn test_unknown_bits_are_dropped() {
        let garbage = 1u64 << 40;
        let mask = ITEM_FLAGS.value_of("RARE").unwrap() | garbage;
        assert_eq!(ITEM_FLAGS.pack(&ITEM_FLAGS.format(mask)), 1 << 5);
    }
}
