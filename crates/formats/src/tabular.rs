//! Tab separated proto files
//!
//! # Format
//! ```text
//! Vnum	Name	Type	SubType	...
//! 10	검	ITEM_WEAPON	WEAPON_SWORD	...
//! 11~19	검+1	ITEM_WEAPON	WEAPON_SWORD	...
//! ```
//!
//! The column set is fixed by the file kind and its [`FormatVersion`], not by
//! the header line in the file. Short rows are padded with empty fields and
//! nothing is ever escaped.

use bytes::Bytes;
use protoforge_core::{FileKind, FormatVersion, LineEnding, Vnum};
use std::str::FromStr;
use tracing::{debug, trace};

/// Field delimiter of every tabular proto file
pub const DELIMITER: char = '\t';

/// Separator of a vnum range in the id column (`start~end`)
const RANGE_SEPARATOR: char = '~';

/// One record of a tabular file, keyed by column name
#[derive(Debug, Clone)]
pub struct ProtoRow<'a> {
    columns: &'static [&'static str],
    fields: Vec<&'a str>,
    vnum_end: Option<&'a str>,
    /// 1-based line number in the source text
    pub line: usize,
}

impl<'a> ProtoRow<'a> {
    /// Build a row from a raw line, taking every field as written
    pub fn new(columns: &'static [&'static str], raw: &'a str, line: usize) -> Self {
        Self {
            columns,
            fields: raw.split(DELIMITER).map(str::trim).collect(),
            vnum_end: None,
            line,
        }
    }

    /// Build a row whose first column is a vnum id
    ///
    /// A `start~end` value there is split into the base id and the end of
    /// the range.
    pub fn ranged(columns: &'static [&'static str], raw: &'a str, line: usize) -> Self {
        let mut row = Self::new(columns, raw, line);
        if let Some(id) = row.fields.first_mut() {
            let raw_id: &'a str = *id;
            if let Some((start, end)) = raw_id.split_once(RANGE_SEPARATOR) {
                *id = start.trim();
                row.vnum_end = Some(end.trim());
            }
        }
        row
    }

    /// Raw value of a column; missing trailing columns read as `""`
    pub fn get(&self, column: &str) -> &'a str {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column))
            .and_then(|index| self.fields.get(index))
            .copied()
            .unwrap_or("")
    }

    /// Parse a column, falling back to the type's default on bad input
    pub fn parse<T: FromStr + Default>(&self, column: &str) -> T {
        self.get(column).parse().unwrap_or_default()
    }

    /// Raw value by position, for files whose columns repeat
    pub fn field(&self, index: usize) -> &'a str {
        self.fields.get(index).copied().unwrap_or("")
    }

    /// Base id of the row
    pub fn vnum(&self) -> Option<Vnum> {
        self.fields.first().and_then(|id| id.parse().ok())
    }

    /// End of a `start~end` vnum range, if the row declares one
    pub fn vnum_end(&self) -> Option<Vnum> {
        self.vnum_end.and_then(|end| end.parse().ok())
    }

    /// Number of fields actually present on the line
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|field| field.is_empty())
    }
}

/// Lazy reader over the data lines of a tabular file
pub struct TabularReader<'a> {
    lines: std::iter::Skip<std::iter::Enumerate<std::str::Lines<'a>>>,
    columns: &'static [&'static str],
    range_ids: bool,
}

impl<'a> TabularReader<'a> {
    /// # Arguments
    /// * `text` - decoded file contents
    /// * `columns` - ordered column names for the file kind and version
    /// * `skip` - number of leading lines (headers) to ignore
    pub fn new(text: &'a str, columns: &'static [&'static str], skip: usize) -> Self {
        Self {
            lines: text.lines().enumerate().skip(skip),
            columns,
            range_ids: false,
        }
    }

    /// Treat the first column as a vnum that may be a `start~end` range
    pub fn with_range_ids(mut self) -> Self {
        self.range_ids = true;
        self
    }
}

impl<'a> Iterator for TabularReader<'a> {
    type Item = ProtoRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, raw) in self.lines.by_ref() {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                continue;
            }
            let row = if self.range_ids {
                ProtoRow::ranged(self.columns, raw, index + 1)
            } else {
                ProtoRow::new(self.columns, raw, index + 1)
            };
            return Some(row);
        }
        None
    }
}

/// A record stored one per line in a tabular proto file
pub trait TabularRecord: Sized {
    /// The file kind this record is read from and written to
    const KIND: FileKind;

    /// Number of header lines at the top of the file
    const HEADER_ROWS: usize = 0;

    /// Whether the id column may hold a `start~end` vnum range
    const RANGE_IDS: bool = false;

    /// Ordered columns for a format version
    fn columns(version: FormatVersion) -> &'static [&'static str];

    /// Build a record from a row; `None` drops the row
    fn from_row(row: &ProtoRow<'_>, version: FormatVersion) -> Option<Self>;

    /// Field values in column order; `None` skips the record on export
    fn to_fields(&self, version: FormatVersion) -> Option<Vec<String>>;
}

/// Read every record of a tabular file
pub fn read_table<'a, T: TabularRecord + 'a>(
    text: &'a str,
    version: FormatVersion,
) -> impl Iterator<Item = T> + 'a {
    let reader = TabularReader::new(text, T::columns(version), T::HEADER_ROWS);
    let reader = if T::RANGE_IDS { reader.with_range_ids() } else { reader };
    reader.filter_map(move |row| {
        let record = T::from_row(&row, version);
        if record.is_none() {
            trace!("Dropping {} line {}", T::KIND, row.line);
        }
        record
    })
}

/// Write records to an encoded tabular file
pub fn write_table<'a, T, I>(records: I, version: FormatVersion, line_ending: LineEnding) -> Bytes
where
    T: TabularRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let header = (T::HEADER_ROWS > 0).then(|| T::columns(version));
    let mut skipped = 0usize;
    let rows = records.into_iter().filter_map(|record| {
        let fields = record.to_fields(version);
        if fields.is_none() {
            skipped += 1;
        }
        fields
    });

    let bytes = write_rows(header, rows, T::KIND, line_ending);
    if skipped > 0 {
        debug!("Skipped {} {} rows on export", skipped, T::KIND);
    }
    bytes
}

/// Join rows with the delimiter and encode them for `kind`
pub fn write_rows<I>(
    header: Option<&[&str]>,
    rows: I,
    kind: FileKind,
    line_ending: LineEnding,
) -> Bytes
where
    I: IntoIterator<Item = Vec<String>>,
{
    let newline = line_ending.as_str();
    let delimiter = DELIMITER.to_string();
    let mut out = String::new();

    if let Some(columns) = header {
        out.push_str(&columns.join(&delimiter));
        out.push_str(newline);
    }

    let mut written = 0usize;
    for fields in rows {
        out.push_str(&fields.join(&delimiter));
        out.push_str(newline);
        written += 1;
    }

    debug!("Wrote {} {} rows", written, kind);
    kind.codepage().encode(&out)
}

/// Render a vnum with its optional range end (`start~end`)
pub fn format_vnum(vnum: Vnum, vnum_end: Option<Vnum>) -> String {
    match vnum_end {
        Some(end) => format!("{}{}{}", vnum, RANGE_SEPARATOR, end),
        None => vnum.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[&str] = &["Vnum", "Name", "Count"];

    #[derive(Debug, PartialEq)]
    struct Entry {
        vnum: Vnum,
        vnum_end: Option<Vnum>,
        name: String,
        count: u32,
    }

    impl TabularRecord for Entry {
        const KIND: FileKind = FileKind::ItemNames;
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
                count: row.parse("Count"),
            })
        }

        fn to_fields(&self, _version: FormatVersion) -> Option<Vec<String>> {
            if self.name.is_empty() {
                return None;
            }
            Some(vec![
                format_vnum(self.vnum, self.vnum_end),
                self.name.clone(),
                self.count.to_string(),
            ])
        }
    }

    #[test]
    fn test_short_rows_default_to_empty() {
        let row = ProtoRow::new(COLUMNS, "10\tSword", 2);
        assert_eq!(row.get("Name"), "Sword");
        assert_eq!(row.get("Count"), "");
        assert_eq!(row.parse::<u32>("Count"), 0);
        assert_eq!(row.get("NoSuchColumn"), "");
    }

    #[test]
    fn test_vnum_range() {
        let row = ProtoRow::ranged(COLUMNS, "11~19\tSword+1\t1", 1);
        assert_eq!(row.vnum(), Some(11));
        assert_eq!(row.vnum_end(), Some(19));

        let row = ProtoRow::ranged(COLUMNS, "11\tSword+1\t1", 1);
        assert_eq!(row.vnum_end(), None);
    }

    #[test]
    fn test_tilde_kept_without_range_ids() {
        let row = ProtoRow::new(COLUMNS, "Lv1~15\tSword", 1);
        assert_eq!(row.field(0), "Lv1~15");
        assert_eq!(row.vnum_end(), None);

        let rows: Vec<_> = TabularReader::new("Lv1~15\tSword\n", COLUMNS, 0).collect();
        assert_eq!(rows[0].field(0), "Lv1~15");

        let rows: Vec<_> = TabularReader::new("11~19\tSword\n", COLUMNS, 0).with_range_ids().collect();
        assert_eq!(rows[0].vnum_end(), Some(19));
    }

    #[test]
    fn test_reader_skips_header_and_blank_lines() {
        let text = "Vnum\tName\tCount\r\n10\tSword\t1\r\n\r\n# note\r\n20\tBow\t2\r\n";
        let rows: Vec<_> = TabularReader::new(text, COLUMNS, 1).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("Name"), "Bow");
        assert_eq!(rows[1].line, 5);
    }

    #[test]
    fn test_rows_without_id_are_dropped() {
        let text = "Vnum\tName\tCount\nabc\tJunk\t1\n10\tSword\t1\n";
        let entries: Vec<Entry> = read_table(text, FormatVersion::Legacy).collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].vnum, 10);
    }

    #[test]
    fn test_write_then_read() {
        let entries = vec![
            Entry { vnum: 10, vnum_end: None, name: "Sword".into(), count: 1 },
            Entry { vnum: 11, vnum_end: Some(19), name: "Sword+1".into(), count: 3 },
            Entry { vnum: 12, vnum_end: None, name: String::new(), count: 0 },
        ];

        let bytes = write_table(&entries, FormatVersion::Legacy, LineEnding::Lf);
        let text = FileKind::ItemNames.codepage().decode(&bytes);
        assert_eq!(text, "Vnum\tName\tCount\n10\tSword\t1\n11~19\tSword+1\t3\n");

        let read: Vec<Entry> = read_table(&text, FormatVersion::Legacy).collect();
        assert_eq!(read, entries[..2]);
    }
}
