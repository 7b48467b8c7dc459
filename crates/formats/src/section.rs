//! Block structured proto files
//!
//! # Format
//! Two block styles are in use:
//! ```text
//! Group	Wolves
//! {
//! 	Vnum	101
//! 	Leader	Wolf	101
//! 	1	Wolf	102
//! }
//!
//! section
//! 	item_vnum	50821
//! 	apply_type	CON
//! end
//! ```
//!
//! Parsing happens in two stages. [`split_blocks`] finds the block
//! boundaries and tokenizes the body lines; the item and mob codecs then
//! pick the scalar tags and numbered member lines they need out of each
//! [`SectionBlock`].

use bytes::Bytes;
use protoforge_core::{FileKind, LineEnding};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use tracing::trace;

/// One `Group name { ... }` or `section ... end` block
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBlock {
    /// Opening keyword as written (`Group`, `section`, ...)
    pub keyword: String,
    /// Text after the keyword, e.g. the group name
    pub name: Option<String>,
    /// 1-based line number of the block header
    pub line: usize,
    lines: Vec<Vec<String>>,
}

/// Header entities and member rows produced from a block file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRows<H, M> {
    pub headers: Vec<H>,
    pub members: Vec<M>,
}

impl<H, M> Default for BlockRows<H, M> {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            members: Vec::new(),
        }
    }
}

/// A numbered line inside a block (`<index> <field> ...`)
#[derive(Debug, Clone, Copy)]
pub struct MemberLine<'a> {
    pub index: u32,
    pub fields: &'a [String],
}

impl<'a> MemberLine<'a> {
    /// Field after the index, counting from 0
    pub fn field(&self, position: usize) -> Option<&'a str> {
        self.fields.get(position).map(String::as_str)
    }

    /// Parse a field; `None` when it is missing or malformed
    pub fn parse<T: FromStr>(&self, position: usize) -> Option<T> {
        self.field(position)?.parse().ok()
    }
}

impl SectionBlock {
    fn new(keyword: String, name: Option<String>, line: usize) -> Self {
        Self {
            keyword,
            name,
            line,
            lines: Vec::new(),
        }
    }

    /// Values of the first line tagged `tag` (case-insensitive)
    pub fn scalar(&self, tag: &str) -> Option<&[String]> {
        self.lines.iter().find_map(|tokens| tagged(tokens, tag))
    }

    /// First value of the first line tagged `tag`
    pub fn scalar_value(&self, tag: &str) -> Option<&str> {
        self.scalar(tag)?.first().map(String::as_str)
    }

    /// Parse the first value of `tag`; `None` when missing or malformed
    pub fn parse_scalar<T: FromStr>(&self, tag: &str) -> Option<T> {
        self.scalar_value(tag)?.parse().ok()
    }

    /// Values of every line tagged `tag`, for repeated tags
    pub fn scalars<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a [String]> + 'a {
        self.lines.iter().filter_map(move |tokens| tagged(tokens, tag))
    }

    /// Lines whose first token is a numeric index
    pub fn members(&self) -> impl Iterator<Item = MemberLine<'_>> + '_ {
        self.lines.iter().filter_map(|tokens| {
            let (first, rest) = tokens.split_first()?;
            let index = first.parse().ok()?;
            Some(MemberLine { index, fields: rest })
        })
    }

    pub fn is_section(&self) -> bool {
        self.keyword.eq_ignore_ascii_case("section")
    }
}

/// Values of a line if its first token is `tag`
fn tagged<'a>(tokens: &'a [String], tag: &str) -> Option<&'a [String]> {
    match tokens.split_first() {
        Some((first, rest)) if first.eq_ignore_ascii_case(tag) => Some(rest),
        _ => None,
    }
}

enum State {
    Outside,
    AwaitingBrace(SectionBlock),
    InBraces(SectionBlock),
    InSection(SectionBlock),
}

/// Split text into blocks
///
/// Text between blocks is ignored. A header line that is not followed by
/// `{` is discarded. A block still open at the end of the input is kept.
pub fn split_blocks(text: &str) -> Vec<SectionBlock> {
    let mut blocks = Vec::new();
    let mut state = State::Outside;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        state = match state {
            State::AwaitingBrace(block) if line.starts_with('{') => State::InBraces(block),
            State::AwaitingBrace(block) => {
                trace!("Header at line {} has no body, ignoring", block.line);
                open_block(line, index + 1)
            }
            State::Outside => open_block(line, index + 1),
            State::InBraces(block) if line.starts_with('}') => {
                blocks.push(block);
                State::Outside
            }
            State::InSection(block) if line.eq_ignore_ascii_case("end") => {
                blocks.push(block);
                State::Outside
            }
            State::InBraces(mut block) => {
                block.lines.push(tokenize(line));
                State::InBraces(block)
            }
            State::InSection(mut block) => {
                block.lines.push(tokenize(line));
                State::InSection(block)
            }
        };
    }

    match state {
        State::InBraces(block) | State::InSection(block) => {
            trace!("Block at line {} is not closed", block.line);
            blocks.push(block);
        }
        State::AwaitingBrace(_) | State::Outside => {}
    }

    blocks
}

/// Interpret a line found outside any block
fn open_block(line: &str, line_number: usize) -> State {
    let (header, brace) = match line.split_once('{') {
        Some((header, _)) => (header, true),
        None => (line, false),
    };

    let mut tokens = tokenize(header).into_iter();
    let Some(keyword) = tokens.next() else {
        return State::Outside;
    };
    let rest: Vec<String> = tokens.collect();
    let name = if rest.is_empty() { None } else { Some(rest.join(" ")) };

    let block = SectionBlock::new(keyword, name, line_number);
    if block.is_section() {
        State::InSection(block)
    } else if brace {
        State::InBraces(block)
    } else {
        State::AwaitingBrace(block)
    }
}

/// Split a line into tokens
///
/// Lines containing a tab are split on tabs only, so names may contain
/// spaces. Other lines are split on whitespace. Double quotes group a run
/// into one token and are removed.
pub fn tokenize(line: &str) -> Vec<String> {
    let tabbed = line.contains('\t');
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut had_quotes = false;

    for c in line.chars() {
        if c == '"' {
            quoted = !quoted;
            had_quotes = true;
            continue;
        }

        let separator = if tabbed { c == '\t' } else { c.is_whitespace() };
        if separator && !quoted {
            flush_token(&mut tokens, &mut current, &mut had_quotes);
        } else {
            current.push(c);
        }
    }
    flush_token(&mut tokens, &mut current, &mut had_quotes);

    tokens
}

fn flush_token(tokens: &mut Vec<String>, current: &mut String, had_quotes: &mut bool) {
    let token = if *had_quotes { current.as_str() } else { current.trim() };
    if !token.is_empty() || *had_quotes {
        tokens.push(token.to_string());
    }
    current.clear();
    *had_quotes = false;
}

/// Builds block structured files
///
/// Every body line is tab separated, which keeps names with spaces intact.
pub struct BlockWriter {
    out: String,
    newline: &'static str,
}

impl BlockWriter {
    pub fn new(line_ending: LineEnding) -> Self {
        Self {
            out: String::new(),
            newline: line_ending.as_str(),
        }
    }

    /// Open a `Group <name>` block; an empty name writes a bare `Group`
    pub fn open_group(&mut self, name: &str) -> &mut Self {
        self.out.push_str("Group");
        if !name.is_empty() {
            self.out.push('\t');
            self.out.push_str(name);
        }
        self.out.push_str(self.newline);
        self.out.push('{');
        self.out.push_str(self.newline);
        self
    }

    /// Open a `section` block
    pub fn open_section(&mut self) -> &mut Self {
        self.out.push_str("section");
        self.out.push_str(self.newline);
        self
    }

    /// Write a tagged line
    pub fn scalar<V: Display>(&mut self, tag: &str, values: &[V]) -> &mut Self {
        self.out.push('\t');
        self.out.push_str(tag);
        for value in values {
            self.out.push('\t');
            self.out.push_str(&value.to_string());
        }
        self.out.push_str(self.newline);
        self
    }

    /// Write a numbered member line
    pub fn member<V: Display>(&mut self, index: u32, fields: &[V]) -> &mut Self {
        self.scalar(&index.to_string(), fields)
    }

    pub fn close_group(&mut self) -> &mut Self {
        self.out.push('}');
        self.out.push_str(self.newline);
        self
    }

    pub fn close_section(&mut self) -> &mut Self {
        self.out.push_str("end");
        self.out.push_str(self.newline);
        self
    }

    /// Encode the finished text for `kind`
    pub fn finish(self, kind: FileKind) -> Bytes {
        kind.codepage().encode(&self.out)
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }
}

/// Wrap a value in double quotes
pub fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_tabs_keep_spaces() {
        assert_eq!(tokenize("1\tSword of Flame\t1\t50"), vec!["1", "Sword of Flame", "1", "50"]);
    }

    #[test]
    fn test_tokenize_whitespace_and_quotes() {
        assert_eq!(tokenize("1 \"Sword of Flame\"  1 50"), vec!["1", "Sword of Flame", "1", "50"]);
        assert_eq!(
            tokenize("effect\t\"d:/ymir work/effect/buff.mse\""),
            vec!["effect", "d:/ymir work/effect/buff.mse"]
        );
        assert_eq!(tokenize("   "), Vec::<String>::new());
    }

    #[test]
    fn test_split_section_block() {
        let text = "section\n\titem_vnum\t501\n\tapply_type\tCON\n\tapply_value\t5\t0\t0\t0\t0\nend\n";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_section());
        assert_eq!(blocks[0].parse_scalar::<u32>("item_vnum"), Some(501));
        assert_eq!(blocks[0].scalar("apply_value").unwrap().len(), 5);
    }

    #[test]
    fn test_split_group_blocks() {
        let text = r#"
Group	Wolves
{
	Vnum	101
	Leader	Wolf	101
	1	Wolf	102
	2	Grey Wolf	103
}
Group Bears {
	Vnum	102
}
"#;
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 2);

        let wolves = &blocks[0];
        assert_eq!(wolves.keyword, "Group");
        assert_eq!(wolves.name.as_deref(), Some("Wolves"));
        assert_eq!(wolves.parse_scalar::<u32>("vnum"), Some(101));
        assert_eq!(wolves.scalar("LEADER").unwrap(), ["Wolf", "101"]);

        let members: Vec<_> = wolves.members().collect();
        assert_eq!(members.len(), 2);
        assert_eq!(members[1].index, 2);
        assert_eq!(members[1].field(0), Some("Grey Wolf"));
        assert_eq!(members[1].parse::<u32>(1), Some(103));

        assert_eq!(blocks[1].name.as_deref(), Some("Bears"));
    }

    #[test]
    fn test_repeated_scalars() {
        let blocks = split_blocks("section\nnpc 20378\nitem 30050 2\nitem 30051 1\nend\n");
        let items: Vec<_> = blocks[0].scalars("item").collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], ["30051", "1"]);
    }

    #[test]
    fn test_stray_text_and_unclosed_blocks() {
        let text = "garbage line\nGroup A\n{\n\tVnum\t1\n}\nGroup Orphan\nGroup B\n{\n\tVnum\t2\n";
        let blocks = split_blocks(text);
        let names: Vec<_> = blocks.iter().map(|b| b.name.clone().unwrap()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(blocks[1].parse_scalar::<u32>("Vnum"), Some(2));
    }

    #[test]
    fn test_block_writer_output_parses_back() {
        let mut writer = BlockWriter::new(LineEnding::Lf);
        writer
            .open_group("Wolf Pack")
            .scalar("Vnum", &[101])
            .member(1, &["Grey Wolf", "103"])
            .close_group();
        writer.open_section().scalar("npc", &[20378]).close_section();

        assert_eq!(
            writer.as_str(),
            "Group\tWolf Pack\n{\n\tVnum\t101\n\t1\tGrey Wolf\t103\n}\nsection\n\tnpc\t20378\nend\n"
        );

        let blocks = split_blocks(writer.as_str());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name.as_deref(), Some("Wolf Pack"));
        assert_eq!(blocks[0].members().next().unwrap().field(0), Some("Grey Wolf"));
    }

    #[test]
    fn test_unnamed_group_stays_unnamed() {
        let mut writer = BlockWriter::new(LineEnding::Lf);
        writer.open_group("").scalar("Vnum", &[7]).close_group();
        assert_eq!(writer.as_str(), "Group\n{\n\tVnum\t7\n}\n");

        let blocks = split_blocks(writer.as_str());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, None);
        assert_eq!(blocks[0].parse_scalar::<u32>("Vnum"), Some(7));
    }
}
