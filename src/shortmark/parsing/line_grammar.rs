//! Line grammar
//!
//! One shorthand line has this shape, every part after the tag optional:
//!
//! ```text
//! <indent><tag> bare#id.class[key=value] = "text" :{ prop: value; }
//! ```
//!
//! The whole line is matched by a single anchored pattern with named groups.
//! Shorthand and bracket groups are captured as raw runs and split into
//! tokens lazily by [`ParsedLine::shorthand_tokens`] and
//! [`ParsedLine::bracket_attrs`].
//!
//! Syntax is checked before indentation: a line that is both malformed and
//! mis-indented reports a syntax error.

use crate::shortmark::error::ParseError;
use crate::shortmark::lexing::SourceLine;
use once_cell::sync::Lazy;
use regex::Regex;

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<indent>\s*)",
        r"<(?P<tag>[A-Za-z][A-Za-z0-9_-]*)>",
        r"(?:\s+(?P<bare>[A-Za-z0-9_-]+))?",
        r"(?P<id_and_classes>(?:[#.][A-Za-z0-9_-]+)*)",
        r"(?P<bracket_attrs>(?:\s*\[[^\]]+\])*)",
        r#"(?:\s*=\s*"(?P<text>[^"]*)")?"#,
        r"(?:\s*:\{(?P<css>[^}]+)\})?",
        r"\s*$",
    ))
    .expect("line grammar pattern is valid")
});

static SHORTHAND_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[#.][A-Za-z0-9_-]+").expect("shorthand pattern is valid"));

static BRACKET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]+\]").expect("bracket pattern is valid"));

static BRACKET_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]=]+)=([^\]]+)\]$").expect("bracket pair pattern is valid"));

/// A `#id` or `.class` shorthand token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shorthand<'a> {
    Id(&'a str),
    Class(&'a str),
}

/// The structural parts of one matched line, borrowed from the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub line_number: usize,
    /// Width of the leading space run, always a multiple of [`INDENT_WIDTH`]
    pub indent: usize,
    pub tag: &'a str,
    pub bare: Option<&'a str>,
    /// Raw run of `#id` / `.class` tokens, possibly empty
    pub id_and_classes: &'a str,
    /// Raw run of `[key=value]` tokens with their separating whitespace
    pub bracket_attrs: &'a str,
    pub text: Option<&'a str>,
    /// Body of the `:{ ... }` block, without the braces
    pub css: Option<&'a str>,
}

impl<'a> ParsedLine<'a> {
    /// Nesting depth derived from the indent.
    pub fn depth(&self) -> usize {
        self.indent / INDENT_WIDTH
    }

    /// `#id` and `.class` tokens in source order.
    pub fn shorthand_tokens(&self) -> impl Iterator<Item = Shorthand<'a>> + 'a {
        SHORTHAND_TOKEN
            .find_iter(self.id_and_classes)
            .map(|token| {
                let token = token.as_str();
                match token.split_at(1) {
                    ("#", id) => Shorthand::Id(id),
                    (_, class) => Shorthand::Class(class),
                }
            })
    }

    /// `(key, value)` pairs of the bracket tokens in source order.
    ///
    /// Brackets without an `=` match the line shape but carry no attribute,
    /// so they are skipped. Keys and values are taken verbatim.
    pub fn bracket_attrs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        BRACKET.find_iter(self.bracket_attrs).filter_map(|bracket| {
            let caps = BRACKET_PAIR.captures(bracket.as_str())?;
            Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
        })
    }
}

/// Match one normalized source line against the line grammar.
pub fn parse_line(source: &SourceLine) -> Result<ParsedLine<'_>, ParseError> {
    let line = source.text.as_str();
    let caps = LINE_PATTERN
        .captures(line)
        .ok_or_else(|| ParseError::Syntax {
            line_number: source.number,
            line: line.to_string(),
        })?;

    let group = |name: &str| caps.name(name).map(|m| m.as_str());

    let indent = group("indent").unwrap_or("");
    if indent.chars().any(|c| c != ' ') || indent.len() % INDENT_WIDTH != 0 {
        return Err(ParseError::Indentation {
            line_number: source.number,
            line: line.to_string(),
        });
    }

    let tag = group("tag").ok_or_else(|| ParseError::Syntax {
        line_number: source.number,
        line: line.to_string(),
    })?;

    Ok(ParsedLine {
        line_number: source.number,
        indent: indent.len(),
        tag,
        bare: group("bare"),
        id_and_classes: group("id_and_classes").unwrap_or(""),
        bracket_attrs: group("bracket_attrs").unwrap_or(""),
        text: group("text"),
        css: group("css"),
    })
}
