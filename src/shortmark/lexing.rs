//! Source normalization
//!
//! Turns raw input into the lines the grammar sees:
//!
//! 1. every tab becomes two spaces
//! 2. the input is split on `\n`
//! 3. trailing whitespace (including a `\r`) is stripped
//! 4. whitespace-only lines are dropped
//!
//! Line numbers are assigned before blank lines are dropped, so they always
//! point at the original input.

/// A non-blank source line, ready for the line grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the original input
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

pub const TAB_EXPANSION: &str = "  ";

pub fn normalize_source(input: &str) -> Vec<SourceLine> {
    input
        .replace('\t', TAB_EXPANSION)
        .split('\n')
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| SourceLine::new(number, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_dropped_but_counted() {
        let lines = normalize_source("<div>\n\n   \n  <p>\n");
        assert_eq!(
            lines,
            vec![SourceLine::new(1, "<div>"), SourceLine::new(4, "  <p>")]
        );
    }

    #[test]
    fn test_tabs_expand_to_two_spaces() {
        let lines = normalize_source("<ul>\n\t<li>\n\t\t<a>");
        assert_eq!(lines[1].text, "  <li>");
        assert_eq!(lines[2].text, "    <a>");
    }

    #[test]
    fn test_trailing_whitespace_and_carriage_returns_are_stripped() {
        let lines = normalize_source("<div> card   \r\n<p>\t");
        assert_eq!(lines[0].text, "<div> card");
        assert_eq!(lines[1].text, "<p>");
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        assert!(normalize_source("").is_empty());
        assert!(normalize_source("\n \n\t\n").is_empty());
    }
}
