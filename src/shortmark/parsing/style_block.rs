//! Inline style block parser
//!
//! Parses the body of a `:{ ... }` block. Declarations are separated by runs
//! of `;` and split on their first `:`. Both sides are trimmed; fragments that
//! are empty, have no `:`, or have an empty property or value are dropped.
//! A repeated property keeps its first position and takes the last value.

use crate::shortmark::ast::Styles;

pub fn parse_style_block(css: &str) -> Styles {
    css.split(';')
        .map(str::trim)
        .filter(|declaration| !declaration.is_empty())
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let (property, value) = (property.trim(), value.trim());
            (!property.is_empty() && !value.is_empty()).then_some((property, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(styles: &Styles) -> Vec<(&str, &str)> {
        styles.iter().collect()
    }

    #[test]
    fn test_basic_declarations() {
        let styles = parse_style_block(" width: 100px; height: 100px; ");
        assert_eq!(pairs(&styles), vec![("width", "100px"), ("height", "100px")]);
    }

    #[test]
    fn test_missing_trailing_semicolon() {
        let styles = parse_style_block("margin: 1rem 0");
        assert_eq!(pairs(&styles), vec![("margin", "1rem 0")]);
    }

    #[test]
    fn test_repeated_semicolons_and_empty_fragments() {
        let styles = parse_style_block(";; color: red;;; ;padding:0;");
        assert_eq!(pairs(&styles), vec![("color", "red"), ("padding", "0")]);
    }

    #[test]
    fn test_duplicate_property_last_wins() {
        let styles = parse_style_block("color: red; margin: 0; color: blue;");
        assert_eq!(pairs(&styles), vec![("color", "blue"), ("margin", "0")]);
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let styles = parse_style_block("background: url(http://example.com/a.png);");
        assert_eq!(
            styles.get("background"),
            Some("url(http://example.com/a.png)")
        );
    }

    #[test]
    fn test_incomplete_declarations_are_dropped() {
        let styles = parse_style_block("color; : red; margin: ; padding: 2px");
        assert_eq!(pairs(&styles), vec![("padding", "2px")]);
    }

    #[test]
    fn test_custom_properties_and_var_values() {
        let styles = parse_style_block("--gap: 4px; background-color: var(--primary-color);");
        assert_eq!(
            pairs(&styles),
            vec![("--gap", "4px"), ("background-color", "var(--primary-color)")]
        );
    }
}
