//! Element construction from a parsed line
//!
//! Attribute merge order:
//!
//! 1. the bare word starts `class`
//! 2. shorthand tokens in source order: `#id` sets `id`, `.class` appends to `class`
//! 3. bracket attributes in source order, each overwriting (including `class` and `id`)

use crate::shortmark::ast::attributes::ID;
use crate::shortmark::ast::ElementNode;
use crate::shortmark::parsing::{parse_style_block, ParsedLine, Shorthand};

pub fn build_element(line: &ParsedLine<'_>) -> ElementNode {
    let mut node = ElementNode::new(line.tag);

    if let Some(bare) = line.bare {
        node.attrs.append_class(bare);
    }

    for token in line.shorthand_tokens() {
        match token {
            Shorthand::Id(id) => node.attrs.set(ID, id),
            Shorthand::Class(class) => node.attrs.append_class(class),
        }
    }

    for (name, value) in line.bracket_attrs() {
        node.attrs.set(name, value);
    }

    node.styles = line.css.map(parse_style_block);
    node.text_content = line.text.map(str::to_string);
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortmark::lexing::SourceLine;
    use crate::shortmark::parsing::parse_line;

    fn build(text: &str) -> ElementNode {
        let source = SourceLine::new(1, text);
        build_element(&parse_line(&source).unwrap())
    }

    #[test]
    fn test_bare_word_becomes_class() {
        let node = build("<div> card");
        assert_eq!(node.tag, "div");
        assert_eq!(node.class(), Some("card"));
        assert_eq!(node.attrs.len(), 1);
    }

    #[test]
    fn test_classes_accumulate_in_source_order() {
        let node = build("<div> main-container#root.theme-dark.wide");
        assert_eq!(node.class(), Some("main-container theme-dark wide"));
        assert_eq!(node.id(), Some("root"));
        assert_eq!(node.attrs.names().collect::<Vec<_>>(), vec!["class", "id"]);
    }

    #[test]
    fn test_last_id_token_wins() {
        let node = build("<div>#a.x#b");
        assert_eq!(node.id(), Some("b"));
        assert_eq!(node.class(), Some("x"));
        assert_eq!(node.attrs.names().collect::<Vec<_>>(), vec!["id", "class"]);
    }

    #[test]
    fn test_bracket_class_overwrites_accumulated_class() {
        let node = build("<div> card.wide[class=plain]");
        assert_eq!(node.class(), Some("plain"));
    }

    #[test]
    fn test_bracket_id_overwrites_shorthand_id() {
        let node = build("<section> intro-section#intro[id=section-intro]");
        assert_eq!(node.id(), Some("section-intro"));
        assert_eq!(node.attrs.names().collect::<Vec<_>>(), vec!["class", "id"]);
    }

    #[test]
    fn test_later_bracket_overwrites_earlier() {
        let node = build("<img>[src=a.png][alt=A][src=b.png]");
        assert_eq!(
            node.attrs.iter().collect::<Vec<_>>(),
            vec![("src", "b.png"), ("alt", "A")]
        );
    }

    #[test]
    fn test_text_and_styles() {
        let node = build(r#"<h2> title = "Card Title" :{ font-size: 1.5rem; }"#);
        assert_eq!(node.text_content.as_deref(), Some("Card Title"));
        let styles = node.styles.expect("style block present");
        assert_eq!(styles.get("font-size"), Some("1.5rem"));
    }

    #[test]
    fn test_no_style_block_means_no_styles() {
        let node = build("<p> body");
        assert!(node.styles.is_none());
        assert!(node.text_content.is_none());
    }

    #[test]
    fn test_style_block_with_no_declarations_is_present_but_empty() {
        let node = build("<p> :{ ; }");
        assert_eq!(node.styles.map(|s| s.len()), Some(0));
    }
}
