//! Property-based tests for markup rendering
//!
//! These tests check the rendering contract on arbitrary input:
//! - HTML output never leaks a raw special character from text
//! - Rendering starts with the indentation prefix of its format
//! - A link without a label renders like a link labelled with its target
//! - Rendering is a pure function of the tree and the indentation

use privacy_policy::markup::{
    Abbreviation, Concatenation, DefinitionGroup, DefinitionList, Link, Text,
};
use privacy_policy::Render;
use proptest::prelude::*;

/// Generate text that mixes plain words with HTML special characters
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,20}",
        "[a-z<>&\"' ]{0,20}",
        "[äöüß“„–·a-z&<]{0,12}",
    ]
}

fn url_strategy() -> impl Strategy<Value = String> {
    "https://[a-z]{1,10}\\.example/[a-z0-9&?=]{0,10}"
}

fn definition_list_strategy() -> impl Strategy<Value = DefinitionList> {
    prop::collection::vec(
        (text_strategy(), prop::collection::vec(text_strategy(), 0..3)),
        0..4,
    )
    .prop_map(|groups| {
        groups
            .into_iter()
            .map(|(term, definitions)| DefinitionGroup::new(term).definitions_from(definitions))
            .collect::<DefinitionList>()
    })
}

fn has_raw_special_character(html: &str) -> bool {
    html.contains(&['<', '>', '"', '\''][..])
}

proptest! {
    #[test]
    fn test_text_html_never_leaks_special_characters(text in text_strategy()) {
        let html = Text::new(text).to_html();
        prop_assert!(!has_raw_special_character(&html));
    }

    #[test]
    fn test_abbreviation_html_escapes_both_parts(
        abridgement in text_strategy(),
        expansion in text_strategy(),
    ) {
        let html = Abbreviation::new(abridgement).with_expansion(expansion).to_html();
        prop_assert!(html.starts_with("<abbr title=\""));
        prop_assert!(html.ends_with("</abbr>"));
        let inner = &html["<abbr title=\"".len()..html.len() - "</abbr>".len()];
        prop_assert_eq!(inner.matches('"').count(), 1);
        prop_assert_eq!(inner.matches('>').count(), 1);
    }

    #[test]
    fn test_indentation_prefix(text in "[a-z]{1,10}", level in 0usize..5) {
        let node = Text::new(text);
        prop_assert!(node.render_html(level).starts_with(&"\t".repeat(level)));
        prop_assert!(node.render_plain_text(level).starts_with(&"\t".repeat(level)));
        prop_assert!(node.render_markdown(level).starts_with(&"  ".repeat(level)));
    }

    #[test]
    fn test_link_without_label_uses_target(url in url_strategy(), level in 0usize..3) {
        let bare = Link::new(url.clone());
        let labelled = Link::new(url.clone()).with_label(url);
        prop_assert_eq!(bare.render_html(level), labelled.render_html(level));
        prop_assert_eq!(bare.render_plain_text(level), labelled.render_plain_text(level));
        prop_assert_eq!(bare.render_markdown(level), labelled.render_markdown(level));
    }

    #[test]
    fn test_concatenated_text_is_space_joined(words in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let concatenation: Concatenation = words.iter().map(String::as_str).collect();
        prop_assert_eq!(concatenation.to_plain_text(), words.join(" "));
        prop_assert_eq!(concatenation.to_markdown(), words.join(" "));
        prop_assert_eq!(concatenation.to_html(), words.join("\n"));
    }

    #[test]
    fn test_definition_list_rendering_is_pure(list in definition_list_strategy()) {
        prop_assert_eq!(list.to_html(), list.clone().to_html());
        prop_assert_eq!(list.to_plain_text(), list.clone().to_plain_text());
        prop_assert_eq!(list.to_markdown(), list.to_markdown());
    }

    #[test]
    fn test_definition_list_html_is_balanced(list in definition_list_strategy()) {
        let html = list.to_html();
        prop_assert!(html.starts_with("<dl>\n"));
        prop_assert!(html.ends_with("</dl>"));
        prop_assert_eq!(html.matches("<dt>").count(), list.len());
        prop_assert_eq!(html.matches("<dt>").count(), html.matches("</dt>").count());
        prop_assert_eq!(html.matches("<dd>").count(), html.matches("</dd>").count());
    }
}
