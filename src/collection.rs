//! EditCollection document assembly
//!
//! Turns a sorted [`RuleSet`] into the XML tree the find/replace tool
//! consumes: an `EditCollection` root holding an `Items` container with one
//! `EditItem` per rule. Regex rules are emitted first, then plain-text
//! rules, each kind in its sorted order.

use crate::rules::{Rule, RuleKind, RuleSet};
use crate::xml::Element;

/// Word-boundary anchor wrapped around every regex match key so patterns
/// only match whole-word occurrences.
const WORD_BOUNDARY: &str = r"\b";

/// Build the full document tree from a sorted rule set.
pub fn build_document(rules: &RuleSet) -> Element {
    let mut items = Element::new("Items");

    for rule in &rules.regex {
        items.push_child(build_item(rule, RuleKind::Regex));
    }
    for rule in &rules.plain {
        items.push_child(build_item(rule, RuleKind::PlainText));
    }

    Element::new("EditCollection").child(items)
}

/// Build one `EditItem` element for a rule of the given kind.
fn build_item(rule: &Rule, kind: RuleKind) -> Element {
    let find_text = match kind {
        RuleKind::Regex => format!("{}{}{}", WORD_BOUNDARY, rule.find, WORD_BOUNDARY),
        RuleKind::PlainText => rule.find.clone(),
    };

    Element::new("EditItem")
        .attr("Enabled", "true")
        .attr("EditItemType", kind.edit_item_type())
        .child(Element::new("FindText").text(find_text))
        .child(Element::new("ReplaceText").text(&rule.replace))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_find_text_gets_word_boundaries() {
        let doc = build_item(&Rule::new("foo", "bar"), RuleKind::Regex);
        let rendered = doc.to_pretty_string();

        assert!(rendered.contains(r"<FindText>\bfoo\b</FindText>"));
        assert!(rendered.contains("<ReplaceText>bar</ReplaceText>"));
        assert!(rendered.contains("EditItemType=\"regular_expression\""));
    }

    #[test]
    fn test_plain_text_find_text_is_verbatim() {
        let doc = build_item(&Rule::new("foobaz", "qux"), RuleKind::PlainText);
        let rendered = doc.to_pretty_string();

        assert!(rendered.contains("<FindText>foobaz</FindText>"));
        assert!(rendered.contains("EditItemType=\"plain_text\""));
    }

    #[test]
    fn test_regex_items_precede_plain_text_items() {
        let mut rules = RuleSet::new();
        rules.plain.push(Rule::new("literal", "l"));
        rules.regex.push(Rule::new("pattern", "p"));

        let rendered = build_document(&rules).to_pretty_string();

        let regex_pos = rendered.find("regular_expression").unwrap();
        let plain_pos = rendered.find("plain_text").unwrap();
        assert!(regex_pos < plain_pos);
    }

    #[test]
    fn test_empty_rule_set_renders_self_closing_items() {
        let rendered = build_document(&RuleSet::new()).to_pretty_string();
        assert_eq!(rendered, "<EditCollection>\n\t<Items/>\n</EditCollection>\n");
    }

    #[test]
    fn test_full_document_layout() {
        let mut rules = RuleSet::new();
        rules.regex.push(Rule::new("foo", "bar"));

        let rendered = build_document(&rules).to_pretty_string();

        let expected = "<EditCollection>\n\
                        \t<Items>\n\
                        \t\t<EditItem Enabled=\"true\" EditItemType=\"regular_expression\">\n\
                        \t\t\t<FindText>\\bfoo\\b</FindText>\n\
                        \t\t\t<ReplaceText>bar</ReplaceText>\n\
                        \t\t</EditItem>\n\
                        \t</Items>\n\
                        </EditCollection>\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_special_characters_escape_in_find_and_replace() {
        let doc = build_item(&Rule::new("a<b", "x&y"), RuleKind::PlainText);
        let rendered = doc.to_pretty_string();

        assert!(rendered.contains("<FindText>a&lt;b</FindText>"));
        assert!(rendered.contains("<ReplaceText>x&amp;y</ReplaceText>"));
    }
}
