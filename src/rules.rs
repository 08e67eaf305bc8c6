//! Rule data model
//!
//! A rule is an immutable (find, replace) pair. Rules come in two kinds:
//! regular-expression rules (the find text is a pattern, later wrapped with
//! word-boundary anchors) and plain-text rules (matched literally). A
//! [`RuleSet`] accumulates both kinds across all input files and provides
//! the merge, dedup, and sort steps of the pipeline.

use ahash::RandomState;
use hashbrown::HashSet;

/// A single find/replace rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    /// The match key: a regex pattern or a literal string, depending on kind.
    pub find: String,
    /// Replacement text, emitted verbatim.
    pub replace: String,
}

impl Rule {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }

    /// Length of the match key in characters (code points, not bytes).
    #[inline]
    pub fn key_len(&self) -> usize {
        if self.find.is_ascii() {
            self.find.len()
        } else {
            self.find.chars().count()
        }
    }
}

/// The two rule kinds recognized by the edit collection format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Match key is a regular-expression pattern.
    Regex,
    /// Match key is matched literally, character-for-character.
    PlainText,
}

impl RuleKind {
    /// The `EditItemType` attribute value for this kind.
    pub fn edit_item_type(&self) -> &'static str {
        match self {
            Self::Regex => "regular_expression",
            Self::PlainText => "plain_text",
        }
    }
}

/// Accumulated rules for one conversion run, one list per kind.
///
/// Lists preserve insertion order until `sort` is called, so deduplication
/// keeps the first occurrence of each pair and tied-length keys stay in
/// first-seen order. Output is therefore deterministic across runs.
#[derive(Debug, Default, Clone)]
pub struct RuleSet {
    pub regex: Vec<Rule>,
    pub plain: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append another set's rules, preserving file order.
    pub fn merge(&mut self, other: RuleSet) {
        self.regex.extend(other.regex);
        self.plain.extend(other.plain);
    }

    /// Remove exact (find, replace) duplicates within each kind, keeping
    /// the first occurrence. Equality is exact string equality on both
    /// fields; no normalization is applied.
    ///
    /// Returns the number of duplicates removed.
    pub fn dedup(&mut self) -> usize {
        dedup_in_place(&mut self.regex) + dedup_in_place(&mut self.plain)
    }

    /// Sort each kind independently by descending match-key length.
    /// The sort is stable, so equal-length keys keep their current order.
    pub fn sort(&mut self) {
        self.regex.sort_by(|a, b| b.key_len().cmp(&a.key_len()));
        self.plain.sort_by(|a, b| b.key_len().cmp(&a.key_len()));
    }

    /// Total number of rules across both kinds.
    pub fn len(&self) -> usize {
        self.regex.len() + self.plain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regex.is_empty() && self.plain.is_empty()
    }
}

/// Order-preserving dedup: a seen-set decides, the Vec keeps the order.
fn dedup_in_place(rules: &mut Vec<Rule>) -> usize {
    let before = rules.len();
    let mut seen: HashSet<Rule, RandomState> =
        HashSet::with_capacity_and_hasher(rules.len(), RandomState::new());
    rules.retain(|rule| seen.insert(rule.clone()));
    before - rules.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_len_ascii_and_unicode() {
        assert_eq!(Rule::new("foo", "bar").key_len(), 3);
        assert_eq!(Rule::new("héllo", "x").key_len(), 5); // 5 chars, 6 bytes
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut set = RuleSet::new();
        set.regex.push(Rule::new("a", "1"));
        set.regex.push(Rule::new("b", "2"));
        set.regex.push(Rule::new("a", "1"));
        set.regex.push(Rule::new("a", "3")); // same key, different replacement

        let removed = set.dedup();

        assert_eq!(removed, 1);
        assert_eq!(
            set.regex,
            vec![Rule::new("a", "1"), Rule::new("b", "2"), Rule::new("a", "3")]
        );
    }

    #[test]
    fn test_dedup_is_per_kind() {
        let mut set = RuleSet::new();
        set.regex.push(Rule::new("term", "repl"));
        set.plain.push(Rule::new("term", "repl"));

        assert_eq!(set.dedup(), 0);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_sort_descending_by_key_length() {
        let mut set = RuleSet::new();
        set.regex.push(Rule::new("ab", "x"));
        set.regex.push(Rule::new("abcd", "x"));
        set.regex.push(Rule::new("abc", "x"));

        set.sort();

        let keys: Vec<&str> = set.regex.iter().map(|r| r.find.as_str()).collect();
        assert_eq!(keys, vec!["abcd", "abc", "ab"]);
    }

    #[test]
    fn test_sort_ties_keep_insertion_order() {
        let mut set = RuleSet::new();
        set.plain.push(Rule::new("bb", "1"));
        set.plain.push(Rule::new("aa", "2"));
        set.plain.push(Rule::new("cc", "3"));

        set.sort();

        let keys: Vec<&str> = set.plain.iter().map(|r| r.find.as_str()).collect();
        assert_eq!(keys, vec!["bb", "aa", "cc"]);
    }

    #[test]
    fn test_merge_preserves_file_order() {
        let mut first = RuleSet::new();
        first.regex.push(Rule::new("one", "1"));

        let mut second = RuleSet::new();
        second.regex.push(Rule::new("two", "2"));
        second.plain.push(Rule::new("three", "3"));

        first.merge(second);

        assert_eq!(first.regex.len(), 2);
        assert_eq!(first.regex[0].find, "one");
        assert_eq!(first.regex[1].find, "two");
        assert_eq!(first.plain.len(), 1);
    }

    #[test]
    fn test_edit_item_type() {
        assert_eq!(RuleKind::Regex.edit_item_type(), "regular_expression");
        assert_eq!(RuleKind::PlainText.edit_item_type(), "plain_text");
    }
}
