//! Term list parsing
//!
//! Reads a tab-delimited term file and classifies each line into a regex
//! rule or a plain-text rule based on column count:
//!
//! ```text
//! find<TAB>replace                  -> regex rule
//! find<TAB>replace<TAB>anyNonEmpty  -> plain-text rule
//! find<TAB>replace<TAB>             -> dropped (3rd field empty)
//! find                              -> dropped (fewer than 2 fields)
//! ```
//!
//! Malformed lines are skipped silently; they are traced at debug level
//! only. I/O failures and invalid UTF-8 abort the whole run.

use crate::rules::{Rule, RuleKind, RuleSet};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Per-file parse counters, folded into the run summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParseCounts {
    /// Lines read from the file.
    pub lines: u64,
    /// Lines that produced no rule.
    pub skipped: u64,
}

/// Parse a single term file into a [`RuleSet`], preserving line order.
pub fn parse_terms(path: &Path) -> anyhow::Result<(RuleSet, ParseCounts)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {:?}", path))?;

    let mut set = RuleSet::new();
    let mut counts = ParseCounts::default();

    // lines() strips both \n and \r\n terminators
    for line in content.lines() {
        counts.lines += 1;

        match classify_line(line) {
            Some((rule, RuleKind::Regex)) => set.regex.push(rule),
            Some((rule, RuleKind::PlainText)) => set.plain.push(rule),
            None => {
                counts.skipped += 1;
                log::debug!("Skipping malformed line {} in {:?}", counts.lines, path);
            }
        }
    }

    log::debug!(
        "Parsed {:?}: {} regex rules, {} plain-text rules, {} lines skipped",
        path,
        set.regex.len(),
        set.plain.len(),
        counts.skipped
    );

    Ok((set, counts))
}

/// Classify one line by its tab-separated field count.
///
/// Returns `None` for lines that contribute no rule: fewer than two fields,
/// or three-plus fields with a blank third field. The third field's content
/// is never inspected beyond being non-empty; it acts purely as a marker
/// selecting the plain-text kind.
pub fn classify_line(line: &str) -> Option<(Rule, RuleKind)> {
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() < 2 {
        return None;
    }

    let rule = Rule::new(fields[0], fields[1]);

    if fields.len() == 2 {
        Some((rule, RuleKind::Regex))
    } else if !fields[2].trim().is_empty() {
        Some((rule, RuleKind::PlainText))
    } else {
        None
    }
}
