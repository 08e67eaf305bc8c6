//! Command-line interface definition for termlist-converter
//!
//! Provides argument parsing for the term list conversion tool.

use clap::Parser;
use std::path::PathBuf;

/// Convert tab-delimited term lists into EditCollection XML
///
/// Reads one or more `.txt` term files, merges and deduplicates the rules,
/// sorts them longest-match-first, and writes a single XML document next
/// to the first input file.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "termlist-converter",
    author = "m0h1nd4",
    version,
    about = "Convert tab-delimited term lists into EditCollection XML",
    long_about = r#"
Convert tab-delimited term lists into a pretty-printed EditCollection XML
document for a find/replace tool. The output file takes the first input's
name with the extension replaced by .xml.

INPUT FORMAT (one rule per line, tab-separated):
    find<TAB>replace                  regex rule (\b anchors added on output)
    find<TAB>replace<TAB>anyNonEmpty  plain-text rule (matched literally)
    find<TAB>replace<TAB>             dropped (blank third column)

Lines with fewer than two columns are skipped. Duplicate rules across
files collapse to one. Within each kind, longer match keys are emitted
first so longer phrases are tried before their substrings.

EXAMPLES:
    # Convert a single term list (writes glossary.xml)
    termlist-converter glossary.txt

    # Merge several lists into one collection (writes base.xml)
    termlist-converter base.txt extra.txt project.txt

    # Show run statistics
    termlist-converter glossary.txt --stats
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/termlist-converter"
)]
pub struct Args {
    /// Input term list files (each must end in .txt)
    #[arg(required = true, num_args = 1.., value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Show detailed statistics after conversion
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_multiple_inputs() {
        let args = Args::parse_from(["termlist-converter", "a.txt", "b.txt"]);
        assert_eq!(args.inputs, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert!(!args.quiet);
    }

    #[test]
    fn test_requires_at_least_one_input() {
        let result = Args::try_parse_from(["termlist-converter"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from(["termlist-converter", "a.txt", "--stats", "-q"]);
        assert!(args.stats);
        assert!(args.quiet);
        assert!(!args.verbose);
    }
}
