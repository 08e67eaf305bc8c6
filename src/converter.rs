//! Conversion pipeline
//!
//! Drives the four stages of a run: parse each input file, merge and
//! deduplicate the rules, sort them longest-key-first, and serialize the
//! EditCollection document next to the first input file.

use crate::cli::Args;
use crate::collection::build_document;
use crate::output::{output_path_for, write_collection};
use crate::parser::parse_terms;
use crate::progress::{print_header, print_info, print_success, print_warning, ConvertStats};
use crate::rules::RuleSet;

use std::path::{Path, PathBuf};

/// Converter configuration
pub struct ConverterConfig {
    pub quiet: bool,
    pub verbose: bool,
    pub stats: bool,
}

impl ConverterConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            quiet: args.quiet,
            verbose: args.verbose,
            stats: args.stats,
        }
    }
}

/// Main converter
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline over the input files, in command-line order.
    ///
    /// Aborts on the first unreadable file; results parsed so far are
    /// discarded. Returns the path of the generated document.
    pub fn run(&self, inputs: &[PathBuf]) -> anyhow::Result<PathBuf> {
        if inputs.is_empty() {
            anyhow::bail!("No input files given");
        }

        let mut stats = ConvertStats::new();

        if !self.config.quiet {
            print_header("Parsing term lists...");
        }

        let mut rules = RuleSet::new();

        for input in inputs {
            let (parsed, counts) = parse_terms(input)?;

            if self.config.verbose && !self.config.quiet {
                print_info(&format!(
                    "{:?}: {} regex, {} plain-text, {} skipped",
                    input,
                    parsed.regex.len(),
                    parsed.plain.len(),
                    counts.skipped
                ));
            }

            stats.files += 1;
            stats.total_lines += counts.lines;
            stats.skipped_lines += counts.skipped;
            rules.merge(parsed);
        }

        stats.duplicates = rules.dedup() as u64;
        rules.sort();

        stats.regex_rules = rules.regex.len() as u64;
        stats.plain_rules = rules.plain.len() as u64;

        if rules.is_empty() && !self.config.quiet {
            print_warning("No rules found; writing an empty collection");
        }

        let document = build_document(&rules).to_pretty_string();
        let output_path = output_path_for(&inputs[0]);
        write_collection(&output_path, &document)?;

        if !self.config.quiet {
            print_success(&format!("XML file generated: {}", output_path.display()));
        }

        if self.config.stats && !self.config.quiet {
            stats.print_summary();
        }

        Ok(output_path)
    }
}

/// Check that every input argument carries the required `.txt` suffix.
///
/// The check runs before any file is opened so an invalid argument never
/// produces output.
pub fn validate_inputs(inputs: &[PathBuf]) -> anyhow::Result<()> {
    for input in inputs {
        if !has_txt_extension(input) {
            anyhow::bail!(
                "Input file {} must have a .txt extension",
                input.display()
            );
        }
    }
    Ok(())
}

fn has_txt_extension(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".txt")
}
