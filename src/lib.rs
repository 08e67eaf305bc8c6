//! # Termlist Converter
//!
//! Converts tab-delimited term lists into a single pretty-printed
//! EditCollection XML document for a find/replace tool.
//!
//! ## Pipeline
//!
//! - **Parse**: split each line on tabs and classify it as a regex rule
//!   (two columns) or a plain-text rule (three-plus columns with a
//!   non-blank marker)
//! - **Merge/dedup**: combine rules across all input files and collapse
//!   exact duplicates, keeping first-seen order
//! - **Sort**: order each kind by descending match-key length so longer
//!   phrases are tried before their substrings
//! - **Serialize**: emit tab-indented XML without a declaration prolog
//!
//! ## Usage
//!
//! ```bash
//! # Convert a single term list (writes glossary.xml)
//! termlist-converter glossary.txt
//!
//! # Merge several lists into one collection
//! termlist-converter base.txt extra.txt
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use termlist_converter::converter::{Converter, ConverterConfig};
//! use std::path::PathBuf;
//!
//! let config = ConverterConfig {
//!     quiet: true,
//!     verbose: false,
//!     stats: false,
//! };
//!
//! let converter = Converter::new(config);
//! let output = converter.run(&[PathBuf::from("glossary.txt")]).unwrap();
//! println!("wrote {:?}", output);
//! ```

pub mod cli;
pub mod collection;
pub mod converter;
pub mod output;
pub mod parser;
pub mod progress;
pub mod rules;
pub mod xml;

pub use cli::Args;
pub use converter::{Converter, ConverterConfig};
pub use rules::{Rule, RuleKind, RuleSet};
