//! Output management module
//!
//! Derives the output path from the first input file and writes the
//! rendered document with buffering.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Compute the output path: the first input's name with its extension
/// replaced by `.xml`, in the same directory as the input.
pub fn output_path_for(first_input: &Path) -> PathBuf {
    first_input.with_extension("xml")
}

/// Write the rendered document to `path`, UTF-8 encoded.
///
/// The file is created or truncated; a write failure aborts the run with
/// no partial-output cleanup.
pub fn write_collection(path: &Path, document: &str) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {:?}", path))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(document.as_bytes())
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write output file {:?}", path))?;

    Ok(())
}
