//! Termlist Converter - Tab-delimited term lists to EditCollection XML
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use termlist_converter::cli::Args;
use termlist_converter::converter::{validate_inputs, Converter, ConverterConfig};
use termlist_converter::progress::{print_banner, print_error};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    // Every input must end in .txt before anything is read
    validate_inputs(&args.inputs)?;

    let config = ConverterConfig::from_args(&args);
    let converter = Converter::new(config);
    converter.run(&args.inputs)?;

    Ok(())
}
