//! Console reporting module
//!
//! Provides styled status messages and the end-of-run statistics summary.

use colored::*;
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════════╗
║                   TERMLIST-CONVERTER v1.0.0                      ║
║          Tab-Delimited Term Lists -> EditCollection XML          ║
╚══════════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".green(), text);
}

/// Run statistics for one conversion.
///
/// The pipeline is single-threaded, so plain counters suffice.
#[derive(Debug)]
pub struct ConvertStats {
    pub files: u64,
    pub total_lines: u64,
    pub skipped_lines: u64,
    pub regex_rules: u64,
    pub plain_rules: u64,
    pub duplicates: u64,
    pub start_time: Instant,
}

impl ConvertStats {
    pub fn new() -> Self {
        Self {
            files: 0,
            total_lines: 0,
            skipped_lines: 0,
            regex_rules: 0,
            plain_rules: 0,
            duplicates: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Rules emitted to the output document.
    pub fn emitted_rules(&self) -> u64 {
        self.regex_rules + self.plain_rules
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                   CONVERSION COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!("  {} {}", "Files parsed:   ".green(), self.files);
        println!("  {} {}", "Lines read:     ".green(), self.total_lines);
        println!("  {} {}", "Lines skipped:  ".yellow(), self.skipped_lines);
        println!();

        println!("  {} {}", "Regex rules:    ".green(), self.regex_rules);
        println!("  {} {}", "Plain rules:    ".green(), self.plain_rules);
        println!("  {} {}", "Duplicates:     ".yellow(), self.duplicates);
        println!(
            "  {} {}",
            "Total emitted:  ".green().bold(),
            self.emitted_rules().to_string().green().bold()
        );

        println!();
        println!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed()));
        println!("{}", "═".repeat(60).green());
    }
}

impl Default for ConvertStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
    }

    #[test]
    fn test_stats_emitted_rules() {
        let mut stats = ConvertStats::new();
        stats.regex_rules = 3;
        stats.plain_rules = 2;

        assert_eq!(stats.emitted_rules(), 5);
    }
}
