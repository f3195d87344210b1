//! Progress display module
//!
//! Styled terminal output, spinners and the end-of-run summary.

use crate::loader::LoadStats;

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║   ██╗    ██╗ ██████╗ ██████╗ ██████╗ ██╗     ██╗███████╗████████╗           ║
║   ██║    ██║██╔═══██╗██╔══██╗██╔══██╗██║     ██║██╔════╝╚══██╔══╝           ║
║   ██║ █╗ ██║██║   ██║██████╔╝██║  ██║██║     ██║███████╗   ██║              ║
║   ██║███╗██║██║   ██║██╔══██╗██║  ██║██║     ██║╚════██║   ██║              ║
║   ╚███╔███╔╝╚██████╔╝██║  ██║██████╔╝███████╗██║███████║   ██║              ║
║    ╚══╝╚══╝  ╚═════╝ ╚═╝  ╚═╝╚═════╝ ╚══════╝╚═╝╚══════╝   ╚═╝              ║
║                                                                              ║
║   ███████╗██████╗ ██╗     ██╗████████╗                                      ║
║   ██╔════╝██╔══██╗██║     ██║╚══██╔══╝                                      ║
║   ███████╗██████╔╝██║     ██║   ██║                                         ║
║   ╚════██║██╔═══╝ ██║     ██║   ██║                                         ║
║   ███████║██║     ███████╗██║   ██║                                         ║
║   ╚══════╝╚═╝     ╚══════╝╚═╝   ╚═╝                                         ║
║                                                                              ║
║                  ASCII Wordlist Chunking for Distributed Jobs                ║
║                                                              v1.0.0          ║
╚══════════════════════════════════════════════════════════════════════════════╝
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

/// Create a styled progress bar counting chunk files
pub fn create_progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Totals for a finished split
#[derive(Debug, Clone, Default)]
pub struct SplitSummary {
    pub input_bytes: u64,
    pub load: LoadStats,
    pub chunk_size: usize,
    pub chunks: usize,
    pub bytes_written: u64,
    pub elapsed: Duration,
}

impl SplitSummary {
    /// Print final statistics
    pub fn print(&self) {
        let load = &self.load;

        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                      SPLIT COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!("  {} {}", "Input size:     ".green(), ByteSize(self.input_bytes));
        println!("  {} {}", "Lines read:     ".green(), format_number(load.lines_considered));
        if load.lines_discarded > 0 {
            println!("  {} {}", "Paired skips:   ".yellow(), format_number(load.lines_discarded));
        }
        println!("  {} {}", "Non-ASCII:      ".yellow(), format_number(load.non_ascii));
        println!("  {} {}", "Blank:          ".yellow(), format_number(load.empty));
        if load.undecodable > 0 {
            println!("  {} {}", "Undecodable:    ".red(), format_number(load.undecodable).red());
        }
        println!(
            "  {} {}",
            "Entries kept:   ".green().bold(),
            format_number(load.accepted).green().bold()
        );
        println!();

        println!("  {} {}", "Chunk size:     ".green(), format_number(self.chunk_size as u64));
        println!("  {} {}", "Chunk files:    ".green(), format_number(self.chunks as u64));
        println!("  {} {}", "Bytes written:  ".green(), ByteSize(self.bytes_written));
        println!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed));
        println!();
        println!("{}", "═".repeat(60).green());
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(14344391), "14,344,391");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.5s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m");
    }
}
