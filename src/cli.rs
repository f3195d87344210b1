//! Command-line interface definition for wordlist-splitter
//!
//! Flags cover everything; whatever is left out for the wordlist name or the
//! chunk size is asked for on stdin.

use crate::error::SplitError;

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Wordlist picked when the filename prompt is answered with a blank line
pub const DEFAULT_WORDLIST: &str = "rockyou.txt";

/// Split a wordlist into ASCII-only chunk files
///
/// Reads `<in-dir>/<wordlist>`, drops every entry containing non-ASCII
/// characters and writes `<out-dir>/<name>_<index>.txt` files holding
/// `chunk-size` entries each.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordlist-splitter",
    author = "m0h1nd4",
    version,
    about = "Split wordlists into ASCII-only chunk files",
    long_about = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                         WORDLIST-SPLITTER v1.0.0                             ║
║              ASCII Wordlist Chunking for Distributed Cracking Jobs           ║
╚══════════════════════════════════════════════════════════════════════════════╝

Load a wordlist, keep only ASCII entries and cut it into fixed-size chunk
files, one per worker job. Missing values are prompted for interactively.

EXAMPLES:
    # Fully interactive (asks for wordlist and chunk size)
    wordlist-splitter

    # 100k entries per chunk: ./in/rockyou.txt -> ./out/rockyou_<i>.txt
    wordlist-splitter -w rockyou.txt -n 100000

    # Custom directories
    wordlist-splitter -w list.txt -n 5000 --in-dir /data/lists --out-dir /data/jobs

    # Reproduce chunks made by the old division job (every second line)
    wordlist-splitter -w rockyou.txt -n 100000 --legacy-skip
"#
)]
pub struct Args {
    /// Wordlist filename, relative to the input directory
    #[arg(short, long, value_name = "FILE")]
    pub wordlist: Option<String>,

    /// Number of entries per chunk file (0 is treated as 1)
    #[arg(short = 'n', long, value_name = "SIZE")]
    pub chunk_size: Option<usize>,

    /// Directory the wordlist is read from
    #[arg(long, value_name = "DIR", default_value = "./in")]
    pub in_dir: PathBuf,

    /// Directory chunk files are written to (must already exist)
    #[arg(long, value_name = "DIR", default_value = "./out")]
    pub out_dir: PathBuf,

    /// Only read the second line of every pair, like the old division job
    #[arg(long, default_value_t = false)]
    pub legacy_skip: bool,

    /// Buffer size for chunk writes (e.g. "1MB", "256KB")
    #[arg(long, value_name = "SIZE", default_value = "1MB")]
    pub buffer_size: String,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Dry run - show what would be written without creating files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl Args {
    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> anyhow::Result<usize> {
        parse_size(&self.buffer_size)
    }
}

/// Ask for the wordlist filename. A blank answer picks [`DEFAULT_WORDLIST`].
pub fn prompt_wordlist<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    let answer = prompt(input, output, "Enter the path to the wordlist file: ")?;
    if answer.is_empty() {
        Ok(DEFAULT_WORDLIST.to_string())
    } else {
        Ok(answer)
    }
}

/// Ask for the number of entries per chunk
pub fn prompt_chunk_size<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<usize, SplitError> {
    let answer = prompt(input, output, "Enter the number of entries per chunk: ")?;
    parse_chunk_size(&answer)
}

/// Parse a chunk size answer; anything but a non-negative integer is an error
pub fn parse_chunk_size(answer: &str) -> Result<usize, SplitError> {
    answer
        .trim()
        .parse()
        .map_err(|_| SplitError::InvalidChunkSize(answer.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parse human-readable size string to bytes
fn parse_size(size_str: &str) -> anyhow::Result<usize> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(n) = size_str.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = size_str.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = size_str.strip_suffix('B') {
        (n, 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid size format: '{}'", size_str))?;

    if num == 0 {
        anyhow::bail!("Buffer size must be greater than zero");
    }

    Ok(num * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "wordlist-splitter",
            "-w",
            "list.txt",
            "-n",
            "500",
            "--legacy-skip",
        ]);

        assert_eq!(args.wordlist.as_deref(), Some("list.txt"));
        assert_eq!(args.chunk_size, Some(500));
        assert!(args.legacy_skip);
        assert_eq!(args.in_dir, PathBuf::from("./in"));
        assert_eq!(args.out_dir, PathBuf::from("./out"));
    }

    #[test]
    fn test_args_defaults_leave_prompts() {
        let args = Args::parse_from(["wordlist-splitter"]);
        assert!(args.wordlist.is_none());
        assert!(args.chunk_size.is_none());
        assert_eq!(args.parse_buffer_size().unwrap(), 1024 * 1024);
    }

    #[test]
    fn test_prompt_wordlist_default() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();

        let name = prompt_wordlist(&mut input, &mut output).unwrap();
        assert_eq!(name, "rockyou.txt");
        assert_eq!(String::from_utf8(output).unwrap(), "Enter the path to the wordlist file: ");
    }

    #[test]
    fn test_prompt_wordlist_given() {
        let mut input = Cursor::new("  darkweb2017.txt \n");
        let name = prompt_wordlist(&mut input, &mut std::io::sink()).unwrap();
        assert_eq!(name, "darkweb2017.txt");
    }

    #[test]
    fn test_prompt_chunk_size() {
        let mut input = Cursor::new("250\n");
        assert_eq!(prompt_chunk_size(&mut input, &mut std::io::sink()).unwrap(), 250);

        let mut input = Cursor::new("0\n");
        assert_eq!(prompt_chunk_size(&mut input, &mut std::io::sink()).unwrap(), 0);
    }

    #[test]
    fn test_chunk_size_rejects_garbage() {
        assert!(matches!(parse_chunk_size("ten"), Err(SplitError::InvalidChunkSize(_))));
        assert!(matches!(parse_chunk_size("-3"), Err(SplitError::InvalidChunkSize(_))));
        assert!(matches!(parse_chunk_size(""), Err(SplitError::InvalidChunkSize(_))));
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1MB").unwrap(), 1024 * 1024);
        assert_eq!(parse_size("256kb").unwrap(), 256 * 1024);
        assert_eq!(parse_size("4096").unwrap(), 4096);
        assert!(parse_size("0").is_err());
        assert!(parse_size("lots").is_err());
    }
}
