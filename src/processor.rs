//! Core processing engine
//!
//! Runs a split end to end: load the wordlist, cut it into chunks, write the
//! chunk files. All input arrives through [`SplitConfig`], so the same engine
//! serves the interactive front end and programmatic callers.

use crate::chunker::{divide_into_chunks, effective_chunk_size};
use crate::cli::{prompt_chunk_size, prompt_wordlist, Args};
use crate::loader::{load_wordlist, ReadMode, DEFAULT_INPUT_DIR};
use crate::output::{
    write_chunks, ChunkNaming, WrittenChunk, DEFAULT_BUFFER_SIZE, DEFAULT_OUTPUT_DIR,
};
use crate::progress::{
    create_progress_bar, create_spinner, print_bullet, print_header, print_info, print_success,
    print_warning, SplitSummary,
};

use bytesize::ByteSize;
use colored::*;
use indicatif::ProgressBar;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Everything a split needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Wordlist filename, relative to `input_dir`
    pub input_filename: String,
    /// Entries per chunk; `0` is treated as `1`
    pub chunk_size: usize,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub read_mode: ReadMode,
    pub buffer_size: usize,
    pub dry_run: bool,
    pub quiet: bool,
}

impl SplitConfig {
    pub fn new(input_filename: impl Into<String>, chunk_size: usize) -> Self {
        Self {
            input_filename: input_filename.into(),
            chunk_size,
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            read_mode: ReadMode::Sequential,
            buffer_size: DEFAULT_BUFFER_SIZE,
            dry_run: false,
            quiet: true,
        }
    }

    /// Build from command-line arguments, prompting on stdin for whatever
    /// was not given
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        Self::from_args_with(args, &mut input, &mut output)
    }

    /// Same as [`SplitConfig::from_args`] with explicit prompt streams
    pub fn from_args_with<R: BufRead, W: Write>(
        args: &Args,
        input: &mut R,
        output: &mut W,
    ) -> anyhow::Result<Self> {
        let input_filename = match &args.wordlist {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => prompt_wordlist(input, output)?,
        };

        let chunk_size = match args.chunk_size {
            Some(n) => n,
            None => prompt_chunk_size(input, output)?,
        };

        Ok(Self {
            input_filename,
            chunk_size,
            input_dir: args.in_dir.clone(),
            output_dir: args.out_dir.clone(),
            read_mode: if args.legacy_skip {
                ReadMode::Paired
            } else {
                ReadMode::Sequential
            },
            buffer_size: args.parse_buffer_size()?,
            dry_run: args.dry_run,
            quiet: args.quiet,
        })
    }

    pub fn input_path(&self) -> PathBuf {
        self.input_dir.join(&self.input_filename)
    }

    pub fn naming(&self) -> ChunkNaming {
        ChunkNaming::new(&self.output_dir, &self.input_filename)
    }
}

/// What a finished split produced
#[derive(Debug, Clone)]
pub struct SplitReport {
    pub summary: SplitSummary,
    /// Files on disk; empty for a dry run
    pub written: Vec<WrittenChunk>,
    /// Paths the chunks map to, written or not
    pub planned: Vec<PathBuf>,
}

/// Main processor
pub struct Processor {
    config: SplitConfig,
}

impl Processor {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Load, chunk and write
    pub fn run(&self) -> anyhow::Result<SplitReport> {
        let start = Instant::now();
        let config = &self.config;
        let input_path = config.input_path();
        let chunk_size = effective_chunk_size(config.chunk_size);
        if chunk_size != config.chunk_size {
            log::debug!("Chunk size {} raised to {}", config.chunk_size, chunk_size);
        }

        if !config.quiet {
            print_header("Loading wordlist...");
            print_info(&format!("Input: {:?}", input_path));
        }

        let spinner = self.spinner("Reading lines...");
        let loaded = load_wordlist(&input_path, config.read_mode);
        spinner.finish_and_clear();
        let loaded = loaded?;
        let input_bytes = fs::metadata(&input_path).map(|m| m.len()).unwrap_or(0);

        if !config.quiet {
            print_info(&format!(
                "Kept {} ASCII entries from {} ({})",
                loaded.wordlist.len(),
                input_path.display(),
                ByteSize(input_bytes)
            ));
            if loaded.stats.truncated {
                print_warning(
                    "Input could not be read to the end; using the entries loaded so far",
                );
            }
            if loaded.wordlist.is_empty() {
                print_warning("No entries qualified - nothing to write");
            }
        }

        let chunks = divide_into_chunks(loaded.wordlist.entries(), chunk_size);
        let naming = config.naming();
        let planned: Vec<PathBuf> = (0..chunks.len()).map(|i| naming.chunk_path(i)).collect();

        let written = if config.dry_run {
            self.dry_run_report(&planned, chunk_size);
            Vec::new()
        } else {
            self.write(&naming, &chunks)?
        };

        let summary = SplitSummary {
            input_bytes,
            load: loaded.stats,
            chunk_size,
            chunks: chunks.len(),
            bytes_written: written.iter().map(|w| w.bytes).sum(),
            elapsed: start.elapsed(),
        };

        log::info!(
            "Split {:?} into {} chunks of up to {} entries",
            input_path,
            summary.chunks,
            chunk_size
        );

        if !config.quiet {
            summary.print();
        }

        Ok(SplitReport {
            summary,
            written,
            planned,
        })
    }

    fn write(&self, naming: &ChunkNaming, chunks: &[String]) -> anyhow::Result<Vec<WrittenChunk>> {
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        if !self.config.quiet {
            print_header(&format!("Writing {} chunk files...", chunks.len()));
            print_info(&format!("Prefix: {:?}", naming.prefix()));
        }

        let pb = if self.config.quiet {
            ProgressBar::hidden()
        } else {
            create_progress_bar(chunks.len() as u64, "Writing...")
        };

        let written = write_chunks(naming, chunks, self.config.buffer_size, |_| pb.inc(1));
        match &written {
            Ok(_) => pb.finish_with_message("Complete".green().to_string()),
            Err(_) => pb.abandon(),
        }
        let written = written?;

        if !self.config.quiet {
            print_success(&format!("Chunks written to: {:?}", naming.dir()));
        }

        Ok(written)
    }

    /// Dry run report
    fn dry_run_report(&self, planned: &[PathBuf], chunk_size: usize) {
        if self.config.quiet {
            return;
        }

        print_header("DRY RUN - No files will be written");
        print_bullet(&format!("Output directory: {:?}", self.config.output_dir));
        print_bullet(&format!("Entries per chunk: {}", chunk_size));
        for path in planned {
            print_bullet(&format!("{}", path.display()));
        }
    }

    fn spinner(&self, msg: &str) -> ProgressBar {
        if self.config.quiet {
            ProgressBar::hidden()
        } else {
            create_spinner(msg)
        }
    }
}
