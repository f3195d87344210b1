//! # Wordlist Splitter
//!
//! Cuts a wordlist into fixed-size chunk files for distribution to parallel
//! cracking workers.
//!
//! ## Features
//!
//! - **ASCII filtering**: entries with any non-ASCII character are dropped
//! - **Tolerant loading**: undecodable lines are skipped, never fatal
//! - **Fixed-size chunks**: `n` entries per file, the last one may be shorter
//! - **Legacy mode**: reproduce the old every-second-line reading pattern
//!
//! ## Usage
//!
//! ```bash
//! # Interactive: asks for the wordlist and the chunk size
//! wordlist-splitter
//!
//! # ./in/rockyou.txt -> ./out/rockyou_0.txt, ./out/rockyou_1.txt, ...
//! wordlist-splitter -w rockyou.txt -n 100000
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordlist_splitter::processor::{Processor, SplitConfig};
//!
//! let config = SplitConfig::new("rockyou.txt", 100_000);
//! let report = Processor::new(config).run().unwrap();
//! println!("{} chunks", report.summary.chunks);
//! ```

pub mod chunker;
pub mod cli;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod processor;
pub mod progress;

pub use cli::Args;
pub use error::SplitError;
pub use processor::{Processor, SplitConfig};
