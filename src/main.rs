//! Wordlist Splitter - ASCII-only wordlist chunking for distributed jobs
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wordlist_splitter::cli::Args;
use wordlist_splitter::processor::{Processor, SplitConfig};
use wordlist_splitter::progress::{print_banner, print_error, print_header, print_info};

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
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    let config = SplitConfig::from_args(&args)?;

    if !args.quiet && args.verbose {
        print_config(&config);
    }

    let processor = Processor::new(config);
    processor.run()?;

    Ok(())
}

/// Print configuration summary
fn print_config(config: &SplitConfig) {
    print_header("Configuration");

    print_info(&format!("Input:        {:?}", config.input_path()));
    print_info(&format!("Output:       {:?}_<index>.txt", config.naming().prefix()));
    print_info(&format!("Chunk size:   {}", config.chunk_size));
    print_info(&format!("Read mode:    {:?}", config.read_mode));
    print_info(&format!("Buffer size:  {} KB", config.buffer_size / 1024));
    print_info(&format!("Dry run:      {}", config.dry_run));
}
