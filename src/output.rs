//! Output management module
//!
//! Names and writes chunk files. The output directory is never created
//! here: it has to exist before the first chunk is written.

use crate::error::{Result, SplitError};

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default buffer size for chunk writes (1MB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Default directory chunk files are written to
pub const DEFAULT_OUTPUT_DIR: &str = "./out";

/// Buffered writer for a single chunk file
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create (or truncate) the file at `path`
    pub fn create(path: PathBuf, buffer_size: usize) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| SplitError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            writer: BufWriter::with_capacity(buffer_size, file),
            path,
            bytes_written: 0,
        })
    }

    /// Write a chunk followed by its trailing newline
    pub fn write_chunk(&mut self, chunk: &str) -> Result<()> {
        self.writer
            .write_all(chunk.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|source| SplitError::Write {
                path: self.path.clone(),
                source,
            })?;
        self.bytes_written += chunk.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    /// Flush the buffer to disk, consuming the writer
    pub fn finish(mut self) -> Result<WrittenChunk> {
        self.writer.flush().map_err(|source| SplitError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(WrittenChunk {
            path: self.path,
            bytes: self.bytes_written,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

/// A chunk file that made it to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenChunk {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Naming scheme for the chunk files of one wordlist:
/// `<dir>/<stem>_<index>.txt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkNaming {
    dir: PathBuf,
    stem: String,
}

impl ChunkNaming {
    /// Derive the naming from the wordlist filename. The stem is everything
    /// before the first `.txt`, so `a.txt.bak.txt` gives `a`.
    pub fn new(output_dir: impl Into<PathBuf>, wordlist_filename: &str) -> Self {
        let stem = wordlist_filename
            .split(".txt")
            .next()
            .unwrap_or(wordlist_filename)
            .to_string();

        Self {
            dir: output_dir.into(),
            stem,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Output prefix the chunk index gets appended to
    pub fn prefix(&self) -> PathBuf {
        self.dir.join(&self.stem)
    }

    /// Path of the chunk at `index` (zero-based)
    pub fn chunk_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}_{}.txt", self.stem, index))
    }
}

/// Fail unless `path` is an existing directory
pub fn check_output_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(SplitError::OutputDir(path.to_path_buf()))
    }
}

/// Write every chunk to its own file, in order.
///
/// `on_written` is called after each file is flushed.
pub fn write_chunks<F>(
    naming: &ChunkNaming,
    chunks: &[String],
    buffer_size: usize,
    mut on_written: F,
) -> Result<Vec<WrittenChunk>>
where
    F: FnMut(&WrittenChunk),
{
    if chunks.is_empty() {
        return Ok(Vec::new());
    }
    check_output_dir(naming.dir())?;

    let mut written = Vec::with_capacity(chunks.len());
    for (index, chunk) in chunks.iter().enumerate() {
        let mut writer = OutputWriter::create(naming.chunk_path(index), buffer_size)?;
        writer.write_chunk(chunk)?;
        let done = writer.finish()?;

        log::debug!("Wrote {:?} ({} bytes)", done.path, done.bytes);
        on_written(&done);
        written.push(done);
    }

    Ok(written)
}
