//! Wordlist loading
//!
//! Reads a file as raw bytes, line by line, and keeps the entries that pass
//! [`crate::filter::classify`]. Undecodable lines are counted and skipped, and
//! a read error partway through keeps whatever was accepted before it.

use crate::error::{Result, SplitError};
use crate::filter::{classify, Rejection};

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Default directory wordlists are read from
pub const DEFAULT_INPUT_DIR: &str = "./in";

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Which physical lines of the input get considered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Every line, in file order
    #[default]
    Sequential,
    /// Only the second line of each consecutive pair (`L2`, `L4`, ...).
    /// A trailing unpaired line is dropped. Kept for reproducing chunk
    /// files produced by the old division job.
    Paired,
}

/// Ordered, ASCII-only entries of a loaded wordlist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    entries: Vec<String>,
}

impl Wordlist {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl From<Vec<String>> for Wordlist {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

/// Per-line bookkeeping for a single load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines run through the filter
    pub lines_considered: u64,
    /// Lines passed over by [`ReadMode::Paired`]
    pub lines_discarded: u64,
    pub accepted: u64,
    pub empty: u64,
    pub non_ascii: u64,
    pub undecodable: u64,
    /// Set when a read error cut the load short
    pub truncated: bool,
}

impl LoadStats {
    fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::Empty => self.empty += 1,
            Rejection::NonAscii => self.non_ascii += 1,
            Rejection::Undecodable => self.undecodable += 1,
        }
    }

    /// Lines that were considered but left out
    pub fn rejected(&self) -> u64 {
        self.empty + self.non_ascii + self.undecodable
    }
}

/// Result of loading a wordlist
#[derive(Debug, Clone, Default)]
pub struct LoadedWordlist {
    pub wordlist: Wordlist,
    pub stats: LoadStats,
}

/// Iterator over raw `\n`-terminated lines, newline included.
///
/// A UTF-8 byte order mark at the very start of the stream is dropped.
pub struct RawLineIterator<R: Read> {
    reader: BufReader<R>,
    line_buffer: Vec<u8>,
    at_start: bool,
}

impl RawLineIterator<File> {
    /// Open a file for line iteration
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SplitError::InputNotFound {
                path: path.to_path_buf(),
                source: e,
            },
            _ => SplitError::Io(e),
        })?;

        if file.metadata()?.is_dir() {
            return Err(SplitError::InputNotAFile(path.to_path_buf()));
        }

        Ok(Self::new(file))
    }
}

impl<R: Read> RawLineIterator<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::with_capacity(64 * 1024, inner),
            line_buffer: Vec::with_capacity(4096),
            at_start: true,
        }
    }
}

impl<R: Read> Iterator for RawLineIterator<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line_buffer.clear();

        match self.reader.read_until(b'\n', &mut self.line_buffer) {
            Ok(0) => None, // EOF
            Ok(_) => {
                let mut line = std::mem::take(&mut self.line_buffer);
                if self.at_start {
                    self.at_start = false;
                    if line.starts_with(&UTF8_BOM) {
                        line.drain(..UTF8_BOM.len());
                    }
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Load the wordlist at `path`.
///
/// Fails only when the file cannot be opened; everything after that is
/// best effort.
pub fn load_wordlist(path: &Path, mode: ReadMode) -> Result<LoadedWordlist> {
    let lines = RawLineIterator::open(path)?;
    log::debug!("Loading {:?} ({:?} mode)", path, mode);
    Ok(load_lines(lines, mode))
}

/// Load a wordlist from any byte source
pub fn load_from_reader<R: Read>(reader: R, mode: ReadMode) -> LoadedWordlist {
    load_lines(RawLineIterator::new(reader), mode)
}

fn load_lines<I>(mut lines: I, mode: ReadMode) -> LoadedWordlist
where
    I: Iterator<Item = io::Result<Vec<u8>>>,
{
    let mut entries = Vec::new();
    let mut stats = LoadStats::default();

    loop {
        if mode == ReadMode::Paired {
            match lines.next() {
                Some(Ok(_)) => stats.lines_discarded += 1,
                Some(Err(e)) => {
                    truncate(&mut stats, &e);
                    break;
                }
                None => break,
            }
        }

        let raw = match lines.next() {
            Some(Ok(raw)) => raw,
            Some(Err(e)) => {
                truncate(&mut stats, &e);
                break;
            }
            None => break,
        };

        stats.lines_considered += 1;
        match classify(&raw) {
            Ok(word) => {
                stats.accepted += 1;
                entries.push(word);
            }
            Err(rejection) => {
                log::trace!("Skipping line {}: {:?}", stats.lines_considered, rejection);
                stats.record(rejection);
            }
        }
    }

    log::debug!(
        "Loaded {} entries ({} rejected, {} undecodable)",
        stats.accepted,
        stats.rejected(),
        stats.undecodable
    );

    LoadedWordlist {
        wordlist: Wordlist::from(entries),
        stats,
    }
}

fn truncate(stats: &mut LoadStats, err: &io::Error) {
    log::warn!(
        "Read error after {} lines, keeping partial wordlist: {}",
        stats.lines_considered + stats.lines_discarded,
        err
    );
    stats.truncated = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Reader that yields its data and then fails
    struct FailingReader {
        data: io::Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.data.read(buf)?;
            if n == 0 {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            } else {
                Ok(n)
            }
        }
    }

    #[test]
    fn test_sequential_reads_every_line() {
        let loaded = load_from_reader(&b"L1\nL2\nL3\nL4\n"[..], ReadMode::Sequential);
        assert_eq!(loaded.wordlist.entries(), ["L1", "L2", "L3", "L4"]);
        assert_eq!(loaded.stats.lines_considered, 4);
        assert_eq!(loaded.stats.lines_discarded, 0);
    }

    #[test]
    fn test_paired_reads_second_of_each_pair() {
        let loaded = load_from_reader(&b"L1\nL2\nL3\nL4\n"[..], ReadMode::Paired);
        assert_eq!(loaded.wordlist.entries(), ["L2", "L4"]);
        assert_eq!(loaded.stats.lines_discarded, 2);
    }

    #[test]
    fn test_paired_drops_unpaired_tail() {
        let loaded = load_from_reader(&b"L1\nL2\nL3\nL4\nL5"[..], ReadMode::Paired);
        assert_eq!(loaded.wordlist.entries(), ["L2", "L4"]);
        assert_eq!(loaded.stats.lines_discarded, 3);
        assert_eq!(loaded.stats.lines_considered, 2);
    }

    #[test]
    fn test_non_ascii_and_blank_lines_excluded() {
        let data = "abc\npässwörd\n\n   \r\nxyz\r\n";
        let loaded = load_from_reader(data.as_bytes(), ReadMode::Sequential);

        assert_eq!(loaded.wordlist.entries(), ["abc", "xyz"]);
        assert_eq!(loaded.stats.non_ascii, 1);
        assert_eq!(loaded.stats.empty, 2);
        assert!(loaded.wordlist.iter().all(|w| !w.is_empty() && w.is_ascii()));
    }

    #[test]
    fn test_undecodable_lines_skipped() {
        let data = b"good\nb\xffad\nalso-good\n";
        let loaded = load_from_reader(&data[..], ReadMode::Sequential);

        assert_eq!(loaded.wordlist.entries(), ["good", "also-good"]);
        assert_eq!(loaded.stats.undecodable, 1);
        assert!(!loaded.stats.truncated);
    }

    #[test]
    fn test_bom_stripped() {
        let data = b"\xEF\xBB\xBFfirst\nsecond\n";
        let loaded = load_from_reader(&data[..], ReadMode::Sequential);
        assert_eq!(loaded.wordlist.entries(), ["first", "second"]);
    }

    #[test]
    fn test_read_error_keeps_partial() {
        let reader = FailingReader {
            data: io::Cursor::new(b"one\ntwo\n".to_vec()),
        };
        let loaded = load_from_reader(reader, ReadMode::Sequential);

        assert_eq!(loaded.wordlist.entries(), ["one", "two"]);
        assert!(loaded.stats.truncated);
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "letmein").unwrap();
        writeln!(file, "contraseña").unwrap();
        writeln!(file, "dragon").unwrap();

        let loaded = load_wordlist(file.path(), ReadMode::Sequential).unwrap();
        assert_eq!(loaded.wordlist.entries(), ["letmein", "dragon"]);
    }

    #[test]
    fn test_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let loaded = load_wordlist(file.path(), ReadMode::Sequential).unwrap();
        assert!(loaded.wordlist.is_empty());
        assert_eq!(loaded.stats, LoadStats::default());
    }

    #[test]
    fn test_missing_file() {
        let err = load_wordlist(Path::new("/definitely/not/here.txt"), ReadMode::Sequential)
            .unwrap_err();
        assert!(matches!(err, SplitError::InputNotFound { .. }));
    }

    #[test]
    fn test_directory_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_wordlist(dir.path(), ReadMode::Sequential).unwrap_err();
        assert!(matches!(err, SplitError::InputNotAFile(_)));
    }
}
