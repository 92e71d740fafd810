//! File I/O
//!
//! Line-oriented reading of motion program files. Large files are streamed
//! through a buffered reader rather than loaded into memory at once.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{anyhow, Result};
use tracing::trace;

/// Buffer size for reading large files (256 KB)
const READ_BUFFER_SIZE: usize = 256 * 1024;

/// File encoding as seen while reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileEncoding {
    /// Every line was valid UTF-8
    #[default]
    Utf8,
    /// At least one line held invalid UTF-8 and was decoded lossily
    Lossy,
}

impl FileEncoding {
    /// Detect encoding from a line's bytes
    pub fn detect(data: &[u8]) -> Self {
        if std::str::from_utf8(data).is_ok() {
            FileEncoding::Utf8
        } else {
            FileEncoding::Lossy
        }
    }
}

/// File read statistics
#[derive(Debug, Clone, Default)]
pub struct FileReadStats {
    /// Total bytes read
    pub bytes_read: u64,
    /// Total lines read
    pub lines_read: u64,
    /// Detected encoding
    pub encoding: FileEncoding,
    /// Lines whose invalid bytes were replaced with U+FFFD
    pub lossy_lines: u64,
    /// File size in bytes
    pub file_size: u64,
    /// Time taken to read (milliseconds)
    pub read_time_ms: u64,
}

impl FileReadStats {
    /// Get progress percentage
    pub fn progress_percent(&self) -> f64 {
        if self.file_size == 0 {
            0.0
        } else {
            (self.bytes_read as f64 / self.file_size as f64) * 100.0
        }
    }
}

/// G-code file reader with streaming support
pub struct GcodeFileReader {
    path: PathBuf,
    file_size: u64,
}

impl GcodeFileReader {
    /// Create a new G-code file reader
    ///
    /// # Errors
    /// Returns error if the path does not exist or is not a regular file
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(anyhow!("File does not exist: {}", path.display()));
        }

        if !path.is_file() {
            return Err(anyhow!("Path is not a file: {}", path.display()));
        }

        let metadata = fs::metadata(&path)?;
        let file_size = metadata.len();

        Ok(Self { path, file_size })
    }

    /// Get file size in bytes
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Get file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read file with line-by-line streaming callback
    ///
    /// The callback receives the 1-based line number and the raw line
    /// (without its terminator). Bytes that are not valid UTF-8 are replaced
    /// with U+FFFD instead of failing the read, so a stray Latin-1 comment
    /// does not cost the rest of the program.
    ///
    /// # Errors
    /// Returns error if the file cannot be opened or read, or the callback
    /// returns an error
    pub fn read_lines<F>(&self, mut callback: F) -> Result<FileReadStats>
    where
        F: FnMut(u32, &str) -> Result<()>,
    {
        let start_time = SystemTime::now();
        let file = File::open(&self.path)?;
        let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);

        let mut stats = FileReadStats {
            file_size: self.file_size,
            ..Default::default()
        };
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| anyhow!("Failed to read line {}: {}", stats.lines_read + 1, e))?;
            if n == 0 {
                break;
            }
            stats.bytes_read += n as u64;
            stats.lines_read += 1;

            let raw = strip_line_ending(&buf);
            if FileEncoding::detect(raw) == FileEncoding::Lossy {
                stats.encoding = FileEncoding::Lossy;
                stats.lossy_lines += 1;
                trace!("Line {}: invalid UTF-8 replaced", stats.lines_read);
            }

            let line = String::from_utf8_lossy(raw);
            callback(stats.lines_read as u32, &line[..])?;
        }

        stats.read_time_ms = start_time.elapsed().unwrap_or_default().as_millis() as u64;
        Ok(stats)
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
