//! Program loader
//!
//! Reads a motion program line by line, strips comments and whitespace,
//! skips blank lines, and parses the rest into an ordered command list.
//! Problems are collected as diagnostics; loading never aborts the caller.

use std::path::Path;

use tracing::{debug, warn};

use super::{Diagnostics, GcodeCommand, GcodeParser, ParserOptions};
use crate::utils::GcodeFileReader;

/// Result of loading a program
#[derive(Debug, Clone, Default)]
pub struct LoadedProgram {
    /// Commands in file order
    pub commands: Vec<GcodeCommand>,
    /// Warnings and errors raised while loading
    pub diagnostics: Diagnostics,
}

impl LoadedProgram {
    /// True if the program file could not be opened or read
    pub fn has_file_error(&self) -> bool {
        self.diagnostics.has_file_error()
    }
}

/// Strip the comment and surrounding whitespace from a raw line
///
/// Returns `None` when nothing is left.
pub fn clean_line(raw: &str, comment_char: char) -> Option<&str> {
    let code = match raw.find(comment_char) {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    let code = code.trim();
    (!code.is_empty()).then_some(code)
}

/// Builds command sequences from program text
#[derive(Debug, Clone, Default)]
pub struct ProgramLoader {
    options: ParserOptions,
}

impl ProgramLoader {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Load a program file
    ///
    /// If the file cannot be opened or read, the result holds no commands and
    /// a file error diagnostic.
    pub fn load_file(&self, path: impl AsRef<Path>) -> LoadedProgram {
        let path = path.as_ref();
        let mut parser = GcodeParser::new(self.options);
        let mut program = LoadedProgram::default();

        let outcome = GcodeFileReader::new(path).and_then(|reader| {
            reader.read_lines(|line_number, raw| {
                if let Some(line) = clean_line(raw, self.options.comment_char) {
                    let cmd = parser.parse_line(line_number, line, &mut program.diagnostics);
                    program.commands.push(cmd);
                }
                Ok(())
            })
        });

        match outcome {
            Ok(stats) => {
                if stats.lossy_lines > 0 {
                    warn!(
                        "{}: {} lines held invalid UTF-8 and were decoded lossily",
                        path.display(),
                        stats.lossy_lines
                    );
                }
                debug!(
                    "Loaded {} commands from {} ({} lines, {} bytes, {} ms)",
                    program.commands.len(),
                    path.display(),
                    stats.lines_read,
                    stats.bytes_read,
                    stats.read_time_ms
                );
            }
            Err(e) => {
                program.commands.clear();
                program
                    .diagnostics
                    .file_error(&path.display().to_string(), e.to_string());
            }
        }

        program
    }

    /// Load a program held in memory, with the same rules as [`load_file`](Self::load_file)
    pub fn load_str(&self, text: &str) -> LoadedProgram {
        let mut parser = GcodeParser::new(self.options);
        let mut program = LoadedProgram::default();

        for (index, raw) in text.lines().enumerate() {
            if let Some(line) = clean_line(raw, self.options.comment_char) {
                let cmd = parser.parse_line(index as u32 + 1, line, &mut program.diagnostics);
                program.commands.push(cmd);
            }
        }

        debug!("Loaded {} commands from string", program.commands.len());
        program
    }
}

/// Load a program file with the given options
pub fn load_program(path: impl AsRef<Path>, options: &ParserOptions) -> LoadedProgram {
    ProgramLoader::new(*options).load_file(path)
}

/// Load program text with the given options
pub fn load_program_str(text: &str, options: &ParserOptions) -> LoadedProgram {
    ProgramLoader::new(*options).load_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line() {
        assert_eq!(clean_line("G1 X1 ; comment", ';'), Some("G1 X1"));
        assert_eq!(clean_line("  \tG0  ", ';'), Some("G0"));
        assert_eq!(clean_line("; only a comment", ';'), None);
        assert_eq!(clean_line("   ", ';'), None);
        assert_eq!(clean_line("", ';'), None);
        assert_eq!(clean_line("G1 X1 % note", '%'), Some("G1 X1"));
    }

    #[test]
    fn test_comment_parses_like_plain_line() {
        let options = ParserOptions::default();
        let a = load_program_str("G1 X1 ; comment", &options);
        let b = load_program_str("G1 X1", &options);
        assert_eq!(a.commands.len(), 1);
        assert_eq!(a.commands[0].target(), b.commands[0].target());
        assert_eq!(a.commands[0].source, b.commands[0].source);
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        let text = "; header\n\n   \nG0 X0\n\t; indented comment\nG1 X5\n";
        let program = load_program_str(text, &ParserOptions::default());
        assert_eq!(program.commands.len(), 2);
        assert_eq!(program.commands[0].line_number, 4);
        assert_eq!(program.commands[1].line_number, 6);
        assert!(program.diagnostics.is_empty());
    }

    #[test]
    fn test_warnings_do_not_abort() {
        let text = "G1 Xabc\nG1 X2";
        let program = load_program_str(text, &ParserOptions::default());
        assert_eq!(program.commands.len(), 2);
        assert_eq!(program.diagnostics.warning_count(), 1);
        assert!(!program.has_file_error());
    }

    #[test]
    fn test_missing_file_reports_error() {
        let program = load_program("/no/such/program.gcode", &ParserOptions::default());
        assert!(program.commands.is_empty());
        assert!(program.has_file_error());
    }
}
