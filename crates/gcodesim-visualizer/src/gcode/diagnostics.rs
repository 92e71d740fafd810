//! Non-fatal parse and load diagnostics
//!
//! Every problem found while loading a program is recorded here instead of
//! aborting the run. Callers inspect the collection after loading to decide
//! how to present it.

use gcodesim_core::GcodeError;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Recoverable problem within a line; parsing continued
    Warning,
    /// The loader could not do its work (e.g. unreadable file)
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic record
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// 1-based line number, 0 when not tied to a line
    pub line_number: u32,
    /// The line text the problem was found in (empty for file errors)
    pub line: String,
    pub error: GcodeError,
}

impl Diagnostic {
    /// The offending word, for malformed-token warnings
    pub fn word(&self) -> Option<&str> {
        match &self.error {
            GcodeError::InvalidParameter { param, .. } => Some(param),
            _ => None,
        }
    }

    pub fn is_file_error(&self) -> bool {
        matches!(self.error, GcodeError::FileError { .. })
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line.is_empty() {
            write!(f, "{}: {}", self.severity, self.error)
        } else {
            write!(f, "{}: {} in line: {}", self.severity, self.error, self.line)
        }
    }
}

/// Ordered diagnostics stream for one program load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a malformed word
    pub fn warn_invalid_word(&mut self, line_number: u32, line: &str, word: &str, reason: String) {
        warn!(
            "Could not parse '{}' in line {}: {} ({})",
            word, line_number, line, reason
        );
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            line_number,
            line: line.to_string(),
            error: GcodeError::InvalidParameter {
                line_number,
                param: word.to_string(),
                reason,
            },
        });
    }

    /// Record a file open/read failure
    pub fn file_error(&mut self, path: &str, reason: String) {
        error!("Could not open file {}: {}", path, reason);
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            line_number: 0,
            line: String::new(),
            error: GcodeError::FileError {
                path: path.to_string(),
                reason,
            },
        });
    }

    /// True if the program file could not be opened or read
    pub fn has_file_error(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_file_error)
    }

    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_records_word_and_line() {
        let mut diags = Diagnostics::new();
        diags.warn_invalid_word(4, "G1 Xabc", "Xabc", "invalid float literal".to_string());

        assert_eq!(diags.len(), 1);
        assert_eq!(diags.warning_count(), 1);
        assert!(!diags.has_file_error());

        let d = diags.iter().next().unwrap();
        assert_eq!(d.word(), Some("Xabc"));
        assert_eq!(d.line, "G1 Xabc");
        assert_eq!(d.line_number, 4);
        assert_eq!(
            d.to_string(),
            "warning: Invalid parameter 'Xabc' at line 4: invalid float literal in line: G1 Xabc"
        );
    }

    #[test]
    fn test_file_error_flag() {
        let mut diags = Diagnostics::new();
        diags.file_error("cube.gcode", "File does not exist".to_string());

        assert!(diags.has_file_error());
        assert_eq!(diags.warning_count(), 0);
        let d = diags.iter().next().unwrap();
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.word(), None);
    }
}
