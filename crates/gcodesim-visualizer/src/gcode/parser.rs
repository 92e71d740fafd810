//! Tokenizer and command parser
//!
//! Turns one comment-stripped, trimmed program line into a [`GcodeCommand`].
//! Words are whitespace separated; each word is a letter designator
//! (case-insensitive) followed by a numeric payload.
//!
//! - `G` / `M` set the command kind and number (integer payload)
//! - `X`, `Y`, `Z`, `I`, `J`, `F` set the matching field (real payload)
//! - any other letter is ignored
//!
//! A malformed payload leaves the field at its default and records a warning;
//! the rest of the line is still parsed.

use gcodesim_core::constants::COMMENT_CHAR;
use gcodesim_core::{CoordinateMode, Point3D};
use tracing::trace;

use super::{CommandKind, Diagnostics, GcodeCommand};

/// Parser behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether omitted X/Y/Z reset to 0 or carry over from the previous line
    pub coordinate_mode: CoordinateMode,
    /// Character that starts a line comment
    pub comment_char: char,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            coordinate_mode: CoordinateMode::Reset,
            comment_char: COMMENT_CHAR,
        }
    }
}

impl ParserOptions {
    pub fn new(coordinate_mode: CoordinateMode, comment_char: char) -> Self {
        Self {
            coordinate_mode,
            comment_char,
        }
    }

    /// Default options with modal coordinates
    pub fn modal() -> Self {
        Self {
            coordinate_mode: CoordinateMode::Modal,
            ..Self::default()
        }
    }
}

/// Line parser
///
/// Holds only what modal coordinate mode needs to carry between lines.
/// In reset mode every call is independent of the previous ones.
#[derive(Debug, Clone)]
pub struct GcodeParser {
    options: ParserOptions,
    last_target: Point3D,
}

impl GcodeParser {
    /// Create a new parser
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            last_target: Point3D::ORIGIN,
        }
    }

    /// Parse one cleaned line into a command
    ///
    /// Always yields a command; malformed words are reported to `diagnostics`.
    pub fn parse_line(
        &mut self,
        line_number: u32,
        line: &str,
        diagnostics: &mut Diagnostics,
    ) -> GcodeCommand {
        let mut cmd = GcodeCommand {
            line_number,
            source: line.to_string(),
            ..Default::default()
        };

        if self.options.coordinate_mode == CoordinateMode::Modal {
            cmd.x = self.last_target.x;
            cmd.y = self.last_target.y;
            cmd.z = self.last_target.z;
        }

        for word in line.split_whitespace() {
            let mut chars = word.chars();
            let Some(letter) = chars.next() else {
                continue;
            };
            let payload = chars.as_str();

            let result = match letter.to_ascii_uppercase() {
                'G' => parse_code(payload).map(|n| {
                    cmd.kind = CommandKind::G;
                    cmd.number = n;
                }),
                'M' => parse_code(payload).map(|n| {
                    cmd.kind = CommandKind::M;
                    cmd.number = n;
                }),
                'X' => parse_real(payload).map(|v| cmd.x = v),
                'Y' => parse_real(payload).map(|v| cmd.y = v),
                'Z' => parse_real(payload).map(|v| cmd.z = v),
                'I' => parse_real(payload).map(|v| cmd.i = v),
                'J' => parse_real(payload).map(|v| cmd.j = v),
                'F' => parse_real(payload).map(|v| cmd.feed = v),
                _ => {
                    trace!("Line {}: ignoring word '{}'", line_number, word);
                    Ok(())
                }
            };

            if let Err(reason) = result {
                diagnostics.warn_invalid_word(line_number, line, word, reason);
            }
        }

        self.last_target = cmd.target();
        cmd
    }
}

impl Default for GcodeParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

fn parse_code(payload: &str) -> Result<i32, String> {
    payload.parse::<i32>().map_err(|e| e.to_string())
}

fn parse_real(payload: &str) -> Result<f64, String> {
    let value = payload.parse::<f64>().map_err(|e| e.to_string())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err("value is not finite".to_string())
    }
}
