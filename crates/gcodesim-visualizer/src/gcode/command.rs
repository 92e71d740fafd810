//! Parsed motion program commands

use gcodesim_core::Point3D;
use serde::{Deserialize, Serialize};

/// Primary code family of a program line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CommandKind {
    /// No recognized primary word (modifier-only line)
    #[default]
    None,
    /// Preparatory / motion code
    G,
    /// Miscellaneous (auxiliary) code
    M,
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "-"),
            Self::G => write!(f, "G"),
            Self::M => write!(f, "M"),
        }
    }
}

/// One parsed program line
///
/// Coordinate and offset fields default to 0 and are overwritten only by
/// words present on the line (or carried over in modal coordinate mode).
/// `number` is only meaningful when `kind` is not [`CommandKind::None`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GcodeCommand {
    /// Primary code family
    pub kind: CommandKind,
    /// Primary code number (e.g. 1 for `G1`)
    pub number: i32,
    /// X target
    pub x: f64,
    /// Y target
    pub y: f64,
    /// Z target
    pub z: f64,
    /// Arc center X offset, relative to the start of the move
    pub i: f64,
    /// Arc center Y offset, relative to the start of the move
    pub j: f64,
    /// Feed rate; stored, not interpreted
    pub feed: f64,
    /// 1-based source line number
    pub line_number: u32,
    /// Source text after comment stripping and trimming
    pub source: String,
}

impl GcodeCommand {
    /// Target point of the command
    pub fn target(&self) -> Point3D {
        Point3D::new(self.x, self.y, self.z)
    }

    /// True if this is the given G code
    pub fn is_g(&self, number: i32) -> bool {
        self.kind == CommandKind::G && self.number == number
    }

    /// True if this is the given M code
    pub fn is_m(&self, number: i32) -> bool {
        self.kind == CommandKind::M && self.number == number
    }

    /// True for `G0`..`G3`
    pub fn is_motion(&self) -> bool {
        self.kind == CommandKind::G && (0..=3).contains(&self.number)
    }

    /// Short code label such as `G1` or `M3`, or `-` for modifier lines
    pub fn code(&self) -> String {
        match self.kind {
            CommandKind::None => self.kind.to_string(),
            kind => format!("{}{}", kind, self.number),
        }
    }
}

impl std::fmt::Display for GcodeCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.line_number, self.code(), self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_modifier_line() {
        let cmd = GcodeCommand::default();
        assert_eq!(cmd.kind, CommandKind::None);
        assert_eq!(cmd.target(), Point3D::ORIGIN);
        assert!(!cmd.is_motion());
        assert_eq!(cmd.code(), "-");
    }

    #[test]
    fn test_code_predicates() {
        let cmd = GcodeCommand {
            kind: CommandKind::G,
            number: 2,
            ..Default::default()
        };
        assert!(cmd.is_g(2));
        assert!(!cmd.is_m(2));
        assert!(cmd.is_motion());
        assert_eq!(cmd.code(), "G2");

        let cmd = GcodeCommand {
            kind: CommandKind::G,
            number: 21,
            ..Default::default()
        };
        assert!(!cmd.is_motion());
    }

    #[test]
    fn test_display() {
        let cmd = GcodeCommand {
            kind: CommandKind::M,
            number: 3,
            line_number: 7,
            source: "M3 S1000".to_string(),
            ..Default::default()
        };
        assert_eq!(cmd.to_string(), "[7] M3: M3 S1000");
    }
}
