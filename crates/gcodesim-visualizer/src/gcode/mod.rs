//! Motion program parsing
//!
//! This module provides:
//! - Command data model
//! - Line tokenizer / command parser
//! - Program loader (comment stripping, blank line skipping)
//! - Non-fatal diagnostics collection

pub mod command;
pub mod diagnostics;
pub mod loader;
pub mod parser;

pub use command::*;
pub use diagnostics::*;
pub use loader::*;
pub use parser::*;
