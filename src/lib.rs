//! # GCodeSim
//!
//! A G-code toolpath simulator. Loads a CNC motion program, resolves it into
//! rapid moves, straight lines, and circular arcs, and plays the result back
//! one segment at a time.
//!
//! ## Architecture
//!
//! GCodeSim is organized as a workspace with multiple crates:
//!
//! 1. **gcodesim-core** - Geometry primitives, error types, constants
//! 2. **gcodesim-visualizer** - Parser, program loader, motion interpreter, toolpath model
//! 3. **gcodesim-settings** - Configuration file handling
//! 4. **gcodesim** - Command line front end that integrates all crates

pub use gcodesim_core::{Bounds, CoordinateMode, Error, GcodeError, Point2D, Point3D, Result};

pub use gcodesim_visualizer::{
    cutting_polylines, interpret_file, interpret_str, load_program, load_program_str,
    CommandKind, Diagnostic, Diagnostics, GcodeCommand, GcodeParser, InterpretedProgram,
    LoadedProgram, MotionInterpreter, ParserOptions, ProgramLoader, ProgramSession, Segment,
    Severity, Toolpath, ToolpathStats,
};

pub use gcodesim_settings::{Config, ParserSettings, PlaybackSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Parser options derived from the loaded configuration
pub fn parser_options(config: &Config) -> ParserOptions {
    ParserOptions::new(config.parser.coordinate_mode, config.parser.comment_char)
}

/// Wrap an interpreted program for playback, honoring the playback settings
pub fn prepare_playback(program: &InterpretedProgram, playback: &PlaybackSettings) -> Toolpath {
    let mut toolpath = program.toolpath.clone();
    if playback.start_at_end {
        toolpath.seek_end();
    } else {
        toolpath.reset();
    }
    toolpath
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout for program reports
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
