//! # GCodeSim Visualizer
//!
//! Motion program parsing, interpretation, and playback for GCodeSim.
//! Turns program text into an ordered sequence of resolved segments
//! (rapid moves, lines, arcs) and exposes it through a toolpath model
//! with a playback cursor for a rendering front end to consume.

pub mod gcode;
pub mod session;
pub mod utils;
pub mod visualizer;

pub use visualizer::{
    cutting_polylines, resolution_for_tolerance, tessellate, MotionInterpreter, Polyline,
    Segment, Toolpath, ToolpathStats,
};

pub use gcode::{
    clean_line, load_program, load_program_str, CommandKind, Diagnostic, Diagnostics,
    GcodeCommand, GcodeParser, LoadedProgram, ParserOptions, ProgramLoader, Severity,
};

pub use session::{interpret_file, interpret_str, InterpretedProgram, ProgramSession};

pub use utils::{FileEncoding, FileReadStats, GcodeFileReader};
