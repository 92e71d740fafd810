//! Background program loading
//!
//! Loading and interpretation run as one sequential unit on tokio's blocking
//! pool. The consumer waits (or polls) for the task once, then owns the
//! finished toolpath; from then on its segments are immutable and can be
//! shared with any number of readers.

use std::path::{Path, PathBuf};

use gcodesim_core::{Error, Result};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::gcode::{Diagnostics, LoadedProgram, ParserOptions, ProgramLoader};
use crate::visualizer::{MotionInterpreter, Toolpath};

/// A loaded and interpreted program, ready for playback
#[derive(Debug, Clone, Default)]
pub struct InterpretedProgram {
    pub toolpath: Toolpath,
    pub diagnostics: Diagnostics,
    /// Number of commands the loader produced
    pub command_count: usize,
}

impl InterpretedProgram {
    /// Interpret a loaded program; the commands are consumed here
    pub fn from_loaded(program: LoadedProgram, interpreter: &MotionInterpreter) -> Self {
        let segments = interpreter.interpret(&program.commands);
        Self {
            toolpath: Toolpath::new(segments),
            diagnostics: program.diagnostics,
            command_count: program.commands.len(),
        }
    }

    pub fn has_file_error(&self) -> bool {
        self.diagnostics.has_file_error()
    }
}

/// Load and interpret a program file on the current thread
pub fn interpret_file(path: impl AsRef<Path>, options: &ParserOptions) -> InterpretedProgram {
    let loaded = ProgramLoader::new(*options).load_file(path);
    InterpretedProgram::from_loaded(loaded, &MotionInterpreter::new())
}

/// Load and interpret program text on the current thread
pub fn interpret_str(text: &str, options: &ParserOptions) -> InterpretedProgram {
    let loaded = ProgramLoader::new(*options).load_str(text);
    InterpretedProgram::from_loaded(loaded, &MotionInterpreter::new())
}

/// Handle to a program being loaded in the background
#[derive(Debug)]
pub struct ProgramSession {
    path: PathBuf,
    handle: JoinHandle<InterpretedProgram>,
}

impl ProgramSession {
    /// Start loading `path` on the blocking pool
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(path: impl Into<PathBuf>, options: ParserOptions) -> Self {
        let path = path.into();
        let task_path = path.clone();
        debug!("Spawning background load of {}", path.display());

        let handle = tokio::task::spawn_blocking(move || interpret_file(&task_path, &options));
        Self { path, handle }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-blocking completion check for polling consumers
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task and take ownership of the result
    ///
    /// Fails only if the background task itself panicked.
    pub async fn wait(self) -> Result<InterpretedProgram> {
        let program = self.handle.await.map_err(|e| {
            Error::other(format!(
                "Background load of {} failed: {}",
                self.path.display(),
                e
            ))
        })?;

        info!(
            "Loaded {}: {} commands, {} segments, {} diagnostics",
            self.path.display(),
            program.command_count,
            program.toolpath.len(),
            program.diagnostics.len()
        );
        Ok(program)
    }
}
