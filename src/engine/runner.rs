//! External command execution

use crate::error::{LppError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured result of one external command.
///
/// `status` is informational only: lslpp exits non-zero on partial bundle
/// matches while still printing usable listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

pub trait CommandRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput>;
}

/// Runs commands on the local system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Resolve a program, honoring an explicit override before searching PATH.
pub fn resolve_program(name: &str, override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }

    which::which(name).map_err(|e| {
        LppError::CommandNotFound(format!("{} ({}). Use --lslpp to point at the binary", name, e))
    })
}

/// Render a command line for display.
pub fn display_command(program: &Path, args: &[String]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            line.push_str(&format!("'{}'", arg));
        } else {
            line.push_str(arg);
        }
    }
    line
}
