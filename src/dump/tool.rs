//! Dump tool invocation
//!
//! Runs the external class-dump executable against a target binary and
//! captures its complete standard output. The tool is invoked exactly
//! once per run, synchronously; there is no retry or timeout.

use std::fmt;
use std::path::Path;
use std::process::Command;

/// Errors that can occur when invoking the dump tool
#[derive(Debug, Clone)]
pub enum ToolError {
    /// The executable could not be started
    Launch(String),
    /// The tool ran but exited with a failure status
    Failed(String),
    /// The tool's standard output is not valid UTF-8 text
    InvalidData(String),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::Launch(msg) => write!(f, "failed to launch dump tool: {}", msg),
            ToolError::Failed(msg) => write!(f, "dump tool failed: {}", msg),
            ToolError::InvalidData(msg) => {
                write!(f, "dump tool output is not valid text: {}", msg)
            }
        }
    }
}

impl std::error::Error for ToolError {}

/// Run the dumping executable with the target binary as its only argument
/// and return its complete standard output as text.
pub fn run_dump(tool: &Path, binary: &Path) -> Result<String, ToolError> {
    log::debug!("running {} on {}", tool.display(), binary.display());
    let output = Command::new(tool)
        .arg(binary)
        .output()
        .map_err(|err| ToolError::Launch(format!("{}: {}", tool.display(), err)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ToolError::Failed(format!(
            "{} ({})",
            output.status,
            stderr.trim_end()
        )));
    }

    String::from_utf8(output.stdout).map_err(|err| ToolError::InvalidData(err.to_string()))
}
