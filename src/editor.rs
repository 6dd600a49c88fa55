use crate::error::{ReleaseTagError, Result};
use std::path::Path;
use std::process::Command;

/// Interactive editor launched on the version descriptor
pub trait Editor {
    /// Open `path` and block until the editor exits.
    ///
    /// # Returns
    /// * `Ok(code)` - The editor ran; its exit code if it had one
    /// * `Err` - The editor could not be started
    fn launch(&self, path: &Path) -> Result<Option<i32>>;
}

/// Runs the operator's editor as a child process sharing the terminal
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalEditor {
    command: Option<String>,
}

impl ExternalEditor {
    /// Use `$EDITOR`, or `fallback` when the variable is unset or blank
    pub fn from_env(fallback: Option<&str>) -> Self {
        let command = std::env::var("EDITOR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| fallback.map(str::to_string));

        ExternalEditor { command }
    }

    /// Use a fixed editor command
    pub fn with_command(command: impl Into<String>) -> Self {
        ExternalEditor {
            command: Some(command.into()),
        }
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }
}

impl Editor for ExternalEditor {
    fn launch(&self, path: &Path) -> Result<Option<i32>> {
        let command = self.command.as_deref().ok_or_else(|| {
            ReleaseTagError::editor("EDITOR is not set and no editor is configured")
        })?;

        // Allow commands with arguments, e.g. "code --wait"
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| ReleaseTagError::editor("Editor command is empty"))?;

        log::debug!("Launching editor '{}' on {}", command, path.display());

        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .map_err(|e| {
                ReleaseTagError::editor(format!("Failed to start editor '{}': {}", command, e))
            })?;

        if !status.success() {
            log::warn!("Editor '{}' exited with {}", command, status);
        }

        Ok(status.code())
    }
}
