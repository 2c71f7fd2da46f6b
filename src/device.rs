//! Interface to the external backlight control utility.
//!
//! The utility is treated as an opaque capability: a no-argument
//! invocation prints the current zone colors one per line, and flag
//! arguments (`-l`, `-c`, `-r`, each with a 6-hex-digit value) set zone
//! colors. The HTTP layer depends on the [`LedController`] trait rather
//! than on a concrete process so tests can substitute a fake and never
//! spawn a real process.

use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

/// Capability for querying and setting the keyboard backlight.
pub trait LedController: Send + Sync {
    /// Invokes the utility with no arguments and returns its captured
    /// stdout: up to 4 newline-separated zone colors in fixed order.
    fn query(&self) -> Result<String>;

    /// Invokes the utility with the given argument list.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exits
    /// non-zero.
    fn apply(&self, args: &[String]) -> Result<()>;
}

/// [`LedController`] backed by a real external program, located via the
/// process search path.
pub struct SystemLedController {
    command: String,
}

impl SystemLedController {
    /// Creates a controller that invokes `command`.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Returns the configured program name.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl LedController for SystemLedController {
    fn query(&self) -> Result<String> {
        debug!("querying backlight state via '{}'", self.command);

        let output = Command::new(&self.command)
            .output()
            .with_context(|| format!("failed to execute '{}'", self.command))?;

        if !output.status.success() {
            anyhow::bail!("'{}' exited with {}", self.command, output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn apply(&self, args: &[String]) -> Result<()> {
        debug!("running '{}' with args {:?}", self.command, args);

        // Arguments go through as an argv list; no shell is involved.
        let output = Command::new(&self.command)
            .args(args)
            .output()
            .with_context(|| format!("failed to execute '{}'", self.command))?;

        if !output.status.success() {
            anyhow::bail!("'{}' exited with {}", self.command, output.status);
        }

        Ok(())
    }
}
