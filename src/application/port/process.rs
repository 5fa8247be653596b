// SPDX-License-Identifier: MPL-2.0
//! Detached command launching port definition.

use crate::error::Result;
use std::ffi::OsStr;

/// Starts an external command without tying it to the viewer.
///
/// Fire-and-forget: implementations must not capture output, must not wait for
/// the child, and must return as soon as the spawn itself succeeded or failed.
pub trait CommandLauncher {
    /// Runs `command_line` through a shell, detached from the viewer.
    ///
    /// Takes an `OsStr` so file names that are not valid UTF-8 reach the shell
    /// byte for byte.
    ///
    /// # Errors
    ///
    /// [`Error::Spawn`](crate::error::Error::Spawn) if the process could not be
    /// created. The command's own exit status is never observed.
    fn spawn_detached(&self, command_line: &OsStr) -> Result<()>;
}

impl<T: CommandLauncher + ?Sized> CommandLauncher for Box<T> {
    fn spawn_detached(&self, command_line: &OsStr) -> Result<()> {
        (**self).spawn_detached(command_line)
    }
}
