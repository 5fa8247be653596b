// SPDX-License-Identifier: MPL-2.0
//! Detached shell command launcher.
//!
//! Commands run as `<shell> -c <command line>` in a new session with all
//! standard streams bound to the null device. The viewer never waits on a
//! child; finished children are collected without blocking on the next spawn.

use crate::application::port::CommandLauncher;
use crate::config::DEFAULT_SHELL;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::ffi::{OsStr, OsString};
use std::process::{Child, Command, Stdio};

/// Launches command bar input through a shell.
#[derive(Debug)]
pub struct ShellLauncher {
    shell: String,
    children: RefCell<Vec<Child>>,
}

impl ShellLauncher {
    #[must_use]
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            children: RefCell::new(Vec::new()),
        }
    }

    fn command(&self, command_line: &OsStr) -> Command {
        let mut command = Command::new(&self.shell);
        command
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // SAFETY: setsid is async-signal-safe and touches no parent state.
            unsafe {
                command.pre_exec(|| {
                    if libc::setsid() == -1 {
                        return Err(std::io::Error::last_os_error());
                    }
                    Ok(())
                });
            }
        }

        command
    }

    /// Drops children that have exited. Never blocks.
    fn reap(&self) {
        self.children
            .borrow_mut()
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}

impl Default for ShellLauncher {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl CommandLauncher for ShellLauncher {
    fn spawn_detached(&self, command_line: &OsStr) -> Result<()> {
        self.reap();

        let child = self
            .command(command_line)
            .spawn()
            .map_err(|e| Error::Spawn(format!("{}: {e}", self.shell)))?;

        tracing::info!(
            pid = child.id(),
            command = %command_line.to_string_lossy(),
            "launched command"
        );
        self.children.borrow_mut().push(child);
        Ok(())
    }
}

/// Quotes `arg` for a POSIX shell unless it only contains characters that need
/// no quoting. Works on the raw bytes, so non-UTF-8 paths survive unchanged.
///
/// ```
/// use std::ffi::OsStr;
/// use tinyview::infrastructure::process::shell_quote;
///
/// assert_eq!(shell_quote(OsStr::new("/tmp/a.png")), "/tmp/a.png");
/// assert_eq!(shell_quote(OsStr::new("my photo.png")), "'my photo.png'");
/// ```
#[must_use]
pub fn shell_quote(arg: &OsStr) -> OsString {
    let bytes = arg.as_encoded_bytes();
    let is_safe = |b: &u8| b.is_ascii_alphanumeric() || b"/._-+,:@%=".contains(b);

    if !bytes.is_empty() && bytes.iter().all(is_safe) {
        return arg.to_os_string();
    }

    quote_bytes(arg)
}

#[cfg(unix)]
fn quote_bytes(arg: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let mut quoted = Vec::with_capacity(arg.len() + 2);
    quoted.push(b'\'');
    for &byte in arg.as_bytes() {
        if byte == b'\'' {
            quoted.extend_from_slice(br"'\''");
        } else {
            quoted.push(byte);
        }
    }
    quoted.push(b'\'');
    OsString::from_vec(quoted)
}

#[cfg(not(unix))]
fn quote_bytes(arg: &OsStr) -> OsString {
    format!("'{}'", arg.to_string_lossy().replace('\'', r"'\''")).into()
}
