// SPDX-License-Identifier: MPL-2.0
//! Command bar sub-mode.
//!
//! A one-line editor opened from the viewer. Submitting runs
//! `<input> <active image path>` through a detached shell, except for the quit
//! command which ends the application. The buffer only exists while editing.

use crate::config::{COMMAND_BAR_PROMPT, DEFAULT_COMMAND_MAX_LENGTH, DEFAULT_QUIT_COMMAND};
use crate::error::{Error, Result};
use crate::infrastructure::process::shell_quote;
use std::ffi::OsString;
use std::path::Path;

/// Length-tracked text buffer with a hard character capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuffer {
    text: String,
    len: usize,
    capacity: usize,
}

impl CommandBuffer {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::new(),
            len: 0,
            capacity: capacity.max(1),
        }
    }

    /// Appends one character.
    ///
    /// # Errors
    ///
    /// [`Error::CommandTooLong`] when the buffer is full; the buffer is unchanged.
    pub fn push(&mut self, c: char) -> Result<()> {
        if self.len >= self.capacity {
            return Err(Error::CommandTooLong {
                capacity: self.capacity,
            });
        }
        self.text.push(c);
        self.len += 1;
        Ok(())
    }

    /// Removes the last character. No-op on an empty buffer.
    pub fn pop(&mut self) -> Option<char> {
        let c = self.text.pop()?;
        self.len -= 1;
        Some(c)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.len = 0;
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Editing events understood by the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarInput<'a> {
    Char(char),
    Text(&'a str),
    Erase,
    Submit,
    Cancel,
}

/// What the controller has to do after the bar handled an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarOutcome {
    /// Nothing changed (bar idle, non-printable input, or buffer full).
    Ignored,
    /// Buffer changed; redraw the bar.
    Edited,
    /// Bar closed without running anything.
    Closed,
    /// Bar closed; run this command line detached.
    Dispatch(OsString),
    /// Quit command submitted.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BarState {
    Idle,
    Editing(CommandBuffer),
}

/// The command bar state machine (`Idle` / `Editing`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBar {
    state: BarState,
    capacity: usize,
    quit_command: String,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_MAX_LENGTH, DEFAULT_QUIT_COMMAND)
    }
}

impl CommandBar {
    #[must_use]
    pub fn new(capacity: usize, quit_command: impl Into<String>) -> Self {
        Self {
            state: BarState::Idle,
            capacity,
            quit_command: quit_command.into(),
        }
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.state, BarState::Editing(_))
    }

    /// Current buffer, `None` while idle.
    #[must_use]
    pub fn buffer(&self) -> Option<&CommandBuffer> {
        match &self.state {
            BarState::Editing(buffer) => Some(buffer),
            BarState::Idle => None,
        }
    }

    /// Text shown in the bar: the prompt followed by the buffer.
    #[must_use]
    pub fn display_text(&self) -> Option<String> {
        self.buffer()
            .map(|buffer| format!("{COMMAND_BAR_PROMPT}{}", buffer.as_str()))
    }

    /// `Idle -> Editing` with an empty buffer.
    pub fn open(&mut self) {
        self.state = BarState::Editing(CommandBuffer::with_capacity(self.capacity));
    }

    /// Handles one editing event. `active_path` is the file commands apply to.
    pub fn handle(&mut self, input: BarInput<'_>, active_path: &Path) -> BarOutcome {
        let BarState::Editing(buffer) = &mut self.state else {
            return BarOutcome::Ignored;
        };

        match input {
            BarInput::Char(c) => push_printable(buffer, c),
            BarInput::Text(text) => {
                let mut edited = false;
                for c in text.chars() {
                    if push_printable(buffer, c) == BarOutcome::Edited {
                        edited = true;
                    }
                }
                if edited {
                    BarOutcome::Edited
                } else {
                    BarOutcome::Ignored
                }
            }
            BarInput::Erase => {
                if buffer.pop().is_some() {
                    BarOutcome::Edited
                } else {
                    BarOutcome::Ignored
                }
            }
            BarInput::Cancel => {
                tracing::debug!("command bar cancelled");
                self.state = BarState::Idle;
                BarOutcome::Closed
            }
            BarInput::Submit => {
                let outcome = if buffer.as_str() == self.quit_command {
                    BarOutcome::Quit
                } else if buffer.as_str().trim().is_empty() {
                    BarOutcome::Closed
                } else {
                    BarOutcome::Dispatch(command_line(
                        buffer.as_str(),
                        active_path,
                    ))
                };
                self.state = BarState::Idle;
                outcome
            }
        }
    }
}

fn push_printable(buffer: &mut CommandBuffer, c: char) -> BarOutcome {
    if c.is_control() {
        return BarOutcome::Ignored;
    }
    match buffer.push(c) {
        Ok(()) => BarOutcome::Edited,
        Err(err) => {
            tracing::debug!(%err, "dropping input");
            BarOutcome::Ignored
        }
    }
}

/// Joins the typed command and the active path with a single space.
///
/// The path is kept as raw bytes; it is never converted through UTF-8.
#[must_use]
pub fn command_line(command: &str, active_path: &Path) -> OsString {
    let mut line = OsString::from(command);
    line.push(" ");
    line.push(shell_quote(active_path.as_os_str()));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing_bar() -> CommandBar {
        let mut bar = CommandBar::default();
        bar.open();
        bar
    }

    fn type_text(bar: &mut CommandBar, text: &str) {
        for c in text.chars() {
            bar.handle(BarInput::Char(c), Path::new("/tmp/a.png"));
        }
    }

    #[test]
    fn open_starts_with_empty_buffer() {
        let bar = editing_bar();
        assert!(bar.is_editing());
        assert_eq!(bar.buffer().map(CommandBuffer::len), Some(0));
        assert_eq!(bar.display_text().as_deref(), Some(":"));
    }

    #[test]
    fn idle_bar_ignores_input() {
        let mut bar = CommandBar::default();
        assert_eq!(
            bar.handle(BarInput::Char('x'), Path::new("a.png")),
            BarOutcome::Ignored
        );
        assert!(bar.display_text().is_none());
    }

    #[test]
    fn typing_and_erasing_edit_the_buffer() {
        let mut bar = editing_bar();
        type_text(&mut bar, "opn");
        assert_eq!(
            bar.handle(BarInput::Erase, Path::new("a.png")),
            BarOutcome::Edited
        );
        type_text(&mut bar, "en");
        assert_eq!(bar.display_text().as_deref(), Some(":open"));
    }

    #[test]
    fn erase_on_empty_buffer_is_a_no_op() {
        let mut bar = editing_bar();
        assert_eq!(
            bar.handle(BarInput::Erase, Path::new("a.png")),
            BarOutcome::Ignored
        );
        assert!(bar.buffer().is_some_and(CommandBuffer::is_empty));
    }

    #[test]
    fn buffer_never_exceeds_capacity() {
        let mut bar = CommandBar::new(8, "q");
        bar.open();
        type_text(&mut bar, &"x".repeat(1000));
        bar.handle(BarInput::Text(&"y".repeat(1000)), Path::new("a.png"));

        let buffer = bar.buffer().expect("editing");
        assert_eq!(buffer.len(), 8);
        assert_eq!(buffer.as_str(), "xxxxxxxx");
    }

    #[test]
    fn default_capacity_is_bounded() {
        let mut bar = editing_bar();
        type_text(&mut bar, &"z".repeat(DEFAULT_COMMAND_MAX_LENGTH + 50));
        assert_eq!(
            bar.buffer().map(CommandBuffer::len),
            Some(DEFAULT_COMMAND_MAX_LENGTH)
        );
    }

    #[test]
    fn control_characters_are_not_inserted() {
        let mut bar = editing_bar();
        assert_eq!(
            bar.handle(BarInput::Char('\u{7}'), Path::new("a.png")),
            BarOutcome::Ignored
        );
        assert!(bar.buffer().is_some_and(CommandBuffer::is_empty));
    }

    #[test]
    fn submit_dispatches_command_with_active_path() {
        let mut bar = editing_bar();
        type_text(&mut bar, "open");

        let outcome = bar.handle(BarInput::Submit, Path::new("/tmp/a.png"));

        assert_eq!(outcome, BarOutcome::Dispatch("open /tmp/a.png".into()));
        assert!(!bar.is_editing());
        assert!(bar.buffer().is_none());
    }

    #[test]
    fn submit_quit_command_requests_quit() {
        let mut bar = editing_bar();
        type_text(&mut bar, "q");
        assert_eq!(
            bar.handle(BarInput::Submit, Path::new("/tmp/a.png")),
            BarOutcome::Quit
        );
        assert!(!bar.is_editing());
    }

    #[test]
    fn quit_command_must_match_exactly() {
        let mut bar = editing_bar();
        type_text(&mut bar, "qq");
        assert_eq!(
            bar.handle(BarInput::Submit, Path::new("/tmp/a.png")),
            BarOutcome::Dispatch("qq /tmp/a.png".into())
        );
    }

    #[test]
    fn blank_submit_closes_without_dispatch() {
        let mut bar = editing_bar();
        type_text(&mut bar, "   ");
        assert_eq!(
            bar.handle(BarInput::Submit, Path::new("/tmp/a.png")),
            BarOutcome::Closed
        );
    }

    #[test]
    fn cancel_discards_buffer() {
        let mut bar = editing_bar();
        type_text(&mut bar, "rm");
        assert_eq!(
            bar.handle(BarInput::Cancel, Path::new("/tmp/a.png")),
            BarOutcome::Closed
        );
        bar.open();
        assert!(bar.buffer().is_some_and(CommandBuffer::is_empty));
    }

    #[test]
    fn paths_with_spaces_are_quoted() {
        assert_eq!(
            command_line("gimp", Path::new("/home/me/my photo.png")),
            "gimp '/home/me/my photo.png'"
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_reaches_command_unchanged() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let path = Path::new(OsStr::from_bytes(b"/tmp/caf\xe9.png"));
        let mut bar = editing_bar();
        type_text(&mut bar, "open");

        let BarOutcome::Dispatch(line) = bar.handle(BarInput::Submit, path) else {
            panic!("expected a dispatch");
        };
        assert_eq!(line.into_vec(), b"open '/tmp/caf\xe9.png'".to_vec());
    }

    #[test]
    fn buffer_push_reports_full() {
        let mut buffer = CommandBuffer::with_capacity(1);
        assert!(buffer.push('a').is_ok());
        assert!(matches!(
            buffer.push('b'),
            Err(Error::CommandTooLong { capacity: 1 })
        ));
        assert_eq!(buffer.pop(), Some('a'));
        assert_eq!(buffer.pop(), None);
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn multibyte_characters_count_once() {
        let mut buffer = CommandBuffer::with_capacity(2);
        assert!(buffer.push('é').is_ok());
        assert!(buffer.push('✓').is_ok());
        assert!(buffer.push('x').is_err());
        assert_eq!(buffer.len(), 2);
    }
}
