//! Headless single-line editor: key events in, buffer/history changes out.
//!
//! `LineEditor` owns the text surface and the history, borrows nothing from
//! the host, and runs exactly one action per key event. Rendering, focus and
//! the interpreter receiving submitted lines stay with the host.

mod buffer;
mod clipboard;
mod history;
mod keymap;
mod surface;

pub use buffer::TextBuffer;
pub use clipboard::{
    clipboard_for, ClipboardBridge, ClipboardContent, ClipboardHold, MemoryClipboard,
    SystemClipboard,
};
pub use history::{HistoryStore, HistoryView, DEFAULT_MAX_HISTORY};
pub use keymap::{codes, EditAction, EditMode, KeyCode, KeyEvent, Keymap};
pub use surface::TextSurface;

use crate::error::HistoryError;
use history::single_line;
use std::path::{Path, PathBuf};

/// File name of the default history file under the home directory.
pub const DEFAULT_HISTORY_FILE_NAME: &str = ".emline_history";

/// `$HOME/.emline_history`, or `./.emline_history` when there is no home.
pub fn default_history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_HISTORY_FILE_NAME)
}

/// Construction-time editor settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    pub history_file: PathBuf,
    /// Entries kept when history is saved.
    pub max_history: usize,
    pub edit_mode: EditMode,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_file: default_history_path(),
            max_history: DEFAULT_MAX_HISTORY,
            edit_mode: EditMode::Emacs,
        }
    }
}

/// Result of feeding one key event to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Enter was pressed; carries the submitted line.
    Submitted(String),
    /// A bound action ran (possibly changing nothing).
    Handled,
    /// A printable character was inserted at the cursor.
    Inserted,
    /// Not bound and not insertable; the host may handle it.
    Ignored,
}

/// Receiver for Tab when the editor sits in a multi-field container.
pub trait FocusHost {
    fn advance_focus(&mut self);
}

impl<F: FnMut()> FocusHost for F {
    fn advance_focus(&mut self) {
        self()
    }
}

/// Emacs-style line editor with persistent history.
pub struct LineEditor<S: TextSurface = TextBuffer> {
    surface: S,
    history: HistoryStore,
    keymap: Keymap,
    clipboard: Box<dyn ClipboardBridge>,
    focus_host: Option<Box<dyn FocusHost>>,
    submit_handler: Option<Box<dyn FnMut(&str)>>,
    options: EditorOptions,
    /// Cursor remembered across focus loss.
    focus_mark: usize,
}

impl LineEditor<TextBuffer> {
    /// Editor over an empty [`TextBuffer`], with history loaded from
    /// `options.history_file`.
    pub fn new(options: EditorOptions, clipboard: Box<dyn ClipboardBridge>) -> Self {
        Self::with_surface(TextBuffer::new(), options, clipboard)
    }
}

impl<S: TextSurface> LineEditor<S> {
    /// Editor driving a host-provided text surface.
    pub fn with_surface(
        surface: S,
        options: EditorOptions,
        clipboard: Box<dyn ClipboardBridge>,
    ) -> Self {
        let mut history = HistoryStore::new(options.max_history);
        history.load(&options.history_file);
        Self {
            surface,
            history,
            keymap: Keymap::for_mode(&options.edit_mode),
            clipboard,
            focus_host: None,
            submit_handler: None,
            options,
            focus_mark: 0,
        }
    }

    /// Register the container that Tab should advance.
    pub fn set_focus_host(&mut self, host: impl FocusHost + 'static) {
        self.focus_host = Some(Box::new(host));
    }

    /// Register a callback invoked with every submitted line.
    pub fn set_submit_handler(&mut self, handler: impl FnMut(&str) + 'static) {
        self.submit_handler = Some(Box::new(handler));
    }

    /// Process one key event.
    ///
    /// Bound keys run their action. Unbound plain printable characters are
    /// inserted at the cursor; everything else is passed back untouched.
    pub fn handle_key(&mut self, event: KeyEvent) -> EditOutcome {
        if let Some(action) = self.keymap.lookup(&event) {
            return self.apply(action);
        }
        match event.printable {
            Some(ch) if !event.control && !ch.is_control() => {
                let mut utf8 = [0u8; 4];
                self.surface.insert_text(ch.encode_utf8(&mut utf8));
                EditOutcome::Inserted
            }
            _ => {
                if event.control {
                    tracing::trace!(code = ?event.code, "unbound control key");
                }
                EditOutcome::Ignored
            }
        }
    }

    /// Run one editing action directly.
    pub fn apply(&mut self, action: EditAction) -> EditOutcome {
        let cursor = self.surface.cursor_index();
        let len = self.surface.text_len();
        match action {
            EditAction::Submit => return EditOutcome::Submitted(self.submit()),
            EditAction::HistoryPrevious => {
                if let Some(entry) = self.history.navigate_up() {
                    self.surface.set_text(entry);
                    self.move_to_end();
                }
            }
            EditAction::HistoryNext => {
                match self.history.navigate_down() {
                    HistoryView::Entry(entry) => self.surface.set_text(entry),
                    HistoryView::Fresh => self.surface.set_text(""),
                }
                self.move_to_end();
            }
            EditAction::LineStart => self.surface.move_cursor(0),
            EditAction::LineEnd => self.move_to_end(),
            EditAction::BackwardChar => self.surface.move_cursor(cursor.saturating_sub(1)),
            EditAction::ForwardChar => self.surface.move_cursor(cursor.saturating_add(1)),
            EditAction::BackwardDeleteChar => {
                if cursor > 0 {
                    self.surface.delete_range(cursor - 1, cursor);
                }
            }
            EditAction::DeleteChar => {
                if cursor < len {
                    self.surface.delete_range(cursor, cursor + 1);
                }
            }
            EditAction::KillLine => {
                self.surface.delete_range(cursor, len);
                self.surface.move_cursor(cursor);
            }
            EditAction::Copy => {
                self.clipboard.copy(self.surface.current_text());
            }
            EditAction::Cut => {
                if self.clipboard.copy(self.surface.current_text()) {
                    self.surface.set_text("");
                }
            }
            EditAction::Paste => {
                if let Some(text) = self.clipboard.paste() {
                    self.surface.set_text(&single_line(&text));
                    self.move_to_end();
                }
            }
            EditAction::FocusNext => {
                if let Some(host) = self.focus_host.as_mut() {
                    host.advance_focus();
                }
            }
        }
        EditOutcome::Handled
    }

    /// Submit the current line: record it in history (unless blank), notify
    /// the submit handler, and reset the buffer and history cursor.
    ///
    /// Line breaks a host surface may hold are collapsed first, so the
    /// submitted line always matches what history records.
    pub fn submit(&mut self) -> String {
        let line = single_line(self.surface.current_text());
        self.history.append(&line);
        self.history.reset();
        self.surface.set_text("");
        self.surface.move_cursor(0);
        if let Some(handler) = self.submit_handler.as_mut() {
            handler(&line);
        }
        line
    }

    /// Submit a line that arrived without key events (piped input).
    pub fn submit_line(&mut self, line: &str) -> String {
        self.surface.set_text(line);
        self.submit()
    }

    /// Remember the cursor before the host widget loses focus.
    pub fn focus_lost(&mut self) {
        let trimmed_len = self.surface.current_text().trim().chars().count();
        self.focus_mark = self.surface.cursor_index().min(trimmed_len);
    }

    /// Restore the cursor remembered by [`Self::focus_lost`].
    pub fn focus_gained(&mut self) {
        self.surface.move_cursor(self.focus_mark);
    }

    /// Save history to the configured history file.
    pub fn save_history(&self) -> Result<(), HistoryError> {
        self.history.save(&self.options.history_file)
    }

    /// Save history to an explicit path.
    pub fn save_history_to(&self, path: &Path) -> Result<(), HistoryError> {
        self.history.save(path)
    }

    pub fn content(&self) -> &str {
        self.surface.current_text()
    }

    pub fn cursor(&self) -> usize {
        self.surface.cursor_index()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn keymap_mut(&mut self) -> &mut Keymap {
        &mut self.keymap
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    fn move_to_end(&mut self) {
        let end = self.surface.text_len();
        self.surface.move_cursor(end);
    }
}
