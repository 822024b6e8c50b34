//! Bounded, persisted log of submitted lines with an up/down navigation
//! cursor.

use crate::error::HistoryError;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Default number of entries written on save.
pub const DEFAULT_MAX_HISTORY: usize = 1000;

/// Name written into the history file header.
const HISTORY_HEADER_NAME: &str = "emline";

/// What the buffer should show after moving down through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryView<'a> {
    /// An older entry was recalled.
    Entry(&'a str),
    /// Past the newest entry: a fresh, empty line.
    Fresh,
}

/// Submitted lines, oldest first, plus the navigation cursor.
///
/// `cursor == entries.len()` means the user is on a fresh line rather than
/// viewing a stored entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<String>,
    cursor: usize,
    max_persisted: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl HistoryStore {
    /// Empty history that keeps at most `max_persisted` entries on save.
    pub fn new(max_persisted: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_persisted,
        }
    }

    /// Replace entries with the contents of the history file at `path`.
    ///
    /// A missing or unreadable file yields an empty history. Bytes that are
    /// not valid UTF-8 are replaced rather than dropping the whole file.
    /// Returns the number of entries loaded.
    pub fn load(&mut self, path: &Path) -> usize {
        match fs::read(path) {
            Ok(bytes) => {
                self.load_from_str(&String::from_utf8_lossy(&bytes));
                tracing::debug!(path = %path.display(), entries = self.entries.len(), "loaded history");
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "history not loaded");
                self.entries.clear();
                self.cursor = 0;
            }
        }
        self.entries.len()
    }

    /// Parse history file text. Comment lines (`#`) and blank lines are
    /// skipped; the header is not validated.
    pub fn load_from_str(&mut self, raw: &str) {
        self.entries = raw
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .map(str::to_string)
            .collect();
        self.reset();
    }

    /// Record a submitted line. Blank lines are ignored and line breaks
    /// are collapsed, so every entry occupies exactly one line on disk.
    ///
    /// Returns whether an entry was added. Adding one moves the navigation
    /// cursor past the newest entry.
    pub fn append(&mut self, text: &str) -> bool {
        let entry = single_line(text);
        if entry.trim().is_empty() {
            return false;
        }
        self.entries.push(entry);
        self.reset();
        true
    }

    /// Write the newest `max_persisted` entries to `path`, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let result = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| fs::write(path, self.render(SystemTime::now())));
        result.map_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "failed to save history");
            HistoryError::io(path, err)
        })
    }

    /// Serialize the persisted view: header, blank line, kept entries.
    pub fn render(&self, saved_at: SystemTime) -> String {
        let mut out = format!(
            "# {HISTORY_HEADER_NAME} history saved {}\n\n",
            httpdate::fmt_http_date(saved_at)
        );
        out.push_str(&self.persisted_entries().join("\n"));
        out.push('\n');
        out
    }

    /// The newest `max_persisted` entries, oldest first.
    pub fn persisted_entries(&self) -> &[String] {
        let skip = self.entries.len().saturating_sub(self.max_persisted);
        &self.entries[skip..]
    }

    /// Step to the previous (older) entry.
    ///
    /// Returns `None` when already at the oldest entry (or history is
    /// empty); the caller leaves its buffer alone in that case.
    pub fn navigate_up(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step to the next (newer) entry, or onto a fresh line past the newest.
    pub fn navigate_down(&mut self) -> HistoryView<'_> {
        self.cursor = (self.cursor + 1).min(self.entries.len());
        match self.entries.get(self.cursor) {
            Some(entry) => HistoryView::Entry(entry),
            None => HistoryView::Fresh,
        }
    }

    /// Put the navigation cursor past the newest entry.
    pub fn reset(&mut self) {
        self.cursor = self.entries.len();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Navigation cursor; equals `len()` on a fresh line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}

/// Collapse text onto one line: trailing line breaks are dropped and
/// interior ones become spaces.
pub(crate) fn single_line(text: &str) -> String {
    text.trim_end_matches(['\r', '\n'])
        .split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
