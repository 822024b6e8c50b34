//! Single-line text buffer with a clamped cursor and selection mark.
//!
//! Positions are char indices, never byte offsets, so multi-byte input can't
//! split a UTF-8 sequence. Every position argument is clamped into
//! `0..=len` instead of being rejected.

use crate::editor::surface::TextSurface;

/// Editable content of the current line plus cursor/selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
    /// Insertion point, in chars.
    cursor: usize,
    /// Other end of the selection; equal to `cursor` when collapsed.
    anchor: usize,
}

impl TextBuffer {
    /// Create an empty buffer with the cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current line text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        char_count(&self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Selection as an ordered `(start, end)` pair.
    pub fn selection(&self) -> (usize, usize) {
        (self.anchor.min(self.cursor), self.anchor.max(self.cursor))
    }

    /// Insert `text` at the cursor and move the cursor past it.
    pub fn insert(&mut self, text: &str) {
        self.insert_at(self.cursor, text);
    }

    /// Insert `text` at char position `at` (clamped).
    ///
    /// Marks at or after the insertion point shift right by the inserted
    /// length.
    pub fn insert_at(&mut self, at: usize, text: &str) {
        let at = at.min(self.len());
        let byte_idx = byte_index_at_char(&self.content, at);
        self.content.insert_str(byte_idx, text);
        let inserted = char_count(text);
        if self.cursor >= at {
            self.cursor += inserted;
        }
        if self.anchor >= at {
            self.anchor += inserted;
        }
        self.clamp_marks();
    }

    /// Remove chars in `from..to`. Arguments are clamped and may be given
    /// in either order.
    pub fn delete_range(&mut self, from: usize, to: usize) {
        let len = self.len();
        let (start, end) = (from.min(to).min(len), from.max(to).min(len));
        if start == end {
            return;
        }
        delete_char_range(&mut self.content, start, end);
        if self.cursor >= end {
            self.cursor -= end - start;
        } else if self.cursor > start {
            self.cursor = start;
        }
        self.clamp_marks();
    }

    /// Move the cursor (clamped) and collapse the selection onto it.
    pub fn move_cursor(&mut self, to: usize) {
        self.cursor = to.min(self.len());
        self.anchor = self.cursor;
    }

    /// Replace the whole content; the cursor moves to end-of-text and the
    /// selection collapses onto it.
    pub fn set_content(&mut self, text: &str) {
        self.content.clear();
        self.content.push_str(text);
        self.cursor = self.len();
        self.anchor = self.cursor;
    }

    /// Pull any stale mark back inside the current bounds.
    fn clamp_marks(&mut self) {
        let len = self.len();
        self.cursor = self.cursor.min(len);
        self.anchor = self.anchor.min(len);
    }
}

impl TextSurface for TextBuffer {
    fn current_text(&self) -> &str {
        &self.content
    }

    fn cursor_index(&self) -> usize {
        self.cursor
    }

    fn set_text(&mut self, text: &str) {
        self.set_content(text);
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.len();
        self.anchor = start.min(len);
        self.cursor = end.min(len);
    }

    fn insert_text(&mut self, text: &str) {
        self.insert(text);
    }

    fn delete_range(&mut self, from: usize, to: usize) {
        TextBuffer::delete_range(self, from, to);
    }
}

/// Delete a char range represented in char indices.
pub(crate) fn delete_char_range(buffer: &mut String, start_char: usize, end_char: usize) {
    if start_char >= end_char {
        return;
    }
    let start = byte_index_at_char(buffer, start_char);
    let end = byte_index_at_char(buffer, end_char);
    buffer.replace_range(start..end, "");
}

/// Convert a char index to a byte index, preserving UTF-8 boundaries.
pub(crate) fn byte_index_at_char(s: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    s.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Return total char count for a UTF-8 string.
pub(crate) fn char_count(s: &str) -> usize {
    s.chars().count()
}
