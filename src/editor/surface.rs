//! Capability interface between the key dispatcher and whatever holds the
//! editable text.
//!
//! `TextBuffer` is the headless implementation. A host widget can implement
//! the four required methods and get the editing primitives for free.

use crate::editor::buffer::{byte_index_at_char, char_count, delete_char_range};

/// Text + cursor access the dispatcher needs.
///
/// Positions are char indices. Implementations must clamp out-of-range
/// positions instead of failing.
pub trait TextSurface {
    /// Current line text.
    fn current_text(&self) -> &str;

    /// Insertion point in chars.
    fn cursor_index(&self) -> usize;

    /// Replace the whole text and place the cursor at end-of-text.
    fn set_text(&mut self, text: &str);

    /// Select `start..end`; the cursor lands on `end`. Equal values collapse
    /// the selection.
    fn set_selection(&mut self, start: usize, end: usize);

    /// Length of the current text in chars.
    fn text_len(&self) -> usize {
        char_count(self.current_text())
    }

    /// Move the cursor (clamped) with a collapsed selection.
    fn move_cursor(&mut self, to: usize) {
        let to = to.min(self.text_len());
        self.set_selection(to, to);
    }

    /// Insert `text` at the cursor and move the cursor past it.
    fn insert_text(&mut self, text: &str) {
        let cursor = self.cursor_index().min(self.text_len());
        let mut next = self.current_text().to_string();
        next.insert_str(byte_index_at_char(&next, cursor), text);
        self.set_text(&next);
        self.move_cursor(cursor + char_count(text));
    }

    /// Remove chars in `from..to` (clamped, either order).
    fn delete_range(&mut self, from: usize, to: usize) {
        let len = self.text_len();
        let (start, end) = (from.min(to).min(len), from.max(to).min(len));
        if start == end {
            return;
        }
        let cursor = self.cursor_index();
        let mut next = self.current_text().to_string();
        delete_char_range(&mut next, start, end);
        self.set_text(&next);
        let cursor = if cursor >= end {
            cursor - (end - start)
        } else {
            cursor.min(start)
        };
        self.move_cursor(cursor);
    }
}
