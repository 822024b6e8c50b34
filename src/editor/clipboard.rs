//! Scoped access to a shared clipboard.
//!
//! Each operation acquires the clipboard, performs one read or write, and
//! releases it before returning. A busy or missing clipboard turns the
//! operation into a silent no-op.

use crate::config::ClipboardKind;
use std::cell::{RefCell, RefMut};
use std::rc::Rc;

/// Copy/paste capability injected into the editor.
pub trait ClipboardBridge {
    /// Place `text` on the clipboard. Returns `false` (and changes
    /// nothing) when the clipboard is unavailable.
    fn copy(&mut self, text: &str) -> bool;

    /// Read plain text. `None` when unavailable or holding non-text data.
    fn paste(&mut self) -> Option<String>;
}

/// Build the clipboard selected in configuration.
pub fn clipboard_for(kind: ClipboardKind) -> Box<dyn ClipboardBridge> {
    match kind {
        ClipboardKind::System => Box::new(SystemClipboard),
        ClipboardKind::Memory => Box::new(MemoryClipboard::new()),
    }
}

// ---------------------------------------------------------------------------
// SystemClipboard
// ---------------------------------------------------------------------------

/// OS clipboard via `arboard`, opened fresh for every operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn open() -> Option<arboard::Clipboard> {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                tracing::debug!(error = %err, "system clipboard unavailable");
                None
            }
        }
    }
}

impl ClipboardBridge for SystemClipboard {
    fn copy(&mut self, text: &str) -> bool {
        let Some(mut clipboard) = Self::open() else {
            return false;
        };
        match clipboard.set_text(text) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(error = %err, "failed to set clipboard text");
                false
            }
        }
    }

    fn paste(&mut self) -> Option<String> {
        let mut clipboard = Self::open()?;
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(arboard::Error::ContentNotAvailable) => {
                tracing::debug!("clipboard holds no text");
                None
            }
            Err(err) => {
                tracing::debug!(error = %err, "failed to read clipboard text");
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryClipboard
// ---------------------------------------------------------------------------

/// Data sitting on a [`MemoryClipboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardContent {
    Text(String),
    /// Anything that isn't plain text (an image, a file list, ...).
    NonText,
}

/// In-process clipboard shared by every clone of the handle.
///
/// Used for headless hosts and tests. Acquisition is a `RefCell` borrow, so
/// a [`ClipboardHold`] held by one consumer makes the clipboard unavailable
/// to the rest until it drops.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    slot: Rc<RefCell<Option<ClipboardContent>>>,
}

/// Guard that keeps a [`MemoryClipboard`] acquired.
#[derive(Debug)]
pub struct ClipboardHold<'a> {
    _slot: RefMut<'a, Option<ClipboardContent>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the clipboard until the returned guard drops.
    ///
    /// Returns `None` if someone else already holds it.
    pub fn hold(&self) -> Option<ClipboardHold<'_>> {
        self.slot
            .try_borrow_mut()
            .ok()
            .map(|slot| ClipboardHold { _slot: slot })
    }

    /// Current content, or `None` when empty or held.
    pub fn contents(&self) -> Option<ClipboardContent> {
        self.slot.try_borrow().ok().and_then(|slot| slot.clone())
    }

    /// Replace the content directly (e.g. another application copied).
    /// Ignored while held.
    pub fn set_contents(&self, content: ClipboardContent) {
        if let Ok(mut slot) = self.slot.try_borrow_mut() {
            *slot = Some(content);
        }
    }

    /// Plain-text content, if any.
    pub fn text(&self) -> Option<String> {
        match self.contents()? {
            ClipboardContent::Text(text) => Some(text),
            ClipboardContent::NonText => None,
        }
    }
}

impl ClipboardBridge for MemoryClipboard {
    fn copy(&mut self, text: &str) -> bool {
        match self.slot.try_borrow_mut() {
            Ok(mut slot) => {
                *slot = Some(ClipboardContent::Text(text.to_string()));
                true
            }
            Err(_) => {
                tracing::debug!("clipboard busy; copy skipped");
                false
            }
        }
    }

    fn paste(&mut self) -> Option<String> {
        let Ok(slot) = self.slot.try_borrow() else {
            tracing::debug!("clipboard busy; paste skipped");
            return None;
        };
        match &*slot {
            None => None,
            Some(ClipboardContent::Text(text)) => Some(text.clone()),
            Some(ClipboardContent::NonText) => {
                tracing::debug!("clipboard holds no text");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_clipboard() {
        let handle = MemoryClipboard::new();
        let mut consumer = handle.clone();
        assert!(consumer.copy("abc"));
        assert_eq!(handle.text().as_deref(), Some("abc"));
        assert_eq!(consumer.paste().as_deref(), Some("abc"));
    }

    #[test]
    fn held_clipboard_turns_operations_into_noops() {
        let handle = MemoryClipboard::new();
        handle.set_contents(ClipboardContent::Text("before".into()));
        let mut consumer = handle.clone();

        let hold = handle.hold().expect("clipboard free");
        assert!(handle.hold().is_none());
        assert!(!consumer.copy("after"));
        assert_eq!(consumer.paste(), None);
        drop(hold);

        assert_eq!(handle.text().as_deref(), Some("before"));
        assert_eq!(consumer.paste().as_deref(), Some("before"));
    }

    #[test]
    fn non_text_content_pastes_nothing() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.set_contents(ClipboardContent::NonText);
        assert_eq!(clipboard.paste(), None);
        assert_eq!(clipboard.contents(), Some(ClipboardContent::NonText));
    }

    #[test]
    fn empty_clipboard_pastes_nothing() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.paste(), None);
    }

    #[test]
    fn factory_builds_memory_clipboard() {
        let mut clipboard = clipboard_for(ClipboardKind::Memory);
        assert!(clipboard.copy("x"));
        assert_eq!(clipboard.paste().as_deref(), Some("x"));
    }
}
