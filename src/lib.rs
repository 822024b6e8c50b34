//! Emline: an Emacs-style single-line editing engine with persistent history.
//!
//! The engine is headless: hosts feed it key events and render whatever
//! the buffer holds afterwards.
//!
//! # Quick start
//!
//! ```no_run
//! use emline::editor::{EditOutcome, EditorOptions, KeyCode, KeyEvent, LineEditor, MemoryClipboard};
//!
//! let mut editor = LineEditor::new(EditorOptions::default(), Box::new(MemoryClipboard::new()));
//! for ch in "ls -la".chars() {
//!     editor.handle_key(KeyEvent::printable(ch));
//! }
//! if let EditOutcome::Submitted(line) = editor.handle_key(KeyEvent::key(KeyCode::Enter)) {
//!     println!("{line}");
//! }
//! if let Err(err) = editor.save_history() {
//!     eprintln!("warning: {err}");
//! }
//! ```

pub mod build_info;
pub mod config;
pub mod editor;
pub mod error;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
