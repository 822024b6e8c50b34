//! Headless editing scenarios driven through the public API.
//!
//! Every test uses an in-memory clipboard and a private history file so the
//! suite never touches the real clipboard or `~/.emline_history`.

use emline::editor::{
    EditOutcome, EditorOptions, KeyCode, KeyEvent, LineEditor, MemoryClipboard,
};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

static FIXTURE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Per-test scratch directory removed on drop.
struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "emline-it-{name}-{}-{}",
            std::process::id(),
            FIXTURE_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        Self { dir }
    }

    fn history_file(&self) -> PathBuf {
        self.dir.join("history")
    }

    fn editor(&self) -> (LineEditor, MemoryClipboard) {
        self.editor_with_cap(1000)
    }

    fn editor_with_cap(&self, max_history: usize) -> (LineEditor, MemoryClipboard) {
        let clipboard = MemoryClipboard::new();
        let options = EditorOptions {
            history_file: self.history_file(),
            max_history,
            ..EditorOptions::default()
        };
        (
            LineEditor::new(options, Box::new(clipboard.clone())),
            clipboard,
        )
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

fn type_text(editor: &mut LineEditor, text: &str) {
    for ch in text.chars() {
        editor.handle_key(KeyEvent::printable(ch));
    }
}

fn press(editor: &mut LineEditor, code: KeyCode) -> EditOutcome {
    editor.handle_key(KeyEvent::key(code))
}

#[test]
fn kill_line_keeps_prefix_and_cursor() {
    let scratch = Scratch::new("kill-line");
    let (mut editor, _) = scratch.editor();
    type_text(&mut editor, "hello world");
    for _ in 0..6 {
        editor.handle_key(KeyEvent::ctrl('b'));
    }
    assert_eq!(editor.cursor(), 5);

    editor.handle_key(KeyEvent::ctrl('k'));
    assert_eq!(editor.content(), "hello");
    assert_eq!(editor.cursor(), 5);
}

#[test]
fn history_walk_up_and_down() {
    let scratch = Scratch::new("history-walk");
    let (mut editor, _) = scratch.editor();
    for line in ["first", "second"] {
        type_text(&mut editor, line);
        press(&mut editor, KeyCode::Enter);
    }
    assert_eq!(editor.history().cursor(), 2);

    press(&mut editor, KeyCode::Up);
    assert_eq!(editor.content(), "second");
    assert_eq!(editor.cursor(), 6);
    press(&mut editor, KeyCode::Up);
    assert_eq!(editor.content(), "first");
    press(&mut editor, KeyCode::Up);
    assert_eq!(editor.content(), "first");
    press(&mut editor, KeyCode::Down);
    assert_eq!(editor.content(), "second");
    press(&mut editor, KeyCode::Down);
    assert_eq!(editor.content(), "");
    assert_eq!(editor.history().cursor(), 2);
}

#[test]
fn down_past_newest_discards_draft() {
    let scratch = Scratch::new("draft-discard");
    let (mut editor, _) = scratch.editor();
    type_text(&mut editor, "first");
    press(&mut editor, KeyCode::Enter);

    type_text(&mut editor, "unsaved draft");
    press(&mut editor, KeyCode::Up);
    assert_eq!(editor.content(), "first");
    press(&mut editor, KeyCode::Down);
    assert_eq!(editor.content(), "");
}

#[test]
fn boundary_deletes_on_empty_buffer_are_noops() {
    let scratch = Scratch::new("boundary-deletes");
    let (mut editor, _) = scratch.editor();
    editor.handle_key(KeyEvent::ctrl('h'));
    editor.handle_key(KeyEvent::ctrl('d'));
    assert_eq!(editor.content(), "");
    assert_eq!(editor.cursor(), 0);
}

#[test]
fn cut_then_paste_round_trips_through_clipboard() {
    let scratch = Scratch::new("cut-paste");
    let (mut editor, clipboard) = scratch.editor();
    type_text(&mut editor, "abc");

    editor.handle_key(KeyEvent::ctrl('x'));
    assert_eq!(editor.content(), "");
    assert_eq!(clipboard.text().as_deref(), Some("abc"));

    editor.handle_key(KeyEvent::ctrl('v'));
    assert_eq!(editor.content(), "abc");
    assert_eq!(editor.cursor(), 3);
}

#[test]
fn clipboard_shared_between_editors() {
    let scratch = Scratch::new("shared-clipboard");
    let (mut left, clipboard) = scratch.editor();
    let options = left.options().clone();
    let mut right = LineEditor::new(options, Box::new(clipboard.clone()));

    type_text(&mut left, "from left");
    left.handle_key(KeyEvent::ctrl('c'));
    right.handle_key(KeyEvent::ctrl('v'));
    assert_eq!(right.content(), "from left");
    assert_eq!(left.content(), "from left");
}

#[test]
fn raw_control_codes_drive_the_same_actions() {
    let scratch = Scratch::new("raw-codes");
    let (mut editor, _) = scratch.editor();
    type_text(&mut editor, "abc");
    editor.handle_key(KeyEvent::from_code(1, true, None));
    assert_eq!(editor.cursor(), 0);
    editor.handle_key(KeyEvent::from_code(11, true, None));
    assert_eq!(editor.content(), "");
    type_text(&mut editor, "x");
    let outcome = editor.handle_key(KeyEvent::from_code(13, false, None));
    assert_eq!(outcome, EditOutcome::Submitted("x".into()));
}

#[test]
fn saved_history_survives_restart() {
    let scratch = Scratch::new("restart");
    {
        let (mut editor, _) = scratch.editor();
        for line in ["a", "b", "c"] {
            type_text(&mut editor, line);
            press(&mut editor, KeyCode::Enter);
        }
        editor.save_history().expect("save history");
    }

    let raw = fs::read_to_string(scratch.history_file()).expect("history file");
    assert!(raw.starts_with("# emline history saved "));

    let (mut editor, _) = scratch.editor();
    assert_eq!(
        editor.history().entries(),
        &["a".to_string(), "b".to_string(), "c".to_string()]
    );
    press(&mut editor, KeyCode::Up);
    assert_eq!(editor.content(), "c");
}

#[test]
fn history_cap_applies_on_save() {
    let scratch = Scratch::new("cap");
    {
        let (mut editor, _) = scratch.editor_with_cap(1000);
        for idx in 0..1005 {
            editor.submit_line(&format!("line {idx}"));
        }
        assert_eq!(editor.history().len(), 1005);
        editor.save_history().expect("save history");
    }

    let (editor, _) = scratch.editor();
    assert_eq!(editor.history().len(), 1000);
    assert_eq!(editor.history().entries()[0], "line 5");
}

#[test]
fn unwritable_history_path_reports_and_keeps_state() {
    let scratch = Scratch::new("unwritable");
    let (mut editor, _) = scratch.editor();
    type_text(&mut editor, "keep");
    press(&mut editor, KeyCode::Enter);

    let blocker = scratch.dir.join("blocker");
    fs::write(&blocker, "file").expect("write blocker");
    let err = editor
        .save_history_to(&blocker.join("history"))
        .expect_err("parent is a file");
    assert!(err.to_string().contains("cannot save history"));
    assert_eq!(editor.history().entries(), &["keep".to_string()]);

    type_text(&mut editor, "still editing");
    assert_eq!(editor.content(), "still editing");
}

#[test]
fn handwritten_history_file_is_filtered() {
    let scratch = Scratch::new("handwritten");
    fs::write(
        scratch.history_file(),
        "# anything at all\n\nls\n   \n# comment\ncd /tmp\n",
    )
    .expect("write history");
    let (editor, _) = scratch.editor();
    assert_eq!(
        editor.history().entries(),
        &["ls".to_string(), "cd /tmp".to_string()]
    );
    assert_eq!(editor.history().cursor(), 2);
}

#[cfg(feature = "fuzz-tests")]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn key_strategy() -> impl Strategy<Value = KeyEvent> {
        prop_oneof![
            proptest::char::range('a', 'e').prop_map(KeyEvent::printable),
            Just(KeyEvent::printable('é')),
            proptest::sample::select(vec!['a', 'e', 'b', 'f', 'h', 'd', 'k', 'x', 'v', 'c'])
                .prop_map(KeyEvent::ctrl),
            proptest::sample::select(vec![
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Home,
                KeyCode::End,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Backspace,
                KeyCode::Delete,
                KeyCode::Enter,
            ])
            .prop_map(KeyEvent::key),
        ]
    }

    proptest! {
        #[test]
        fn cursor_never_leaves_buffer(keys in proptest::collection::vec(key_strategy(), 0..200)) {
            let scratch = Scratch::new("prop-cursor");
            let (mut editor, _) = scratch.editor();
            for key in keys {
                editor.handle_key(key);
                prop_assert!(editor.cursor() <= editor.content().chars().count());
                prop_assert!(editor.history().cursor() <= editor.history().len());
            }
        }
    }
}
