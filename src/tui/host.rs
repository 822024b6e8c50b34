//! Terminal host for the line editor.
//!
//! The editor line is drawn on stderr; submitted lines go to stdout, which
//! stands in for the interpreter that would normally consume them.

use crate::config::DisplayConfig;
use crate::editor::{EditOutcome, LineEditor, TextSurface};
use crate::tui::keys::translate_key;
use crate::tui::settings;
use crossterm::cursor::MoveToColumn;
use crossterm::event::{
    self, DisableFocusChange, EnableFocusChange, Event, KeyCode as TermKey, KeyEventKind,
};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{ExecutableCommand, QueueableCommand};
use std::io::{self, BufRead, Write};

/// Run the raw-mode editing loop until Esc or an exit command.
pub fn run_interactive<S: TextSurface>(
    editor: &mut LineEditor<S>,
    display: &DisplayConfig,
) -> io::Result<()> {
    let _guard = RawModeGuard::acquire()?;
    let mut stderr = io::stderr();
    let mut stdout = io::stdout();
    render_line(&mut stderr, display, editor.content(), editor.cursor())?;

    loop {
        match event::read()? {
            Event::FocusLost => {
                editor.focus_lost();
                continue;
            }
            Event::FocusGained => editor.focus_gained(),
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
                    continue;
                }
                if key.code == TermKey::Esc {
                    stderr.queue(Print(settings::NEWLINE_INTERACTIVE))?;
                    stderr.flush()?;
                    return Ok(());
                }
                let Some(edit_event) = translate_key(&key) else {
                    continue;
                };
                if let EditOutcome::Submitted(line) = editor.handle_key(edit_event) {
                    // Leave the submitted line on screen above the fresh prompt.
                    render_line(&mut stderr, display, &line, line.chars().count())?;
                    stderr.queue(Print(settings::NEWLINE_INTERACTIVE))?;
                    stderr.flush()?;
                    if is_exit_command(&line) {
                        return Ok(());
                    }
                    if !line.trim().is_empty() {
                        stdout.write_all(line.as_bytes())?;
                        stdout.write_all(settings::NEWLINE_INTERACTIVE.as_bytes())?;
                        stdout.flush()?;
                    }
                }
            }
            Event::Resize(..) => {}
            _ => continue,
        }
        render_line(&mut stderr, display, editor.content(), editor.cursor())?;
    }
}

/// Feed newline-separated input through the editor without a terminal.
///
/// Returns the number of lines submitted (the exit command excluded).
pub fn run_piped<S, R, W>(editor: &mut LineEditor<S>, input: R, output: &mut W) -> io::Result<usize>
where
    S: TextSurface,
    R: BufRead,
    W: Write,
{
    let mut submitted = 0usize;
    for line in input.lines() {
        let line = editor.submit_line(&line?);
        if is_exit_command(&line) {
            break;
        }
        submitted += 1;
        if !line.trim().is_empty() {
            writeln!(output, "{line}")?;
        }
    }
    output.flush()?;
    Ok(submitted)
}

/// Redraw prompt + buffer on the current row and park the cursor.
pub fn render_line<W: Write>(
    out: &mut W,
    display: &DisplayConfig,
    content: &str,
    cursor: usize,
) -> io::Result<()> {
    out.queue(MoveToColumn(0))?;
    out.queue(Clear(ClearType::CurrentLine))?;
    if display.color {
        out.queue(PrintStyledContent(
            display.prompt.as_str().with(settings::COLOR_PROMPT).bold(),
        ))?;
    } else {
        out.queue(Print(&display.prompt))?;
    }
    out.queue(Print(content))?;
    let column = display.prompt.chars().count().saturating_add(cursor);
    out.queue(MoveToColumn(u16::try_from(column).unwrap_or(u16::MAX)))?;
    out.flush()
}

fn is_exit_command(line: &str) -> bool {
    settings::EXIT_COMMANDS.contains(&line.trim())
}

/// Raw mode lifetime guard so terminal state is restored on any return path.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // Focus reporting is best effort; not every terminal supports it.
        let _ = io::stderr().execute(EnableFocusChange);
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = io::stderr().execute(DisableFocusChange);
        let _ = terminal::disable_raw_mode();
    }
}
