//! CLI entry point for emline.

mod cli;

use clap::Parser;
use emline::build_info;
use emline::config::load_config_with_diagnostics;
use emline::editor::{clipboard_for, LineEditor};
use emline::tui::{self, Renderer};
use std::io::{self, IsTerminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = cli::Args::parse();
    init_logging();

    let loaded = match load_config_with_diagnostics(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let mut config = loaded.config;
    let mut diagnostics = loaded.diagnostics;
    args.apply_overrides(&mut config, &mut diagnostics);

    let renderer = Renderer::new(config.display.color);
    for warning in &diagnostics.warnings {
        renderer.warn(warning);
    }

    let mut editor = LineEditor::new(
        config.editor.options(),
        clipboard_for(config.editor.clipboard),
    );

    let interactive = io::stdin().is_terminal() && io::stderr().is_terminal();
    let result = if interactive {
        renderer.banner(&build_info::startup_metadata_line());
        tui::run_interactive(&mut editor, &config.display)
    } else {
        tui::run_piped(&mut editor, io::stdin().lock(), &mut io::stdout().lock()).map(|_| ())
    };

    // Save even when the loop failed so submitted lines are not lost.
    if let Err(err) = editor.save_history() {
        renderer.warn(&err.to_string());
    }
    if let Err(err) = result {
        renderer.error(&format!("terminal: {err}"));
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `EMLINE_LOG`.
///
/// Defaults to `error`: warnings the host cares about are already printed by
/// the renderer.
fn init_logging() {
    let filter = EnvFilter::try_from_env("EMLINE_LOG").unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}
