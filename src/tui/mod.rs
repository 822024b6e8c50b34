//! Terminal host for the line editor: key translation, line rendering and
//! the read loop used by the `emline` binary.

mod host;
mod keys;
pub mod renderer;
pub mod settings;

pub use host::{render_line, run_interactive, run_piped};
pub use keys::translate_key;
pub use renderer::Renderer;
