//! vx command-line front end.
//!
//! Loads source files into a [`SourceBuffer`](vx_lexer_core::SourceBuffer),
//! runs the scanner or the parser over them and renders results and
//! diagnostics for a terminal. The `vx` binary is a thin argument parser
//! over [`commands`].

pub mod commands;
mod diagnostic;
mod source;

pub use diagnostic::{line_col, null_byte_warnings, render_diagnostic};
pub use source::{read_source, CliError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used, and with
/// neither nothing is installed. Only the first call has any effect.
pub fn init_tracing(default_filter: Option<&str>) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if let Some(directives) = default_filter {
            EnvFilter::new(directives)
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
