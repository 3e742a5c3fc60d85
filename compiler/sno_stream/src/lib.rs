//! Replayable character stream for the SNOBOL3 front end.
//!
//! The scanner reads source text through this crate one character at a
//! time. It can look ahead without consuming, back up over characters it
//! already read, save and restore positions, and stamp tokens with a
//! `(line, offset)` position.
//!
//! - [`CharStream`]: the narrow peek/getch/pos contract. End of input and
//!   stream failures both read as `None`.
//! - [`ReplayBuffer`]: the in-memory implementation, with strict
//!   `Result`-returning methods for pushback, marks, skips and remainders.
//! - [`SharedBuffer`]: a mutex-guarded handle for cross-thread use.
//! - [`constants`]: the markers, sentinels and stream ids the scanner
//!   compares characters against.
//!
//! This crate has no `sno_*` dependencies and does no tokenizing, escape
//! handling or validation.

mod buffer;
pub mod constants;
mod error;
mod options;
mod position;
mod shared;
mod stream;

pub use buffer::ReplayBuffer;
pub use error::{StreamError, StreamResult};
pub use options::StreamOptions;
pub use position::Pos;
pub use shared::SharedBuffer;
pub use stream::CharStream;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const LOG_TARGET: &str = "sno_stream";

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Does nothing
/// unless `RUST_LOG` is set. A bare level such as `RUST_LOG=debug`
/// (lifecycle events, errors reported as EOF) or `RUST_LOG=trace` (every
/// cursor move) applies to this crate only; targeted directives are used
/// as written.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(raw) = std::env::var("RUST_LOG") else {
            return;
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::new(scoped_directives(&raw)))
            .init();
    });
}

/// Rewrite bare level directives as `sno_stream=<level>`.
fn scoped_directives(raw: &str) -> String {
    use tracing_subscriber::filter::LevelFilter;

    raw.split(',')
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .map(|directive| {
            if directive.parse::<LevelFilter>().is_ok() {
                format!("{LOG_TARGET}={directive}")
            } else {
                directive.to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
