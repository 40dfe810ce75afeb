//! Logging setup.
//!
//! The subscriber is only installed when `LEXAN_LOG` (or `RUST_LOG`) is set.
//! Values use the `RUST_LOG` syntax, e.g. `LEXAN_LOG=debug` for one line per
//! file or `LEXAN_LOG=lexan::lexer=trace` for one line per token. Output goes
//! to stderr.

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "LEXAN_LOG";

/// `LEXAN_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> Option<EnvFilter> {
    if let Ok(val) = std::env::var(LOG_ENV) {
        Some(EnvFilter::builder().parse_lossy(val))
    } else if std::env::var("RUST_LOG").is_ok() {
        Some(EnvFilter::from_default_env())
    } else {
        None
    }
}

pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };

    // A subscriber installed by an embedding program wins.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
