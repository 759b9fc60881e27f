//! Fusion command-line driver.
//!
//! A thin pass-through around `fusion_lexer`: read a whole file, tokenize
//! it, print the token stream. The command handlers live in [`commands`]
//! so they can be tested without spawning the binary.

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the tracing filter, e.g. `FUSION_LOG=trace`.
pub const LOG_ENV: &str = "FUSION_LOG";

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `FUSION_LOG` is set; its value is an `EnvFilter`
/// directive such as `fusion_lexer=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var_os(LOG_ENV).is_some() {
            let filter = EnvFilter::from_env(LOG_ENV);
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        }
    });
}
