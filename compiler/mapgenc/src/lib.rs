//! mapgen command-line driver.
//!
//! Loads mapping files and documents, calls into `mapgen_codegen`, and writes
//! the results. All I/O of the system lives here; the codegen crates are pure.
//!
//! # Tracing
//!
//! Set `RUST_LOG` to enable hierarchical tracing output on stderr, e.g.
//! `RUST_LOG=mapgen_codegen=trace mapgen generate mappings.json`.

pub mod commands;
mod error;
pub mod outline;

pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .try_init();
        }
    });
}
