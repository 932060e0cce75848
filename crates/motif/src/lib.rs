//! Motif driver: runs the path-template demonstration and ad hoc matches.
//!
//! The binary in `main.rs` only parses arguments and prints; everything it
//! calls lives here so it can be tested.

pub mod config;
pub mod demo;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Call this once at program start to enable tracing output. Tracing is
/// controlled by the `RUST_LOG` environment variable:
///
/// - `RUST_LOG=motif_patterns=debug` - one event per match and budget overrun
/// - `RUST_LOG=motif_patterns=trace` - every frontier step
///
/// With `tree` set, spans and events are rendered as an indented tree.
pub fn init_tracing(tree: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree_layer = tree.then(|| {
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr)
            });
            let flat_layer = (!tree).then(|| {
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr)
            });
            tracing_subscriber::registry()
                .with(tree_layer)
                .with(flat_layer)
                .with(filter)
                .init();
        }
    });
}
