//! Tracing setup for the binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable that switches to indented tree output.
pub const LOG_TREE_ENV: &str = "JSLEX_LOG_TREE";

/// Install the global subscriber, once.
///
/// Does nothing unless `RUST_LOG` is set. All log output goes to stderr.
/// With `JSLEX_LOG_TREE=1`, spans render as an indented tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        if tree_requested(std::env::var(LOG_TREE_ENV).ok().as_deref()) {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    });
}

fn tree_requested(value: Option<&str>) -> bool {
    value.is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}
