//! Log output for the CLI.
//!
//! Spans from every stage (`parse`, `resolve`, `eval_program`, ...) are
//! written to stderr as an indented tree. The filter comes from
//! [`LOG_ENV`], using `EnvFilter` directive syntax:
//!
//! ```text
//! TERN_LOG=debug tern run demo.tern
//! TERN_LOG=tern_eval=trace,tern_parse=debug tern run demo.tern
//! ```

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TERN_LOG";

const DEFAULT_FILTER: &str = "warn";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let layer = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        // Fails only if the embedding program installed its own subscriber.
        let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
    });
}
