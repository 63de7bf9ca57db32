//! Logging for the apigen CLI.
//!
//! Sets up a `tracing` subscriber whose verbosity follows the global flags:
//! `--verbose` for debug output, `--quiet` for errors only, otherwise
//! `RUST_LOG` or info.
//!
//! # Example
//!
//! ```rust,no_run
//! use apigen_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Indexing sources");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "apigen=debug,apigen_docs=debug,apigen_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "apigen=info,apigen_docs=info,apigen_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at startup. Logs go to stderr so generated output on stdout
/// stays clean.
///
/// # Verbosity Levels
///
/// 1. `--verbose` flag: DEBUG for apigen crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for apigen crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
