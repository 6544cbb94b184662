//! Tracing helpers scoped to this crate.
//!
//! The binary owns the global subscriber; these helpers let it raise or
//! lower this library's verbosity independently of the rest of the process.

use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

/// Crate target prefix used to filter only library-originated logs.
pub const TARGET_PREFIX: &str = "ai_llm_service";

/// Builds a level directive for **this** library only.
///
/// Example: `EnvFilter::new("info").add_directive(level_directive(Level::DEBUG))`
pub fn level_directive(level: Level) -> Directive {
    // Format like `ai_llm_service=debug`; the format is fixed, so parsing
    // cannot fail.
    let s = format!("{TARGET_PREFIX}={}", level.as_str().to_lowercase());
    Directive::from_str(&s).expect("valid level directive")
}

/// Creates an `EnvFilter` from `RUST_LOG` or the given fallback, then applies
/// a per-crate level directive for this library.
///
/// With `default = "info"` and `level = Level::DEBUG` the resulting filter
/// shows INFO globally and DEBUG for `ai_llm_service` only.
pub fn env_filter_with_level(default: &str, level: Level) -> EnvFilter {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    base.add_directive(level_directive(level))
}
