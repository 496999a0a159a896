//! Log filter selection and subscriber setup.

use arkit_config::schema::LogLevel;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const FALLBACK_DIRECTIVE: &str = "arkit_bridge=info";

/// Crates whose level follows the config file's `logging.level`.
const WORKSPACE_TARGETS: &[&str] = &[
    "arkit_bridge",
    "arkit_config",
    "arkit_geometry",
    "arkit_heading",
];

/// An explicit filter from the CLI flag, else from `RUST_LOG`.
fn override_directive(cli_level: Option<&str>, env_filter: Option<&str>) -> Option<String> {
    cli_level
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .or_else(|| env_filter.map(str::trim).filter(|e| !e.is_empty()))
        .map(str::to_string)
}

/// Every workspace crate at `level`.
fn level_directive(level: LogLevel) -> String {
    WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={}", level.as_str()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Pick the filter directive: CLI flag, then `RUST_LOG`, then config, then
/// info for the workspace crates.
pub fn directive(
    cli_level: Option<&str>,
    env_filter: Option<&str>,
    config_level: Option<LogLevel>,
) -> String {
    override_directive(cli_level, env_filter)
        .unwrap_or_else(|| level_directive(config_level.unwrap_or_default()))
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("invalid log filter '{directive}' ({e}), using {FALLBACK_DIRECTIVE}");
        EnvFilter::new(FALLBACK_DIRECTIVE)
    })
}

/// Handle to the installed subscriber's filter.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    overridden: bool,
}

impl LogHandle {
    /// Switch to the config file's level unless the CLI or `RUST_LOG` chose
    /// the filter.
    pub fn apply_config_level(&self, level: LogLevel) {
        if self.overridden {
            return;
        }
        if let Err(e) = self.filter.reload(build_filter(&level_directive(level))) {
            tracing::warn!("failed to apply configured log level: {e}");
        }
    }
}

/// Install the global subscriber before anything else logs. Logs go to
/// stderr; stdout carries the channel responses.
pub fn init(cli_level: Option<&str>) -> LogHandle {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let overridden = override_directive(cli_level, env.as_deref()).is_some();
    let directive = directive(cli_level, env.as_deref(), None);

    let (filter, handle) = reload::Layer::new(build_filter(&directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    LogHandle {
        filter: handle,
        overridden,
    }
}
