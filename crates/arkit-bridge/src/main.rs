//! arkit-bridge: shape construction and compass telemetry for a host app.
//!
//! Reads already-framed JSON messages from stdin, one per line, and answers
//! on stdout. Shape requests go to the geometry factory; the `heading`
//! subcommand replays recorded compass samples through the heading stream.

mod cli;
mod dispatch;
mod heading;
mod logging;
mod protocol;
mod serve;

use std::process::ExitCode;

use arkit_common::ShapeKind;
use arkit_config::ArkitConfig;
use arkit_geometry::ShapeFactory;
use tokio::io::BufReader;

use crate::cli::Command;
use crate::dispatch::Dispatcher;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    let log = logging::init(args.log_level.as_deref());

    tracing::info!("arkit-bridge v{} starting", env!("CARGO_PKG_VERSION"));

    let loaded = match &args.config {
        Some(path) => {
            tracing::info!("Using config override: {}", path.display());
            arkit_config::load_config_from(path)
        }
        None => arkit_config::load_config(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ArkitConfig::default()
    });
    log.apply_config_level(config.logging.level);
    if args.permissive {
        config.geometry.strict_dimensions = false;
    }

    let result = match args.command {
        Command::Serve => {
            let dispatcher = Dispatcher::new(ShapeFactory::from_config(&config));
            let stdin = BufReader::new(tokio::io::stdin());
            serve::serve(&dispatcher, stdin, tokio::io::stdout())
                .await
                .map(|_| ())
        }
        Command::Heading { no_compass } => {
            let stdin = BufReader::new(tokio::io::stdin());
            heading::replay(&config.heading, !no_compass, stdin, tokio::io::stdout())
                .await
                .map(|_| ())
        }
        Command::Kinds => {
            for kind in ShapeKind::ALL {
                println!("{}", kind.channel_name());
            }
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("arkit-bridge failed: {e}");
            ExitCode::FAILURE
        }
    }
}
