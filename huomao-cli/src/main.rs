mod cli;
mod config;
mod error;
mod output;

use std::time::Duration;
use std::{env, fs, process};

use clap::Parser;
use huomao_parser::{HuomaoExtractor, playlist};
use reqwest::Client;
use tracing::{Level, error, info};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::{
    cli::Args,
    config::AppConfig,
    error::{Error, Result},
};

// Keeps the error message readable when the binary was double-clicked and
// the console closes on exit.
const ERROR_DISPLAY_DELAY: Duration = Duration::from_millis(1500);

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    if let Err(e) = run(args).await {
        error!("application error: {e}");
        eprintln!("{}", e.user_message());
        tokio::time::sleep(ERROR_DISPLAY_DELAY).await;
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;

    let game = args.game.as_deref().unwrap_or(&config.game);
    let timeout = args.timeout.unwrap_or(config.timeout_secs);

    let client = Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()
        .map_err(|e| Error::Config(format!("failed to build http client: {e}")))?;

    let mut extractor = HuomaoExtractor::new(client, game, args.page);
    if let Some(endpoint) = config.endpoint {
        extractor = extractor.with_endpoint(endpoint);
    }

    let channels = extractor.extract().await?;
    let document = playlist::render(&channels);

    if args.print {
        print!("{document}");
        return Ok(());
    }

    let path = match args.output {
        Some(path) => {
            fs::write(&path, &document)?;
            info!(path = %path.display(), "playlist written");
            path
        }
        None => output::write_playlist(&env::temp_dir(), &document)?,
    };

    if !args.no_play {
        output::launch_player(&path, config.player.as_deref())?;
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_level(verbose))
        .init();
}
