use anyhow::{Context, Result};
use clap::Parser;

use podswitch::app::cli::Args;
use podswitch::app::config::{AppConfig, UserConfig};
use podswitch::app::{play_sequence, Client};
use podswitch::logging;

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let args = Args::parse();

    if args.generate_config {
        print!("{}", UserConfig::default().to_toml()?);
        return Ok(());
    }

    // Logging isn't up yet, so a bad config is reported once it is.
    let (config, config_err) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (UserConfig::default(), Some(e)),
    };

    let log_path = AppConfig::log_path(&config);
    let _guard = logging::init(args.verbose, log_path.as_deref())
        .context("Failed to set up logging")?;

    if let Some(err) = config_err {
        tracing::warn!(error = %err, "falling back to default config");
    }

    let apps = if args.apps.is_empty() {
        config.sequence.clone()
    } else {
        args.apps.clone()
    };

    let mut client = Client::new();
    for app in play_sequence(&mut client, &apps, args.forward, args.rewind) {
        println!("{}: {}", app.variant(), app.position());
    }

    Ok(())
}
