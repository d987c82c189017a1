//! CLI entry point for the dashboard launcher.

mod cli;

use bivista::config::load_config;
use bivista::server::{self, AppState};
use bivista::theme::Theme;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if let Some(theme) = &args.theme {
        config.display.theme = theme.clone();
    }

    for problem in config.validate() {
        eprintln!("warning: {problem}");
    }

    info!(
        theme = Theme::from_name(&config.display.theme).name(),
        ai_enabled = config.ai_enabled(),
        "starting BI Assistant dashboard on http://{}:{}",
        server::BIND_ADDR,
        server::PORT,
    );

    let state = AppState::new(config);
    if let Err(e) = server::serve(state).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    // Reached after Ctrl-C: interruption is a clean exit.
    println!("dashboard stopped");
}
