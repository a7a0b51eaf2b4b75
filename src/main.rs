mod config;      // brings `config.rs` in as `crate::config`
mod console;     // brings `console.rs` in as `crate::console`
mod walkthrough; // brings `walkthrough.rs` in as `crate::walkthrough`

use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Primer started. Loading configuration and running the walkthrough...");

    if let Err(e) = run() {
        error!("Walkthrough failed: {:?}", e);
        std::process::exit(1);
    }

    info!("Walkthrough finished.");
}

fn run() -> anyhow::Result<()> {
    let settings = config::load_settings()?;
    settings.validate()?;
    walkthrough::run(&settings)
}
