use anyhow::Result;
use env_logger::{Builder, Env, Target};
use log::{error, info};
use std::io::Write;
use wifi_setup::{config::ShellConfig, shell};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize();

    let config = ShellConfig::load()?;
    info!(
        "device agent at {} (timeout {:?})",
        config.device_url, config.request_timeout
    );

    shell::run(config).await
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    // stdout belongs to the rendered view
    builder.format(|f, record| writeln!(f, "[{}] {}", record.level(), record.args()));

    builder.target(Target::Stderr).init();

    info!("module version: {}", env!("CARGO_PKG_VERSION"));
}
