use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;

use tracing::info;

use api::{AddonServices, AppConfig, ApplicationServer, LogoTable, Logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Arc::new(AppConfig::parse());

    // init logger and sentry, guards are kept alive to flush logs and maintain sentry connection
    let _guards = Logger::init(config.cargo_env, config.sentry_dsn.clone());

    info!("logger and env prepped, loading logo table...");

    // no logos no server, this is the only thing that can stop us from starting
    let logos = LogoTable::load(&config.logos_path).context("logo table failed to load")?;

    info!("logo table ok, starting addon server...");

    let services = AddonServices::new(logos, config.clone());

    ApplicationServer::serve(config, services)
        .await
        .context("addon server failed to start")?;

    Ok(())
}
