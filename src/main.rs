mod api;
mod app;
mod application;
mod config;
mod domain;
mod ui;
mod utils;

use anyhow::Context;
use envconfig::Envconfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::ApiConfig;
use crate::config::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::init_from_env().context("Failed to load config")?;
    let api_config = ApiConfig::from_server_url(&config.server_url)
        .with_context(|| format!("Invalid server URL {:?}", config.server_url))?;

    info!("Uploading to {}", api_config.server_url);

    iced::application(
        move || app::UploadApp::new(api_config.clone()),
        app::update,
        app::view,
    )
    .title("Bulk Message Sender")
    .run()?;

    Ok(())
}
