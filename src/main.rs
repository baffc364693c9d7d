//! # Community Fridge Bot
//!
//! Webhook receiver for the WhatsApp Cloud API. Verifies Meta's webhook
//! handshake, accepts incoming message notifications and echoes a static
//! reply to text messages.

pub mod config;
pub mod consts;
pub mod errors;
pub mod logger;
pub mod webhook;

use envconfig::Envconfig;
use log::info;
use ntex::web;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::AppConfig::init_from_env()?;

    logger::setup_simple_logger(app_config.is_prod())?;

    configure_and_run_server(app_config).await
}

/// Creates application state from the loaded configuration
fn create_app_state(app_config: &config::AppConfig) -> webhook::AppState {
    webhook::AppState {
        whatsapp_client: webhook::whatsapp::client::WhatsAppClient::new(app_config),
        config: app_config.clone(),
    }
}

/// Configures and starts the web server
///
/// TLS termination is left to the hosting environment; the server binds
/// plain HTTP.
async fn configure_and_run_server(app_config: config::AppConfig) -> anyhow::Result<()> {
    let server_addr = (
        app_config.web_server_host.clone(),
        app_config.web_server_port,
    );
    info!(
        "starting webhook server on {}:{}",
        server_addr.0, server_addr.1
    );

    web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state(&app_config))
            .configure(webhook::routes::whatsapp)
    })
    .bind(server_addr)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
