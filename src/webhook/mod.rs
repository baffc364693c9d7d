//! Webhook handlers for external integrations
//!
//! This module contains webhook endpoint handlers for external services that
//! integrate with the Community Fridge bot.
//!
//! ## Modules
//!
//! - [`whatsapp`] - WhatsApp Business API webhook handlers

pub mod routes;
pub mod whatsapp;

use crate::config::AppConfig;

/// Shared state handed to every webhook request
pub struct AppState {
    pub config: AppConfig,
    pub whatsapp_client: whatsapp::client::WhatsAppClient,
}
