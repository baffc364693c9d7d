//! WhatsApp webhook endpoint handlers
//!
//! This module handles incoming webhook requests from WhatsApp Business API.
//! It implements both the verification endpoint (GET) and the webhook
//! receiver (POST).

use super::{handler, schemas};
use crate::{consts, errors, webhook::AppState};
use log::{error, info};
use ntex::{util::Bytes, web};
use serde::Deserialize;

/// Query parameters for webhook verification
///
/// Every field is defaulted so a request with missing parameters still
/// reaches the token comparison (and fails it) instead of a 400.
#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    /// The mode parameter, should be "subscribe"
    #[serde(rename = "hub.mode", default)]
    pub mode: String,
    /// The verification token from WhatsApp
    #[serde(rename = "hub.verify_token", default)]
    pub verify_token: String,
    /// The challenge string to echo back
    #[serde(rename = "hub.challenge", default)]
    pub challenge: String,
}

/// Webhook verification endpoint (GET)
///
/// WhatsApp sends a GET request once to verify the webhook URL. This endpoint
/// validates the verify token and returns the challenge.
///
/// # Returns
/// - 200 with challenge string if verification succeeds
/// - 403 if verification fails
#[web::get("")]
pub async fn verify(
    query: web::types::Query<VerifyQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    if query.mode != consts::WHATSAPP_HANDSHAKE_MODE
        || query.verify_token != app_state.config.whatsapp_verify_token
    {
        error!("webhook verification failed - mode/token mismatch");
        return Err(errors::WebhookError::VerificationFailed.into());
    }

    info!("webhook verified successfully");

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body(query.challenge.clone()))
}

/// Webhook receiver endpoint (POST)
///
/// Receives webhook events from WhatsApp Business API and replies to text
/// messages synchronously; WhatsApp gives us 20 seconds to respond.
///
/// Once the payload is recognized as a WhatsApp event the response is 200
/// even when the reply could not be sent - Meta keeps retrying the
/// notification otherwise.
///
/// # Returns
/// - 200 "OK" for every recognized event
/// - 404 if the payload is not a WhatsApp Business event
#[web::post("")]
pub async fn receive(
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let payload: schemas::WebhookPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            error!("failed to parse webhook payload: {}", e);
            return Err(errors::WebhookError::NotAWhatsAppEvent.into());
        }
    };

    if payload.object != consts::WHATSAPP_OBJECT_TYPE {
        return Err(errors::WebhookError::NotAWhatsAppEvent.into());
    }

    if let Err(e) = handler::process_notification(&payload, &app_state.whatsapp_client).await {
        error!("failed to process webhook: {}", e);
    }

    Ok(web::HttpResponse::Ok().content_type("text/plain").body("OK"))
}

/// Fallback for HTTP methods the webhook path does not support
pub async fn method_not_allowed() -> impl web::Responder {
    web::HttpResponse::MethodNotAllowed()
        .content_type("text/plain")
        .body("Method not allowed")
}
