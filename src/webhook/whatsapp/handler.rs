//! # WhatsApp Webhook Handler
//!
//! Processes incoming webhook notifications: pulls the first message out of
//! Meta's nested payload and answers text messages with the static reply.

use super::{
    client::WhatsAppClient,
    schemas::{Message, Status, WebhookPayload},
};
use crate::consts;
use anyhow::Result;
use log::{info, warn};

/// Extracts the first message from the webhook payload, if any.
///
/// Meta nests messages as `entry[0].changes[0].value.messages[0]`; any level
/// may be absent. Non-message deliveries (delivery receipts, read receipts)
/// collapse to `None`.
pub fn first_message(payload: &WebhookPayload) -> Option<&Message> {
    payload
        .entry
        .first()?
        .changes
        .first()?
        .value
        .messages
        .as_ref()?
        .first()
}

/// Collects the status updates carried by the payload
pub fn status_updates(payload: &WebhookPayload) -> Vec<&Status> {
    payload
        .entry
        .iter()
        .flat_map(|entry| &entry.changes)
        .filter_map(|change| change.value.statuses.as_ref())
        .flatten()
        .collect::<Vec<_>>()
}

/// Processes one notification payload.
///
/// Sends the static reply when the payload carries a text message; every
/// other shape is acknowledged without side effect. The send result is
/// returned so the caller decides how a failed reply affects the HTTP
/// response.
pub async fn process_notification(
    payload: &WebhookPayload,
    client: &WhatsAppClient,
) -> Result<()> {
    let Some(message) = first_message(payload) else {
        let receipts = status_updates(payload);
        if !receipts.is_empty() {
            info!("acknowledged {} status update(s)", receipts.len());
        }
        return Ok(());
    };

    match message.msg_type.as_str() {
        "text" => {
            let body = message
                .text
                .as_ref()
                .map(|text| text.body.as_str())
                .unwrap_or_default();
            info!("received message from {}: {}", message.from, body);

            client
                .send_text_message(message.from.clone(), consts::STATIC_REPLY_TEXT.to_string())
                .await?;
        }
        other => {
            warn!("unsupported message type received: {}", other);
        }
    }

    Ok(())
}
