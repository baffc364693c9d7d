//! # WhatsApp API Client
//!
//! This module provides a client for sending messages to WhatsApp Business
//! API. It handles authentication and message sending for text and
//! interactive reply-button messages.

use super::outgoing_schemas::{
    ButtonReply, OutgoingButtonMessage, OutgoingTextMessage, WhatsAppMessageResponse,
};
use crate::{config::AppConfig, consts};
use anyhow::{Context, Result};
use log::info;

/// Error envelope returned by the Graph API on failed requests
#[derive(Debug, serde::Deserialize)]
struct GraphErrorResponse {
    error: Option<GraphError>,
}

/// Error detail inside a Graph API failure response
#[derive(Debug, serde::Deserialize)]
struct GraphError {
    message: Option<String>,
}

/// WhatsApp API client for sending messages
pub struct WhatsAppClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// WhatsApp Business API endpoint for sending messages
    endpoint: String,
    /// Authentication token
    auth_token: String,
}

impl WhatsAppClient {
    /// Creates a new WhatsApp client from the application configuration
    pub fn new(app_config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: app_config.whatsapp_send_msg_endpoint(),
            auth_token: app_config.whatsapp_business_auth.clone(),
        }
    }

    /// Sends a text message
    ///
    /// # Arguments
    /// * `to` - Recipient's WhatsApp ID (phone number with country code)
    /// * `body` - Message text
    pub async fn send_text_message(
        &self,
        to: String,
        body: String,
    ) -> Result<WhatsAppMessageResponse> {
        let message = OutgoingTextMessage::new(to, body);
        let response = self.send_message(&message).await?;

        info!("text message sent to {}", message.to);
        Ok(response)
    }

    /// Sends an interactive reply-button message
    ///
    /// # Arguments
    /// * `to` - Recipient's WhatsApp ID (phone number with country code)
    /// * `body_text` - The main message text
    /// * `buttons` - Reply buttons, at most three
    pub async fn send_button_message(
        &self,
        to: String,
        body_text: String,
        buttons: Vec<ButtonReply>,
    ) -> Result<WhatsAppMessageResponse> {
        anyhow::ensure!(
            buttons.len() <= consts::MAX_INTERACTIVE_BUTTONS,
            "WhatsApp interactive messages allow at most {} buttons, got {}",
            consts::MAX_INTERACTIVE_BUTTONS,
            buttons.len()
        );

        let message = OutgoingButtonMessage::new_buttons(to, body_text, buttons);
        let response = self.send_message(&message).await?;

        info!("button message sent to {}", message.to);
        Ok(response)
    }

    /// Internal method to send any message type to WhatsApp API
    async fn send_message<T: serde::Serialize>(
        &self,
        message: &T,
    ) -> Result<WhatsAppMessageResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .header("Content-Type", "application/json")
            .json(message)
            .send()
            .await
            .context("Failed to send request to WhatsApp API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            // Surface the provider's own error message when the body carries one
            let provider_message = serde_json::from_str::<GraphErrorResponse>(&body)
                .ok()
                .and_then(|parsed| parsed.error)
                .and_then(|error| error.message)
                .unwrap_or_else(|| "Unknown error".to_string());

            anyhow::bail!(
                "WhatsApp API returned error status {}: {}",
                status,
                provider_message
            );
        }

        let whatsapp_response: WhatsAppMessageResponse = response
            .json()
            .await
            .context("Failed to parse WhatsApp API response")?;

        Ok(whatsapp_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(api_base: String) -> AppConfig {
        AppConfig {
            env: "local".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            whatsapp_verify_token: "SECRET".to_string(),
            whatsapp_business_phone_number_id: 109123456789012,
            whatsapp_business_auth: "test-token".to_string(),
            whatsapp_api_base: api_base,
        }
    }

    fn success_body() -> serde_json::Value {
        serde_json::json!({
            "messaging_product": "whatsapp",
            "contacts": [{"input": "5215550002222", "wa_id": "5215550002222"}],
            "messages": [{"id": "wamid.OUT"}]
        })
    }

    #[ntex::test]
    async fn test_send_text_message_posts_bearer_authenticated_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/109123456789012/messages"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_partial_json(serde_json::json!({
                "messaging_product": "whatsapp",
                "to": "5215550002222",
                "type": "text",
                "text": {"body": "hola"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = WhatsAppClient::new(&test_config(server.uri()));
        let response = client
            .send_text_message("5215550002222".to_string(), "hola".to_string())
            .await
            .unwrap();

        assert_eq!(response.messages[0].id, "wamid.OUT");
    }

    #[ntex::test]
    async fn test_send_button_message_posts_interactive_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/109123456789012/messages"))
            .and(body_partial_json(serde_json::json!({
                "type": "interactive",
                "interactive": {
                    "type": "button",
                    "action": {
                        "buttons": [
                            {"type": "reply", "reply": {"id": "yes", "title": "Yes"}}
                        ]
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = WhatsAppClient::new(&test_config(server.uri()));
        client
            .send_button_message(
                "5215550002222".to_string(),
                "Is this correct?".to_string(),
                vec![ButtonReply::new("yes".to_string(), "Yes".to_string())],
            )
            .await
            .unwrap();
    }

    #[ntex::test]
    async fn test_error_status_surfaces_provider_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/109123456789012/messages"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {
                    "message": "(#131030) Recipient phone number not in allowed list",
                    "type": "OAuthException",
                    "code": 131030
                }
            })))
            .mount(&server)
            .await;

        let client = WhatsAppClient::new(&test_config(server.uri()));
        let err = client
            .send_text_message("5215550002222".to_string(), "hola".to_string())
            .await
            .unwrap_err();

        assert!(
            err.to_string()
                .contains("Recipient phone number not in allowed list")
        );
    }

    #[ntex::test]
    async fn test_error_status_without_message_uses_fallback() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/109123456789012/messages"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = WhatsAppClient::new(&test_config(server.uri()));
        let err = client
            .send_text_message("5215550002222".to_string(), "hola".to_string())
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("Unknown error"));
    }

    #[ntex::test]
    async fn test_more_than_three_buttons_fails_without_calling_api() {
        let server = MockServer::start().await;

        let client = WhatsAppClient::new(&test_config(server.uri()));
        let buttons = ["a", "b", "c", "d"]
            .iter()
            .map(|id| ButtonReply::new(id.to_string(), id.to_uppercase()))
            .collect();

        let err = client
            .send_button_message("5215550002222".to_string(), "pick one".to_string(), buttons)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("at most 3 buttons"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
