//! # WhatsApp Outgoing Message Schemas
//!
//! Data structures for sending messages to WhatsApp Business API. These
//! schemas define the JSON payload structure for the message types the bot
//! sends, plus the API response envelope.

use serde::{Deserialize, Serialize};

/// Text message to send to WhatsApp
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingTextMessage {
    /// Messaging product, always "whatsapp"
    pub messaging_product: String,
    /// Recipient's WhatsApp ID (phone number)
    pub to: String,
    /// Message type
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Text content
    pub text: OutgoingTextContent,
}

impl OutgoingTextMessage {
    /// Creates a new text message
    pub fn new(to: String, body: String) -> Self {
        Self {
            messaging_product: "whatsapp".to_string(),
            to,
            msg_type: "text".to_string(),
            text: OutgoingTextContent { body },
        }
    }
}

/// Text content for outgoing messages
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingTextContent {
    /// Message body text
    pub body: String,
}

/// Interactive reply-button message to send to WhatsApp
///
/// Useful for verification prompts like "Is this correct? [Yes] [No]".
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingButtonMessage {
    /// Messaging product, always "whatsapp"
    pub messaging_product: String,
    /// Recipient's WhatsApp ID (phone number)
    pub to: String,
    /// Message type, "interactive"
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Interactive content
    pub interactive: InteractiveContent,
}

impl OutgoingButtonMessage {
    /// Creates a new interactive reply-button message
    pub fn new_buttons(to: String, body_text: String, buttons: Vec<ButtonReply>) -> Self {
        Self {
            messaging_product: "whatsapp".to_string(),
            to,
            msg_type: "interactive".to_string(),
            interactive: InteractiveContent {
                interactive_type: "button".to_string(),
                body: InteractiveBody { text: body_text },
                action: InteractiveAction {
                    buttons: buttons
                        .into_iter()
                        .map(|reply| InteractiveButton {
                            button_type: "reply".to_string(),
                            reply,
                        })
                        .collect(),
                },
            },
        }
    }
}

/// Interactive content structure
#[derive(Debug, Serialize, Deserialize)]
pub struct InteractiveContent {
    /// Type of interactive message (e.g., "button")
    #[serde(rename = "type")]
    pub interactive_type: String,
    /// Body text
    pub body: InteractiveBody,
    /// Action (the buttons)
    pub action: InteractiveAction,
}

/// Interactive message body
#[derive(Debug, Serialize, Deserialize)]
pub struct InteractiveBody {
    /// Body text
    pub text: String,
}

/// Interactive action holding the reply buttons
#[derive(Debug, Serialize, Deserialize)]
pub struct InteractiveAction {
    /// Reply buttons (WhatsApp allows at most three)
    pub buttons: Vec<InteractiveButton>,
}

/// Single reply button
#[derive(Debug, Serialize, Deserialize)]
pub struct InteractiveButton {
    /// Button type, always "reply"
    #[serde(rename = "type")]
    pub button_type: String,
    /// Button identifier and label
    pub reply: ButtonReply,
}

/// Identifier and label of a reply button
#[derive(Debug, Serialize, Deserialize)]
pub struct ButtonReply {
    /// Unique button ID, echoed back when the user taps it
    pub id: String,
    /// Button title (displayed to user)
    pub title: String,
}

impl ButtonReply {
    /// Creates a new reply button descriptor
    pub fn new(id: String, title: String) -> Self {
        Self { id, title }
    }
}

/// Response from WhatsApp API when sending a message
#[derive(Debug, Serialize, Deserialize)]
pub struct WhatsAppMessageResponse {
    /// Messaging product
    pub messaging_product: String,
    /// Array of contacts (recipients)
    pub contacts: Vec<WhatsAppContact>,
    /// Array of messages sent
    pub messages: Vec<WhatsAppMessageStatus>,
}

/// Contact information in response
#[derive(Debug, Serialize, Deserialize)]
pub struct WhatsAppContact {
    /// WhatsApp ID of the contact
    pub wa_id: String,
    /// Input phone number
    pub input: String,
}

/// Message status in response
#[derive(Debug, Serialize, Deserialize)]
pub struct WhatsAppMessageStatus {
    /// Message ID
    pub id: String,
}
