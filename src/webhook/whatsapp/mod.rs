//! WhatsApp webhook integration module
//!
//! This module provides webhook handling for WhatsApp Business API
//! integration. It includes both the HTTP route handlers and the logic for
//! processing incoming messages.
//!
//! ## Submodules
//!
//! - [`routes`] - HTTP endpoint handlers for WhatsApp webhooks
//! - [`handler`] - Logic for processing WhatsApp webhook events
//! - [`schemas`] - Data structures for incoming webhook payloads
//! - [`outgoing_schemas`] - Data structures for outgoing messages
//! - [`client`] - WhatsApp API client for sending messages

pub mod client;
pub mod handler;
pub mod outgoing_schemas;
pub mod routes;
pub mod schemas;

// Re-export commonly used items for convenience
pub use routes::{method_not_allowed, receive, verify};
