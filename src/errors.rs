//! HTTP error surface of the webhook endpoints.
//!
//! Expected failure cases are modeled as an enum so every rejection maps to a
//! fixed status code and plain-text body. Meta retries notifications on
//! anything else, so the set of responses stays closed over 200/403/404/405.

use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};

#[derive(Debug, Display, Error)]
pub enum WebhookError {
    /// Handshake mode or verify token did not match the configured values
    VerificationFailed,
    /// POST payload is not a WhatsApp Business event
    NotAWhatsAppEvent,
}

impl web::error::WebResponseError for WebhookError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{:#?}", self);

        let body = match self {
            WebhookError::VerificationFailed => "Forbidden",
            WebhookError::NotAWhatsAppEvent => "Not a WhatsApp event",
        };

        web::HttpResponse::build(self.status_code())
            .set_header("content-type", "text/plain; charset=utf-8")
            .body(body)
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            WebhookError::VerificationFailed => http::StatusCode::FORBIDDEN,
            WebhookError::NotAWhatsAppEvent => http::StatusCode::NOT_FOUND,
        }
    }
}
