//! Application configuration management.
//!
//! This module handles all configuration values required for the application.
//! The configuration is read from environment variables once at startup and
//! passed explicitly to the components that need it; nothing reads the
//! environment after initialization.
//!
//! # Security Notes
//! - Sensitive fields are clearly marked and should never be logged
//! - Production environments should use secure secret management systems

use envconfig::Envconfig;

/// Application configuration with security-aware field management.
///
/// This struct contains all environment variables used to configure the
/// application. Sensitive fields are clearly marked.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Host address for web server binding (NON-SENSITIVE)
    /// Example: "0.0.0.0", "localhost"
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    /// Common values: 80 (HTTP), 8080 (dev)
    #[envconfig(default = "8080")]
    pub web_server_port: u16,

    /// 🔒 SENSITIVE: Webhook verification token
    /// Must match the value configured in the Meta app dashboard
    pub whatsapp_verify_token: String,

    /// WhatsApp Business phone number ID (SEMI-SENSITIVE)
    /// Security: Restrict access, don't log in production
    pub whatsapp_business_phone_number_id: u64,

    /// 🔒 SENSITIVE: WhatsApp Business authentication token
    /// Security: Store in secure secret management system
    pub whatsapp_business_auth: String,

    /// Base URL of the Meta Graph API (NON-SENSITIVE)
    /// Example: "https://graph.facebook.com/v21.0"
    #[envconfig(default = "https://graph.facebook.com/v21.0")]
    pub whatsapp_api_base: String,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// Constructs the WhatsApp Business API endpoint for sending messages
    pub fn whatsapp_send_msg_endpoint(&self) -> String {
        format!(
            "{base}/{id}/messages",
            base = self.whatsapp_api_base,
            id = self.whatsapp_business_phone_number_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn required_vars() -> HashMap<String, String> {
        HashMap::from([
            ("WHATSAPP_VERIFY_TOKEN".to_string(), "secret".to_string()),
            (
                "WHATSAPP_BUSINESS_PHONE_NUMBER_ID".to_string(),
                "109123456789012".to_string(),
            ),
            ("WHATSAPP_BUSINESS_AUTH".to_string(), "token".to_string()),
        ])
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::init_from_hashmap(&required_vars()).unwrap();

        assert_eq!(config.env, "local");
        assert!(!config.is_prod());
        assert_eq!(config.web_server_host, "0.0.0.0");
        assert_eq!(config.web_server_port, 8080);
        assert_eq!(config.whatsapp_api_base, "https://graph.facebook.com/v21.0");
    }

    #[test]
    fn test_send_msg_endpoint() {
        let config = AppConfig::init_from_hashmap(&required_vars()).unwrap();

        assert_eq!(
            config.whatsapp_send_msg_endpoint(),
            "https://graph.facebook.com/v21.0/109123456789012/messages"
        );
    }

    #[test]
    fn test_is_prod_case_insensitive() {
        let mut vars = required_vars();
        vars.insert("ENV".to_string(), "PROD".to_string());

        let config = AppConfig::init_from_hashmap(&vars).unwrap();
        assert!(config.is_prod());
    }

    #[test]
    fn test_missing_required_var_fails() {
        let mut vars = required_vars();
        vars.remove("WHATSAPP_BUSINESS_AUTH");

        assert!(AppConfig::init_from_hashmap(&vars).is_err());
    }
}
