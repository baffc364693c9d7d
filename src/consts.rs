pub const WHATSAPP_OBJECT_TYPE: &str = "whatsapp_business_account";
pub const WHATSAPP_HANDSHAKE_MODE: &str = "subscribe";
pub const MAX_INTERACTIVE_BUTTONS: usize = 3;

pub const STATIC_REPLY_TEXT: &str =
    "Thanks for your message! The Community Fridge Bot is still being set up. We'll be live soon!";
