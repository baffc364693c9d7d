use ntex::web;

/// Configures webhook routes for external integrations.
///
/// These routes are public endpoints that don't require authentication;
/// the GET handshake carries its own verify token.
///
/// # Routes
/// - `GET /webhook/whatsapp` - WhatsApp webhook verification
/// - `POST /webhook/whatsapp` - WhatsApp webhook receiver
/// - any other method on the path answers 405
pub fn whatsapp(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/webhook/whatsapp")
            .service((super::whatsapp::verify, super::whatsapp::receive))
            .default_service(web::route().to(super::whatsapp::method_not_allowed)),
    );
}
