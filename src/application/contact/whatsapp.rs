//! WhatsApp deep links (`https://wa.me/<phone>?text=<message>`).

use url::form_urlencoded;

/// Message used by the general "ask us" button.
pub const GENERAL_INQUIRY: &str = "Hola, ¿Quisiera información de sus próximos viajes?";

/// Builds inquiry links for the portal's WhatsApp number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsappLinks {
    /// International dialing prefix prepended to the portal's mobile phone.
    country_code: String,
    /// Full number (with prefix) used by the general inquiry link.
    general_phone: String,
}

impl WhatsappLinks {
    pub fn new(country_code: impl Into<String>, general_phone: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            general_phone: general_phone.into(),
        }
    }

    /// Link asking about one travel; `referer` is the page the visitor came from.
    pub fn travel_inquiry(&self, portal_phone: &str, travel_name: &str, referer: &str) -> String {
        let phone = format!("{}{}", self.country_code, portal_phone);
        deep_link(&phone, &travel_inquiry_message(travel_name, referer))
    }

    pub fn general_inquiry(&self) -> String {
        deep_link(&self.general_phone, GENERAL_INQUIRY)
    }
}

pub fn travel_inquiry_message(travel_name: &str, referer: &str) -> String {
    format!(
        "Hola,\n\nEstoy interesada en más información sobre el viaje {}.\n\n{}\n\n¡Gracias!",
        travel_name, referer
    )
}

/// `wa.me` only accepts digits in the phone segment.
fn deep_link(phone: &str, text: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let encoded: String = form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("https://wa.me/{}?text={}", digits, encoded)
}
