//! WhatsApp deep link helpers. The looser ≥7-digit rule only gates opening
//! the external chat link; it is never used for backend validation.

use api::phone::sanitize_phone;

/// Any string with at least 7 digits can be a WhatsApp target.
pub fn is_valid_whatsapp_phone(phone: &str) -> bool {
    sanitize_phone(phone).len() >= 7
}

/// The wa.me URL for a phone number.
pub fn whatsapp_url(phone: &str) -> String {
    format!("https://wa.me/{}", sanitize_phone(phone))
}

/// Open a WhatsApp chat for the phone, in a new tab on the web.
pub fn open_whatsapp_chat(phone: &str) -> Result<(), String> {
    if !is_valid_whatsapp_phone(phone) {
        return Err("Invalid phone number".to_string());
    }

    let url = whatsapp_url(phone);

    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or("No window")?;
        window
            .open_with_url_and_target(&url, "_blank")
            .map_err(|_| "Failed to open WhatsApp".to_string())?;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        open::that(&url).map_err(|e| e.to_string())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_validation() {
        assert!(is_valid_whatsapp_phone("0912345678"));
        assert!(is_valid_whatsapp_phone("+964 912 345"));
        assert!(!is_valid_whatsapp_phone("12345"));
        assert!(!is_valid_whatsapp_phone(""));
        assert!(!is_valid_whatsapp_phone("   "));
    }

    #[test]
    fn test_whatsapp_url_strips_formatting() {
        assert_eq!(whatsapp_url("+964 912-345-678"), "https://wa.me/964912345678");
    }
}
