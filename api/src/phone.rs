//! # Phone number utilities
//!
//! Validation and sanitization for subscriber phone numbers. A valid
//! subscriber phone is exactly 10 digits and starts with `09`; anything the
//! user types is first reduced to its digits. Validation messages are the
//! Arabic strings shown verbatim in the claim flow.
//!
//! Bulk-imported subscribers that have not been claimed yet carry a synthetic
//! `placeholder-{id}` phone, detected by [`is_placeholder_phone`].

/// Reduce input to digits only.
pub fn sanitize_phone(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True iff the input sanitizes to exactly 10 digits starting with "09".
pub fn is_valid_phone(phone: &str) -> bool {
    let sanitized = sanitize_phone(phone);
    sanitized.len() == 10 && sanitized.starts_with("09")
}

/// Format a phone for display as `09XX XXX XXX`.
/// Returns the input unchanged when it is not a 10-digit number.
pub fn format_phone_display(phone: &str) -> String {
    let sanitized = sanitize_phone(phone);
    if sanitized.len() != 10 {
        return phone.to_string();
    }
    format!(
        "{} {} {}",
        &sanitized[0..4],
        &sanitized[4..7],
        &sanitized[7..]
    )
}

/// Validation message for a phone input, `None` when the phone is valid.
/// Checks run in the order the claim form reports them: empty, prefix,
/// too short, too long.
pub fn phone_validation_error(phone: &str) -> Option<String> {
    let sanitized = sanitize_phone(phone);

    if sanitized.is_empty() {
        return Some("يرجى إدخال رقم الهاتف".to_string());
    }
    if !sanitized.starts_with("09") {
        return Some("يجب أن يبدأ الرقم بـ 09".to_string());
    }
    if sanitized.len() < 10 {
        return Some(format!("يجب إدخال {} أرقام إضافية", 10 - sanitized.len()));
    }
    if sanitized.len() > 10 {
        return Some("الرقم يجب أن يكون 10 أرقام فقط".to_string());
    }

    None
}

/// True for backend-generated `placeholder-{id}` phones on unclaimed rows.
pub fn is_placeholder_phone(phone: &str) -> bool {
    phone.starts_with("placeholder-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_non_digits() {
        assert_eq!(sanitize_phone("09 123 45678"), "0912345678");
        assert_eq!(sanitize_phone("(091) 234-5678"), "0912345678");
        assert_eq!(sanitize_phone("abc"), "");
    }

    #[test]
    fn test_valid_phone() {
        assert!(is_valid_phone("0912345678"));
        assert!(is_valid_phone("09 123 45678"));
        assert!(!is_valid_phone("0812345678"));
        assert!(!is_valid_phone("091234567"));
        assert!(!is_valid_phone("09123456789"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_validation_error_order() {
        assert!(phone_validation_error("").is_some());
        // Prefix is reported before length.
        assert_eq!(
            phone_validation_error("08").as_deref(),
            Some("يجب أن يبدأ الرقم بـ 09")
        );
        assert_eq!(
            phone_validation_error("0912345").as_deref(),
            Some("يجب إدخال 3 أرقام إضافية")
        );
        assert!(phone_validation_error("091234567890").is_some());
        assert!(phone_validation_error("0912345678").is_none());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format_phone_display("0912345678"), "0912 345 678");
        // Not a 10-digit number: left untouched.
        assert_eq!(format_phone_display("12345"), "12345");
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(is_placeholder_phone("placeholder-42"));
        assert!(!is_placeholder_phone("0912345678"));
    }
}
