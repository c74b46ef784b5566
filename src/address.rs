//! Address normalization utilities.
//!
//! Sui addresses are 32-byte values, but they're often represented in different formats:
//! - Short form: "0x2"
//! - Full form: "0x0000000000000000000000000000000000000000000000000000000000000002"
//! - Without prefix: "2"
//!
//! Link targets compare the defining address of a type against the address of the
//! module being viewed, so both sides must be normalized to a single canonical form.

/// Normalize an address to lowercase with 0x prefix and full 64 hex characters.
///
/// # Examples
///
/// ```
/// use sui_module_view::address::normalize_address;
///
/// assert_eq!(
///     normalize_address("0x2"),
///     "0x0000000000000000000000000000000000000000000000000000000000000002"
/// );
/// assert_eq!(
///     normalize_address("ABC"),
///     "0x0000000000000000000000000000000000000000000000000000000000000abc"
/// );
/// ```
pub fn normalize_address(addr: &str) -> String {
    let addr = addr.trim().to_lowercase();
    let hex = addr.strip_prefix("0x").unwrap_or(&addr);
    if hex.len() < 64 {
        format!("0x{:0>64}", hex)
    } else {
        format!("0x{}", hex)
    }
}

/// Format an address to short form (0x2 instead of 0x0000...0002).
///
/// This is the preferred format for display to users.
pub fn format_address_short(addr: &str) -> String {
    let normalized = normalize_address(addr);
    let trimmed = normalized[2..].trim_start_matches('0');
    if trimmed.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_short_address() {
        assert_eq!(
            normalize_address("0x2"),
            "0x0000000000000000000000000000000000000000000000000000000000000002"
        );
    }

    #[test]
    fn test_normalize_no_prefix() {
        assert_eq!(
            normalize_address("2"),
            "0x0000000000000000000000000000000000000000000000000000000000000002"
        );
    }

    #[test]
    fn test_normalize_full_length() {
        let full = "0x0000000000000000000000000000000000000000000000000000000000000002";
        assert_eq!(normalize_address(full), full);
    }

    #[test]
    fn test_normalize_uppercase() {
        assert_eq!(
            normalize_address("0X02"),
            "0x0000000000000000000000000000000000000000000000000000000000000002"
        );
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_address("  0x2  "),
            "0x0000000000000000000000000000000000000000000000000000000000000002"
        );
    }

    #[test]
    fn test_normalize_mixed_case() {
        assert_eq!(
            normalize_address("0xDeEb7A4662eec9F2f3def03Fb937a663dddAa2e215b8078A284d026b7946c270"),
            "0xdeeb7a4662eec9f2f3def03fb937a663dddaa2e215b8078a284d026b7946c270"
        );
    }

    #[test]
    fn test_short_and_full_forms_compare_equal() {
        assert_eq!(normalize_address("0x2"), normalize_address("0x0002"));
        assert_ne!(normalize_address("0x2"), normalize_address("0x5"));
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(
            format_address_short("0x0000000000000000000000000000000000000000000000000000000000000002"),
            "0x2"
        );
        assert_eq!(format_address_short("0x0"), "0x0");
        assert_eq!(format_address_short("abc"), "0xabc");
    }
}
