//! Header normalization.

/// Strips a leading byte-order mark and surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_trims() {
        assert_eq!(normalize_header("  City "), "City");
        assert_eq!(normalize_header("\u{feff}Full Name"), "Full Name");
        assert_eq!(normalize_header("Phone #"), "Phone #");
    }

    #[test]
    fn test_normalize_header_keeps_inner_spacing() {
        assert_eq!(normalize_header(" Zip  Code\t"), "Zip  Code");
    }
}
