//! Display masking for sensitive variable values.

/// Substrings that mark a variable name as sensitive. Matching is case-sensitive.
pub const SENSITIVE_MARKERS: [&str; 4] = ["KEY", "TOKEN", "SECRET", "PRIVATE"];

/// Number of leading characters shown for a long sensitive value.
pub const VISIBLE_PREFIX_CHARS: usize = 10;

/// Replacement shown for short sensitive values.
pub const SHORT_VALUE_MASK: &str = "***";

pub fn is_sensitive(key: &str) -> bool {
    SENSITIVE_MARKERS.iter().any(|marker| key.contains(marker))
}

/// Value to print for `key`.
///
/// Sensitive values longer than [`VISIBLE_PREFIX_CHARS`] show that many leading
/// characters followed by `...`; shorter ones collapse to [`SHORT_VALUE_MASK`].
/// Everything else is returned unchanged.
pub fn display_value(key: &str, value: &str) -> String {
    if !is_sensitive(key) {
        return value.to_string();
    }
    if value.chars().count() > VISIBLE_PREFIX_CHARS {
        let prefix: String = value.chars().take(VISIBLE_PREFIX_CHARS).collect();
        format!("{}...", prefix)
    } else {
        SHORT_VALUE_MASK.to_string()
    }
}
