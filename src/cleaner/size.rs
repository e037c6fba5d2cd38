//! Byte count to gigabyte conversion for the run summary.

const GIB: f64 = (1024u64 * 1024 * 1024) as f64;

/// Convert a byte count to binary gigabytes, rounded to 3 decimal places.
pub fn to_gib(bytes: u64) -> f64 {
    (bytes as f64 / GIB * 1000.0).round() / 1000.0
}

/// Render a byte count as a gigabyte string with trailing zeros trimmed,
/// keeping at least one fractional digit: 0 -> "0.0", 1 GiB -> "1.0".
pub fn format_gib(bytes: u64) -> String {
    let formatted = format!("{:.3}", to_gib(bytes));
    let trimmed = formatted.trim_end_matches('0');

    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}
