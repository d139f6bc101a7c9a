const BYTE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// 1024-based units, two decimals with trailing zeros trimmed.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(BYTE_UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", BYTE_UNITS[exponent])
}

pub fn error_fragment(message: &str) -> String {
    format!(
        r#"<div class="error-message">{}</div>"#,
        html_escape::encode_text(message),
    )
}

pub fn no_results_fragment(message: &str) -> String {
    format!(
        r#"<div class="empty-state"><p>{}</p></div>"#,
        html_escape::encode_text(message),
    )
}

pub fn current_datetime() -> String {
    let format = time::format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
        .unwrap_or_else(|_| time::format_description::parse("[year]-[month]-[day]").expect("format"));
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    now.format(&format).unwrap_or_else(|_| "n/a".to_string())
}
