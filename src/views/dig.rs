use crate::models::DigResponse;
use crate::views::helpers::{current_datetime, error_fragment, no_results_fragment};

pub fn render_dig_results(response: &DigResponse) -> String {
    if let Some(error) = &response.error {
        return error_fragment(error);
    }
    if response.results.is_empty() {
        return no_results_fragment("No DNS records found");
    }

    let mut items = String::new();
    for record in &response.results {
        items.push_str(&format!(
            r#"<div class="record-item">
              <div class="record-header">
                <div class="record-name">{name}</div>
                <span class="record-ttl">TTL {ttl}s</span>
              </div>
              <div class="record-main">
                <span class="record-type">{rtype}</span>
                <div class="record-value">{value}</div>
              </div>
            </div>"#,
            name = html_escape::encode_text(&record.name),
            ttl = record.ttl,
            rtype = record.record_type,
            value = html_escape::encode_text(&record.value),
        ));
    }

    format!(
        r#"<div class="result-stats">{count} records · queried at {timestamp}</div>
        {items}"#,
        count = response.results.len(),
        timestamp = current_datetime(),
        items = items,
    )
}
