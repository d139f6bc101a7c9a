use crate::models::CurlResponse;
use crate::views::helpers::{error_fragment, format_bytes};
use std::collections::BTreeMap;

pub fn render_curl_result(response: &CurlResponse) -> String {
    if let Some(error) = &response.error {
        return error_fragment(error);
    }

    let size = if response.body_size > 0 {
        format!(
            r#"<span class="response-size">{}</span>"#,
            format_bytes(response.body_size),
        )
    } else {
        String::new()
    };

    let final_url = if response.request_info.final_url.is_empty() {
        &response.url
    } else {
        &response.request_info.final_url
    };
    let protocol = if response.request_info.protocol.is_empty() {
        "HTTP/1.1"
    } else {
        &response.request_info.protocol
    };

    let tls_row = response
        .request_info
        .tls_version
        .as_deref()
        .map(|version| info_row("TLS", version))
        .unwrap_or_default();
    let remote_row = response
        .request_info
        .remote_addr
        .as_deref()
        .map(|addr| info_row("Remote address", addr))
        .unwrap_or_default();

    let binary_badge = if response.is_binary {
        r#"<span class="binary-badge">binary</span>"#
    } else {
        ""
    };
    let content_type = if response.content_type.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="content-type">{}</span>"#,
            html_escape::encode_text(&response.content_type),
        )
    };

    let body = if response.body_preview.is_empty() {
        &response.body
    } else {
        &response.body_preview
    };

    format!(
        r#"<div class="http-response">
          <div class="response-status">
            <span class="status-code {status_class}">{status_code}</span>
            <span>{status_text}</span>
            <span class="response-time">{response_time}ms</span>
            {size}
          </div>
          <details class="request-info">
            <summary>Request info</summary>
            <div class="info-content">
              {method_row}
              {url_row}
              {protocol_row}
              {tls_row}
              {remote_row}
            </div>
          </details>
          {redirects}
          <details class="request-headers">
            <summary>Request headers ({request_header_count})</summary>
            <div class="headers-list">{request_headers}</div>
          </details>
          <details class="response-headers">
            <summary>Response headers ({response_header_count})</summary>
            <div class="headers-list">{response_headers}</div>
          </details>
          <div class="response-body-section">
            <div class="body-header">
              <span>Response body</span>
              {binary_badge}
              {content_type}
            </div>
            <div class="response-body">{body}</div>
          </div>
        </div>"#,
        status_class = status_class(response.status_code),
        status_code = response.status_code,
        status_text = html_escape::encode_text(&response.status_text),
        response_time = response.response_time_ms,
        size = size,
        method_row = info_row("Method", &response.method),
        url_row = info_row("URL", final_url),
        protocol_row = info_row("Protocol", protocol),
        tls_row = tls_row,
        remote_row = remote_row,
        redirects = redirect_chain_section(&response.redirect_chain),
        request_header_count = response.request_info.request_headers.len(),
        request_headers = header_items(&response.request_info.request_headers),
        response_header_count = response.headers.len(),
        response_headers = header_items(&response.headers),
        binary_badge = binary_badge,
        content_type = content_type,
        body = html_escape::encode_text(body),
    )
}

pub fn status_class(status_code: u16) -> &'static str {
    match status_code {
        300..=399 => "redirect",
        400..=499 => "client-error",
        500..=599 => "server-error",
        _ => "success",
    }
}

fn info_row(key: &str, value: &str) -> String {
    format!(
        r#"<div class="info-item">
          <span class="info-key">{key}:</span>
          <span class="info-value">{value}</span>
        </div>"#,
        key = key,
        value = html_escape::encode_text(value),
    )
}

fn redirect_chain_section(chain: &[String]) -> String {
    if chain.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    for (index, url) in chain.iter().enumerate() {
        items.push_str(&format!(
            r#"<div class="redirect-item">
              <span class="redirect-step">{step}.</span>
              <span class="redirect-url">{url}</span>
            </div>"#,
            step = index + 1,
            url = html_escape::encode_text(url),
        ));
    }

    format!(
        r#"<details class="redirect-chain">
          <summary>Redirect chain ({count})</summary>
          <div class="redirect-list">{items}</div>
        </details>"#,
        count = chain.len(),
        items = items,
    )
}

fn header_items(headers: &BTreeMap<String, String>) -> String {
    let mut items = String::new();
    for (key, value) in headers {
        items.push_str(&format!(
            r#"<div class="header-item">
              <span class="header-key">{key}:</span>
              <span class="header-value">{value}</span>
            </div>"#,
            key = html_escape::encode_text(key),
            value = html_escape::encode_text(value),
        ));
    }
    items
}
