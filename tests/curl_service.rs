use netprobe::curl::{
    CurlService, HttpExchange, RawExchange, binary_preview, is_binary_content_type,
    normalize_request, parse_curl_command, truncate_preview,
};
use netprobe::models::CurlRequest;
use std::collections::BTreeMap;
use std::sync::Arc;

struct MockExchange {
    raw: RawExchange,
}

#[async_trait::async_trait]
impl HttpExchange for MockExchange {
    async fn execute(&self, _request: &CurlRequest) -> Result<RawExchange, String> {
        Ok(self.raw.clone())
    }
}

fn raw_with_body(content_type: &str, body: Option<Vec<u8>>) -> RawExchange {
    RawExchange {
        status_code: 200,
        status_text: "OK".to_string(),
        protocol: "HTTP/1.1".to_string(),
        final_url: "https://example.com/".to_string(),
        content_type: content_type.to_string(),
        body,
        ..RawExchange::default()
    }
}

async fn execute(request: CurlRequest, raw: RawExchange) -> netprobe::models::CurlResponse {
    let service = CurlService::new(Arc::new(MockExchange { raw }));
    service.execute(request).await.expect("execute failed")
}

fn plain_request(url: &str) -> CurlRequest {
    CurlRequest {
        url: url.to_string(),
        ..CurlRequest::default()
    }
}

#[tokio::test]
async fn text_body_passes_through() {
    let response = execute(
        plain_request("https://example.com"),
        raw_with_body("text/html; charset=utf-8", Some(b"<html>hello</html>".to_vec())),
    )
    .await;

    assert!(!response.is_binary);
    assert_eq!(response.body, "<html>hello</html>");
    assert_eq!(response.body_preview, response.body);
    assert_eq!(response.body_size, 18);
    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn binary_content_type_yields_hex_preview() {
    let response = execute(
        plain_request("https://example.com/logo.png"),
        raw_with_body("image/png", Some(vec![0x89, 0x50, 0x4e, 0x47])),
    )
    .await;

    assert!(response.is_binary);
    assert_eq!(response.body, "[binary data - 4 bytes]");
    assert!(response.body_preview.contains("Content-Type: image/png"));
    assert!(response.body_preview.contains("89 50 4e 47"));
}

#[tokio::test]
async fn invalid_utf8_is_binary() {
    let response = execute(
        plain_request("https://example.com"),
        raw_with_body("text/plain", Some(vec![0xff, 0xfe, 0x00])),
    )
    .await;

    assert!(response.is_binary);
    assert!(response.body.starts_with("[binary data"));
}

#[tokio::test]
async fn head_only_skips_the_body() {
    let mut raw = raw_with_body("text/html", None);
    raw.content_length = Some(12345);

    let mut request = plain_request("https://example.com");
    request.head_only = true;

    let response = execute(request, raw).await;
    assert_eq!(response.body, "[head request - headers only]");
    assert_eq!(response.body_size, 12345);
    assert!(!response.is_binary);
}

#[tokio::test]
async fn long_text_is_truncated_for_the_preview() {
    let body = "x".repeat(10_500);
    let response = execute(
        plain_request("https://example.com"),
        raw_with_body("text/plain", Some(body.into_bytes())),
    )
    .await;

    assert_eq!(response.body.len(), 10_500);
    assert!(response.body_preview.ends_with("... [content truncated]"));
    assert!(response.body_preview.len() < response.body.len());
}

#[test]
fn normalize_prepends_https_and_uppercases_method() {
    let mut request = plain_request("example.com/path");
    request.method = "post".to_string();

    let normalized = normalize_request(request).expect("normalize");
    assert_eq!(normalized.url, "https://example.com/path");
    assert_eq!(normalized.method, "POST");
}

#[test]
fn normalize_forces_head_only_for_head() {
    let mut request = plain_request("https://example.com");
    request.method = "head".to_string();

    let normalized = normalize_request(request).expect("normalize");
    assert!(normalized.head_only);
}

#[test]
fn normalize_rejects_empty_and_broken_urls() {
    assert!(normalize_request(plain_request("  ")).is_err());
    assert!(normalize_request(plain_request("https://exa mple.com/%")).is_err());
}

#[test]
fn normalize_defaults_the_timeout() {
    let mut request = plain_request("https://example.com");
    request.timeout_secs = 0;
    assert_eq!(normalize_request(request).expect("normalize").timeout_secs, 30);
}

#[test]
fn parses_a_plain_curl_command() {
    let request = parse_curl_command("curl https://example.com").expect("parse");
    assert_eq!(request.url, "https://example.com");
    assert_eq!(request.method, "GET");
    assert!(request.follow_redirect);
    assert!(request.verify_tls);
}

#[test]
fn parses_method_headers_and_body() {
    let request = parse_curl_command(
        r#"curl -X POST -H "Content-Type: application/json" -d '{"name":"test"}' https://api.example.com/v1"#,
    )
    .expect("parse");

    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "https://api.example.com/v1");
    assert_eq!(
        request.headers.get("Content-Type").map(String::as_str),
        Some("application/json"),
    );
    assert_eq!(request.body, r#"{"name":"test"}"#);
}

#[test]
fn data_flag_switches_get_to_post() {
    let request = parse_curl_command("curl -d name=test https://example.com").expect("parse");
    assert_eq!(request.method, "POST");
    assert_eq!(request.body, "name=test");
}

#[test]
fn head_flag_sets_head_only() {
    let request = parse_curl_command("curl -I example.com").expect("parse");
    assert_eq!(request.method, "HEAD");
    assert!(request.head_only);
    assert_eq!(request.url, "example.com");
}

#[test]
fn insecure_flag_disables_verification() {
    let request = parse_curl_command("curl -k https://self-signed.example.com").expect("parse");
    assert!(!request.verify_tls);
}

#[test]
fn command_without_a_url_is_rejected() {
    let err = parse_curl_command("curl -X POST").expect_err("expected failure");
    assert!(err.contains("no url"));
}

#[test]
fn binary_detection_by_content_type() {
    assert!(is_binary_content_type("image/png"));
    assert!(is_binary_content_type("IMAGE/JPEG"));
    assert!(is_binary_content_type("application/octet-stream"));
    assert!(is_binary_content_type("font/woff2"));
    assert!(!is_binary_content_type("text/html; charset=utf-8"));
    assert!(!is_binary_content_type("application/json"));
}

#[test]
fn hex_preview_frames_offsets_and_ascii() {
    let data: Vec<u8> = (0u8..40).collect();
    let preview = binary_preview(&data, "application/octet-stream");

    assert!(preview.contains("Size: 40 bytes"));
    assert!(preview.contains("0000: 00 01 02 03"));
    assert!(preview.contains("0010: 10 11 12 13"));
    assert!(!preview.ends_with("...\n"));

    let long: Vec<u8> = (0u8..200).collect();
    let long_preview = binary_preview(&long, "application/octet-stream");
    assert!(long_preview.ends_with("...\n"));
    assert!(!long_preview.contains("0040:"));
}

#[test]
fn hex_preview_marks_unprintable_bytes() {
    let preview = binary_preview(b"AB\x00CD", "application/octet-stream");
    assert!(preview.contains("|AB.CD|"));
}

#[test]
fn preview_truncation_respects_char_boundaries() {
    let text = "é".repeat(10_010);
    let preview = truncate_preview(&text, 10_000);
    assert!(preview.ends_with("... [content truncated]"));
    assert_eq!(preview.chars().take_while(|c| *c == 'é').count(), 10_000);
}
