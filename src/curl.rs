use crate::models::{CurlRequest, CurlResponse, RequestInfo};
use async_trait::async_trait;
use regex::Regex;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::redirect;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};

const MAX_REDIRECTS: usize = 10;
const PREVIEW_CHAR_LIMIT: usize = 10_000;
const HEX_PREVIEW_BYTES: usize = 64;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("netprobe/", env!("CARGO_PKG_VERSION"));

/// Wire-level outcome of one HTTP exchange, before body interpretation.
#[derive(Debug, Clone, Default)]
pub struct RawExchange {
    pub status_code: u16,
    pub status_text: String,
    pub protocol: String,
    pub final_url: String,
    pub remote_addr: Option<String>,
    pub tls_version: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub request_headers: BTreeMap<String, String>,
    pub redirect_chain: Vec<String>,
    pub content_length: Option<u64>,
    pub content_type: String,
    /// `None` for head-only requests, where the body is never read.
    pub body: Option<Vec<u8>>,
    pub response_time_ms: u64,
}

#[async_trait]
pub trait HttpExchange: Send + Sync {
    async fn execute(&self, request: &CurlRequest) -> Result<RawExchange, String>;
}

#[derive(Clone)]
pub struct CurlService {
    exchange: Arc<dyn HttpExchange>,
}

impl CurlService {
    pub fn new(exchange: Arc<dyn HttpExchange>) -> Self {
        Self { exchange }
    }

    pub async fn execute(&self, request: CurlRequest) -> Result<CurlResponse, String> {
        let request = normalize_request(request)?;
        let raw = self.exchange.execute(&request).await?;
        Ok(build_response(&request, raw))
    }
}

/// Builds a fresh client per request: redirect policy and certificate
/// verification are request-scoped options here.
pub struct ReqwestExchange;

#[async_trait]
impl HttpExchange for ReqwestExchange {
    async fn execute(&self, request: &CurlRequest) -> Result<RawExchange, String> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|_| format!("invalid http method: {}", request.method))?;

        let chain: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let policy = if request.follow_redirect {
            let chain = Arc::clone(&chain);
            redirect::Policy::custom(move |attempt| {
                if let Ok(mut hops) = chain.lock() {
                    hops.push(attempt.url().to_string());
                }
                if attempt.previous().len() > MAX_REDIRECTS {
                    attempt.error("too many redirects")
                } else {
                    attempt.follow()
                }
            })
        } else {
            redirect::Policy::none()
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(request.timeout_secs))
            .danger_accept_invalid_certs(!request.verify_tls)
            .redirect(policy)
            .build()
            .map_err(|err| format!("failed to build http client: {err}"))?;

        let mut headers = HeaderMap::new();
        for (key, value) in &request.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| format!("invalid header name: {key}"))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| format!("invalid value for header {key}"))?;
            headers.insert(name, value);
        }
        if !headers.contains_key(USER_AGENT) {
            headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        }

        let mut builder = client.request(method, &request.url).headers(headers);
        if !request.body.is_empty() && !request.head_only {
            builder = builder.body(request.body.clone());
        }
        let built = builder
            .build()
            .map_err(|err| format!("failed to build request: {err}"))?;
        let request_headers = header_map_to_btree(built.headers());

        let started = Instant::now();
        let response = client
            .execute(built)
            .await
            .map_err(|err| format!("request failed: {err}"))?;
        let response_time_ms = started.elapsed().as_millis() as u64;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).to_string())
            .unwrap_or_default();

        let mut raw = RawExchange {
            status_code: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            protocol: format!("{:?}", response.version()),
            final_url: response.url().to_string(),
            remote_addr: response.remote_addr().map(|addr| addr.to_string()),
            // Not surfaced by the client; stays absent on the wire.
            tls_version: None,
            headers: header_map_to_btree(response.headers()),
            request_headers,
            redirect_chain: chain.lock().map(|hops| hops.clone()).unwrap_or_default(),
            content_length: response.content_length(),
            content_type,
            body: None,
            response_time_ms,
        };

        if !request.head_only {
            let bytes = response
                .bytes()
                .await
                .map_err(|err| format!("failed to read response body: {err}"))?;
            raw.body = Some(bytes.to_vec());
        }

        Ok(raw)
    }
}

fn header_map_to_btree(map: &HeaderMap) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();
    for key in map.keys() {
        let joined = map
            .get_all(key)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        result.insert(key.as_str().to_string(), joined);
    }
    result
}

pub fn normalize_request(mut request: CurlRequest) -> Result<CurlRequest, String> {
    request.url = request.url.trim().to_string();
    if request.url.is_empty() {
        return Err("url must not be empty".to_string());
    }
    if !request.url.contains("://") {
        request.url = format!("https://{}", request.url);
    }
    reqwest::Url::parse(&request.url).map_err(|err| format!("invalid url: {err}"))?;

    request.method = request.method.trim().to_ascii_uppercase();
    if request.method.is_empty() {
        request.method = "GET".to_string();
    }
    if request.method == "HEAD" {
        request.head_only = true;
    }
    if request.timeout_secs == 0 {
        request.timeout_secs = DEFAULT_TIMEOUT_SECS;
    }

    Ok(request)
}

pub fn build_response(request: &CurlRequest, raw: RawExchange) -> CurlResponse {
    let (body, body_preview, body_size, is_binary) = match raw.body {
        Some(bytes) => {
            let body_size = bytes.len() as u64;
            let is_binary = is_binary_content_type(&raw.content_type)
                || std::str::from_utf8(&bytes).is_err();
            if is_binary {
                (
                    format!("[binary data - {} bytes]", bytes.len()),
                    binary_preview(&bytes, &raw.content_type),
                    body_size,
                    true,
                )
            } else {
                let text = String::from_utf8_lossy(&bytes).to_string();
                let preview = truncate_preview(&text, PREVIEW_CHAR_LIMIT);
                (text, preview, body_size, false)
            }
        }
        None => {
            let placeholder = "[head request - headers only]".to_string();
            (
                placeholder.clone(),
                placeholder,
                raw.content_length.unwrap_or(0),
                false,
            )
        }
    };

    CurlResponse {
        url: request.url.clone(),
        method: request.method.clone(),
        status_code: raw.status_code,
        status_text: raw.status_text,
        headers: raw.headers,
        body,
        body_preview,
        body_size,
        is_binary,
        response_time_ms: raw.response_time_ms,
        content_length: raw.content_length,
        content_type: raw.content_type,
        redirect_chain: raw.redirect_chain,
        request_info: RequestInfo {
            final_url: raw.final_url,
            remote_addr: raw.remote_addr,
            protocol: raw.protocol,
            tls_version: raw.tls_version,
            request_headers: raw.request_headers,
        },
        error: None,
    }
}

pub fn is_binary_content_type(content_type: &str) -> bool {
    const BINARY_PREFIXES: [&str; 10] = [
        "image/",
        "audio/",
        "video/",
        "application/octet-stream",
        "application/pdf",
        "application/zip",
        "application/gzip",
        "application/x-",
        "font/",
        "model/",
    ];

    let normalized = content_type.to_ascii_lowercase();
    BINARY_PREFIXES
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
}

pub fn binary_preview(data: &[u8], content_type: &str) -> String {
    let mut preview = format!("Content-Type: {content_type}\nSize: {} bytes\n\n", data.len());
    preview.push_str("Hex preview (first 64 bytes):\n");

    let max = data.len().min(HEX_PREVIEW_BYTES);
    for offset in (0..max).step_by(16) {
        let end = (offset + 16).min(max);

        let mut hex = String::new();
        for byte in &data[offset..end] {
            hex.push_str(&format!("{byte:02x} "));
        }

        let ascii: String = data[offset..end]
            .iter()
            .map(|byte| {
                if (0x20..=0x7e).contains(byte) {
                    *byte as char
                } else {
                    '.'
                }
            })
            .collect();

        preview.push_str(&format!("{offset:04x}: {hex:<48} |{ascii}|\n"));
    }

    if data.len() > max {
        preview.push_str("...\n");
    }

    preview
}

pub fn truncate_preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}\n\n... [content truncated]", &text[..idx]),
        None => text.to_string(),
    }
}

/// Parses a curl invocation into a request. Quoted arguments are honored;
/// unknown flags are skipped.
pub fn parse_curl_command(input: &str) -> Result<CurlRequest, String> {
    let mut request = CurlRequest::default();

    let trimmed = input.trim();
    let rest = match trimmed.strip_prefix("curl") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => trimmed,
    };

    let tokens = tokenize(rest);
    let mut iter = tokens.into_iter();
    while let Some(token) = iter.next() {
        match token.as_str() {
            "-I" | "--head" => {
                request.method = "HEAD".to_string();
                request.head_only = true;
            }
            "-X" | "--request" => {
                if let Some(method) = iter.next() {
                    request.method = method.to_ascii_uppercase();
                }
            }
            "-H" | "--header" => {
                if let Some(header) = iter.next() {
                    if let Some((key, value)) = header.split_once(':') {
                        let key = key.trim();
                        if !key.is_empty() {
                            request
                                .headers
                                .insert(key.to_string(), value.trim().to_string());
                        }
                    }
                }
            }
            "-d" | "--data" | "--data-raw" => {
                if let Some(body) = iter.next() {
                    request.body = body;
                    if request.method == "GET" {
                        request.method = "POST".to_string();
                    }
                }
            }
            "-k" | "--insecure" => {
                request.verify_tls = false;
            }
            "-L" | "--location" => {
                request.follow_redirect = true;
            }
            other => {
                if !other.starts_with('-') && request.url.is_empty() {
                    request.url = other.to_string();
                }
            }
        }
    }

    if request.url.is_empty() {
        return Err("no url found in curl command".to_string());
    }

    Ok(request)
}

fn tokenize(input: &str) -> Vec<String> {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    let re = TOKEN_RE
        .get_or_init(|| Regex::new(r#""([^"]*)"|'([^']*)'|(\S+)"#).expect("token regex"));

    re.captures_iter(input)
        .filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}
