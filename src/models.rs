use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigRequest {
    pub domain: String,
    pub record_type: String,
    pub server: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DigResponse {
    pub domain: String,
    pub record_type: String,
    pub server: String,
    pub results: Vec<DnsRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurlRequest {
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: String,
    pub timeout_secs: u64,
    pub follow_redirect: bool,
    pub verify_tls: bool,
    pub head_only: bool,
}

impl Default for CurlRequest {
    fn default() -> Self {
        CurlRequest {
            url: String::new(),
            method: "GET".to_string(),
            headers: BTreeMap::new(),
            body: String::new(),
            timeout_secs: 30,
            follow_redirect: true,
            verify_tls: true,
            head_only: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RequestInfo {
    pub final_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_addr: Option<String>,
    pub protocol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_version: Option<String>,
    pub request_headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CurlResponse {
    pub url: String,
    pub method: String,
    pub status_code: u16,
    pub status_text: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub body_preview: String,
    pub body_size: u64,
    pub is_binary: bool,
    pub response_time_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_length: Option<u64>,
    pub content_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redirect_chain: Vec<String>,
    pub request_info: RequestInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CurlResponse {
    pub fn from_error(message: String) -> Self {
        CurlResponse {
            error: Some(message),
            ..CurlResponse::default()
        }
    }
}
