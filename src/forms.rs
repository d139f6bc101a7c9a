use crate::config;
use crate::curl::{DEFAULT_TIMEOUT_SECS, parse_curl_command};
use crate::models::{CurlRequest, DigRequest};
use serde::Deserialize;
use serde::de::{self, Deserializer};
use std::collections::BTreeMap;

#[derive(Deserialize)]
pub struct DigForm {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub server: Option<String>,
}

impl DigForm {
    pub fn into_request(self) -> DigRequest {
        let record_type = self
            .record_type
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| config::DEFAULT_RECORD_TYPE.to_string());
        let server = self
            .server
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(config::default_dns_server);

        DigRequest {
            domain: self.domain.trim().to_string(),
            record_type,
            server,
        }
    }
}

/// Either a structured request or a pasted curl command; a non-empty
/// `curl_command` wins over the individual fields.
#[derive(Deserialize)]
pub struct CurlForm {
    #[serde(default)]
    pub curl_command: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub headers_json: Option<String>,
    #[serde(default)]
    pub timeout: Option<String>,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub follow_redirect: bool,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub verify_tls: bool,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub head_only: bool,
}

impl CurlForm {
    pub fn into_request(self) -> Result<CurlRequest, String> {
        if let Some(command) = self
            .curl_command
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            return parse_curl_command(command)
                .map_err(|err| format!("failed to parse curl command: {err}"));
        }

        Ok(CurlRequest {
            url: self.url.unwrap_or_default().trim().to_string(),
            method: self.method.unwrap_or_default(),
            headers: parse_headers_json(self.headers_json.as_deref()),
            body: self.body.unwrap_or_default(),
            timeout_secs: self
                .timeout
                .and_then(|value| value.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            follow_redirect: self.follow_redirect,
            verify_tls: self.verify_tls,
            head_only: self.head_only,
        })
    }
}

/// Unparseable input degrades to no extra headers, matching the form's
/// free-text nature.
pub fn parse_headers_json(raw: Option<&str>) -> BTreeMap<String, String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| serde_json::from_str(value).ok())
        .unwrap_or_default()
}

pub fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct CheckboxVisitor;

    impl<'de> de::Visitor<'de> for CheckboxVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a checkbox value or a bool")
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(false)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(false)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(matches!(value, "on" | "true" | "1"))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            self.visit_str(&value)
        }
    }

    deserializer.deserialize_any(CheckboxVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn checkbox_accepts_form_values() {
        let form: CurlForm =
            serde_json::from_value(json!({ "follow_redirect": "on", "verify_tls": "0" }))
                .expect("form");
        assert!(form.follow_redirect);
        assert!(!form.verify_tls);
        assert!(!form.head_only);
    }

    #[test]
    fn headers_json_falls_back_to_empty() {
        assert!(parse_headers_json(None).is_empty());
        assert!(parse_headers_json(Some("not json")).is_empty());

        let headers = parse_headers_json(Some(r#"{"Accept": "text/html"}"#));
        assert_eq!(headers.get("Accept").map(String::as_str), Some("text/html"));
    }

    #[test]
    fn dig_form_applies_defaults() {
        let form = DigForm {
            domain: " example.com ".to_string(),
            record_type: Some("".to_string()),
            server: None,
        };
        let request = form.into_request();
        assert_eq!(request.domain, "example.com");
        assert_eq!(request.record_type, "A");
        assert_eq!(request.server, "8.8.8.8:53");
    }
}
