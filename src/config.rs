use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DNS_SERVER: &str = "8.8.8.8:53";
pub const DEFAULT_RECORD_TYPE: &str = "A";

pub fn bind_addr() -> SocketAddr {
    let raw = std::env::var("NETPROBE_ADDR").unwrap_or_else(|_| "0.0.0.0:7788".to_string());
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!("invalid NETPROBE_ADDR {raw:?}, falling back to 0.0.0.0:7788");
        SocketAddr::from(([0, 0, 0, 0], 7788))
    })
}

pub fn web_dir() -> PathBuf {
    std::env::var("NETPROBE_WEB_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("web"))
}

pub fn default_dns_server() -> String {
    std::env::var("NETPROBE_DNS_SERVER").unwrap_or_else(|_| DEFAULT_DNS_SERVER.to_string())
}
