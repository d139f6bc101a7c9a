use crate::models::{DigRequest, DnsRecord};
use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::rr::{RData, Record, RecordType};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

const QUERY_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_DNS_PORT: u16 = 53;

#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Result<Vec<Record>, String>;
}

/// Queries exactly the requested name server over UDP; a name that exists
/// but has no records of the requested type is an empty answer, not an error.
pub struct ResolverExchange;

#[async_trait]
impl DnsExchange for ResolverExchange {
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Result<Vec<Record>, String> {
        let mut config = ResolverConfig::new();
        config.add_name_server(NameServerConfig::new(server, Protocol::Udp));

        let mut opts = ResolverOpts::default();
        opts.timeout = QUERY_TIMEOUT;

        let resolver = TokioAsyncResolver::tokio(config, opts);
        match resolver.lookup(domain, record_type).await {
            Ok(lookup) => Ok(lookup.record_iter().cloned().collect()),
            Err(err) => match err.kind() {
                ResolveErrorKind::NoRecordsFound { .. } => Ok(Vec::new()),
                _ => Err(format!("dns query failed: {err}")),
            },
        }
    }
}

#[derive(Clone)]
pub struct DigService {
    exchange: Arc<dyn DnsExchange>,
}

impl DigService {
    pub fn new(exchange: Arc<dyn DnsExchange>) -> Self {
        Self { exchange }
    }

    pub async fn query(&self, request: &DigRequest) -> Result<Vec<DnsRecord>, String> {
        let record_type = parse_record_type(&request.record_type)?;
        let server = parse_server_addr(&request.server)?;

        let records = self
            .exchange
            .query(request.domain.trim(), record_type, server)
            .await?;

        Ok(records.iter().filter_map(record_to_dns_record).collect())
    }
}

pub fn parse_record_type(raw: &str) -> Result<RecordType, String> {
    let normalized = raw.trim().to_ascii_uppercase();
    normalized
        .parse::<RecordType>()
        .map_err(|_| format!("unsupported record type: {raw}"))
}

/// Accepts `ip` or `ip:port`; a bare address gets the standard DNS port.
pub fn parse_server_addr(raw: &str) -> Result<SocketAddr, String> {
    let trimmed = raw.trim();
    if let Ok(addr) = trimmed.parse::<SocketAddr>() {
        return Ok(addr);
    }
    if let Ok(ip) = trimmed.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
    }
    Err(format!("name server must be ip or ip:port, got: {raw}"))
}

pub fn record_to_dns_record(record: &Record) -> Option<DnsRecord> {
    let data = record.data()?;
    let value = match data {
        RData::A(v) => v.0.to_string(),
        RData::AAAA(v) => v.0.to_string(),
        RData::CNAME(v) => v.0.to_string(),
        RData::NS(v) => v.0.to_string(),
        RData::PTR(v) => v.0.to_string(),
        RData::MX(v) => format!("{} {}", v.preference(), v.exchange()),
        RData::TXT(v) => {
            let segments: Vec<String> = v
                .txt_data()
                .iter()
                .map(|segment| String::from_utf8_lossy(segment).to_string())
                .collect();
            segments.join(" ")
        }
        RData::SOA(v) => format!(
            "{} {} {} {} {} {} {}",
            v.mname(),
            v.rname(),
            v.serial(),
            v.refresh(),
            v.retry(),
            v.expire(),
            v.minimum(),
        ),
        RData::SRV(v) => format!(
            "{} {} {} {}",
            v.priority(),
            v.weight(),
            v.port(),
            v.target(),
        ),
        other => other.to_string(),
    };

    Some(DnsRecord {
        name: record.name().to_string(),
        record_type: record.record_type().to_string(),
        ttl: record.ttl(),
        value,
    })
}
