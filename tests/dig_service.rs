use netprobe::dig::{DigService, DnsExchange, parse_record_type, parse_server_addr};
use netprobe::models::DigRequest;

use hickory_resolver::proto::rr::rdata::{A, AAAA, CNAME, MX, SOA, SRV, TXT};
use hickory_resolver::proto::rr::{Name, RData, Record, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

struct MockExchange {
    records: Vec<Record>,
}

#[async_trait::async_trait]
impl DnsExchange for MockExchange {
    async fn query(
        &self,
        _domain: &str,
        _record_type: RecordType,
        _server: SocketAddr,
    ) -> Result<Vec<Record>, String> {
        Ok(self.records.clone())
    }
}

fn name(raw: &str) -> Name {
    Name::from_str(raw).expect("name")
}

fn record(owner: &str, ttl: u32, rdata: RData) -> Record {
    Record::from_rdata(name(owner), ttl, rdata)
}

fn request(record_type: &str) -> DigRequest {
    DigRequest {
        domain: "example.com".to_string(),
        record_type: record_type.to_string(),
        server: "8.8.8.8:53".to_string(),
    }
}

async fn run(records: Vec<Record>, record_type: &str) -> Vec<netprobe::models::DnsRecord> {
    let service = DigService::new(Arc::new(MockExchange { records }));
    service.query(&request(record_type)).await.expect("query failed")
}

#[tokio::test]
async fn maps_address_records() {
    let results = run(
        vec![
            record("example.com.", 300, RData::A(A::from(Ipv4Addr::new(93, 184, 216, 34)))),
            record(
                "example.com.",
                600,
                RData::AAAA(AAAA::from(Ipv6Addr::from_str("2606:2800:220:1::1").expect("ipv6"))),
            ),
        ],
        "A",
    )
    .await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "example.com.");
    assert_eq!(results[0].record_type, "A");
    assert_eq!(results[0].ttl, 300);
    assert_eq!(results[0].value, "93.184.216.34");
    assert_eq!(results[1].record_type, "AAAA");
    assert_eq!(results[1].value, "2606:2800:220:1::1");
}

#[tokio::test]
async fn maps_mx_with_preference() {
    let results = run(
        vec![record(
            "example.com.",
            3600,
            RData::MX(MX::new(10, name("mail.example.com."))),
        )],
        "MX",
    )
    .await;

    assert_eq!(results[0].value, "10 mail.example.com.");
}

#[tokio::test]
async fn joins_txt_segments_with_spaces() {
    let results = run(
        vec![record(
            "example.com.",
            60,
            RData::TXT(TXT::new(vec!["v=spf1".to_string(), "-all".to_string()])),
        )],
        "TXT",
    )
    .await;

    assert_eq!(results[0].value, "v=spf1 -all");
}

#[tokio::test]
async fn formats_soa_fields_in_order() {
    let soa = SOA::new(
        name("ns1.example.com."),
        name("hostmaster.example.com."),
        2024010101,
        7200,
        3600,
        1209600,
        300,
    );
    let results = run(vec![record("example.com.", 3600, RData::SOA(soa))], "SOA").await;

    assert_eq!(
        results[0].value,
        "ns1.example.com. hostmaster.example.com. 2024010101 7200 3600 1209600 300",
    );
}

#[tokio::test]
async fn formats_srv_fields_in_order() {
    let srv = SRV::new(5, 10, 5060, name("sip.example.com."));
    let results = run(
        vec![record("_sip._udp.example.com.", 120, RData::SRV(srv))],
        "SRV",
    )
    .await;

    assert_eq!(results[0].value, "5 10 5060 sip.example.com.");
}

#[tokio::test]
async fn maps_cname_target() {
    let results = run(
        vec![record(
            "www.example.com.",
            300,
            RData::CNAME(CNAME(name("example.com."))),
        )],
        "CNAME",
    )
    .await;

    assert_eq!(results[0].value, "example.com.");
}

#[tokio::test]
async fn empty_answer_is_not_an_error() {
    let results = run(Vec::new(), "A").await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn rejects_unknown_record_type() {
    let service = DigService::new(Arc::new(MockExchange { records: Vec::new() }));
    let err = service
        .query(&request("NOPE"))
        .await
        .expect_err("expected failure");
    assert!(err.contains("unsupported record type"));
}

#[test]
fn parses_record_type_case_insensitively() {
    assert_eq!(parse_record_type("a").expect("type"), RecordType::A);
    assert_eq!(parse_record_type(" txt ").expect("type"), RecordType::TXT);
    assert!(parse_record_type("BOGUS").is_err());
}

#[test]
fn server_addr_defaults_the_port() {
    assert_eq!(
        parse_server_addr("1.1.1.1").expect("addr"),
        "1.1.1.1:53".parse::<SocketAddr>().expect("expected addr"),
    );
    assert_eq!(
        parse_server_addr("8.8.8.8:5353").expect("addr"),
        "8.8.8.8:5353".parse::<SocketAddr>().expect("expected addr"),
    );
    assert_eq!(
        parse_server_addr("[2001:4860:4860::8888]:53").expect("addr"),
        "[2001:4860:4860::8888]:53".parse::<SocketAddr>().expect("expected addr"),
    );
    assert!(parse_server_addr("dns.example.com").is_err());
}
