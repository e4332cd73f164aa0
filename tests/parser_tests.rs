use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use trparse::parser::{parse_traceroute, read_traceroute, Hop, Probe, Traceroute};
use trparse::ParseError;

const HEADER: &str = "traceroute to example.com (93.184.216.34), 30 hops max, 60 byte packets\n";

fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name);
    fs::read_to_string(path).unwrap()
}

fn single_hop(line: &str) -> Hop {
    let tr = parse_traceroute(&format!("{}{}\n", HEADER, line)).unwrap();
    assert_eq!(tr.hops.len(), 1);
    tr.hops.into_iter().next().unwrap()
}

#[test]
fn test_single_reply_hop() {
    let hop = single_hop(" 1  192.168.1.1 (192.168.1.1)  0.456 ms");

    assert_eq!(hop.index, 1);
    assert_eq!(
        hop.probes,
        vec![Probe {
            autonomous_system_number: None,
            host_name: Some("192.168.1.1".to_string()),
            address: Some("192.168.1.1".to_string()),
            round_trip_time_ms: Some(0.456),
            annotation: String::new(),
        }]
    );
}

#[test]
fn test_all_timeout_hop() {
    let hop = single_hop(" 3  * * *");

    assert_eq!(hop.index, 3);
    assert_eq!(hop.probes.len(), 3);
    for probe in &hop.probes {
        assert_eq!(probe, &Probe::timeout());
    }
}

#[test]
fn test_asn_annotated_probe() {
    let hop = single_hop(" 5  [AS3356] ae1.edge.net (4.68.1.1)  12.345 ms !H");

    assert_eq!(
        hop.probes[0],
        Probe {
            autonomous_system_number: Some(3356),
            host_name: Some("ae1.edge.net".to_string()),
            address: Some("4.68.1.1".to_string()),
            round_trip_time_ms: Some(12.345),
            annotation: "!H".to_string(),
        }
    );
}

#[test]
fn test_stray_symbol_aborts_parse() {
    let text = format!("{} 1  gw (10.0.0.1)  1.0 ms\n 2  gw2 (10.0.0.2)  2.0 ms # 3.0 ms\n", HEADER);
    let err = parse_traceroute(&text).unwrap_err();

    assert!(err.is_unexpected_token());
    match err {
        ParseError::UnexpectedToken { hop, token, .. } => {
            assert_eq!(hop, 2);
            assert_eq!(token, "#");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_header() {
    let err = parse_traceroute(" 1  gw (10.0.0.1)  1.0 ms\n").unwrap_err();
    assert!(matches!(err, ParseError::MissingHeader));
}

#[test]
fn test_header_only_capture_has_no_hops() {
    let tr = parse_traceroute(HEADER).unwrap();
    assert_eq!(tr, Traceroute::new("example.com", "93.184.216.34"));
}

#[test]
fn test_linux_capture() {
    let tr = parse_traceroute(&load_fixture("linux_ipv4.txt")).unwrap();

    assert_eq!(tr.destination_name, "example.com");
    assert_eq!(tr.destination_address, "93.184.216.34");
    assert_eq!(
        tr.hops.iter().map(|h| h.index).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );

    // second responder in hop 2 is explicit, the others carry forward
    let hop2 = &tr.hops[1];
    assert_eq!(hop2.probes[1].address.as_deref(), Some("10.0.0.1"));
    assert_eq!(hop2.probes[2].address.as_deref(), Some("10.0.0.2"));

    let hop4 = &tr.hops[3];
    assert_eq!(hop4.probes[0].annotation, "!H");
    assert_eq!(hop4.probes[1].annotation, "!H");
    assert_eq!(hop4.probes[1].host_name.as_deref(), Some("ae1.edge.net"));
    assert!(hop4.probes[2].is_timeout());
    assert_eq!(hop4.probes[2].annotation, "");
}

#[test]
fn test_asn_capture() {
    let tr = parse_traceroute(&load_fixture("asn_per_probe.txt")).unwrap();

    let asns: Vec<Option<u32>> = tr.hops[2]
        .probes
        .iter()
        .map(|p| p.autonomous_system_number)
        .collect();
    assert_eq!(asns, vec![Some(3356), Some(3356), Some(3356)]);
    assert_eq!(tr.hops[2].probes[1].host_name.as_deref(), Some("ae2.edge.net"));
    assert!(tr.hops[2].probes[2].is_timeout());

    // unknown AS marker
    assert_eq!(tr.hops[0].probes[0].autonomous_system_number, None);

    // hop-level ASN in the legacy layout reaches every probe
    assert!(tr.hops[1]
        .probes
        .iter()
        .all(|p| p.autonomous_system_number == Some(7922)));
}

#[test]
fn test_ipv6_capture() {
    let tr = parse_traceroute(&load_fixture("ipv6.txt")).unwrap();

    assert_eq!(tr.destination_address, "2607:f8b0:4005:80a::200e");
    assert_eq!(tr.hops[0].probes[2].address.as_deref(), Some("2001:db8::1"));
    assert_eq!(tr.hops[2].probes[0].autonomous_system_number, Some(15169));
}

#[test]
fn test_multiline_hop_capture() {
    let tr = parse_traceroute(&load_fixture("bsd_multiline.txt")).unwrap();

    assert_eq!(tr.destination_name, "example.org");
    let hop2 = tr.hop(2).unwrap();
    let addresses: Vec<&str> = hop2
        .probes
        .iter()
        .filter_map(|p| p.address.as_deref())
        .collect();
    assert_eq!(addresses, vec!["10.10.0.1", "10.10.0.5", "10.10.0.1"]);

    let hop3 = tr.hop(3).unwrap();
    assert_eq!(hop3.probes[0], Probe::timeout());
    assert_eq!(hop3.probes[2].host_name.as_deref(), Some("100ge1-2.core1.nyc4.he.net"));
}

#[test]
fn test_numeric_capture() {
    let tr = parse_traceroute(&load_fixture("numeric.txt")).unwrap();

    assert_eq!(tr.hops[0].probes[0], Probe::reply("192.168.1.1", "192.168.1.1", 0.456));
    assert_eq!(tr.hops[1].probes[2].address.as_deref(), Some("10.0.0.1"));
    assert_eq!(tr.hops[2].probes[0].annotation, "!N");
}

#[test]
fn test_decreasing_indices_keep_encounter_order() {
    let text = format!("{} 2  *\n 1  *\n 1  *\n", HEADER);
    let tr = parse_traceroute(&text).unwrap();
    assert_eq!(
        tr.hops.iter().map(|h| h.index).collect::<Vec<_>>(),
        vec![2, 1, 1]
    );
}

#[test]
fn test_read_traceroute_from_reader() {
    let text = load_fixture("linux_ipv4.txt");
    let from_reader = read_traceroute(text.as_bytes()).unwrap();
    assert_eq!(from_reader, text.parse::<Traceroute>().unwrap());
}

#[test]
fn test_read_traceroute_invalid_utf8() {
    let bytes: &[u8] = &[0xff, 0xfe, 0x00];
    assert!(matches!(read_traceroute(bytes), Err(ParseError::Io(_))));
}

#[test]
fn test_every_fixture_parses() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let text = fs::read_to_string(&path).unwrap();
        let tr = parse_traceroute(&text)
            .unwrap_or_else(|e| panic!("{} failed: {}", path.display(), e));
        assert!(tr.hops.iter().all(|h| !h.probes.is_empty()));
    }
}
