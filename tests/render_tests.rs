use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use trparse::output::render_traceroute;
use trparse::parser::{parse_traceroute, Hop, Probe, Traceroute};

fn fixtures() -> Vec<(String, String)> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    let mut files: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    files.sort();
    files
        .into_iter()
        .map(|path| (path.display().to_string(), fs::read_to_string(&path).unwrap()))
        .collect()
}

#[test]
fn test_rendering_parses_back_to_equal_tree() {
    for (name, text) in fixtures() {
        let first = parse_traceroute(&text).unwrap();
        let rendered = render_traceroute(&first);
        let second = parse_traceroute(&rendered)
            .unwrap_or_else(|e| panic!("{}: rendering did not parse: {}\n{}", name, e, rendered));

        // fixtures carry at most three decimals, so nothing is rounded away
        assert_eq!(second, first, "{}", name);
    }
}

#[test]
fn test_rendering_is_stable_after_one_round() {
    let text = "traceroute to x.net (10.9.9.9), 30 hops max\n 1  gw (10.0.0.1)  0.45678 ms  1.00049 ms *\n";

    let once = parse_traceroute(&render_traceroute(&parse_traceroute(text).unwrap())).unwrap();
    let twice = parse_traceroute(&render_traceroute(&once)).unwrap();

    assert_eq!(twice, once);
    assert_eq!(once.hops[0].probes[0].round_trip_time_ms, Some(0.457));
}

#[test]
fn test_render_full_capture() {
    let mut tr = Traceroute::new("example.com", "93.184.216.34");

    let mut first = Hop::new(1);
    first.add_probe(Probe::reply("gw", "192.168.1.1", 0.456));
    first.add_probe(Probe::with_rtt(0.5));
    tr.add_hop(first);

    let mut second = Hop::new(12);
    second.add_probe(Probe::reply("ae1.edge.net", "4.68.1.1", 12.345).with_asn(Some(3356)).with_annotation("!H"));
    second.add_probe(Probe::timeout());
    tr.add_hop(second);

    let expected = "Traceroute for example.com (93.184.216.34)\n\
                    \n  1 gw (192.168.1.1) 0.456 ms \n\
                    \x20   gw (192.168.1.1) 0.500 ms \n\
                    \n 12 [AS3356] ae1.edge.net (4.68.1.1) 12.345 ms !H\n\
                    \x20   *\n\
                    \n";

    assert_eq!(render_traceroute(&tr), expected);
}

#[test]
fn test_timeout_annotation_survives_round_trip() {
    let text = "traceroute to x.net (10.9.9.9)\n 4  * !X * *\n";
    let tr = parse_traceroute(text).unwrap();
    let again = parse_traceroute(&render_traceroute(&tr)).unwrap();

    assert_eq!(again.hops[0].probes[0].annotation, "!X");
    assert_eq!(again, tr);
}
