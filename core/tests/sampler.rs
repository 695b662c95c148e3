//! Peer sampler tests — dedup, ranking, truncation.

use peerbench_core::report::RawFinancialReport;
use peerbench_core::sampler::sample;

fn candidate(cert: &str, state: &str) -> RawFinancialReport {
    RawFinancialReport {
        cert: cert.into(),
        stalp: state.into(),
        ..Default::default()
    }
}

fn certs(peers: &[RawFinancialReport]) -> Vec<&str> {
    peers.iter().map(|p| p.cert.as_str()).collect()
}

/// Input arrives latest-report-first, so the first occurrence of an
/// identifier is the record to keep.
#[test]
fn duplicate_identifiers_collapse_to_first_occurrence() {
    let newer = RawFinancialReport {
        cert: "100".into(),
        repdte: "20250331".into(),
        ..Default::default()
    };
    let older = RawFinancialReport {
        cert: "100".into(),
        repdte: "20241231".into(),
        ..Default::default()
    };

    let peers = sample(vec![newer, older], None, 20);

    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0].repdte, "20250331");
}

/// A record with no identifier cannot be deduplicated and is dropped.
#[test]
fn records_without_identifier_are_dropped() {
    let peers = sample(
        vec![candidate("", "VA"), candidate("7", "NC")],
        None,
        20,
    );
    assert_eq!(certs(&peers), vec!["7"]);
}

/// Same state first, then adjacent, then two-hop, then everyone else.
#[test]
fn peers_rank_by_proximity_to_subject() {
    let peers = sample(
        vec![
            candidate("1", "CA"),
            candidate("2", "PA"),
            candidate("3", "MD"),
            candidate("4", "VA"),
        ],
        Some("VA"),
        20,
    );
    assert_eq!(certs(&peers), vec!["4", "3", "2", "1"]);
}

/// The proximity sort is stable: candidates in the same class keep their
/// dedup order.
#[test]
fn proximity_ties_keep_input_order() {
    let peers = sample(
        vec![
            candidate("ny", "NY"),
            candidate("ca", "CA"),
            candidate("md1", "MD"),
            candidate("md2", "MD"),
        ],
        Some("VA"),
        20,
    );
    // Both MD banks outrank the national pair; each pair keeps its order.
    assert_eq!(certs(&peers), vec!["md1", "md2", "ny", "ca"]);
}

/// Without a subject state there is nothing to rank by.
#[test]
fn no_subject_state_keeps_dedup_order() {
    let input = vec![
        candidate("1", "CA"),
        candidate("2", "VA"),
        candidate("3", "TX"),
    ];

    let unranked = sample(input.clone(), None, 20);
    assert_eq!(certs(&unranked), vec!["1", "2", "3"]);

    let blank = sample(input, Some(""), 20);
    assert_eq!(certs(&blank), vec!["1", "2", "3"]);
}

/// The cap applies after ranking, so it keeps the closest peers.
#[test]
fn result_is_capped_at_max_peers() {
    let mut input = vec![candidate("far1", "CA"), candidate("far2", "OR")];
    for i in 0..20 {
        input.push(candidate(&format!("va{i}"), "VA"));
    }

    let peers = sample(input, Some("VA"), 20);

    assert_eq!(peers.len(), 20);
    assert!(peers.iter().all(|p| p.stalp == "VA"));
}

#[test]
fn small_and_empty_inputs_pass_through() {
    let few = sample(vec![candidate("1", "VA")], Some("VA"), 20);
    assert_eq!(few.len(), 1);

    let none = sample(Vec::new(), Some("VA"), 20);
    assert!(none.is_empty());
}
