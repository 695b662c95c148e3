//! Peer sampling — deduplicate, rank by proximity, truncate.

use crate::report::RawFinancialReport;
use crate::states;
use crate::types::CertId;
use std::collections::HashSet;

/// Reduce a raw candidate list to a bounded, ordered peer set.
///
/// Candidates must arrive latest-report-first (the upstream sort
/// contract), so keeping the first occurrence of each institution
/// identifier keeps its most recent report. Records without an identifier
/// cannot be deduplicated and are dropped.
///
/// With a subject state the survivors are stable-sorted by proximity
/// class, ties keeping their dedup order; without one the dedup order
/// stands. The result is capped at `max_peers`. An empty result means
/// "no peers available", never an error.
pub fn sample(
    candidates: Vec<RawFinancialReport>,
    subject_state: Option<&str>,
    max_peers: usize,
) -> Vec<RawFinancialReport> {
    let mut seen: HashSet<CertId> = HashSet::new();
    let mut peers: Vec<RawFinancialReport> = Vec::new();

    for candidate in candidates {
        if candidate.cert.is_empty() {
            continue;
        }
        if seen.insert(candidate.cert.clone()) {
            peers.push(candidate);
        }
    }

    if let Some(subject) = subject_state.filter(|s| !s.is_empty()) {
        peers.sort_by_key(|peer| states::proximity(subject, &peer.stalp));
    }

    peers.truncate(max_peers);
    peers
}
