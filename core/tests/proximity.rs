//! Geographic proximity scoring tests.

use peerbench_core::states::{neighbors, proximity, Proximity};

#[test]
fn same_state_scores_zero() {
    assert_eq!(proximity("VA", "VA"), Proximity::SameState);
    assert_eq!(proximity("VA", "VA").score(), 0);
}

#[test]
fn direct_neighbors_score_one() {
    assert_eq!(proximity("VA", "MD"), Proximity::Adjacent);
    assert_eq!(proximity("VA", "NC"), Proximity::Adjacent);
    assert_eq!(proximity("DC", "MD"), Proximity::Adjacent);
}

/// PA borders no Virginia neighbor state line directly but is one hop past
/// MD and WV; SC sits one hop past NC.
#[test]
fn neighbors_of_neighbors_score_two() {
    assert_eq!(proximity("VA", "PA"), Proximity::Secondary);
    assert_eq!(proximity("VA", "SC"), Proximity::Secondary);
    assert_eq!(proximity("CA", "ID"), Proximity::Secondary);
}

/// NY is three borders from VA (VA -> MD -> PA -> NY), so it scores the
/// same national class as CA.
#[test]
fn anything_past_two_hops_scores_three() {
    assert_eq!(proximity("VA", "NY"), Proximity::National);
    assert_eq!(proximity("VA", "CA"), Proximity::National);
    assert_eq!(proximity("AK", "WA"), Proximity::National);
}

#[test]
fn missing_or_unknown_codes_score_three() {
    assert_eq!(proximity("", "VA"), Proximity::National);
    assert_eq!(proximity("VA", ""), Proximity::National);
    assert_eq!(proximity("XX", "VA"), Proximity::National);
    assert_eq!(proximity("VA", "XX"), Proximity::National);
}

/// Identity is checked before the graph, so two identical unknown codes
/// still count as the same state.
#[test]
fn identical_unknown_codes_score_zero() {
    assert_eq!(proximity("ZZ", "ZZ"), Proximity::SameState);
}

/// The class ordering is what peer ranking sorts on.
#[test]
fn classes_order_closest_first() {
    assert!(Proximity::SameState < Proximity::Adjacent);
    assert!(Proximity::Adjacent < Proximity::Secondary);
    assert!(Proximity::Secondary < Proximity::National);

    let scores: Vec<u8> = [
        Proximity::SameState,
        Proximity::Adjacent,
        Proximity::Secondary,
        Proximity::National,
    ]
    .iter()
    .map(|p| p.score())
    .collect();
    assert_eq!(scores, vec![0, 1, 2, 3]);
}

/// Adjacency itself is direction-free.
#[test]
fn adjacency_lookups_are_symmetric_for_borders() {
    assert!(neighbors("VA").contains(&"TN"));
    assert!(neighbors("TN").contains(&"VA"));
    assert_eq!(proximity("TN", "VA"), Proximity::Adjacent);
}
