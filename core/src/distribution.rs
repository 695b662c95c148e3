//! Distribution statistics over a peer set — percentile bands per ratio,
//! plus raw-field sums (the "synthetic peer bank" view).

use crate::ratios::{round2, RatioSet};
use crate::report::RawFinancialReport;
use serde::Serialize;
use std::collections::BTreeMap;

/// 25th/75th percentile cuts for one ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileBand {
    pub p25: f64,
    pub p75: f64,
}

/// Sums of the raw underlying fields across the peer set. Callers that
/// want one aggregate "peer bank" read this; the percentile bands are the
/// primary output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PeerTotals {
    pub asset: f64,
    pub numemp: f64,
    pub intinc: f64,
    pub intexp: f64,
    pub nonii: f64,
    pub nonix: f64,
    pub lnlsnet: f64,
    pub netinc: f64,
    pub equity: f64,
    pub nclnls: f64,
}

impl PeerTotals {
    fn add(&mut self, report: &RawFinancialReport) {
        self.asset += report.asset;
        self.numemp += report.numemp;
        self.intinc += report.intinc;
        // Summed through the same estimated-expense fallback the
        // per-bank ratios use.
        self.intexp += report.interest_expense();
        self.nonii += report.nonii;
        self.nonix += report.nonix;
        self.lnlsnet += report.lnlsnet;
        self.netinc += report.netinc;
        self.equity += report.equity;
        self.nclnls += report.nclnls;
    }
}

/// Aggregate statistics for one peer set.
#[derive(Debug, Clone, Serialize)]
pub struct Distribution {
    /// P25/P75 keyed by canonical ratio name.
    pub bands: BTreeMap<String, PercentileBand>,
    pub totals: PeerTotals,
    /// Peer count actually used (post-dedup, post-truncation).
    pub sample_size: usize,
}

/// Compute per-ratio percentile bands and raw-field totals for `peers`.
pub fn aggregate(peers: &[RawFinancialReport]) -> Distribution {
    let mut columns: BTreeMap<&'static str, Vec<f64>> = BTreeMap::new();
    let mut totals = PeerTotals::default();

    for peer in peers {
        totals.add(peer);
        let ratios = RatioSet::from_report(peer);
        for (name, value) in ratios.named_values() {
            // A non-finite value cannot rank in a distribution; skip it
            // rather than poison the whole column.
            if value.is_finite() {
                columns.entry(name).or_default().push(value);
            }
        }
    }

    let bands = RatioSet::NAMES
        .iter()
        .map(|name| {
            let column = columns.get(name).map(Vec::as_slice).unwrap_or(&[]);
            let band = PercentileBand {
                p25: round2(percentile(column, 25.0)),
                p75: round2(percentile(column, 75.0)),
            };
            (name.to_string(), band)
        })
        .collect();

    Distribution {
        bands,
        totals,
        sample_size: peers.len(),
    }
}

/// Percentile by linear interpolation between order statistics.
///
/// For percentile `p` over `n` values sorted ascending, the real index is
/// `p/100 * (n-1)` and the result interpolates between the bracketing
/// order statistics. An empty slice yields 0.0.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let index = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    let weight = index - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}
