//! Derived financial ratios — the nine benchmark metrics.
//!
//! Every ratio is recomputed on demand from a raw report; nothing here is
//! persisted. Denominators are guarded: a non-positive denominator yields
//! 0.0, never a NaN or an infinity.

use crate::report::RawFinancialReport;
use serde::Serialize;

/// The nine derived metrics for one report. Percentages are ×100 and
/// rounded to 2 decimals; assets per employee is whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioSet {
    /// Non-interest expense over total income.
    pub efficiency_ratio: f64,
    /// Interest expense over total assets (assets proxy average assets).
    pub cost_of_funds: f64,
    /// Non-interest income share of total income.
    pub non_interest_income_percent: f64,
    /// Total interest income over net loans. The source data carries no
    /// loan-only income breakout, so this over-estimates (it is closer to
    /// yield on earning assets). Kept as-is for continuity with benchmark
    /// values already shown to users.
    pub yield_on_loans: f64,
    /// Net interest income over total assets.
    pub net_interest_margin: f64,
    /// Whole currency units per head. Assets arrive in thousands and are
    /// restated (×1000) before dividing.
    pub assets_per_employee: f64,
    pub return_on_equity: f64,
    pub return_on_assets: f64,
    /// Noncurrent loans over net loans.
    pub non_performing_loans_ratio: f64,
}

impl RatioSet {
    /// Canonical ratio names, in the fixed order `named_values` uses.
    pub const NAMES: [&'static str; 9] = [
        "efficiency_ratio",
        "cost_of_funds",
        "non_interest_income_percent",
        "yield_on_loans",
        "net_interest_margin",
        "assets_per_employee",
        "return_on_equity",
        "return_on_assets",
        "non_performing_loans_ratio",
    ];

    /// Derive all nine metrics from one raw report. Malformed and missing
    /// fields are already zero after parsing, so this is a total function.
    pub fn from_report(r: &RawFinancialReport) -> Self {
        let interest_expense = r.interest_expense();
        let net_interest_income = r.intinc - interest_expense;
        let total_income = net_interest_income + r.nonii;

        Self {
            efficiency_ratio: round2(pct(r.nonix, total_income)),
            cost_of_funds: round2(pct(interest_expense, r.asset)),
            non_interest_income_percent: round2(pct(r.nonii, total_income)),
            yield_on_loans: round2(pct(r.intinc, r.lnlsnet)),
            net_interest_margin: round2(pct(net_interest_income, r.asset)),
            assets_per_employee: if r.numemp > 0.0 {
                (r.asset * 1000.0 / r.numemp).round()
            } else {
                0.0
            },
            return_on_equity: round2(pct(r.netinc, r.equity)),
            return_on_assets: round2(pct(r.netinc, r.asset)),
            non_performing_loans_ratio: round2(pct(r.nclnls, r.lnlsnet)),
        }
    }

    /// Name/value pairs in `NAMES` order.
    pub fn named_values(&self) -> [(&'static str, f64); 9] {
        [
            ("efficiency_ratio", self.efficiency_ratio),
            ("cost_of_funds", self.cost_of_funds),
            ("non_interest_income_percent", self.non_interest_income_percent),
            ("yield_on_loans", self.yield_on_loans),
            ("net_interest_margin", self.net_interest_margin),
            ("assets_per_employee", self.assets_per_employee),
            ("return_on_equity", self.return_on_equity),
            ("return_on_assets", self.return_on_assets),
            ("non_performing_loans_ratio", self.non_performing_loans_ratio),
        ]
    }
}

/// `None` only when there is no report at all. A present report always
/// yields a full set.
pub fn compute_ratios(report: Option<&RawFinancialReport>) -> Option<RatioSet> {
    report.map(RatioSet::from_report)
}

/// Percentage with a guarded denominator.
fn pct(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

/// Round to 2 decimal places, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
