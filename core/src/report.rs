//! Raw quarterly report records as returned by the regulator's API.
//!
//! Numeric fields may arrive as JSON numbers, numeric strings, or null.
//! A missing or unparsable value is 0.0; a malformed field never aborts
//! a benchmark computation.

use crate::types::{CertId, StateCode};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One bank-quarter record. Field names follow the regulator's mnemonics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFinancialReport {
    /// Institution identifier, stable per active bank across report periods.
    #[serde(rename = "CERT", default, deserialize_with = "lenient_string")]
    pub cert: CertId,
    /// Report date as sent upstream (`YYYYMMDD` or ISO). Recency ordering
    /// of a candidate sample is the upstream sort contract; this field is
    /// kept for display.
    #[serde(rename = "REPDTE", default, deserialize_with = "lenient_string")]
    pub repdte: String,
    /// Total assets, in currency thousands.
    #[serde(rename = "ASSET", default, deserialize_with = "lenient_f64")]
    pub asset: f64,
    #[serde(rename = "NUMEMP", default, deserialize_with = "lenient_f64")]
    pub numemp: f64,
    /// Total interest income.
    #[serde(rename = "INTINC", default, deserialize_with = "lenient_f64")]
    pub intinc: f64,
    /// Total interest expense (primary field).
    #[serde(rename = "INTEXP", default, deserialize_with = "lenient_f64")]
    pub intexp: f64,
    /// Estimated interest expense, used only when the primary is zero.
    #[serde(rename = "EINTEXP", default, deserialize_with = "lenient_f64")]
    pub eintexp: f64,
    /// Non-interest income.
    #[serde(rename = "NONII", default, deserialize_with = "lenient_f64")]
    pub nonii: f64,
    /// Non-interest expense.
    #[serde(rename = "NONIX", default, deserialize_with = "lenient_f64")]
    pub nonix: f64,
    /// Net loans and leases.
    #[serde(rename = "LNLSNET", default, deserialize_with = "lenient_f64")]
    pub lnlsnet: f64,
    #[serde(rename = "NETINC", default, deserialize_with = "lenient_f64")]
    pub netinc: f64,
    /// Total equity capital.
    #[serde(rename = "EQ", default, deserialize_with = "lenient_f64")]
    pub equity: f64,
    /// Noncurrent loans and leases (90+ days past due plus nonaccrual).
    #[serde(rename = "NCLNLS", default, deserialize_with = "lenient_f64")]
    pub nclnls: f64,
    /// 2-letter state code; drives proximity ranking.
    #[serde(rename = "STALP", default, deserialize_with = "lenient_string")]
    pub stalp: StateCode,
    // Display-only fields, carried through unmodified.
    #[serde(rename = "NAME", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "CITY", default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(rename = "STNAME", default, deserialize_with = "lenient_string")]
    pub stname: String,
}

impl RawFinancialReport {
    /// Interest expense with the estimated-expense fallback. The primary
    /// field wins whenever it is non-zero.
    pub fn interest_expense(&self) -> f64 {
        first_nonzero(&[self.intexp, self.eintexp])
    }

    /// Report date, if the upstream string parses.
    pub fn report_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.repdte, "%Y%m%d")
            .or_else(|_| NaiveDate::parse_from_str(&self.repdte, "%Y-%m-%d"))
            .ok()
    }
}

/// First value that is present and non-zero, or 0.0 when none is.
///
/// Generalizes the primary-or-alternate field pattern: pass the candidate
/// fields in preference order.
pub fn first_nonzero(candidates: &[f64]) -> f64 {
    candidates.iter().copied().find(|v| *v != 0.0).unwrap_or(0.0)
}

/// Numbers pass through, numeric strings are parsed, everything else
/// (null, absent, garbage) is 0.0.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Strings pass through, numbers are stringified (identifiers arrive both
/// ways), everything else is empty.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
