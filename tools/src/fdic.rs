//! FDIC BankFind data access — institution search, latest-financials
//! lookup, and the tier-filtered candidate fetch behind `CandidateSource`.
//!
//! RULE: only this module talks to the regulator's API. Everything above
//! it consumes parsed `RawFinancialReport` records.

use anyhow::{Context, Result};
use peerbench_core::{
    benchmark::CandidateSource,
    error::{BenchError, BenchResult},
    report::{lenient_f64, lenient_string, RawFinancialReport},
    tier::TierFilter,
};
use serde::Deserialize;
use std::time::Duration;

const INSTITUTIONS_API: &str = "https://banks.data.fdic.gov/api/institutions";
const FINANCIALS_API: &str = "https://api.fdic.gov/banks/financials/";

/// Report fields requested from the financials endpoint.
const REPORT_FIELDS: &str =
    "CERT,REPDTE,ASSET,NUMEMP,INTINC,INTEXP,EINTEXP,NONII,NONIX,LNLSNET,NETINC,EQ,NCLNLS,NAME,CITY,STNAME,STALP";

/// Envelope shape shared by both endpoints: `{"data": [{"data": {...}}]}`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    data: Vec<Row<T>>,
}

#[derive(Debug, Deserialize)]
struct Row<T> {
    data: T,
}

/// One institution row from the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Institution {
    #[serde(rename = "NAME", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "CITY", default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(rename = "STNAME", default, deserialize_with = "lenient_string")]
    pub stname: String,
    #[serde(rename = "STALP", default, deserialize_with = "lenient_string")]
    pub stalp: String,
    #[serde(rename = "CERT", default, deserialize_with = "lenient_string")]
    pub cert: String,
    /// Total assets in currency thousands.
    #[serde(rename = "ASSET", default, deserialize_with = "lenient_f64")]
    pub asset: f64,
}

pub struct FdicClient {
    http: reqwest::blocking::Client,
}

impl FdicClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Cannot build HTTP client")?;
        Ok(Self { http })
    }

    /// Search active institutions by name, largest assets first.
    pub fn search_institutions(&self, name: &str, limit: usize) -> Result<Vec<Institution>> {
        let search = format!("NAME:\"{name}\" AND ACTIVE:1");
        let limit = limit.to_string();
        let response = self
            .http
            .get(INSTITUTIONS_API)
            .query(&[
                ("search", search.as_str()),
                ("fields", "NAME,CITY,STNAME,STALP,CERT,ASSET"),
                ("sort_by", "ASSET"),
                ("sort_order", "DESC"),
                ("limit", limit.as_str()),
                ("format", "json"),
            ])
            .send()
            .context("Institution search request failed")?;
        if !response.status().is_success() {
            anyhow::bail!("Institution search returned status {}", response.status());
        }
        let envelope: Envelope<Institution> = response
            .json()
            .context("Institution search response is not valid JSON")?;
        Ok(envelope.data.into_iter().map(|row| row.data).collect())
    }

    /// Latest quarterly report for one institution, if any exists.
    pub fn latest_financials(&self, cert: &str) -> Result<Option<RawFinancialReport>> {
        let filters = format!("CERT:{cert}");
        let response = self
            .http
            .get(FINANCIALS_API)
            .query(&[
                ("filters", filters.as_str()),
                ("fields", REPORT_FIELDS),
                ("limit", "1"),
                ("sort_by", "REPDTE"),
                ("sort_order", "DESC"),
                ("format", "json"),
            ])
            .send()
            .context("Financials request failed")?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            anyhow::bail!("Financials lookup returned status {}", response.status());
        }
        let envelope: Envelope<RawFinancialReport> = response
            .json()
            .context("Financials response is not valid JSON")?;
        Ok(envelope.data.into_iter().next().map(|row| row.data))
    }
}

impl CandidateSource for FdicClient {
    fn fetch_candidates(
        &self,
        filter: &TierFilter,
        limit: usize,
    ) -> BenchResult<Vec<RawFinancialReport>> {
        // Range filter in the regulator's query dialect; the upper bound
        // is open-ended for the top tier.
        let range = match filter.upper {
            Some(upper) => format!("ASSET:[{} TO {}]", filter.lower, upper),
            None => format!("ASSET:[{} TO *]", filter.lower),
        };
        let filters = format!("{range} AND ACTIVE:1");
        let limit = limit.to_string();

        let response = self
            .http
            .get(FINANCIALS_API)
            .query(&[
                ("filters", filters.as_str()),
                ("fields", REPORT_FIELDS),
                ("limit", limit.as_str()),
                ("sort_by", "REPDTE"),
                ("sort_order", "DESC"),
                ("format", "json"),
            ])
            .send()
            .map_err(|e| BenchError::Other(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BenchError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let envelope: Envelope<RawFinancialReport> =
            response.json().map_err(|e| BenchError::Other(e.into()))?;
        Ok(envelope.data.into_iter().map(|row| row.data).collect())
    }
}
