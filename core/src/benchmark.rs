//! Benchmark orchestration — tier classification, candidate fetch, peer
//! sampling, and distribution statistics composed into the single "build
//! benchmark for this bank" operation.
//!
//! RULES:
//!   - The engine performs no I/O itself; candidates come from the
//!     `CandidateSource` collaborator.
//!   - Upstream failure surfaces as "benchmark unavailable" (`None`),
//!     never as an error.
//!   - Nothing is cached; every build starts from a fresh fetch, and two
//!     concurrent builds share no mutable state.

use crate::{
    config::BenchConfig,
    distribution::{self, PeerTotals, PercentileBand},
    error::BenchResult,
    report::RawFinancialReport,
    sampler,
    tier::{AssetTier, TierFilter},
    types::CertId,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// External data-access collaborator.
pub trait CandidateSource {
    /// Up to `limit` reports of active institutions inside the asset
    /// range, ordered most-recent-report-date first.
    fn fetch_candidates(
        &self,
        filter: &TierFilter,
        limit: usize,
    ) -> BenchResult<Vec<RawFinancialReport>>;
}

/// The subject bank a benchmark is built around.
#[derive(Debug, Clone, Default)]
pub struct Subject {
    /// Total assets in currency thousands.
    pub assets: f64,
    /// Home state code, when known. Without it peers keep fetch order.
    pub state: Option<String>,
    /// The subject's own identifier. A bank is never its own peer.
    pub cert: Option<CertId>,
}

/// One row of the peer list shown alongside the benchmark.
#[derive(Debug, Clone, Serialize)]
pub struct PeerSummary {
    pub name: String,
    pub city: String,
    /// Full state name, display data carried through from the report.
    pub state: String,
    /// Total assets in currency thousands.
    pub assets: f64,
}

/// Benchmark result for one subject bank. Built fresh per request and
/// discarded once the caller consumes it.
#[derive(Debug, Clone, Serialize)]
pub struct PeerGroup {
    pub tier_label: String,
    pub peers: Vec<PeerSummary>,
    pub sample_size: usize,
    /// P25/P75 keyed by canonical ratio name.
    pub bands: BTreeMap<String, PercentileBand>,
    pub totals: PeerTotals,
}

/// Composes the tier classifier, candidate fetch, peer sampler, and
/// distribution engine into one operation.
pub struct BenchmarkEngine {
    config: BenchConfig,
}

impl BenchmarkEngine {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Build the peer benchmark for `subject`, or `None` when no
    /// benchmark is available: unknown tier, upstream failure, or an
    /// empty peer set.
    pub fn build(&self, subject: &Subject, source: &dyn CandidateSource) -> Option<PeerGroup> {
        let tier = match AssetTier::classify(subject.assets) {
            Some(tier) => tier,
            None => {
                log::debug!("No asset tier for assets={}", subject.assets);
                return None;
            }
        };

        let candidates = match source.fetch_candidates(&tier.filter(), self.config.sample_limit) {
            Ok(candidates) => candidates,
            Err(e) => {
                log::warn!("Candidate fetch failed for \"{}\": {e}", tier.label());
                return None;
            }
        };
        if candidates.is_empty() {
            log::info!("No candidates returned for \"{}\"", tier.label());
            return None;
        }

        let candidates: Vec<RawFinancialReport> = match subject.cert.as_deref() {
            Some(cert) if !cert.is_empty() => {
                candidates.into_iter().filter(|c| c.cert != cert).collect()
            }
            _ => candidates,
        };

        let peers = sampler::sample(candidates, subject.state.as_deref(), self.config.max_peers);
        if peers.is_empty() {
            log::info!("Peer set empty after sampling for \"{}\"", tier.label());
            return None;
        }

        let stats = distribution::aggregate(&peers);
        let summaries = peers
            .iter()
            .map(|peer| PeerSummary {
                name: peer.name.clone(),
                city: peer.city.clone(),
                state: peer.stname.clone(),
                assets: peer.asset,
            })
            .collect();

        log::info!(
            "Peer group built: tier=\"{}\" peers={}",
            tier.label(),
            stats.sample_size
        );

        Some(PeerGroup {
            tier_label: tier.label().to_string(),
            peers: summaries,
            sample_size: stats.sample_size,
            bands: stats.bands,
            totals: stats.totals,
        })
    }
}

/// `BenchmarkEngine::build` with the default configuration.
pub fn build_benchmark(subject: &Subject, source: &dyn CandidateSource) -> Option<PeerGroup> {
    BenchmarkEngine::new(BenchConfig::default()).build(subject, source)
}
