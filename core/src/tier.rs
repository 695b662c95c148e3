//! Asset-size tiers — the six fixed brackets used to select comparable
//! peers. Bounds are in currency thousands, the unit total assets arrive
//! in: lower inclusive, upper exclusive, last tier open-ended.

use serde::Serialize;

const T_100M: u64 = 100_000;
const T_1B: u64 = 1_000_000;
const T_10B: u64 = 10_000_000;
const T_50B: u64 = 50_000_000;
const T_250B: u64 = 250_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetTier {
    Under100M,
    From100MTo1B,
    From1BTo10B,
    From10BTo50B,
    From50BTo250B,
    Over250B,
}

impl AssetTier {
    pub const ALL: [AssetTier; 6] = [
        AssetTier::Under100M,
        AssetTier::From100MTo1B,
        AssetTier::From1BTo10B,
        AssetTier::From10BTo50B,
        AssetTier::From50BTo250B,
        AssetTier::Over250B,
    ];

    /// Ordered range test over the fixed cut points. `None` when the
    /// input is non-positive or not a number; the caller must treat that
    /// as "cannot benchmark".
    pub fn classify(asset_thousands: f64) -> Option<AssetTier> {
        if !(asset_thousands > 0.0) {
            return None;
        }
        Some(if asset_thousands < T_100M as f64 {
            AssetTier::Under100M
        } else if asset_thousands < T_1B as f64 {
            AssetTier::From100MTo1B
        } else if asset_thousands < T_10B as f64 {
            AssetTier::From1BTo10B
        } else if asset_thousands < T_50B as f64 {
            AssetTier::From10BTo50B
        } else if asset_thousands < T_250B as f64 {
            AssetTier::From50BTo250B
        } else {
            AssetTier::Over250B
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetTier::Under100M => "Assets < $100M",
            AssetTier::From100MTo1B => "Assets $100M - $1B",
            AssetTier::From1BTo10B => "Assets $1B - $10B",
            AssetTier::From10BTo50B => "Assets $10B - $50B",
            AssetTier::From50BTo250B => "Assets $50B - $250B",
            AssetTier::Over250B => "Assets > $250B",
        }
    }

    /// Bounds in currency thousands. `None` upper means open-ended.
    pub fn bounds(&self) -> (u64, Option<u64>) {
        match self {
            AssetTier::Under100M => (0, Some(T_100M)),
            AssetTier::From100MTo1B => (T_100M, Some(T_1B)),
            AssetTier::From1BTo10B => (T_1B, Some(T_10B)),
            AssetTier::From10BTo50B => (T_10B, Some(T_50B)),
            AssetTier::From50BTo250B => (T_50B, Some(T_250B)),
            AssetTier::Over250B => (T_250B, None),
        }
    }

    /// The asset-range filter handed to the candidate source.
    pub fn filter(&self) -> TierFilter {
        let (lower, upper) = self.bounds();
        TierFilter { lower, upper }
    }
}

/// Asset-range filter for a candidate fetch, in currency thousands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierFilter {
    pub lower: u64,
    /// `None` means open-ended (the top tier).
    pub upper: Option<u64>,
}
