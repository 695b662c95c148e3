//! Shared primitive types used across the benchmarking engine.

/// Stable identifier naming one regulated institution across report periods.
pub type CertId = String;

/// Two-letter US jurisdiction code (50 states plus DC).
pub type StateCode = String;
