//! Shared enum types that map directly to blpapi string values.
//!
//! Variant names use `SCREAMING_SNAKE_CASE` to match the JSON wire format
//! expected by the gateway, so we suppress the Rust naming convention lint.
#![allow(non_camel_case_types)]

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Periodicity
// ---------------------------------------------------------------------------

/// Sampling interval of the requested historical data points.
///
/// Wire values of the blpapi `HistoricalDataRequest` field
/// `periodicitySelection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Periodicity {
    DAILY,
    WEEKLY,
    MONTHLY,
    QUARTERLY,
    SEMI_ANNUALLY,
    YEARLY,
}
