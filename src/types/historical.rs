//! Historical Data query type.

use serde::Serialize;

use crate::types::enums::*;

/// Request body for a blpapi `HistoricalDataRequest`.
///
/// Used by `POST /request/blp/refdata/HistoricalData`. The value is fully
/// determined at construction time and only ever serialized; the gateway
/// owns the response shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalDataQuery {
    /// Instrument identifiers, e.g. `"IBM US Equity"`. Order preserved.
    pub securities: Vec<String>,
    /// Field mnemonics, e.g. `"PX_LAST"`. Order preserved.
    pub fields: Vec<String>,
    /// Start date (YYYYMMDD).
    pub start_date: String,
    /// End date (YYYYMMDD).
    pub end_date: String,
    /// Sampling interval of the returned data points.
    pub periodicity_selection: Periodicity,
}

impl Default for HistoricalDataQuery {
    /// The canonical demonstration query: daily closes, opens, and annualized
    /// EPS for IBM and Apple over Jan–Mar 2012.
    fn default() -> Self {
        Self {
            securities: vec!["IBM US Equity".to_owned(), "AAPL US Equity".to_owned()],
            fields: vec![
                "PX_LAST".to_owned(),
                "OPEN".to_owned(),
                "EPS_ANNUALIZED".to_owned(),
            ],
            start_date: "20120101".to_owned(),
            end_date: "20120301".to_owned(),
            periodicity_selection: Periodicity::DAILY,
        }
    }
}
