//! Historical Data request — daily/weekly/monthly sampled reference data.

use crate::client::BlpClient;
use crate::constants::HISTORICAL_DATA_PATH;
use crate::error::Result;
use crate::types::historical::HistoricalDataQuery;

impl BlpClient {
    /// Issue one Historical Data request and return the gateway's response.
    ///
    /// The response shape is owned by the remote service, so it is returned
    /// as opaque JSON. Exactly one request goes out; failures are never
    /// retried.
    ///
    /// **Endpoint:** `POST /request/blp/refdata/HistoricalData`
    ///
    /// Deployments using query-string routing instead can send the same
    /// query through [`BlpClient::post`] with
    /// [`HISTORICAL_DATA_QUERY_PATH`](crate::constants::HISTORICAL_DATA_QUERY_PATH).
    pub async fn historical_data(&self, query: &HistoricalDataQuery) -> Result<serde_json::Value> {
        self.post(HISTORICAL_DATA_PATH, query).await
    }
}
