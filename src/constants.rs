//! Constants for the blpapi-http gateway.
//!
//! Contains request paths, default credential file names, and the request
//! timeout. These are used internally by [`BlpClient`](crate::client::BlpClient)
//! but are also exported so callers can target non-default gateway routes.

// ---------------------------------------------------------------------------
// Request paths
// ---------------------------------------------------------------------------

/// Path-based routing for a Historical Data request.
///
/// This is the documented contract: `POST /request/blp/refdata/HistoricalData`.
pub const HISTORICAL_DATA_PATH: &str = "/request/blp/refdata/HistoricalData";

/// Query-string routing accepted by some gateway deployments.
///
/// Same request type and body as [`HISTORICAL_DATA_PATH`]; only the route
/// spelling differs. Reachable via [`BlpClient::post`](crate::client::BlpClient::post)
/// or the CLI `--path` flag.
pub const HISTORICAL_DATA_QUERY_PATH: &str =
    "/request?ns=blp&service=refdata&type=HistoricalDataRequest";

// ---------------------------------------------------------------------------
// Credential defaults
// ---------------------------------------------------------------------------

/// Default client certificate path (PEM).
pub const DEFAULT_CLIENT_CERT: &str = "client.crt";

/// Default client private key path (PEM).
pub const DEFAULT_CLIENT_KEY: &str = "client.key";

// ---------------------------------------------------------------------------
// Timeouts
// ---------------------------------------------------------------------------

/// Total request timeout in seconds.
///
/// The gateway gives no latency guarantee, so the client bounds every
/// request rather than blocking indefinitely.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
