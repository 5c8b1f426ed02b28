//! Gateway request implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`BlpClient`](crate::client::BlpClient) via `impl` blocks. All methods
//! handle JSON serialization, HTTP transport, and error mapping.
//!
//! ## Usage
//!
//! ```no_run
//! use blphttp_rs::BlpClient;
//! use blphttp_rs::config::TlsConfig;
//! use blphttp_rs::types::historical::HistoricalDataQuery;
//!
//! # #[tokio::main]
//! # async fn main() -> blphttp_rs::Result<()> {
//! let client = BlpClient::new("api.example.com", &TlsConfig::default())?;
//! let response = client.historical_data(&HistoricalDataQuery::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod historical;
