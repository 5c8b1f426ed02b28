//! # blphttp-rs
//!
//! A Rust client for a blpapi-http market data gateway. The gateway exposes
//! Bloomberg Open API request types over HTTPS with mandatory mutual-TLS
//! client-certificate authentication; this crate issues one authenticated
//! `HistoricalDataRequest` per call and hands back the gateway's JSON
//! response.
//!
//! ## Quick Start
//!
//! ```no_run
//! use blphttp_rs::client::BlpClient;
//! use blphttp_rs::config::TlsConfig;
//! use blphttp_rs::types::historical::HistoricalDataQuery;
//!
//! #[tokio::main]
//! async fn main() -> blphttp_rs::error::Result<()> {
//!     let client = BlpClient::new("api.example.com", &TlsConfig::default())?;
//!     let response = client.historical_data(&HistoricalDataQuery::default()).await?;
//!     println!("{response:#}");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::BlpClient;
/// Re-export the error type and Result alias.
pub use error::{BlpError, Result};
