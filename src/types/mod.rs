//! Request types for the blpapi-http gateway.
//!
//! ## Organization
//!
//! - [`enums`] — Shared enumerations (periodicity)
//! - [`historical`] — Historical data query type
//!
//! Response bodies are owned by the gateway and deliberately left opaque
//! (`serde_json::Value`); only requests are strongly typed.
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod enums;
pub mod historical;

pub use enums::*;
