//! Error types for the `blphttp-rs` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, BlpError>`.
//!
//! [`BlpError`] covers:
//! - **Configuration errors** — Missing or unreadable credential files,
//!   rejected PEM material
//! - **HTTP transport errors** — Network, TLS handshake, timeout failures
//! - **HTTP status errors** — Non-2xx responses with the body text
//! - **JSON errors** — Response bodies that fail to parse
//!
//! Nothing in this crate retries or recovers internally; every error is
//! propagated to the caller, and only the CLI binary maps errors to a
//! process exit code. [`BlpError::kind`] buckets an error into the coarse
//! [`ErrorKind`] taxonomy used for diagnostics.

use std::error::Error as StdError;
use std::fmt;
use std::io;

/// Coarse classification of a [`BlpError`], used for diagnostic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing/unreadable credential files or invalid PEM material.
    Configuration,
    /// TLS handshake or certificate validation failure.
    Tls,
    /// Connection, DNS, or timeout failure below the HTTP layer.
    Transport,
    /// The gateway answered, but with a non-2xx status or unparseable body.
    Application,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Configuration => "configuration",
            Self::Tls => "tls",
            Self::Transport => "transport",
            Self::Application => "application",
        };
        f.write_str(name)
    }
}

/// All possible errors produced by the `blphttp-rs` client.
#[derive(Debug, thiserror::Error)]
pub enum BlpError {
    /// A credential or trust-root file could not be read.
    #[error("cannot read {path}: {source}")]
    Config {
        /// Path of the file that failed to load.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The PEM material was readable but rejected while building the TLS
    /// identity or the HTTP client.
    #[error("invalid TLS credential material: {0}")]
    Identity(#[source] reqwest::Error),

    /// A network or transport-level error from `reqwest`. TLS handshake
    /// failures surface here as well, since reqwest folds them into its
    /// connect error.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway returned a non-2xx HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BlpError {
    /// Classify this error into the coarse [`ErrorKind`] taxonomy.
    ///
    /// reqwest does not expose handshake failures as a distinct variant, so
    /// TLS errors are recovered by scanning the source chain for certificate
    /// or handshake vocabulary. Anything ambiguous stays `Transport`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config { .. } | Self::Identity(_) => ErrorKind::Configuration,
            Self::Http(err) => {
                if err.is_builder() {
                    ErrorKind::Configuration
                } else if chain_mentions_tls(err) {
                    ErrorKind::Tls
                } else {
                    ErrorKind::Transport
                }
            }
            Self::HttpStatus { .. } | Self::Json(_) => ErrorKind::Application,
        }
    }
}

/// Walk an error's source chain looking for TLS vocabulary.
fn chain_mentions_tls(err: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(current) = source {
        let text = current.to_string().to_ascii_lowercase();
        if text.contains("certificate")
            || text.contains("handshake")
            || text.contains("tls")
            || text.contains("alert")
        {
            return true;
        }
        source = current.source();
    }
    false
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BlpError>;
