//! TLS credential configuration.
//!
//! The gateway requires mutual TLS: the client presents a certificate/key
//! pair and may pin the server against a custom trust root. [`TlsConfig`]
//! holds the three file paths and loads the PEM material up front, so a
//! missing or unreadable file fails before any network I/O begins.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_CLIENT_CERT, DEFAULT_CLIENT_KEY};
use crate::error::{BlpError, Result};

/// File paths for the mutual-TLS credential material.
///
/// All fields are plain PEM file paths; the files themselves are read only
/// when a [`BlpClient`](crate::client::BlpClient) is constructed.
#[derive(Debug, Clone)]
pub struct TlsConfig {
    /// Client certificate presented during the TLS handshake.
    pub client_cert: PathBuf,
    /// Private key matching [`Self::client_cert`].
    pub client_key: PathBuf,
    /// Trust root used to validate the server's certificate chain.
    ///
    /// When set, the server is validated against this root exclusively.
    /// When `None`, the system trust store applies.
    pub trust_root: Option<PathBuf>,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            client_cert: PathBuf::from(DEFAULT_CLIENT_CERT),
            client_key: PathBuf::from(DEFAULT_CLIENT_KEY),
            trust_root: None,
        }
    }
}

impl TlsConfig {
    /// Create a config from explicit certificate and key paths.
    pub fn new(client_cert: impl Into<PathBuf>, client_key: impl Into<PathBuf>) -> Self {
        Self {
            client_cert: client_cert.into(),
            client_key: client_key.into(),
            trust_root: None,
        }
    }

    /// Set the trust root used to validate the server.
    #[must_use]
    pub fn with_trust_root(mut self, trust_root: impl Into<PathBuf>) -> Self {
        self.trust_root = Some(trust_root.into());
        self
    }

    /// Read the client certificate and key as one concatenated PEM blob,
    /// the layout `reqwest::Identity::from_pem` expects.
    pub fn identity_pem(&self) -> Result<Vec<u8>> {
        let mut pem = read_pem(&self.client_cert)?;
        pem.extend_from_slice(&read_pem(&self.client_key)?);
        Ok(pem)
    }

    /// Read the trust root PEM, if one is configured.
    pub fn trust_root_pem(&self) -> Result<Option<Vec<u8>>> {
        self.trust_root.as_deref().map(read_pem).transpose()
    }
}

fn read_pem(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| BlpError::Config {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn default_paths() {
        let config = TlsConfig::default();
        assert_eq!(config.client_cert, PathBuf::from("client.crt"));
        assert_eq!(config.client_key, PathBuf::from("client.key"));
        assert!(config.trust_root.is_none());
    }

    #[test]
    fn missing_cert_fails_with_configuration_error() {
        let config = TlsConfig::new("/nonexistent/client.crt", "/nonexistent/client.key");
        let err = config.identity_pem().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("/nonexistent/client.crt"));
    }

    #[test]
    fn missing_key_names_the_key_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cert = dir.path().join("client.crt");
        std::fs::write(&cert, "-----BEGIN CERTIFICATE-----\n").expect("write cert");

        let config = TlsConfig::new(&cert, dir.path().join("client.key"));
        let err = config.identity_pem().unwrap_err();
        assert!(err.to_string().contains("client.key"));
    }

    #[test]
    fn absent_trust_root_reads_as_none() {
        let config = TlsConfig::default();
        assert!(config.trust_root_pem().expect("no trust root").is_none());
    }
}
