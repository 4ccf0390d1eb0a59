//! WS-Management Identify probe.
//!
//! This module implements a single-shot connectivity probe against a
//! WSMAN/WinRM endpoint. The probe sends the anonymous WS-Identify request
//! and classifies what comes back, without authenticating, retrying, or
//! holding any state between invocations.
//!
//! # Overview
//!
//! One invocation flows strictly forward through three stages:
//!
//! - [`request`] builds the fixed Identify envelope and the endpoint URL
//! - [`transport`] performs the single HTTP POST and reduces every possible
//!   outcome to a [`TransportOutcome`]
//! - [`response`] turns the outcome into a [`ProbeReport`]
//!
//! # Example
//!
//! ```rust,ignore
//! use wsprobe::probe::{self, ProbeOptions, ProbeTarget, Scheme};
//!
//! let target = ProbeTarget::new("windows-host.example.com", 5985, Scheme::Http)?;
//! let report = probe::run(&target, &ProbeOptions::default()).await;
//! std::process::exit(report.exit_code());
//! ```

/// Identify request construction.
pub mod request;

/// Response interpretation and SOAP parsing.
pub mod response;

/// HTTP transport for the Identify request.
pub mod transport;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default WSMAN HTTP port.
pub const DEFAULT_WSMAN_PORT: u16 = 5985;

/// Default WSMAN HTTPS port.
pub const DEFAULT_WSMAN_SSL_PORT: u16 = 5986;

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport scheme for the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Plain HTTP (WinRM default, port 5985).
    #[default]
    Http,
    /// HTTPS (port 5986).
    Https,
}

impl Scheme {
    /// The URL scheme string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// The conventional WSMAN port for this scheme.
    pub fn default_port(&self) -> u16 {
        match self {
            Scheme::Http => DEFAULT_WSMAN_PORT,
            Scheme::Https => DEFAULT_WSMAN_SSL_PORT,
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The host a single probe invocation is aimed at.
///
/// Constructed once from configuration before the probe runs; the
/// constructor is the boundary that rejects malformed targets, so the
/// request builder itself has no error conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Target hostname or IP address.
    pub host: String,
    /// WSMAN port.
    pub port: u16,
    /// Transport scheme.
    pub scheme: Scheme,
}

impl ProbeTarget {
    /// Create a probe target, validating that it forms a usable endpoint.
    pub fn new(host: impl Into<String>, port: u16, scheme: Scheme) -> Result<Self> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(Error::InvalidTarget("host must not be empty".to_string()));
        }

        let target = Self { host, port, scheme };
        url::Url::parse(&target.endpoint_url())
            .map_err(|e| Error::InvalidTarget(format!("{}: {}", target.endpoint_url(), e)))?;

        Ok(target)
    }

    /// The WSMAN endpoint URL for this target.
    pub fn endpoint_url(&self) -> String {
        format!("{}://{}:{}/wsman", self.scheme, self.host, self.port)
    }
}

/// Transport-layer knobs for one probe invocation.
///
/// Passed explicitly into [`run`] rather than read from ambient state, so
/// the probe can be exercised in isolation.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// HTTP timeout in seconds. Expiry surfaces as a transport failure.
    pub timeout: u64,
    /// Verify TLS certificates. Off by default: the probe checks
    /// reachability, and WinRM endpoints are routinely self-signed.
    pub verify_tls: bool,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
            verify_tls: false,
        }
    }
}

/// Everything the transport layer can hand to the interpreter.
///
/// Produced exactly once per invocation. Status interpretation is deferred:
/// `HttpStatus` is used for any received response, success or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportOutcome {
    /// The request never produced an HTTP response (DNS, connect, TLS,
    /// timeout, or body-read failure). The message is the underlying
    /// transport error text, unmodified.
    TransportFailure {
        /// Transport error text, verbatim.
        message: String,
    },
    /// A response was received with some status code and body.
    HttpStatus {
        /// HTTP status code.
        code: u16,
        /// Response body.
        body: String,
    },
}

/// The fields a well-formed Identify response carries.
///
/// Built only from a fully successful parse of a 200-status body; the
/// verbose-mode output payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyResult {
    /// WSMAN protocol version URI.
    pub protocol_version: String,
    /// Vendor string, e.g. "Microsoft Corporation".
    pub product_vendor: String,
    /// Vendor-defined version string, e.g. "OS: 0.0.0 SP: 0.0 Stack: 3.0".
    pub product_version: String,
}

/// The terminal outcome of one probe invocation.
///
/// A success never carries an error message and a failure never carries an
/// [`IdentifyResult`]; the enum makes that invariant structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeReport {
    /// The endpoint answered Identify with all required fields.
    Success(IdentifyResult),
    /// Transport failure, unexpected HTTP status, or unusable body.
    Failure {
        /// Human-readable failure description.
        message: String,
    },
}

impl ProbeReport {
    /// Whether the probe succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeReport::Success(_))
    }

    /// Process exit code for this report: 0 on success, 1 on any failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProbeReport::Success(_) => 0,
            ProbeReport::Failure { .. } => 1,
        }
    }
}

/// Run the Identify probe once against a target.
///
/// Performs exactly one outbound HTTP call and never fails outright: every
/// outcome, including transport errors, is folded into the returned report.
pub async fn run(target: &ProbeTarget, options: &ProbeOptions) -> ProbeReport {
    let outcome = transport::send_identify(target, options).await;
    response::interpret(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_http() {
        let target = ProbeTarget::new("winhost", 5985, Scheme::Http).unwrap();
        assert_eq!(target.endpoint_url(), "http://winhost:5985/wsman");
    }

    #[test]
    fn test_endpoint_url_https() {
        let target = ProbeTarget::new("192.168.1.10", 5986, Scheme::Https).unwrap();
        assert_eq!(target.endpoint_url(), "https://192.168.1.10:5986/wsman");
    }

    #[test]
    fn test_empty_host_rejected() {
        let result = ProbeTarget::new("", 5985, Scheme::Http);
        assert!(matches!(result, Err(crate::error::Error::InvalidTarget(_))));
    }

    #[test]
    fn test_whitespace_host_rejected() {
        assert!(ProbeTarget::new("   ", 5985, Scheme::Http).is_err());
    }

    #[test]
    fn test_malformed_host_rejected() {
        assert!(ProbeTarget::new("host with spaces", 5985, Scheme::Http).is_err());
    }

    #[test]
    fn test_scheme_default_ports() {
        assert_eq!(Scheme::Http.default_port(), 5985);
        assert_eq!(Scheme::Https.default_port(), 5986);
    }

    #[test]
    fn test_report_exit_codes() {
        let success = ProbeReport::Success(IdentifyResult {
            protocol_version: "http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd".to_string(),
            product_vendor: "Microsoft Corporation".to_string(),
            product_version: "OS: 0.0.0 SP: 0.0 Stack: 2.0".to_string(),
        });
        assert_eq!(success.exit_code(), 0);
        assert!(success.is_success());

        let failure = ProbeReport::Failure {
            message: "unexpected status 404".to_string(),
        };
        assert_eq!(failure.exit_code(), 1);
        assert!(!failure.is_success());
    }
}
