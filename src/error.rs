//! Error types for Wsprobe.
//!
//! The probe core converts every outcome into a [`ProbeReport`](crate::probe::ProbeReport)
//! rather than propagating errors, so the types here cover the edges around
//! the core: target validation and response-body parsing.

use thiserror::Error;

/// Result type alias for Wsprobe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Wsprobe.
#[derive(Error, Debug)]
pub enum Error {
    /// The host/port/scheme combination does not form a usable WSMAN endpoint.
    #[error("Invalid probe target: {0}")]
    InvalidTarget(String),

    /// A 200-status body was rejected by the Identify response parser.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Reasons an Identify response body is rejected.
///
/// The outward probe contract collapses every variant into the same
/// `"invalid response body"` failure; the distinction survives only in
/// diagnostic logging.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The body is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The body parsed but a required Identify field is absent.
    #[error("missing {0} element in Identify response")]
    MissingField(&'static str),
}
