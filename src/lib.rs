//! # Wsprobe - A WS-Management Connectivity Probe
//!
//! Wsprobe verifies that a target host exposes a reachable, correctly-speaking
//! WSMAN/WinRM endpoint before further remote-management operations are
//! attempted against it. It sends the anonymous WS-Identify request and
//! classifies the outcome into a deterministic report and exit code.
//!
//! ## Core Concepts
//!
//! - **ProbeTarget**: the host, port, and scheme one invocation is aimed at
//! - **Identify request**: the fixed SOAP 1.2 envelope for WS-Management
//!   capability discovery, used here purely as a liveness check
//! - **TransportOutcome**: the tri-state result of the single HTTP POST
//! - **ProbeReport**: the terminal success/failure of the invocation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     CLI Interface                      │
//! │              (clap-based command parsing)              │
//! └────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌────────────────────────────────────────────────────────┐
//! │    Request Builder → Transport Invoker → Interpreter   │
//! │        (one WS-Identify POST per invocation)           │
//! └────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌────────────────────────────────────────────────────────┐
//! │            Target WSMAN endpoint (/wsman)              │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use wsprobe::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let target = ProbeTarget::new("winhost.example.com", 5985, Scheme::Http)
//!         .expect("valid target");
//!
//!     let report = wsprobe::probe::run(&target, &ProbeOptions::default()).await;
//!     std::process::exit(report.exit_code());
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export commonly used items in prelude
pub mod prelude {
    //! Convenient re-exports of the types most callers need.

    pub use crate::error::{Error, ParseError, Result};
    pub use crate::probe::{
        IdentifyResult, ProbeOptions, ProbeReport, ProbeTarget, Scheme, TransportOutcome,
    };
}

/// Error types used across the crate.
pub mod error;

/// The WS-Identify probe: request builder, transport, and interpreter.
pub mod probe;
