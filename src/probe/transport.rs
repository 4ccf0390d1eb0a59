//! HTTP transport for the Identify request.
//!
//! One POST per invocation. The transport performs no interpretation of the
//! response beyond receiving it: any status code and body are handed to the
//! interpreter as-is, and every way the exchange can die on the wire is
//! collapsed into [`TransportOutcome::TransportFailure`] carrying the
//! underlying error text unmodified.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, trace};

use super::request::{identify_envelope, SOAP_CONTENT_TYPE};
use super::{ProbeOptions, ProbeTarget, TransportOutcome};

/// Build the HTTP client for a single probe invocation.
fn build_client(options: &ProbeOptions) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(options.timeout))
        .connect_timeout(Duration::from_secs(options.timeout.div_ceil(2)))
        .danger_accept_invalid_certs(!options.verify_tls)
        .build()
}

/// POST the Identify envelope to the target and report what happened.
///
/// Exactly one outbound call; no retry and no connection reuse across
/// invocations.
pub async fn send_identify(target: &ProbeTarget, options: &ProbeOptions) -> TransportOutcome {
    let client = match build_client(options) {
        Ok(client) => client,
        Err(e) => {
            return TransportOutcome::TransportFailure {
                message: e.to_string(),
            }
        }
    };

    let url = target.endpoint_url();
    debug!(url = %url, timeout = options.timeout, "Sending WS-Identify request");

    let response = match client
        .post(&url)
        .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
        .body(identify_envelope())
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            return TransportOutcome::TransportFailure {
                message: e.to_string(),
            }
        }
    };

    let code = response.status().as_u16();
    match response.text().await {
        Ok(body) => {
            trace!(status = code, body_len = body.len(), "Received Identify response");
            TransportOutcome::HttpStatus { code, body }
        }
        Err(e) => TransportOutcome::TransportFailure {
            message: e.to_string(),
        },
    }
}
