//! WS-Identify request construction.
//!
//! The Identify operation is anonymous and carries no target-specific
//! fields, so the envelope is a fixed constant; the destination URL is the
//! only per-target piece and travels separately as the POST target.

/// SOAP 1.2 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

/// WS-Management Identify namespace.
pub const WSMAN_IDENTITY_NS: &str =
    "http://schemas.dmtf.org/wbem/wsman/identity/1/wsmanidentity.xsd";

/// SOAP media type used for the POST.
pub const SOAP_CONTENT_TYPE: &str = "application/soap+xml;charset=UTF-8";

/// The fixed WS-Identify SOAP envelope.
const IDENTIFY_ENVELOPE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<s:Envelope xmlns:s="http://www.w3.org/2003/05/soap-envelope" xmlns:wsmid="http://schemas.dmtf.org/wbem/wsman/identity/1/wsmanidentity.xsd">
  <s:Header/>
  <s:Body>
    <wsmid:Identify/>
  </s:Body>
</s:Envelope>"#;

/// The Identify request body sent to the endpoint.
pub fn identify_envelope() -> &'static str {
    IDENTIFY_ENVELOPE
}
