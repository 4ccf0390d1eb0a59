//! Identify response interpretation.
//!
//! Turns the transport outcome into the terminal [`ProbeReport`]. Parsing
//! uses quick-xml streaming events, which do not expand entities and are
//! therefore safe against XXE payloads in hostile response bodies.
//!
//! Malformed XML and well-formed XML missing a required field are the same
//! failure at the report boundary; the finer reason is only logged.

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use super::{IdentifyResult, ProbeReport, TransportOutcome};
use crate::error::ParseError;

/// Which Identify field the parser is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    ProtocolVersion,
    ProductVendor,
    ProductVersion,
}

/// Parse a 200-status body as a WS-Identify response envelope.
///
/// Elements are matched by local name, so `wsmid:ProductVendor` and an
/// unprefixed `ProductVendor` both count. Text is captured exactly as sent,
/// without trimming.
pub fn parse_identify_response(body: &str) -> Result<IdentifyResult, ParseError> {
    let mut reader = Reader::from_str(body);

    let mut protocol_version: Option<String> = None;
    let mut product_vendor: Option<String> = None;
    let mut product_version: Option<String> = None;
    let mut current: Option<Field> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                current = match e.local_name().as_ref() {
                    b"ProtocolVersion" => Some(Field::ProtocolVersion),
                    b"ProductVendor" => Some(Field::ProductVendor),
                    b"ProductVersion" => Some(Field::ProductVersion),
                    _ => None,
                };
            }
            Event::Text(e) => {
                if let Some(field) = current {
                    let text = e.unescape()?.into_owned();
                    match field {
                        Field::ProtocolVersion => protocol_version = Some(text),
                        Field::ProductVendor => product_vendor = Some(text),
                        Field::ProductVersion => product_version = Some(text),
                    }
                }
            }
            Event::End(_) => current = None,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(IdentifyResult {
        protocol_version: protocol_version.ok_or(ParseError::MissingField("ProtocolVersion"))?,
        product_vendor: product_vendor.ok_or(ParseError::MissingField("ProductVendor"))?,
        product_version: product_version.ok_or(ParseError::MissingField("ProductVersion"))?,
    })
}

/// Reduce a transport outcome to the probe report.
///
/// Every failure kind (transport, protocol, parse) converges here; nothing
/// propagates past this boundary and nothing is retried.
pub fn interpret(outcome: TransportOutcome) -> ProbeReport {
    match outcome {
        TransportOutcome::TransportFailure { message } => ProbeReport::Failure {
            message: format!("connection error: {}", message),
        },
        TransportOutcome::HttpStatus { code, body } => {
            if code != 200 {
                return ProbeReport::Failure {
                    message: format!("unexpected status {}", code),
                };
            }

            match parse_identify_response(&body) {
                Ok(result) => ProbeReport::Success(result),
                Err(e) => {
                    debug!(reason = %e, "Identify response body rejected");
                    ProbeReport::Failure {
                        message: "invalid response body".to_string(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const IDENTIFY_2008R2: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<s:Envelope xmlns:s="http://www.w3.org/2003/05/soap-envelope" xmlns:wsmid="http://schemas.dmtf.org/wbem/wsman/identity/1/wsmanidentity.xsd">
  <s:Header/>
  <s:Body>
    <wsmid:IdentifyResponse>
      <wsmid:ProtocolVersion>http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd</wsmid:ProtocolVersion>
      <wsmid:ProductVendor>Microsoft Corporation</wsmid:ProductVendor>
      <wsmid:ProductVersion>OS: 0.0.0 SP: 0.0 Stack: 2.0</wsmid:ProductVersion>
    </wsmid:IdentifyResponse>
  </s:Body>
</s:Envelope>"#;

    const IDENTIFY_2012R2: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<s:Envelope xmlns:s="http://www.w3.org/2003/05/soap-envelope" xmlns:wsmid="http://schemas.dmtf.org/wbem/wsman/identity/1/wsmanidentity.xsd">
  <s:Header/>
  <s:Body>
    <wsmid:IdentifyResponse>
      <wsmid:ProtocolVersion>http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd</wsmid:ProtocolVersion>
      <wsmid:ProductVendor>Microsoft Corporation</wsmid:ProductVendor>
      <wsmid:ProductVersion>OS: 0.0.0 SP: 0.0 Stack: 3.0</wsmid:ProductVersion>
    </wsmid:IdentifyResponse>
  </s:Body>
</s:Envelope>"#;

    #[test]
    fn test_parse_2008r2_body() {
        let result = parse_identify_response(IDENTIFY_2008R2).unwrap();
        assert_eq!(
            result.protocol_version,
            "http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd"
        );
        assert_eq!(result.product_vendor, "Microsoft Corporation");
        assert_eq!(result.product_version, "OS: 0.0.0 SP: 0.0 Stack: 2.0");
    }

    #[test]
    fn test_parse_2012r2_body() {
        let result = parse_identify_response(IDENTIFY_2012R2).unwrap();
        assert_eq!(result.product_version, "OS: 0.0.0 SP: 0.0 Stack: 3.0");
    }

    #[test]
    fn test_parse_unprefixed_elements() {
        let body = r#"<IdentifyResponse xmlns="http://schemas.dmtf.org/wbem/wsman/identity/1/wsmanidentity.xsd">
  <ProtocolVersion>http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd</ProtocolVersion>
  <ProductVendor>Openwsman Project</ProductVendor>
  <ProductVersion>2.6.5</ProductVersion>
</IdentifyResponse>"#;

        let result = parse_identify_response(body).unwrap();
        assert_eq!(result.product_vendor, "Openwsman Project");
        assert_eq!(result.product_version, "2.6.5");
    }

    #[test]
    fn test_parse_escaped_vendor_text() {
        let body = r#"<IdentifyResponse>
  <ProtocolVersion>http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd</ProtocolVersion>
  <ProductVendor>Acme &amp; Sons</ProductVendor>
  <ProductVersion>1.0</ProductVersion>
</IdentifyResponse>"#;

        let result = parse_identify_response(body).unwrap();
        assert_eq!(result.product_vendor, "Acme & Sons");
    }

    #[test]
    fn test_parse_plain_text_body_fails() {
        let result = parse_identify_response("I am invalid");
        assert!(matches!(
            result,
            Err(ParseError::MissingField("ProtocolVersion"))
        ));
    }

    #[test]
    fn test_parse_mismatched_tags_fails() {
        let result = parse_identify_response("<a><b></a></b>");
        assert!(matches!(result, Err(ParseError::Xml(_))));
    }

    #[test]
    fn test_parse_missing_vendor_fails() {
        let body = r#"<IdentifyResponse>
  <ProtocolVersion>http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd</ProtocolVersion>
  <ProductVersion>OS: 0.0.0 SP: 0.0 Stack: 2.0</ProductVersion>
</IdentifyResponse>"#;

        let result = parse_identify_response(body);
        assert!(matches!(
            result,
            Err(ParseError::MissingField("ProductVendor"))
        ));
    }

    #[test]
    fn test_interpret_transport_failure() {
        let report = interpret(TransportOutcome::TransportFailure {
            message: "connection attempt failed".to_string(),
        });
        assert_eq!(
            report,
            ProbeReport::Failure {
                message: "connection error: connection attempt failed".to_string()
            }
        );
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_interpret_non_200_status() {
        let report = interpret(TransportOutcome::HttpStatus {
            code: 404,
            body: String::new(),
        });
        assert_eq!(
            report,
            ProbeReport::Failure {
                message: "unexpected status 404".to_string()
            }
        );
    }

    #[test]
    fn test_interpret_auth_challenge_status() {
        // WinRM answers 401 when it wants credentials; still a failed probe.
        let report = interpret(TransportOutcome::HttpStatus {
            code: 401,
            body: String::new(),
        });
        assert_eq!(
            report,
            ProbeReport::Failure {
                message: "unexpected status 401".to_string()
            }
        );
    }

    #[test]
    fn test_interpret_invalid_body() {
        let report = interpret(TransportOutcome::HttpStatus {
            code: 200,
            body: "I am invalid".to_string(),
        });
        assert_eq!(
            report,
            ProbeReport::Failure {
                message: "invalid response body".to_string()
            }
        );
    }

    #[test]
    fn test_interpret_success() {
        let report = interpret(TransportOutcome::HttpStatus {
            code: 200,
            body: IDENTIFY_2012R2.to_string(),
        });
        match report {
            ProbeReport::Success(result) => {
                assert_eq!(result.product_version, "OS: 0.0.0 SP: 0.0 Stack: 3.0");
            }
            ProbeReport::Failure { message } => panic!("unexpected failure: {}", message),
        }
    }

    #[test]
    fn test_interpret_is_deterministic() {
        let outcome = || TransportOutcome::HttpStatus {
            code: 200,
            body: IDENTIFY_2008R2.to_string(),
        };
        assert_eq!(interpret(outcome()), interpret(outcome()));
    }
}
