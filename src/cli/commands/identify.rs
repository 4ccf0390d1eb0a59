//! Identify command - probe a WSMAN endpoint
//!
//! Sends a single anonymous WS-Identify request to the target host and
//! reports the outcome. The probe makes exactly one attempt: no retry, no
//! authentication, no certificate trust validation.

use super::CommandContext;
use anyhow::Result;
use clap::Parser;
use tracing::debug;

use wsprobe::probe::{self, ProbeOptions, ProbeReport, ProbeTarget, Scheme};

/// Arguments for the identify command
#[derive(Parser, Debug, Clone)]
pub struct IdentifyArgs {
    /// Target hostname or IP address
    #[arg(required = true)]
    pub host: String,

    /// WSMAN port (default: 5985, or 5986 with --ssl)
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Probe over HTTPS
    #[arg(long)]
    pub ssl: bool,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl IdentifyArgs {
    /// Resolve the probe target from arguments and configuration
    fn target(&self, ctx: &CommandContext) -> wsprobe::error::Result<ProbeTarget> {
        let scheme = if self.ssl || ctx.config.probe.ssl {
            Scheme::Https
        } else {
            Scheme::Http
        };
        let port = self
            .port
            .or(ctx.config.probe.port)
            .unwrap_or_else(|| scheme.default_port());

        ProbeTarget::new(self.host.clone(), port, scheme)
    }

    /// Resolve the transport options from arguments and configuration
    fn options(&self, ctx: &CommandContext) -> ProbeOptions {
        ProbeOptions {
            timeout: self.timeout.unwrap_or(ctx.config.probe.timeout),
            verify_tls: ctx.config.probe.verify_tls,
        }
    }

    /// Execute the identify command
    pub async fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        let target = match self.target(ctx) {
            Ok(target) => target,
            Err(e) => {
                ctx.output.error(&e.to_string());
                return Ok(1);
            }
        };
        let options = self.options(ctx);

        debug!(
            host = %target.host,
            port = target.port,
            scheme = %target.scheme,
            timeout = options.timeout,
            "Starting WSMAN identify probe"
        );

        let report = probe::run(&target, &options).await;

        match &report {
            ProbeReport::Success(result) => {
                if ctx.verbosity >= 1 {
                    ctx.output.result(result);
                } else {
                    ctx.output.info(&format!(
                        "WSMAN endpoint at {} accepted the Identify request",
                        target.endpoint_url()
                    ));
                }
            }
            ProbeReport::Failure { message } => {
                if ctx.verbosity >= 1 {
                    ctx.output.error(message);
                } else {
                    ctx.output.warning(message);
                    ctx.output.error(&format!(
                        "WSMAN identify probe failed for {}",
                        target.endpoint_url()
                    ));
                }
            }
        }

        Ok(report.exit_code())
    }
}
