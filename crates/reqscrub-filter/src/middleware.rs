//! Report pipeline integration
//!
//! [`RequestDataScrubber`] is the middleware stage that binds the scrubber
//! into the host's report pipeline: it rewrites the `request_data` context
//! entry with its sanitized copy and attaches the result as a named group
//! for the transport, then forwards. A report without `request_data` passes
//! through untouched; the stage never short-circuits the chain.

use crate::config::SensitiveDataConfig;
use crate::scrubber::Scrubber;
use reqscrub_core::{Next, Report, ReportMiddleware, Result};
use tracing::{debug, trace};

/// Context entry holding the parsed request payload
pub const REQUEST_DATA_KEY: &str = "request_data";

/// Middleware that sanitizes `request_data` before a report leaves the
/// process
#[derive(Debug)]
pub struct RequestDataScrubber {
    scrubber: Scrubber,
}

impl RequestDataScrubber {
    pub fn new(scrubber: Scrubber) -> Self {
        Self { scrubber }
    }

    /// Build the stage from configuration. Misconfigured rules fail here,
    /// at registration time, so an invalid setup can never leak an
    /// unsanitized report.
    pub fn from_config(config: &SensitiveDataConfig) -> Result<Self> {
        Ok(Self::new(Scrubber::from_config(config)?))
    }
}

impl ReportMiddleware for RequestDataScrubber {
    fn handle(&self, mut report: Report, next: Next<'_>) -> Result<Report> {
        if let Some(payload) = report.context().get(REQUEST_DATA_KEY) {
            let scrubbed = self.scrubber.scrub(payload);
            report
                .context_mut()
                .insert(REQUEST_DATA_KEY.to_string(), scrubbed.clone());
            report.group(REQUEST_DATA_KEY, scrubbed);
            debug!("scrubbed request_data before forwarding report");
        } else {
            trace!("report has no request_data, forwarding unchanged");
        }

        next.run(report)
    }
}
