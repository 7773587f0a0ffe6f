//! Common test utilities for integration tests

use reqscrub_core::{Next, Report, ReportMiddleware, Result};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Terminal stage standing in for the transport: records every report it
/// receives so tests can assert what would have been sent.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<Report>>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Report> {
        self.sent.lock().unwrap().clone()
    }
}

impl ReportMiddleware for RecordingTransport {
    fn handle(&self, report: Report, next: Next<'_>) -> Result<Report> {
        self.sent.lock().unwrap().push(report.clone());
        next.run(report)
    }
}

/// Parse a `sensitive_data` section from a JSON literal.
#[allow(dead_code)]
pub fn sensitive_config(value: Value) -> reqscrub_filter::SensitiveDataConfig {
    reqscrub_filter::SensitiveDataConfig::from_value(value).expect("config literal must parse")
}
