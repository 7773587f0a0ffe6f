//! Report middleware pipeline
//!
//! The host's reporting client dispatches every report through a chain of
//! registered middleware before handing it to the transport. Each middleware
//! receives the report plus a [`Next`] handle for the remainder of the chain
//! and must forward (or fail, aborting the send).

use crate::error::Result;
use crate::report::Report;
use std::sync::Arc;

/// A single stage in the report pipeline
pub trait ReportMiddleware: Send + Sync {
    /// Process the report and forward it via `next`.
    ///
    /// Returning an error aborts the dispatch; the report is not sent.
    fn handle(&self, report: Report, next: Next<'_>) -> Result<Report>;
}

/// Handle to the remaining stages of the pipeline
pub struct Next<'a> {
    remaining: &'a [Arc<dyn ReportMiddleware>],
}

impl Next<'_> {
    /// Forward the report to the rest of the chain
    pub fn run(self, report: Report) -> Result<Report> {
        match self.remaining.split_first() {
            Some((current, rest)) => current.handle(report, Next { remaining: rest }),
            None => Ok(report),
        }
    }
}

/// An ordered chain of report middleware
#[derive(Default)]
pub struct ReportPipeline {
    middleware: Vec<Arc<dyn ReportMiddleware>>,
}

impl ReportPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a middleware stage to the end of the chain
    pub fn register(mut self, middleware: Arc<dyn ReportMiddleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Run the report through every registered stage in order
    pub fn dispatch(&self, report: Report) -> Result<Report> {
        Next {
            remaining: &self.middleware,
        }
        .run(report)
    }
}
