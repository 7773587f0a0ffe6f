//! reqscrub Sensitive-Data Filtering
//!
//! This crate scrubs sensitive fields out of the request payload attached to
//! an error report before the report leaves the process:
//! - Exact key, key-pattern, and value-pattern matching rules
//! - Structure-preserving recursive replacement with a sanitization marker
//! - A [`ReportMiddleware`](reqscrub_core::ReportMiddleware) stage wiring the
//!   scrubber into the host's report pipeline

pub mod config;
pub mod middleware;
pub mod rules;
pub mod scrubber;

pub use config::SensitiveDataConfig;
pub use middleware::{REQUEST_DATA_KEY, RequestDataScrubber};
pub use rules::{DEFAULT_SANITIZATION_TEXT, RuleSet};
pub use scrubber::Scrubber;
