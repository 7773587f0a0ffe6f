//! reqscrub Core Types and Traits
//!
//! This crate provides the fundamental types shared across reqscrub:
//! - The in-flight error [`Report`] with its context and attached groups
//! - The [`ReportMiddleware`] pipeline abstraction
//! - Core error types

pub mod error;
pub mod pipeline;
pub mod report;

pub use error::{Error, Result};
pub use pipeline::{Next, ReportMiddleware, ReportPipeline};
pub use report::{Report, ReportLevel};
