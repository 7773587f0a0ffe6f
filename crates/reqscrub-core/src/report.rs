//! In-flight error report
//!
//! A [`Report`] is the unit that travels through the middleware pipeline on
//! its way to the external monitoring service. The host attaches whatever it
//! captured about the failure to the context map (parsed request payload,
//! session data, environment); middleware may rewrite context entries and
//! attach named groups that the transport serializes alongside the report.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Severity of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportLevel {
    Debug,
    Info,
    Warning,
    #[default]
    Error,
    Critical,
}

/// An error report in flight through the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Human-readable description of the failure
    pub message: String,

    /// Severity of the report
    #[serde(default)]
    pub level: ReportLevel,

    /// Everything the host captured about the failure, keyed by name
    #[serde(default)]
    context: Map<String, Value>,

    /// Named payload groups attached for the transport
    #[serde(default)]
    groups: Map<String, Value>,
}

impl Report {
    /// Create a new report with the given message at the default level
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ReportLevel::default(),
            context: Map::new(),
            groups: Map::new(),
        }
    }

    /// Set the severity level
    pub fn with_level(mut self, level: ReportLevel) -> Self {
        self.level = level;
        self
    }

    /// Attach a context entry
    pub fn with_context(mut self, key: impl Into<String>, value: Value) -> Self {
        self.context.insert(key.into(), value);
        self
    }

    /// All context captured for this report
    pub fn context(&self) -> &Map<String, Value> {
        &self.context
    }

    /// Mutable access to the context map
    pub fn context_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.context
    }

    /// Attach a named payload group, replacing any previous group of the
    /// same name
    pub fn group(&mut self, name: impl Into<String>, payload: Value) {
        self.groups.insert(name.into(), payload);
    }

    /// Groups attached so far
    pub fn groups(&self) -> &Map<String, Value> {
        &self.groups
    }
}
