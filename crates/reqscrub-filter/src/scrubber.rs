//! Recursive payload scrubbing
//!
//! The walk is a pure structural transform: it returns a new payload with
//! the same container kinds, key sets, and ordering as the input, replacing
//! only the leaves (or whole subtrees) the rule set marks sensitive.

use crate::config::SensitiveDataConfig;
use crate::rules::RuleSet;
use reqscrub_core::Result;
use serde_json::Value;

/// Nesting depth past which the walk stops descending. A parsed payload is
/// acyclic, so depth only grows with genuine nesting; the cutoff keeps a
/// pathologically deep input from exhausting the stack. Anything deeper is
/// replaced wholly by the marker — a subtree the walk cannot inspect must
/// not leave the process unsanitized.
const MAX_SCRUB_DEPTH: usize = 128;

/// Stateless sanitization service over nested payloads
#[derive(Debug, Clone)]
pub struct Scrubber {
    rules: RuleSet,
}

impl Scrubber {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Validate configuration and build the scrubber. Fails with a
    /// configuration error before any payload is walked.
    pub fn from_config(config: &SensitiveDataConfig) -> Result<Self> {
        Ok(Self::new(RuleSet::from_config(config)?))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Produce a sanitized copy of the payload.
    ///
    /// The input is never mutated; the result is structurally identical
    /// except that every sensitive entry carries the marker string instead
    /// of its value.
    pub fn scrub(&self, payload: &Value) -> Value {
        self.scrub_entry(None, payload, 0)
    }

    /// The two-branch dispatch: a sensitive entry becomes the marker no
    /// matter its shape, so a container must be judged by its key *before*
    /// descending — an entire sensitive subtree collapses to one marker.
    fn scrub_entry(&self, key: Option<&str>, value: &Value, depth: usize) -> Value {
        if self.rules.is_sensitive(key, value) {
            return Value::String(self.rules.marker().to_string());
        }
        match value {
            Value::Object(_) | Value::Array(_) => self.scrub_container(value, depth),
            scalar => scalar.clone(),
        }
    }

    fn scrub_container(&self, value: &Value, depth: usize) -> Value {
        if depth >= MAX_SCRUB_DEPTH {
            return Value::String(self.rules.marker().to_string());
        }
        match value {
            Value::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, child)| (key.clone(), self.scrub_entry(Some(key), child, depth + 1)))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, child)| {
                        // Sequence elements are keyed by their index so key
                        // patterns can address positions.
                        let key = index.to_string();
                        self.scrub_entry(Some(&key), child, depth + 1)
                    })
                    .collect(),
            ),
            scalar => scalar.clone(),
        }
    }
}
