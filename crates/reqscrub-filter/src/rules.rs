//! Sensitivity rules
//!
//! A [`RuleSet`] is the validated, compiled form of the `sensitive_data`
//! configuration section. Construction performs all type checking and regex
//! compilation up front so that a misconfiguration surfaces before any
//! payload is walked; once built, a `RuleSet` is immutable and safe to share
//! across concurrent filtering calls.

use crate::config::SensitiveDataConfig;
use regex::Regex;
use reqscrub_core::{Error, Result};
use serde_json::Value;
use std::borrow::Cow;

/// Replacement used when no `sanitization_text` is configured
pub const DEFAULT_SANITIZATION_TEXT: &str = "***SANITIZED***";

/// Compiled matching rules for the sensitivity predicate
#[derive(Debug, Clone)]
pub struct RuleSet {
    keys: Vec<String>,
    key_patterns: Vec<Regex>,
    value_patterns: Vec<Regex>,
    marker: String,
}

impl RuleSet {
    /// Build and validate a rule set from configuration.
    ///
    /// Each rule entry must be an array (or absent); anything else is a
    /// configuration error naming the entry. Patterns are compiled here, so
    /// an invalid pattern is also rejected before any payload is touched.
    pub fn from_config(config: &SensitiveDataConfig) -> Result<Self> {
        let keys = string_entries(config.keys.as_ref(), "sensitive_data.keys")?;
        let key_patterns = pattern_entries(config.key_regex.as_ref(), "sensitive_data.key_regex")?;
        let value_patterns =
            pattern_entries(config.value_regex.as_ref(), "sensitive_data.value_regex")?;
        let marker = config
            .sanitization_text
            .clone()
            .unwrap_or_else(|| DEFAULT_SANITIZATION_TEXT.to_string());

        Ok(Self {
            keys,
            key_patterns,
            value_patterns,
            marker,
        })
    }

    /// A rule set that matches nothing and replaces with the default marker
    pub fn empty() -> Self {
        Self {
            keys: Vec::new(),
            key_patterns: Vec::new(),
            value_patterns: Vec::new(),
            marker: DEFAULT_SANITIZATION_TEXT.to_string(),
        }
    }

    /// The replacement string substituted for sensitive values
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Whether any rule category has at least one entry
    pub fn has_rules(&self) -> bool {
        !self.keys.is_empty() || !self.key_patterns.is_empty() || !self.value_patterns.is_empty()
    }

    /// The sensitivity predicate.
    ///
    /// Checks run cheapest-and-most-specific first: exact key membership,
    /// then key patterns in configuration order, then value patterns in
    /// configuration order. Value patterns apply to scalar leaves only;
    /// matching a pattern against a composite structure is meaningless, so
    /// containers are judged by their key alone.
    pub fn is_sensitive(&self, key: Option<&str>, value: &Value) -> bool {
        if let Some(key) = key {
            if self.keys.iter().any(|k| k == key) {
                return true;
            }
            if self.key_patterns.iter().any(|p| p.is_match(key)) {
                return true;
            }
        }

        if !self.value_patterns.is_empty() && !is_container(value) {
            let text = scalar_text(value);
            return self.value_patterns.iter().any(|p| p.is_match(&text));
        }

        false
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Textual form a scalar is matched against: strings as-is, numbers and
/// booleans in display form, null as the empty string.
fn scalar_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

fn string_entries(entry: Option<&Value>, name: &str) -> Result<Vec<String>> {
    match entry {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(Error::Config(format!(
                    "{name} entries must be strings, got {other}"
                ))),
            })
            .collect(),
        Some(_) => Err(Error::Config(format!("{name} must be an array"))),
    }
}

fn pattern_entries(entry: Option<&Value>, name: &str) -> Result<Vec<Regex>> {
    match entry {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => compile_pattern(s, name),
                other => Err(Error::Config(format!(
                    "{name} entries must be strings, got {other}"
                ))),
            })
            .collect(),
        Some(_) => Err(Error::Config(format!("{name} must be an array"))),
    }
}

/// Compile a configured pattern, accepting both bare regex syntax and
/// PCRE-style `/body/flags` delimited patterns.
fn compile_pattern(pattern: &str, name: &str) -> Result<Regex> {
    let translated = translate_delimited(pattern, name)?;
    Regex::new(&translated).map_err(|e| {
        Error::Config(format!("{name} contains an invalid pattern {pattern:?}: {e}"))
    })
}

/// Strip `/.../flags` delimiters, mapping trailing flags to inline `(?...)`
/// groups. Patterns without a leading slash pass through untouched; a
/// leading slash with no closing delimiter is malformed.
fn translate_delimited(pattern: &str, name: &str) -> Result<String> {
    let Some(body_and_flags) = pattern.strip_prefix('/') else {
        return Ok(pattern.to_string());
    };
    let Some(close) = body_and_flags.rfind('/') else {
        return Err(Error::Config(format!(
            "{name} pattern {pattern:?} is missing its closing delimiter"
        )));
    };

    let body = &body_and_flags[..close];
    let flags = &body_and_flags[close + 1..];

    if let Some(bad) = flags.chars().find(|c| !"imsxU".contains(*c)) {
        return Err(Error::Config(format!(
            "{name} pattern {pattern:?} uses unsupported flag {bad:?}"
        )));
    }

    if flags.is_empty() {
        Ok(body.to_string())
    } else {
        Ok(format!("(?{flags}){body}"))
    }
}
