//! Sensitive-data configuration surface
//!
//! The host supplies the `sensitive_data` configuration section already
//! parsed. The three rule entries are kept as raw [`Value`]s on purpose:
//! their shape is validated by [`RuleSet::from_config`](crate::rules::RuleSet)
//! so that a misconfigured entry fails with an error naming it, rather than
//! being silently dropped or rejected by a generic deserialization message.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `sensitive_data` configuration section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensitiveDataConfig {
    /// Exact key names to treat as sensitive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Value>,

    /// Patterns matched against keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_regex: Option<Value>,

    /// Patterns matched against scalar values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_regex: Option<Value>,

    /// Replacement for sensitive values; defaults to `***SANITIZED***`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanitization_text: Option<String>,
}

impl SensitiveDataConfig {
    /// Parse the section from an already-loaded configuration value
    pub fn from_value(value: Value) -> reqscrub_core::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_entries_optional() {
        let config = SensitiveDataConfig::from_value(json!({})).unwrap();
        assert!(config.keys.is_none());
        assert!(config.key_regex.is_none());
        assert!(config.value_regex.is_none());
        assert!(config.sanitization_text.is_none());
    }

    #[test]
    fn test_entries_kept_raw_for_validation() {
        // A wrong-typed entry must survive parsing so rule construction can
        // reject it by name.
        let config = SensitiveDataConfig::from_value(json!({
            "keys": "password",
            "key_regex": ["/^secret_/"],
        }))
        .unwrap();

        assert_eq!(config.keys, Some(json!("password")));
        assert_eq!(config.key_regex, Some(json!(["/^secret_/"])));
    }

    #[test]
    fn test_sanitization_text_parsed() {
        let config = SensitiveDataConfig::from_value(json!({
            "sanitization_text": "[GONE]",
        }))
        .unwrap();

        assert_eq!(config.sanitization_text.as_deref(), Some("[GONE]"));
    }
}
