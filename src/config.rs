use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    pub empty_events: EmptyEventsPolicy,
}

/// What `is_current` answers for a historical id whose event log is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyEventsPolicy {
    /// Return `ResolveError::EmptyEventLog`.
    #[default]
    Reject,
    /// Treat the snapshot as superseded.
    Stale,
    /// Treat the snapshot as vacuously current.
    Current,
}

impl EmptyEventsPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyEventsPolicy::Reject => "reject",
            EmptyEventsPolicy::Stale => "stale",
            EmptyEventsPolicy::Current => "current",
        }
    }
}

impl std::fmt::Display for EmptyEventsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl ResolverConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let empty_events = match env_map
            .get("EMPTY_EVENTS_POLICY")
            .map(|s| s.trim())
            .unwrap_or("reject")
        {
            "reject" => EmptyEventsPolicy::Reject,
            "stale" => EmptyEventsPolicy::Stale,
            "current" => EmptyEventsPolicy::Current,
            other => {
                return Err(ConfigError::InvalidValue(
                    "EMPTY_EVENTS_POLICY".to_string(),
                    format!("must be reject, stale, or current, got {}", other),
                ))
            }
        };

        Ok(ResolverConfig { empty_events })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_reject() {
        let config = ResolverConfig::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.empty_events, EmptyEventsPolicy::Reject);
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_each_policy_parses() {
        for (raw, expected) in [
            ("reject", EmptyEventsPolicy::Reject),
            ("stale", EmptyEventsPolicy::Stale),
            (" current ", EmptyEventsPolicy::Current),
        ] {
            let mut env_map = HashMap::new();
            env_map.insert("EMPTY_EVENTS_POLICY".to_string(), raw.to_string());
            let config = ResolverConfig::from_env_map(env_map).unwrap();
            assert_eq!(config.empty_events, expected);
        }
    }

    #[test]
    fn test_invalid_policy() {
        let mut env_map = HashMap::new();
        env_map.insert("EMPTY_EVENTS_POLICY".to_string(), "maybe".to_string());
        let result = ResolverConfig::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "EMPTY_EVENTS_POLICY"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(EmptyEventsPolicy::Stale.to_string(), "stale");
    }
}
