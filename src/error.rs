use crate::config::ConfigError;
use thiserror::Error;

/// Outcomes of reconciling a listing that are not a yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Historical listing {id} has an empty event log")]
    EmptyEventLog { id: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResolveError::EmptyEventLog {
            id: "1-2-3-0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Historical listing 1-2-3-0 has an empty event log"
        );

        let err = AppError::from(ConfigError::InvalidValue(
            "EMPTY_EVENTS_POLICY".to_string(),
            "bad".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for EMPTY_EVENTS_POLICY: bad"
        );
    }
}
