//! Serializable resolution report.

use crate::domain::BlockNumber;
use serde::{Deserialize, Serialize};

/// Result of resolving one listing.
///
/// `is_current` is `None` exactly when `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub id: String,
    pub historical: bool,
    pub current_id: Option<String>,
    pub is_current: Option<bool>,
    pub latest_block: Option<BlockNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Resolution {
    /// Report for an input record that could not be decoded at all.
    pub fn rejected(id: impl Into<String>, error: impl Into<String>) -> Self {
        Resolution {
            id: id.into(),
            historical: false,
            current_id: None,
            is_current: None,
            latest_block: None,
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_serialization() {
        let report = Resolution {
            id: "1-2-3-5".to_string(),
            historical: true,
            current_id: Some("1-2-3".to_string()),
            is_current: Some(true),
            latest_block: Some(BlockNumber::new(5)),
            error: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1-2-3-5",
                "historical": true,
                "currentId": "1-2-3",
                "isCurrent": true,
                "latestBlock": 5,
            })
        );
    }

    #[test]
    fn test_rejected_report() {
        let report = Resolution::rejected("", "expected value at line 1 column 1");
        assert!(!report.is_ok());
        assert_eq!(report.is_current, None);
    }
}
