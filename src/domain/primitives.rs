//! Ledger block height shared by identifiers and events.

use serde::{Deserialize, Serialize};

/// Ledger block height. Assigned monotonically, not necessarily contiguous.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockNumber(pub u64);

impl BlockNumber {
    /// Create a BlockNumber from a raw height.
    pub fn new(height: u64) -> Self {
        BlockNumber(height)
    }

    /// Get the underlying height.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BlockNumber {
    fn from(height: u64) -> Self {
        BlockNumber(height)
    }
}

impl std::fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_number_ordering() {
        assert!(BlockNumber::new(3) < BlockNumber::new(7));
        assert_eq!(BlockNumber::from(5), BlockNumber::new(5));
    }

    #[test]
    fn test_block_number_serializes_as_plain_integer() {
        let json = serde_json::to_string(&BlockNumber::new(42)).unwrap();
        assert_eq!(json, "42");

        let parsed: BlockNumber = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(parsed.as_u64(), u64::MAX);
    }

    #[test]
    fn test_block_number_rejects_negative() {
        assert!(serde_json::from_str::<BlockNumber>("-1").is_err());
    }
}
