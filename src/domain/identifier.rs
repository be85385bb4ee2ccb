//! Composite listing identifier.
//!
//! A listing is addressed by three stable coordinates, written `network-contract-index`.
//! A fourth segment pins the identifier to the block at which a snapshot of the
//! listing was taken: `network-contract-index-block`. The string form only exists at
//! the boundary; everything inside the crate works with [`ListingIdentifier`].
//!
//! Segments keep the digit text they were parsed from. Any run of ASCII digits is
//! a valid segment, however long, and formatting reproduces it unchanged.

use crate::domain::BlockNumber;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const SEPARATOR: char = '-';

/// One non-empty run of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment(String);

impl Segment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, or `None` if it does not fit in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for Segment {
    fn from(value: u64) -> Self {
        Segment(value.to_string())
    }
}

impl FromStr for Segment {
    type Err = ();

    // `u64::from_str` would also take a leading '+', the grammar does not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(());
        }
        Ok(Segment(s.to_string()))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parsed listing identifier, live or historical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingIdentifier {
    pub network: Segment,
    pub contract: Segment,
    pub index: Segment,
    /// Block the snapshot was taken at. `None` for the live listing.
    pub snapshot: Option<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierParseError {
    #[error("expected 3 or 4 segments, got {0}")]
    SegmentCount(usize),
    #[error("segment {position} is not a non-negative integer: {segment:?}")]
    InvalidSegment { position: usize, segment: String },
}

impl ListingIdentifier {
    /// Identifier of the live listing.
    pub fn live(network: u64, contract: u64, index: u64) -> Self {
        ListingIdentifier {
            network: network.into(),
            contract: contract.into(),
            index: index.into(),
            snapshot: None,
        }
    }

    /// Same listing, pinned to `block`.
    pub fn at_block(&self, block: BlockNumber) -> Self {
        ListingIdentifier {
            snapshot: Some(block.as_u64().into()),
            ..self.current()
        }
    }

    pub fn is_historical(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Snapshot block as a ledger height. `None` for a live id, and for a
    /// snapshot segment too large to be any block.
    pub fn snapshot_block(&self) -> Option<BlockNumber> {
        self.snapshot.as_ref().and_then(Segment::to_u64).map(BlockNumber)
    }

    /// The live form of this identifier, with any snapshot block stripped.
    pub fn current(&self) -> Self {
        ListingIdentifier {
            network: self.network.clone(),
            contract: self.contract.clone(),
            index: self.index.clone(),
            snapshot: None,
        }
    }

    /// True if both identifiers address the same listing, regardless of snapshot.
    pub fn is_snapshot_of(&self, other: &ListingIdentifier) -> bool {
        self.network == other.network && self.contract == other.contract && self.index == other.index
    }
}

impl FromStr for ListingIdentifier {
    type Err = IdentifierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: Vec<&str> = s.split(SEPARATOR).collect();
        if raw.len() != 3 && raw.len() != 4 {
            return Err(IdentifierParseError::SegmentCount(raw.len()));
        }

        let mut segments = raw
            .iter()
            .enumerate()
            .map(|(position, segment)| {
                segment
                    .parse::<Segment>()
                    .map_err(|_| IdentifierParseError::InvalidSegment {
                        position,
                        segment: segment.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();

        // Length checked above, so the first three are always present.
        match (segments.next(), segments.next(), segments.next()) {
            (Some(network), Some(contract), Some(index)) => Ok(ListingIdentifier {
                network,
                contract,
                index,
                snapshot: segments.next(),
            }),
            _ => Err(IdentifierParseError::SegmentCount(raw.len())),
        }
    }
}

impl fmt::Display for ListingIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.network, self.contract, self.index
        )?;
        if let Some(block) = &self.snapshot {
            write!(f, "{SEPARATOR}{}", block)?;
        }
        Ok(())
    }
}

impl Serialize for ListingIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ListingIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
