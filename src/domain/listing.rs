//! Listing read model and its event log.

use crate::domain::{BlockNumber, ListingIdentifier};
use serde::{Deserialize, Serialize};

/// Marketplace contract event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingEventKind {
    ListingCreated,
    ListingUpdated,
    ListingWithdrawn,
    ListingArbitrated,
    ListingData,
    OfferCreated,
    OfferAccepted,
    OfferFinalized,
    OfferWithdrawn,
    OfferFundsAdded,
    OfferDisputed,
    OfferRuling,
    OfferData,
    /// Any event name this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// One state-changing event on a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingEvent {
    pub block_number: BlockNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<ListingEventKind>,
}

impl ListingEvent {
    pub fn new(block_number: BlockNumber) -> Self {
        ListingEvent {
            block_number,
            event: None,
        }
    }

    pub fn with_kind(block_number: BlockNumber, kind: ListingEventKind) -> Self {
        ListingEvent {
            block_number,
            event: Some(kind),
        }
    }
}

/// A listing as supplied by the data-fetching layer.
///
/// `id` is kept as the raw string the collaborator sent: a malformed id is a
/// valid input that simply never resolves as historical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    /// In order of occurrence, not necessarily by block.
    #[serde(default)]
    pub events: Vec<ListingEvent>,
}

impl Listing {
    pub fn new(id: impl Into<String>, events: Vec<ListingEvent>) -> Self {
        Listing {
            id: id.into(),
            events,
        }
    }

    /// Parsed identifier, or `None` if `id` is malformed.
    pub fn identifier(&self) -> Option<ListingIdentifier> {
        self.id.parse().ok()
    }

    /// Highest block number in the event log.
    pub fn latest_block(&self) -> Option<BlockNumber> {
        latest_block(&self.events)
    }
}

/// Highest block number across `events`, `None` when the log is empty.
pub fn latest_block(events: &[ListingEvent]) -> Option<BlockNumber> {
    events.iter().map(|e| e.block_number).max()
}
