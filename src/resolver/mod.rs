//! Historical listing resolution.
//!
//! A listing id either addresses the live listing (`network-contract-index`) or a
//! snapshot of it taken at some block (`network-contract-index-block`). A snapshot
//! is current when its block is the latest block in the listing's event log.

pub mod resolution;

pub use resolution::Resolution;

use crate::config::{EmptyEventsPolicy, ResolverConfig};
use crate::domain::{latest_block, Listing, ListingIdentifier};
use crate::error::ResolveError;

/// Resolves listing ids against their event logs under a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Resolver { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// True iff `listing.id` is four dash-separated runs of ASCII digits.
    pub fn is_historical(&self, listing: &Listing) -> bool {
        snapshot_id(listing).is_some()
    }

    /// Live id of a historical listing; `None` if the id is already live or malformed.
    pub fn current_identifier_of(&self, listing: &Listing) -> Option<String> {
        snapshot_id(listing).map(|id| id.current().to_string())
    }

    /// Whether the listing id reflects the latest state in its event log.
    ///
    /// Live and malformed ids are always current. A snapshot id is current when
    /// its block equals the highest `block_number` among `listing.events`.
    ///
    /// # Errors
    /// `ResolveError::EmptyEventLog` for a snapshot id with no events, when the
    /// configured policy is `EmptyEventsPolicy::Reject`.
    pub fn is_current(&self, listing: &Listing) -> Result<bool, ResolveError> {
        let Some(id) = snapshot_id(listing) else {
            return Ok(true);
        };

        match latest_block(&listing.events) {
            Some(latest) => {
                // A snapshot segment past u64::MAX is newer than any block on the ledger.
                let current = id.snapshot_block() == Some(latest);
                tracing::debug!(
                    id = %listing.id,
                    latest = %latest,
                    current,
                    "Reconciled listing snapshot"
                );
                Ok(current)
            }
            None => match self.config.empty_events {
                EmptyEventsPolicy::Reject => {
                    tracing::warn!(id = %listing.id, "Snapshot listing has no events");
                    Err(ResolveError::EmptyEventLog {
                        id: listing.id.clone(),
                    })
                }
                EmptyEventsPolicy::Stale => Ok(false),
                EmptyEventsPolicy::Current => Ok(true),
            },
        }
    }

    /// Run all three checks and collect them into a single report.
    pub fn resolve(&self, listing: &Listing) -> Resolution {
        let (is_current, error) = match self.is_current(listing) {
            Ok(current) => (Some(current), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Resolution {
            id: listing.id.clone(),
            historical: self.is_historical(listing),
            current_id: self.current_identifier_of(listing),
            is_current,
            latest_block: listing.latest_block(),
            error,
        }
    }
}

fn snapshot_id(listing: &Listing) -> Option<ListingIdentifier> {
    listing.identifier().filter(ListingIdentifier::is_historical)
}

/// [`Resolver::is_historical`] with the default configuration.
pub fn is_historical(listing: &Listing) -> bool {
    Resolver::default().is_historical(listing)
}

/// [`Resolver::current_identifier_of`] with the default configuration.
pub fn current_identifier_of(listing: &Listing) -> Option<String> {
    Resolver::default().current_identifier_of(listing)
}

/// [`Resolver::is_current`] with the default configuration, which rejects
/// snapshot ids with an empty event log.
pub fn is_current(listing: &Listing) -> Result<bool, ResolveError> {
    Resolver::default().is_current(listing)
}
