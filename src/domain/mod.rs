//! Domain types for marketplace listing resolution.
//!
//! This module provides:
//! - `BlockNumber`, the ledger height primitive
//! - `ListingIdentifier`, the typed composite key with its parse/format pair
//! - `Listing` and `ListingEvent`, the read model supplied by the data layer

pub mod identifier;
pub mod listing;
pub mod primitives;

pub use identifier::{IdentifierParseError, ListingIdentifier, Segment};
pub use listing::{latest_block, Listing, ListingEvent, ListingEventKind};
pub use primitives::BlockNumber;
