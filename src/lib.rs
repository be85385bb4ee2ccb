pub mod config;
pub mod domain;
pub mod error;
pub mod resolver;
pub mod stream;

pub use config::{ConfigError, EmptyEventsPolicy, ResolverConfig};
pub use domain::{
    BlockNumber, IdentifierParseError, Listing, ListingEvent, ListingEventKind, ListingIdentifier,
    Segment,
};
pub use error::{AppError, ResolveError};
pub use resolver::{current_identifier_of, is_current, is_historical, Resolution, Resolver};
pub use stream::{resolve_stream, StreamSummary};
