//! Station name ↔ telecode lookup.
//!
//! The ticketing service identifies stations by telecode, while users type
//! station names. The mapping comes from a scraped feed script, fetched at
//! startup (or read from a local snapshot) and immutable afterwards.

mod cache;
mod client;
mod directory;
mod error;
mod loader;

pub use cache::{StationCache, StationCacheConfig};
pub use client::{StationClient, StationClientConfig};
pub use directory::{Station, StationDirectory, parse_feed};
pub use error::StationError;
pub use loader::load_directory;
