//! Ticket availability queries.
//!
//! Key characteristics of the query endpoint:
//! - Stations are given as telecodes, dates as "YYYY-MM-DD"
//! - The response carries one opaque `|`-delimited string per train under
//!   `data.result`; field positions are defined by the service
//! - Seat fields are empty when a class is not sold on a train

mod client;
mod decode;
mod error;
mod source;
mod types;

pub use client::{QueryClient, QueryConfig, TicketQuery};
pub use decode::{
    DecodeOutcome, MIN_FIELDS, NO_AVAILABILITY, RawTrainRecord, SeatAvailability, SeatClass,
    SkippedRecord, StationPair, TimePair, TrainEntry, TrainRecordDecoder,
};
pub use error::{DecodeError, QueryError};
pub use source::{ReplayTicketSource, TicketSource};
pub use types::{QueryData, QueryResponse, parse_response};
