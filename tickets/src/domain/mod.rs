//! Domain types for the ticket viewer.
//!
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod category;
mod date;
mod duration;
mod error;
mod telecode;

pub use category::{CategoryFilter, TrainCategory};
pub use date::TravelDate;
pub use duration::{DurationError, TravelDuration};
pub use error::InputError;
pub use telecode::{InvalidTelecode, Telecode};
