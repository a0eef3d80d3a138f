//! Command-line railway ticket viewer.
//!
//! Resolves station names to telecodes, queries ticket availability for a
//! date, and prints the trains as a table, optionally limited to some train
//! categories.

pub mod cli;
pub mod domain;
pub mod logging;
pub mod query;
pub mod render;
pub mod search;
pub mod stations;
