//! Server crate for the quote card wall.
//!
//! This crate contains the orchestrator that coordinates session status,
//! the record source and the filter/paginate pipeline.

pub mod orchestrator;

pub use orchestrator::{BoardState, QuoteBoard};
