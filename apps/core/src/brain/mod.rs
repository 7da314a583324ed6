//! # Brain Module
//!
//! The classification pipeline for CircuitChat: everything between a raw
//! chat message and the structured reply the transport layer renders.
//!
//! ## Components
//! - `classifier`: ordered rule chain routing each message to a handler
//! - `ohm`: Ohm's Law solver (two known quantities, compute the third)
//! - `resistors`: series/parallel equivalent resistance
//! - `intents`: pattern table with first-match-wins lookup
//! - `quantity`: token normalization and numeric rendering

pub mod classifier;
pub mod intents;
pub mod ohm;
pub mod quantity;
pub mod resistors;

// Re-export main types for convenience
pub use classifier::{MessageClassifier, Reply, Topic};
pub use intents::{IntentRecord, IntentTable};
