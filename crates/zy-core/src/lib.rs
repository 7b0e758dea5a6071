//! Core types for Zhouyi: line values, trigrams, and the hexagram catalog.
//!
//! This crate defines the symbolic data model that the divination engine
//! computes over. It is independent of any casting method — you can look up
//! hexagrams programmatically or deserialize them from JSON.

/// The built-once symbol catalog and its lookups.
pub mod catalog;
pub(crate) mod data;
/// Error types used throughout the crate.
pub mod error;
/// Hexagram records: trigram pairs with judgment and interpretive texts.
pub mod hexagram;
/// The four line states produced by casting.
pub mod line;
/// The eight trigrams and their metadata.
pub mod trigram;

/// Re-export the catalog.
pub use catalog::Catalog;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export hexagram types.
pub use hexagram::{Hexagram, LineText, Meanings};
/// Re-export the line state.
pub use line::LineValue;
/// Re-export trigram types.
pub use trigram::{Element, Trigram};
