//! Divination engine for Zhouyi.
//!
//! Turns a casting method and raw input into a structured reading: a
//! primary hexagram, its changing lines, the resulting hexagram when lines
//! change, an interpretation, and a confidence score. The engine is a pure
//! pipeline over the shared symbol catalog; randomness enters only through
//! an injected RNG, so a seeded diviner is fully reproducible.

pub mod caster;
pub mod confidence;
pub mod config;
pub mod daily;
pub mod error;
pub mod interpret;
pub mod method;
pub mod mutation;
pub mod reading;
pub mod request;
pub mod resolver;

pub use config::DivinerConfig;
pub use error::{DivinationError, DivinationResult};
pub use interpret::Interpretation;
pub use method::CastMethod;
pub use reading::{Diviner, Reading};
pub use request::{CastRequest, ValidationIssue};
pub use resolver::ResolvedCast;
