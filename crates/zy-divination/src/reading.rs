//! Reading records and the diviner session.
//!
//! A [`Diviner`] owns a seeded RNG and runs the whole pipeline: validate,
//! cast, resolve, mutate, interpret, and score. It produces immutable
//! [`Reading`] records whose ownership passes entirely to the caller; the
//! engine keeps no reference and no history.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use zy_core::{Catalog, Hexagram};

use crate::caster;
use crate::confidence;
use crate::config::DivinerConfig;
use crate::error::{DivinationError, DivinationResult};
use crate::interpret::{self, Interpretation};
use crate::method::CastMethod;
use crate::mutation;
use crate::request::CastRequest;
use crate::resolver;

/// A completed, immutable divination record.
///
/// Hexagrams are embedded by value; serializing a reading inlines them,
/// so a reading round-trips through JSON without external references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Unique id of this reading.
    pub id: Uuid,
    /// When the reading was performed.
    pub timestamp: DateTime<Utc>,
    /// The question as supplied.
    pub question: String,
    /// The casting method used.
    pub method: CastMethod,
    /// The primary hexagram.
    pub hexagram: Hexagram,
    /// Strictly ascending 1-based positions of changing lines.
    pub changing_lines: Vec<u32>,
    /// The resulting hexagram, present iff at least one line changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resulting: Option<Hexagram>,
    /// The structured interpretation.
    pub interpretation: Interpretation,
    /// Reliability score in [0, 1].
    pub confidence: f64,
}

/// A divination session owning its RNG.
///
/// Stateless between calls apart from the RNG stream; concurrent sessions
/// need no coordination since the catalog is read-only.
pub struct Diviner {
    catalog: &'static Catalog,
    rng: StdRng,
}

impl Diviner {
    /// Create a diviner with a seeded RNG over the standard catalog.
    pub fn new(config: DivinerConfig) -> Self {
        Self {
            catalog: Catalog::standard(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Create a diviner seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            catalog: Catalog::standard(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// The catalog this diviner reads from.
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Perform a full divination.
    ///
    /// Returns every validation issue at once when the request is bad;
    /// otherwise the reading is handed to the caller complete.
    pub fn divine(&mut self, request: &CastRequest) -> DivinationResult<Reading> {
        let issues = request.validate();
        if !issues.is_empty() {
            return Err(DivinationError::InvalidRequest(issues));
        }

        let lines = caster::cast(request.method, request.numbers.as_deref(), &mut self.rng)?;
        let resolved = resolver::resolve(self.catalog, &lines)?;
        let resulting = mutation::mutate(self.catalog, &lines)?;
        let interpretation = interpret::interpret(
            &request.question,
            &resolved.hexagram,
            &resolved.changing,
            resulting.as_ref(),
        );
        let confidence = confidence::estimate(request.method, resolved.changing.len());

        Ok(Reading {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            question: request.question.clone(),
            method: request.method,
            hexagram: resolved.hexagram,
            changing_lines: resolved.changing,
            resulting,
            interpretation,
            confidence,
        })
    }
}

impl Default for Diviner {
    fn default() -> Self {
        Self::new(DivinerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divine_produces_a_complete_record() {
        let mut diviner = Diviner::default();
        let request = CastRequest::new("Will it rain?", CastMethod::ThreeCoins);
        let reading = diviner.divine(&request).unwrap();
        assert_eq!(reading.question, "Will it rain?");
        assert_eq!(reading.method, CastMethod::ThreeCoins);
        assert!((1..=64).contains(&reading.hexagram.number));
        assert_eq!(reading.interpretation.advice.len(), 6);
        assert!((0.0..=1.0).contains(&reading.confidence));
    }

    #[test]
    fn resulting_present_iff_lines_change() {
        let mut diviner = Diviner::new(DivinerConfig::default().with_seed(3));
        for _ in 0..50 {
            let reading = diviner
                .divine(&CastRequest::new("Again?", CastMethod::YarrowSticks))
                .unwrap();
            assert_eq!(
                reading.resulting.is_some(),
                !reading.changing_lines.is_empty()
            );
        }
    }

    #[test]
    fn invalid_request_reports_all_issues() {
        let mut diviner = Diviner::default();
        let request = CastRequest::with_numbers("", vec![1, 2]);
        let err = diviner.divine(&request).unwrap_err();
        match err {
            DivinationError::InvalidRequest(issues) => assert_eq!(issues.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn seeded_diviners_cast_identically() {
        let request = CastRequest::new("Same?", CastMethod::ThreeCoins);
        let mut a = Diviner::new(DivinerConfig::default().with_seed(77));
        let mut b = Diviner::new(DivinerConfig::default().with_seed(77));
        let ra = a.divine(&request).unwrap();
        let rb = b.divine(&request).unwrap();
        assert_eq!(ra.hexagram, rb.hexagram);
        assert_eq!(ra.changing_lines, rb.changing_lines);
        assert_eq!(ra.resulting, rb.resulting);
        assert_eq!(ra.interpretation, rb.interpretation);
        // Ids and timestamps are per-record, not per-seed.
        assert_ne!(ra.id, rb.id);
    }

    #[test]
    fn numbers_request_is_fully_deterministic() {
        let request = CastRequest::with_numbers("Fixed?", vec![1, 2, 3, 4, 5, 6]);
        let mut diviner = Diviner::default();
        let reading = diviner.divine(&request).unwrap();
        assert_eq!(reading.hexagram.number, 63);
        assert_eq!(reading.changing_lines, vec![6]);
        assert_eq!(reading.resulting.as_ref().unwrap().number, 37);
    }
}
