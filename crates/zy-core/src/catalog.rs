//! The built-once symbol catalog and its lookups.
//!
//! The catalog owns the canonical eight trigrams and sixty-four hexagrams,
//! built from the static tables in `data`. It is read-only after
//! construction; callers clone entries into their own records.

use std::sync::OnceLock;

use crate::data;
use crate::error::{CoreError, CoreResult};
use crate::hexagram::{Hexagram, LineText, Meanings};
use crate::trigram::Trigram;

/// The read-only symbol catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    trigrams: Vec<Trigram>,
    hexagrams: Vec<Hexagram>,
}

static STANDARD: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Build a fresh catalog from the built-in tables.
    pub fn new() -> Self {
        let trigrams: Vec<Trigram> = data::TRIGRAMS
            .iter()
            .map(|rec| Trigram {
                id: rec.id.to_string(),
                name: rec.name.to_string(),
                english: rec.english.to_string(),
                character: rec.character.to_string(),
                symbol: rec.symbol.to_string(),
                lines: rec.lines,
                element: rec.element,
                direction: rec.direction.to_string(),
                season: rec.season.to_string(),
                meaning: rec.meaning.to_string(),
            })
            .collect();

        let trigram = |id: &str| -> Trigram {
            trigrams
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .expect("hexagram table references a built-in trigram id")
        };

        let hexagrams: Vec<Hexagram> = data::HEXAGRAMS
            .iter()
            .map(|rec| Hexagram {
                id: rec.id.to_string(),
                number: rec.number,
                name: rec.name.to_string(),
                character: rec.character.to_string(),
                english: rec.english.to_string(),
                upper: trigram(rec.upper),
                lower: trigram(rec.lower),
                judgment: rec.judgment.to_string(),
                image: rec.image.to_string(),
                meanings: Meanings {
                    general: rec.meanings[0].to_string(),
                    love: rec.meanings[1].to_string(),
                    career: rec.meanings[2].to_string(),
                    health: rec.meanings[3].to_string(),
                    finance: rec.meanings[4].to_string(),
                    advice: rec.meanings[5].to_string(),
                },
                changing_lines: rec.lines.map(|(text, meaning)| LineText {
                    text: text.to_string(),
                    meaning: meaning.to_string(),
                }),
            })
            .collect();

        Self {
            trigrams,
            hexagrams,
        }
    }

    /// The shared process-wide catalog, built on first access.
    ///
    /// Construction is idempotent and safe under concurrent first access.
    pub fn standard() -> &'static Catalog {
        STANDARD.get_or_init(Catalog::new)
    }

    /// All eight trigrams.
    pub fn trigrams(&self) -> &[Trigram] {
        &self.trigrams
    }

    /// All sixty-four hexagrams in King Wen order.
    pub fn hexagrams(&self) -> &[Hexagram] {
        &self.hexagrams
    }

    /// Look up a trigram by its stable id.
    pub fn trigram_by_id(&self, id: &str) -> Option<&Trigram> {
        self.trigrams.iter().find(|t| t.id == id)
    }

    /// Look up the trigram whose line triple matches exactly (bottom-to-top).
    pub fn trigram_by_lines(&self, lines: [bool; 3]) -> CoreResult<&Trigram> {
        self.trigrams
            .iter()
            .find(|t| t.lines == lines)
            .ok_or(CoreError::UnknownTrigram(lines))
    }

    /// Look up a hexagram by the ids of its upper and lower trigrams.
    pub fn hexagram_by_trigrams(&self, upper: &str, lower: &str) -> CoreResult<&Hexagram> {
        self.hexagrams
            .iter()
            .find(|h| h.upper.id == upper && h.lower.id == lower)
            .ok_or_else(|| CoreError::HexagramNotFound {
                upper: upper.to_string(),
                lower: lower.to_string(),
            })
    }

    /// Look up a hexagram by its King Wen number.
    pub fn hexagram_by_number(&self, number: u32) -> CoreResult<&Hexagram> {
        self.hexagrams
            .iter()
            .find(|h| h.number == number)
            .ok_or(CoreError::NumberOutOfRange(number))
    }

    /// Look up the hexagram matching a full six-line polarity vector
    /// (bottom-to-top).
    pub fn hexagram_by_lines(&self, lines: &[bool; 6]) -> CoreResult<&Hexagram> {
        let lower = self.trigram_by_lines([lines[0], lines[1], lines[2]])?;
        let upper = self.trigram_by_lines([lines[3], lines[4], lines[5]])?;
        self.hexagram_by_trigrams(&upper.id, &lower.id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_trigrams_cover_all_triples() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.trigrams().len(), 8);
        for bits in 0u8..8 {
            let lines = [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0];
            let trigram = catalog.trigram_by_lines(lines).unwrap();
            assert_eq!(trigram.lines, lines);
        }
    }

    #[test]
    fn trigram_triples_are_distinct() {
        let catalog = Catalog::standard();
        for a in catalog.trigrams() {
            for b in catalog.trigrams() {
                if a.id != b.id {
                    assert_ne!(a.lines, b.lines, "{} and {} share lines", a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn sixty_four_hexagrams_with_unique_numbers() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.hexagrams().len(), 64);
        let mut seen = std::collections::HashSet::new();
        for hex in catalog.hexagrams() {
            assert!((1..=64).contains(&hex.number));
            assert!(seen.insert(hex.number), "duplicate number {}", hex.number);
        }
    }

    #[test]
    fn every_trigram_pair_resolves() {
        let catalog = Catalog::standard();
        for upper in catalog.trigrams() {
            for lower in catalog.trigrams() {
                let hex = catalog.hexagram_by_trigrams(&upper.id, &lower.id).unwrap();
                assert_eq!(hex.upper.id, upper.id);
                assert_eq!(hex.lower.id, lower.id);
            }
        }
    }

    #[test]
    fn every_line_vector_resolves_to_itself() {
        let catalog = Catalog::standard();
        for bits in 0u8..64 {
            let lines = [
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
                bits & 8 != 0,
                bits & 16 != 0,
                bits & 32 != 0,
            ];
            let hex = catalog.hexagram_by_lines(&lines).unwrap();
            assert_eq!(hex.lines(), lines);
        }
    }

    #[test]
    fn hexagram_by_number_bounds() {
        let catalog = Catalog::standard();
        assert!(catalog.hexagram_by_number(1).is_ok());
        assert!(catalog.hexagram_by_number(64).is_ok());
        assert!(matches!(
            catalog.hexagram_by_number(0),
            Err(CoreError::NumberOutOfRange(0))
        ));
        assert!(matches!(
            catalog.hexagram_by_number(65),
            Err(CoreError::NumberOutOfRange(65))
        ));
    }

    #[test]
    fn king_wen_anchors() {
        let catalog = Catalog::standard();
        let qian = catalog.hexagram_by_number(1).unwrap();
        assert_eq!(qian.upper.id, "qian");
        assert_eq!(qian.lower.id, "qian");
        assert_eq!(qian.lines(), [true; 6]);

        let kun = catalog.hexagram_by_number(2).unwrap();
        assert_eq!(kun.lines(), [false; 6]);

        // Water over Fire: After Completion.
        let jiji = catalog.hexagram_by_number(63).unwrap();
        assert_eq!(jiji.upper.id, "kan");
        assert_eq!(jiji.lower.id, "li");

        // Fire over Water: Before Completion.
        let weiji = catalog.hexagram_by_number(64).unwrap();
        assert_eq!(weiji.upper.id, "li");
        assert_eq!(weiji.lower.id, "kan");
    }

    #[test]
    fn ids_follow_numbers() {
        let catalog = Catalog::standard();
        for hex in catalog.hexagrams() {
            assert_eq!(hex.id, format!("hex-{:02}", hex.number));
        }
    }

    #[test]
    fn texts_are_populated() {
        // No stubbed entries: every hexagram carries its full text set.
        let catalog = Catalog::standard();
        for hex in catalog.hexagrams() {
            assert!(!hex.judgment.is_empty(), "{} judgment", hex.number);
            assert!(!hex.image.is_empty(), "{} image", hex.number);
            assert!(!hex.meanings.general.is_empty());
            assert!(!hex.meanings.advice.is_empty());
            for line in &hex.changing_lines {
                assert!(!line.text.is_empty(), "{} line text", hex.number);
                assert!(!line.meaning.is_empty(), "{} line meaning", hex.number);
            }
        }
    }

    #[test]
    fn standard_is_shared() {
        let a = Catalog::standard();
        let b = Catalog::standard();
        assert!(std::ptr::eq(a, b));
    }
}
