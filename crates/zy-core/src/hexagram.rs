//! Hexagram records: trigram pairs with judgment and interpretive texts.

use serde::{Deserialize, Serialize};

use crate::trigram::Trigram;

/// Text attached to one changing line of a hexagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineText {
    /// The oracular line text.
    pub text: String,
    /// A short gloss of what the line means for the reading.
    pub meaning: String,
}

/// Domain-specific meaning texts for a hexagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meanings {
    /// The general reading.
    pub general: String,
    /// Love and relationships.
    pub love: String,
    /// Career and vocation.
    pub career: String,
    /// Health and vitality.
    pub health: String,
    /// Money and resources.
    pub finance: String,
    /// Standing advice.
    pub advice: String,
}

/// One of the 64 six-line symbols, identified by its King Wen number.
///
/// Composed of two trigrams: the lower (inner) trigram spans positions
/// 1-3 and the upper (outer) trigram spans positions 4-6, counted from
/// the bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hexagram {
    /// Stable identifier (`hex-01` through `hex-64`).
    pub id: String,
    /// King Wen sequence number (1-64, unique).
    pub number: u32,
    /// Pinyin name.
    pub name: String,
    /// Chinese character(s).
    pub character: String,
    /// Translated title.
    pub english: String,
    /// Upper (outer) trigram, positions 4-6.
    pub upper: Trigram,
    /// Lower (inner) trigram, positions 1-3.
    pub lower: Trigram,
    /// The judgment text.
    pub judgment: String,
    /// The image text.
    pub image: String,
    /// Domain meanings.
    pub meanings: Meanings,
    /// Changing-line texts for positions 1-6, bottom-to-top.
    pub changing_lines: [LineText; 6],
}

impl Hexagram {
    /// The full six-line polarity vector, bottom-to-top.
    pub fn lines(&self) -> [bool; 6] {
        [
            self.lower.lines[0],
            self.lower.lines[1],
            self.lower.lines[2],
            self.upper.lines[0],
            self.upper.lines[1],
            self.upper.lines[2],
        ]
    }

    /// The changing-line text for a 1-based position, if in range.
    pub fn line_text(&self, position: u32) -> Option<&LineText> {
        if (1..=6).contains(&position) {
            Some(&self.changing_lines[(position - 1) as usize])
        } else {
            None
        }
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}. {} ({}) — {}",
            self.number, self.name, self.character, self.english
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn lines_concatenate_lower_then_upper() {
        let catalog = Catalog::standard();
        let hex = catalog.hexagram_by_number(63).unwrap();
        let lines = hex.lines();
        assert_eq!(&lines[0..3], &hex.lower.lines);
        assert_eq!(&lines[3..6], &hex.upper.lines);
    }

    #[test]
    fn line_text_positions() {
        let catalog = Catalog::standard();
        let hex = catalog.hexagram_by_number(1).unwrap();
        assert!(hex.line_text(1).is_some());
        assert!(hex.line_text(6).is_some());
        assert!(hex.line_text(0).is_none());
        assert!(hex.line_text(7).is_none());
    }

    #[test]
    fn display_format() {
        let catalog = Catalog::standard();
        let hex = catalog.hexagram_by_number(1).unwrap();
        assert_eq!(hex.to_string(), "1. Qian (乾) — The Creative");
    }

    #[test]
    fn serde_round_trip() {
        let catalog = Catalog::standard();
        let hex = catalog.hexagram_by_number(64).unwrap();
        let json = serde_json::to_string(hex).unwrap();
        let back: Hexagram = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, hex);
    }
}
