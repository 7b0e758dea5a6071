//! The eight trigrams and their metadata.
//!
//! A trigram is a three-line binary symbol; eight exist, one for each
//! combination of broken and unbroken lines. They are the alphabet from
//! which hexagrams are composed.

use serde::{Deserialize, Serialize};

/// Five-phase element associated with a trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    /// Wood — growth and expansion.
    Wood,
    /// Fire — clarity and transformation.
    Fire,
    /// Earth — stability and nourishment.
    Earth,
    /// Metal — structure and resolve.
    Metal,
    /// Water — depth and adaptability.
    Water,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wood => write!(f, "Wood"),
            Self::Fire => write!(f, "Fire"),
            Self::Earth => write!(f, "Earth"),
            Self::Metal => write!(f, "Metal"),
            Self::Water => write!(f, "Water"),
        }
    }
}

/// One of the eight three-line symbols composing hexagrams.
///
/// The catalog is the sole owner of the canonical set; hexagrams and
/// readings embed trigrams by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigram {
    /// Stable identifier (lowercase pinyin).
    pub id: String,
    /// Pinyin name.
    pub name: String,
    /// Translated name.
    pub english: String,
    /// Chinese character.
    pub character: String,
    /// Bagua glyph.
    pub symbol: String,
    /// Lines bottom-to-top; `true` = unbroken (yang), `false` = broken (yin).
    pub lines: [bool; 3],
    /// Five-phase element.
    pub element: Element,
    /// Compass direction in the King Wen arrangement.
    pub direction: String,
    /// Associated season.
    pub season: String,
    /// Core meaning keywords.
    pub meaning: String,
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.symbol, self.name, self.english)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_display() {
        assert_eq!(Element::Metal.to_string(), "Metal");
        assert_eq!(Element::Water.to_string(), "Water");
    }

    #[test]
    fn serde_round_trip() {
        let trigram = Trigram {
            id: "qian".to_string(),
            name: "Qian".to_string(),
            english: "Heaven".to_string(),
            character: "乾".to_string(),
            symbol: "☰".to_string(),
            lines: [true, true, true],
            element: Element::Metal,
            direction: "Northwest".to_string(),
            season: "late autumn".to_string(),
            meaning: "the creative, strength".to_string(),
        };
        let json = serde_json::to_string(&trigram).unwrap();
        let back: Trigram = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trigram);
    }

    #[test]
    fn display_format() {
        let trigram = Trigram {
            id: "kan".to_string(),
            name: "Kan".to_string(),
            english: "Water".to_string(),
            character: "坎".to_string(),
            symbol: "☵".to_string(),
            lines: [false, true, false],
            element: Element::Water,
            direction: "North".to_string(),
            season: "winter".to_string(),
            meaning: "the abysmal, danger".to_string(),
        };
        assert_eq!(trigram.to_string(), "☵ Kan (Water)");
    }
}
