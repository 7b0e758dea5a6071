//! The four line states produced by casting.
//!
//! Every casting method reduces its raw output to one of these states
//! before any trigram composition happens. The traditional ritual numbers
//! (6 through 9) survive only at this boundary.

use serde::{Deserialize, Serialize};

/// One cast line of a hexagram.
///
/// "Old" lines are changing: they are in transition and flip polarity when
/// the resulting hexagram is derived. "Young" lines are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineValue {
    /// Old yin (ritual value 6) — a broken line about to become yang.
    ChangingYin,
    /// Young yang (ritual value 7) — a stable unbroken line.
    StableYang,
    /// Young yin (ritual value 8) — a stable broken line.
    StableYin,
    /// Old yang (ritual value 9) — an unbroken line about to become yin.
    ChangingYang,
}

impl LineValue {
    /// All four line states.
    pub fn all() -> &'static [Self] {
        &[
            Self::ChangingYin,
            Self::StableYang,
            Self::StableYin,
            Self::ChangingYang,
        ]
    }

    /// The traditional ritual number for this state.
    pub fn ritual_value(self) -> u32 {
        match self {
            Self::ChangingYin => 6,
            Self::StableYang => 7,
            Self::StableYin => 8,
            Self::ChangingYang => 9,
        }
    }

    /// Map a ritual number (6-9) back to its line state.
    pub fn from_ritual_value(value: u32) -> Option<Self> {
        match value {
            6 => Some(Self::ChangingYin),
            7 => Some(Self::StableYang),
            8 => Some(Self::StableYin),
            9 => Some(Self::ChangingYang),
            _ => None,
        }
    }

    /// Current polarity: true for yang (unbroken), false for yin (broken).
    pub fn is_yang(self) -> bool {
        matches!(self, Self::StableYang | Self::ChangingYang)
    }

    /// Whether this line is changing (the extremal ritual values 6 and 9).
    pub fn is_changing(self) -> bool {
        matches!(self, Self::ChangingYin | Self::ChangingYang)
    }

    /// The stable line this one settles into after mutation.
    ///
    /// Changing lines flip polarity; stable lines are unchanged.
    pub fn settled(self) -> Self {
        match self {
            Self::ChangingYin => Self::StableYang,
            Self::ChangingYang => Self::StableYin,
            stable => stable,
        }
    }

    /// Rendered line glyph with the traditional changing marker.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::ChangingYin => "━━━ ━━━ ×",
            Self::StableYang => "━━━━━━━",
            Self::StableYin => "━━━ ━━━",
            Self::ChangingYang => "━━━━━━━ ○",
        }
    }
}

impl std::fmt::Display for LineValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChangingYin => write!(f, "old yin (changing)"),
            Self::StableYang => write!(f, "young yang"),
            Self::StableYin => write!(f, "young yin"),
            Self::ChangingYang => write!(f, "old yang (changing)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ritual_values_round_trip() {
        for line in LineValue::all() {
            assert_eq!(
                LineValue::from_ritual_value(line.ritual_value()),
                Some(*line)
            );
        }
    }

    #[test]
    fn from_ritual_value_rejects_out_of_range() {
        assert_eq!(LineValue::from_ritual_value(5), None);
        assert_eq!(LineValue::from_ritual_value(10), None);
        assert_eq!(LineValue::from_ritual_value(0), None);
    }

    #[test]
    fn polarity_follows_parity() {
        // Odd ritual values are yang, even are yin.
        for line in LineValue::all() {
            assert_eq!(line.is_yang(), line.ritual_value() % 2 == 1);
        }
    }

    #[test]
    fn changing_is_extremal() {
        assert!(LineValue::ChangingYin.is_changing());
        assert!(LineValue::ChangingYang.is_changing());
        assert!(!LineValue::StableYin.is_changing());
        assert!(!LineValue::StableYang.is_changing());
    }

    #[test]
    fn settled_flips_changing_lines() {
        assert_eq!(LineValue::ChangingYin.settled(), LineValue::StableYang);
        assert_eq!(LineValue::ChangingYang.settled(), LineValue::StableYin);
        assert_eq!(LineValue::StableYin.settled(), LineValue::StableYin);
        assert_eq!(LineValue::StableYang.settled(), LineValue::StableYang);
    }

    #[test]
    fn settled_is_never_changing() {
        for line in LineValue::all() {
            assert!(!line.settled().is_changing());
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(LineValue::ChangingYin.to_string(), "old yin (changing)");
        assert_eq!(LineValue::StableYang.to_string(), "young yang");
    }

    #[test]
    fn glyphs_mark_only_changing_lines() {
        for line in LineValue::all() {
            assert_eq!(
                line.glyph().ends_with('×') || line.glyph().ends_with('○'),
                line.is_changing()
            );
        }
    }

    #[test]
    fn serde_round_trip() {
        for line in LineValue::all() {
            let json = serde_json::to_string(line).unwrap();
            let back: LineValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *line);
        }
    }

    #[test]
    fn serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&LineValue::ChangingYin).unwrap(),
            "\"changing-yin\""
        );
        assert_eq!(
            serde_json::to_string(&LineValue::StableYang).unwrap(),
            "\"stable-yang\""
        );
    }
}
