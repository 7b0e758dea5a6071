//! Casting methods and their metadata.

use serde::{Deserialize, Serialize};

/// The input-generation strategy for a reading.
///
/// The method determines the statistical distribution of the cast lines
/// and the declared accuracy of the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CastMethod {
    /// Six throws of three coins, keeping the traditional outcome skew.
    ThreeCoins,
    /// Simplified yarrow-stalk draw, uniform over the four line states.
    YarrowSticks,
    /// Six caller-supplied integers in 1-9.
    Numbers,
    /// A quick draw between young yin and old yang.
    Random,
}

impl CastMethod {
    /// All casting methods, ordered by declared accuracy (highest first).
    pub fn all() -> &'static [Self] {
        &[
            Self::YarrowSticks,
            Self::ThreeCoins,
            Self::Numbers,
            Self::Random,
        ]
    }

    /// Parse a method from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "three coins" | "coins" | "coin" => Some(Self::ThreeCoins),
            "yarrow sticks" | "yarrow stalks" | "yarrow" => Some(Self::YarrowSticks),
            "numbers" | "number" => Some(Self::Numbers),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    /// The kebab-case name used on the wire and on the command line.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::ThreeCoins => "three-coins",
            Self::YarrowSticks => "yarrow-sticks",
            Self::Numbers => "numbers",
            Self::Random => "random",
        }
    }

    /// Declared accuracy label shown to users.
    ///
    /// The yarrow method declares the highest accuracy after the
    /// traditional stalk ceremony, even though its draw here is a uniform
    /// simplification.
    pub fn accuracy_label(self) -> &'static str {
        match self {
            Self::ThreeCoins => "high",
            Self::YarrowSticks => "highest",
            Self::Numbers => "moderate",
            Self::Random => "basic",
        }
    }

    /// One-line description of how the method casts its lines.
    pub fn description(self) -> &'static str {
        match self {
            Self::ThreeCoins => "six throws of three coins, summed per throw",
            Self::YarrowSticks => "a simplified draw standing in for the stalk ceremony",
            Self::Numbers => "six numbers between 1 and 9, supplied by you",
            Self::Random => "a quick draw for an instant reading",
        }
    }
}

impl std::fmt::Display for CastMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThreeCoins => write!(f, "Three Coins"),
            Self::YarrowSticks => write!(f, "Yarrow Sticks"),
            Self::Numbers => write!(f, "Numbers"),
            Self::Random => write!(f, "Random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_variants() {
        assert_eq!(CastMethod::parse("three-coins"), Some(CastMethod::ThreeCoins));
        assert_eq!(CastMethod::parse("coins"), Some(CastMethod::ThreeCoins));
        assert_eq!(
            CastMethod::parse("yarrow_sticks"),
            Some(CastMethod::YarrowSticks)
        );
        assert_eq!(CastMethod::parse("YARROW"), Some(CastMethod::YarrowSticks));
        assert_eq!(CastMethod::parse("numbers"), Some(CastMethod::Numbers));
        assert_eq!(CastMethod::parse("random"), Some(CastMethod::Random));
        assert_eq!(CastMethod::parse("tarot"), None);
    }

    #[test]
    fn wire_names_round_trip_through_parse() {
        for method in CastMethod::all() {
            assert_eq!(CastMethod::parse(method.wire_name()), Some(*method));
        }
    }

    #[test]
    fn serde_uses_wire_names() {
        for method in CastMethod::all() {
            let json = serde_json::to_string(method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.wire_name()));
            let back: CastMethod = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *method);
        }
    }

    #[test]
    fn serde_rejects_unknown_method() {
        assert!(serde_json::from_str::<CastMethod>("\"tea-leaves\"").is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(CastMethod::ThreeCoins.to_string(), "Three Coins");
        assert_eq!(CastMethod::YarrowSticks.to_string(), "Yarrow Sticks");
    }

    #[test]
    fn all_is_ordered_by_declared_accuracy() {
        let labels: Vec<&str> = CastMethod::all()
            .iter()
            .map(|m| m.accuracy_label())
            .collect();
        assert_eq!(labels, vec!["highest", "high", "moderate", "basic"]);
    }
}
