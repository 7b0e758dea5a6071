//! Resolving six cast lines into a hexagram and its changing positions.

use zy_core::{Catalog, CoreResult, Hexagram, LineValue};

/// A resolved cast: the primary hexagram and its changing-line positions.
#[derive(Debug, Clone)]
pub struct ResolvedCast {
    /// The primary hexagram, cloned out of the catalog.
    pub hexagram: Hexagram,
    /// Strictly ascending 1-based positions of changing lines.
    pub changing: Vec<u32>,
}

/// Resolve six line values against the catalog.
///
/// Positions 1-3 form the lower trigram and 4-6 the upper, bottom-to-top;
/// the trigram match is an exact, order-sensitive triple comparison.
pub fn resolve(catalog: &Catalog, lines: &[LineValue; 6]) -> CoreResult<ResolvedCast> {
    let polarity = lines.map(LineValue::is_yang);
    let hexagram = catalog.hexagram_by_lines(&polarity)?.clone();
    Ok(ResolvedCast {
        hexagram,
        changing: changing_positions(lines),
    })
}

/// The strictly ascending 1-based positions of changing lines.
pub fn changing_positions(lines: &[LineValue; 6]) -> Vec<u32> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.is_changing())
        .map(|(i, _)| i as u32 + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_trigram_halves_in_order() {
        let catalog = Catalog::standard();
        // Yang-yin alternation: lower Li (101), upper Kan (010) -> 63.
        let lines = [
            LineValue::StableYang,
            LineValue::StableYin,
            LineValue::StableYang,
            LineValue::StableYin,
            LineValue::StableYang,
            LineValue::StableYin,
        ];
        let resolved = resolve(catalog, &lines).unwrap();
        assert_eq!(resolved.hexagram.number, 63);
        assert_eq!(resolved.hexagram.lower.id, "li");
        assert_eq!(resolved.hexagram.upper.id, "kan");
        assert!(resolved.changing.is_empty());
    }

    #[test]
    fn changing_positions_are_ascending_and_unique() {
        let lines = [
            LineValue::ChangingYang,
            LineValue::StableYin,
            LineValue::ChangingYin,
            LineValue::StableYang,
            LineValue::StableYin,
            LineValue::ChangingYang,
        ];
        assert_eq!(changing_positions(&lines), vec![1, 3, 6]);
    }

    #[test]
    fn changing_lines_do_not_affect_the_primary_hexagram() {
        let catalog = Catalog::standard();
        // Old yang has yang polarity now; all-old-yang is still Qian.
        let lines = [LineValue::ChangingYang; 6];
        let resolved = resolve(catalog, &lines).unwrap();
        assert_eq!(resolved.hexagram.number, 1);
        assert_eq!(resolved.changing, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn all_stable_yin_is_kun() {
        let catalog = Catalog::standard();
        let lines = [LineValue::StableYin; 6];
        let resolved = resolve(catalog, &lines).unwrap();
        assert_eq!(resolved.hexagram.number, 2);
        assert_eq!(resolved.hexagram.upper.lines, [false, false, false]);
        assert_eq!(resolved.hexagram.lower.lines, [false, false, false]);
    }
}
