//! Property tests over the casting and resolution pipeline.

use proptest::prelude::*;

use zy_core::{Catalog, LineValue};
use zy_divination::{CastMethod, confidence, mutation, resolver};

fn line_value() -> impl Strategy<Value = LineValue> {
    prop::sample::select(LineValue::all().to_vec())
}

proptest! {
    #[test]
    fn resolver_halves_match_the_cast_vector(lines in prop::array::uniform6(line_value())) {
        let catalog = Catalog::standard();
        let resolved = resolver::resolve(catalog, &lines).unwrap();
        let polarity = lines.map(LineValue::is_yang);
        prop_assert_eq!(resolved.hexagram.lower.lines, [polarity[0], polarity[1], polarity[2]]);
        prop_assert_eq!(resolved.hexagram.upper.lines, [polarity[3], polarity[4], polarity[5]]);
    }

    #[test]
    fn changing_positions_are_ascending_in_range(lines in prop::array::uniform6(line_value())) {
        let positions = resolver::changing_positions(&lines);
        for pair in positions.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for pos in &positions {
            prop_assert!((1..=6).contains(pos));
        }
        prop_assert_eq!(positions.len(), lines.iter().filter(|l| l.is_changing()).count());
    }

    #[test]
    fn mutation_exists_iff_a_line_changes(lines in prop::array::uniform6(line_value())) {
        let catalog = Catalog::standard();
        let resulting = mutation::mutate(catalog, &lines).unwrap();
        prop_assert_eq!(resulting.is_some(), lines.iter().any(|l| l.is_changing()));
    }

    #[test]
    fn mutation_flips_exactly_the_changing_positions(lines in prop::array::uniform6(line_value())) {
        let catalog = Catalog::standard();
        if let Some(resulting) = mutation::mutate(catalog, &lines).unwrap() {
            let primary = lines.map(LineValue::is_yang);
            let settled = resulting.lines();
            for (i, line) in lines.iter().enumerate() {
                if line.is_changing() {
                    prop_assert_ne!(primary[i], settled[i]);
                } else {
                    prop_assert_eq!(primary[i], settled[i]);
                }
            }
        }
    }

    #[test]
    fn confidence_is_always_in_unit_interval(
        method in prop::sample::select(CastMethod::all().to_vec()),
        changing in 0usize..=6,
    ) {
        let c = confidence::estimate(method, changing);
        prop_assert!((0.0..=1.0).contains(&c));
    }
}
