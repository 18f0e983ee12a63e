use rand::{rngs::StdRng, Rng, SeedableRng};
use slidewin::{
    has_near_duplicate, has_near_duplicate_with, Bounds, Bucketed, DetectionStrategy,
    OrderedWindow,
};
use test_log::test;

fn brute_force(elements: &[i64], index_bound: usize, value_bound: i64) -> bool {
    elements.iter().enumerate().any(|(i, &a)| {
        elements
            .iter()
            .enumerate()
            .skip(i + 1)
            .take(index_bound)
            .any(|(_, &b)| (i128::from(a) - i128::from(b)).abs() <= i128::from(value_bound))
    })
}

#[test]
fn near_duplicate_strategies_agree() {
    let mut rng = StdRng::seed_from_u64(0xdead_beef);

    for _ in 0..5_000 {
        let len = rng.random_range(0..16);
        let spread = rng.random_range(1..50);
        let elements = (0..len)
            .map(|_| rng.random_range(-spread..=spread))
            .collect::<Vec<i64>>();
        let index_bound = rng.random_range(0..6);
        let value_bound = rng.random_range(-1..8);

        let expected = brute_force(&elements, index_bound, value_bound);

        let bucketed = has_near_duplicate_with(&Bucketed, &elements, index_bound, value_bound);
        let ordered = has_near_duplicate_with(&OrderedWindow, &elements, index_bound, value_bound);

        assert_eq!(
            expected, bucketed,
            "bucketed: elements={elements:?} k={index_bound} t={value_bound}",
        );
        assert_eq!(
            expected, ordered,
            "ordered: elements={elements:?} k={index_bound} t={value_bound}",
        );
    }
}

#[test]
fn near_duplicate_examples() {
    assert!(has_near_duplicate(&[1, 2, 3, 1], 3, 0));
    assert!(!has_near_duplicate(&[1, 5, 9, 1, 5, 9], 2, 3));

    let bounds = Bounds::new(2, 3);
    assert!(!Bucketed.detect(&[1, 5, 9, 1, 5, 9], bounds));
    assert!(!OrderedWindow.detect(&[1, 5, 9, 1, 5, 9], bounds));
}

#[test]
fn near_duplicate_repeated_values() {
    // Equal values must not collapse in the ordered window
    let elements = [4, 4, 10, 4];

    for strategy in [&Bucketed as &dyn DetectionStrategy, &OrderedWindow] {
        assert!(strategy.detect(&elements, Bounds::new(1, 0)));
        assert!(!strategy.detect(&elements[1..], Bounds::new(1, 0)));
        assert!(strategy.detect(&elements[1..], Bounds::new(2, 0)));
    }
}
