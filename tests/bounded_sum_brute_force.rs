use rand::{rngs::StdRng, Rng, SeedableRng};
use slidewin::{min_subarray_len, min_subarray_window};
use test_log::test;

fn brute_force(threshold: u64, elements: &[u64]) -> usize {
    let mut best = 0;

    for start in 0..elements.len() {
        let mut sum = 0u128;

        for (offset, &value) in elements.iter().skip(start).enumerate() {
            sum += u128::from(value);

            if sum >= u128::from(threshold) {
                let len = offset + 1;
                if best == 0 || len < best {
                    best = len;
                }
                break;
            }
        }
    }

    best
}

#[test]
fn bounded_sum_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..2_000 {
        let len = rng.random_range(0..24);
        let elements = (0..len)
            .map(|_| rng.random_range(0..20))
            .collect::<Vec<u64>>();
        let threshold = rng.random_range(1..120);

        let expected = brute_force(threshold, &elements);
        assert_eq!(
            expected,
            min_subarray_len(threshold, &elements),
            "threshold={threshold} elements={elements:?}",
        );

        if let Some(window) = min_subarray_window(threshold, &elements) {
            let run = window.slice(&elements).expect("window should be in bounds");
            assert!(run.iter().sum::<u64>() >= threshold);
            assert_eq!(expected, run.len());
        }
    }
}

#[test]
fn bounded_sum_example() {
    let elements = [2, 3, 1, 2, 4, 3];

    let window = min_subarray_window(7, &elements).expect("should find run");
    assert_eq!(Some(&[4, 3][..]), window.slice(&elements));
}
