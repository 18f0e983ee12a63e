#![no_main]
use libfuzzer_sys::{
    arbitrary::{Arbitrary, Unstructured},
    fuzz_target,
};
use slidewin::{min_window, min_window_span};

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    if let Ok((source, target)) = <(String, String) as Arbitrary>::arbitrary(&mut unstructured) {
        let window = min_window(&source, &target);

        match min_window_span(&source, &target) {
            Some(span) => {
                assert_eq!(span.len, window.len());

                for c in target.chars() {
                    let needed = target.chars().filter(|&x| x == c).count();
                    let found = window.chars().filter(|&x| x == c).count();
                    assert!(found >= needed);
                }
            }
            None => assert!(window.is_empty()),
        }
    }
});
