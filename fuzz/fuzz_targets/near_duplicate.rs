#![no_main]
use libfuzzer_sys::{
    arbitrary::{Arbitrary, Unstructured},
    fuzz_target,
};
use slidewin::{Bounds, Bucketed, DetectionStrategy, OrderedWindow};

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    if let Ok(elements) = <Vec<i64> as Arbitrary>::arbitrary(&mut unstructured) {
        let index_bound = <u8 as Arbitrary>::arbitrary(&mut unstructured).unwrap_or_default();
        let value_bound = <i64 as Arbitrary>::arbitrary(&mut unstructured).unwrap_or_default();

        let bounds = Bounds::new(usize::from(index_bound), value_bound);

        assert_eq!(
            Bucketed.detect(&elements, bounds),
            OrderedWindow.detect(&elements, bounds),
        );
    }
});
