use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use slidewin::{find_substring, min_window, WordList};

fn random_string(rng: &mut StdRng, alphabet: &[char], len: usize) -> String {
    (0..len)
        .map(|_| *alphabet.choose(rng).unwrap())
        .collect()
}

fn bench_concatenation(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_substring");
    let mut rng = StdRng::seed_from_u64(30);

    let alphabet = ['a', 'b', 'c', 'd'];
    let source = random_string(&mut rng, &alphabet, 100_000);

    for word_len in [1, 4, 16] {
        let words = (0..4)
            .map(|_| random_string(&mut rng, &alphabet, word_len))
            .collect::<Vec<_>>();

        group.bench_function(format!("word length {word_len}"), |b| {
            b.iter(|| find_substring(&source, &words));
        });

        let list = WordList::try_new(&words).unwrap();
        group.bench_function(format!("word length {word_len}, prepared"), |b| {
            b.iter(|| list.find_in(&source));
        });
    }
}

fn bench_covering(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_window");
    let mut rng = StdRng::seed_from_u64(76);

    let alphabet = ('a'..='z').collect::<Vec<_>>();

    for source_len in [1_000, 100_000] {
        let source = random_string(&mut rng, &alphabet, source_len);

        group.bench_function(format!("{source_len} chars"), |b| {
            b.iter(|| min_window(&source, "thequickbrownfox"));
        });
    }
}

criterion_group!(benches, bench_concatenation, bench_covering);
criterion_main!(benches);
