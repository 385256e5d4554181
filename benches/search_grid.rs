use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use word_search::{Dictionary, Grid, SearchConfig, Searcher};


fn random_word(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(2..=max_len);
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let words: Vec<String> = (0..50_000).map(|_| random_word(&mut rng, 8)).collect();
    let dict = Dictionary::load(&words);

    let rows: Vec<String> = (0..100).map(|_| {
        (0..100).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
    }).collect();
    let grid = Grid::from_rows(&rows);

    let all = Searcher::new(&dict);
    let forward = Searcher::with_config(&dict, SearchConfig::forward_only());

    { let mut group = c.benchmark_group("100x100");
        group.sample_size(10);
        group.bench_function("all directions", |b| b.iter(|| all.find_words(&grid)));
        group.bench_function("forward only", |b| b.iter(|| forward.find_words(&grid)));
        group.bench_function("all directions (multithreaded)", |b| b.iter(|| all.find_words_parallel(&grid)));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
