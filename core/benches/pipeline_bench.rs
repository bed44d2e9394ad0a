use caridoc_core::{Dictionary, RankConfig, Ranker};
use criterion::{criterion_group, criterion_main, Criterion};

const SAMPLE: &str = "Kucing itu memakan ikan di rumah, dan anjing meminum air. \
Burung-burung terbang dari pohon ke pohon pada pagi hari. \
Makanan untuk kucing ada di dapur; minuman ada di meja.";

fn sample_dictionary() -> Dictionary {
    Dictionary::from_words([
        "kucing", "makan", "ikan", "rumah", "anjing", "minum", "air", "burung", "terbang",
        "pohon", "pagi", "hari", "dapur", "meja",
    ])
}

fn bench_preprocess(c: &mut Criterion) {
    let dict = sample_dictionary();
    let ranker = Ranker::new(&dict, RankConfig::default());
    c.bench_function("preprocess_sample", |b| b.iter(|| ranker.preprocess(SAMPLE)));
}

fn bench_rank(c: &mut Criterion) {
    let dict = sample_dictionary();
    let ranker = Ranker::new(&dict, RankConfig::default());
    let corpus: Vec<(String, String)> = (0..50)
        .map(|i| (format!("doc-{i}.txt"), format!("{SAMPLE} dokumen {i}")))
        .collect();
    c.bench_function("rank_50_docs", |b| {
        b.iter(|| ranker.rank("kucing makan ikan", &corpus))
    });
}

criterion_group!(benches, bench_preprocess, bench_rank);
criterion_main!(benches);
