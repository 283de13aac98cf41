// Criterion benchmarks for metaphone-double.
//
// Run:
//   cargo bench -p metaphone-double --features index

use criterion::{Criterion, criterion_group, criterion_main};

use metaphone_double::{MetaphoneHandle, PhoneticIndex, double_metaphone, phrase_similarity};

const NAMES: &[&str] = &[
    "Smith", "Schmidt", "Johnson", "Jablonski", "Yablonsky", "Williams", "Brown", "Jones",
    "Garcia", "Miller", "Davis", "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez",
    "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez",
    "Thompson", "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson",
    "Walker", "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill",
    "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell", "Mitchell",
    "Carter", "Roberts", "Czerny", "Tchaikovsky", "Schwarzenegger", "Bellocchio", "Gallegos",
    "Cabrillo", "Breaux", "Rogier", "Zhang", "Xavier", "Bartosz", "Filipowicz", "Schermerhorn",
];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Encode every name with the pure entry point.
fn bench_encode_names(c: &mut Criterion) {
    c.bench_function("encode_names", |b| {
        b.iter(|| {
            for name in NAMES {
                std::hint::black_box(double_metaphone(name));
            }
        });
    });
}

/// Same list through a handle with a warm cache.
fn bench_encode_cached(c: &mut Criterion) {
    let handle = MetaphoneHandle::new();
    c.bench_function("encode_names_cached", |b| {
        b.iter(|| {
            for name in NAMES {
                std::hint::black_box(handle.encode(name));
            }
        });
    });
}

/// Long input, mostly to catch accidental quadratic behavior.
fn bench_encode_long(c: &mut Criterion) {
    let long = NAMES.join(" ").repeat(20);
    c.bench_function("encode_long_text", |b| {
        b.iter(|| std::hint::black_box(double_metaphone(&long)));
    });
}

fn bench_index_lookup(c: &mut Criterion) {
    let mut index = PhoneticIndex::new();
    for (i, name) in NAMES.iter().enumerate() {
        index.insert(name, i);
    }
    c.bench_function("index_lookup_names", |b| {
        b.iter(|| {
            for name in NAMES {
                std::hint::black_box(index.lookup(name));
            }
        });
    });
}

fn bench_phrase_similarity(c: &mut Criterion) {
    c.bench_function("phrase_similarity", |b| {
        b.iter(|| {
            std::hint::black_box(phrase_similarity(
                "Catherine Zeta Jones Smith",
                "Katherine Zeta Jonas Schmidt",
            ))
        });
    });
}

criterion_group!(
    benches,
    bench_encode_names,
    bench_encode_cached,
    bench_encode_long,
    bench_index_lookup,
    bench_phrase_similarity,
);
criterion_main!(benches);
