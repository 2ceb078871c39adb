//! Resolver benchmarks.
//!
//! Measures the cascade for inputs that stop at each strategy, plus the
//! worst case where every strategy is tried and nothing matches.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `cascade` | One `resolve` call per input, grouped by the step that fires |
//! | `load` | Parsing the bundled `locations.yml` into a `PlaceStore` |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench resolver_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use numloc::campus::{PlaceStore, Resolver};
use std::hint::black_box;

const PLACES_YAML: &str = include_str!("../locations.yml");

// ---------------------------------------------------------------------------
// Cascade
// ---------------------------------------------------------------------------

fn cascade_bench(c: &mut Criterion) {
    let store = PlaceStore::from_yaml_str(PLACES_YAML);
    let resolver = Resolver::new(&store);
    let mut group = c.benchmark_group("cascade");

    let inputs = [
        ("alias", "МУИС"),
        ("dormitory", "4-р дотуур байр хаана байдаг вэ"),
        ("building", "2 дугаар байр руу яаж очих вэ"),
        ("institution", "муис-ийн кампус хаана вэ"),
        ("miss", "өнөөдөр цаг агаар ямар байна"),
    ];

    for (name, text) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| resolver.resolve(black_box(text)))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

fn load_bench(c: &mut Criterion) {
    c.bench_function("load/bundled_locations", |b| {
        b.iter(|| PlaceStore::from_yaml_str(black_box(PLACES_YAML)))
    });
}

criterion_group!(benches, cascade_bench, load_bench);
criterion_main!(benches);
