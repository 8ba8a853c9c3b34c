use citydb_core::{CityQuery, DistanceCalculator, Gazetteer, Ranker};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_load(c: &mut Criterion) {
    c.bench_function("load_embedded", |b| {
        b.iter(|| black_box(Gazetteer::load().unwrap()))
    });

    let db = Gazetteer::load().unwrap();
    let bytes = db.to_bytes().unwrap();
    c.bench_function("load_snapshot", |b| {
        b.iter(|| black_box(Gazetteer::from_bytes(black_box(&bytes)).unwrap()))
    });
}

fn bench_search(c: &mut Criterion) {
    let db = Gazetteer::load().unwrap();
    let ranker = Ranker::new(&db);

    for q in ["bombay", "pur", "maharashtra", "x"] {
        c.bench_function(&format!("search_{q}"), |b| {
            b.iter(|| black_box(ranker.search(black_box(q), 10)))
        });
    }

    let query = CityQuery::new(&db);
    c.bench_function("suggest_tech_south", |b| {
        b.iter(|| black_box(query.suggest(black_box("tech in the south"))))
    });
}

fn bench_distance(c: &mut Criterion) {
    let db = Gazetteer::load().unwrap();
    let calc = DistanceCalculator::new(&db);
    c.bench_function("distance_mumbai_delhi", |b| {
        b.iter(|| black_box(calc.distance(black_box("mumbai"), black_box("delhi"))))
    });

    let query = CityQuery::new(&db);
    c.bench_function("nearest_10", |b| {
        b.iter(|| black_box(query.nearest(black_box("bhopal"), 10)))
    });
}

criterion_group!(benches, bench_load, bench_search, bench_distance);
criterion_main!(benches);
