use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nursemap::domain::model::filter::Filter;
use nursemap::domain::model::query::QueryState;
use nursemap::{Bounds, Coord, Nurse};

const SPECIALTIES: &[&str] = &["cardio", "pediatric", "oncology", "geriatric", "obstetric"];

fn nurses(count: usize) -> Vec<Nurse> {
    (0..count)
        .map(|i| {
            let lat = -33. + (i * 37 % 3000) as f64 / 100.;
            let lng = -73. + (i * 53 % 4000) as f64 / 100.;
            let nurse = Nurse::new(format!("n{}", i))
                .with_specialties(vec![SPECIALTIES[i % SPECIALTIES.len()]]);
            if i % 10 == 0 {
                nurse
            } else {
                nurse.with_coord(Coord::new(lat, lng))
            }
        })
        .collect()
}

fn bench(c: &mut Criterion) {
    let nurses = nurses(10_000);
    let filter = Filter::default();
    let bounds = Bounds::new(Coord::new(-15., -40.), Coord::new(-25., -50.));

    let mut group = c.benchmark_group("filtering");
    group.bench_function("viewport", |b| {
        let state = QueryState::default().with_viewport_bounds(bounds);
        b.iter(|| filter.apply(black_box(&nurses), &state))
    });
    group.bench_function("viewport and specialties", |b| {
        let state = QueryState::default()
            .with_viewport_bounds(bounds)
            .with_specialty_filter(vec!["cardio", "oncology"]);
        b.iter(|| filter.apply(black_box(&nurses), &state))
    });
    group.bench_function("selected point", |b| {
        let state = QueryState::default().with_selected_point(Some(Coord::new(-20.12, -45.33)));
        b.iter(|| filter.apply(black_box(&nurses), &state))
    });
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
