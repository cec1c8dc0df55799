use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geodist::{Coordinates, DistanceCalculator, GeodesicCalculator, HaversineCalculator};

fn city_pairs() -> Vec<(Coordinates, Coordinates)> {
    [
        ((51.5074, -0.1278), (48.8566, 2.3522)),
        ((40.7128, -74.0060), (34.0522, -118.2437)),
        ((35.6895, 139.6917), (37.7749, -122.4194)),
        ((52.5200, 13.4050), (41.9028, 12.4964)),
    ]
    .into_iter()
    .map(|((lat1, lon1), (lat2, lon2))| {
        (
            Coordinates::new(lat1, lon1).unwrap(),
            Coordinates::new(lat2, lon2).unwrap(),
        )
    })
    .collect()
}

fn bench_geodesic(c: &mut Criterion) {
    let pairs = city_pairs();

    c.bench_function("geodesic_city_pairs", |b| {
        b.iter(|| {
            for (from, to) in &pairs {
                black_box(GeodesicCalculator.distance_km(black_box(*from), black_box(*to)));
            }
        });
    });
}

fn bench_haversine(c: &mut Criterion) {
    let pairs = city_pairs();

    c.bench_function("haversine_city_pairs", |b| {
        b.iter(|| {
            for (from, to) in &pairs {
                black_box(HaversineCalculator.distance_km(black_box(*from), black_box(*to)));
            }
        });
    });
}

// Near-antipodal points are the slow path for the geodesic solver
fn bench_geodesic_antipodal(c: &mut Criterion) {
    let from = Coordinates::new(0.0, 0.0).unwrap();
    let to = Coordinates::new(0.5, 179.5).unwrap();

    c.bench_function("geodesic_near_antipodal", |b| {
        b.iter(|| black_box(GeodesicCalculator.distance_km(black_box(from), black_box(to))));
    });
}

criterion_group!(
    benches,
    bench_geodesic,
    bench_haversine,
    bench_geodesic_antipodal
);
criterion_main!(benches);
