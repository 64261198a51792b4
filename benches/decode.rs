use criterion::{criterion_group, criterion_main, Criterion};
use geo::polygon;
use geozero::wkb::Wkb;
use geozero::{CoordDimensions, ToGeo, ToWkb};
use sf_wkb::{read_geometry, read_geometry_with_filter, PointFiniteFilter};

/// A multi polygon of `n` square cells, each with a hole, encoded with geozero.
fn grid_wkb(n: usize) -> Vec<u8> {
    let polygons = (0..n)
        .map(|i| {
            let x = (i % 100) as f64;
            let y = (i / 100) as f64;
            polygon!(
                exterior: [
                    (x: x, y: y),
                    (x: x + 1., y: y),
                    (x: x + 1., y: y + 1.),
                    (x: x, y: y + 1.),
                ],
                interiors: [[
                    (x: x + 0.25, y: y + 0.25),
                    (x: x + 0.75, y: y + 0.25),
                    (x: x + 0.75, y: y + 0.75),
                ]],
            )
        })
        .collect::<Vec<_>>();
    let geometry = geo::Geometry::MultiPolygon(geo::MultiPolygon::new(polygons));
    geometry.to_wkb(CoordDimensions::xy()).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let wkb = grid_wkb(10_000);

    c.bench_function("decode MultiPolygon to Geometry", |b| {
        b.iter(|| {
            let _geometry = read_geometry(&wkb).unwrap();
        })
    });
    c.bench_function("decode MultiPolygon with PointFiniteFilter", |b| {
        let filter = PointFiniteFilter::default();
        b.iter(|| {
            let _geometry = read_geometry_with_filter(&wkb, &filter).unwrap();
        })
    });
    c.bench_function("decode MultiPolygon then convert to geo::Geometry", |b| {
        b.iter(|| {
            let geometry = read_geometry(&wkb).unwrap().unwrap();
            let _geo: geo::Geometry = geometry.try_into().unwrap();
        })
    });
    c.bench_function("decode MultiPolygon to geo::Geometry with geozero", |b| {
        b.iter(|| {
            let _geo = Wkb(wkb.clone()).to_geo().unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
