use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geo::{coord, Geometry, LineString, MultiPolygon, Point, Polygon};
use geo_ewkb::{from_ewkb, to_ewkb, GeometryScanner, SqlValue, WriteOptions};

fn line_string(num_points: usize) -> LineString {
    (0..num_points)
        .map(|i| coord! { x: i as f64 * 0.001, y: (i as f64).sin() })
        .collect()
}

/// A multi polygon of `num_polygons` squares with 64 points on each side.
fn multi_polygon(num_polygons: usize) -> MultiPolygon {
    (0..num_polygons)
        .map(|i| {
            let x0 = i as f64 * 10.;
            let mut coords = Vec::new();
            for j in 0..64 {
                coords.push(coord! { x: x0 + j as f64 / 64., y: 0. });
            }
            for j in 0..64 {
                coords.push(coord! { x: x0 + 1., y: j as f64 / 64. });
            }
            for j in 0..64 {
                coords.push(coord! { x: x0 + 1. - j as f64 / 64., y: 1. });
            }
            for j in 0..64 {
                coords.push(coord! { x: x0, y: 1. - j as f64 / 64. });
            }
            Polygon::new(LineString::new(coords), vec![])
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let point = Geometry::Point(Point::new(-122.4194, 37.7749));
    let line_string = Geometry::LineString(line_string(10_000));
    let multi_polygon = Geometry::MultiPolygon(multi_polygon(500));

    c.bench_function("encode point", |b| {
        b.iter(|| to_ewkb(black_box(&point), WriteOptions::default()).unwrap())
    });
    c.bench_function("encode line string of 10000 points", |b| {
        b.iter(|| to_ewkb(black_box(&line_string), WriteOptions::default()).unwrap())
    });
    c.bench_function("encode multi polygon of 500 polygons", |b| {
        b.iter(|| to_ewkb(black_box(&multi_polygon), WriteOptions::default()).unwrap())
    });

    let line_string_buf = to_ewkb(&line_string, WriteOptions::default()).unwrap();
    let multi_polygon_buf = to_ewkb(&multi_polygon, WriteOptions::default()).unwrap();

    c.bench_function("decode line string of 10000 points", |b| {
        b.iter(|| from_ewkb(black_box(&line_string_buf)).unwrap())
    });
    c.bench_function("decode multi polygon of 500 polygons", |b| {
        b.iter(|| from_ewkb(black_box(&multi_polygon_buf)).unwrap())
    });

    let plain_wkb = WriteOptions {
        srid: 0,
        ..Default::default()
    };
    let mut prefixed = 4326u32.to_le_bytes().to_vec();
    prefixed.extend_from_slice(&to_ewkb(&multi_polygon, plain_wkb).unwrap());
    c.bench_function("scan srid prefixed multi polygon", |b| {
        b.iter(|| {
            let mut scanner = GeometryScanner::new();
            scanner.scan(SqlValue::Bytes(black_box(&prefixed))).unwrap();
            scanner.geometry
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
