use criterion::{black_box, criterion_group, criterion_main, Criterion};
use point::Point;

fn scale(c: &mut Criterion) {
    let point = Point::new(30, 40);

    c.bench_function("scale", |b| b.iter(|| black_box(point).scale(black_box(2))));
}

fn translate(c: &mut Criterion) {
    let point = Point::new(30, 40);

    c.bench_function("translate", |b| {
        b.iter(|| black_box(point).translate(black_box(2), black_box(3)))
    });
}

criterion_group!(benches, scale, translate);
criterion_main!(benches);
