use colorlab::detect::detect;
use colorlab::palette::generate_palette;
use colorlab::path::{parse_svg_path, points_to_svg_path};
use colorlab::{ColorValue, Hsl, Rgb};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const INPUTS: [&str; 6] = [
    "#1E88E5",
    "rgb(30, 136, 229)",
    "hsla(208, 79%, 51%, 0.5)",
    "cmyk(87%, 41%, 0%, 10%)",
    "30, 136, 229",
    "rebeccapurple",
];

const HEART: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3 \
    c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5 \
    c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    group.bench_function("detect", |b| {
        b.iter(|| {
            for input in INPUTS {
                let _ = black_box(detect(black_box(input)));
            }
        })
    });

    group.bench_function("parse", |b| {
        b.iter(|| black_box("hsl(208, 79%, 51%)").parse::<ColorValue>())
    });

    group.bench_function("hsl-round-trip", |b| {
        b.iter(|| Rgb::from(Hsl::from(black_box(Rgb::new(30, 136, 229)))))
    });

    group.bench_function("palette", |b| {
        b.iter(|| generate_palette(black_box(Rgb::new(30, 136, 229))))
    });

    group.finish();

    let mut group = c.benchmark_group("path");

    group.bench_function("parse", |b| b.iter(|| parse_svg_path(black_box(HEART))));

    let points = parse_svg_path(HEART);
    group.bench_function("reconstruct", |b| {
        b.iter(|| points_to_svg_path(black_box(&points)))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
