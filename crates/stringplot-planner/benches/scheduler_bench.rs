use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stringplot_core::{MachineGeometry, Path, Point};
use stringplot_planner::{PathFitter, PathScheduler};

/// Short scribble strokes scattered pseudo-randomly over a 100 x 70 sheet
fn scribble(n: usize) -> Vec<Path> {
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        (seed % 10_000) as f64 / 100.0
    };
    (0..n)
        .map(|_| {
            let (x, y) = (next(), next() * 0.7);
            vec![
                Point::new(x, y),
                Point::new(x + 0.3, y + 0.1),
                Point::new(x + 0.1, y + 0.4),
            ]
        })
        .collect()
}

fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");
    group.sample_size(10);
    for n in [1_000, 5_000, 20_000] {
        let paths = scribble(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &paths, |b, paths| {
            b.iter(|| PathScheduler::default().schedule(black_box(paths)))
        });
    }
    group.finish();
}

fn bench_fit(c: &mut Criterion) {
    let paths = scribble(20_000);
    let fitter = PathFitter::new(MachineGeometry::default().draw_rect());
    c.bench_function("fit_20000", |b| b.iter(|| fitter.fit(black_box(&paths))));
}

criterion_group!(benches, bench_schedule, bench_fit);
criterion_main!(benches);
