use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lakechart_core::line::segments;
use lakechart_core::record::DataRecord;
use lakechart_core::scale::LinearScale;

fn gen_records(n: usize) -> Vec<DataRecord> {
    (0..n)
        .map(|i| {
            // sprinkle gaps so segment splitting actually happens
            let area = if i % 17 == 0 { None } else { Some((i % 100) as f64) };
            DataRecord::new(1900 + i as i32, area)
        })
        .collect()
}

fn bench_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments");
    for &n in &[10_000usize, 100_000usize] {
        let records = gen_records(n);
        let x = LinearScale::new((1900.0, 1900.0 + n as f64), (0.0, 924.0));
        let y = LinearScale::new((0.0, 100.0), (540.0, 0.0));
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| {
                let _ = black_box(segments(&records, &x, &y));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segments);
criterion_main!(benches);
