use analysis::{Calibration, Classifier, ColorRamp};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_classify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let colors: Vec<u32> = (0..65_536).map(|_| rng.gen::<u32>() & 0xFFFFFF).collect();

    let mut group = c.benchmark_group("classify");
    for (name, calibration) in [
        ("unmasked_64k", Calibration::Unmasked),
        ("masked_64k", Calibration::Masked),
    ] {
        let classifier = Classifier::new(calibration);
        group.bench_function(name, |b| {
            b.iter(|| {
                for &color in &colors {
                    black_box(classifier.classify(black_box(color)));
                }
            })
        });
    }
    group.finish();
}

fn bench_ramp_map(c: &mut Criterion) {
    let ramp = ColorRamp::frequency();
    c.bench_function("ramp_map_sweep_1k", |b| {
        b.iter(|| {
            for i in 0..1_000 {
                black_box(ramp.map(black_box(i as f32 / 1_000.0)));
            }
        })
    });
}

criterion_group!(benches, bench_classify, bench_ramp_map);
criterion_main!(benches);
