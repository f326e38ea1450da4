use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ease_core::{ease, Ease};

const STEPS: usize = 1_000;

fn evaluate_all(c: &mut Criterion) {
    c.bench_function("evaluate_all_curves", move |b| {
        b.iter(|| {
            let mut sum = 0.0f32;

            for &curve in Ease::ALL.iter() {
                for i in 0..STEPS {
                    sum += ease_core::evaluate(black_box(curve), i as f32 / STEPS as f32);
                }
            }

            black_box(sum);
        });
    });
}

fn function_lookup_once(c: &mut Criterion) {
    c.bench_function("function_lookup_once", move |b| {
        b.iter(|| {
            let mut sum = 0.0f32;

            for &curve in Ease::ALL.iter() {
                let f = ease_core::get_function(black_box(curve));

                for i in 0..STEPS {
                    sum += f(i as f32 / STEPS as f32);
                }
            }

            black_box(sum);
        });
    });
}

fn composed_curve(c: &mut Criterion) {
    let curve = ease(Ease::InElastic)
        .in_out(Ease::OutBounce)
        .squeeze(0.1..=0.9)
        .scale_min_max(-1.0, 1.0);

    c.bench_function("composed_curve", move |b| {
        b.iter(|| {
            let mut sum = 0.0f32;

            for i in 0..STEPS {
                sum += curve.eval(black_box(i as f32 / STEPS as f32));
            }

            black_box(sum);
        });
    });
}

criterion_group!(benches, evaluate_all, function_lookup_once, composed_curve);
criterion_main!(benches);
