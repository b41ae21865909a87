use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slideverify_core::{DragGesture, DragSample, PointerEvent, SlideVerify};

const SAMPLE_COUNTS: &[usize] = &[60, 600];

fn drag_samples(count: usize) -> Vec<DragSample> {
    let mut samples: Vec<DragSample> = (0..count)
        .map(|i| DragSample::active(i as f32 * 300.0 / count as f32))
        .collect();
    samples.push(DragSample::end(300.0));
    samples
}

fn bench_sample_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_pipeline");
    for &count in SAMPLE_COUNTS {
        let samples = drag_samples(count);
        group.bench_with_input(BenchmarkId::new("handle_sample", count), &samples, |b, samples| {
            b.iter(|| {
                let mut widget = SlideVerify::default();
                for sample in samples {
                    black_box(widget.handle_sample(*sample));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("pointer_events", count), &count, |b, &count| {
            b.iter(|| {
                let mut widget = SlideVerify::default();
                let mut drag = DragGesture::new();
                let mut feed = |event| {
                    if let Some(sample) = drag.on_pointer_event(event) {
                        black_box(widget.handle_sample(sample));
                    }
                };
                feed(PointerEvent::down(1, 0.0));
                for i in 0..count {
                    feed(PointerEvent::moved(1, i as f32 * 300.0 / count as f32));
                }
                feed(PointerEvent::up(1, 300.0));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample_pipeline);
criterion_main!(benches);
