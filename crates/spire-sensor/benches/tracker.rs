use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use spire_sensor::{Report, ReportMapping, TransitionTracker};

fn bench_record_and_consume(c: &mut Criterion) {
    c.bench_function("tracker_record_consume_alternating", |b| {
        let mut tracker = TransitionTracker::new();
        let mut level = false;
        b.iter(|| {
            level = !level;
            tracker.record_level(black_box(level));
            black_box(tracker.consume_event());
        })
    });

    c.bench_function("tracker_burst_1000_then_drain", |b| {
        b.iter(|| {
            let mut tracker = TransitionTracker::new();
            for i in 0..1000 {
                tracker.record_level(black_box(i % 2 == 0));
            }
            let mut delivered = 0usize;
            while tracker.consume_event().is_some() {
                delivered += 1;
            }
            black_box(delivered);
        })
    });
}

fn bench_report_path(c: &mut Criterion) {
    let mapping = ReportMapping::default();
    let raw = Report {
        x: 100,
        y: -200,
        z: 0,
        aux: 1500,
    }
    .encode();

    c.bench_function("report_decode_and_map", |b| {
        let mut tracker = TransitionTracker::new();
        b.iter(|| {
            let report = Report::decode(black_box(&raw)).expect("full report");
            tracker.record_level(mapping.button_level(&report));
            black_box(mapping.axes(&report));
        })
    });
}

criterion_group!(benches, bench_record_and_consume, bench_report_path);
criterion_main!(benches);
