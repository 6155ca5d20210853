use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use spire_config::parse_settings;
use spire_sensor::{ConfigLookup, JOYSTICK_BUTTON_START};

fn bench_parse_settings(c: &mut Criterion) {
    let sample: &str = include_str!("../../../spire.yaml");
    let minimal = "version: 1\n";

    c.bench_function("spire_settings_sample", |b| {
        b.iter(|| {
            let settings = parse_settings(black_box(sample)).expect("sample settings");
            black_box(settings.get_int(JOYSTICK_BUTTON_START));
        })
    });
    c.bench_function("spire_settings_defaults", |b| {
        b.iter(|| black_box(parse_settings(black_box(minimal)).expect("minimal settings")))
    });
}

criterion_group!(benches, bench_parse_settings);
criterion_main!(benches);
