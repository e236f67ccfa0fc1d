use criterion::{Criterion, criterion_group, criterion_main};
use sc2winjupos::naming::parse_stacked_image_filename;
use sc2winjupos::session::parsing::parse_session;
use sc2winjupos::time::{mid_exposure_time, to_winjupos_time};
use std::hint::black_box;

const SETTINGS: &str = "\
[ZWO ASI294MC (color)]
Debayer Preview=On
StartCapture=2023-01-01T10:00:00.0000000+00:00
MidCapture=2023-01-01T10:05:00.0000000+00:00
EndCapture=2023-01-01T10:10:00.0000000+00:00
FrameCount=6000
";

fn bench(c: &mut Criterion) {
    c.bench_function("session::parse_session", |b| {
        b.iter(|| parse_session(black_box("12_30_45"), black_box(SETTINGS)).unwrap());
    });

    let session = parse_session("12_30_45", SETTINGS).unwrap();
    c.bench_function("plan single stacked image", |b| {
        b.iter(|| {
            let image =
                parse_stacked_image_filename(black_box("12_30_45_L_lapl5_ap80_limit1000-3000.tif"))
                    .unwrap();
            let time = mid_exposure_time(&session, image.frame_range).unwrap();
            to_winjupos_time(&time)
        });
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
