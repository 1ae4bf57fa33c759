use criterion::{black_box, criterion_group, criterion_main, Criterion};
use duplex::{
    camera::{CameraMatrices, ViewState, Viewport},
    geometry::{ConnectorPlacement, HelixFrame},
    options::Options,
    renderer::FrameInstances,
    sequence::Duplex,
};
use glam::Vec3;
use rand::{rngs::StdRng, SeedableRng};

fn connector_benchmark(c: &mut Criterion) {
    let start = Vec3::new(3.0, 0.0, 0.0);
    let end = Vec3::new(2.4, 0.5, 1.8);
    c.bench_function("connector_placement", |b| {
        b.iter(|| {
            ConnectorPlacement::between(black_box(start), black_box(end))
                .map(|p| p.model_matrix(0.12))
        })
    });
}

fn frame_build_benchmark(c: &mut Criterion) {
    let options = Options::default();
    let mut group = c.benchmark_group("frame_build");

    for length in [10, 100, 500] {
        let duplex = Duplex::generate(length, &mut StdRng::seed_from_u64(7));
        group.bench_function(format!("{length}_bp"), |b| {
            b.iter(|| {
                let frame = HelixFrame::build(
                    black_box(&duplex),
                    &options.helix,
                    &options.colors,
                );
                black_box(FrameInstances::from_frame(&frame))
            })
        });
    }
    group.finish();
}

fn camera_benchmark(c: &mut Criterion) {
    let options = Options::default();
    let view = ViewState::new(&options.camera);
    let viewport = Viewport::new(900, 700);
    c.bench_function("camera_matrices", |b| {
        b.iter(|| {
            CameraMatrices::new(black_box(&view), viewport, &options.camera, 25.0)
                .view_proj()
        })
    });
}

criterion_group!(
    benches,
    connector_benchmark,
    frame_build_benchmark,
    camera_benchmark
);
criterion_main!(benches);
