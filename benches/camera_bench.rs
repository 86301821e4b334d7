use criterion::{criterion_group, criterion_main, Criterion, black_box};
use glam::Vec3;
use vantage::camera::{Camera, CameraMode, Pose, ProjectionConfig};
use vantage::input::{InputEvent, InputState, Key};

fn camera(mode: CameraMode) -> Camera {
    Camera::new(
        Pose {
            position: Vec3::new(0.0, 1.0, 5.0),
            ..Pose::default()
        },
        mode,
        ProjectionConfig::default(),
    )
}

fn mouse_look_benchmark(c: &mut Criterion) {
    let mut cam = camera(CameraMode::Free);
    c.bench_function("free_mouse_look", |b| {
        b.iter(|| cam.process_mouse_movement(black_box(1.5), black_box(-0.5), true))
    });
}

fn process_input_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_input");

    for mode in [CameraMode::Free, CameraMode::FirstPerson, CameraMode::Orbit] {
        let mut cam = camera(mode);
        let mut input = InputState::new();
        input.handle_event(InputEvent::Key { key: Key::KeyW, pressed: true });
        input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        input.handle_event(InputEvent::CursorMoved { x: 3.0, y: 1.0 });

        group.bench_function(mode.to_string(), |b| {
            b.iter(|| cam.process_input(black_box(&input), black_box(1.0 / 60.0)))
        });
    }
    group.finish();
}

fn clean_update_benchmark(c: &mut Criterion) {
    let mut cam = camera(CameraMode::Orbit);
    c.bench_function("clean_update", |b| {
        b.iter(|| {
            cam.update();
            black_box(cam.view_matrix())
        })
    });
}

criterion_group!(benches, mouse_look_benchmark, process_input_benchmark, clean_update_benchmark);
criterion_main!(benches);
