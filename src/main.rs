//! Headless demo: loads an options preset, replays a short scripted input
//! session against the camera and logs the pose each frame.
//!
//! ```text
//! RUST_LOG=info vantage [preset.toml]
//! ```

use std::path::Path;

use vantage::input::{InputEvent, InputState, Key, MouseButton};
use vantage::{Camera, Options};

const FRAME_DT: f32 = 1.0 / 60.0;

/// One scripted frame: events delivered before the camera reads input.
fn script(frame: u32) -> Vec<InputEvent> {
    let key = |key, pressed| InputEvent::Key { key, pressed };
    let x = 400.0 + frame as f32 * 4.0;
    match frame {
        0 => vec![
            key(Key::KeyW, true),
            InputEvent::CursorMoved { x: 400.0, y: 300.0 },
        ],
        1..=29 => vec![InputEvent::CursorMoved { x, y: 300.0 }],
        30 => vec![key(Key::KeyW, false), key(Key::Tab, true)],
        31 => vec![key(Key::Tab, false), key(Key::Tab, true)],
        32 => vec![key(Key::Tab, false), key(Key::Tab, true)],
        33 => vec![
            key(Key::Tab, false),
            InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            },
        ],
        34..=59 => vec![
            InputEvent::CursorMoved { x, y: 300.0 },
            InputEvent::Scroll { dx: 0.0, dy: 0.25 },
        ],
        _ => Vec::new(),
    }
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load preset '{path}': {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut camera = Camera::from_options(&options);
    let mut input = InputState::new();

    for frame in 0..60 {
        for event in script(frame) {
            input.handle_event(event);
        }
        camera.process_input(&input, FRAME_DT);
        input.end_frame();

        log::info!(
            "frame {frame:2} {:>12} pos={:?} dir={:?} yaw={:.1} pitch={:.1} radius={:.2}",
            camera.mode().to_string(),
            camera.position(),
            camera.direction(),
            camera.yaw(),
            camera.pitch(),
            camera.orbit_radius(),
        );
    }

    let uniform = camera.uniform();
    log::info!(
        "final uniform: {} bytes, view_proj[3]={:?}",
        bytemuck::bytes_of(&uniform).len(),
        uniform.view_proj[3]
    );
}
