mod common;

use std::cell::Cell;

use orthoview_core::camera::OrthographicCamera;
use orthoview_core::config::ViewerConfig;
use orthoview_core::render_loop::{
    CancellationToken, FrameScheduler, LoopControl, LoopState, RenderLoop, Renderer,
};
use orthoview_core::scene::Scene;
use orthoview_core::viewer::Viewer;
use orthoview_core::viewport::{ContainerSize, Surface};

use common::*;

#[derive(Default)]
struct CountingRenderer {
    frames: usize,
    last_scene_len: usize,
}

impl Renderer for CountingRenderer {
    fn render(&mut self, scene: &Scene, _camera: &OrthographicCamera, _surface: &Surface) {
        self.frames += 1;
        self.last_scene_len = scene.len();
    }
}

#[derive(Default)]
struct CountingScheduler {
    requests: Cell<usize>,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

fn viewer() -> Viewer {
    Viewer::new(&ContainerSize::new(320.0, 240.0), ViewerConfig::default())
}

#[test]
fn test_runs_before_any_volume() {
    let mut v = viewer();
    let mut renderer = CountingRenderer::default();
    let scheduler = CountingScheduler::default();
    let mut render_loop = RenderLoop::new(CancellationToken::new());
    assert_eq!(render_loop.state(), LoopState::Idle);

    for _ in 0..3 {
        let control = render_loop.tick(&mut v, &mut renderer, &scheduler);
        assert_eq!(control, LoopControl::Continue);
    }
    assert_eq!(render_loop.state(), LoopState::Running);
    assert_eq!(renderer.frames, 3);
    assert_eq!(renderer.last_scene_len, 0);
    assert_eq!(scheduler.requests.get(), 3);
}

#[test]
fn test_draws_loaded_scene() {
    let mut v = viewer();
    let mut renderer = CountingRenderer::default();
    let scheduler = CountingScheduler::default();
    let mut render_loop = RenderLoop::new(CancellationToken::new());

    render_loop.tick(&mut v, &mut renderer, &scheduler);
    v.attach_volume(loaded_volume([4, 4, 4], [1.0, 1.0, 1.0]));
    render_loop.tick(&mut v, &mut renderer, &scheduler);
    assert_eq!(renderer.last_scene_len, 1);
}

#[test]
fn test_cancellation_stops_for_good() {
    let mut v = viewer();
    let mut renderer = CountingRenderer::default();
    let scheduler = CountingScheduler::default();
    let token = CancellationToken::new();
    let mut render_loop = RenderLoop::new(token.clone());

    render_loop.tick(&mut v, &mut renderer, &scheduler);
    token.cancel();

    for _ in 0..3 {
        assert_eq!(
            render_loop.tick(&mut v, &mut renderer, &scheduler),
            LoopControl::Stop
        );
    }
    assert_eq!(render_loop.state(), LoopState::Stopped);
    assert_eq!(renderer.frames, 1);
    assert_eq!(scheduler.requests.get(), 1);
    assert_eq!(render_loop.frames(), 1);
}

#[test]
fn test_tick_applies_pending_pan() {
    let mut v = viewer();
    v.attach_volume(loaded_volume([4, 4, 4], [1.0, 1.0, 1.0]));
    let before = v.camera().target();

    v.controls_mut().pan(25.0, 0.0);
    v.controls_mut().rotate(100.0, 0.0);
    assert!(v.controls().has_pending_input());

    let mut render_loop = RenderLoop::new(CancellationToken::new());
    render_loop.tick(&mut v, &mut CountingRenderer::default(), &CountingScheduler::default());

    assert!(!v.controls().has_pending_input());
    assert_ne!(v.camera().target(), before);
    // rotation is disabled on ortho controls
    assert_eq!(v.camera().angle(), 0.0);
}

#[test]
fn test_zoom_input_clamped() {
    let mut v = viewer();
    v.controls_mut().zoom(1.0e6);
    v.update_controls();
    assert_eq!(v.camera().zoom(), 100.0);
}

#[test]
fn test_damped_controls_carry_input_across_frames() {
    let mut config = ViewerConfig::default();
    config.camera.static_moving = false;
    config.camera.damping = 0.5;
    let mut v = Viewer::new(&ContainerSize::new(320.0, 240.0), config);
    v.attach_volume(loaded_volume([4, 4, 4], [1.0, 1.0, 1.0]));
    assert!(!v.controls().static_moving);

    let start = v.camera().target();
    v.controls_mut().pan(40.0, 0.0);

    let mut render_loop = RenderLoop::new(CancellationToken::new());
    let mut renderer = CountingRenderer::default();
    let scheduler = CountingScheduler::default();

    render_loop.tick(&mut v, &mut renderer, &scheduler);
    let first = v.camera().target();
    assert_ne!(first, start);
    assert!(v.controls().has_pending_input());

    render_loop.tick(&mut v, &mut renderer, &scheduler);
    let second = v.camera().target();
    // the second frame moves half as far again
    let step1 = (first - start).length();
    let step2 = (second - first).length();
    assert!((step2 - step1 * 0.5).abs() < 1e-3);

    for _ in 0..64 {
        render_loop.tick(&mut v, &mut renderer, &scheduler);
    }
    assert!(!v.controls().has_pending_input());
}
