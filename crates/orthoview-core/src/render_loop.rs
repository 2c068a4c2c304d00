use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::camera::OrthographicCamera;
use crate::scene::Scene;
use crate::viewer::Viewer;
use crate::viewport::Surface;

/// Draws the scene for one frame.
pub trait Renderer {
    fn render(&mut self, scene: &Scene, camera: &OrthographicCamera, surface: &Surface);
}

/// Host hook for "call me again before the next repaint".
pub trait FrameScheduler {
    fn request_frame(&self);
}

/// Shared stop flag for a render loop.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Per-frame driver: controls update, render, reschedule.
#[derive(Debug)]
pub struct RenderLoop {
    state: LoopState,
    token: CancellationToken,
    frames: u64,
}

impl RenderLoop {
    pub fn new(token: CancellationToken) -> Self {
        Self {
            state: LoopState::Idle,
            token,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn stop(&mut self) {
        self.token.cancel();
    }

    /// Run one frame. Once cancelled, nothing is drawn or rescheduled again.
    pub fn tick(
        &mut self,
        viewer: &mut Viewer,
        renderer: &mut dyn Renderer,
        scheduler: &dyn FrameScheduler,
    ) -> LoopControl {
        if self.state == LoopState::Stopped {
            return LoopControl::Stop;
        }
        if self.token.is_cancelled() {
            self.state = LoopState::Stopped;
            info!(frames = self.frames, "render loop stopped");
            return LoopControl::Stop;
        }
        if self.state == LoopState::Idle {
            debug!("render loop started");
            self.state = LoopState::Running;
        }

        viewer.update_controls();
        viewer.sync_panel();
        renderer.render(viewer.scene(), viewer.camera(), viewer.surface());
        self.frames += 1;
        scheduler.request_frame();
        LoopControl::Continue
    }
}
