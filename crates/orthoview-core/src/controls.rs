use crate::camera::OrthographicCamera;
use crate::consts::{CONTROLS_DAMPING, MAX_ZOOM, MIN_ZOOM, PENDING_INPUT_EPSILON, ZOOM_SCROLL_SCALE};
use crate::viewport::{Container, ContainerSize};

/// Pan/zoom controls for an orthographic camera.
///
/// Pointer input is accumulated between frames and applied by `update`.
#[derive(Clone, Debug)]
pub struct TrackballOrthoControls {
    /// Apply pending input in full on the next update (no inertia).
    pub static_moving: bool,
    pub no_rotate: bool,
    /// Fraction of pending input kept after each update when not static.
    pub damping: f32,
    screen: ContainerSize,
    pending_pan: (f32, f32),
    pending_zoom: f32,
    pending_rotate: (f32, f32),
}

impl TrackballOrthoControls {
    /// Create controls for `camera`, listening on `container`.
    pub fn bind(camera: &OrthographicCamera, container: &dyn Container) -> Self {
        let mut controls = Self {
            static_moving: true,
            no_rotate: true,
            damping: CONTROLS_DAMPING,
            screen: container.offset_size(),
            pending_pan: (0.0, 0.0),
            pending_zoom: 0.0,
            pending_rotate: (0.0, 0.0),
        };
        if controls.screen.is_degenerate() {
            controls.screen = camera.canvas();
        }
        controls
    }

    pub fn handle_resize(&mut self, size: ContainerSize) {
        self.screen = size;
    }

    pub fn screen(&self) -> ContainerSize {
        self.screen
    }

    /// Drag by a screen delta in pixels.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.pending_pan.0 += dx;
        self.pending_pan.1 += dy;
    }

    /// Scroll amount; positive zooms in.
    pub fn zoom(&mut self, scroll: f32) {
        self.pending_zoom += scroll;
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        if self.no_rotate {
            return;
        }
        self.pending_rotate.0 += dx;
        self.pending_rotate.1 += dy;
    }

    pub fn has_pending_input(&self) -> bool {
        self.pending_pan != (0.0, 0.0)
            || self.pending_zoom != 0.0
            || self.pending_rotate != (0.0, 0.0)
    }

    /// Apply accumulated input to the camera.
    ///
    /// Static controls consume the input at once. Otherwise a `damping`
    /// share carries over to the next update until it fades out.
    pub fn update(&mut self, camera: &mut OrthographicCamera) {
        if !self.has_pending_input() {
            return;
        }
        let (dx, dy) = self.pending_pan;
        if dx != 0.0 || dy != 0.0 {
            // Drag follows the pointer: the focal point moves the other way.
            let from = camera.unproject((0.0, 0.0));
            let to = camera.unproject((-dx, -dy));
            camera.translate(to - from);
        }

        if self.pending_zoom != 0.0 {
            let factor = 2f32.powf(self.pending_zoom * ZOOM_SCROLL_SCALE);
            camera.set_zoom((camera.zoom() * factor).clamp(MIN_ZOOM, MAX_ZOOM));
        }

        if self.pending_rotate != (0.0, 0.0) {
            let degrees = self.pending_rotate.0 / self.screen.width.max(1.0) * 360.0;
            camera.set_angle(camera.angle() + degrees);
        }

        if self.static_moving {
            self.reset();
        } else {
            let keep = self.damping.clamp(0.0, 1.0);
            self.pending_pan.0 *= keep;
            self.pending_pan.1 *= keep;
            self.pending_zoom *= keep;
            self.pending_rotate.0 *= keep;
            self.pending_rotate.1 *= keep;
            let residue = self.pending_pan.0.abs()
                + self.pending_pan.1.abs()
                + self.pending_zoom.abs()
                + self.pending_rotate.0.abs()
                + self.pending_rotate.1.abs();
            if residue < PENDING_INPUT_EPSILON {
                self.reset();
            }
        }
    }

    /// Drop any input not yet applied.
    pub fn reset(&mut self) {
        self.pending_pan = (0.0, 0.0);
        self.pending_zoom = 0.0;
        self.pending_rotate = (0.0, 0.0);
    }
}
