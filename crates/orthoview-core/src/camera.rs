use glam::{Quat, Vec3};
use tracing::{debug, warn};

use crate::consts::ROTATION_STEP_DEGREES;
use crate::orientation::{Convention, Orientation, SliceAxis};
use crate::viewport::ContainerSize;

/// Axis-aligned region the camera frames, in world (LPS) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBox {
    pub center: Vec3,
    pub half_dimensions: Vec3,
}

/// Which canvas dimension `fit_box` matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitMode {
    Width,
    Height,
    /// Fit both, keeping the smaller zoom.
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FitOutcome {
    Fitted { zoom: f32 },
    /// No box yet, or nothing to fit into.
    Skipped,
}

/// Orthographic frustum extents before zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl ProjectionBounds {
    fn from_canvas(size: ContainerSize) -> Self {
        Self {
            left: -size.width / 2.0,
            right: size.width / 2.0,
            top: size.height / 2.0,
            bottom: -size.height / 2.0,
        }
    }
}

/// Orthographic camera with medical viewing conventions.
///
/// The view basis is derived from the stack direction cosines so that the
/// chosen plane is seen the way radiologists (or neurologists) expect.
#[derive(Clone, Debug)]
pub struct OrthographicCamera {
    bounds: ProjectionBounds,
    near: f32,
    far: f32,
    canvas: ContainerSize,
    zoom: f32,
    camera_box: Option<CameraBox>,
    directions: [Vec3; 3],
    orientation: Orientation,
    convention: Convention,
    angle: f32,
    up: Vec3,
    direction: Vec3,
    right: Vec3,
    position: Vec3,
    target: Vec3,
    mirrored: bool,
}

impl OrthographicCamera {
    pub fn new(size: ContainerSize, near: f32, far: f32) -> Self {
        let mut camera = Self {
            bounds: ProjectionBounds::from_canvas(size),
            near,
            far,
            canvas: size,
            zoom: 1.0,
            camera_box: None,
            directions: [Vec3::X, Vec3::Y, Vec3::Z],
            orientation: Orientation::default(),
            convention: Convention::default(),
            angle: 0.0,
            up: Vec3::NEG_Y,
            direction: Vec3::Z,
            right: Vec3::X,
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            mirrored: false,
        };
        camera.update();
        camera
    }

    pub fn bounds(&self) -> ProjectionBounds {
        self.bounds
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn canvas(&self) -> ContainerSize {
        self.canvas
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom > 0.0 && zoom.is_finite() {
            self.zoom = zoom;
        }
    }

    pub fn camera_box(&self) -> Option<CameraBox> {
        self.camera_box
    }

    pub fn set_box(&mut self, camera_box: CameraBox) {
        self.camera_box = Some(camera_box);
    }

    pub fn directions(&self) -> [Vec3; 3] {
        self.directions
    }

    /// Stack x/y/z direction cosines the view basis is built from.
    pub fn set_directions(&mut self, directions: [Vec3; 3]) {
        self.directions = directions;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    pub fn set_convention(&mut self, convention: Convention) {
        self.convention = convention;
    }

    /// In-plane rotation, always in [0, 360).
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Screen-right axis in world space, before the column mirror.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    pub fn set_canvas(&mut self, size: ContainerSize) {
        self.canvas = size;
        self.bounds = ProjectionBounds::from_canvas(size);
    }

    /// Recompute the view basis from orientation, convention and directions.
    ///
    /// Also recentres on the box and clears rotation, mirroring and zoom.
    pub fn update(&mut self) {
        let left = self.directions[find_max_index(&self.directions, 0)];
        let posterior = self.directions[find_max_index(&self.directions, 1)];
        let superior = self.directions[find_max_index(&self.directions, 2)];
        let radio = self.convention == Convention::Radio;

        let (up, direction) = match self.orientation {
            Orientation::Axial => (
                pointing(posterior, 1, false),
                pointing(superior, 2, radio),
            ),
            Orientation::Coronal => (
                pointing(superior, 2, true),
                pointing(posterior, 1, radio),
            ),
            Orientation::Sagittal => (
                pointing(superior, 2, true),
                pointing(left, 0, !radio),
            ),
        };
        self.up = up.normalize_or_zero();
        self.direction = direction.normalize_or_zero();
        self.refresh_right();

        self.angle = 0.0;
        self.mirrored = false;
        self.zoom = 1.0;
        self.recentre();
        debug!(
            orientation = %self.orientation,
            convention = %self.convention,
            up = %self.up,
            direction = %self.direction,
            "camera basis updated"
        );
    }

    /// Put the target back at the box centre, with the eye outside the box.
    pub fn recentre(&mut self) {
        let (center, reach) = match self.camera_box {
            Some(b) => (b.center, b.half_dimensions.length()),
            None => (Vec3::ZERO, 1.0),
        };
        self.target = center;
        self.position = center - self.direction * (reach + self.near);
    }

    /// Shift the view in its own plane by a world-space offset.
    pub fn translate(&mut self, offset: Vec3) {
        self.target += offset;
        self.position += offset;
    }

    /// Zoom so the box extent along the chosen screen axes fills the canvas,
    /// scaled by `factor`.
    pub fn fit_box(&mut self, mode: FitMode, factor: f32) -> FitOutcome {
        let Some(camera_box) = self.camera_box else {
            debug!("no camera box, fit skipped");
            return FitOutcome::Skipped;
        };
        if self.canvas.is_degenerate() {
            warn!(
                width = self.canvas.width,
                height = self.canvas.height,
                "degenerate canvas, fit skipped"
            );
            return FitOutcome::Skipped;
        }

        let width_zoom = chord_length(&camera_box, self.right)
            .map(|len| factor * self.canvas.width / len);
        let height_zoom = chord_length(&camera_box, self.up)
            .map(|len| factor * self.canvas.height / len);

        let zoom = match mode {
            FitMode::Width => width_zoom,
            FitMode::Height => height_zoom,
            FitMode::Both => match (width_zoom, height_zoom) {
                (Some(w), Some(h)) => Some(w.min(h)),
                (w, h) => w.or(h),
            },
        };

        match zoom {
            Some(zoom) if zoom.is_finite() && zoom > 0.0 => {
                self.zoom = zoom;
                debug!(?mode, zoom, "camera fitted to box");
                FitOutcome::Fitted { zoom }
            }
            _ => {
                warn!(?mode, "box has no extent along the view axes, fit skipped");
                FitOutcome::Skipped
            }
        }
    }

    /// Vertical mirror.
    pub fn invert_rows(&mut self) {
        self.up = -self.up;
        self.refresh_right();
        self.mirrored = !self.mirrored;
    }

    /// Horizontal mirror.
    pub fn invert_columns(&mut self) {
        self.mirrored = !self.mirrored;
    }

    /// Rotate to `angle` degrees, or one step clockwise when `None`.
    pub fn rotate(&mut self, angle: Option<f32>) {
        match angle {
            Some(a) => self.set_angle(a),
            None => {
                self.rotate_basis(-ROTATION_STEP_DEGREES);
                self.angle = (self.angle + ROTATION_STEP_DEGREES).rem_euclid(360.0);
            }
        }
    }

    pub fn set_angle(&mut self, angle: f32) {
        if !angle.is_finite() {
            return;
        }
        let angle = angle.rem_euclid(360.0);
        self.rotate_basis(360.0 - (angle - self.angle));
        // rem_euclid can round up to exactly 360.0 for tiny negatives.
        self.angle = if angle >= 360.0 { 0.0 } else { angle };
    }

    /// Stack axis the current viewing plane cuts across.
    pub fn stack_orientation(&self) -> SliceAxis {
        let component = match self.orientation {
            Orientation::Axial => 2,
            Orientation::Coronal => 1,
            Orientation::Sagittal => 0,
        };
        SliceAxis::across_direction(find_max_index(&self.directions, component))
    }

    /// Screen offset of a world point from the canvas centre, in pixels,
    /// with y growing downwards.
    pub fn project(&self, world: Vec3) -> (f32, f32) {
        let rel = world - self.target;
        let sign = if self.mirrored { -1.0 } else { 1.0 };
        let x = sign * rel.dot(self.right) * self.zoom;
        let y = -rel.dot(self.up) * self.zoom;
        (x, y)
    }

    /// Inverse of `project` for points on the focal plane.
    pub fn unproject(&self, screen: (f32, f32)) -> Vec3 {
        let sign = if self.mirrored { -1.0 } else { 1.0 };
        self.target + self.right * (sign * screen.0 / self.zoom) - self.up * (screen.1 / self.zoom)
    }

    fn rotate_basis(&mut self, degrees: f32) {
        if self.direction == Vec3::ZERO {
            return;
        }
        // A mirrored view turns the other way on screen.
        let degrees = if self.mirrored { -degrees } else { degrees };
        let rotation = Quat::from_axis_angle(self.direction, degrees.to_radians());
        self.up = (rotation * self.up).normalize_or_zero();
        self.refresh_right();
    }

    fn refresh_right(&mut self) {
        self.right = self.up.cross(-self.direction).normalize_or_zero();
    }
}

/// Index of the direction with the largest absolute value on `component`.
fn find_max_index(directions: &[Vec3; 3], component: usize) -> usize {
    let mut best = 0;
    let mut best_value = f32::MIN;
    for (i, d) in directions.iter().enumerate() {
        let value = d[component].abs();
        if value > best_value {
            best = i;
            best_value = value;
        }
    }
    best
}

/// Flip `v` so that its `component` is positive (or not positive).
fn pointing(v: Vec3, component: usize, positive: bool) -> Vec3 {
    if (v[component] > 0.0) == positive {
        v
    } else {
        -v
    }
}

/// Length of the line through the box centre along `axis`, clipped by the box.
fn chord_length(camera_box: &CameraBox, axis: Vec3) -> Option<f32> {
    let axis = axis.normalize_or_zero();
    let mut t_max = f32::INFINITY;
    for i in 0..3 {
        let a = axis[i].abs();
        if a > f32::EPSILON {
            t_max = t_max.min(camera_box.half_dimensions[i].abs() / a);
        }
    }
    let length = 2.0 * t_max;
    (length.is_finite() && length > 0.0).then_some(length)
}
