use crate::camera::OrthographicCamera;
use crate::orientation::{Convention, Interpolation, Orientation};
use crate::volume::StackHelper;

/// A change made through the configuration panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelEvent {
    /// New checkbox value; every change toggles the row inversion.
    InvertRows(bool),
    InvertColumns(bool),
    /// Momentary button: one rotation step.
    RotateRight,
    Angle(f32),
    Orientation(Orientation),
    Convention(Convention),
    Index(i64),
    Interpolation(i64),
}

/// Widget values of the "Camera" folder.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraControls {
    pub invert_rows: bool,
    pub invert_columns: bool,
    pub rotate_right: bool,
    /// 0 to 360, step 1
    pub angle: f32,
    pub orientation: Orientation,
    pub convention: Convention,
}

/// Widget values of the "Stack" folder.
#[derive(Clone, Debug, PartialEq)]
pub struct StackControls {
    pub index: usize,
    /// Last slice of the k axis at load time.
    pub index_max: usize,
    /// 0 (nearest) or 1 (linear)
    pub interpolation: u8,
}

/// Model of the live configuration panel.
///
/// Widgets enforce their own ranges; values reported back through
/// [`ConfigPanel::clamp`] are always inside them.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigPanel {
    pub camera: CameraControls,
    pub stack: StackControls,
}

impl ConfigPanel {
    pub const ANGLE_MAX: f32 = 360.0;

    pub fn build(camera: &OrthographicCamera, helper: &StackHelper) -> Self {
        let depth = helper.stack().dimensions_ijk().z as usize;
        Self {
            camera: CameraControls {
                invert_rows: false,
                invert_columns: false,
                rotate_right: false,
                angle: camera.angle(),
                orientation: camera.orientation(),
                convention: camera.convention(),
            },
            stack: StackControls {
                index: helper.index(),
                index_max: depth.saturating_sub(1),
                interpolation: helper.interpolation().as_u8(),
            },
        }
    }

    /// Refresh the bound numeric widgets from live state.
    pub fn listen(&mut self, camera: &OrthographicCamera, helper: &StackHelper) {
        self.camera.angle = camera.angle();
        self.camera.orientation = camera.orientation();
        self.camera.convention = camera.convention();
        self.stack.index = helper.index();
        self.stack.interpolation = helper.interpolation().as_u8();
    }

    /// Apply the widget's range and step to an incoming value.
    pub fn clamp(&self, event: PanelEvent) -> PanelEvent {
        match event {
            PanelEvent::Angle(a) => {
                let a = if a.is_finite() { a.round() } else { 0.0 };
                PanelEvent::Angle(a.clamp(0.0, Self::ANGLE_MAX))
            }
            PanelEvent::Index(i) => PanelEvent::Index(i.clamp(0, self.stack.index_max as i64)),
            PanelEvent::Interpolation(v) => PanelEvent::Interpolation(v.clamp(0, 1)),
            other => other,
        }
    }

    /// Record a (clamped) value in the widget state.
    pub fn record(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::InvertRows(v) => self.camera.invert_rows = v,
            PanelEvent::InvertColumns(v) => self.camera.invert_columns = v,
            PanelEvent::RotateRight => self.camera.rotate_right = false,
            PanelEvent::Angle(a) => self.camera.angle = a,
            PanelEvent::Orientation(o) => self.camera.orientation = o,
            PanelEvent::Convention(c) => self.camera.convention = c,
            PanelEvent::Index(i) => self.stack.index = i.max(0) as usize,
            PanelEvent::Interpolation(v) => self.stack.interpolation = v.clamp(0, 1) as u8,
        }
    }

    /// Untick both invert checkboxes after the camera basis was rebuilt.
    pub fn clear_inverts(&mut self) {
        self.camera.invert_rows = false;
        self.camera.invert_columns = false;
    }
}

/// Interpolation selected by a clamped panel value.
pub fn interpolation_from_panel(value: i64) -> Interpolation {
    Interpolation::try_from(value.clamp(0, 1) as u8).unwrap_or_default()
}
