/// Volume shown when no source is given.
pub const DEFAULT_VOLUME_URL: &str =
    "https://cdn.rawgit.com/FNNDSC/data/master/nifti/adi_brain/adi_brain.nii.gz";

/// Orthographic near plane.
pub const CAMERA_NEAR: f32 = 0.1;

/// Orthographic far plane.
pub const CAMERA_FAR: f32 = 10_000.0;

/// Padding (world units) added to each full-axis extent of the stack when
/// building the camera box.
pub const CAMERA_BOX_PADDING: f32 = 10.0;

/// Default multiplier applied to the zoom computed by `fit_box`.
pub const DEFAULT_FIT_FACTOR: f32 = 1.5;

/// Step, in degrees, of a single "rotate right".
pub const ROTATION_STEP_DEGREES: f32 = 90.0;

/// Surface clear color (0xRRGGBB).
pub const CLEAR_COLOR: u32 = 0x35_35_35;

/// Stack helper border color (0xRRGGBB).
pub const BORDER_COLOR: u32 = 0xff_98_00;

/// Stack helper bounding box color (0xRRGGBB).
pub const BBOX_COLOR: u32 = 0x61_f2_f3;

/// Scroll units per 2x zoom change in the ortho controls.
pub const ZOOM_SCROLL_SCALE: f32 = 0.005;

/// Share of pending pointer input kept per update when the controls are not static.
pub const CONTROLS_DAMPING: f32 = 0.2;

/// Pending input below this total is dropped.
pub const PENDING_INPUT_EPSILON: f32 = 1e-3;

/// Zoom bounds enforced by the ortho controls.
pub const MIN_ZOOM: f32 = 0.01;
pub const MAX_ZOOM: f32 = 100.0;

/// Tolerance used when comparing direction cosines and spacings while
/// merging files into stacks.
pub const GEOMETRY_EPSILON: f32 = 1e-3;

/// Gzip magic bytes.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Size of a NIfTI-1 header in bytes.
pub const NIFTI1_HEADER_SIZE: usize = 348;
