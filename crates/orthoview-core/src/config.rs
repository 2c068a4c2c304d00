use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BBOX_COLOR, BORDER_COLOR, CAMERA_BOX_PADDING, CAMERA_FAR, CAMERA_NEAR, CLEAR_COLOR,
    CONTROLS_DAMPING, DEFAULT_FIT_FACTOR, DEFAULT_VOLUME_URL,
};
use crate::error::Result;
use crate::orientation::{Convention, Orientation};

/// Viewer settings, loadable from TOML. Missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// URL or path of the volume loaded at startup.
    pub source: String,
    pub window: WindowConfig,
    pub antialias: bool,
    /// 0xRRGGBB
    pub clear_color: u32,
    pub clear_alpha: f32,
    pub stack: StackDisplayConfig,
    pub camera: CameraConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_VOLUME_URL.to_string(),
            window: WindowConfig::default(),
            antialias: true,
            clear_color: CLEAR_COLOR,
            clear_alpha: 1.0,
            stack: StackDisplayConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackDisplayConfig {
    pub border_color: u32,
    pub border_visible: bool,
    pub bbox_color: u32,
    pub bbox_visible: bool,
}

impl Default for StackDisplayConfig {
    fn default() -> Self {
        Self {
            border_color: BORDER_COLOR,
            border_visible: true,
            bbox_color: BBOX_COLOR,
            bbox_visible: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub near: f32,
    pub far: f32,
    /// Added to each full-axis world extent to get the camera box half size.
    pub box_padding: f32,
    pub fit_factor: f32,
    pub orientation: Orientation,
    pub convention: Convention,
    /// Apply pan/zoom input at once; false gives damped inertia.
    pub static_moving: bool,
    pub damping: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            box_padding: CAMERA_BOX_PADDING,
            fit_factor: DEFAULT_FIT_FACTOR,
            orientation: Orientation::default(),
            convention: Convention::default(),
            static_moving: true,
            damping: CONTROLS_DAMPING,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
