use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical medical viewing plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Axial,
    Coronal,
    Sagittal,
}

impl Orientation {
    pub const ALL: &[Self] = &[Self::Axial, Self::Coronal, Self::Sagittal];
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axial => write!(f, "axial"),
            Self::Coronal => write!(f, "coronal"),
            Self::Sagittal => write!(f, "sagittal"),
        }
    }
}

/// Display handedness: radiological (patient left on screen right) or
/// neurological (patient left on screen left).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    #[default]
    Radio,
    Neuro,
}

impl Convention {
    pub const ALL: &[Self] = &[Self::Radio, Self::Neuro];
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radio => write!(f, "radio"),
            Self::Neuro => write!(f, "neuro"),
        }
    }
}

/// Stack axis a slice is taken across, in voxel (IJK) space.
///
/// The numbering follows the helper's orientation index: 0 slices along k,
/// 1 along i, 2 along j.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SliceAxis {
    #[default]
    K,
    I,
    J,
}

impl SliceAxis {
    pub fn index(self) -> usize {
        match self {
            Self::K => 0,
            Self::I => 1,
            Self::J => 2,
        }
    }

    /// Slice axis perpendicular to the given stack direction (0 = x cosine,
    /// 1 = y cosine, 2 = z cosine).
    pub fn across_direction(direction_index: usize) -> Self {
        match direction_index {
            0 => Self::I,
            1 => Self::J,
            _ => Self::K,
        }
    }
}

impl fmt::Display for SliceAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Sampling used when drawing the current slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    #[default]
    Nearest,
    Linear,
}

impl Interpolation {
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Nearest => 0,
            Self::Linear => 1,
        }
    }
}

impl TryFrom<u8> for Interpolation {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Nearest),
            1 => Ok(Self::Linear),
            other => Err(other),
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Linear => write!(f, "Linear"),
        }
    }
}
