use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrthoviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch {source_name}: {reason}")]
    Fetch { source_name: String, reason: String },

    #[error("Invalid NIfTI file {source_name}: {reason}")]
    InvalidNifti { source_name: String, reason: String },

    #[error("NIfTI error: {0}")]
    Nifti(#[from] nifti::error::NiftiError),

    #[error("Unsupported volume dimensionality: {0}D (need 3 or 4)")]
    UnsupportedDimensionality(usize),

    #[error("Invalid stack geometry: {0}")]
    InvalidGeometry(String),

    #[error("No stack found in loaded series")]
    NoStack,

    #[error("No volume sources given")]
    NoSources,

    #[error("Slice index {index} out of range (max: {max})")]
    SliceIndexOutOfRange { index: usize, max: usize },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, OrthoviewError>;
