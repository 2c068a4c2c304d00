pub mod fetch;
pub mod image_io;
pub mod nifti;
