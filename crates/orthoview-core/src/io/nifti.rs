use std::io::Cursor;

use flate2::read::GzDecoder;
use glam::{Mat3, Mat4, Quat, UVec3, Vec3, Vec4};
use ndarray::Array3;
use ::nifti::{InMemNiftiObject, IntoNdArray, NiftiHeader, NiftiObject};
use tracing::debug;

use crate::consts::{GZIP_MAGIC, NIFTI1_HEADER_SIZE};
use crate::error::{OrthoviewError, Result};
use crate::volume::{StackGeometry, VolumeFile};

/// Check for the gzip magic bytes.
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() >= GZIP_MAGIC.len() && bytes[..GZIP_MAGIC.len()] == GZIP_MAGIC
}

/// Decode a single-file NIfTI-1 volume (`.nii` or `.nii.gz`).
///
/// 4D volumes keep only their first time point. Geometry is converted from
/// the file's RAS convention to LPS world space.
pub fn decode_nifti(bytes: &[u8], source_name: &str) -> Result<VolumeFile> {
    let invalid = |reason: String| OrthoviewError::InvalidNifti {
        source_name: source_name.to_string(),
        reason,
    };

    let object = if is_gzip(bytes) {
        InMemNiftiObject::from_reader(GzDecoder::new(Cursor::new(bytes)))
    } else {
        if bytes.len() < NIFTI1_HEADER_SIZE {
            return Err(invalid(format!(
                "file too small ({} bytes, need at least {NIFTI1_HEADER_SIZE})",
                bytes.len()
            )));
        }
        InMemNiftiObject::from_reader(Cursor::new(bytes))
    }
    .map_err(|e| invalid(e.to_string()))?;

    let header = object.header().clone();
    let ndim = header.dim[0] as usize;
    if !(3..=4).contains(&ndim) {
        return Err(OrthoviewError::UnsupportedDimensionality(ndim));
    }

    let dims = UVec3::new(
        u32::from(header.dim[1]),
        u32::from(header.dim[2]),
        u32::from(header.dim[3]),
    );
    let time_points = if ndim == 4 {
        usize::from(header.dim[4]).max(1)
    } else {
        1
    };

    let geometry = StackGeometry::from_affine(ras_to_lps(header_affine(&header)), dims)?;

    let array = object.into_volume().into_ndarray::<f32>()?;
    let (nx, ny, nz) = (dims.x as usize, dims.y as usize, dims.z as usize);
    let voxel_count = nx * ny * nz;
    if array.len() != voxel_count * time_points {
        return Err(invalid(format!(
            "expected {} voxels, decoded {}",
            voxel_count * time_points,
            array.len()
        )));
    }

    // Logical order has the last axis (time) varying fastest.
    let values: Vec<f32> = array.iter().step_by(time_points).copied().collect();
    let xyz = Array3::from_shape_vec((nx, ny, nz), values)
        .map_err(|e| invalid(e.to_string()))?;
    let data = xyz.reversed_axes().as_standard_layout().into_owned();

    debug!(
        source = source_name,
        dims = %dims,
        spacing = %geometry.spacing,
        "decoded NIfTI volume"
    );

    Ok(VolumeFile {
        source_name: source_name.to_string(),
        series_uid: source_name.to_string(),
        description: description(&header),
        geometry,
        data,
    })
}

fn description(header: &NiftiHeader) -> String {
    let end = header
        .descrip
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(header.descrip.len());
    String::from_utf8_lossy(&header.descrip[..end]).trim().to_string()
}

/// Voxel-to-RAS affine: sform if present, then qform, then plain pixdim scaling.
fn header_affine(header: &NiftiHeader) -> Mat4 {
    if header.sform_code > 0 {
        let (x, y, z) = (header.srow_x, header.srow_y, header.srow_z);
        return Mat4::from_cols(
            Vec4::new(x[0], y[0], z[0], 0.0),
            Vec4::new(x[1], y[1], z[1], 0.0),
            Vec4::new(x[2], y[2], z[2], 0.0),
            Vec4::new(x[3], y[3], z[3], 1.0),
        );
    }

    let spacing = Vec3::new(
        voxel_size(header.pixdim[1]),
        voxel_size(header.pixdim[2]),
        voxel_size(header.pixdim[3]),
    );

    if header.qform_code > 0 {
        let (b, c, d) = (header.quatern_b, header.quatern_c, header.quatern_d);
        let a = (1.0 - (b * b + c * c + d * d)).max(0.0).sqrt();
        let rotation = Mat3::from_quat(Quat::from_xyzw(b, c, d, a).normalize());
        let qfac = if header.pixdim[0] < 0.0 { -1.0 } else { 1.0 };
        let scale = Vec3::new(spacing.x, spacing.y, spacing.z * qfac);
        return Mat4::from_cols(
            (rotation.x_axis * scale.x).extend(0.0),
            (rotation.y_axis * scale.y).extend(0.0),
            (rotation.z_axis * scale.z).extend(0.0),
            Vec4::new(header.quatern_x, header.quatern_y, header.quatern_z, 1.0),
        );
    }

    Mat4::from_scale(spacing)
}

fn voxel_size(pixdim: f32) -> f32 {
    let size = pixdim.abs();
    if size > f32::EPSILON && size.is_finite() {
        size
    } else {
        1.0
    }
}

fn ras_to_lps(affine: Mat4) -> Mat4 {
    Mat4::from_scale(Vec3::new(-1.0, -1.0, 1.0)) * affine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gzip_magic_detected() {
        assert!(is_gzip(&[0x1f, 0x8b, 0x08]));
        assert!(!is_gzip(&[0x5c, 0x01, 0x00, 0x00]));
        assert!(!is_gzip(&[0x1f]));
    }

    #[test]
    fn ras_to_lps_flips_first_two_axes() {
        let lps = ras_to_lps(Mat4::IDENTITY);
        let p = lps.transform_point3(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Vec3::new(-1.0, -2.0, 3.0));
    }

    #[test]
    fn zero_pixdim_falls_back_to_unit_spacing() {
        assert_eq!(voxel_size(0.0), 1.0);
        assert_eq!(voxel_size(-2.5), 2.5);
    }
}
