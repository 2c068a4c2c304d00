mod common;

use glam::Vec3;

use orthoview_core::error::OrthoviewError;
use orthoview_core::io::nifti::decode_nifti;

use common::*;

#[test]
fn test_decode_plain_volume() {
    let bytes = simple_nifti(4, 3, 2);
    let file = decode_nifti(&bytes, "plain.nii").unwrap();

    assert_eq!(file.data.dim(), (2, 3, 4));
    assert_eq!(file.data[[1, 2, 3]], voxel_value(3, 2, 1));
    assert_eq!(file.data[[0, 1, 2]], voxel_value(2, 1, 0));
    assert_eq!(file.series_uid, "plain.nii");
    assert_eq!(file.description, "synthetic test volume");
}

#[test]
fn test_decode_gzip_volume() {
    let bytes = gzip(&simple_nifti(4, 3, 2));
    let file = decode_nifti(&bytes, "brain.nii.gz").unwrap();
    assert_eq!(file.data.dim(), (2, 3, 4));
    assert_eq!(file.data[[1, 0, 1]], voxel_value(1, 0, 1));
}

#[test]
fn test_pixdim_geometry_converted_to_lps() {
    let data = file_order_data(2, 2, 2);
    let bytes = build_nifti_bytes(&[2, 2, 2], [0.5, 2.0, 3.0], None, &data);
    let file = decode_nifti(&bytes, "scaled.nii").unwrap();

    let g = &file.geometry;
    assert!(g.spacing.abs_diff_eq(Vec3::new(0.5, 2.0, 3.0), 1e-6));
    // RAS +x is LPS -x
    assert!(g.x_cosine.abs_diff_eq(Vec3::NEG_X, 1e-6));
    assert!(g.y_cosine.abs_diff_eq(Vec3::NEG_Y, 1e-6));
    assert!(g.z_cosine.abs_diff_eq(Vec3::Z, 1e-6));
}

#[test]
fn test_sform_preferred() {
    let data = file_order_data(2, 2, 2);
    let srow = [
        [2.0, 0.0, 0.0, -10.0],
        [0.0, 2.0, 0.0, 20.0],
        [0.0, 0.0, 4.0, 5.0],
    ];
    let bytes = build_nifti_bytes(&[2, 2, 2], [1.0, 1.0, 1.0], Some(srow), &data);
    let file = decode_nifti(&bytes, "sform.nii").unwrap();

    let g = &file.geometry;
    assert!(g.spacing.abs_diff_eq(Vec3::new(2.0, 2.0, 4.0), 1e-6));
    assert!(g.origin.abs_diff_eq(Vec3::new(10.0, -20.0, 5.0), 1e-6));
}

#[test]
fn test_4d_keeps_first_time_point() {
    let (nx, ny, nz, nt) = (3usize, 2usize, 2usize, 3usize);
    let mut data = Vec::new();
    for t in 0..nt {
        for v in file_order_data(nx, ny, nz) {
            data.push(v + 1000.0 * t as f32);
        }
    }
    let bytes = build_nifti_bytes(&[3, 2, 2, 3], [1.0, 1.0, 1.0], None, &data);
    let file = decode_nifti(&bytes, "4d.nii").unwrap();

    assert_eq!(file.data.dim(), (nz, ny, nx));
    assert_eq!(file.data[[1, 1, 2]], voxel_value(2, 1, 1));
    assert!(file.data.iter().all(|&v| v < 1000.0));
}

#[test]
fn test_truncated_file_rejected() {
    let result = decode_nifti(&[0u8; 100], "short.nii");
    assert!(matches!(result, Err(OrthoviewError::InvalidNifti { .. })));
}

#[test]
fn test_garbage_gzip_rejected() {
    let result = decode_nifti(&[0x1f, 0x8b, 0x00, 0x01, 0x02], "broken.nii.gz");
    assert!(result.is_err());
}
