#![allow(dead_code)]

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use glam::{Mat4, UVec3, Vec3};
use ndarray::Array3;

use orthoview_core::pipeline::LoadedVolume;
use orthoview_core::volume::{merge_series, Stack, StackGeometry, VolumeFile};

/// Size of the NIfTI-1 header plus the 4-byte extension flag.
pub const NIFTI_DATA_OFFSET: usize = 352;

/// Voxel value used by the synthetic volumes: encodes its own position.
pub fn voxel_value(i: usize, j: usize, k: usize) -> f32 {
    (i + 10 * j + 100 * k) as f32
}

/// Build a single-file NIfTI-1 (`n+1`) volume with float32 voxels.
///
/// `dims` may have 3 or 4 entries. Voxels are written with i varying
/// fastest. `srow` (RAS, three rows of four) selects an sform; otherwise
/// only pixdim scaling is present.
pub fn build_nifti_bytes(
    dims: &[u16],
    pixdim: [f32; 3],
    srow: Option<[[f32; 4]; 3]>,
    data: &[f32],
) -> Vec<u8> {
    let mut buf = vec![0u8; NIFTI_DATA_OFFSET];
    let put_i16 = |buf: &mut Vec<u8>, at: usize, v: i16| {
        buf[at..at + 2].copy_from_slice(&v.to_le_bytes());
    };
    let put_f32 = |buf: &mut Vec<u8>, at: usize, v: f32| {
        buf[at..at + 4].copy_from_slice(&v.to_le_bytes());
    };

    // sizeof_hdr
    buf[0..4].copy_from_slice(&348i32.to_le_bytes());
    // dim[0..8]
    put_i16(&mut buf, 40, dims.len() as i16);
    for (n, &d) in dims.iter().enumerate() {
        put_i16(&mut buf, 42 + 2 * n, d as i16);
    }
    for n in dims.len()..7 {
        put_i16(&mut buf, 42 + 2 * n, 1);
    }
    // datatype = FLOAT32, bitpix = 32
    put_i16(&mut buf, 70, 16);
    put_i16(&mut buf, 72, 32);
    // pixdim[0] = qfac, then voxel sizes
    put_f32(&mut buf, 76, 1.0);
    for (n, &p) in pixdim.iter().enumerate() {
        put_f32(&mut buf, 80 + 4 * n, p);
    }
    // vox_offset, scl_slope
    put_f32(&mut buf, 108, NIFTI_DATA_OFFSET as f32);
    put_f32(&mut buf, 112, 1.0);
    // descrip
    let descrip = b"synthetic test volume";
    buf[148..148 + descrip.len()].copy_from_slice(descrip);

    if let Some(rows) = srow {
        // sform_code = scanner
        put_i16(&mut buf, 254, 1);
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                put_f32(&mut buf, 280 + 16 * r + 4 * c, v);
            }
        }
    }

    buf[344..348].copy_from_slice(b"n+1\0");
    // bytes 348..352: no extensions

    for v in data {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    buf
}

/// Voxels for an `nx` x `ny` x `nz` volume in file order (i fastest).
pub fn file_order_data(nx: usize, ny: usize, nz: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(nx * ny * nz);
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                data.push(voxel_value(i, j, k));
            }
        }
    }
    data
}

/// A 3D volume with 1 mm voxels and no orientation info.
pub fn simple_nifti(nx: u16, ny: u16, nz: u16) -> Vec<u8> {
    let data = file_order_data(nx as usize, ny as usize, nz as usize);
    build_nifti_bytes(&[nx, ny, nz], [1.0, 1.0, 1.0], None, &data)
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

/// Geometry with the given spacing, axis-aligned, origin at zero.
pub fn axis_aligned_geometry(dims: [u32; 3], spacing: [f32; 3]) -> StackGeometry {
    StackGeometry::from_affine(
        Mat4::from_scale(Vec3::from(spacing)),
        UVec3::from(dims),
    )
    .unwrap()
}

/// Stack of shape (k, j, i) filled with `voxel_value`.
pub fn synthetic_stack(dims: [u32; 3], spacing: [f32; 3]) -> Stack {
    let geometry = axis_aligned_geometry(dims, spacing);
    let data = Array3::from_shape_fn(
        (dims[2] as usize, dims[1] as usize, dims[0] as usize),
        |(k, j, i)| voxel_value(i, j, k),
    );
    Stack::new(geometry, data).unwrap()
}

pub fn synthetic_file(uid: &str, dims: [u32; 3], spacing: [f32; 3]) -> VolumeFile {
    let stack = synthetic_stack(dims, spacing);
    VolumeFile {
        source_name: uid.to_string(),
        series_uid: uid.to_string(),
        description: String::new(),
        geometry: stack.geometry,
        data: stack.data,
    }
}

pub fn loaded_volume(dims: [u32; 3], spacing: [f32; 3]) -> LoadedVolume {
    let series = merge_series(vec![synthetic_file("synthetic", dims, spacing)]).unwrap();
    LoadedVolume::from_series(series).unwrap()
}
