use glam::{Mat4, UVec3, Vec3, Vec4};
use ndarray::{s, Array2, Array3, ArrayView2};
use rayon::prelude::*;

use crate::consts::GEOMETRY_EPSILON;
use crate::error::{OrthoviewError, Result};
use crate::orientation::{Interpolation, SliceAxis};

/// Spatial layout of a stack: voxel grid size plus its placement in LPS
/// world space.
#[derive(Clone, Debug, PartialEq)]
pub struct StackGeometry {
    /// Voxel counts along i, j, k.
    pub dimensions_ijk: UVec3,
    /// Voxel size along i, j, k (world units, mm).
    pub spacing: Vec3,
    /// World position of voxel (0, 0, 0).
    pub origin: Vec3,
    pub x_cosine: Vec3,
    pub y_cosine: Vec3,
    pub z_cosine: Vec3,
}

impl StackGeometry {
    /// Decompose an IJK-to-LPS affine into spacing, cosines and origin.
    pub fn from_affine(ijk_to_lps: Mat4, dimensions_ijk: UVec3) -> Result<Self> {
        if dimensions_ijk.min_element() == 0 {
            return Err(OrthoviewError::InvalidGeometry(format!(
                "empty dimensions {dimensions_ijk}"
            )));
        }

        let columns = [
            ijk_to_lps.x_axis.truncate(),
            ijk_to_lps.y_axis.truncate(),
            ijk_to_lps.z_axis.truncate(),
        ];
        let spacing = Vec3::new(
            columns[0].length(),
            columns[1].length(),
            columns[2].length(),
        );
        if spacing.min_element() <= f32::EPSILON || !spacing.is_finite() {
            return Err(OrthoviewError::InvalidGeometry(format!(
                "degenerate voxel spacing {spacing}"
            )));
        }

        Ok(Self {
            dimensions_ijk,
            spacing,
            origin: ijk_to_lps.w_axis.truncate(),
            x_cosine: columns[0] / spacing.x,
            y_cosine: columns[1] / spacing.y,
            z_cosine: columns[2] / spacing.z,
        })
    }

    pub fn ijk_to_lps(&self) -> Mat4 {
        Mat4::from_cols(
            (self.x_cosine * self.spacing.x).extend(0.0),
            (self.y_cosine * self.spacing.y).extend(0.0),
            (self.z_cosine * self.spacing.z).extend(0.0),
            Vec4::new(self.origin.x, self.origin.y, self.origin.z, 1.0),
        )
    }

    pub fn lps_to_ijk(&self) -> Mat4 {
        self.ijk_to_lps().inverse()
    }

    /// Two geometries can share a stack when they only differ along k.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.dimensions_ijk.x == other.dimensions_ijk.x
            && self.dimensions_ijk.y == other.dimensions_ijk.y
            && self.spacing.abs_diff_eq(other.spacing, GEOMETRY_EPSILON)
            && self.x_cosine.abs_diff_eq(other.x_cosine, GEOMETRY_EPSILON)
            && self.y_cosine.abs_diff_eq(other.y_cosine, GEOMETRY_EPSILON)
            && self.z_cosine.abs_diff_eq(other.z_cosine, GEOMETRY_EPSILON)
    }
}

/// 8-bit slice ready for display, with its placement in world space.
#[derive(Clone, Debug)]
pub struct SliceImage {
    /// Grey levels, shape = (height, width).
    pub pixels: Array2<u8>,
    /// World positions of the outer voxel edges, in texture order:
    /// (0,0), (1,0), (1,1), (0,1).
    pub corners: [Vec3; 4],
}

impl SliceImage {
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }
}

/// A 3D image volume: voxel data plus geometry.
#[derive(Clone, Debug)]
pub struct Stack {
    pub geometry: StackGeometry,
    /// Voxel values, shape = (k, j, i).
    pub data: Array3<f32>,
    pub min: f32,
    pub max: f32,
}

impl Stack {
    pub fn new(geometry: StackGeometry, data: Array3<f32>) -> Result<Self> {
        let dims = geometry.dimensions_ijk;
        let expected = (dims.z as usize, dims.y as usize, dims.x as usize);
        if data.dim() != expected {
            return Err(OrthoviewError::InvalidGeometry(format!(
                "voxel data shape {:?} does not match dimensions {dims}",
                data.dim()
            )));
        }

        let (min, max) = data
            .iter()
            .filter(|v| v.is_finite())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let (min, max) = if min > max { (0.0, 0.0) } else { (min, max) };

        Ok(Self {
            geometry,
            data,
            min,
            max,
        })
    }

    pub fn dimensions_ijk(&self) -> UVec3 {
        self.geometry.dimensions_ijk
    }

    pub fn x_cosine(&self) -> Vec3 {
        self.geometry.x_cosine
    }

    pub fn y_cosine(&self) -> Vec3 {
        self.geometry.y_cosine
    }

    pub fn z_cosine(&self) -> Vec3 {
        self.geometry.z_cosine
    }

    pub fn ijk_to_lps(&self) -> Mat4 {
        self.geometry.ijk_to_lps()
    }

    /// World-space extent `[x0, x1, y0, y1, z0, z1]` of the voxel grid corners.
    pub fn world_bounding_box(&self) -> [f32; 6] {
        let dims = self.dimensions_ijk().as_vec3();
        let ijk_to_lps = self.ijk_to_lps();
        let mut bbox = [
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::INFINITY,
            f32::NEG_INFINITY,
        ];

        for i in [0.0, dims.x] {
            for j in [0.0, dims.y] {
                for k in [0.0, dims.z] {
                    let world = ijk_to_lps.transform_point3(Vec3::new(i, j, k));
                    bbox[0] = bbox[0].min(world.x);
                    bbox[1] = bbox[1].max(world.x);
                    bbox[2] = bbox[2].min(world.y);
                    bbox[3] = bbox[3].max(world.y);
                    bbox[4] = bbox[4].min(world.z);
                    bbox[5] = bbox[5].max(world.z);
                }
            }
        }
        bbox
    }

    /// World position of the centre voxel.
    pub fn world_center(&self) -> Vec3 {
        let half = self.dimensions_ijk().as_vec3() / 2.0;
        self.ijk_to_lps()
            .transform_point3(half - Vec3::splat(0.5))
    }

    /// Number of slices available across the given axis.
    pub fn axis_len(&self, axis: SliceAxis) -> usize {
        let dims = self.dimensions_ijk();
        match axis {
            SliceAxis::K => dims.z as usize,
            SliceAxis::I => dims.x as usize,
            SliceAxis::J => dims.y as usize,
        }
    }

    fn slice_view(&self, axis: SliceAxis, index: usize) -> ArrayView2<'_, f32> {
        match axis {
            // (j, i): rows follow j, columns follow i
            SliceAxis::K => self.data.slice(s![index, .., ..]),
            // (k, j)
            SliceAxis::I => self.data.slice(s![.., .., index]),
            // (k, i)
            SliceAxis::J => self.data.slice(s![.., index, ..]),
        }
    }

    fn slice_corners(&self, axis: SliceAxis, index: usize) -> [Vec3; 4] {
        let d = self.dimensions_ijk().as_vec3() - Vec3::splat(0.5);
        let at = index as f32;
        let ijk = match axis {
            SliceAxis::K => [
                Vec3::new(-0.5, -0.5, at),
                Vec3::new(d.x, -0.5, at),
                Vec3::new(d.x, d.y, at),
                Vec3::new(-0.5, d.y, at),
            ],
            SliceAxis::I => [
                Vec3::new(at, -0.5, -0.5),
                Vec3::new(at, d.y, -0.5),
                Vec3::new(at, d.y, d.z),
                Vec3::new(at, -0.5, d.z),
            ],
            SliceAxis::J => [
                Vec3::new(-0.5, at, -0.5),
                Vec3::new(d.x, at, -0.5),
                Vec3::new(d.x, at, d.z),
                Vec3::new(-0.5, at, d.z),
            ],
        };
        let ijk_to_lps = self.ijk_to_lps();
        ijk.map(|p| ijk_to_lps.transform_point3(p))
    }

    #[inline]
    fn normalize_to_u8(&self, value: f32) -> u8 {
        let range = self.max - self.min;
        if range <= f32::EPSILON || !value.is_finite() {
            return 0;
        }
        (((value - self.min) / range).clamp(0.0, 1.0) * 255.0) as u8
    }

    /// Extract one slice as 8-bit grey levels, or `None` when `index` is past
    /// the end of the axis.
    pub fn slice(&self, axis: SliceAxis, index: usize) -> Option<SliceImage> {
        if index >= self.axis_len(axis) {
            return None;
        }
        let view = self.slice_view(axis, index);
        let pixels = view.map(|&v| self.normalize_to_u8(v));
        Some(SliceImage {
            pixels,
            corners: self.slice_corners(axis, index),
        })
    }
}

/// Resample a slice to `width` x `height` with pixel-centre alignment.
pub fn resample(
    slice: &SliceImage,
    width: usize,
    height: usize,
    interpolation: Interpolation,
) -> Array2<u8> {
    let src = slice.pixels.mapv(f32::from);
    let (src_h, src_w) = src.dim();
    if width == 0 || height == 0 || src_h == 0 || src_w == 0 {
        return Array2::zeros((height, width));
    }

    let rows: Vec<Vec<u8>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| {
                    let norm_x = (x as f32 + 0.5) / width as f32;
                    let norm_y = (y as f32 + 0.5) / height as f32;
                    let src_x = (norm_x * src_w as f32 - 0.5).clamp(0.0, (src_w - 1) as f32);
                    let src_y = (norm_y * src_h as f32 - 0.5).clamp(0.0, (src_h - 1) as f32);
                    match interpolation {
                        Interpolation::Nearest => {
                            src[[src_y.round() as usize, src_x.round() as usize]] as u8
                        }
                        Interpolation::Linear => {
                            bilinear_interpolate(&src.view(), src_y, src_x).round() as u8
                        }
                    }
                })
                .collect()
        })
        .collect();

    let flat: Vec<u8> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((height, width), flat).unwrap_or_else(|_| Array2::zeros((height, width)))
}

#[inline]
fn bilinear_interpolate(slice: &ArrayView2<f32>, y: f32, x: f32) -> f32 {
    let (height, width) = slice.dim();

    let y0 = y.floor() as usize;
    let x0 = x.floor() as usize;
    let y1 = (y0 + 1).min(height - 1);
    let x1 = (x0 + 1).min(width - 1);

    let dy = y - y0 as f32;
    let dx = x - x0 as f32;

    let v0 = slice[[y0, x0]].mul_add(1.0 - dx, slice[[y0, x1]] * dx);
    let v1 = slice[[y1, x0]].mul_add(1.0 - dx, slice[[y1, x1]] * dx);

    v0.mul_add(1.0 - dy, v1 * dy)
}
