use glam::{UVec3, Vec3};
use ndarray::{Array2, Array3, Axis};
use tracing::debug;

use crate::consts::GEOMETRY_EPSILON;
use crate::error::{OrthoviewError, Result};

use super::stack::{Stack, StackGeometry};

/// One decoded file, before merging.
#[derive(Clone, Debug)]
pub struct VolumeFile {
    /// URL or path the bytes came from.
    pub source_name: String,
    /// Files sharing a series uid are merged into one series.
    pub series_uid: String,
    pub description: String,
    pub geometry: StackGeometry,
    /// Voxel values, shape = (k, j, i).
    pub data: Array3<f32>,
}

/// A coherent imaging study assembled from one or more files.
#[derive(Clone, Debug)]
pub struct Series {
    pub uid: String,
    pub stacks: Vec<Stack>,
}

/// A single k-plane with its world position.
struct Frame {
    position: Vec3,
    pixels: Array2<f32>,
}

/// Frames gathered for one stack while merging.
struct StackBuilder {
    geometry: StackGeometry,
    frames: Vec<Frame>,
}

impl StackBuilder {
    fn push_file(&mut self, file: VolumeFile) {
        let ijk_to_lps = file.geometry.ijk_to_lps();
        for (k, plane) in file.data.axis_iter(Axis(0)).enumerate() {
            let position = ijk_to_lps.transform_point3(Vec3::new(0.0, 0.0, k as f32));
            self.frames.push(Frame {
                position,
                pixels: plane.to_owned(),
            });
        }
    }

    fn build(mut self) -> Result<Stack> {
        let normal = self.geometry.z_cosine;
        self.frames.sort_by(|a, b| {
            a.position
                .dot(normal)
                .total_cmp(&b.position.dot(normal))
        });
        // Same file loaded twice, or overlapping fragments.
        self.frames
            .dedup_by(|b, a| a.position.abs_diff_eq(b.position, GEOMETRY_EPSILON));

        let Some(first) = self.frames.first() else {
            return Err(OrthoviewError::NoStack);
        };
        let (rows, cols) = first.pixels.dim();
        let depth = self.frames.len();

        let mut data = Array3::<f32>::zeros((depth, rows, cols));
        for (k, frame) in self.frames.iter().enumerate() {
            data.index_axis_mut(Axis(0), k).assign(&frame.pixels);
        }

        let mut geometry = self.geometry.clone();
        geometry.origin = first.position;
        geometry.dimensions_ijk = UVec3::new(cols as u32, rows as u32, depth as u32);
        if let Some(step) = self.slice_step() {
            geometry.spacing.z = step;
        }
        Stack::new(geometry, data)
    }

    /// Distance between neighbouring frames along the normal: the median
    /// gap, or None for a single frame.
    fn slice_step(&self) -> Option<f32> {
        let normal = self.geometry.z_cosine;
        let mut gaps: Vec<f32> = self
            .frames
            .windows(2)
            .map(|pair| (pair[1].position - pair[0].position).dot(normal))
            .collect();
        if gaps.is_empty() {
            return None;
        }
        gaps.sort_by(f32::total_cmp);
        let median = gaps[gaps.len() / 2];
        let (min, max) = (gaps[0], gaps[gaps.len() - 1]);
        if max - min > GEOMETRY_EPSILON {
            debug!(min, max, median, "uneven slice gaps, using the median");
        }
        (median > GEOMETRY_EPSILON).then_some(median)
    }
}

/// Merge decoded files into series, then into stacks of compatible geometry.
///
/// Series and stacks keep the order in which they were first seen. Within a
/// stack, frames are ordered along the stack's z cosine.
pub fn merge_series(files: Vec<VolumeFile>) -> Result<Vec<Series>> {
    let mut grouped: Vec<(String, Vec<StackBuilder>)> = Vec::new();

    for file in files {
        let group = match grouped.iter().position(|(uid, _)| *uid == file.series_uid) {
            Some(idx) => &mut grouped[idx].1,
            None => {
                grouped.push((file.series_uid.clone(), Vec::new()));
                let last = grouped.len() - 1;
                &mut grouped[last].1
            }
        };

        match group
            .iter_mut()
            .find(|builder| builder.geometry.is_compatible(&file.geometry))
        {
            Some(builder) => builder.push_file(file),
            None => {
                let mut builder = StackBuilder {
                    geometry: file.geometry.clone(),
                    frames: Vec::new(),
                };
                builder.push_file(file);
                group.push(builder);
            }
        }
    }

    grouped
        .into_iter()
        .map(|(uid, builders)| {
            let stacks = builders
                .into_iter()
                .map(StackBuilder::build)
                .collect::<Result<Vec<_>>>()?;
            debug!(series = %uid, stacks = stacks.len(), "merged series");
            Ok(Series { uid, stacks })
        })
        .collect()
}
