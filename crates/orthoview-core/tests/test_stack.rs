mod common;

use approx::assert_relative_eq;
use glam::Vec3;

use orthoview_core::orientation::{Interpolation, SliceAxis};
use orthoview_core::volume::{resample, StackHelper};

use common::*;

#[test]
fn test_world_bounding_box_covers_voxel_grid() {
    let stack = synthetic_stack([4, 3, 2], [1.0, 2.0, 3.0]);
    let bbox = stack.world_bounding_box();
    assert_eq!(bbox, [0.0, 4.0, 0.0, 6.0, 0.0, 6.0]);
}

#[test]
fn test_world_center() {
    let stack = synthetic_stack([4, 3, 2], [1.0, 1.0, 1.0]);
    assert!(stack.world_center().abs_diff_eq(Vec3::new(1.5, 1.0, 0.5), 1e-6));
}

#[test]
fn test_ijk_lps_round_trip() {
    let stack = synthetic_stack([5, 6, 7], [0.5, 1.5, 2.0]);
    let p = Vec3::new(1.0, 2.0, 3.0);
    let world = stack.ijk_to_lps().transform_point3(p);
    let back = stack.geometry.lps_to_ijk().transform_point3(world);
    assert!(back.abs_diff_eq(p, 1e-4));
}

#[test]
fn test_intensity_range() {
    let stack = synthetic_stack([4, 3, 2], [1.0, 1.0, 1.0]);
    assert_relative_eq!(stack.min, 0.0);
    assert_relative_eq!(stack.max, voxel_value(3, 2, 1));
}

#[test]
fn test_slice_shapes_per_axis() {
    let stack = synthetic_stack([4, 3, 2], [1.0, 1.0, 1.0]);

    let k = stack.slice(SliceAxis::K, 1).unwrap();
    assert_eq!((k.height(), k.width()), (3, 4));
    let i = stack.slice(SliceAxis::I, 0).unwrap();
    assert_eq!((i.height(), i.width()), (2, 3));
    let j = stack.slice(SliceAxis::J, 2).unwrap();
    assert_eq!((j.height(), j.width()), (2, 4));

    assert!(stack.slice(SliceAxis::K, 2).is_none());
    assert!(stack.slice(SliceAxis::I, 4).is_none());
}

#[test]
fn test_slice_normalised_to_u8() {
    let stack = synthetic_stack([4, 3, 2], [1.0, 1.0, 1.0]);
    let top = stack.slice(SliceAxis::K, 1).unwrap();
    assert_eq!(top.pixels[[2, 3]], 255);
    let bottom = stack.slice(SliceAxis::K, 0).unwrap();
    assert_eq!(bottom.pixels[[0, 0]], 0);
}

#[test]
fn test_slice_corners_on_voxel_edges() {
    let stack = synthetic_stack([4, 3, 2], [1.0, 1.0, 1.0]);
    let slice = stack.slice(SliceAxis::K, 1).unwrap();
    assert!(slice.corners[0].abs_diff_eq(Vec3::new(-0.5, -0.5, 1.0), 1e-6));
    assert!(slice.corners[2].abs_diff_eq(Vec3::new(3.5, 2.5, 1.0), 1e-6));
}

#[test]
fn test_resample_constant_slice() {
    let stack = synthetic_stack([4, 3, 2], [1.0, 1.0, 1.0]);
    let mut slice = stack.slice(SliceAxis::K, 0).unwrap();
    slice.pixels.fill(77);
    let out = resample(&slice, 9, 5, Interpolation::Linear);
    assert_eq!(out.dim(), (5, 9));
    assert!(out.iter().all(|&v| v == 77));
}

#[test]
fn test_helper_starts_in_the_middle() {
    let helper = StackHelper::new(synthetic_stack([4, 4, 9], [1.0, 1.0, 1.0]));
    assert_eq!(helper.orientation(), SliceAxis::K);
    assert_eq!(helper.index(), 4);
    assert_eq!(helper.interpolation(), Interpolation::Nearest);
    assert!(helper.border.visible);
    assert_eq!(helper.border.color, 0xff9800);
}

#[test]
fn test_helper_index_clamped() {
    let mut helper = StackHelper::new(synthetic_stack([4, 5, 6], [1.0, 1.0, 1.0]));
    helper.set_index(100);
    assert_eq!(helper.index(), 5);
    helper.set_orientation(SliceAxis::I);
    assert_eq!(helper.orientation_max_index(), 3);
    assert_eq!(helper.index(), 3);
    assert!(helper.current_slice().is_some());
}

#[test]
fn test_interpolation_accepts_only_zero_and_one() {
    assert_eq!(Interpolation::try_from(0u8), Ok(Interpolation::Nearest));
    assert_eq!(Interpolation::try_from(1u8), Ok(Interpolation::Linear));
    assert_eq!(Interpolation::try_from(2u8), Err(2));
}

#[test]
fn test_resample_nearest_keeps_source_values() {
    let stack = synthetic_stack([2, 2, 1], [1.0, 1.0, 1.0]);
    let slice = stack.slice(SliceAxis::K, 0).unwrap();
    let out = resample(&slice, 4, 4, Interpolation::Nearest);
    assert_eq!(out[[0, 0]], slice.pixels[[0, 0]]);
    assert_eq!(out[[0, 1]], slice.pixels[[0, 0]]);
    assert_eq!(out[[0, 3]], slice.pixels[[0, 1]]);
    assert_eq!(out[[3, 3]], slice.pixels[[1, 1]]);
    assert!(out.iter().all(|v| slice.pixels.iter().any(|p| p == v)));
}
