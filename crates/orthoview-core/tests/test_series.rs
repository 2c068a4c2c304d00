mod common;

use glam::Vec3;
use ndarray::s;

use orthoview_core::volume::{merge_series, StackGeometry, VolumeFile};

use common::*;

/// Split a synthetic file into single-slice fragments along k.
fn fragments(uid: &str, dims: [u32; 3]) -> Vec<VolumeFile> {
    let whole = synthetic_file(uid, dims, [1.0, 1.0, 1.0]);
    (0..dims[2] as usize)
        .map(|k| {
            let mut geometry: StackGeometry = whole.geometry.clone();
            geometry.dimensions_ijk.z = 1;
            geometry.origin = Vec3::new(0.0, 0.0, k as f32);
            VolumeFile {
                source_name: format!("{uid}-{k}"),
                series_uid: uid.to_string(),
                description: String::new(),
                geometry,
                data: whole.data.slice(s![k..k + 1, .., ..]).to_owned(),
            }
        })
        .collect()
}

#[test]
fn test_single_file_single_stack() {
    let series = merge_series(vec![synthetic_file("a", [4, 3, 2], [1.0, 1.0, 1.0])]).unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].uid, "a");
    assert_eq!(series[0].stacks.len(), 1);
    assert_eq!(series[0].stacks[0].data.dim(), (2, 3, 4));
}

#[test]
fn test_fragments_merge_in_position_order() {
    let mut parts = fragments("frag", [3, 2, 4]);
    parts.reverse();
    let series = merge_series(parts).unwrap();

    assert_eq!(series.len(), 1);
    let stack = &series[0].stacks[0];
    assert_eq!(stack.dimensions_ijk().z, 4);
    for k in 0..4 {
        assert_eq!(stack.data[[k, 1, 2]], voxel_value(2, 1, k));
    }
    assert!(stack.geometry.origin.abs_diff_eq(Vec3::ZERO, 1e-6));
}

#[test]
fn test_fragment_gap_sets_slice_spacing() {
    let mut parts = fragments("gap", [2, 2, 2]);
    parts[1].geometry.origin = Vec3::new(0.0, 0.0, 5.0);
    let series = merge_series(parts).unwrap();

    let stack = &series[0].stacks[0];
    assert_eq!(stack.dimensions_ijk().z, 2);
    assert!((stack.geometry.spacing.z - 5.0).abs() < 1e-5);

    let second = stack.ijk_to_lps().transform_point3(Vec3::new(0.0, 0.0, 1.0));
    assert!((second.z - 5.0).abs() < 1e-5);

    let bbox = stack.world_bounding_box();
    assert!((bbox[5] - bbox[4] - 10.0).abs() < 1e-4);
}

#[test]
fn test_single_frame_keeps_file_spacing() {
    let series = merge_series(vec![synthetic_file("thin", [3, 3, 1], [1.0, 1.0, 2.5])]).unwrap();
    assert!((series[0].stacks[0].geometry.spacing.z - 2.5).abs() < 1e-6);
}

#[test]
fn test_duplicate_fragments_deduplicated() {
    let mut parts = fragments("dup", [2, 2, 3]);
    parts.extend(fragments("dup", [2, 2, 3]));
    let series = merge_series(parts).unwrap();
    assert_eq!(series[0].stacks[0].dimensions_ijk().z, 3);
}

#[test]
fn test_series_keep_first_seen_order() {
    let files = vec![
        synthetic_file("second", [2, 2, 2], [1.0, 1.0, 1.0]),
        synthetic_file("first", [2, 2, 2], [1.0, 1.0, 1.0]),
    ];
    let series = merge_series(files).unwrap();
    let uids: Vec<&str> = series.iter().map(|s| s.uid.as_str()).collect();
    assert_eq!(uids, ["second", "first"]);
}

#[test]
fn test_incompatible_geometry_splits_stacks() {
    let files = vec![
        synthetic_file("mixed", [4, 4, 2], [1.0, 1.0, 1.0]),
        synthetic_file("mixed", [8, 8, 2], [1.0, 1.0, 1.0]),
    ];
    let series = merge_series(files).unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].stacks.len(), 2);
}

#[test]
fn test_no_files_no_series() {
    assert!(merge_series(Vec::new()).unwrap().is_empty());
}
