use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use ndarray::{Array2, Axis};
use orthoview_core::camera::OrthographicCamera;
use orthoview_core::config::ViewerConfig;
use orthoview_core::consts::DEFAULT_VOLUME_URL;
use orthoview_core::error::OrthoviewError;
use orthoview_core::io::image_io::save_gray;
use orthoview_core::orientation::{Convention, Orientation};
use orthoview_core::panel::PanelEvent;
use orthoview_core::viewer::Viewer;
use orthoview_core::viewport::ContainerSize;
use orthoview_core::volume::{resample, SliceImage};
use tracing::info;

use super::load_source;

#[derive(Clone, Copy, ValueEnum)]
pub enum OrientationArg {
    Axial,
    Coronal,
    Sagittal,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ConventionArg {
    Radio,
    Neuro,
}

#[derive(Args)]
pub struct SliceArgs {
    /// Volume URL or path (.nii / .nii.gz)
    #[arg(default_value = DEFAULT_VOLUME_URL)]
    pub source: String,

    /// Output image path (format from extension, PNG by default)
    #[arg(short, long, default_value = "slice.png")]
    pub output: PathBuf,

    /// Viewing plane
    #[arg(long, value_enum, default_value = "axial")]
    pub orientation: OrientationArg,

    /// Left/right display convention
    #[arg(long, value_enum, default_value = "radio")]
    pub convention: ConventionArg,

    /// Slice index (default: middle slice)
    #[arg(short, long)]
    pub index: Option<usize>,

    /// 0 = nearest, 1 = linear sampling when resizing
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(i64).range(0..=1))]
    pub interpolation: i64,

    /// Resize the exported slice to this width
    #[arg(long)]
    pub width: Option<usize>,

    /// Resize the exported slice to this height
    #[arg(long)]
    pub height: Option<usize>,
}

pub fn run(args: &SliceArgs) -> Result<()> {
    let loaded = load_source(&args.source)?;

    let canvas = ContainerSize::new(
        args.width.unwrap_or(512) as f32,
        args.height.unwrap_or(512) as f32,
    );
    let mut viewer = Viewer::new(&canvas, ViewerConfig::default());
    viewer.attach_volume(loaded);

    let orientation = match args.orientation {
        OrientationArg::Axial => Orientation::Axial,
        OrientationArg::Coronal => Orientation::Coronal,
        OrientationArg::Sagittal => Orientation::Sagittal,
    };
    let convention = match args.convention {
        ConventionArg::Radio => Convention::Radio,
        ConventionArg::Neuro => Convention::Neuro,
    };
    viewer.apply(PanelEvent::Orientation(orientation));
    viewer.apply(PanelEvent::Convention(convention));
    viewer.apply(PanelEvent::Interpolation(args.interpolation));

    let Some(helper) = viewer.stack_helper() else {
        bail!("No stack to slice");
    };
    let max = helper.orientation_max_index();
    let index = match args.index {
        Some(i) if i > max => {
            return Err(OrthoviewError::SliceIndexOutOfRange { index: i, max }.into())
        }
        Some(i) => i,
        None => helper.index(),
    };

    let mut helper = helper.clone();
    helper.set_index(index);
    let slice = helper
        .current_slice()
        .with_context(|| format!("Slice {index} is empty"))?;

    let mut pixels = orient_for_display(&slice, viewer.camera());
    if args.width.is_some() || args.height.is_some() {
        let (h, w) = pixels.dim();
        let oriented = SliceImage {
            pixels,
            corners: slice.corners,
        };
        pixels = resample(
            &oriented,
            args.width.unwrap_or(w),
            args.height.unwrap_or(h),
            helper.interpolation(),
        );
    }

    save_gray(&pixels, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        orientation = %orientation,
        axis = %helper.orientation(),
        index,
        "slice exported"
    );
    println!(
        "Saved {} slice {} ({}x{}) to {}",
        orientation,
        index,
        pixels.ncols(),
        pixels.nrows(),
        args.output.display()
    );
    Ok(())
}

/// Flip/transpose the slice grid so it reads as it appears on screen.
fn orient_for_display(slice: &SliceImage, camera: &OrthographicCamera) -> Array2<u8> {
    let p = slice.corners.map(|c| camera.project(c));
    let along_cols = (p[1].0 - p[0].0, p[1].1 - p[0].1);
    let along_rows = (p[3].0 - p[0].0, p[3].1 - p[0].1);

    let mut view = slice.pixels.view();
    // texture columns running up/down the screen
    let transposed = along_cols.1.abs() > along_cols.0.abs();
    let (horizontal, vertical) = if transposed {
        view = view.reversed_axes();
        (along_rows, along_cols)
    } else {
        (along_cols, along_rows)
    };

    if horizontal.0 < 0.0 {
        view.invert_axis(Axis(1));
    }
    if vertical.1 < 0.0 {
        view.invert_axis(Axis(0));
    }
    view.as_standard_layout().into_owned()
}
