use crate::consts::{BBOX_COLOR, BORDER_COLOR};
use crate::orientation::{Interpolation, SliceAxis};

use super::stack::{SliceImage, Stack};

/// Colored outline drawn with the slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    pub visible: bool,
    /// 0xRRGGBB
    pub color: u32,
}

/// Wraps a stack for display: which slice is shown and how it is sampled.
#[derive(Clone, Debug)]
pub struct StackHelper {
    stack: Stack,
    index: usize,
    orientation: SliceAxis,
    interpolation: Interpolation,
    pub bbox: Outline,
    pub border: Outline,
}

impl StackHelper {
    pub fn new(stack: Stack) -> Self {
        let orientation = SliceAxis::K;
        let max_index = stack.axis_len(orientation).saturating_sub(1);
        Self {
            stack,
            index: max_index / 2,
            orientation,
            interpolation: Interpolation::default(),
            bbox: Outline {
                visible: true,
                color: BBOX_COLOR,
            },
            border: Outline {
                visible: true,
                color: BORDER_COLOR,
            },
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn orientation(&self) -> SliceAxis {
        self.orientation
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Largest valid index across the current orientation.
    pub fn orientation_max_index(&self) -> usize {
        self.stack.axis_len(self.orientation).saturating_sub(1)
    }

    /// Select a slice. Values past the end are clamped to the last slice.
    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.orientation_max_index());
    }

    pub fn set_orientation(&mut self, orientation: SliceAxis) {
        self.orientation = orientation;
        self.index = self.index.min(self.orientation_max_index());
    }

    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    pub fn current_slice(&self) -> Option<SliceImage> {
        self.stack.slice(self.orientation, self.index)
    }
}
