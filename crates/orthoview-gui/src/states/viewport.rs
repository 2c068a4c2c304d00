use orthoview_core::orientation::{Interpolation, SliceAxis};

/// Identifies the slice currently uploaded as a texture.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TextureKey {
    pub generation: u64,
    pub axis: SliceAxis,
    pub index: usize,
    pub interpolation: Interpolation,
}

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    pub texture_key: Option<TextureKey>,
    /// Bumped whenever a new volume is attached.
    pub generation: u64,
}

impl ViewportState {
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.texture = None;
        self.texture_key = None;
    }
}
