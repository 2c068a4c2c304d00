use crate::config::ViewerConfig;

/// Size of the element hosting the viewer, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl ContainerSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative, or not a number.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Element the viewer draws into. Sizes are read on demand, never cached.
pub trait Container {
    fn offset_size(&self) -> ContainerSize;

    fn device_pixel_ratio(&self) -> f32 {
        1.0
    }
}

impl Container for ContainerSize {
    fn offset_size(&self) -> ContainerSize {
        *self
    }
}

/// Render target description: what a renderer needs to set up its canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    size: ContainerSize,
    pixel_ratio: f32,
    pub antialias: bool,
    /// 0xRRGGBB
    pub clear_color: u32,
    pub clear_alpha: f32,
}

impl Surface {
    pub fn size(&self) -> ContainerSize {
        self.size
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    pub fn set_size(&mut self, size: ContainerSize) {
        self.size = size;
    }

    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        if ratio > 0.0 && ratio.is_finite() {
            self.pixel_ratio = ratio;
        }
    }

    /// Backing-store size in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        let w = (self.size.width.max(0.0) * self.pixel_ratio).round() as u32;
        let h = (self.size.height.max(0.0) * self.pixel_ratio).round() as u32;
        (w, h)
    }
}

/// Create the render surface for a container.
pub fn bootstrap(container: &dyn Container, config: &ViewerConfig) -> Surface {
    let mut surface = Surface {
        size: container.offset_size(),
        pixel_ratio: 1.0,
        antialias: config.antialias,
        clear_color: config.clear_color,
        clear_alpha: config.clear_alpha,
    };
    surface.set_pixel_ratio(container.device_pixel_ratio());
    surface
}

#[cfg(test)]
mod tests {
    use super::*;

    struct HiDpi;

    impl Container for HiDpi {
        fn offset_size(&self) -> ContainerSize {
            ContainerSize::new(640.0, 480.0)
        }

        fn device_pixel_ratio(&self) -> f32 {
            2.0
        }
    }

    #[test]
    fn bootstrap_matches_container() {
        let surface = bootstrap(&HiDpi, &ViewerConfig::default());
        assert_eq!(surface.size(), ContainerSize::new(640.0, 480.0));
        assert_eq!(surface.physical_size(), (1280, 960));
        assert!(surface.antialias);
        assert_eq!(surface.clear_color, 0x353535);
        assert_eq!(surface.clear_alpha, 1.0);
    }

    #[test]
    fn degenerate_sizes() {
        assert!(ContainerSize::new(0.0, 10.0).is_degenerate());
        assert!(ContainerSize::new(10.0, f32::NAN).is_degenerate());
        assert!(!ContainerSize::new(1.0, 1.0).is_degenerate());
    }
}
