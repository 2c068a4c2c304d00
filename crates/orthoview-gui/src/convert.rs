use orthoview_core::volume::SliceImage;

/// Convert an 8-bit slice to an egui ColorImage.
pub fn slice_to_color_image(slice: &SliceImage) -> egui::ColorImage {
    let gray: Vec<u8> = slice.pixels.iter().copied().collect();
    egui::ColorImage::from_gray([slice.width(), slice.height()], &gray)
}

/// 0xRRGGBB to an opaque egui color.
pub fn hex_color(rgb: u32) -> egui::Color32 {
    egui::Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// 0xRRGGBB plus alpha in [0, 1].
pub fn hex_color_alpha(rgb: u32, alpha: f32) -> egui::Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, a)
}
