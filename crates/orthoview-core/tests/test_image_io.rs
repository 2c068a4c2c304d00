use ndarray::Array2;

use orthoview_core::io::image_io::{save_gray, to_gray_image};

#[test]
fn test_gray_image_layout() {
    let mut pixels = Array2::<u8>::zeros((2, 3));
    pixels[[0, 2]] = 200;
    pixels[[1, 0]] = 17;

    let img = to_gray_image(&pixels);

    assert_eq!(img.width(), 3);
    assert_eq!(img.height(), 2);
    assert_eq!(img.get_pixel(2, 0).0, [200]);
    assert_eq!(img.get_pixel(0, 1).0, [17]);
}

#[test]
fn test_save_png_roundtrip() {
    let pixels = Array2::from_shape_fn((4, 5), |(r, c)| (r * 40 + c * 3) as u8);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slice.png");

    save_gray(&pixels, &path).unwrap();
    let loaded = image::open(&path).unwrap().to_luma8();

    assert_eq!(loaded.dimensions(), (5, 4));
    assert_eq!(loaded.get_pixel(4, 3).0, [132]);
}

#[test]
fn test_unknown_extension_falls_back_to_png() {
    let pixels = Array2::<u8>::from_elem((3, 3), 90);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slice.out");

    save_gray(&pixels, &path).unwrap();
    let format = image::ImageReader::open(&path)
        .unwrap()
        .with_guessed_format()
        .unwrap()
        .format();
    assert_eq!(format, Some(image::ImageFormat::Png));
}
