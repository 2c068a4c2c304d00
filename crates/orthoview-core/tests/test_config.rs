use orthoview_core::config::ViewerConfig;
use orthoview_core::consts::DEFAULT_VOLUME_URL;
use orthoview_core::error::OrthoviewError;
use orthoview_core::orientation::{Convention, Orientation};

#[test]
fn test_defaults() {
    let config = ViewerConfig::default();
    assert_eq!(config.source, DEFAULT_VOLUME_URL);
    assert_eq!(config.clear_color, 0x353535);
    assert_eq!(config.clear_alpha, 1.0);
    assert!(config.antialias);
    assert_eq!(config.stack.border_color, 0xff9800);
    assert!(config.stack.border_visible);
    assert!(!config.stack.bbox_visible);
    assert_eq!(config.camera.box_padding, 10.0);
    assert_eq!(config.camera.fit_factor, 1.5);
    assert_eq!(config.camera.near, 0.1);
    assert_eq!(config.camera.far, 10_000.0);
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config = ViewerConfig::from_toml_str("").unwrap();
    assert_eq!(config, ViewerConfig::default());
}

#[test]
fn test_partial_toml() {
    let text = r#"
source = "data/brain.nii.gz"

[camera]
orientation = "sagittal"
convention = "neuro"
fit_factor = 1.0
"#;
    let config = ViewerConfig::from_toml_str(text).unwrap();
    assert_eq!(config.source, "data/brain.nii.gz");
    assert_eq!(config.camera.orientation, Orientation::Sagittal);
    assert_eq!(config.camera.convention, Convention::Neuro);
    assert_eq!(config.camera.fit_factor, 1.0);
    assert_eq!(config.camera.box_padding, 10.0);
    assert_eq!(config.window.width, 1280.0);
}

#[test]
fn test_toml_round_trip_via_file() {
    let mut config = ViewerConfig::default();
    config.camera.orientation = Orientation::Coronal;
    config.stack.border_visible = false;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("viewer.toml");
    std::fs::write(&path, config.to_toml().unwrap()).unwrap();

    assert_eq!(ViewerConfig::from_file(&path).unwrap(), config);
}

#[test]
fn test_bad_orientation_rejected() {
    let result = ViewerConfig::from_toml_str("[camera]\norientation = \"oblique\"\n");
    assert!(matches!(result, Err(OrthoviewError::Config(_))));
}

#[test]
fn test_orientation_display() {
    let names: Vec<String> = Orientation::ALL.iter().map(|o| o.to_string()).collect();
    assert_eq!(names, ["axial", "coronal", "sagittal"]);
    assert_eq!(Convention::Radio.to_string(), "radio");
}
