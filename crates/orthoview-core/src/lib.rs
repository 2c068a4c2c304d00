pub mod camera;
pub mod config;
pub mod consts;
pub mod controls;
pub mod error;
pub mod io;
pub mod orientation;
pub mod panel;
pub mod pipeline;
pub mod render_loop;
pub mod scene;
pub mod viewer;
pub mod viewport;
pub mod volume;
