pub mod controls;
mod helpers;
pub mod menu_bar;
pub mod status;
pub mod viewport;

pub(crate) use helpers::{enum_combo, section_header};
