//! Delimited row rendering.

mod render;

pub use render::{append_cell, append_row, clean_value};
