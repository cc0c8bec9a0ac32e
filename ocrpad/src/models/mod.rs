mod common;
mod download;
mod image;

pub use common::*;
pub use download::*;
pub use image::*;
