//! HTTP Handlers

mod health;
mod image;
mod speech;
mod text;
mod upload;

pub use health::*;
pub use image::*;
pub use speech::*;
pub use text::*;
