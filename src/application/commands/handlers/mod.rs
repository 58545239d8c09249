//! Command Handlers 实现

mod image_handlers;
mod speech_handlers;
mod text_handlers;

pub use image_handlers::*;
pub use speech_handlers::*;
pub use text_handlers::*;
