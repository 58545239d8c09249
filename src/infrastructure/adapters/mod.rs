//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod fake;
pub mod google;

pub use fake::*;
pub use google::*;
