//! 应用层 - 命令
//!
//! 每个命令对应一次翻译请求，处理器负责编排外部能力调用

mod translate_commands;

pub mod handlers;

pub use translate_commands::*;
