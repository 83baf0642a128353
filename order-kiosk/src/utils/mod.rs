//! 工具模块 - 通用工具函数
//!
//! - [`logger`] - tracing 初始化
//! - [`time`] - 预约时段、业务时区
//! - [`validation`] - 表单字段校验

pub mod logger;
pub mod time;
pub mod validation;

pub use validation::{MAX_NAME_LEN, is_filled};
