//! 核心模块 - 点餐机配置
//!
//! - [`KioskConfig`] - 环境变量配置

pub mod config;

pub use config::KioskConfig;
