//! Order Kiosk - 自助点餐流程引擎
//!
//! # 架构概述
//!
//! 一个点餐会话从选择用餐方式开始，经过菜单加点，到送出订单结束：
//!
//! - **订单流程** (`orders`): 用餐方式、购物车聚合、组合餐、步骤状态机
//! - **菜单** (`catalog`): 内置菜单或 JSON 文件菜单，按会话取快照
//! - **订单接收** (`intake`): 内存、厨房广播、JSON Lines 文件
//! - **点餐机** (`kiosk`): 会话 + 订单接收
//!
//! # 模块结构
//!
//! ```text
//! order-kiosk/src/
//! ├── core/          # 配置
//! ├── catalog/       # 菜单来源与校验
//! ├── intake/        # 订单接收
//! ├── orders/        # 会话、购物车、组合餐、状态机
//! ├── utils/         # 日志、时间、校验
//! └── kiosk.rs       # 点餐机
//! ```

pub mod catalog;
pub mod core;
pub mod intake;
pub mod kiosk;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use catalog::{CatalogError, CatalogProvider, FileCatalog, StaticCatalog};
pub use core::KioskConfig;
pub use intake::{BroadcastIntake, IntakeError, JsonLinesIntake, MemoryIntake, OrderIntake};
pub use kiosk::{Kiosk, KioskError};
pub use orders::{FlowResult, FlowState, Rejection, Session};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
