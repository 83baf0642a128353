use chrono::NaiveTime;
use chrono_tz::Tz;

use crate::orders::ContextRules;
use crate::utils::time::{parse_slot, parse_tz, reservation_slots};

/// 点餐机配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，存在时写入按日滚动文件 |
/// | CATALOG_PATH | (无) | 菜单 JSON 文件，未设置时使用内置菜单 |
/// | BUSINESS_TZ | Asia/Taipei | 营业时区 |
/// | TABLE_COUNT | 12 | 桌号数量 (桌号 "1".."N") |
/// | RESERVATION_OPEN | 10:00 | 第一个预约时段 |
/// | RESERVATION_CLOSE | 21:00 | 最后一个预约时段 |
/// | RESERVATION_SLOT_MINUTES | 5 | 预约时段间隔(分钟) |
/// | MAX_PARTY_SIZE | 10 | 预约内用最大人数 |
/// | ORDER_LOG_PATH | (无) | 订单 JSON Lines 文件，未设置时送往厨房广播 |
///
/// # 示例
///
/// ```ignore
/// TABLE_COUNT=20 BUSINESS_TZ=Asia/Tokyo cargo run
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KioskConfig {
    pub log_level: String,
    pub log_dir: Option<String>,
    pub catalog_path: Option<String>,
    /// 营业时区，决定下单时间
    pub business_tz: Tz,
    pub table_count: u16,
    pub reservation_open: NaiveTime,
    pub reservation_close: NaiveTime,
    pub slot_minutes: u32,
    pub max_party_size: u8,
    pub order_log_path: Option<String>,
}

impl KioskConfig {
    /// 从环境变量加载配置
    ///
    /// 未设置或无法解析的值使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::defaults();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            log_level: non_empty("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: non_empty("LOG_DIR"),
            catalog_path: non_empty("CATALOG_PATH"),
            business_tz: non_empty("BUSINESS_TZ")
                .and_then(|v| parse_tz(&v))
                .unwrap_or(defaults.business_tz),
            table_count: non_empty("TABLE_COUNT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.table_count),
            reservation_open: non_empty("RESERVATION_OPEN")
                .and_then(|v| parse_slot(&v))
                .unwrap_or(defaults.reservation_open),
            reservation_close: non_empty("RESERVATION_CLOSE")
                .and_then(|v| parse_slot(&v))
                .unwrap_or(defaults.reservation_close),
            slot_minutes: non_empty("RESERVATION_SLOT_MINUTES")
                .and_then(|v| v.trim().parse().ok())
                .filter(|m| *m > 0)
                .unwrap_or(defaults.slot_minutes),
            max_party_size: non_empty("MAX_PARTY_SIZE")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_party_size),
            order_log_path: non_empty("ORDER_LOG_PATH"),
        }
    }

    fn defaults() -> Self {
        Self {
            log_level: "info".into(),
            log_dir: None,
            catalog_path: None,
            business_tz: chrono_tz::Asia::Taipei,
            table_count: 12,
            reservation_open: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
            reservation_close: NaiveTime::from_hms_opt(21, 0, 0).unwrap_or_default(),
            slot_minutes: 5,
            max_party_size: 10,
            order_log_path: None,
        }
    }

    /// 桌号、预约时段与人数上限
    pub fn context_rules(&self) -> ContextRules {
        ContextRules {
            tables: ContextRules::numbered_tables(self.table_count),
            reservation_slots: reservation_slots(
                self.reservation_open,
                self.reservation_close,
                self.slot_minutes,
            ),
            max_party_size: self.max_party_size,
        }
    }
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
