//! 时间工具函数 - 预约时段与业务时区

use chrono::{DateTime, Duration, FixedOffset, NaiveTime, Utc};
use chrono_tz::Tz;

/// Reservation slot format (HH:MM)
pub const SLOT_FORMAT: &str = "%H:%M";

/// Build reservation slots from `open` to `close` inclusive, every `step_minutes`.
///
/// A zero step or a close before open yields no slots.
pub fn reservation_slots(open: NaiveTime, close: NaiveTime, step_minutes: u32) -> Vec<NaiveTime> {
    if step_minutes == 0 || close < open {
        return Vec::new();
    }
    let step = Duration::minutes(i64::from(step_minutes));
    let mut slots = Vec::new();
    let mut current = open;
    loop {
        slots.push(current);
        let (next, wrapped) = current.overflowing_add_signed(step);
        if wrapped != 0 || next > close {
            break;
        }
        current = next;
    }
    slots
}

/// Parse a slot string (HH:MM)
pub fn parse_slot(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), SLOT_FORMAT).ok()
}

/// Format a slot as HH:MM
pub fn format_slot(slot: NaiveTime) -> String {
    slot.format(SLOT_FORMAT).to_string()
}

/// Parse an IANA timezone name (e.g. `Asia/Taipei`)
pub fn parse_tz(value: &str) -> Option<Tz> {
    value.trim().parse().ok()
}

/// Current time in the business timezone
pub fn business_now(tz: Tz) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&tz).fixed_offset()
}
