//! Table availability entities

use chrono::{NaiveDate, NaiveTime};

/// Capacity for one date/time slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilitySlot {
    pub id: i32,
    pub date: NaiveDate,
    pub time_slot: NaiveTime,
    pub available_tables: i32,
    pub max_party_size: i32,
}

/// Date and time identifying a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl SlotKey {
    /// Parse `YYYY-MM-DD` and `HH:MM` (seconds optional).
    pub fn parse(date: &str, time: &str) -> Option<Self> {
        Some(Self {
            date: parse_date(date)?,
            time: parse_time(time)?,
        })
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_voice_tool_formats() {
        let key = SlotKey::parse("2030-06-01", "19:30").unwrap();
        assert_eq!(key.date, NaiveDate::from_ymd_opt(2030, 6, 1).unwrap());
        assert_eq!(key.time, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
        assert_eq!(parse_time("19:30:00"), parse_time("19:30"));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(SlotKey::parse("01/06/2030", "19:30").is_none());
        assert!(SlotKey::parse("2030-06-01", "7pm").is_none());
        assert!(parse_date("2030-02-30").is_none());
    }
}
