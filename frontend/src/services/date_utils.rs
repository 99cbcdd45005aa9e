use chrono::{DateTime, Utc};
use js_sys::Date;

/// Current time in epoch milliseconds
pub fn now_millis() -> u64 {
    Date::now().max(0.0) as u64
}

/// Current time as a chrono timestamp. Read from the JS clock because
/// `Utc::now()` is not available in the browser without extra features.
pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(now_millis() as i64).unwrap_or_default()
}

/// Local wall-clock time, e.g. "2:30 PM"
pub fn current_time_label() -> String {
    let now = Date::new_0();
    format_time_label(now.get_hours(), now.get_minutes())
}

pub fn format_time_label(hours: u32, minutes: u32) -> String {
    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let hour = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour, minutes, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_label() {
        assert_eq!(format_time_label(0, 5), "12:05 AM");
        assert_eq!(format_time_label(9, 30), "9:30 AM");
        assert_eq!(format_time_label(12, 0), "12:00 PM");
        assert_eq!(format_time_label(14, 30), "2:30 PM");
        assert_eq!(format_time_label(23, 59), "11:59 PM");
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_clock_reads_from_browser() {
        let millis = now_millis();
        assert!(millis > 0);
        assert!((now_utc().timestamp_millis() - millis as i64).abs() < 1000);
        assert!(current_time_label().ends_with('M'));
    }
}
