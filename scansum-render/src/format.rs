//! Display formatting for timestamps and durations.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a server timestamp for display in local time.
///
/// The backend emits `datetime.utcnow().isoformat()` — RFC 3339 without a
/// UTC offset — so naive datetimes are interpreted as UTC. Full RFC 3339
/// and epoch-seconds inputs are also accepted. Unparseable input is echoed
/// back unchanged.
pub fn format_timestamp(ts: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return Utc
            .from_utc_datetime(&naive)
            .with_timezone(&Local)
            .format(DISPLAY_FORMAT)
            .to_string();
    }
    if let Ok(epoch) = ts.parse::<i64>()
        && let Some(dt) = DateTime::from_timestamp(epoch, 0)
    {
        return dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    ts.to_string()
}

/// Format a processing time given in seconds.
///
/// Sub-second values render as whole milliseconds ("500ms"); everything
/// else as seconds with two decimals ("2.35s").
pub fn format_processing_time(seconds: f64) -> String {
    if seconds < 1.0 {
        format!("{}ms", (seconds * 1000.0).round() as i64)
    } else {
        format!("{seconds:.2}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_time_boundaries() {
        assert_eq!(format_processing_time(0.5), "500ms");
        assert_eq!(format_processing_time(1.0), "1.00s");
        assert_eq!(format_processing_time(2.345), "2.35s");
        assert_eq!(format_processing_time(0.0004), "0ms");
        assert_eq!(format_processing_time(0.9995), "1000ms");
    }

    #[test]
    fn timestamp_rfc3339_parses() {
        let out = format_timestamp("2025-06-01T12:00:00Z");
        assert_eq!(out.len(), "2025-06-01 12:00:00".len());
        assert!(out.starts_with("2025-"));
    }

    #[test]
    fn timestamp_naive_iso_parses_as_utc() {
        // The backend's actual format: isoformat() with microseconds, no offset
        let out = format_timestamp("2025-06-01T12:00:00.123456");
        assert!(out.contains(':'));
        assert_ne!(out, "2025-06-01T12:00:00.123456");
    }

    #[test]
    fn timestamp_epoch_seconds_parses() {
        let out = format_timestamp("1700000000");
        assert!(out.starts_with("2023-11-1"));
    }

    #[test]
    fn timestamp_garbage_echoed_back() {
        assert_eq!(format_timestamp("not a date"), "not a date");
        assert_eq!(format_timestamp(""), "");
    }
}
