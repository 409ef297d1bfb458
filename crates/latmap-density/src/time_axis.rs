//! Time axis split points for heat map columns

use chrono::{DateTime, FixedOffset, Timelike};
use latmap_core::{Error, Result};

pub const MINUTE_MS: i64 = 60 * 1000;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;

/// Most time split points a single axis may hold
pub const MAX_TIME_SPLIT_POINTS: usize = 100_000;

/// Column width picked when none is configured
///
/// Spans longer than five hours get 30 minute columns, shorter ones 5 minutes.
pub fn auto_interval_ms(span_ms: i64) -> i64 {
    if span_ms > 5 * HOUR_MS {
        30 * MINUTE_MS
    } else {
        5 * MINUTE_MS
    }
}

fn offset(utc_offset_seconds: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(utc_offset_seconds).ok_or_else(|| {
        Error::InvalidParameter(format!("invalid UTC offset: {utc_offset_seconds}s"))
    })
}

fn local_time(timestamp_ms: i64, utc_offset_seconds: i32) -> Result<DateTime<FixedOffset>> {
    let utc = DateTime::from_timestamp_millis(timestamp_ms)
        .ok_or_else(|| Error::InvalidInput(format!("timestamp out of range: {timestamp_ms}")))?;
    Ok(utc.with_timezone(&offset(utc_offset_seconds)?))
}

/// Floor a millisecond timestamp to the start of its hour in the given offset
pub fn start_of_hour(timestamp_ms: i64, utc_offset_seconds: i32) -> Result<i64> {
    let local = local_time(timestamp_ms, utc_offset_seconds)?;
    local
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .map(|t| t.timestamp_millis())
        .ok_or_else(|| Error::Computation(format!("cannot floor {timestamp_ms} to the hour")))
}

/// Split points for a time axis covering every timestamp
///
/// Points start at the hour containing the earliest timestamp and step by
/// `interval_ms` through `max + interval_ms`, so the last column that holds
/// data is closed on the right.
pub fn timestamp_split_points(
    timestamps: &[i64],
    interval_ms: i64,
    utc_offset_seconds: i32,
) -> Result<Vec<i64>> {
    if interval_ms <= 0 {
        return Err(Error::InvalidParameter(format!(
            "time interval must be positive, got {interval_ms}ms"
        )));
    }
    let min = *timestamps.iter().min().ok_or_else(|| Error::empty_input("timestamps"))?;
    let max = *timestamps.iter().max().ok_or_else(|| Error::empty_input("timestamps"))?;

    let end = max
        .checked_add(interval_ms)
        .ok_or_else(|| Error::Computation("time axis overflow".to_string()))?;
    let start = start_of_hour(min, utc_offset_seconds)?;
    let count = end
        .checked_sub(start)
        .ok_or_else(|| Error::Computation("time axis overflow".to_string()))?
        / interval_ms
        + 1;
    if count > MAX_TIME_SPLIT_POINTS as i64 {
        return Err(Error::InvalidParameter(format!(
            "time interval of {interval_ms}ms gives {count} split points, more than {MAX_TIME_SPLIT_POINTS}"
        )));
    }

    let mut point = start;
    let mut points = Vec::with_capacity(count as usize);
    while point <= end {
        points.push(point);
        point = match point.checked_add(interval_ms) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(points)
}

/// Render a timestamp as `dd/MM/yyyy HH:mm` in the given offset
pub fn format_timestamp(timestamp_ms: i64, utc_offset_seconds: i32) -> Result<String> {
    Ok(local_time(timestamp_ms, utc_offset_seconds)?
        .format("%d/%m/%Y %H:%M")
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-01T10:17:42.500Z
    const T0: i64 = 1_709_288_262_500;
    // 2024-03-01T10:00:00Z
    const HOUR_START: i64 = 1_709_287_200_000;

    #[test]
    fn test_start_of_hour() {
        assert_eq!(start_of_hour(T0, 0).unwrap(), HOUR_START);
        assert_eq!(start_of_hour(HOUR_START, 0).unwrap(), HOUR_START);
        // +05:30 local time is 15:47, so the local hour starts at 09:30Z
        assert_eq!(start_of_hour(T0, 5 * 3600 + 1800).unwrap(), HOUR_START - 30 * MINUTE_MS);
    }

    #[test]
    fn test_split_points() {
        let timestamps = [T0, T0 + 7 * MINUTE_MS];
        let points = timestamp_split_points(&timestamps, 5 * MINUTE_MS, 0).unwrap();
        assert_eq!(points[0], HOUR_START);
        assert!(points.windows(2).all(|w| w[1] - w[0] == 5 * MINUTE_MS));
        let last = *points.last().unwrap();
        let max = T0 + 7 * MINUTE_MS;
        assert!(last <= max + 5 * MINUTE_MS);
        assert!(last > max);
        // 10:00 through 10:25
        assert_eq!(points.len(), 6);
    }

    #[test]
    fn test_split_points_errors() {
        assert!(matches!(
            timestamp_split_points(&[T0], 0, 0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(timestamp_split_points(&[T0], -5, 0).is_err());
        assert!(matches!(
            timestamp_split_points(&[], 1000, 0),
            Err(Error::InsufficientData { .. })
        ));
        assert!(timestamp_split_points(&[T0], 1000, 100_000).is_err());
    }

    #[test]
    fn test_split_point_cap() {
        let day = [HOUR_START, HOUR_START + 24 * HOUR_MS];
        assert!(matches!(
            timestamp_split_points(&day, 1, 0),
            Err(Error::InvalidParameter(_))
        ));
        // 10:00 through 10:01 the next day
        assert_eq!(timestamp_split_points(&day, MINUTE_MS, 0).unwrap().len(), 24 * 60 + 2);
    }

    #[test]
    fn test_auto_interval() {
        assert_eq!(auto_interval_ms(HOUR_MS), 5 * MINUTE_MS);
        assert_eq!(auto_interval_ms(5 * HOUR_MS), 5 * MINUTE_MS);
        assert_eq!(auto_interval_ms(5 * HOUR_MS + 1), 30 * MINUTE_MS);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_timestamp(T0, 0).unwrap(), "01/03/2024 10:17");
        assert_eq!(format_timestamp(T0, 3600).unwrap(), "01/03/2024 11:17");
    }
}
