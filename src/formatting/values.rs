use crate::core::Measured;

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

/// Placeholder shown for an unmeasured value.
const NOT_MEASURED: &str = "*";

/// `"72.5%"`, or `"*"` when coverage was not measured.
pub fn format_coverage(coverage: Measured) -> String {
    coverage
        .value()
        .map_or_else(|| NOT_MEASURED.to_string(), |c| format!("{:.1}%", c))
}

/// Technical debt as whole days and hours: `"3d 4h"`, or `"5h"` under a day.
///
/// Missing, zero and negative durations all read `"0d"`. Leftover minutes
/// are dropped.
pub fn minutes_to_days(minutes: Measured) -> String {
    let total = match minutes.value() {
        Some(m) if m > 0.0 => m.floor() as u64,
        _ => return "0d".to_string(),
    };
    let days = total / MINUTES_PER_DAY;
    let hours = (total % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    if days > 0 {
        format!("{}d {}h", days, hours)
    } else {
        format!("{}h", hours)
    }
}

/// Compact duration that omits zero components: `"45m"`, `"2h 5m"`,
/// `"2h"`, `"3d 4h"`, `"3d"`.
pub fn minutes_to_readable(minutes: u64) -> String {
    if minutes < MINUTES_PER_HOUR {
        return format!("{}m", minutes);
    }
    let hours = minutes / MINUTES_PER_HOUR;
    let remaining_minutes = minutes % MINUTES_PER_HOUR;
    if hours < 24 {
        return match remaining_minutes {
            0 => format!("{}h", hours),
            m => format!("{}h {}m", hours, m),
        };
    }
    let days = hours / 24;
    match hours % 24 {
        0 => format!("{}d", days),
        h => format!("{}d {}h", days, h),
    }
}

/// Lead time in the coarsest unit that keeps it readable.
pub fn format_lead_time(minutes: Measured) -> String {
    match minutes.value() {
        Some(m) if m < 0.0 => NOT_MEASURED.to_string(),
        None => NOT_MEASURED.to_string(),
        Some(m) if m < 1.0 => format!("{}s", (m * 60.0) as u64),
        Some(m) if m < 60.0 => format!("{}min", m as u64),
        Some(m) if m < 1440.0 => format!("{:.1}h", m / 60.0),
        Some(m) => format!("{:.1}d", m / 1440.0),
    }
}

/// `"950"`, `"12.3K"`, `"1.2M"`.
pub fn format_number(number: u64) -> String {
    if number >= 1_000_000 {
        format!("{:.1}M", number as f64 / 1_000_000.0)
    } else if number >= 1_000 {
        format!("{:.1}K", number as f64 / 1_000.0)
    } else {
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coverage() {
        assert_eq!(format_coverage(Measured::Value(72.46)), "72.5%");
        assert_eq!(format_coverage(Measured::Value(0.0)), "0.0%");
        assert_eq!(format_coverage(Measured::Unknown), "*");
    }

    #[test]
    fn test_minutes_to_days() {
        assert_eq!(minutes_to_days(Measured::Value(4620.0)), "3d 5h");
        assert_eq!(minutes_to_days(Measured::Value(150.0)), "2h");
        assert_eq!(minutes_to_days(Measured::Value(30.0)), "0h");
        assert_eq!(minutes_to_days(Measured::Value(0.0)), "0d");
        assert_eq!(minutes_to_days(Measured::Value(-10.0)), "0d");
        assert_eq!(minutes_to_days(Measured::Unknown), "0d");
    }

    #[test]
    fn test_minutes_to_readable() {
        assert_eq!(minutes_to_readable(45), "45m");
        assert_eq!(minutes_to_readable(125), "2h 5m");
        assert_eq!(minutes_to_readable(120), "2h");
        assert_eq!(minutes_to_readable(1440), "1d");
        assert_eq!(minutes_to_readable(1500), "1d 1h");
    }

    #[test]
    fn test_format_lead_time() {
        assert_eq!(format_lead_time(Measured::Value(0.5)), "30s");
        assert_eq!(format_lead_time(Measured::Value(42.9)), "42min");
        assert_eq!(format_lead_time(Measured::Value(90.0)), "1.5h");
        assert_eq!(format_lead_time(Measured::Value(2880.0)), "2.0d");
        assert_eq!(format_lead_time(Measured::Value(-1.0)), "*");
        assert_eq!(format_lead_time(Measured::Unknown), "*");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(12_345), "12.3K");
        assert_eq!(format_number(1_340_000), "1.3M");
    }
}
