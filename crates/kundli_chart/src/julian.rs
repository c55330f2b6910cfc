//! Calendar to Julian Day conversion.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Day of a Gregorian calendar date with fractional day (Meeus, ch. 7).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Julian Day (UT) of a UTC instant.
pub fn julian_day_ut(utc: &DateTime<Utc>) -> f64 {
    let seconds = utc.num_seconds_from_midnight() as f64 + utc.nanosecond() as f64 * 1e-9;
    calendar_to_jd(utc.year(), utc.month(), utc.day() as f64 + seconds / 86_400.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn j2000_epoch() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_1957() {
        // Sputnik launch, 1957 Oct 4.81 → JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn utc_instant() {
        let utc = Utc.with_ymd_and_hms(2000, 1, 1, 18, 0, 0).unwrap();
        assert!((julian_day_ut(&utc) - 2_451_545.25).abs() < 1e-9);
    }
}
