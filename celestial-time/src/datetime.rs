//! Broken-down date and time fields ↔ two-part Julian Date.
//!
//! For every scale but UTC a day is 86400 s long. A UTC day that ends in a
//! leap second is 86401 s long (86399 s for a negative one), and its last
//! minute has 61 (or 59) seconds; the routines here read the day length from
//! the leap-second table, so 23:59:60.5 on 2016-12-31 is a valid UTC time.
//! Before 1972 the drifting UTC of the early table is handled the same way.
//!
//! ```
//! use celestial_time::datetime::{format_datetime, parse_datetime_fields, TimeScale};
//!
//! let (jd, warning) = parse_datetime_fields(TimeScale::UTC, 2016, 12, 31, 23, 59, 60.5).unwrap();
//! assert_eq!(warning.status(), 0);
//!
//! let fields = format_datetime(TimeScale::UTC, 3, jd.jd1, jd.jd2).unwrap();
//! assert_eq!(fields.to_string(), "2016-12-31T23:59:60.500");
//! ```

use crate::calendar::{calendar_to_jd, jd_to_calendar, next_calendar_day};
use crate::julian::JulianDate;
use crate::leap_seconds::dat;
use crate::{TimeError, TimeResult};
use celestial_core::angle::days_to_hms;
use celestial_core::constants::SECONDS_PER_DAY_F64;
use std::fmt;

/// The time scale a set of date and time fields belongs to.
///
/// Only [`UTC`](TimeScale::UTC) changes the behavior of the field routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeScale {
    TAI,
    TCB,
    TCG,
    TDB,
    TT,
    UT1,
    UTC,
}

impl TimeScale {
    pub fn is_utc(self) -> bool {
        self == TimeScale::UTC
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeScale::TAI => "TAI",
            TimeScale::TCB => "TCB",
            TimeScale::TCG => "TCG",
            TimeScale::TDB => "TDB",
            TimeScale::TT => "TT",
            TimeScale::UT1 => "UT1",
            TimeScale::UTC => "UTC",
        };
        f.write_str(name)
    }
}

/// Warnings raised alongside a successful date and time conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeWarning {
    /// The leap-second table was consulted for a year it cannot vouch for.
    pub dubious_year: bool,
    /// The seconds field reached the length of its minute.
    pub second_overflow: bool,
}

impl TimeWarning {
    /// Classic status: `+1` dubious year, `+2` second overflow, `+3` both.
    pub fn status(&self) -> i32 {
        self.dubious_year as i32 + 2 * self.second_overflow as i32
    }
}

/// Calendar date and time of day, rounded to `ndp` decimal places of a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFields {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    /// `[hours, minutes, seconds, fraction]`, fraction in units of 10^-ndp s.
    pub time: [i32; 4],
    pub ndp: i32,
    pub warning: TimeWarning,
}

impl DateTimeFields {
    pub fn status(&self) -> i32 {
        self.warning.status()
    }
}

impl fmt::Display for DateTimeFields {
    /// ISO 8601 style: `YYYY-MM-DDThh:mm:ss.fff`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h, m, s, frac] = self.time;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, h, m, s
        )?;
        if self.ndp > 0 {
            write!(f, ".{:0width$}", frac, width = self.ndp as usize)?;
        }
        Ok(())
    }
}

/// Length in seconds of the UTC day `(year, month, day)`, and whether the
/// leap-second table flagged it as dubious.
fn utc_day_length(year: i32, month: i32, day: i32) -> TimeResult<(f64, bool)> {
    let dat0 = dat(year, month, day, 0.0)?;
    let dat12 = dat(year, month, day, 0.5)?;
    let (year2, month2, day2) = next_calendar_day(year, month, day)?;
    let dat24 = dat(year2, month2, day2, 0.0)?;

    // Change of TAI-UTC across the day beyond the steady drift.
    let dleap = dat24.seconds - (2.0 * dat12.seconds - dat0.seconds);
    Ok((
        SECONDS_PER_DAY_F64 + dleap,
        dat0.dubious_year || dat24.dubious_year,
    ))
}

/// Two-part Julian Date to calendar date and time of day in `scale`.
///
/// The time is rounded to `ndp` decimals of a second (negative `ndp` rounds
/// to tens of seconds, minutes and so on). Rounding that reaches 24:00 moves
/// to 00:00 of the next day, except inside a positive UTC leap second, which
/// is reported as 23:59:60.
///
/// # Errors
///
/// Unacceptable dates: outside the calendar range, or for UTC, outside the
/// leap-second table.
pub fn format_datetime(
    scale: TimeScale,
    ndp: i32,
    jd1: f64,
    jd2: f64,
) -> TimeResult<DateTimeFields> {
    let (mut year, mut month, mut day, mut fd) = jd_to_calendar(jd1, jd2)?;

    let mut leap = false;
    let mut warning = TimeWarning::default();
    if scale.is_utc() {
        let (day_length, dubious) = utc_day_length(year, month, day)?;
        let dleap = day_length - SECONDS_PER_DAY_F64;
        leap = libm::fabs(dleap) > 0.5;
        if leap {
            fd += fd * dleap / SECONDS_PER_DAY_F64;
        }
        warning.dubious_year = dubious;
    }

    let mut time = days_to_hms(ndp, fd).fields;

    if time[0] > 23 {
        let next = next_calendar_day(year, month, day)?;
        let rolls_over = !leap || time[2] > 0 || ndp < 0;
        if rolls_over {
            (year, month, day) = next;
            time = [0; 4];
        } else {
            time = [23, 59, 60, time[3]];
        }
    }

    Ok(DateTimeFields {
        year,
        month,
        day,
        time,
        ndp,
        warning,
    })
}

/// Calendar date and time of day in `scale` to a two-part Julian Date.
///
/// The result is `(JD at 0h, fraction of the day)`, where for UTC the
/// fraction is of that day's true length.
///
/// # Errors
///
/// | Status | Cause |
/// |--------|-------|
/// | −1..−3 | bad year, month or day (see [`calendar_to_jd`]) |
/// | −4 | hour outside 0..=23 |
/// | −5 | minute outside 0..=59 |
/// | −6 | negative second |
///
/// A second at or past the length of its minute (60, or 61 in the last minute
/// of a UTC day with a leap second) is accepted and flagged in the returned
/// [`TimeWarning`].
pub fn parse_datetime_fields(
    scale: TimeScale,
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
) -> TimeResult<(JulianDate, TimeWarning)> {
    let (djm0, djm) = calendar_to_jd(year, month, day)?;
    let dj = djm0 + djm;

    let mut day_length = SECONDS_PER_DAY_F64;
    let mut minute_length = 60.0;
    let mut warning = TimeWarning::default();

    if scale.is_utc() {
        let (length, dubious) = utc_day_length(year, month, day)?;
        if hour == 23 && minute == 59 {
            minute_length += length - day_length;
        }
        day_length = length;
        warning.dubious_year = dubious;
    }

    if !(0..=23).contains(&hour) {
        return Err(TimeError::InvalidHour(hour));
    }
    if !(0..=59).contains(&minute) {
        return Err(TimeError::InvalidMinute(minute));
    }
    if second < 0.0 {
        return Err(TimeError::InvalidSecond(second));
    }
    warning.second_overflow = second >= minute_length;

    let fraction = (60.0 * (60 * hour + minute) as f64 + second) / day_length;
    Ok((JulianDate::new(dj, fraction), warning))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_leap_second_reference() {
        let fields = format_datetime(TimeScale::UTC, 5, 2400000.5, 49533.99999).unwrap();
        assert_eq!((fields.year, fields.month, fields.day), (1994, 6, 30));
        assert_eq!(fields.time, [23, 59, 60, 13599]);
        assert_eq!(fields.status(), 0);
    }

    #[test]
    fn test_parse_leap_second_reference() {
        let (jd, warning) =
            parse_datetime_fields(TimeScale::UTC, 1994, 6, 30, 23, 59, 60.13599).unwrap();
        assert!((jd.to_f64() - 2449534.49999).abs() < 1e-6);
        assert_eq!(jd.jd1, 2449533.5);
        assert_eq!(warning.status(), 0);
    }

    #[test]
    fn test_same_instant_outside_utc_rolls_over() {
        let fields = format_datetime(TimeScale::TT, 5, 2400000.5, 49533.99999).unwrap();
        assert_eq!((fields.year, fields.month, fields.day), (1994, 6, 30));
        assert_eq!(fields.time, [23, 59, 59, 13600]);

        // 86399.999136 s is still 23:59:59.999 at millisecond resolution.
        let fields = format_datetime(TimeScale::TAI, 3, 2400000.5, 50123.99999999).unwrap();
        assert_eq!((fields.year, fields.month, fields.day), (1996, 2, 10));
        assert_eq!(fields.time, [23, 59, 59, 999]);

        let fields = format_datetime(TimeScale::TAI, 3, 2400000.5, 50123.9999999999).unwrap();
        assert_eq!((fields.year, fields.month, fields.day), (1996, 2, 11));
        assert_eq!(fields.time, [0, 0, 0, 0]);
    }

    #[test]
    fn test_format_j2000() {
        let fields = format_datetime(TimeScale::TT, 3, 2451545.0, 0.0).unwrap();
        assert_eq!(fields.to_string(), "2000-01-01T12:00:00.000");

        let coarse = format_datetime(TimeScale::TT, 0, 2451545.0, 0.25).unwrap();
        assert_eq!(coarse.to_string(), "2000-01-01T18:00:00");
    }

    #[test]
    fn test_leap_second_round_trip() {
        let (jd, _) = parse_datetime_fields(TimeScale::UTC, 2016, 12, 31, 23, 59, 60.5).unwrap();
        let fields = format_datetime(TimeScale::UTC, 4, jd.jd1, jd.jd2).unwrap();
        assert_eq!((fields.year, fields.month, fields.day), (2016, 12, 31));
        assert_eq!(fields.time, [23, 59, 60, 5000]);
    }

    #[test]
    fn test_second_overflow_warning() {
        // No leap second at the end of this UTC day.
        let (_, warning) =
            parse_datetime_fields(TimeScale::UTC, 2016, 6, 30, 23, 59, 60.5).unwrap();
        assert!(warning.second_overflow);
        assert_eq!(warning.status(), 2);

        // Leap-second day: the last minute has 61 seconds.
        let (_, warning) =
            parse_datetime_fields(TimeScale::UTC, 2016, 12, 31, 23, 59, 60.5).unwrap();
        assert!(!warning.second_overflow);

        // Other scales never have a 61st second, but the value is still computed.
        let (jd, warning) =
            parse_datetime_fields(TimeScale::TT, 2016, 12, 31, 23, 59, 60.0).unwrap();
        assert!(warning.second_overflow);
        assert_eq!(jd.jd2, 1.0);
    }

    #[test]
    fn test_dubious_year_warning() {
        let (_, warning) = parse_datetime_fields(TimeScale::UTC, 2035, 1, 1, 0, 0, 60.0).unwrap();
        assert!(warning.dubious_year);
        assert!(warning.second_overflow);
        assert_eq!(warning.status(), 3);

        let fields = format_datetime(TimeScale::UTC, 0, 2464329.5, 0.0).unwrap();
        assert_eq!(fields.status(), 1);
    }

    #[test]
    fn test_parse_errors() {
        let parse = |h, m, s| parse_datetime_fields(TimeScale::TAI, 2000, 1, 1, h, m, s);
        assert_eq!(parse(24, 0, 0.0).unwrap_err().status_code(), -4);
        assert_eq!(parse(-1, 0, 0.0).unwrap_err().status_code(), -4);
        assert_eq!(parse(12, 60, 0.0).unwrap_err().status_code(), -5);
        assert_eq!(parse(12, 0, -0.5).unwrap_err().status_code(), -6);

        let bad_month = parse_datetime_fields(TimeScale::TAI, 2000, 13, 1, 0, 0, 0.0);
        assert_eq!(bad_month.unwrap_err().status_code(), -2);
        let bad_day = parse_datetime_fields(TimeScale::TAI, 2001, 2, 29, 0, 0, 0.0);
        assert_eq!(bad_day.unwrap_err().status_code(), -3);
    }

    #[test]
    fn test_utc_outside_leap_second_table() {
        assert!(parse_datetime_fields(TimeScale::UTC, 1950, 1, 1, 0, 0, 0.0).is_err());
        assert!(format_datetime(TimeScale::UTC, 3, 2433282.5, 0.0).is_err());
        assert!(format_datetime(TimeScale::TT, 3, 2433282.5, 0.0).is_ok());
    }
}
