//! The TAI−UTC (ΔAT) table.
//!
//! Since 1972 TAI−UTC has been a whole number of seconds, stepping by one at
//! the end of June or December when the IERS announces a leap second. From
//! 1960 to 1972 UTC ran at a slightly different rate from TAI and also had
//! fractional steps, so the first entries of the table carry a drift term:
//!
//! ```text
//! ΔAT = offset + (MJD + fd − mjd_ref) × rate
//! ```
//!
//! The builtin table stops at 2017 January 1 (37 s). Leap seconds are
//! announced about six months ahead, so a table says nothing reliable about
//! dates long after it was compiled; results more than
//! [`DUBIOUS_YEAR_MARGIN`] years past its validity year are flagged
//! [`dubious`](DeltaAt::dubious_year). A newer table can be supplied with
//! [`LeapSecondTable::new`] or [`LeapSecondTable::parse`].
//!
//! ```
//! use celestial_time::leap_seconds::dat;
//!
//! let delta = dat(2017, 9, 1, 0.0).unwrap();
//! assert_eq!(delta.seconds, 37.0);
//! assert!(!delta.dubious_year);
//! ```

use crate::calendar::calendar_to_jd;
use crate::constants::DUBIOUS_YEAR_MARGIN;
use crate::{TimeError, TimeResult};
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// TAI−UTC in seconds from the start of `year`-`month`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeapSecondEntry {
    pub year: i32,
    pub month: i32,
    pub offset: f64,
}

impl LeapSecondEntry {
    pub const fn new(year: i32, month: i32, offset: f64) -> Self {
        Self {
            year,
            month,
            offset,
        }
    }

    fn month_index(&self) -> i32 {
        12 * self.year + self.month
    }
}

const fn entry(year: i32, month: i32, offset: f64) -> LeapSecondEntry {
    LeapSecondEntry::new(year, month, offset)
}

const BUILTIN_VALIDITY_YEAR: i32 = 2023;

static BUILTIN_ENTRIES: [LeapSecondEntry; 42] = [
    entry(1960, 1, 1.4178180),
    entry(1961, 1, 1.4228180),
    entry(1961, 8, 1.3728180),
    entry(1962, 1, 1.8458580),
    entry(1963, 11, 1.9458580),
    entry(1964, 1, 3.2401300),
    entry(1964, 4, 3.3401300),
    entry(1964, 9, 3.4401300),
    entry(1965, 1, 3.5401300),
    entry(1965, 3, 3.6401300),
    entry(1965, 7, 3.7401300),
    entry(1965, 9, 3.8401300),
    entry(1966, 1, 4.3131700),
    entry(1968, 2, 4.2131700),
    entry(1972, 1, 10.0),
    entry(1972, 7, 11.0),
    entry(1973, 1, 12.0),
    entry(1974, 1, 13.0),
    entry(1975, 1, 14.0),
    entry(1976, 1, 15.0),
    entry(1977, 1, 16.0),
    entry(1978, 1, 17.0),
    entry(1979, 1, 18.0),
    entry(1980, 1, 19.0),
    entry(1981, 7, 20.0),
    entry(1982, 7, 21.0),
    entry(1983, 7, 22.0),
    entry(1985, 7, 23.0),
    entry(1988, 1, 24.0),
    entry(1990, 1, 25.0),
    entry(1991, 1, 26.0),
    entry(1992, 7, 27.0),
    entry(1993, 7, 28.0),
    entry(1994, 7, 29.0),
    entry(1996, 1, 30.0),
    entry(1997, 7, 31.0),
    entry(1999, 1, 32.0),
    entry(2006, 1, 33.0),
    entry(2009, 1, 34.0),
    entry(2012, 7, 35.0),
    entry(2015, 7, 36.0),
    entry(2017, 1, 37.0),
];

/// `(mjd_ref, rate)` for the pre-1972 entries, rate in seconds per day.
static BUILTIN_DRIFT: [(f64, f64); 14] = [
    (37300.0, 0.0012960),
    (37300.0, 0.0012960),
    (37300.0, 0.0012960),
    (37665.0, 0.0011232),
    (37665.0, 0.0011232),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (39126.0, 0.0025920),
    (39126.0, 0.0025920),
];

/// Result of a ΔAT lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaAt {
    /// TAI−UTC in seconds.
    pub seconds: f64,
    /// The date is too far past the table's validity year to trust.
    pub dubious_year: bool,
}

impl DeltaAt {
    /// Classic status: `1` for a dubious year, else `0`.
    pub fn status(&self) -> i32 {
        self.dubious_year as i32
    }
}

/// A chronological TAI−UTC table.
///
/// The first `drift.len()` entries have a drift term; `drift[i]` belongs to
/// `entries[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LeapSecondTable {
    entries: Cow<'static, [LeapSecondEntry]>,
    drift: Cow<'static, [(f64, f64)]>,
    validity_year: i32,
}

impl Default for LeapSecondTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LeapSecondTable {
    /// The compiled-in table (1960 January to 2017 January, 37 s).
    pub fn builtin() -> Self {
        Self {
            entries: Cow::Borrowed(&BUILTIN_ENTRIES),
            drift: Cow::Borrowed(&BUILTIN_DRIFT),
            validity_year: BUILTIN_VALIDITY_YEAR,
        }
    }

    /// A caller-supplied table.
    ///
    /// Entries must be non-empty and strictly chronological, months in 1..=12,
    /// and there cannot be more drift terms than entries.
    pub fn new(
        entries: Vec<LeapSecondEntry>,
        drift: Vec<(f64, f64)>,
        validity_year: i32,
    ) -> TimeResult<Self> {
        if entries.is_empty() {
            return Err(TimeError::ParseError("leap-second table is empty".into()));
        }
        if let Some(bad) = entries.iter().find(|e| !(1..=12).contains(&e.month)) {
            return Err(TimeError::ParseError(format!(
                "month {} of {} out of range",
                bad.month, bad.year
            )));
        }
        if let Some(pair) = entries
            .windows(2)
            .find(|pair| pair[1].month_index() <= pair[0].month_index())
        {
            return Err(TimeError::ParseError(format!(
                "entry {}-{:02} does not follow {}-{:02}",
                pair[1].year, pair[1].month, pair[0].year, pair[0].month
            )));
        }
        if drift.len() > entries.len() {
            return Err(TimeError::ParseError(format!(
                "{} drift terms for {} entries",
                drift.len(),
                entries.len()
            )));
        }

        Ok(Self {
            entries: Cow::Owned(entries),
            drift: Cow::Owned(drift),
            validity_year,
        })
    }

    /// Parses a table from text.
    ///
    /// One entry per line: `year month offset`, optionally followed by
    /// `mjd_ref rate` for drifting entries, which must all come first. Blank
    /// lines and anything after `#` are ignored. The validity year is the year
    /// of the last entry; use [`with_validity_year`](Self::with_validity_year)
    /// to set it explicitly.
    ///
    /// ```
    /// use celestial_time::leap_seconds::LeapSecondTable;
    ///
    /// let table = LeapSecondTable::parse("
    ///     ## year month TAI-UTC
    ///     2015 7 36
    ///     2017 1 37
    /// ").unwrap();
    /// assert_eq!(table.delta_at(2020, 1, 1, 0.0).unwrap().seconds, 37.0);
    /// ```
    pub fn parse(text: &str) -> TimeResult<Self> {
        let mut entries = Vec::new();
        let mut drift = Vec::new();

        for (number, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            let line_error = |what: &str| {
                TimeError::ParseError(format!("line {}: {}: '{}'", number + 1, what, line))
            };

            let (year, month, offset) = match fields.as_slice() {
                [y, m, o] | [y, m, o, _, _] => (
                    y.parse::<i32>().map_err(|_| line_error("bad year"))?,
                    m.parse::<i32>().map_err(|_| line_error("bad month"))?,
                    o.parse::<f64>().map_err(|_| line_error("bad offset"))?,
                ),
                _ => return Err(line_error("expected 3 or 5 fields")),
            };

            if let [_, _, _, mjd_ref, rate] = fields.as_slice() {
                if drift.len() != entries.len() {
                    return Err(line_error("drift terms must precede plain entries"));
                }
                drift.push((
                    mjd_ref.parse::<f64>().map_err(|_| line_error("bad drift reference"))?,
                    rate.parse::<f64>().map_err(|_| line_error("bad drift rate"))?,
                ));
            }
            entries.push(LeapSecondEntry::new(year, month, offset));
        }

        let validity_year = entries.last().map(|e| e.year).unwrap_or_default();
        let table = Self::new(entries, drift, validity_year)?;
        log::debug!(
            "parsed leap-second table: {} entries, {} with drift, valid to {}",
            table.entries.len(),
            table.drift.len(),
            table.validity_year
        );
        Ok(table)
    }

    pub fn with_validity_year(mut self, validity_year: i32) -> Self {
        self.validity_year = validity_year;
        self
    }

    pub fn entries(&self) -> &[LeapSecondEntry] {
        &self.entries
    }

    pub fn drift(&self) -> &[(f64, f64)] {
        &self.drift
    }

    pub fn validity_year(&self) -> i32 {
        self.validity_year
    }

    /// TAI−UTC for a UTC calendar date and day fraction.
    ///
    /// # Errors
    ///
    /// | Status | Cause |
    /// |--------|-------|
    /// | −1 | year before the table's first entry (or before −4799) |
    /// | −2 | month outside 1..=12 |
    /// | −3 | day outside the month |
    /// | −4 | `fd` outside [0, 1] |
    pub fn delta_at(&self, year: i32, month: i32, day: i32, fd: f64) -> TimeResult<DeltaAt> {
        if !(0.0..=1.0).contains(&fd) {
            return Err(TimeError::InvalidDayFraction(fd));
        }
        let (_, mjd) = calendar_to_jd(year, month, day)?;

        let target = 12 * year + month;
        let index = self
            .entries
            .iter()
            .rposition(|e| e.month_index() <= target)
            .ok_or_else(|| TimeError::InvalidYear {
                year,
                reason: "before the first leap-second table entry".into(),
            })?;

        let mut seconds = self.entries[index].offset;
        if let Some(&(mjd_ref, rate)) = self.drift.get(index) {
            seconds += (mjd + fd - mjd_ref) * rate;
        }

        let dubious_year = year > self.validity_year + DUBIOUS_YEAR_MARGIN;
        if dubious_year {
            log::warn!(
                "TAI-UTC for {} is beyond the leap-second table (valid to {})",
                year,
                self.validity_year
            );
        }

        Ok(DeltaAt {
            seconds,
            dubious_year,
        })
    }
}

/// TAI−UTC from the builtin table.
pub fn dat(year: i32, month: i32, day: i32, fd: f64) -> TimeResult<DeltaAt> {
    LeapSecondTable::builtin().delta_at(year, month, day, fd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::test_helpers::assert_close;

    #[test]
    fn test_dat_reference() {
        assert_eq!(dat(2003, 6, 1, 0.0).unwrap().seconds, 32.0);
        assert_eq!(dat(2008, 1, 17, 0.0).unwrap().seconds, 33.0);
        assert_eq!(dat(2015, 7, 1, 0.0).unwrap().seconds, 36.0);
        assert_eq!(dat(2017, 9, 1, 0.0).unwrap().seconds, 37.0);
    }

    #[test]
    fn test_dat_step_boundaries() {
        assert_eq!(dat(2016, 12, 31, 0.999).unwrap().seconds, 36.0);
        assert_eq!(dat(2017, 1, 1, 0.0).unwrap().seconds, 37.0);
        assert_eq!(dat(1972, 1, 1, 0.0).unwrap().seconds, 10.0);
    }

    #[test]
    fn test_dat_drift_era() {
        assert_close(dat(1965, 6, 1, 0.5).unwrap().seconds, 3.836474, 1e-9, "1965");
        assert_close(dat(1962, 3, 1, 0.0).unwrap().seconds, 1.9121268, 1e-9, "1962");
    }

    #[test]
    fn test_dat_errors() {
        assert_eq!(dat(1959, 12, 31, 0.0).unwrap_err().status_code(), -1);
        assert_eq!(dat(2000, 13, 1, 0.0).unwrap_err().status_code(), -2);
        assert_eq!(dat(2001, 2, 29, 0.0).unwrap_err().status_code(), -3);
        assert_eq!(dat(2000, 1, 1, 1.5).unwrap_err().status_code(), -4);
        assert_eq!(dat(2000, 1, 1, -0.1).unwrap_err().status_code(), -4);
        assert!(dat(2000, 1, 1, 1.0).is_ok());
    }

    #[test]
    fn test_dat_dubious_year() {
        let recent = dat(2028, 1, 1, 0.0).unwrap();
        assert!(!recent.dubious_year);
        assert_eq!(recent.status(), 0);

        let late = dat(2029, 1, 1, 0.0).unwrap();
        assert!(late.dubious_year);
        assert_eq!(late.status(), 1);
        assert_eq!(late.seconds, 37.0);
    }

    #[test]
    fn test_parse_matches_builtin() {
        let mut text = String::from("# TAI-UTC history\n\n");
        let builtin = LeapSecondTable::builtin();
        for (i, e) in builtin.entries().iter().enumerate() {
            match builtin.drift().get(i) {
                Some((mjd_ref, rate)) => text.push_str(&format!(
                    "{} {} {} {} {}\n",
                    e.year, e.month, e.offset, mjd_ref, rate
                )),
                None => text.push_str(&format!("{} {} {}  # step\n", e.year, e.month, e.offset)),
            }
        }
        let parsed = LeapSecondTable::parse(&text).unwrap().with_validity_year(2023);
        assert_eq!(parsed, builtin);
    }

    #[test]
    fn test_parse_skips_indented_comments() {
        let text = "
            # year month TAI-UTC
            2015 7 36   # 2015-06-30 leap second
            2017 1 37
        ";
        let table = LeapSecondTable::parse(text).unwrap();
        assert_eq!(table.entries().len(), 2);
        assert_eq!(table.validity_year(), 2017);
        assert_eq!(table.delta_at(2016, 1, 1, 0.0).unwrap().seconds, 36.0);
        assert_eq!(table.delta_at(2020, 1, 1, 0.0).unwrap().seconds, 37.0);
    }

    #[test]
    fn test_parse_rejects_malformed_tables() {
        assert!(LeapSecondTable::parse("").is_err());
        assert!(LeapSecondTable::parse("2017 1").is_err());
        assert!(LeapSecondTable::parse("2017 x 37").is_err());
        assert!(LeapSecondTable::parse("2017 1 37\n2015 7 36").is_err());
        assert!(LeapSecondTable::parse("2015 7 36\n2017 1 37 39126 0.002592").is_err());
        assert!(LeapSecondTable::parse("2017 13 37").is_err());
    }

    #[test]
    fn test_custom_table_validity() {
        let table =
            LeapSecondTable::new(vec![LeapSecondEntry::new(2017, 1, 37.0)], vec![], 2040)
                .unwrap();
        assert!(!table.delta_at(2044, 6, 1, 0.0).unwrap().dubious_year);
        assert!(table.delta_at(2046, 1, 1, 0.0).unwrap().dubious_year);
        assert_eq!(table.delta_at(2016, 12, 31, 0.0).unwrap_err().status_code(), -1);
    }
}
