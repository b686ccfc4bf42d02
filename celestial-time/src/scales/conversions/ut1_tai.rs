//! UT1 ↔ TAI and UT1 ↔ TT.
//!
//! UT1 follows the Earth's rotation, so its offset from the atomic scales
//! is measured, not computed. IERS publishes it as UT1−TAI (or via DUT1 and
//! the leap seconds); historical work uses ΔT = TT−UT1.
//!
//! ```text
//! UT1 ←(UT1−TAI)→ TAI
//! UT1 ←(ΔT)→ TT
//! ```

use super::{ToTAIWithOffset, ToUT1WithOffset};
use crate::julian::JulianDate;
use crate::scales::{TAI, TT, UT1};
use crate::TimeResult;
use celestial_core::constants::SECONDS_PER_DAY_F64;

/// UT1 → TT given ΔT = TT−UT1 in seconds.
pub trait ToTTWithDeltaT {
    fn to_tt_with_delta_t(&self, delta_t_seconds: f64) -> TimeResult<TT>;
}

/// TT → UT1 given ΔT = TT−UT1 in seconds.
pub trait ToUT1WithDeltaT {
    fn to_ut1_with_delta_t(&self, delta_t_seconds: f64) -> TimeResult<UT1>;
}

pub fn tai_to_ut1(tai: JulianDate, ut1_minus_tai_seconds: f64) -> UT1 {
    UT1::from_julian_date(tai.add_days(ut1_minus_tai_seconds / SECONDS_PER_DAY_F64))
}

pub fn ut1_to_tai(ut1: JulianDate, ut1_minus_tai_seconds: f64) -> TAI {
    TAI::from_julian_date(ut1.add_days(-ut1_minus_tai_seconds / SECONDS_PER_DAY_F64))
}

impl ToUT1WithOffset for TAI {
    fn to_ut1_with_offset(&self, ut1_minus_tai_seconds: f64) -> TimeResult<UT1> {
        Ok(tai_to_ut1(self.to_julian_date(), ut1_minus_tai_seconds))
    }
}

impl ToTAIWithOffset for UT1 {
    fn to_tai_with_offset(&self, ut1_minus_tai_seconds: f64) -> TimeResult<TAI> {
        Ok(ut1_to_tai(self.to_julian_date(), ut1_minus_tai_seconds))
    }
}

impl ToTTWithDeltaT for UT1 {
    fn to_tt_with_delta_t(&self, delta_t_seconds: f64) -> TimeResult<TT> {
        Ok(TT::from_julian_date(
            self.to_julian_date()
                .add_days(delta_t_seconds / SECONDS_PER_DAY_F64),
        ))
    }
}

impl ToUT1WithDeltaT for TT {
    fn to_ut1_with_delta_t(&self, delta_t_seconds: f64) -> TimeResult<UT1> {
        Ok(UT1::from_julian_date(
            self.to_julian_date()
                .add_days(-delta_t_seconds / SECONDS_PER_DAY_F64),
        ))
    }
}
