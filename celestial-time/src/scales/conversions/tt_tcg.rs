//! TT ↔ TCG.
//!
//! TCG is the proper time of a clock at the geocenter without the Earth's
//! potential; TT is that clock's time on the geoid. They differ by the
//! defined rate L_G and agree at 1977 January 1.0 TAI:
//!
//! ```text
//! TCG − TT = L_G × (JD_TT − T0)    (T0 = MJD 43144.0003725 TT)
//! ```
//!
//! TCG gains about 22 ms a year on TT.

use super::{ToTCG, ToTT};
use crate::constants::{L_G, TT_1977_MJD};
use crate::julian::JulianDate;
use crate::scales::{TCG, TT};
use crate::TimeResult;
use celestial_core::constants::MJD_ZERO_POINT;

/// L_G / (1 − L_G), the rate of TCG − TT per day of TT.
const TT_TO_TCG_RATE: f64 = L_G / (1.0 - L_G);

impl ToTCG for TT {
    fn to_tcg(&self) -> TimeResult<TCG> {
        Ok(tt_to_tcg(self.to_julian_date()))
    }
}

impl ToTT for TCG {
    fn to_tt(&self) -> TimeResult<TT> {
        Ok(tcg_to_tt(self.to_julian_date()))
    }
}

impl ToTCG for TCG {
    fn to_tcg(&self) -> TimeResult<TCG> {
        Ok(*self)
    }
}

pub fn tt_to_tcg(tt: JulianDate) -> TCG {
    let (tcg1, tcg2) = if libm::fabs(tt.jd1) > libm::fabs(tt.jd2) {
        let correction = ((tt.jd1 - MJD_ZERO_POINT) + (tt.jd2 - TT_1977_MJD)) * TT_TO_TCG_RATE;
        (tt.jd1, tt.jd2 + correction)
    } else {
        let correction = ((tt.jd2 - MJD_ZERO_POINT) + (tt.jd1 - TT_1977_MJD)) * TT_TO_TCG_RATE;
        (tt.jd1 + correction, tt.jd2)
    };
    TCG::from_julian_date(JulianDate::new(tcg1, tcg2))
}

pub fn tcg_to_tt(tcg: JulianDate) -> TT {
    let (tt1, tt2) = if libm::fabs(tcg.jd1) > libm::fabs(tcg.jd2) {
        let correction = ((tcg.jd1 - MJD_ZERO_POINT) + (tcg.jd2 - TT_1977_MJD)) * L_G;
        (tcg.jd1, tcg.jd2 - correction)
    } else {
        let correction = ((tcg.jd2 - MJD_ZERO_POINT) + (tcg.jd1 - TT_1977_MJD)) * L_G;
        (tcg.jd1 - correction, tcg.jd2)
    };
    TT::from_julian_date(JulianDate::new(tt1, tt2))
}
