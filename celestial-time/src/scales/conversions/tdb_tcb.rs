//! TDB ↔ TCB.
//!
//! TDB is TCB rescaled so that it keeps pace with TT on average (IAU 2006
//! Resolution B3):
//!
//! ```text
//! TDB = TCB − L_B × (JD_TCB − T0) × 86400 s + TDB₀
//! ```
//!
//! with L_B = 1.550519768e-8, TDB₀ = −6.55e-5 s and T0 = 1977 January 1.0 TAI.
//! TCB runs ahead of TDB by about 0.49 s per year.

use super::{TcbToTdb, TdbToTcb};
use crate::constants::{L_B, SECONDS_TO_DAYS, TAI_1977_JD, TDB0_SECONDS, TT_1977_OFFSET_DAYS};
use crate::julian::JulianDate;
use crate::scales::{TCB, TDB};
use crate::TimeResult;

/// L_B / (1 − L_B).
const TDB_TO_TCB_RATE: f64 = L_B / (1.0 - L_B);

const TDB0_DAYS: f64 = TDB0_SECONDS * SECONDS_TO_DAYS;

impl TcbToTdb for TCB {
    fn to_tdb(&self) -> TimeResult<TDB> {
        Ok(tcb_to_tdb(self.to_julian_date()))
    }
}

impl TdbToTcb for TDB {
    fn to_tcb(&self) -> TimeResult<TCB> {
        Ok(tdb_to_tcb(self.to_julian_date()))
    }
}

pub fn tcb_to_tdb(tcb: JulianDate) -> TDB {
    let (tdb1, tdb2) = if libm::fabs(tcb.jd1) > libm::fabs(tcb.jd2) {
        let d = tcb.jd1 - TAI_1977_JD;
        (
            tcb.jd1,
            tcb.jd2 + TDB0_DAYS - (d + (tcb.jd2 - TT_1977_OFFSET_DAYS)) * L_B,
        )
    } else {
        let d = tcb.jd2 - TAI_1977_JD;
        (
            tcb.jd1 + TDB0_DAYS - (d + (tcb.jd1 - TT_1977_OFFSET_DAYS)) * L_B,
            tcb.jd2,
        )
    };
    TDB::from_julian_date(JulianDate::new(tdb1, tdb2))
}

pub fn tdb_to_tcb(tdb: JulianDate) -> TCB {
    let (tcb1, tcb2) = if libm::fabs(tdb.jd1) > libm::fabs(tdb.jd2) {
        let d = TAI_1977_JD - tdb.jd1;
        let f = tdb.jd2 - TDB0_DAYS;
        (tdb.jd1, f - (d - (f - TT_1977_OFFSET_DAYS)) * TDB_TO_TCB_RATE)
    } else {
        let d = TAI_1977_JD - tdb.jd2;
        let f = tdb.jd1 - TDB0_DAYS;
        (f - (d - (f - TT_1977_OFFSET_DAYS)) * TDB_TO_TCB_RATE, tdb.jd2)
    };
    TCB::from_julian_date(JulianDate::new(tcb1, tcb2))
}
