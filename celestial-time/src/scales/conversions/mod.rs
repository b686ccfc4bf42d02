//! Conversions between time scales.
//!
//! Fixed relations need no extra input:
//!
//! - **TAI ↔ TT**: 32.184 s
//! - **TT ↔ TCG**: rate L_G = 6.969290134e-10
//! - **TDB ↔ TCB**: rate L_B = 1.550519768e-8 and offset TDB₀ = −6.55e-5 s
//! - **UTC ↔ TAI**: the leap-second table
//!
//! The rest depend on quantities that must be supplied:
//!
//! - **TAI ↔ UT1**: UT1−TAI ([`ToUT1WithOffset`], [`ToTAIWithOffset`])
//! - **TT ↔ UT1**: ΔT = TT−UT1 ([`ToTTWithDeltaT`], [`ToUT1WithDeltaT`])
//! - **UTC ↔ UT1**: DUT1 = UT1−UTC ([`ToUT1WithDUT1`], [`ToUTCWithDUT1`])
//! - **TT ↔ TDB**: TDB−TT, given directly or estimated for an observer
//!   location ([`ToTDB`], [`ToTTFromTDB`])
//!
//! ```
//! use celestial_time::{JulianDate, ToTAI, ToTT, ToUTC, UTC};
//!
//! let utc = UTC::from_julian_date(JulianDate::new(2453750.5, 0.892100694));
//! let tt = utc.to_tai().unwrap().to_tt().unwrap();
//! let utc_back = tt.to_tai().unwrap().to_utc().unwrap();
//! assert!((utc_back.to_julian_date().jd2 - 0.892100694).abs() < 1e-12);
//! ```
//!
//! Every conversion applies its offset to the smaller-magnitude part of the
//! two-part date, so either split (`J2000 + days`, `MJD zero point + MJD`,
//! `day + fraction`) keeps full precision.

pub mod tai_tt;
pub mod tdb_tcb;
pub mod tt_tcg;
pub mod tt_tdb;
pub mod ut1_tai;
pub mod utc_tai;
pub mod utc_ut1;

pub use tdb_tcb::{tcb_to_tdb, tdb_to_tcb};
pub use tt_tcg::{tcg_to_tt, tt_to_tcg};
pub use tt_tdb::{tdb_minus_tt, tdb_to_tt, tt_to_tdb};
pub use ut1_tai::{tai_to_ut1, ut1_to_tai, ToTTWithDeltaT, ToUT1WithDeltaT};
pub use utc_tai::{tai_to_utc, utc_to_tai};
pub use utc_ut1::{ut1_to_utc, utc_to_ut1};

use crate::scales::{TAI, TCB, TCG, TDB, TT, UT1, UTC};
use crate::TimeResult;
use celestial_core::Location;

pub trait ToTAI {
    fn to_tai(&self) -> TimeResult<TAI>;
}

pub trait ToTT {
    fn to_tt(&self) -> TimeResult<TT>;
}

pub trait ToUTC {
    fn to_utc(&self) -> TimeResult<UTC>;
}

pub trait ToTCG {
    fn to_tcg(&self) -> TimeResult<TCG>;
}

/// TAI → UT1 given UT1−TAI in seconds.
pub trait ToUT1WithOffset {
    fn to_ut1_with_offset(&self, ut1_minus_tai_seconds: f64) -> TimeResult<UT1>;
}

/// UT1 → TAI given UT1−TAI in seconds.
pub trait ToTAIWithOffset {
    fn to_tai_with_offset(&self, ut1_minus_tai_seconds: f64) -> TimeResult<TAI>;
}

/// UTC → UT1 given DUT1 = UT1−UTC in seconds.
pub trait ToUT1WithDUT1 {
    fn to_ut1_with_dut1(&self, dut1_seconds: f64) -> TimeResult<UT1>;
}

/// UT1 → UTC given DUT1 = UT1−UTC in seconds.
pub trait ToUTCWithDUT1 {
    fn to_utc_with_dut1(&self, dut1_seconds: f64) -> TimeResult<UTC>;
}

/// TT → TDB.
///
/// TDB−TT can be given directly (for instance from an ephemeris) or estimated
/// with [`tdb_minus_tt`] for an observer on the Earth.
pub trait ToTDB {
    fn to_tdb_with_offset(&self, tdb_minus_tt_seconds: f64) -> TimeResult<TDB>;

    /// Estimate for an observer at the Royal Observatory, Greenwich.
    fn to_tdb_greenwich(&self) -> TimeResult<TDB> {
        self.to_tdb_with_location(&Location::greenwich())
    }

    /// Estimate for an observer at `location`, taking UT1 ≈ TT.
    fn to_tdb_with_location(&self, location: &Location) -> TimeResult<TDB> {
        self.to_tdb_with_location_and_ut1_offset(location, 0.0)
    }

    /// Estimate for an observer at `location`, with UT1−TT in seconds for the
    /// diurnal terms.
    fn to_tdb_with_location_and_ut1_offset(
        &self,
        location: &Location,
        ut1_minus_tt_seconds: f64,
    ) -> TimeResult<TDB>;
}

/// TDB → TT, the inverse of [`ToTDB`].
pub trait ToTTFromTDB {
    fn to_tt_with_offset(&self, tdb_minus_tt_seconds: f64) -> TimeResult<TT>;

    fn to_tt_greenwich(&self) -> TimeResult<TT> {
        self.to_tt_with_location(&Location::greenwich())
    }

    fn to_tt_with_location(&self, location: &Location) -> TimeResult<TT> {
        self.to_tt_with_location_and_ut1_offset(location, 0.0)
    }

    fn to_tt_with_location_and_ut1_offset(
        &self,
        location: &Location,
        ut1_minus_tt_seconds: f64,
    ) -> TimeResult<TT>;
}

pub trait TcbToTdb {
    fn to_tdb(&self) -> TimeResult<TDB>;
}

pub trait TdbToTcb {
    fn to_tcb(&self) -> TimeResult<TCB>;
}
