//! TT ↔ TDB.
//!
//! TDB−TT is periodic, under 1.7 ms, dominated by the eccentricity of the
//! Earth's orbit (the 1656.7 µs annual term), plus diurnal terms of a couple
//! of microseconds that depend on where the clock is on the Earth.
//!
//! The conversions take TDB−TT either as an explicit number of seconds (from
//! an ephemeris, say) or estimate it with [`tdb_minus_tt`] for an observer
//! [`Location`].
//!
//! [`tdb_minus_tt`] carries the largest terms of the Fairhead & Bretagnon
//! (1990) series: the 20 leading periodic terms, the 2 leading T¹ terms, the
//! planetary corrections to the JPL ephemeris, and the topocentric terms.
//! Against the full 787-term series it is good to a few tens of nanoseconds
//! near the present epoch.

use super::{ToTDB, ToTTFromTDB};
use crate::julian::JulianDate;
use crate::scales::{TDB, TT};
use crate::TimeResult;
use celestial_core::constants::{DEG_TO_RAD, SECONDS_PER_DAY_F64, TWOPI};
use celestial_core::math::fmod;
use celestial_core::utils::jd_to_millennia;
use celestial_core::Location;

const TDB_TO_TT_ITERATIONS: usize = 3;

/// Periodic terms `(amplitude s, frequency rad/millennium, phase rad)`, T⁰.
const TERMS_T0: [(f64, f64, f64); 20] = [
    (1656.674564e-6, 6283.075849991, 6.240054195),
    (22.417471e-6, 5753.384884897, 4.296977442),
    (13.839792e-6, 12566.151699983, 6.196904410),
    (4.770086e-6, 529.690965095, 0.444401603),
    (4.676740e-6, 6069.776754553, 4.021195093),
    (2.256707e-6, 213.299095438, 5.543113262),
    (1.694205e-6, -3.523118349, 5.025132748),
    (1.554905e-6, 77713.771467920, 5.198467090),
    (1.276839e-6, 7860.419392439, 5.988822341),
    (1.193379e-6, 5223.693919802, 3.649823730),
    (1.115322e-6, 3930.209696220, 1.422745069),
    (0.794185e-6, 11506.769769794, 2.322313077),
    (0.447061e-6, 26.298319800, 3.615796498),
    (0.435206e-6, -398.149003408, 4.349338347),
    (0.600309e-6, 1577.343542448, 2.678271909),
    (0.496817e-6, 6208.294251424, 5.696701824),
    (0.486306e-6, 5884.926846583, 0.520007179),
    (0.432392e-6, 74.781598567, 2.435898309),
    (0.468597e-6, 6244.942814354, 5.866398759),
    (0.375510e-6, 5507.553238667, 4.103476804),
];

/// Periodic terms multiplied by T.
const TERMS_T1: [(f64, f64, f64); 2] = [
    (102.156724e-6, 6283.075849991, 4.249032005),
    (1.706807e-6, 12566.151699983, 4.205904248),
];

fn sum_terms(terms: &[(f64, f64, f64)], t: f64) -> f64 {
    // Smallest terms first.
    terms
        .iter()
        .rev()
        .map(|&(amplitude, frequency, phase)| amplitude * libm::sin(frequency * t + phase))
        .sum()
}

/// TDB − TT in seconds, for an observer on the Earth.
///
/// - `date1 + date2`: TDB as a two-part Julian Date (TT is as good)
/// - `ut`: UT1 as a fraction of the day since midnight
/// - `elong`: east longitude, radians
/// - `u`: distance from the Earth's spin axis, km
/// - `v`: distance north of the equatorial plane, km
///
/// With `u = v = 0` the result is the geocentric value.
///
/// ```
/// use celestial_time::scales::conversions::tdb_minus_tt;
///
/// let dtr = tdb_minus_tt(2448939.5, 0.123, 0.76543, 5.0123, 5525.242, 3190.0);
/// assert!((dtr + 0.0012803680).abs() < 1e-7);
/// ```
pub fn tdb_minus_tt(date1: f64, date2: f64, ut: f64, elong: f64, u: f64, v: f64) -> f64 {
    let t = jd_to_millennia(date1, date2);

    // Local solar time, and fundamental arguments in degrees per `w`.
    let tsol = fmod(ut, 1.0) * TWOPI + elong;
    let w = t / 3600.0;
    let elsun = fmod(280.46645683 + 1296027711.03429 * w, 360.0) * DEG_TO_RAD;
    let emsun = fmod(357.52910918 + 1295965810.481 * w, 360.0) * DEG_TO_RAD;
    let d = fmod(297.85019547 + 16029616012.090 * w, 360.0) * DEG_TO_RAD;
    let elj = fmod(34.35151874 + 109306899.89453 * w, 360.0) * DEG_TO_RAD;
    let els = fmod(50.07744430 + 44046398.47038 * w, 360.0) * DEG_TO_RAD;

    let topocentric = 0.00029e-10 * u * libm::sin(tsol + elsun - els)
        + 0.00100e-10 * u * libm::sin(tsol - 2.0 * emsun)
        + 0.00133e-10 * u * libm::sin(tsol - d)
        + 0.00133e-10 * u * libm::sin(tsol + elsun - elj)
        - 0.00229e-10 * u * libm::sin(tsol + 2.0 * elsun + emsun)
        - 0.02200e-10 * v * libm::cos(elsun + emsun)
        + 0.05312e-10 * u * libm::sin(tsol - emsun)
        - 0.13677e-10 * u * libm::sin(tsol + 2.0 * elsun)
        - 1.31840e-10 * v * libm::cos(elsun)
        + 3.17679e-10 * u * libm::sin(tsol);

    let series = t * sum_terms(&TERMS_T1, t) + sum_terms(&TERMS_T0, t);

    // Adjustments to match the JPL DE405 ephemeris.
    let jpl = 0.00065e-6 * libm::sin(6069.776754 * t + 4.021194)
        + 0.00033e-6 * libm::sin(213.299095 * t + 5.543132)
        - 0.00196e-6 * libm::sin(6208.294251 * t + 5.696701)
        - 0.00173e-6 * libm::sin(74.781599 * t + 2.435900)
        + 0.03638e-6 * t * t;

    topocentric + series + jpl
}

/// Fraction of the day since midnight, shifted by `offset_seconds`.
fn day_fraction(jd: JulianDate, offset_seconds: f64) -> f64 {
    let from_midnight = jd.jd1 - 0.5;
    let f1 = from_midnight - libm::floor(from_midnight);
    let f2 = jd.jd2 - libm::floor(jd.jd2);
    let fraction = f1 + f2 + offset_seconds / SECONDS_PER_DAY_F64;
    fraction - libm::floor(fraction)
}

fn estimate_for_location(
    jd: JulianDate,
    location: &Location,
    ut1_minus_tt_seconds: f64,
) -> TimeResult<f64> {
    let (u, v) = location.to_geocentric_km()?;
    let ut = day_fraction(jd, ut1_minus_tt_seconds);
    Ok(tdb_minus_tt(jd.jd1, jd.jd2, ut, location.longitude, u, v))
}

pub fn tt_to_tdb(tt: JulianDate, tdb_minus_tt_seconds: f64) -> TDB {
    TDB::from_julian_date(tt.add_days(tdb_minus_tt_seconds / SECONDS_PER_DAY_F64))
}

pub fn tdb_to_tt(tdb: JulianDate, tdb_minus_tt_seconds: f64) -> TT {
    TT::from_julian_date(tdb.add_days(-tdb_minus_tt_seconds / SECONDS_PER_DAY_F64))
}

impl ToTDB for TT {
    fn to_tdb_with_offset(&self, tdb_minus_tt_seconds: f64) -> TimeResult<TDB> {
        Ok(tt_to_tdb(self.to_julian_date(), tdb_minus_tt_seconds))
    }

    fn to_tdb_with_location_and_ut1_offset(
        &self,
        location: &Location,
        ut1_minus_tt_seconds: f64,
    ) -> TimeResult<TDB> {
        let dtr = estimate_for_location(self.to_julian_date(), location, ut1_minus_tt_seconds)?;
        self.to_tdb_with_offset(dtr)
    }
}

impl ToTTFromTDB for TDB {
    fn to_tt_with_offset(&self, tdb_minus_tt_seconds: f64) -> TimeResult<TT> {
        Ok(tdb_to_tt(self.to_julian_date(), tdb_minus_tt_seconds))
    }

    /// TDB−TT is evaluated at the TT date, which is only known once TDB−TT
    /// is; the estimate is refined from TDB over a few passes.
    fn to_tt_with_location_and_ut1_offset(
        &self,
        location: &Location,
        ut1_minus_tt_seconds: f64,
    ) -> TimeResult<TT> {
        let tdb = self.to_julian_date();
        let mut tt = tdb;
        for _ in 0..TDB_TO_TT_ITERATIONS {
            let dtr = estimate_for_location(tt, location, ut1_minus_tt_seconds)?;
            tt = tdb_to_tt(tdb, dtr).to_julian_date();
        }
        Ok(TT::from_julian_date(tt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::J2000_JD;
    use celestial_core::test_helpers::assert_close;

    #[test]
    fn test_tdb_minus_tt_reference() {
        let dtr = tdb_minus_tt(2448939.5, 0.123, 0.76543, 5.0123, 5525.242, 3190.0);
        assert_close(dtr, -0.1280368005936998991e-2, 5e-8, "dtdb");
    }

    #[test]
    fn test_tdb_minus_tt_is_bounded() {
        for k in 0..40 {
            let dtr = tdb_minus_tt(J2000_JD, k as f64 * 91.3, 0.0, 0.0, 0.0, 0.0);
            assert!(dtr.abs() < 1.75e-3, "TDB-TT = {} s", dtr);
        }
    }

    #[test]
    fn test_tt_to_tdb_reference() {
        let tdb = TT::from_julian_date_raw(2453750.5, 0.892855139)
            .to_tdb_with_offset(-0.000201)
            .unwrap();
        assert_eq!(tdb.to_julian_date().jd1, 2453750.5);
        assert_close(tdb.to_julian_date().jd2, 0.8928551366736111111, 1e-12, "tdb2");
    }

    #[test]
    fn test_tdb_to_tt_reference() {
        let tt = TDB::from_julian_date_raw(2453750.5, 0.892855137)
            .to_tt_with_offset(-0.000201)
            .unwrap();
        assert_eq!(tt.to_julian_date().jd1, 2453750.5);
        assert_close(tt.to_julian_date().jd2, 0.8928551393263888889, 1e-12, "tt2");
    }

    #[test]
    fn test_location_round_trip() {
        let site = Location::from_degrees(19.8283, -155.4783, 4160.0).unwrap();
        let tt = TT::from_julian_date_raw(J2000_JD, 1234.567);

        let tdb = tt.to_tdb_with_location(&site).unwrap();
        let back = tdb.to_tt_with_location(&site).unwrap().to_julian_date();
        assert_eq!(back.jd1, J2000_JD);
        assert_close(back.jd2, 1234.567, 1e-12, "TT round trip");

        let shift = (tdb.to_julian_date().jd2 - 1234.567) * SECONDS_PER_DAY_F64;
        assert!(shift.abs() < 1.75e-3);
    }

    #[test]
    fn test_greenwich_defaults() {
        let tt = TT::j2000();
        let greenwich = tt.to_tdb_greenwich().unwrap();
        let explicit = tt.to_tdb_with_location(&Location::greenwich()).unwrap();
        assert_eq!(greenwich, explicit);

        let back = greenwich.to_tt_greenwich().unwrap().to_julian_date();
        assert_close(back.jd2, 0.0, 1e-15, "Greenwich round trip");
    }

    #[test]
    fn test_topocentric_terms_are_small() {
        let geocentric = tdb_minus_tt(J2000_JD, 0.0, 0.3, 0.0, 0.0, 0.0);
        let surface = tdb_minus_tt(J2000_JD, 0.0, 0.3, 0.0, 6378.0, 0.0);
        let diurnal = surface - geocentric;
        assert!(diurnal.abs() > 0.0 && diurnal.abs() < 2.2e-6);
    }

    #[test]
    fn test_day_fraction_from_midnight() {
        assert_close(day_fraction(JulianDate::new(J2000_JD, 0.0), 0.0), 0.5, 1e-15, "noon");
        assert_close(day_fraction(JulianDate::new(0.25, J2000_JD), 0.0), 0.75, 1e-15, "18h");
        assert_close(day_fraction(JulianDate::new(2400000.5, 0.1), -8640.0), 0.0, 1e-12, "shift");
    }
}
