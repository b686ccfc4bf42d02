//! Mean obliquity of the ecliptic, εA.
//!
//! | Function | Model | ε at J2000.0 | Degree in T |
//! |----------|-------|--------------|-------------|
//! | [`iau_2006_mean_obliquity`] | IAU 2006 (P03) | 84381.406″ | 5 |
//! | [`iau_1980_mean_obliquity`] | IAU 1980 (Lieske 1977) | 84381.448″ | 3 |
//!
//! The argument is a two-part TT Julian Date. The true obliquity adds the
//! nutation in obliquity, [`NutationResult::delta_eps`](crate::nutation::NutationResult::delta_eps).
//!
//! ```
//! use celestial_core::obliquity::iau_2006_mean_obliquity;
//! use celestial_core::constants::J2000_JD;
//!
//! let eps = iau_2006_mean_obliquity(J2000_JD, 0.0);
//! assert!((eps.to_degrees() - 23.4392794).abs() < 1e-6);
//! ```

use crate::constants::ARCSEC_TO_RAD;
use crate::utils::jd_to_centuries;

/// Mean obliquity consistent with the IAU 2006 precession, radians.
pub fn iau_2006_mean_obliquity(date1: f64, date2: f64) -> f64 {
    let t = jd_to_centuries(date1, date2);

    let obliquity_arcsec = 84381.406
        + (-46.836769
            + (-0.0001831 + (0.00200340 + (-0.000000576 + (-0.0000000434) * t) * t) * t) * t)
            * t;

    obliquity_arcsec * ARCSEC_TO_RAD
}

/// Mean obliquity, IAU 1980 model, radians.
///
/// Still needed where IAU 1980 conventions apply, e.g. the IAU 2000B
/// equation of the equinoxes.
pub fn iau_1980_mean_obliquity(date1: f64, date2: f64) -> f64 {
    let t = jd_to_centuries(date1, date2);

    let obliquity_arcsec = 84381.448 + (-46.8150 + (-0.00059 + (0.001813) * t) * t) * t;

    obliquity_arcsec * ARCSEC_TO_RAD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::assert_ulp_le;

    #[test]
    fn test_iau_2006_reference() {
        let eps = iau_2006_mean_obliquity(2400000.5, 54388.0);
        assert_ulp_le(eps, 0.4090749229387258204, 4, "obl06");
    }

    #[test]
    fn test_iau_1980_reference() {
        let eps = iau_1980_mean_obliquity(2400000.5, 54388.0);
        assert_ulp_le(eps, 0.4090751347643816218, 4, "obl80");
    }

    #[test]
    fn test_models_agree_at_j2000() {
        let d = iau_1980_mean_obliquity(2451545.0, 0.0) - iau_2006_mean_obliquity(2451545.0, 0.0);
        assert!((d / ARCSEC_TO_RAD - 0.042).abs() < 1e-9);
    }
}
