//! Scalar helpers with the exact rounding semantics the published algorithms assume.

/// IEEE remainder with the sign of `x` (C `fmod`), not floored modulo.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Rounds to the nearest whole number, halfway cases away from zero.
#[inline]
pub fn round_half_away(a: f64) -> f64 {
    if a < 0.0 {
        libm::ceil(a - 0.5)
    } else {
        libm::floor(a + 0.5)
    }
}

/// Truncates toward zero.
#[inline]
pub fn trunc(a: f64) -> f64 {
    libm::trunc(a)
}

#[inline]
pub fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = libm::sincos(delta_lon);

    let num = libm::sqrt(
        (cos_lat2 * sin_delta_lon).powi(2)
            + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2),
    );
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(num, den)
}
