/// Rotation matrix from ICRS to galactic coordinates.
///
/// The galactic frame is defined in the FK5 system by the IAU 1958 north
/// galactic pole (RA 192.25°, Dec 27.4° in B1950, transformed to J2000) and
/// longitude of the ascending node on the equator (l = 33°). The FK5 to
/// Hipparcos rotation makes the matrix refer to the ICRS.
///
/// Reference: Hipparcos catalogue, ESA SP-1200 (1997), Vol. 1, Section 1.5.3.
#[allow(clippy::excessive_precision)]
pub const ICRS_TO_GALACTIC: [[f64; 3]; 3] = [
    [
        -0.054875560416215368492398900454,
        -0.873437090234885048760383168409,
        -0.483835015548713226831774175116,
    ],
    [
        0.494109427875583673525222371358,
        -0.444829629960011178146614061616,
        0.746982244497218890527388004556,
    ],
    [
        -0.867666149019004701181616534570,
        -0.198076373431201528180486091412,
        0.455983776175066922272100478348,
    ],
];

/// Cosine of the angle from the tangent point beyond which a projected star
/// is reported as too far from the axis.
pub const TANGENT_PLANE_MIN_COSINE: f64 = 1e-6;

/// Smallest parallax (arcsec) accepted when building a space motion.
pub const MIN_PARALLAX_ARCSEC: f64 = 1e-7;

/// Largest space speed, as a fraction of c, before the velocity is zeroed.
pub const MAX_SPEED_FRACTION_OF_C: f64 = 0.5;

/// Iteration cap for the relativistic inertial/observed velocity solution.
pub const MAX_RELATIVISTIC_ITERATIONS: usize = 100;

/// Parallax floor (arcsec) used by the guarded propagation.
pub const SAFE_MIN_PARALLAX_ARCSEC: f64 = 5e-7;

/// Parallax per radian/year of proper motion that keeps the transverse
/// speed near 1% of c.
pub const SAFE_PARALLAX_PER_PROPER_MOTION: f64 = 326.0;
