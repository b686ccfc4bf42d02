//! Defining constants of the time scales.

use celestial_core::constants::SECONDS_PER_DAY_F64;

/// Days in one SI second.
pub const SECONDS_TO_DAYS: f64 = 1.0 / SECONDS_PER_DAY_F64;

/// TT − TAI in seconds.
pub const TT_TAI_OFFSET_SECONDS: f64 = 32.184;

/// Rate of TCG relative to TT, L_G (IAU 2000 Resolution B1.9).
pub const L_G: f64 = 6.969290134e-10;

/// Rate of TCB relative to TDB, L_B (IAU 2006 Resolution B3).
pub const L_B: f64 = 1.550519768e-8;

/// TDB − TCB at the 1977 epoch, TDB₀, in seconds.
pub const TDB0_SECONDS: f64 = -6.55e-5;

/// 1977 January 1.0 TAI as a Julian Date, the epoch where TT, TCG and TCB agree.
pub const TAI_1977_JD: f64 = 2443144.5;

/// TT − TAI at the 1977 epoch, expressed in days (32.184 s).
pub const TT_1977_OFFSET_DAYS: f64 = 0.0003725;

/// 1977 January 1.0 TT as an MJD.
pub const TT_1977_MJD: f64 = 43144.0 + TT_1977_OFFSET_DAYS;

/// Years past a leap-second table's validity year before its predictions are
/// flagged dubious.
pub const DUBIOUS_YEAR_MARGIN: i32 = 5;

/// Earliest year accepted by the calendar routines.
pub const MIN_CALENDAR_YEAR: i32 = -4799;

/// Julian Date range accepted by [`crate::calendar::jd_to_calendar`].
pub const MIN_CALENDAR_JD: f64 = -68569.5;
pub const MAX_CALENDAR_JD: f64 = 1e9;
