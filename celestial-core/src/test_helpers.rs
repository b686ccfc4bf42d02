//! Assertions shared by the unit tests of this workspace.
//!
//! Reference values are quoted to 16-19 significant digits, so the helpers
//! compare either in ULPs (bit-level agreement) or against an absolute
//! tolerance (values accumulated through a series or an iteration).

use crate::{RotationMatrix3, Vector3};

#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    let ua = f64_to_ordered_u64(a);
    let ub = f64_to_ordered_u64(b);
    ua.abs_diff(ub)
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}",
        ctx
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

#[track_caller]
pub fn assert_float_eq(a: f64, b: f64, max_ulp: u64) {
    assert_ulp_le(a, b, max_ulp, "assert_float_eq");
}

/// Absolute-tolerance comparison with a labelled message.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tol: f64, ctx: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{}: got {:.19e}, expected {:.19e} (diff {:.3e} > {:.1e})",
        ctx,
        actual,
        expected,
        (actual - expected).abs(),
        tol
    );
}

#[track_caller]
pub fn assert_vector_eq(actual: &Vector3, expected: &Vector3, tol: f64) {
    for i in 0..3 {
        assert_close(actual[i], expected[i], tol, &format!("component {}", i));
    }
}

#[track_caller]
pub fn assert_matrix_eq(actual: &RotationMatrix3, expected: &RotationMatrix3, tol: f64) {
    for i in 0..3 {
        for j in 0..3 {
            assert_close(
                actual.get(i, j),
                expected.get(i, j),
                tol,
                &format!("element ({}, {})", i, j),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ulp_diff_across_zero() {
        assert_eq!(ulp_diff(1.0, 1.0), 0);
        assert_eq!(ulp_diff(1.0, f64::from_bits(1.0f64.to_bits() + 1)), 1);
        assert_eq!(ulp_diff(-0.0, 0.0), 1);
    }

    #[test]
    #[should_panic(expected = "ULP=")]
    fn test_assert_ulp_le_rejects() {
        assert_ulp_le(1.0, 1.0 + 1e-10, 4, "ctx");
    }
}
