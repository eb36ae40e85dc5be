// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::f64::consts::TAU;

/// Decimal places used by [`round`] when callers have no stronger opinion.
pub const DEFAULT_ROUND_SCALE: i32 = 5;

/// Converts radians to degrees.
pub fn degrees(radians: f64) -> f64 {
    radians * (360.0 / TAU)
}

/// Converts degrees to radians.
pub fn radians(degrees: f64) -> f64 {
    degrees * (TAU / 360.0)
}

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Rounds `value` to `scale` decimal places.
///
/// Computed as `round(value * 10^scale) / 10^scale`; halves round away from
/// zero.
pub fn round(value: f64, scale: i32) -> f64 {
    let factor = 10f64.powi(scale);
    (value * factor).round() / factor
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn degree_radian_conversion_is_inverse() {
        assert!((radians(180.0) - PI).abs() < 1e-12);
        assert!((degrees(FRAC_PI_2) - 90.0).abs() < 1e-12);
        for v in [-720.0, -33.3, 0.0, 12.5, 359.0] {
            assert!((degrees(radians(v)) - v).abs() < 1e-9, "{v}");
        }
    }

    #[test]
    fn clamp_limits_both_sides() {
        assert_eq!(clamp(1.5, -1.0, 1.0), 1.0);
        assert_eq!(clamp(-1.5, -1.0, 1.0), -1.0);
        assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
    }

    #[test]
    #[should_panic(expected = "invalid clamp range")]
    fn clamp_rejects_inverted_range() {
        let _ = clamp(0.0, 1.0, -1.0);
    }

    #[test]
    fn round_scales_to_decimal_places() {
        assert_eq!(round(PI, 4), 3.1416);
        assert_eq!(round(PI, DEFAULT_ROUND_SCALE), 3.14159);
        assert_eq!(round(radians(179.99999), 4), 3.1416);
        assert_eq!(round(2.5, 0), 3.0);
        assert_eq!(round(-2.5, 0), -3.0);
    }
}
