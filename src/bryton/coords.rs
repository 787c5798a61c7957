//! Degree to fixed-point coordinate conversions

/// Fixed-point scale: the device stores coordinates in microdegrees
/// (degrees multiplied by one million, truncated).
pub const COORD_SCALE: f64 = 1_000_000.0;

/// Convert geographic degrees to the device's fixed-point representation.
///
/// The value is scaled by one million and truncated toward zero, discarding
/// any precision beyond six decimal digits. Valid latitudes and longitudes
/// always fit in an `i32`; implausible input saturates rather than wraps.
#[inline]
pub fn degrees_to_fixed(degrees: f64) -> i32 {
    (degrees * COORD_SCALE) as i32
}

/// Convert a fixed-point coordinate back to geographic degrees.
#[inline]
pub fn fixed_to_degrees(fixed: i32) -> f64 {
    f64::from(fixed) / COORD_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(degrees_to_fixed(51.507351), 51_507_351);
        assert_eq!(degrees_to_fixed(-0.127758), -127_758);
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(degrees_to_fixed(0.000_000_9), 0);
        assert_eq!(degrees_to_fixed(-0.000_000_9), 0);
        assert_eq!(degrees_to_fixed(1.234_567_89), 1_234_567);
        assert_eq!(degrees_to_fixed(-1.234_567_89), -1_234_567);
    }

    #[test]
    fn test_zero() {
        assert_eq!(degrees_to_fixed(0.0), 0);
    }

    #[test]
    fn test_extreme_coordinates_fit() {
        assert_eq!(degrees_to_fixed(89.999999), 89_999_999);
        assert_eq!(degrees_to_fixed(-179.999999), -179_999_999);
    }

    #[test]
    fn test_fixed_to_degrees_roundtrip() {
        for &degrees in &[51.507351, -0.127758, 0.0, 89.999999, -179.999999] {
            let fixed = degrees_to_fixed(degrees);
            assert_eq!(degrees_to_fixed(fixed_to_degrees(fixed)), fixed);
        }
    }
}
