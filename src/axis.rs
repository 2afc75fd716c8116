//! Axis calibration and range mapping.
//!
//! Raw absolute axes arrive in whatever range the hardware advertises
//! (`get_absinfo` minimum/maximum). The host consumes one fixed signed range,
//! so every sample is remapped through [`normalize_absolute`] before it lands
//! in device state.
//!
//! Both mapping functions are pure integer arithmetic: endpoints map exactly,
//! out-of-range input is clamped, and the mapping is monotonic non-decreasing.

/// Lower bound of the host coordinate range.
pub const ABSOLUTE_MIN: i32 = -65_536;

/// Upper bound of the host coordinate range.
pub const ABSOLUTE_MAX: i32 = 65_536;

/// Remap `raw` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// `raw` is clamped into the input range first. Rounds to nearest, so
/// `in_min` maps exactly to `out_min` and `in_max` exactly to `out_max`.
/// A degenerate input range (`in_min >= in_max`) collapses to `out_min`.
pub fn rescale(raw: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_min >= in_max {
        return out_min;
    }

    let clamped = raw.clamp(in_min, in_max);
    let offset = (clamped - in_min) as i64;
    let in_span = (in_max - in_min) as i64;
    let out_span = (out_max - out_min) as i64;

    let scaled = (offset * out_span + in_span / 2) / in_span;
    out_min + scaled as i32
}

/// Map a raw absolute-axis sample onto the host range.
///
/// `min`/`max` are the calibration bounds captured at activation.
#[inline]
pub fn normalize_absolute(raw: i32, min: i32, max: i32) -> i32 {
    rescale(raw, min, max, ABSOLUTE_MIN, ABSOLUTE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_exactly() {
        assert_eq!(rescale(0, 0, 1023, 0, 255), 0);
        assert_eq!(rescale(1023, 0, 1023, 0, 255), 255);
    }

    #[test]
    fn midpoint_rounds_to_nearest() {
        // 512/1023 * 255 = 127.65..., nearest is 128.
        assert_eq!(rescale(512, 0, 1023, 0, 255), 128);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(rescale(-50, 0, 1023, 0, 255), 0);
        assert_eq!(rescale(5000, 0, 1023, 0, 255), 255);
    }

    #[test]
    fn monotonic_over_full_sweep() {
        let mut prev = rescale(0, 0, 1023, 0, 255);
        for raw in 1..=1023 {
            let cur = rescale(raw, 0, 1023, 0, 255);
            assert!(cur >= prev, "raw={raw} {cur} < {prev}");
            prev = cur;
        }
    }

    #[test]
    fn degenerate_range_collapses_to_out_min() {
        assert_eq!(rescale(7, 5, 5, 0, 255), 0);
        assert_eq!(rescale(7, 9, 5, 0, 255), 0);
    }

    #[test]
    fn normalize_absolute_hits_host_endpoints() {
        assert_eq!(normalize_absolute(0, 0, 255), ABSOLUTE_MIN);
        assert_eq!(normalize_absolute(255, 0, 255), ABSOLUTE_MAX);
        assert_eq!(normalize_absolute(-32768, -32768, 32767), ABSOLUTE_MIN);
        assert_eq!(normalize_absolute(32767, -32768, 32767), ABSOLUTE_MAX);
    }

    #[test]
    fn normalize_absolute_center_is_near_zero() {
        let mid = normalize_absolute(128, 0, 256);
        assert_eq!(mid, 0);
    }
}
