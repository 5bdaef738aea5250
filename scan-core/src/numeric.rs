//! Numeric helpers for levels, sample counts and distances.

/// Mean Earth radius in metres used by [`haversine`].
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    #[error("level must be positive to convert to dB, got {0}")]
    NonPositiveLevel(f64),
}

/// Clamps `value` into `[minimum, maximum]`.
///
/// The bounds are not validated: when `minimum > maximum` the result is
/// `minimum`.
///
/// # Examples
/// ```rust
/// use scan_core::limit;
/// assert_eq!(limit(5, 0, 3), 3);
/// assert_eq!(limit(-1.5, 0.0, 3.0), 0.0);
/// ```
pub fn limit<T: PartialOrd>(value: T, minimum: T, maximum: T) -> T {
    let upper = if value < maximum { value } else { maximum };
    if upper > minimum {
        upper
    } else {
        minimum
    }
}

/// Converts a linear power level to decibels.
///
/// # Errors
/// Returns [`NumericError::NonPositiveLevel`] for zero, negative or NaN input.
pub fn level_to_db(level: f64) -> Result<f64, NumericError> {
    if level > 0.0 {
        Ok(10.0 * level.log10())
    } else {
        Err(NumericError::NonPositiveLevel(level))
    }
}

/// Converts decibels back to a linear power level.
pub fn db_to_level(db: f64) -> f64 {
    10f64.powf(db / 10.0)
}

/// Rounds `value` up to the next power of two.
///
/// Zero rounds up to one so a sample count is always a valid FFT size.
///
/// # Examples
/// ```rust
/// use scan_core::next_2_to_pow;
/// assert_eq!(next_2_to_pow(0), 1);
/// assert_eq!(next_2_to_pow(3), 4);
/// assert_eq!(next_2_to_pow(1025), 2048);
/// ```
pub fn next_2_to_pow(value: u32) -> u64 {
    if value <= 1 {
        return 1;
    }
    let mut val = u64::from(value) - 1;
    val |= val >> 1;
    val |= val >> 2;
    val |= val >> 4;
    val |= val >> 8;
    val |= val >> 16;
    val + 1
}

/// Number of samples captured for a dwell time, rounded up to a power of two.
///
/// Negative or NaN dwell times count as zero samples before rounding.
pub fn calc_samples(dwell: f64, sample_rate: f64) -> u64 {
    // `as` saturates: negatives and NaN become 0, huge values u32::MAX
    let samples = (dwell * sample_rate) as u32;
    next_2_to_pow(samples)
}

/// Dwell time actually covered by [`calc_samples`], truncated to milliseconds.
pub fn calc_real_dwell(dwell: f64, sample_rate: f64) -> f64 {
    let samples = calc_samples(dwell, sample_rate);
    let real = samples as f64 / sample_rate;
    (real * 1000.0).trunc() / 1000.0
}

/// Returns the element of `values` closest to `value`.
///
/// Ties resolve to the first candidate; an empty slice yields `None`.
pub fn nearest(value: f64, values: &[f64]) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for &candidate in values {
        let offset = (value - candidate).abs();
        match best {
            Some((_, best_offset)) if offset >= best_offset => {}
            _ => best = Some((candidate, offset)),
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Great-circle distance in metres between two points given in degrees.
///
/// Note the argument order: both latitudes first, then both longitudes.
pub fn haversine(lat1: f64, lat2: f64, lon1: f64, lon2: f64) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let (lon1, lon2) = (lon1.to_radians(), lon2.to_radians());

    let dlon = lon1 - lon2;
    let dlat = lat1 - lat2;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let b = a.sqrt().asin();

    2.0 * b * EARTH_RADIUS_M
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_2_to_pow_is_smallest_power_above() {
        for v in 1u32..=(1 << 20) {
            let p = next_2_to_pow(v);
            assert!(p.is_power_of_two());
            assert!(p >= u64::from(v));
            assert!(p / 2 < u64::from(v));
        }
        assert_eq!(next_2_to_pow(1), 1);
        assert_eq!(next_2_to_pow(2), 2);
        assert_eq!(next_2_to_pow(3), 4);
        assert_eq!(next_2_to_pow(1025), 2048);
    }

    #[test]
    fn next_2_to_pow_handles_extremes() {
        assert_eq!(next_2_to_pow(0), 1);
        assert_eq!(next_2_to_pow(u32::MAX), 1 << 32);
    }

    #[test]
    fn limit_stays_within_bounds() {
        for v in -20..20 {
            let result = limit(v, -5, 7);
            assert!((-5..=7).contains(&result));
            if (-5..=7).contains(&v) {
                assert_eq!(result, v);
            }
        }
        assert_eq!(limit(1.5, 0.0, 1.0), 1.0);
    }

    #[test]
    fn limit_prefers_minimum_when_bounds_cross() {
        assert_eq!(limit(5, 10, 0), 10);
    }

    #[test]
    fn db_round_trip() {
        for x in [1e-9, 0.001, 0.5, 1.0, 3.7, 1000.0, 4.2e7] {
            let back = db_to_level(level_to_db(x).unwrap());
            assert!((back - x).abs() <= x * 1e-12, "{x} -> {back}");
        }
        assert_eq!(level_to_db(1.0).unwrap(), 0.0);
        assert!((level_to_db(100.0).unwrap() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn level_to_db_rejects_non_positive() {
        assert_eq!(level_to_db(0.0), Err(NumericError::NonPositiveLevel(0.0)));
        assert!(level_to_db(-1.0).is_err());
        assert!(level_to_db(f64::NAN).is_err());
    }

    #[test]
    fn calc_samples_rounds_to_power_of_two() {
        assert_eq!(calc_samples(0.01, 2e6), 32768);
        assert_eq!(calc_samples(0.131072, 2e6), 262144);
        assert_eq!(calc_samples(0.0, 2e6), 1);
        assert_eq!(calc_samples(-1.0, 2e6), 1);
    }

    #[test]
    fn calc_real_dwell_truncates_to_milliseconds() {
        // 32768 / 2e6 = 0.016384
        assert_eq!(calc_real_dwell(0.01, 2e6), 0.016);
        // 262144 / 2e6 = 0.131072
        assert_eq!(calc_real_dwell(0.1, 2e6), 0.131);
    }

    #[test]
    fn nearest_picks_first_on_tie() {
        assert_eq!(nearest(5.0, &[1.0, 4.0, 6.0, 10.0]), Some(4.0));
        assert_eq!(nearest(5.0, &[4.0, 6.0]), Some(4.0));
        assert_eq!(nearest(5.0, &[6.0, 4.0]), Some(6.0));
        assert_eq!(nearest(5.0, &[]), None);
    }

    #[test]
    fn haversine_known_values() {
        assert_eq!(haversine(0.0, 0.0, 0.0, 0.0), 0.0);

        let one_degree = 2.0 * std::f64::consts::PI * EARTH_RADIUS_M / 360.0;
        let d = haversine(0.0, 0.0, 0.0, 1.0);
        assert!((d - one_degree).abs() / one_degree < 1e-3);

        let ab = haversine(51.5, 48.85, -0.12, 2.35);
        let ba = haversine(48.85, 51.5, 2.35, -0.12);
        assert!((ab - ba).abs() < 1e-6);
    }
}
