use argminmax::ArgMinMax;

/// The trailing `limit` elements of `series`, in their original order.
/// Returns the whole series when it is shorter than `limit`.
pub fn window<T>(series: &[T], limit: usize) -> &[T] {
    let start = series.len().saturating_sub(limit);
    &series[start..]
}

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// (min, max) of a non-empty slice, `None` for an empty one.
pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    Some((get_min(vec), get_max(vec)))
}

/// Pads a value range by `pct` of its span on both sides.
/// A flat range gets padded by `pct` of its magnitude instead so the plot never collapses.
pub fn padded_range(min: f64, max: f64, pct: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 {
        span * pct
    } else {
        (max.abs() * pct).max(pct)
    };
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_keeps_trailing_elements_in_order() {
        let series: Vec<i32> = (1..=8).collect();
        assert_eq!(window(&series, 5), &[4, 5, 6, 7, 8]);
    }

    #[test]
    fn window_length_is_min_of_len_and_limit() {
        let series: Vec<u32> = (0..7).collect();
        for limit in 0..12 {
            let out = window(&series, limit);
            assert_eq!(out.len(), limit.min(series.len()));
            assert_eq!(out, &series[series.len() - out.len()..]);
        }
    }

    #[test]
    fn window_of_short_or_empty_series() {
        assert_eq!(window(&[1, 2], 5), &[1, 2]);
        assert!(window::<u8>(&[], 5).is_empty());
        assert!(window(&[1, 2, 3], 0).is_empty());
    }

    #[test]
    fn min_max_of_prices() {
        assert_eq!(get_min_max(&[4200.5, 4100.0, 4350.25]), Some((4100.0, 4350.25)));
        assert_eq!(get_min_max(&[]), None);
    }

    #[test]
    fn padded_range_handles_flat_series() {
        assert_eq!(padded_range(10.0, 20.0, 0.1), (9.0, 21.0));
        let (lo, hi) = padded_range(100.0, 100.0, 0.05);
        assert!(lo < 100.0 && hi > 100.0);
    }
}
