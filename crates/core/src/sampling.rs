//! Uniform down-sampling of ordered series for charting.
//!
//! Reduces a series of length `L` to at most `n` points while keeping the
//! original order. When `L > n >= 2` the selected positions are
//! `round(i * (L - 1) / (n - 1))` for `i` in `0..n`, so the first and last
//! points are always kept. Rounding is half-away-from-zero (`f64::round`).
//!
//! Degenerate bounds are total: `n == 0` selects nothing and `n == 1`
//! selects only the first point.

use serde::Serialize;

/// Positions selected from a series of length `len` for an output of `n` points.
///
/// Returns `0..len` when `len <= n`. Otherwise the returned indices are
/// strictly increasing, start at `0` and end at `len - 1`.
#[must_use]
pub fn sample_indices(len: usize, n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    if len <= n {
        return (0..len).collect();
    }
    if n == 1 {
        return vec![0];
    }

    #[allow(clippy::cast_precision_loss)]
    let step = (len - 1) as f64 / (n - 1) as f64;
    let last = len - 1;

    (0..n)
        .map(|i| {
            #[allow(
                clippy::cast_precision_loss,
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss
            )]
            let index = (i as f64 * step).round() as usize;
            index.min(last)
        })
        .collect()
}

/// Evenly samples at most `n` elements from an owned series.
///
/// A series already within the bound is returned as-is without copying.
/// Otherwise the selected elements are moved out in their original order.
#[must_use]
pub fn uniform_sample<T>(series: Vec<T>, n: usize) -> Vec<T> {
    if n > 0 && series.len() <= n {
        return series;
    }

    let indices = sample_indices(series.len(), n);
    let mut wanted = indices.into_iter().peekable();

    series
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| {
            if wanted.peek() == Some(&position) {
                wanted.next();
                Some(item)
            } else {
                None
            }
        })
        .collect()
}

/// Borrowing variant of [`uniform_sample`]; clones only the selected elements.
#[must_use]
pub fn uniform_sample_slice<T: Clone>(series: &[T], n: usize) -> Vec<T> {
    sample_indices(series.len(), n)
        .into_iter()
        .map(|index| series[index].clone())
        .collect()
}

/// A sampled series together with the length it was sampled from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Downsampled<T> {
    pub points: Vec<T>,
    pub original_len: usize,
}

impl<T> Downsampled<T> {
    /// Samples `series` down to at most `n` points, recording its length first.
    #[must_use]
    pub fn from_series(series: Vec<T>, n: usize) -> Self {
        let original_len = series.len();
        Self {
            points: uniform_sample(series, n),
            original_len,
        }
    }

    #[must_use]
    pub fn was_reduced(&self) -> bool {
        self.points.len() < self.original_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_into_five() {
        let series: Vec<i32> = (0..10).collect();
        // step = 9 / 4 = 2.25 -> 0, 2.25, 4.5, 6.75, 9
        assert_eq!(sample_indices(10, 5), vec![0, 2, 5, 7, 9]);
        assert_eq!(uniform_sample(series, 5), vec![0, 2, 5, 7, 9]);
    }

    #[test]
    fn test_shorter_than_bound_is_identity() {
        assert_eq!(uniform_sample(vec![10, 20, 30], 5), vec![10, 20, 30]);
        assert_eq!(uniform_sample_slice(&[10, 20, 30], 3), vec![10, 20, 30]);
    }

    #[test]
    fn test_identity_keeps_allocation() {
        let series = vec![1_u8, 2, 3];
        let ptr = series.as_ptr();
        let sampled = uniform_sample(series, 50);
        assert_eq!(sampled.as_ptr(), ptr);
    }

    #[test]
    fn test_empty_series() {
        assert!(uniform_sample(Vec::<i32>::new(), 50).is_empty());
        assert!(sample_indices(0, 50).is_empty());
    }

    #[test]
    fn test_single_point_bound() {
        assert_eq!(uniform_sample(vec![5], 1), vec![5]);
        assert_eq!(uniform_sample(vec![7, 8, 9, 10], 1), vec![7]);
    }

    #[test]
    fn test_zero_bound_selects_nothing() {
        assert!(uniform_sample(vec![1, 2, 3], 0).is_empty());
        assert!(uniform_sample(Vec::<i32>::new(), 0).is_empty());
        assert!(uniform_sample_slice(&[1, 2, 3], 0).is_empty());
    }

    #[test]
    fn test_hundred_into_fifty() {
        let sampled = uniform_sample((0..100).collect::<Vec<i32>>(), 50);
        assert_eq!(sampled.len(), 50);
        assert_eq!(sampled.first(), Some(&0));
        assert_eq!(sampled.last(), Some(&99));
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        // step = 5 / 2 = 2.5; half-to-even would pick 2
        assert_eq!(sample_indices(6, 3), vec![0, 3, 5]);
        // step = 1.5 at i = 1
        assert_eq!(sample_indices(4, 3), vec![0, 2, 3]);
        // step = 18 / 4 = 4.5; 13.5 at i = 3 -> 14
        assert_eq!(sample_indices(19, 5), vec![0, 5, 9, 14, 18]);
    }

    #[test]
    fn test_length_law() {
        for len in 0..120 {
            for n in 0..60 {
                assert_eq!(sample_indices(len, n).len(), len.min(n), "len={len} n={n}");
            }
        }
    }

    #[test]
    fn test_indices_strictly_increasing_and_in_range() {
        for len in 3..300 {
            for n in 2..len {
                let indices = sample_indices(len, n);
                assert!(indices.windows(2).all(|w| w[0] < w[1]), "len={len} n={n}");
                assert_eq!(indices[0], 0);
                assert_eq!(indices[n - 1], len - 1);
            }
        }
    }

    #[test]
    fn test_endpoints_kept_when_reduced() {
        let series: Vec<String> = (0..37).map(|i| format!("p{i}")).collect();
        for n in 2..37 {
            let sampled = uniform_sample_slice(&series, n);
            assert_eq!(sampled.first(), series.first());
            assert_eq!(sampled.last(), series.last());
        }
    }

    #[test]
    fn test_owned_and_slice_agree() {
        let series: Vec<u32> = (0..257).map(|i| i * 3).collect();
        for n in [1, 2, 7, 50, 256, 257, 400] {
            assert_eq!(
                uniform_sample(series.clone(), n),
                uniform_sample_slice(&series, n)
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let series: Vec<u32> = (0..1000).collect();
        let first = uniform_sample_slice(&series, 50);
        let second = uniform_sample_slice(&series, 50);
        assert_eq!(first, second);
    }

    #[test]
    fn test_large_series_ends_exactly() {
        // floating error at i = n - 1 must not push past the last element
        let len = 1_000_003;
        let indices = sample_indices(len, 977);
        assert_eq!(indices.last(), Some(&(len - 1)));
    }

    #[test]
    fn test_downsampled_keeps_original_len() {
        let result = Downsampled::from_series((0..120).collect::<Vec<u32>>(), 50);
        assert_eq!(result.original_len, 120);
        assert_eq!(result.points.len(), 50);
        assert!(result.was_reduced());

        let small = Downsampled::from_series(vec![1, 2], 50);
        assert_eq!(small.original_len, 2);
        assert!(!small.was_reduced());
    }
}
