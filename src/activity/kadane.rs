//! Maximum-subarray scan (Kadane's algorithm).

/// Best contiguous sub-range found by [`max_subarray`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxSubarray {
    /// Start index of the sub-range
    pub start: usize,
    /// End index of the sub-range (inclusive)
    pub end: usize,
    /// Sum over the sub-range
    pub sum: f64,
}

impl MaxSubarray {
    /// Number of elements in the sub-range.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A sub-range always holds at least one element.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Find the contiguous sub-range with the maximum sum.
///
/// Single left-to-right scan: the running sum restarts at the current
/// element whenever the carried sum is non-positive, and the best-known
/// range is replaced only on a strict improvement, so ties keep the
/// earliest range. An all-non-positive input still yields the
/// least-negative single element. O(n) time, O(1) space.
///
/// # Arguments
/// * `values` - Sequence to scan
///
/// # Returns
/// The best sub-range, or `None` for an empty input
///
/// # Example
/// ```
/// use waveclust::activity::max_subarray;
///
/// let best = max_subarray(&[-2.0, 1.0, -3.0, 4.0, -1.0, 2.0, 1.0, -5.0, 4.0]).unwrap();
/// assert_eq!((best.start, best.end, best.sum), (3, 6, 6.0));
/// ```
pub fn max_subarray(values: &[f64]) -> Option<MaxSubarray> {
    if values.is_empty() {
        return None;
    }

    let mut best = MaxSubarray {
        start: 0,
        end: 0,
        sum: f64::NEG_INFINITY,
    };
    let mut run_sum = 0.0;
    let mut run_start = 0;

    for (i, &x) in values.iter().enumerate() {
        if run_sum <= 0.0 {
            run_sum = x;
            run_start = i;
        } else {
            run_sum += x;
        }

        if run_sum > best.sum {
            best = MaxSubarray {
                start: run_start,
                end: i,
                sum: run_sum,
            };
        }
    }

    Some(best)
}
