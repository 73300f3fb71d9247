//! Breakpoint algorithms
//!
//! Every function takes values sorted ascending (non-empty, finite) and a
//! class count `k >= 1`, and returns `k + 1` non-decreasing breakpoints with
//! `breaks[0] == min` and `breaks[k] == max`.

use std::collections::BTreeSet;

use ordered_float::OrderedFloat;

use crate::method::ClassificationMethod;

/// Dispatch to the algorithm for `method`
pub fn compute_breaks(method: ClassificationMethod, sorted: &[f64], k: usize) -> Vec<f64> {
    match method {
        ClassificationMethod::Jenks => jenks_breaks(sorted, k),
        ClassificationMethod::Quantile => quantile_breaks(sorted, k),
        ClassificationMethod::EqualInterval => equal_interval_breaks(sorted, k),
        ClassificationMethod::StandardDeviation => standard_deviation_breaks(sorted, k),
        ClassificationMethod::UniqueInterval => unique_interval_breaks(sorted, k),
    }
}

/// Equal-width classes between the minimum and maximum
pub fn equal_interval_breaks(sorted: &[f64], k: usize) -> Vec<f64> {
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let width = (max - min) / k as f64;

    let mut breaks: Vec<f64> = if width.is_finite() {
        (0..k).map(|i| min + width * i as f64).collect()
    } else {
        // range wider than f64::MAX, interpolate without forming it
        (0..k)
            .map(|i| {
                let t = i as f64 / k as f64;
                min * (1.0 - t) + max * t
            })
            .collect()
    };
    breaks.push(max);
    non_decreasing(breaks, min, max)
}

/// Classes holding (close to) the same number of values
pub fn quantile_breaks(sorted: &[f64], k: usize) -> Vec<f64> {
    let n = sorted.len();

    let mut breaks: Vec<f64> = (0..k).map(|i| sorted[i * n / k]).collect();
    breaks.push(sorted[n - 1]);
    breaks
}

/// Quantile classes over the distinct values, so heavily repeated values
/// do not swallow whole classes
pub fn unique_interval_breaks(sorted: &[f64], k: usize) -> Vec<f64> {
    let distinct: Vec<f64> = sorted
        .iter()
        .map(|v| OrderedFloat(*v))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|v| v.into_inner())
        .collect();

    quantile_breaks(&distinct, k)
}

/// Classes one standard deviation wide, centred on the mean and clipped to
/// the data range
pub fn standard_deviation_breaks(sorted: &[f64], k: usize) -> Vec<f64> {
    let n = sorted.len() as f64;
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    // moments of values scaled into [-1, 1] cannot overflow
    let scale = min.abs().max(max.abs());
    if scale == 0.0 {
        return vec![min; k + 1];
    }

    let mean = sorted.iter().map(|v| v / scale).sum::<f64>() / n;
    let variance = sorted.iter().map(|v| (v / scale - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let half = k as f64 / 2.0;
    let mut breaks = Vec::with_capacity(k + 1);
    breaks.push(min);
    for i in 1..k {
        let value = (mean + (i as f64 - half) * std_dev) * scale;
        breaks.push(value.clamp(min, max));
    }
    breaks.push(max);
    non_decreasing(breaks, min, max)
}

/// Clip rounding drift so breakpoints stay within `[min, max]` and ordered
fn non_decreasing(mut breaks: Vec<f64>, min: f64, max: f64) -> Vec<f64> {
    let mut floor = min;
    for value in breaks.iter_mut() {
        *value = value.clamp(floor, max);
        floor = *value;
    }
    breaks
}

/// Jenks natural breaks (Fisher's exact optimisation).
///
/// Minimises the summed within-class squared deviation over all ways of
/// cutting the sorted values into `k` runs. With fewer values than classes
/// the surplus classes collapse onto the maximum.
pub fn jenks_breaks(sorted: &[f64], k: usize) -> Vec<f64> {
    let n = sorted.len();
    let min = sorted[0];
    let max = sorted[n - 1];
    let classes = k.min(n);

    if min == max {
        return vec![min; k + 1];
    }

    // Optimise over values scaled into [-1, 1] so squared sums stay finite;
    // breaks are read back from `sorted` by index
    let scale = min.abs().max(max.abs());
    let scaled: Vec<f64> = sorted.iter().map(|v| v / scale).collect();

    // 1-based: lower_limits[l][j] is the first value index of class j when the
    // first l values are split into j classes
    let mut lower_limits = vec![vec![0usize; classes + 1]; n + 1];
    let mut variances = vec![vec![0.0f64; classes + 1]; n + 1];

    // Splits with more classes than values stay infinite
    for row in variances.iter_mut().skip(1) {
        for cell in row.iter_mut().skip(1) {
            *cell = f64::INFINITY;
        }
    }
    lower_limits[1][1] = 1;
    variances[1][1] = 0.0;

    for l in 2..=n {
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut count = 0.0;
        let mut variance = 0.0;

        for m in 1..=l {
            let lower = l - m + 1;
            let value = scaled[lower - 1];

            count += 1.0;
            sum += value;
            sum_sq += value * value;
            variance = sum_sq - (sum * sum) / count;

            let prev = lower - 1;
            if prev != 0 {
                for j in 2..=classes {
                    let previous = variances[prev][j - 1];
                    if previous.is_infinite() {
                        continue;
                    }
                    let candidate = variance + previous;
                    if variances[l][j] >= candidate {
                        lower_limits[l][j] = lower;
                        variances[l][j] = candidate;
                    }
                }
            }
        }

        lower_limits[l][1] = 1;
        variances[l][1] = variance;
    }

    let mut breaks = vec![max; k + 1];
    breaks[0] = sorted[0];

    let mut upto = n;
    for j in (2..=classes).rev() {
        let lower = lower_limits[upto][j];
        if lower == 0 {
            breaks[1..j].fill(min);
            break;
        }
        breaks[j - 1] = sorted[lower - 1];
        upto = lower - 1;
    }

    breaks
}
