use log::warn;

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (Bessel-corrected, denominator `n - 1`).
///
/// With a single value the denominator is zero and the result is NaN; no
/// special case is made for it here.
pub fn standard_deviation(values: &[f64], mean: f64) -> f64 {
    let sum_of_squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_of_squares / (values.len() as f64 - 1.0)).sqrt()
}

/// Standard error of the mean.
pub fn standard_error(std_dev: f64, count: usize) -> f64 {
    std_dev / (count as f64).sqrt()
}

/// Summary statistics over a set of marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub std_error: f64,
}

impl Summary {
    /// Compute all statistics, or `None` when there is nothing to summarise.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        if values.len() == 1 {
            warn!("standard deviation is undefined for a single mark");
        }

        let mean = mean(values);
        let std_dev = standard_deviation(values, mean);
        Some(Summary {
            count: values.len(),
            mean,
            std_dev,
            std_error: standard_error(std_dev, values.len()),
        })
    }
}
