//! Direct-summation statistics for the short windows the models work on.

/// Arithmetic mean. Returns `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by `n`).
///
/// A single element has zero spread. Returns `None` for an empty slice.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;

    let variance: f64 = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;

    Some(variance.sqrt())
}
