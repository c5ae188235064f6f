use crate::errors::SweepError;
use crate::types::Summary;

/// Arithmetic mean. Callers guarantee at least one sample.
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Bessel-corrected sample standard deviation (divides by `n - 1`).
///
/// Fewer than two samples is a configuration defect, not a measurement:
/// it never degrades to `0.0`.
pub fn sample_stdev(samples: &[f64]) -> Result<f64, SweepError> {
    if samples.len() < 2 {
        return Err(SweepError::InsufficientRuns {
            runs: samples.len(),
        });
    }
    let m = mean(samples);
    let variance =
        samples.iter().map(|s| (s - m).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    Ok(variance.sqrt())
}

/// Reduce a completed batch to its output record.
pub fn summarize(bound: u64, samples: &[f64]) -> Result<Summary, SweepError> {
    let stdev = sample_stdev(samples)?;
    Ok(Summary {
        bound,
        mean: mean(samples),
        stdev,
    })
}
