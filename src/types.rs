use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

use crate::errors::SweepError;

/// How the next bound value is derived from the sweep position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRule {
    /// `bound_k = start + k * step`
    Additive,
    /// `bound_k = start * step^k`
    Geometric,
}

/// A validated, strictly increasing sequence of bound values.
///
/// The step rule is always explicit; it is never inferred from the
/// magnitude of `step`.
#[derive(Debug, Clone)]
pub struct BoundRange {
    start: u64,
    count: u32,
    step: u64,
    rule: StepRule,
}

impl BoundRange {
    pub fn new(start: u64, count: u32, step: u64, rule: StepRule) -> Result<Self, SweepError> {
        if start == 0 {
            return Err(invalid("start must be at least 1"));
        }
        if count == 0 {
            return Err(invalid("count must be at least 1"));
        }
        match rule {
            StepRule::Additive if step == 0 => {
                return Err(invalid("step must be at least 1 for an additive sweep"));
            }
            StepRule::Geometric if step < 2 => {
                return Err(invalid("step must be at least 2 for a geometric sweep"));
            }
            _ => {}
        }

        let range = Self {
            start,
            count,
            step,
            rule,
        };
        if range.last_bound().is_none() {
            return Err(invalid("largest bound does not fit in 64 bits"));
        }
        Ok(range)
    }

    /// Bound values in sweep order.
    pub fn bounds(&self) -> impl Iterator<Item = u64> + '_ {
        let Self {
            start, step, rule, ..
        } = *self;
        (0..self.count).map(move |k| match rule {
            StepRule::Additive => start + step * u64::from(k),
            StepRule::Geometric => start * step.pow(k),
        })
    }

    pub fn len(&self) -> usize {
        self.count as usize
    }

    /// `None` when the final bound overflows. Checked once at construction
    /// so `bounds()` can use plain arithmetic.
    fn last_bound(&self) -> Option<u64> {
        let k = self.count - 1;
        match self.rule {
            StepRule::Additive => self.step.checked_mul(u64::from(k))?.checked_add(self.start),
            StepRule::Geometric => self.step.checked_pow(k)?.checked_mul(self.start),
        }
    }
}

fn invalid(detail: &str) -> SweepError {
    SweepError::InvalidRange {
        detail: detail.to_string(),
    }
}

/// The two fixed input files handed unchanged to every invocation.
#[derive(Debug, Clone)]
pub struct ArtifactPair {
    pub bitcode: PathBuf,
    pub manifest: PathBuf,
}

/// Immutable parameters governing one sweep run.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub range: BoundRange,
    /// Trials per bound value. Must be at least 2; the sweep refuses to
    /// start otherwise.
    pub runs: usize,
    pub format: OutputFormat,
}

/// One reduced output record for a completed batch of trials.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub bound: u64,
    /// Arithmetic mean of the batch, in seconds.
    pub mean: f64,
    /// Bessel-corrected sample standard deviation, in seconds.
    pub stdev: f64,
}

impl Summary {
    /// The row consumed by the plotting step: `<bound>,<mean>,<stdev>`,
    /// mean and stdev to two decimal places, no header.
    pub fn csv_row(&self) -> String {
        format!("{},{:.2},{:.2}", self.bound, self.mean, self.stdev)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}
