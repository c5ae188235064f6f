use std::io::Write;

use owo_colors::{OwoColorize, Stream};

use crate::errors::SweepError;
use crate::stats;
use crate::types::{OutputFormat, Summary, SweepConfig};

/// Drive a full sweep, calling `measure` once per trial.
///
/// Bounds are visited in strictly increasing order; each batch of
/// `config.runs` trials is reduced to one summary row, written and
/// flushed to `out` before the next batch starts. Rows already written
/// when a later trial fails stay valid; nothing is retracted. Progress
/// goes to stderr, never to `out`.
pub fn run_sweep<F, W>(config: &SweepConfig, mut measure: F, mut out: W) -> Result<(), SweepError>
where
    F: FnMut(u64) -> Result<f64, SweepError>,
    W: Write,
{
    // A batch of one has no sample standard deviation; refuse the
    // configuration before spawning anything.
    if config.runs < 2 {
        return Err(SweepError::InsufficientRuns { runs: config.runs });
    }

    for bound in config.range.bounds() {
        eprintln!(
            "{}",
            format!("Running at {bound}").if_supports_color(Stream::Stderr, |s| s.dimmed())
        );

        let mut batch = Vec::with_capacity(config.runs);
        for _ in 0..config.runs {
            batch.push(measure(bound)?);
        }

        let summary = stats::summarize(bound, &batch)?;
        write_summary(&mut out, &summary, config.format)?;
    }

    Ok(())
}

fn write_summary<W: Write>(
    out: &mut W,
    summary: &Summary,
    format: OutputFormat,
) -> Result<(), SweepError> {
    let row = match format {
        OutputFormat::Csv => summary.csv_row(),
        OutputFormat::Json => {
            serde_json::to_string(summary).map_err(|source| SweepError::Encode { source })?
        }
    };
    writeln!(out, "{row}").map_err(|source| SweepError::Output { source })?;
    out.flush().map_err(|source| SweepError::Output { source })
}
