use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum SweepError {
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed waiting for {program}: {source}")]
    Wait {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("{program} {status} at -bound={bound}")]
    NonZeroExit {
        program: PathBuf,
        bound: u64,
        status: ExitStatus,
    },

    #[error("{program} exceeded the {limit:?} time limit at -bound={bound}")]
    Timeout {
        program: PathBuf,
        bound: u64,
        limit: Duration,
    },

    #[error("No timing reported: the diagnostic stream was empty")]
    EmptyDiagnostics,

    #[error("No diagnostic line ends in a parsable duration (first line: {first:?})")]
    NoTimingLine { first: String },

    #[error("Reported duration {value} is negative")]
    NegativeDuration { value: f64 },

    #[error("At least 2 runs per bound are needed for a sample standard deviation (got {runs})")]
    InsufficientRuns { runs: usize },

    #[error("No experiments directory found at {path}")]
    ExperimentsDirNotFound { path: PathBuf },

    #[error("Missing experiment artifact {path}")]
    ArtifactMissing { path: PathBuf },

    #[error("Experiment name {name:?} must be a bare file stem without path separators")]
    InvalidExperimentName { name: String },

    #[error("Invalid bound range: {detail}")]
    InvalidRange { detail: String },

    #[error("Failed to write summary row: {source}")]
    Output { source: std::io::Error },

    #[error("Failed to encode summary row: {source}")]
    Encode { source: serde_json::Error },
}
