use crate::errors::SweepError;

const SNIPPET_MAX: usize = 80;

/// Pull the reported wall-clock duration out of captured diagnostic text.
///
/// The external tool is expected to report timing as a line whose last
/// whitespace-delimited token is a decimal number of seconds, the layout
/// `time -p` produces (`real 3.14`). The first such line wins; everything
/// else on the stream is treated as noise.
pub fn extract_duration(text: &str) -> Result<f64, SweepError> {
    if text.trim().is_empty() {
        return Err(SweepError::EmptyDiagnostics);
    }

    for line in text.lines() {
        let Some(token) = line.split_whitespace().last() else {
            continue;
        };
        if let Ok(value) = token.parse::<f64>()
            && value.is_finite()
        {
            if value < 0.0 {
                return Err(SweepError::NegativeDuration { value });
            }
            return Ok(value);
        }
    }

    Err(SweepError::NoTimingLine {
        first: first_line_snippet(text),
    })
}

fn first_line_snippet(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() <= SNIPPET_MAX {
        line.to_string()
    } else {
        line.chars().take(SNIPPET_MAX).collect()
    }
}
