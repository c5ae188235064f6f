use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::errors::SweepError;
use crate::extract;
use crate::types::ArtifactPair;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs the external analysis program, one trial per `measure` call.
///
/// The program is invoked as `<program> <bitcode> <manifest> -bound=<N>`
/// and must report its wall-clock time on stderr; see
/// [`extract::extract_duration`] for the accepted layout. All paths are
/// taken as given; existence is the caller's problem.
pub struct ModelRunner {
    program: PathBuf,
    artifacts: ArtifactPair,
    timeout: Option<Duration>,
}

impl ModelRunner {
    pub fn new(program: PathBuf, artifacts: ArtifactPair, timeout: Option<Duration>) -> Self {
        Self {
            program,
            artifacts,
            timeout,
        }
    }

    /// Measure one trial at the given bound, returning the reported
    /// duration in seconds.
    ///
    /// Blocks until the child exits or the configured deadline passes.
    /// A non-zero exit status is an error in its own right; garbage
    /// output from a failed run is never parsed as a duration.
    pub fn measure(&self, bound: u64) -> Result<f64, SweepError> {
        let child = Command::new(&self.program)
            .arg(&self.artifacts.bitcode)
            .arg(&self.artifacts.manifest)
            .arg(format!("-bound={bound}"))
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SweepError::Launch {
                program: self.program.clone(),
                source,
            })?;

        let (status, diagnostics) = match self.timeout {
            Some(limit) => self.wait_with_deadline(child, bound, limit)?,
            None => self.wait_to_completion(child)?,
        };

        if !status.success() {
            return Err(SweepError::NonZeroExit {
                program: self.program.clone(),
                bound,
                status,
            });
        }

        extract::extract_duration(&diagnostics)
    }

    fn wait_to_completion(&self, child: Child) -> Result<(ExitStatus, String), SweepError> {
        let output = child
            .wait_with_output()
            .map_err(|source| SweepError::Wait {
                program: self.program.clone(),
                source,
            })?;
        Ok((
            output.status,
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }

    /// Poll the child until it exits or the deadline passes, killing it on
    /// expiry. Stderr is drained on a helper thread: a child that fills
    /// the pipe buffer would otherwise never exit while we poll.
    fn wait_with_deadline(
        &self,
        mut child: Child,
        bound: u64,
        limit: Duration,
    ) -> Result<(ExitStatus, String), SweepError> {
        let stderr = child.stderr.take();
        let drain = std::thread::spawn(move || {
            let mut captured = Vec::new();
            if let Some(mut pipe) = stderr {
                let _ = pipe.read_to_end(&mut captured);
            }
            captured
        });

        let deadline = Instant::now() + limit;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    let captured = drain.join().unwrap_or_default();
                    return Ok((status, String::from_utf8_lossy(&captured).into_owned()));
                }
                Ok(None) if Instant::now() >= deadline => {
                    // The drain thread is left to finish on its own: a
                    // grandchild holding the pipe open must not stall the
                    // abort.
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(SweepError::Timeout {
                        program: self.program.clone(),
                        bound,
                        limit,
                    });
                }
                Ok(None) => std::thread::sleep(POLL_INTERVAL),
                Err(source) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(SweepError::Wait {
                        program: self.program.clone(),
                        source,
                    });
                }
            }
        }
    }
}
