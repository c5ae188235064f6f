use std::path::Path;

use crate::errors::SweepError;
use crate::types::ArtifactPair;

/// Resolve a named experiment to its artifact pair.
///
/// `name` selects `<dir>/<name>.bc` and `<dir>/<name>.manifest`. Both
/// files must already exist; the sweep only ever reads them. Names with
/// path separators are rejected so an experiment cannot escape the
/// experiments directory.
pub fn resolve_artifacts(experiments_dir: &Path, name: &str) -> Result<ArtifactPair, SweepError> {
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(SweepError::InvalidExperimentName {
            name: name.to_string(),
        });
    }

    if !experiments_dir.is_dir() {
        return Err(SweepError::ExperimentsDirNotFound {
            path: experiments_dir.to_path_buf(),
        });
    }

    let bitcode = experiments_dir.join(format!("{name}.bc"));
    let manifest = experiments_dir.join(format!("{name}.manifest"));

    for path in [&bitcode, &manifest] {
        if !path.is_file() {
            return Err(SweepError::ArtifactMissing { path: path.clone() });
        }
    }

    Ok(ArtifactPair { bitcode, manifest })
}
