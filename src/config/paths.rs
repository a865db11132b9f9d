use std::io;
use std::path::{Path, PathBuf};

use crate::config::config::Settings;
use crate::errors::{ComposectlError, Result};

/// The two files handed to the compose runtime. Resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposePaths {
    pub compose_file: PathBuf,
    pub env_file: PathBuf,
}

impl ComposePaths {
    pub fn resolve(base_dir: &Path, settings: &Settings) -> ComposePaths {
        ComposePaths {
            compose_file: base_dir.join(&settings.compose_file),
            env_file: base_dir.join(&settings.env_file),
        }
    }
}

/// Canonical directory of the running executable, or of `override_dir` when given.
pub fn base_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => canonicalize(dir),
        None => {
            let exe = std::env::current_exe().map_err(|source| ComposectlError::BaseDir {
                path: PathBuf::new(),
                source,
            })?;
            parent_dir(&canonicalize(&exe)?)
        }
    }
}

fn parent_dir(exe: &Path) -> Result<PathBuf> {
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Err(ComposectlError::BaseDir {
            path: exe.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory"),
        }),
    }
}

fn canonicalize(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|source| ComposectlError::BaseDir {
        path: path.to_path_buf(),
        source,
    })
}
