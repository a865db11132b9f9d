use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::exitcode;

#[derive(Error, Debug)]
pub enum ComposectlError {
    #[error("cannot resolve executable directory {path}")]
    BaseDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read settings file {path}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file {path}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("compose command is empty")]
    EmptyComposeCommand,

    #[error("failed to launch `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl ComposectlError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ComposectlError::BaseDir { .. } => exitcode::IOERR,
            ComposectlError::SettingsRead { .. }
            | ComposectlError::SettingsParse { .. }
            | ComposectlError::EmptyComposeCommand => exitcode::CONFIG,
            ComposectlError::Spawn { .. } => exitcode::UNAVAILABLE,
        }
    }
}

pub type Result<T> = std::result::Result<T, ComposectlError>;
