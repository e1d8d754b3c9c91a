use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FgeneshError {
    #[error("unknown database kind: {0}")]
    UnknownDatabase(String),

    #[error("unknown build '{build}' for database '{kind}'")]
    UnknownBuild { kind: String, build: String },

    #[error("no data table '{0}'")]
    MissingTable(String),

    #[error("failed to read input record at {0}")]
    InputRead(PathBuf),

    #[error("failed to parse input record: {0}")]
    InputParse(String),

    #[error("input record has no output_data entry")]
    MissingOutputData,

    #[error("download failed: {0}")]
    Http(String),

    #[error("server returned status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("failed to write download: {0}")]
    DownloadWrite(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),
}

impl FgeneshError {
    /// Errors caused by bad catalog lookups or a malformed input record.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            FgeneshError::UnknownDatabase(_)
                | FgeneshError::UnknownBuild { .. }
                | FgeneshError::MissingTable(_)
                | FgeneshError::InputRead(_)
                | FgeneshError::InputParse(_)
                | FgeneshError::MissingOutputData
        )
    }

    pub fn is_transfer(&self) -> bool {
        matches!(
            self,
            FgeneshError::Http(_)
                | FgeneshError::HttpStatus { .. }
                | FgeneshError::DownloadWrite(_)
        )
    }

    /// Process exit status: 2 for configuration, 3 for transfer, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_configuration() {
            2
        } else if self.is_transfer() {
            3
        } else {
            1
        }
    }
}
