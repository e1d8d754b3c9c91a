use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::FgeneshError;

/// JSON record Galaxy passes to a data manager tool.
#[derive(Debug, Clone, Deserialize)]
pub struct InputRecord {
    #[serde(default)]
    pub param_dict: Map<String, Value>,
    #[serde(default)]
    pub output_data: Vec<OutputDataset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputDataset {
    pub extra_files_path: String,
}

impl InputRecord {
    /// Directory the data manager must populate. It need not exist yet.
    pub fn target_dir(&self) -> Result<Utf8PathBuf, FgeneshError> {
        self.output_data
            .first()
            .map(|dataset| Utf8PathBuf::from(&dataset.extra_files_path))
            .ok_or(FgeneshError::MissingOutputData)
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn read_input(path: &Utf8Path) -> Result<InputRecord, FgeneshError> {
        let content = fs::read_to_string(path.as_std_path())
            .map_err(|_| FgeneshError::InputRead(path.as_std_path().to_path_buf()))?;
        Self::parse_input(&content)
    }

    pub fn parse_input(content: &str) -> Result<InputRecord, FgeneshError> {
        serde_json::from_str(content).map_err(|err| FgeneshError::InputParse(err.to_string()))
    }
}
