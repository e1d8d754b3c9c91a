use std::collections::BTreeMap;
use std::fs;

use camino::Utf8Path;
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::DatabaseKind;
use crate::error::FgeneshError;

/// The record handed back to Galaxy: `{"data_tables": {name: [rows]}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataTables {
    pub data_tables: BTreeMap<String, Vec<TableEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    pub value: String,
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbkey: Option<String>,
}

impl DataTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(&mut self, table: &str) {
        self.data_tables.insert(table.to_string(), Vec::new());
    }

    pub fn has_table(&self, table: &str) -> bool {
        self.data_tables.contains_key(table)
    }

    pub fn add_entry(&mut self, table: &str, entry: TableEntry) -> Result<(), FgeneshError> {
        self.data_tables
            .get_mut(table)
            .ok_or_else(|| FgeneshError::MissingTable(table.to_string()))?
            .push(entry);
        Ok(())
    }

    pub fn entries(&self, table: &str) -> Option<&[TableEntry]> {
        self.data_tables.get(table).map(Vec::as_slice)
    }

    /// Compact JSON with the keys of every object sorted.
    pub fn to_json(&self) -> Result<String, FgeneshError> {
        // serde_json::Map is ordered by key, so going through Value sorts row fields too.
        let value =
            serde_json::to_value(self).map_err(|err| FgeneshError::Filesystem(err.to_string()))?;
        serde_json::to_string(&value).map_err(|err| FgeneshError::Filesystem(err.to_string()))
    }

    /// Replaces whatever is at `path` with this record.
    pub fn write(&self, path: &Utf8Path) -> Result<(), FgeneshError> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
            fs::create_dir_all(parent.as_std_path())
                .map_err(|err| FgeneshError::Filesystem(err.to_string()))?;
        }
        let tmp_path = path.with_extension("json.tmp");
        fs::write(tmp_path.as_std_path(), self.to_json()?)
            .map_err(|err| FgeneshError::Filesystem(err.to_string()))?;
        fs::rename(tmp_path.as_std_path(), path.as_std_path())
            .map_err(|err| FgeneshError::Filesystem(err.to_string()))?;
        Ok(())
    }
}

pub fn entry_value(
    kind: DatabaseKind,
    build: &str,
    version: Option<&str>,
    date: NaiveDate,
) -> String {
    let stamp = date.format("%d%m%Y");
    match version {
        Some(version) => format!("{kind}-{build}-{version}-{stamp}"),
        None => format!("{kind}-{build}-{stamp}"),
    }
}
