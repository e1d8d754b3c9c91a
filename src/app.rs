use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::info;

use crate::catalog;
use crate::config::ConfigLoader;
use crate::data_tables::{DataTables, TableEntry, entry_value};
use crate::domain::DatabaseKind;
use crate::error::FgeneshError;
use crate::transfer::Fetcher;

#[derive(Debug, Clone)]
pub struct RunRequest {
    pub kind: DatabaseKind,
    pub build: String,
    pub version: Option<String>,
    /// Galaxy JSON record; read at start and overwritten with the result.
    pub json_path: Utf8PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub table_name: String,
    pub entry: TableEntry,
    pub downloaded: String,
}

pub struct App<F: Fetcher> {
    fetcher: F,
    today: NaiveDate,
}

impl<F: Fetcher> App<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_date(fetcher, Local::now().date_naive())
    }

    pub fn with_date(fetcher: F, today: NaiveDate) -> Self {
        Self { fetcher, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Downloads one catalog build into `target_dir/<kind>` and appends its
    /// row to `table_name`. Returns the downloaded file.
    pub fn build_entry(
        &self,
        tables: &mut DataTables,
        table_name: &str,
        kind: DatabaseKind,
        build: &str,
        version: Option<&str>,
        target_dir: &Utf8Path,
    ) -> Result<Utf8PathBuf, FgeneshError> {
        let entry = catalog::lookup(kind, build)?;
        if !tables.has_table(table_name) {
            return Err(FgeneshError::MissingTable(table_name.to_string()));
        }

        let kind_dir = target_dir.join(kind.subdir());
        let filename = kind.destination_filename(build);
        let downloaded = self
            .fetcher
            .fetch(entry.url, &filename, kind_dir.as_std_path())?;
        let downloaded = Utf8PathBuf::from_path_buf(downloaded)
            .map_err(|path| FgeneshError::Filesystem(format!("non UTF-8 path {}", path.display())))?;

        let row = TableEntry {
            value: entry_value(kind, build, version, self.today),
            name: entry.name.to_string(),
            path: kind_dir.join(build).to_string(),
            dbkey: version.map(str::to_string),
        };
        info!(table = table_name, value = %row.value, "adding data table entry");
        tables.add_entry(table_name, row)?;
        Ok(downloaded)
    }

    pub fn run(&self, request: &RunRequest) -> Result<RunSummary, FgeneshError> {
        let input = ConfigLoader::read_input(&request.json_path)?;
        let target_dir = input.target_dir()?;

        info!(dir = %target_dir, "making target directory");
        fs::create_dir_all(target_dir.as_std_path()).map_err(|err| {
            FgeneshError::Filesystem(format!("create {target_dir}: {err}"))
        })?;

        let table_name = request.kind.table_name();
        let mut tables = DataTables::new();
        tables.add_table(table_name);

        info!(kind = %request.kind, build = %request.build, "download and build database");
        let downloaded = self.build_entry(
            &mut tables,
            table_name,
            request.kind,
            &request.build,
            request.version.as_deref(),
            &target_dir,
        )?;

        info!(path = %request.json_path, "writing output record");
        tables.write(&request.json_path)?;

        let entry = tables
            .entries(table_name)
            .and_then(|rows| rows.last())
            .cloned()
            .ok_or_else(|| FgeneshError::MissingTable(table_name.to_string()))?;
        Ok(RunSummary {
            table_name: table_name.to_string(),
            entry,
            downloaded: downloaded.to_string(),
        })
    }
}
