use std::fmt;
use std::str::FromStr;

use crate::error::FgeneshError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseKind {
    Nr,
    Par,
    Matrix,
}

impl DatabaseKind {
    pub const ALL: [DatabaseKind; 3] = [DatabaseKind::Nr, DatabaseKind::Par, DatabaseKind::Matrix];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::Nr => "nr",
            DatabaseKind::Par => "par",
            DatabaseKind::Matrix => "matrix",
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            DatabaseKind::Nr => "fgenesh_nr",
            DatabaseKind::Par => "fgenesh_par",
            DatabaseKind::Matrix => "fgenesh_matrix",
        }
    }

    /// Subdirectory of the target directory that receives this kind's files.
    pub fn subdir(&self) -> &'static str {
        self.as_str()
    }

    pub fn file_suffix(&self) -> &'static str {
        match self {
            DatabaseKind::Nr => "fa",
            DatabaseKind::Par => "par",
            DatabaseKind::Matrix => "mat",
        }
    }

    /// Name of the downloaded file. The registered path is the same name
    /// without the suffix.
    pub fn destination_filename(&self, build: &str) -> String {
        format!("{build}.{}", self.file_suffix())
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatabaseKind {
    type Err = FgeneshError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "nr" => Ok(DatabaseKind::Nr),
            "par" => Ok(DatabaseKind::Par),
            "matrix" => Ok(DatabaseKind::Matrix),
            _ => Err(FgeneshError::UnknownDatabase(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_kind_valid() {
        let kind: DatabaseKind = "par".parse().unwrap();
        assert_eq!(kind, DatabaseKind::Par);
        assert_eq!(kind.to_string(), "par");
    }

    #[test]
    fn parse_kind_invalid() {
        let err = "blast".parse::<DatabaseKind>().unwrap_err();
        assert_matches!(err, FgeneshError::UnknownDatabase(_));
    }

    #[test]
    fn naming_convention_per_kind() {
        assert_eq!(DatabaseKind::Nr.destination_filename("ce"), "ce.fa");
        assert_eq!(DatabaseKind::Par.destination_filename("mammals"), "mammals.par");
        assert_eq!(
            DatabaseKind::Matrix.destination_filename("map_pfam_name"),
            "map_pfam_name.mat"
        );
    }
}
