use crate::domain::DatabaseKind;
use crate::error::FgeneshError;

pub const ORIGIN: &str = "http://mike-sandpit.qfab.org:8080/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub build: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

const NR: &[CatalogEntry] = &[
    CatalogEntry {
        build: "ce",
        name: "C elegans",
        url: "http://mike-sandpit.qfab.org:8080/nr/ce.fa",
    },
    CatalogEntry {
        build: "DEMO",
        name: "Demo for FGENESH",
        url: "http://mike-sandpit.qfab.org:8080/nr/DEMO.fa",
    },
];

const PAR: &[CatalogEntry] = &[
    CatalogEntry {
        build: "mammals",
        name: "Parameter file for Mammals",
        url: "http://mike-sandpit.qfab.org:8080/par/mammals.par",
    },
    CatalogEntry {
        build: "non_mammals",
        name: "Parameter file for Non Mammals",
        url: "http://mike-sandpit.qfab.org:8080/par/non_mammals.par",
    },
];

const MATRIX: &[CatalogEntry] = &[
    CatalogEntry {
        build: "C_elegans_nGASP",
        name: "Matrix (full) for C elegans",
        url: "http://mike-sandpit.qfab.org:8080/matrix/C_elegans_nGASP.mat",
    },
    CatalogEntry {
        build: "map_ko_uniref90",
        name: "Matrix (full) for KEGG Orthogroups (KOs) from UniRef90",
        url: "http://mike-sandpit.qfab.org:8080/matrix/map_ko_uniref90.mat",
    },
    CatalogEntry {
        build: "map_pfam_name",
        name: "Matrix (full) between Pfam domains ids and names",
        url: "http://mike-sandpit.qfab.org:8080/matrix/map_pfam_name.mat",
    },
];

pub fn builds(kind: DatabaseKind) -> &'static [CatalogEntry] {
    match kind {
        DatabaseKind::Nr => NR,
        DatabaseKind::Par => PAR,
        DatabaseKind::Matrix => MATRIX,
    }
}

pub fn lookup(kind: DatabaseKind, build: &str) -> Result<&'static CatalogEntry, FgeneshError> {
    builds(kind)
        .iter()
        .find(|entry| entry.build == build)
        .ok_or_else(|| FgeneshError::UnknownBuild {
            kind: kind.to_string(),
            build: build.to_string(),
        })
}

pub fn display_name(kind: DatabaseKind, build: &str) -> Result<&'static str, FgeneshError> {
    lookup(kind, build).map(|entry| entry.name)
}

pub fn source_url(kind: DatabaseKind, build: &str) -> Result<&'static str, FgeneshError> {
    lookup(kind, build).map(|entry| entry.url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_stay_on_origin() {
        for kind in DatabaseKind::ALL {
            for entry in builds(kind) {
                let expected = format!(
                    "{ORIGIN}{}/{}",
                    kind.subdir(),
                    kind.destination_filename(entry.build)
                );
                assert_eq!(entry.url, expected);
            }
        }
    }
}
