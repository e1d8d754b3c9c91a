use assert_matches::assert_matches;

use fgenesh_data_manager::catalog;
use fgenesh_data_manager::domain::DatabaseKind;
use fgenesh_data_manager::error::FgeneshError;

#[test]
fn lookup_known_build() {
    let entry = catalog::lookup(DatabaseKind::Par, "mammals").unwrap();
    assert_eq!(entry.name, "Parameter file for Mammals");
    assert!(entry.url.starts_with(catalog::ORIGIN));
}

#[test]
fn display_names_and_urls_agree() {
    for kind in DatabaseKind::ALL {
        assert!(!catalog::builds(kind).is_empty());
        for entry in catalog::builds(kind) {
            assert_eq!(catalog::display_name(kind, entry.build).unwrap(), entry.name);
            assert_eq!(catalog::source_url(kind, entry.build).unwrap(), entry.url);
        }
    }
}

#[test]
fn build_is_scoped_to_its_kind() {
    let err = catalog::lookup(DatabaseKind::Nr, "mammals").unwrap_err();
    assert_matches!(
        err,
        FgeneshError::UnknownBuild { kind, build } if kind == "nr" && build == "mammals"
    );
}

#[test]
fn matrix_builds_are_flat() {
    let builds: Vec<_> = catalog::builds(DatabaseKind::Matrix)
        .iter()
        .map(|entry| entry.build)
        .collect();
    assert_eq!(
        builds,
        vec!["C_elegans_nGASP", "map_ko_uniref90", "map_pfam_name"]
    );
}
