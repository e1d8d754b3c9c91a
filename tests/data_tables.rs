use camino::Utf8PathBuf;

use fgenesh_data_manager::data_tables::{DataTables, TableEntry};

fn entry(value: &str, dbkey: Option<&str>) -> TableEntry {
    TableEntry {
        value: value.to_string(),
        name: "Parameter file for Mammals".to_string(),
        path: "/tmp/out/par/mammals".to_string(),
        dbkey: dbkey.map(str::to_string),
    }
}

#[test]
fn json_keys_are_sorted() {
    let mut tables = DataTables::new();
    tables.add_table("fgenesh_par");
    tables.add_table("fgenesh_nr");
    tables
        .add_entry("fgenesh_par", entry("par-mammals-01012024", None))
        .unwrap();

    let json = tables.to_json().unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"data_tables":{"fgenesh_nr":[],"fgenesh_par":[{"#,
            r#""name":"Parameter file for Mammals","path":"/tmp/out/par/mammals","#,
            r#""value":"par-mammals-01012024"}]}}"#
        )
    );
}

#[test]
fn dbkey_is_written_when_present() {
    let mut tables = DataTables::new();
    tables.add_table("fgenesh_par");
    tables
        .add_entry("fgenesh_par", entry("par-mammals-6-01012024", Some("6")))
        .unwrap();

    let json = tables.to_json().unwrap();
    assert!(json.contains(r#"{"dbkey":"6","name""#));
}

#[test]
fn write_replaces_existing_record() {
    let temp = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(temp.path().join("galaxy.json")).unwrap();
    std::fs::write(path.as_std_path(), "x".repeat(4096)).unwrap();

    let mut tables = DataTables::new();
    tables.add_table("fgenesh_par");
    tables.write(&path).unwrap();

    let content = std::fs::read_to_string(path.as_std_path()).unwrap();
    assert_eq!(content, r#"{"data_tables":{"fgenesh_par":[]}}"#);
    assert!(!temp.path().join("galaxy.json.tmp").exists());
}
