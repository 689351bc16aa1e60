//! Loading renaming tables from mapping files.

use std::io::Write;

use rstest::rstest;
use srgmap::srg::{self, LoadError, RenamingTables};

fn load_text(text: &str) -> RenamingTables {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    srg::load(file.path()).unwrap()
}

#[rstest]
#[case("CL: ab/C cd", 1, 0, 0, 0)]
#[case("FD: ab/C/field newfield", 0, 1, 0, 0)]
#[case("MD: ab/C/method (I)V newmethod", 0, 0, 1, 0)]
#[case("PA: ab/C/method (I)V argOne argTwo", 0, 0, 0, 1)]
#[case("CL: onlyone", 0, 0, 0, 0)]
fn test_single_line_tables(
    #[case] line: &str,
    #[case] classes: usize,
    #[case] fields: usize,
    #[case] methods: usize,
    #[case] parameters: usize,
) {
    let tables = load_text(line);
    assert_eq!(tables.class_count(), classes);
    assert_eq!(tables.field_count(), fields);
    assert_eq!(tables.method_count(), methods);
    assert_eq!(tables.parameter_list_count(), parameters);
}

#[test]
fn test_full_mapping_file() {
    let tables = load_text(
        "\
PK: net/minecraft/server net/minecraft/server
CL: ab/C cd
CL: ab/C$Inner cd$Inner
FD: ab/C/field newfield
MD: ab/C/method (I)V newmethod
MD: ab/C/other (Lab/C;)Lab/C; ab/C/renamed (Lcd;)Lcd;
PA: ab/C/method (I)V argOne argTwo
CL: onlyone
",
    );

    assert_eq!(tables.class("ab.C").unwrap().new_name, "cd");
    assert_eq!(tables.class("ab.C$Inner").unwrap().new_name, "cd$Inner");

    let field = tables.field("ab.C", "field").unwrap();
    assert_eq!((field.owner.as_str(), field.new_name.as_str()), ("ab.C", "newfield"));

    assert_eq!(
        tables.method("ab.C", "method", "(I)V").unwrap().new_name,
        "newmethod"
    );
    let other = tables.method("ab.C", "other", "(Lab/C;)Lab/C;").unwrap();
    assert_eq!(other.new_name, "renamed");

    assert_eq!(
        tables
            .parameter_names("ab.C", "method", "(I)V")
            .unwrap()
            .names,
        vec!["argOne", "argTwo"]
    );
    assert_eq!(tables.parameter_name("ab.C", "method", "(I)V", 0), Some("argOne"));
    let lists: Vec<_> = tables.parameter_lists().map(|p| p.method.as_str()).collect();
    assert_eq!(lists, vec!["method"]);

    assert_eq!(tables.skipped_lines(), 1);
    assert_eq!(tables.unrecognized_lines(), 1);
}

#[test]
fn test_reader_and_string_agree_with_file() {
    let text = "CL: ab/C cd\nFD: ab/C/field newfield\n";
    let from_file = load_text(text);
    let from_reader = srg::from_reader(text.as_bytes()).unwrap();
    let from_str = srg::parse_str(text);

    for tables in [&from_file, &from_reader, &from_str] {
        assert_eq!(tables.class_count(), 1);
        assert_eq!(tables.field("ab.C", "field").unwrap().new_name, "newfield");
    }
}

#[test]
fn test_missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = srg::load(dir.path().join("none.srg")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("none.srg"));
}

#[test]
fn test_latin1_line_does_not_abort_file_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"CL: ab/C cd\nFD: ab/C/caf\xe9 newfield\nMD: ab/C/method (I)V newmethod\n")
        .unwrap();
    file.flush().unwrap();

    let tables = srg::load(file.path()).unwrap();
    assert_eq!(tables.class_count(), 1);
    assert_eq!(tables.method_count(), 1);
    assert_eq!(tables.field_count(), 0);
    assert_eq!(tables.skipped_lines(), 1);
}
