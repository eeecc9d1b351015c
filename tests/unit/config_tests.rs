use std::path::PathBuf;

use roster::config::{ColorMode, Config};
use roster::test_utils::fixtures::UnitTestFixture;

#[test]
fn explicit_config_file_sets_storage_and_display() {
    let fixture = UnitTestFixture::new();
    let path = fixture.create_file(
        "custom.toml",
        "[storage]\ndocument_path = \"class.json\"\n\n[display]\ncolor = \"never\"\n",
    );

    let config = Config::load(Some(&path), &fixture.data_path).unwrap();
    assert_eq!(config.storage.document_path, PathBuf::from("class.json"));
    assert_eq!(config.storage.rows_path, PathBuf::from("students.csv"));
    assert_eq!(config.display.color, ColorMode::Never);
}

#[test]
fn explicit_config_file_skips_project_file() {
    let fixture = UnitTestFixture::new();
    let _ = fixture.create_file("roster.toml", "[storage]\nrows_path = \"project.csv\"\n");
    let explicit = fixture.create_file("explicit.toml", "");

    let config = Config::load(Some(&explicit), &fixture.data_path).unwrap();
    assert_eq!(config.storage.rows_path, PathBuf::from("students.csv"));
}

#[test]
fn store_paths_mirror_storage_section() {
    let fixture = UnitTestFixture::new();
    let path = fixture.create_file(
        "custom.toml",
        "[storage]\ndocument_path = \"a.json\"\nrows_path = \"b.csv\"\n",
    );

    let paths = Config::load(Some(&path), &fixture.data_path)
        .unwrap()
        .store_paths();
    assert_eq!(paths.document, PathBuf::from("a.json"));
    assert_eq!(paths.rows, PathBuf::from("b.csv"));
}
