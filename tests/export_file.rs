// tests/export_file.rs
//
// Writing the grant table to disk without UI.

use std::fs;

use grant_finder::collect::GrantIds;
use grant_finder::config::options::{ ExportFormat, ExportOptions };
use grant_finder::file;

fn ids(list: &[&'static str]) -> GrantIds {
    list.iter().copied().collect()
}

#[test]
fn csv_has_header_and_one_row_per_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_path(dir.path().join("nested/out/grant_ids.csv").to_str().unwrap());

    let path = file::write_export(&export, &ids(&["216596/Z/19/Z", "098051", "216596/Z/19/Z"])).unwrap();

    assert!(path.ends_with("nested/out/grant_ids.csv"));
    let s = fs::read_to_string(&path).unwrap();
    assert_eq!(s, "Grant ID\n098051\n216596/Z/19/Z\n");
}

#[test]
fn tsv_swaps_extension_and_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_path(dir.path().join("wellcome.csv").to_str().unwrap());
    export.format = ExportFormat::Tsv;
    export.include_headers = false;

    let path = file::write_export(&export, &ids(&["a,b"])).unwrap();

    assert_eq!(path, dir.path().join("wellcome.tsv"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n");
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("ids.csv");
    fs::write(&target, "stale\nstale\nstale\n").unwrap();

    let mut export = ExportOptions::default();
    export.set_path(target.to_str().unwrap());
    file::write_export(&export, &ids(&["A1"])).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "Grant ID\nA1\n");
}

#[test]
fn file_in_place_of_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("out");
    fs::write(&blocker, "").unwrap();

    let mut export = ExportOptions::default();
    export.set_path(blocker.join("ids.csv").to_str().unwrap());
    assert!(file::write_export(&export, &ids(&["A1"])).is_err());
}
