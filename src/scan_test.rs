//! find_packages のユニットテスト

use super::*;
use tempfile::TempDir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, b"").unwrap();
}

#[test]
fn finds_packages_recursively() {
    let temp_dir = TempDir::new().unwrap();
    touch(&temp_dir.path().join("a.unitypackage"));
    touch(&temp_dir.path().join("nested/deep/b.unitypackage"));

    let found = find_packages(temp_dir.path());

    assert_eq!(found.len(), 2);
}

#[test]
fn ignores_other_extensions() {
    let temp_dir = TempDir::new().unwrap();
    touch(&temp_dir.path().join("a.unitypackage"));
    touch(&temp_dir.path().join("readme.txt"));
    touch(&temp_dir.path().join("archive.zip"));
    touch(&temp_dir.path().join("noext"));

    let found = find_packages(temp_dir.path());

    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("a.unitypackage"));
}

#[test]
fn extension_match_is_case_insensitive() {
    let temp_dir = TempDir::new().unwrap();
    touch(&temp_dir.path().join("a.UnityPackage"));

    let found = find_packages(temp_dir.path());

    assert_eq!(found.len(), 1);
}

#[test]
fn results_are_sorted() {
    let temp_dir = TempDir::new().unwrap();
    touch(&temp_dir.path().join("c.unitypackage"));
    touch(&temp_dir.path().join("a.unitypackage"));
    touch(&temp_dir.path().join("b.unitypackage"));

    let found = find_packages(temp_dir.path());

    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["a.unitypackage", "b.unitypackage", "c.unitypackage"]
    );
}

#[test]
fn empty_folder_yields_no_packages() {
    let temp_dir = TempDir::new().unwrap();
    assert!(find_packages(temp_dir.path()).is_empty());
}

#[test]
fn missing_folder_yields_no_packages() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");
    assert!(find_packages(&missing).is_empty());
}
