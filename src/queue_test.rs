//! ImportQueue のユニットテスト

use super::*;

#[test]
fn push_appends_in_order() {
    let mut queue = ImportQueue::new();
    assert!(queue.push("/pkg/a.unitypackage"));
    assert!(queue.push("/pkg/b.unitypackage"));

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.get(0), Some(Path::new("/pkg/a.unitypackage")));
    assert_eq!(queue.get(1), Some(Path::new("/pkg/b.unitypackage")));
}

#[test]
fn push_suppresses_duplicates() {
    let mut queue = ImportQueue::new();
    assert!(queue.push("/pkg/a.unitypackage"));
    assert!(!queue.push("/pkg/a.unitypackage"));

    assert_eq!(queue.len(), 1);
}

#[test]
fn duplicate_check_is_case_sensitive() {
    let mut queue = ImportQueue::new();
    assert!(queue.push("/pkg/a.unitypackage"));
    assert!(queue.push("/pkg/A.unitypackage"));

    assert_eq!(queue.len(), 2);
}

#[test]
fn remove_at_drops_only_target() {
    let mut queue = ImportQueue::new();
    queue.push("/pkg/a.unitypackage");
    queue.push("/pkg/b.unitypackage");
    queue.push("/pkg/c.unitypackage");

    queue.remove_at(1);

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.get(0), Some(Path::new("/pkg/a.unitypackage")));
    assert_eq!(queue.get(1), Some(Path::new("/pkg/c.unitypackage")));
}

#[test]
fn remove_at_out_of_range_is_noop() {
    let mut queue = ImportQueue::new();
    queue.push("/pkg/a.unitypackage");

    queue.remove_at(5);

    assert_eq!(queue.len(), 1);
}

#[test]
fn clear_is_idempotent() {
    let mut queue = ImportQueue::new();
    queue.push("/pkg/a.unitypackage");

    queue.clear();
    assert_eq!(queue.len(), 0);

    queue.clear();
    assert_eq!(queue.len(), 0);
}

#[test]
fn removed_path_can_be_pushed_again() {
    let mut queue = ImportQueue::new();
    queue.push("/pkg/a.unitypackage");
    queue.remove_at(0);

    assert!(queue.push("/pkg/a.unitypackage"));
    assert_eq!(queue.len(), 1);
}
