use super::*;
use proptest::prelude::*;
use std::collections::HashSet;

/// パスとして使える文字列（英数字、ハイフン、アンダースコア）
fn path_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}".prop_map(|name| format!("/pkg/{}.unitypackage", name))
}

proptest! {
    /// どんな push 列でもキューに重複は存在しない
    #[test]
    fn prop_no_duplicates_after_any_push_sequence(
        paths in proptest::collection::vec(path_strategy(), 0..50)
    ) {
        let mut queue = ImportQueue::new();
        for path in &paths {
            queue.push(path.as_str());
        }

        let unique: HashSet<_> = queue.iter().collect();
        prop_assert_eq!(unique.len(), queue.len());
    }

    /// キューの内容は初出順を保つ
    #[test]
    fn prop_first_occurrence_order_preserved(
        paths in proptest::collection::vec(path_strategy(), 0..50)
    ) {
        let mut queue = ImportQueue::new();
        for path in &paths {
            queue.push(path.as_str());
        }

        let mut seen = HashSet::new();
        let expected: Vec<&str> = paths
            .iter()
            .filter(|p| seen.insert(p.as_str()))
            .map(String::as_str)
            .collect();

        let actual: Vec<_> = queue.iter().map(|p| p.to_str().unwrap()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// push の戻り値は「追加されたかどうか」と一致する
    #[test]
    fn prop_push_return_matches_growth(
        paths in proptest::collection::vec(path_strategy(), 0..50)
    ) {
        let mut queue = ImportQueue::new();
        for path in &paths {
            let before = queue.len();
            let appended = queue.push(path.as_str());
            prop_assert_eq!(queue.len(), before + usize::from(appended));
        }
    }
}
