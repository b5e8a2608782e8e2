// file: src/search/dedup.rs
// description: removal of repeated (name, category) pairs from a match list

use crate::models::ResultItem;
use std::collections::HashSet;

/// Keeps the first occurrence of every (name, category) pair, preserving order.
pub fn dedup_results(items: Vec<ResultItem>) -> Vec<ResultItem> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(items.len());

    items
        .into_iter()
        .filter(|item| seen.insert((item.name.clone(), item.category.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Place;
    use pretty_assertions::assert_eq;

    fn item(name: &str, category: &str) -> ResultItem {
        ResultItem::from_place(&Place::new(name, format!("{}.jpg", name), "d"), category)
    }

    #[test]
    fn test_removes_later_duplicates() {
        let items = vec![
            item("Sydney", "Australia"),
            item("Melbourne", "Australia"),
            item("Sydney", "Australia"),
        ];

        assert_eq!(
            dedup_results(items),
            vec![item("Sydney", "Australia"), item("Melbourne", "Australia")]
        );
    }

    #[test]
    fn test_same_name_different_category_is_kept() {
        let items = vec![item("Paradise", "Spiaggia"), item("Paradise", "Tempio")];
        assert_eq!(dedup_results(items.clone()), items);
    }

    #[test]
    fn test_idempotent_and_never_longer() {
        let items = vec![
            item("a", "x"),
            item("b", "x"),
            item("a", "x"),
            item("a", "y"),
            item("b", "x"),
        ];

        let once = dedup_results(items.clone());
        let twice = dedup_results(once.clone());

        assert!(once.len() <= items.len());
        assert_eq!(once, twice);
        assert_eq!(
            once.iter().map(|i| i.key()).collect::<Vec<_>>(),
            vec![("a", "x"), ("b", "x"), ("a", "y")]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_results(Vec::new()).is_empty());
    }
}
