use strum_macros::Display;

use crate::internal::models::Item;

/// The three list orderings. `Top` keeps the remote ranking untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortType {
    #[default]
    Top,
    Best,
    New,
}

impl SortType {
    /// Advance to the next ordering, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            SortType::Top => SortType::Best,
            SortType::Best => SortType::New,
            SortType::New => SortType::Top,
        }
    }
}

/// Return a sorted copy for display. The stored ranked order is never
/// mutated; sorting happens per render.
pub fn sort_items(items: &[Item], sort: SortType) -> Vec<Item> {
    let mut out = items.to_vec();
    match sort {
        SortType::Top => {}
        // Absent score counts as zero.
        SortType::Best => out.sort_by(|a, b| b.score.unwrap_or(0).cmp(&a.score.unwrap_or(0))),
        SortType::New => out.sort_by(|a, b| b.time.unwrap_or(0).cmp(&a.time.unwrap_or(0))),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, score: Option<u32>, time: Option<i64>) -> Item {
        Item {
            id,
            title: Some(format!("story {}", id)),
            score,
            time,
            ..Item::default()
        }
    }

    #[test]
    fn top_is_identity() {
        let items = vec![item(1, Some(5), Some(10)), item(2, Some(50), Some(1))];
        assert_eq!(sort_items(&items, SortType::Top), items);
    }

    #[test]
    fn best_is_descending_by_score_with_absent_as_zero() {
        let items = vec![
            item(1, Some(3), None),
            item(2, None, None),
            item(3, Some(90), None),
        ];
        let sorted = sort_items(&items, SortType::Best);
        let ids: Vec<_> = sorted.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn new_is_descending_by_time() {
        let items = vec![
            item(1, None, Some(100)),
            item(2, None, Some(300)),
            item(3, None, Some(200)),
        ];
        let sorted = sort_items(&items, SortType::New);
        let ids: Vec<_> = sorted.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn sorting_does_not_touch_the_input() {
        let items = vec![item(1, Some(1), Some(1)), item(2, Some(9), Some(9))];
        let before = items.clone();
        let _ = sort_items(&items, SortType::Best);
        assert_eq!(items, before);
    }

    #[test]
    fn cycle_covers_all_three() {
        assert_eq!(SortType::Top.cycle(), SortType::Best);
        assert_eq!(SortType::Best.cycle(), SortType::New);
        assert_eq!(SortType::New.cycle(), SortType::Top);
    }

    #[test]
    fn display_names_match_the_selector_labels() {
        assert_eq!(SortType::Top.to_string(), "top");
        assert_eq!(SortType::Best.to_string(), "best");
        assert_eq!(SortType::New.to_string(), "new");
    }
}
