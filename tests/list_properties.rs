use proptest::prelude::*;

use hn_pager::internal::models::{Item, filter_titled};
use hn_pager::internal::ui::pager;
use hn_pager::internal::ui::sort::{SortType, sort_items};

fn arb_item() -> impl Strategy<Value = Item> {
    (
        any::<u32>(),
        proptest::option::of(any::<u32>()),
        proptest::option::of(any::<i64>()),
        proptest::option::of("[a-z ]{0,16}"),
    )
        .prop_map(|(id, score, time, title)| Item {
            id,
            score,
            time,
            title,
            ..Item::default()
        })
}

proptest! {
    #[test]
    fn best_sort_is_non_increasing_in_score(items in proptest::collection::vec(arb_item(), 0..40)) {
        let sorted = sort_items(&items, SortType::Best);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].score.unwrap_or(0) >= pair[1].score.unwrap_or(0));
        }
    }

    #[test]
    fn new_sort_is_non_increasing_in_time(items in proptest::collection::vec(arb_item(), 0..40)) {
        let sorted = sort_items(&items, SortType::New);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].time.unwrap_or(0) >= pair[1].time.unwrap_or(0));
        }
    }

    #[test]
    fn top_sort_is_a_no_op(items in proptest::collection::vec(arb_item(), 0..40)) {
        prop_assert_eq!(sort_items(&items, SortType::Top), items);
    }

    #[test]
    fn filtered_batches_never_contain_untitled_items(
        fetched in proptest::collection::vec(proptest::option::of(arb_item()), 0..40)
    ) {
        for item in filter_titled(fetched) {
            prop_assert!(item.title.is_some());
        }
    }

    #[test]
    fn page_windows_cover_the_expected_range(len in 0usize..400, page in 1u32..14) {
        let ids: Vec<u32> = (0..len as u32).collect();
        let window = pager::page_slice(&ids, page);
        let start = (page as usize - 1) * pager::PAGE_SIZE;

        if start >= len {
            prop_assert!(window.is_empty());
        } else {
            prop_assert_eq!(window[0] as usize, start);
            prop_assert_eq!(window.len(), (len - start).min(pager::PAGE_SIZE));
        }
    }
}
