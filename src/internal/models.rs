use serde::Deserialize;

/// A story or comment as returned by `item/{id}.json`. Comments are reached
/// through another item's `kids` list; the shape is the same either way.
///
/// Every attribute the API may omit is an `Option`, so "absent" stays
/// distinct from "zero" (the score sort depends on that).
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Item {
    pub id: u32,
    pub title: Option<String>,
    pub url: Option<String>,
    pub by: Option<String>,
    pub score: Option<u32>,
    pub time: Option<i64>,
    pub text: Option<String>,
    pub descendants: Option<u32>,
    pub kids: Option<Vec<u32>>,
}

/// Where the detail view currently stands. `NotFound` (a null record) is a
/// distinct terminal state, not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailStatus {
    #[default]
    Idle,
    Loading,
    NotFound,
    Ready(Item),
    Failed(String),
}

/// Collapse a batch-fetch result into displayable list entries: nulls and
/// items without a title are dropped, ranked order is preserved.
pub fn filter_titled(fetched: Vec<Option<Item>>) -> Vec<Item> {
    fetched
        .into_iter()
        .flatten()
        .filter(|item| item.title.is_some())
        .collect()
}
