use crate::eventos::model::{Category, Event};
use itertools::Itertools;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub category_filter: Option<Category>,
    pub name_query: String,
    pub sort_direction: SortDirection,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category_filter: None,
            name_query: String::new(),
            sort_direction: SortDirection::Ascending,
        }
    }
}

/**
Derives the visible subset: active events matching the category and name
filters, sorted chronologically. Events with equal dates keep their
relative input order.
*/
pub fn visible_events(events: &[Event], filter: &FilterState) -> Vec<Event> {
    let query = filter.name_query.to_lowercase();

    events
        .iter()
        .filter(|event| event.is_active())
        .filter(|event| {
            filter
                .category_filter
                .map_or(true, |category| event.category == Some(category))
        })
        .filter(|event| event.name.to_lowercase().contains(&query))
        .cloned()
        .sorted_by(|a, b| match filter.sort_direction {
            SortDirection::Ascending => a.date.cmp(&b.date),
            SortDirection::Descending => b.date.cmp(&a.date),
        })
        .collect()
}
