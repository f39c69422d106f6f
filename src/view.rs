//! Filter and sort state for the transaction table, and the pure projection
//! from a [`TransactionStore`] to the rows that get rendered.

use crate::models::TransactionRecord;
use crate::store::TransactionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionView {
    filter_query: String,
    sort: Option<SortDirection>,
}

/// Rows ready for rendering, plus whether the store itself had nothing in it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projection {
    pub rows: Vec<TransactionRecord>,
    pub store_empty: bool,
}

impl Projection {
    /// The "no data" placeholder depends only on the unfiltered store.
    pub fn shows_placeholder(&self) -> bool {
        self.store_empty
    }
}

impl TransactionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort
    }

    pub fn set_filter_query(&mut self, text: &str) {
        self.filter_query = text.to_lowercase();
    }

    /// Starts ascending, then alternates.
    pub fn toggle_sort(&mut self) {
        self.sort = Some(match self.sort {
            None => SortDirection::Ascending,
            Some(direction) => direction.flipped(),
        });
    }

    pub fn project(&self, store: &TransactionStore) -> Projection {
        let mut rows = filter_records(store.all(), &self.filter_query);
        if let Some(direction) = self.sort {
            sort_records(&mut rows, direction);
        }
        Projection {
            rows,
            store_empty: store.is_empty(),
        }
    }
}

/// Keeps records whose description, category or type contains `query`,
/// case-insensitively. Input order is preserved.
pub fn filter_records(records: &[TransactionRecord], query: &str) -> Vec<TransactionRecord> {
    let query = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.matches(&query))
        .cloned()
        .collect()
}

/// Stable sort on `amount`; equal amounts keep their relative order.
pub fn sort_records(records: &mut [TransactionRecord], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => records.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
        SortDirection::Descending => records.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
    }
}
