//! Dashboard state: one reducer owning the transaction store, the table view
//! and the summary data, updated only through [`DashboardAction`]s.

use std::rc::Rc;

use yew::prelude::*;

use crate::api::ApiClient;
use crate::charts::ChartSet;
use crate::error::ApiError;
use crate::models::{CategoryTotals, Insights, MonthlySummary, Summary, TransactionRecord};
use crate::store::TransactionStore;
use crate::view::{Projection, TransactionView};

/// Everything one refresh fetches. Built only when every request succeeded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub transactions: Vec<TransactionRecord>,
    pub summary: Summary,
    pub categories: CategoryTotals,
    pub monthly: MonthlySummary,
    pub insights: Insights,
}

impl DashboardSnapshot {
    /// Fetches all dashboard data. Any failed request fails the whole load so
    /// the page never mixes fresh and stale sections.
    pub async fn load(client: &ApiClient) -> Result<Self, ApiError> {
        let transactions = client.transactions().await?;
        let summary = client.summary().await?;
        let categories = client.category_totals().await?;
        let monthly = client.monthly().await?;
        let insights = client.insights().await?;
        log::debug!("dashboard snapshot loaded: {} transactions", transactions.len());
        Ok(Self {
            transactions,
            summary,
            categories,
            monthly,
            insights,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing has loaded yet.
    Loading,
    Ready,
    /// The first load failed; there is no data to show.
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub store: TransactionStore,
    pub view: TransactionView,
    pub summary: Summary,
    pub insights: Insights,
    pub charts: ChartSet,
    pub status: LoadStatus,
    pub refreshing: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            store: TransactionStore::new(),
            view: TransactionView::new(),
            summary: Summary::default(),
            insights: Insights::default(),
            charts: ChartSet::default(),
            status: LoadStatus::Loading,
            refreshing: true,
        }
    }
}

#[derive(Debug)]
pub enum DashboardAction {
    RefreshStarted,
    Loaded(Box<DashboardSnapshot>),
    /// A refresh failed; whatever was on screen stays.
    LoadFailed,
    SetFilter(String),
    ToggleSort,
    Dispose,
}

impl DashboardState {
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::RefreshStarted => self.refreshing = true,
            DashboardAction::Loaded(snapshot) => {
                let snapshot = *snapshot;
                self.charts.replace(&snapshot.categories, &snapshot.monthly);
                self.store.replace_all(snapshot.transactions);
                self.summary = snapshot.summary;
                self.insights = snapshot.insights;
                self.status = LoadStatus::Ready;
                self.refreshing = false;
            }
            DashboardAction::LoadFailed => {
                if self.status == LoadStatus::Loading {
                    self.status = LoadStatus::Failed;
                }
                self.refreshing = false;
            }
            DashboardAction::SetFilter(text) => self.view.set_filter_query(&text),
            DashboardAction::ToggleSort => self.view.toggle_sort(),
            DashboardAction::Dispose => {
                self.store.clear();
                self.charts.dispose();
                self.summary = Summary::default();
                self.insights = Insights::default();
                self.status = LoadStatus::Loading;
                self.refreshing = false;
            }
        }
    }

    /// A reload is running while earlier data is already on screen.
    pub fn refreshing_in_background(&self) -> bool {
        self.refreshing && self.status != LoadStatus::Loading
    }

    pub fn projection(&self) -> Projection {
        self.view.project(&self.store)
    }

    /// "No transactions" placeholder: a load finished and the store is empty.
    pub fn shows_empty_placeholder(&self, projection: &Projection) -> bool {
        self.status == LoadStatus::Ready && projection.shows_placeholder()
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionId, TransactionType};

    fn record(id: TransactionId, amount: f64, description: &str, category: &str) -> TransactionRecord {
        TransactionRecord {
            id: Some(id),
            description: description.into(),
            category: category.into(),
            amount,
            transaction_type: TransactionType::Expense,
            ..Default::default()
        }
    }

    fn snapshot(transactions: Vec<TransactionRecord>) -> Box<DashboardSnapshot> {
        Box::new(DashboardSnapshot {
            transactions,
            summary: Summary {
                total_income: 0.0,
                total_expense: 60.0,
                balance: -60.0,
            },
            ..Default::default()
        })
    }

    #[test]
    fn test_starts_loading_without_placeholder() {
        let state = DashboardState::default();
        assert_eq!(state.status, LoadStatus::Loading);
        assert!(!state.shows_empty_placeholder(&state.projection()));
    }

    #[test]
    fn test_loaded_snapshot_replaces_everything() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::Loaded(snapshot(vec![record(1, 10.0, "Tea", "Food")])));
        state.apply(DashboardAction::Loaded(snapshot(vec![
            record(2, 20.0, "Bus", "Transport"),
            record(3, 40.0, "Lunch", "Food"),
        ])));

        assert_eq!(state.status, LoadStatus::Ready);
        assert!(!state.refreshing);
        assert_eq!(state.store.len(), 2);
        assert!(state.store.get(1).is_none());
        assert_eq!(state.summary.total_expense, 60.0);
    }

    #[test]
    fn test_view_state_survives_reload() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::SetFilter("FOOD".into()));
        state.apply(DashboardAction::ToggleSort);
        state.apply(DashboardAction::Loaded(snapshot(vec![
            record(1, 40.0, "Lunch", "Food"),
            record(2, 20.0, "Bus", "Transport"),
            record(3, 10.0, "Tea", "Food"),
        ])));

        let ids: Vec<_> = state.projection().rows.iter().filter_map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_data() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::Loaded(snapshot(vec![record(1, 10.0, "Tea", "Food")])));
        state.apply(DashboardAction::RefreshStarted);
        state.apply(DashboardAction::LoadFailed);

        assert_eq!(state.status, LoadStatus::Ready);
        assert!(!state.refreshing);
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn test_background_refresh_only_after_first_load() {
        let mut state = DashboardState::default();
        assert!(state.refreshing);
        assert!(!state.refreshing_in_background());

        state.apply(DashboardAction::Loaded(snapshot(vec![record(1, 10.0, "Tea", "Food")])));
        assert!(!state.refreshing_in_background());

        state.apply(DashboardAction::RefreshStarted);
        assert!(state.refreshing_in_background());

        state.apply(DashboardAction::Loaded(snapshot(vec![])));
        assert!(!state.refreshing_in_background());
    }

    #[test]
    fn test_failed_first_load() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::LoadFailed);
        assert_eq!(state.status, LoadStatus::Failed);
        assert!(!state.shows_empty_placeholder(&state.projection()));
    }

    #[test]
    fn test_empty_store_shows_placeholder_but_empty_filter_does_not() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::Loaded(snapshot(vec![])));
        assert!(state.shows_empty_placeholder(&state.projection()));

        state.apply(DashboardAction::Loaded(snapshot(vec![record(1, 10.0, "Tea", "Food")])));
        state.apply(DashboardAction::SetFilter("nope".into()));
        assert!(state.projection().rows.is_empty());
        assert!(!state.shows_empty_placeholder(&state.projection()));
    }

    #[test]
    fn test_reduce_returns_new_state() {
        let state = Rc::new(DashboardState::default());
        let next = state.clone().reduce(DashboardAction::ToggleSort);
        assert_eq!(state.view.sort_direction(), None);
        assert!(next.view.sort_direction().is_some());
    }

    #[test]
    fn test_dispose_clears_data() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::Loaded(snapshot(vec![record(1, 10.0, "Tea", "Food")])));
        state.apply(DashboardAction::Dispose);
        assert!(state.store.is_empty());
        assert_eq!(state.charts, ChartSet::default());
        assert_eq!(state.status, LoadStatus::Loading);
    }
}
