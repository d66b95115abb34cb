use crate::error::AppError;
use crate::stats::DashboardStats;

/// What the dashboard shows at a given moment.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// The stats request has not settled yet.
    Loading,
    /// The request failed; carries a message fit for display.
    Errored(String),
    Ready(DashboardStats),
}

impl ViewState {
    /// Derive the view from a resource slot: `None` while pending, then the
    /// settled server function result rendered as a string error.
    pub fn from_resource<E: ToString>(slot: Option<&Result<DashboardStats, E>>) -> Self {
        match slot {
            None => ViewState::Loading,
            Some(Ok(stats)) => ViewState::Ready(stats.clone()),
            Some(Err(err)) => ViewState::Errored(AppError::friendly_message(&err.to_string())),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}
