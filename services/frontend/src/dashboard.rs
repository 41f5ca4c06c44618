//! Dashboard view state machine
//!
//! Three mutually exclusive display modes: loading, error, success.
//! Seeded once from the initial status load, then mutated only by
//! refresh completions. Overlapping refreshes are independent; the
//! last completion to take the write lock wins.

use std::sync::Arc;

use api_client::{ApiClient, RequestError, StatusResponse};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::loader::InitialStatus;

/// Mutable view state behind the dashboard panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViewState {
    /// True only while a refresh is in flight
    pub loading: bool,
    /// Last known health status
    pub status: Option<StatusResponse>,
    /// Last error message; never present together with `status`
    pub error: Option<String>,
}

impl DashboardViewState {
    /// Initial state from the page-render status load
    pub fn seeded(initial: InitialStatus) -> Self {
        Self {
            loading: false,
            status: initial.data,
            error: initial.error,
        }
    }

    /// A refresh has started; the prior panel stays visible until the
    /// refresh completes.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// A refresh has completed. Success replaces any error; failure
    /// replaces any status.
    pub fn finish_refresh(&mut self, result: Result<StatusResponse, RequestError>) {
        match result {
            Ok(status) => {
                self.status = Some(status);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.status = None;
            }
        }
        self.loading = false;
    }
}

/// Shared handle to the single dashboard view state
pub type ViewStateHandle = Arc<RwLock<DashboardViewState>>;

pub fn new_view_handle(initial: InitialStatus) -> ViewStateHandle {
    Arc::new(RwLock::new(DashboardViewState::seeded(initial)))
}

/// Run one refresh: fetch the backend's status directly (bypassing
/// the initial loader) and fold the result into the view state.
/// Returns a snapshot of the resulting state.
pub async fn refresh(handle: &ViewStateHandle, client: &ApiClient) -> DashboardViewState {
    handle.write().await.begin_refresh();

    let result = client.get::<StatusResponse>("/health/status").await;

    let mut view = handle.write().await;
    view.finish_refresh(result);
    view.clone()
}
