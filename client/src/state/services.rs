//! Service-health state backing the dashboard.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use crate::net::types::{SamplePoint, ServiceSummary, StatusOverview};

/// Dashboard data: service summaries, the selected service, and its recent
/// probe history for the latency chart.
#[derive(Clone, Debug, Default)]
pub struct ServicesState {
    pub items: Vec<ServiceSummary>,
    pub overview: Option<StatusOverview>,
    /// Service whose history is shown in the chart panel.
    pub selected: Option<String>,
    pub history: Vec<SamplePoint>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ServicesState {
    /// Replace the summary list, keeping the selection when it still
    /// exists and falling back to the first service otherwise.
    pub fn set_items(&mut self, items: Vec<ServiceSummary>) {
        let keep = self
            .selected
            .as_ref()
            .is_some_and(|name| items.iter().any(|s| s.name == *name));
        if !keep {
            self.selected = items.first().map(|s| s.name.clone());
            self.history.clear();
        }
        self.items = items;
        self.loading = false;
        self.error = None;
    }
}
