//! Presentational components used by the dashboard page.

pub mod globe;
pub mod line_chart;
pub mod service_card;
