//! Reactive application state, provided as `RwSignal` contexts by `App`.

pub mod auth;
pub mod services;
pub mod ui;
