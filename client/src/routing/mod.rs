//! Route authorization.
//!
//! ARCHITECTURE
//! ============
//! `decision` holds the pure guard logic: plain functions over explicit
//! snapshot and route-context values, testable without a UI runtime.
//! `guards` wraps that logic in the two route components (`AuthGuard`,
//! `PublicRoute`) that the router composes around pages.

pub mod decision;
pub mod guards;

pub use decision::{AuthSnapshot, PublicGate, RedirectDecision, RedirectEffector, RouteContext};
pub use guards::{AuthGuard, PublicRoute};
