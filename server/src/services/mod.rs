//! Business logic shared by the route handlers.

pub mod monitor;
pub mod password;
pub mod session;
