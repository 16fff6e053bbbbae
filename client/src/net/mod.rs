//! Network layer: REST helpers, wire DTOs, and the realtime channel.

pub mod api;
pub mod channel;
pub mod types;
