//! Backend contract: wire types, REST calls, and the auth-change channel.

pub mod api;
pub mod auth_events;
pub mod types;
