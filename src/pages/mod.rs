//! Page-level components, one per route.

pub mod admin;
pub mod auth;
pub mod home;
