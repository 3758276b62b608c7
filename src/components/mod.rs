//! Reusable UI components.

pub mod change_password;
pub mod navbar;
pub mod toast;
