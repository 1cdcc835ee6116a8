//! Routed pages.

pub mod auth_error;
pub mod auth_success;
pub mod home;
pub mod projects;
