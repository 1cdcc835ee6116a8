//! Small browser-facing utilities shared across pages and components.

pub mod dark_mode;
pub mod query;
pub mod storage;
