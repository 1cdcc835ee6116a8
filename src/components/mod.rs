//! Reusable view components.

pub mod leaderboard;
pub mod navbar;
pub mod sparkline;
pub mod toast_host;
