//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `leaderboard`, etc.) so individual
//! components can depend on small focused models. Mutations are plain
//! reducer functions over `&mut` state plus the storage facade, which keeps
//! every branch runnable in native tests without a browser.

pub mod auth;
pub mod directory;
pub mod leaderboard;
pub mod toast;
pub mod ui;
