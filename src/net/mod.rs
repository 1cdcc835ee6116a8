//! Remote API access and browser session glue.
//!
//! `types` holds the wire payloads and envelope probing, `api` the HTTP
//! calls, and `session` the browser-side session lifecycle built on the
//! pure reducers in `state::auth`.

pub mod api;
pub mod session;
pub mod types;
