//! REST API helpers for the Wispr backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side /
//! native: stubs returning the error or empty branch, since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get outcome enums or `Result<_, String>` so fetch failures
//! degrade to cached or empty UI state without crashing hydration. No call
//! here retries; the leaderboard's standing 5-minute poll is the only
//! repetition in the system.

#![allow(clippy::unused_async)]

use crate::net::types::LeaderboardProject;
use crate::state::auth::ProfileFetch;
use crate::state::leaderboard::Period;
use crate::util::query;

/// Base URL of the remote API.
pub const API_BASE: &str = "https://api.wispr.top";

/// How often the leaderboard re-fetches in the background.
pub const LEADERBOARD_REFRESH_MS: u64 = 5 * 60 * 1000;

/// A successful leaderboard fetch plus its wall-clock timestamp label.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardSnapshot {
    pub projects: Vec<LeaderboardProject>,
    pub fetched_at: String,
}

/// OAuth authorization-initiation URL. The API redirects the browser back
/// to `redirect_uri` with `x_connected=true` or `x_error=true`.
pub fn authorize_url(origin: &str) -> String {
    format!(
        "{API_BASE}/auth/authorizations/x/new?redirect_uri={}",
        query::encode(origin)
    )
}

/// Fetch the authenticated profile from `/users/me`, classifying the
/// response for the session reducer.
pub async fn fetch_current_user(token: Option<String>) -> ProfileFetch {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(&format!("{API_BASE}/users/me"))
            .header("Content-Type", "application/json");
        if let Some(token) = &token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                leptos::logging::warn!("profile fetch failed: {err}");
                return ProfileFetch::Unreachable;
            }
        };
        if response.status() == 401 {
            return ProfileFetch::Unauthorized;
        }
        if !response.ok() {
            leptos::logging::warn!("profile fetch returned {}", response.status());
            return ProfileFetch::Unreachable;
        }
        match response.json::<serde_json::Value>().await {
            Ok(value) => ProfileFetch::Profile(value),
            Err(err) => {
                leptos::logging::warn!("profile payload was not JSON: {err}");
                ProfileFetch::Unreachable
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        ProfileFetch::Unreachable
    }
}

/// Fetch the ranked project list for a stats window.
///
/// # Errors
///
/// Returns a display string on transport failure, a non-2xx status, or an
/// unrecognized response envelope.
pub async fn fetch_leaderboard(period: Period) -> Result<LeaderboardSnapshot, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{API_BASE}/projects?include_stats=true&stats_period={}",
            period.query_value()
        );
        let response = gloo_net::http::Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| format!("Failed to fetch projects: {err}"))?;
        if !response.ok() {
            return Err(format!("Failed to fetch projects: {}", response.status()));
        }
        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|err| format!("Failed to fetch projects: {err}"))?;
        let projects = crate::net::types::extract_projects(&value)
            .ok_or_else(|| "Unexpected response from the projects API".to_owned())?;
        Ok(LeaderboardSnapshot {
            projects,
            fetched_at: now_label(),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = period;
        Err("projects are only fetched in the browser".to_owned())
    }
}

/// Best-effort disconnect call. Returns whether the server acknowledged;
/// the caller clears local state either way.
pub async fn post_disconnect(token: Option<String>) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = token else {
            return false;
        };
        match gloo_net::http::Request::post(&format!("{API_BASE}/auth/x/disconnect"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
        {
            Ok(response) => response.ok(),
            Err(err) => {
                leptos::logging::warn!("disconnect call failed: {err}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        false
    }
}

/// Wall-clock label for the "Last updated" footer.
#[cfg(feature = "hydrate")]
fn now_label() -> String {
    js_sys::Date::new_0().to_locale_time_string("en-US").into()
}
