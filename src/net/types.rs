//! Wire types for the Wispr REST API.
//!
//! The remote service is treated as an untrusted collaborator: its envelope
//! guarantees are not specified anywhere, so every numeric field defaults
//! to zero when absent and unwrapping probes `serde_json::Value` instead of
//! assuming a documented shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Profile payload returned by `/users/me`. Every field is optional; the
/// server decides what it shares.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub x_avatar_url: Option<String>,
    pub x_connected: Option<bool>,
    pub followers_count: Option<u64>,
    pub points: Option<f64>,
    pub bio: Option<String>,
    pub account_type: Option<String>,
    pub tier: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl UserProfile {
    /// Name shown in the UI: prefers `display_name`, falls back to the
    /// handle.
    pub fn display(&self) -> Option<&str> {
        self.display_name.as_deref().or(self.username.as_deref())
    }

    /// Avatar URL, preferring the platform picture over the X mirror.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar_url.as_deref().or(self.x_avatar_url.as_deref())
    }

    /// Whether the server reports the X account as connected.
    pub fn is_connected(&self) -> bool {
        self.x_connected == Some(true)
    }

    /// Uppercase initial used when no avatar is available.
    pub fn initial(&self) -> char {
        self.username
            .as_deref()
            .and_then(|u| u.chars().next())
            .map_or('U', |c| c.to_ascii_uppercase())
    }
}

/// Server-computed trend classification over a stats window. The wire
/// value is one of `rising`/`falling`/`stable`; anything else reads as
/// stable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Momentum {
    Rising,
    Falling,
    #[default]
    Stable,
}

impl From<String> for Momentum {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "rising" => Self::Rising,
            "falling" => Self::Falling,
            _ => Self::Stable,
        }
    }
}

/// Time-windowed stats attached to a leaderboard row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectStats {
    #[serde(default)]
    pub followers_growth: f64,
    #[serde(default)]
    pub engagement_count: u64,
    #[serde(default)]
    pub momentum: Momentum,
    #[serde(default)]
    pub sparkline: Vec<f64>,
    #[serde(default)]
    pub period: String,
}

/// One ranked project row from the projects-listing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardProject {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub smart_followers_count: u64,
    #[serde(default)]
    pub global_points: f64,
    pub stats: Option<ProjectStats>,
}

impl LeaderboardProject {
    /// Momentum for the trend cell; rows without stats read as stable.
    pub fn momentum(&self) -> Momentum {
        self.stats.as_ref().map_or(Momentum::Stable, |s| s.momentum)
    }

    /// Uppercase initial used when the row has no avatar.
    pub fn initial(&self) -> char {
        self.display_name
            .chars()
            .next()
            .map_or('?', |c| c.to_ascii_uppercase())
    }
}

/// Unwrap the optional `{ "data": { ... } }` envelope around a single
/// object. Anything else is returned untouched.
pub fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.get("data").is_some_and(Value::is_object) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Extract the project list from any of the three observed response
/// envelopes: a bare array, `{ data: [...] }`, or `{ projects: [...] }`.
/// Rows that do not parse are dropped; an unrecognized envelope yields
/// `None`.
pub fn extract_projects(value: &Value) -> Option<Vec<LeaderboardProject>> {
    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(map) => match (map.get("data"), map.get("projects")) {
            (Some(Value::Array(rows)), _) => rows,
            (_, Some(Value::Array(rows))) => rows,
            _ => return None,
        },
        _ => return None,
    };
    Some(
        rows.iter()
            .filter_map(|row| serde_json::from_value(row.clone()).ok())
            .collect(),
    )
}
