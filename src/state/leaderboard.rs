//! Leaderboard selection model and pure ranking helpers.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use crate::net::types::LeaderboardProject;

/// Stats window selectable above the leaderboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    Day,
    #[default]
    Week,
    Month,
}

impl Period {
    pub const ALL: [Self; 3] = [Self::Day, Self::Week, Self::Month];

    /// Value of the `stats_period` query parameter, also used as the
    /// selector label.
    pub fn query_value(self) -> &'static str {
        match self {
            Self::Day => "24h",
            Self::Week => "7d",
            Self::Month => "30d",
        }
    }

    /// Segment shown in the breadcrumb line under the title.
    pub fn breadcrumb(self) -> &'static str {
        match self {
            Self::Day => "daily",
            Self::Week => "weekly",
            Self::Month => "monthly",
        }
    }
}

/// Ranking metric selectable above the leaderboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    #[default]
    Points,
    FollowersGrowth,
    SmartFollowers,
    Engagement,
}

impl Metric {
    pub const ALL: [Self; 4] = [
        Self::Points,
        Self::FollowersGrowth,
        Self::SmartFollowers,
        Self::Engagement,
    ];

    /// Selector button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Points => "Points",
            Self::FollowersGrowth => "Growth",
            Self::SmartFollowers => "Smart",
            Self::Engagement => "Engagement",
        }
    }

    /// Short column header above the metric cell.
    pub fn column_label(self) -> &'static str {
        match self {
            Self::Points => "Pts",
            Self::FollowersGrowth => "+Fol",
            Self::SmartFollowers => "Smart",
            Self::Engagement => "Eng",
        }
    }

    /// Segment shown in the breadcrumb line under the title.
    pub fn breadcrumb(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::FollowersGrowth => "followers-growth",
            Self::SmartFollowers => "smart-followers",
            Self::Engagement => "engagement",
        }
    }

    /// Numeric value of this metric for one row; missing stats read as
    /// zero.
    pub fn value(self, project: &LeaderboardProject) -> f64 {
        match self {
            Self::Points => project.global_points,
            Self::FollowersGrowth => project.stats.as_ref().map_or(0.0, |s| s.followers_growth),
            Self::SmartFollowers => project.smart_followers_count as f64,
            Self::Engagement => project
                .stats
                .as_ref()
                .map_or(0.0, |s| s.engagement_count as f64),
        }
    }
}

/// Sort rows descending by the selected metric. `sort_by` is stable, so
/// ties keep the server's insertion order.
pub fn sort_by_metric(projects: &mut [LeaderboardProject], metric: Metric) {
    projects.sort_by(|a, b| metric.value(b).total_cmp(&metric.value(a)));
}

/// Smart-follower share of the total follower count, formatted for the
/// table (`0%` when the project has no followers).
pub fn smart_ratio(project: &LeaderboardProject) -> String {
    if project.followers_count == 0 {
        return "0%".to_owned();
    }
    let pct = project.smart_followers_count as f64 / project.followers_count as f64 * 100.0;
    format!("{pct:.1}%")
}

/// Zero-padded rank cell (`01`, `02`, ...).
pub fn rank_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Thousands-separated rendering for counts and point totals; the
/// fractional part is dropped.
pub fn format_count(value: f64) -> String {
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}
