use super::*;
use crate::net::types::ProjectStats;

fn project(id: &str, points: f64, smart: u64, stats: Option<ProjectStats>) -> LeaderboardProject {
    LeaderboardProject {
        id: id.to_owned(),
        name: id.to_owned(),
        display_name: id.to_uppercase(),
        followers_count: 100,
        smart_followers_count: smart,
        global_points: points,
        stats,
        ..LeaderboardProject::default()
    }
}

fn stats(growth: f64, engagement: u64) -> ProjectStats {
    ProjectStats {
        followers_growth: growth,
        engagement_count: engagement,
        ..ProjectStats::default()
    }
}

fn ids(projects: &[LeaderboardProject]) -> Vec<&str> {
    projects.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn sorts_descending_by_points() {
    let mut rows = vec![
        project("low", 1.0, 0, None),
        project("high", 9.0, 0, None),
        project("mid", 5.0, 0, None),
    ];
    sort_by_metric(&mut rows, Metric::Points);
    assert_eq!(ids(&rows), vec!["high", "mid", "low"]);
}

#[test]
fn sorts_descending_by_growth_with_missing_stats_as_zero() {
    let mut rows = vec![
        project("none", 0.0, 0, None),
        project("up", 0.0, 0, Some(stats(12.0, 0))),
        project("down", 0.0, 0, Some(stats(-3.0, 0))),
    ];
    sort_by_metric(&mut rows, Metric::FollowersGrowth);
    // Missing stats read as zero, which outranks a negative growth.
    assert_eq!(ids(&rows), vec!["up", "none", "down"]);
}

#[test]
fn sorts_descending_by_smart_followers() {
    let mut rows = vec![
        project("a", 0.0, 3, None),
        project("b", 0.0, 30, None),
        project("c", 0.0, 12, None),
    ];
    sort_by_metric(&mut rows, Metric::SmartFollowers);
    assert_eq!(ids(&rows), vec!["b", "c", "a"]);
}

#[test]
fn sorts_descending_by_engagement() {
    let mut rows = vec![
        project("quiet", 0.0, 0, Some(stats(0.0, 2))),
        project("loud", 0.0, 0, Some(stats(0.0, 200))),
        project("silent", 0.0, 0, None),
    ];
    sort_by_metric(&mut rows, Metric::Engagement);
    assert_eq!(ids(&rows), vec!["loud", "quiet", "silent"]);
}

#[test]
fn ties_preserve_insertion_order() {
    let mut rows = vec![
        project("first", 5.0, 0, None),
        project("second", 5.0, 0, None),
        project("third", 5.0, 0, None),
    ];
    sort_by_metric(&mut rows, Metric::Points);
    assert_eq!(ids(&rows), vec!["first", "second", "third"]);
}

#[test]
fn sorting_is_total_for_every_metric() {
    // No metric may fault on rows with and without stats.
    let template = vec![
        project("a", 3.0, 7, Some(stats(1.5, 9))),
        project("b", 0.0, 0, None),
        project("c", -2.0, 1, Some(stats(-4.0, 0))),
    ];
    for metric in Metric::ALL {
        let mut rows = template.clone();
        sort_by_metric(&mut rows, metric);
        assert_eq!(rows.len(), 3);
        for pair in rows.windows(2) {
            assert!(metric.value(&pair[0]) >= metric.value(&pair[1]));
        }
    }
}

#[test]
fn smart_ratio_formats_one_decimal() {
    let mut p = project("a", 0.0, 25, None);
    assert_eq!(smart_ratio(&p), "25.0%");

    p.smart_followers_count = 333;
    p.followers_count = 1000;
    assert_eq!(smart_ratio(&p), "33.3%");
}

#[test]
fn smart_ratio_handles_zero_followers() {
    let mut p = project("a", 0.0, 5, None);
    p.followers_count = 0;
    assert_eq!(smart_ratio(&p), "0%");
}

#[test]
fn rank_labels_are_zero_padded() {
    assert_eq!(rank_label(0), "01");
    assert_eq!(rank_label(9), "10");
    assert_eq!(rank_label(99), "100");
}

#[test]
fn format_count_groups_thousands() {
    assert_eq!(format_count(0.0), "0");
    assert_eq!(format_count(999.0), "999");
    assert_eq!(format_count(1000.0), "1,000");
    assert_eq!(format_count(1_234_567.0), "1,234,567");
    assert_eq!(format_count(-4_200.0), "-4,200");
    assert_eq!(format_count(12_847.4), "12,847");
}

#[test]
fn period_query_values_match_the_api_contract() {
    assert_eq!(Period::Day.query_value(), "24h");
    assert_eq!(Period::Week.query_value(), "7d");
    assert_eq!(Period::Month.query_value(), "30d");
    assert_eq!(Period::default(), Period::Week);
}

#[test]
fn metric_labels_are_distinct() {
    for metric in Metric::ALL {
        assert!(!metric.label().is_empty());
        assert!(!metric.column_label().is_empty());
        assert!(!metric.breadcrumb().is_empty());
    }
    assert_eq!(Metric::FollowersGrowth.breadcrumb(), "followers-growth");
    assert_eq!(Metric::default(), Metric::Points);
}
