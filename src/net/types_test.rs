use super::*;
use serde_json::json;

fn row(id: &str, points: f64) -> Value {
    json!({
        "id": id,
        "name": id,
        "display_name": id.to_uppercase(),
        "followers_count": 10,
        "smart_followers_count": 4,
        "global_points": points,
    })
}

#[test]
fn extract_projects_accepts_all_three_envelopes() {
    let rows = json!([row("alpha", 5.0), row("beta", 3.0)]);
    let bare = extract_projects(&rows).expect("bare array");
    let data = extract_projects(&json!({ "data": rows })).expect("data envelope");
    let named = extract_projects(&json!({ "projects": rows })).expect("projects envelope");

    assert_eq!(bare.len(), 2);
    assert_eq!(bare, data);
    assert_eq!(bare, named);
    assert_eq!(bare[0].id, "alpha");
    assert_eq!(bare[1].display_name, "BETA");
}

#[test]
fn extract_projects_prefers_data_over_projects() {
    let value = json!({
        "data": [row("from-data", 1.0)],
        "projects": [row("from-projects", 2.0)],
    });
    let projects = extract_projects(&value).expect("envelope");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, "from-data");
}

#[test]
fn extract_projects_rejects_unknown_shapes() {
    assert_eq!(extract_projects(&json!({ "items": [] })), None);
    assert_eq!(extract_projects(&json!("nope")), None);
    assert_eq!(extract_projects(&json!(42)), None);
    assert_eq!(extract_projects(&json!({ "data": { "id": "x" } })), None);
}

#[test]
fn extract_projects_drops_malformed_rows() {
    let value = json!([row("ok", 1.0), "not a project", row("also-ok", 2.0)]);
    let projects = extract_projects(&value).expect("bare array");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "ok");
    assert_eq!(projects[1].id, "also-ok");
}

#[test]
fn missing_numeric_fields_default_to_zero() {
    let value = json!([{ "id": "sparse", "name": "sparse", "display_name": "Sparse" }]);
    let projects = extract_projects(&value).expect("bare array");
    assert_eq!(projects[0].followers_count, 0);
    assert_eq!(projects[0].smart_followers_count, 0);
    assert_eq!(projects[0].global_points, 0.0);
    assert!(projects[0].stats.is_none());
}

#[test]
fn momentum_reads_closed_set_and_defaults_to_stable() {
    let stats: ProjectStats = serde_json::from_value(json!({
        "followers_growth": 3.0,
        "momentum": "rising",
    }))
    .expect("stats");
    assert_eq!(stats.momentum, Momentum::Rising);

    let stats: ProjectStats =
        serde_json::from_value(json!({ "momentum": "sideways" })).expect("stats");
    assert_eq!(stats.momentum, Momentum::Stable);

    let stats: ProjectStats = serde_json::from_value(json!({})).expect("stats");
    assert_eq!(stats.momentum, Momentum::Stable);
}

#[test]
fn momentum_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(Momentum::Falling).expect("serialize"),
        json!("falling")
    );
}

#[test]
fn unwrap_data_peels_a_single_object_envelope() {
    let wrapped = json!({ "data": { "username": "ada" } });
    assert_eq!(unwrap_data(wrapped), json!({ "username": "ada" }));

    // A `data` field that is not an object is left alone.
    let not_envelope = json!({ "data": [1, 2, 3] });
    assert_eq!(unwrap_data(not_envelope.clone()), not_envelope);

    let plain = json!({ "username": "ada" });
    assert_eq!(unwrap_data(plain.clone()), plain);
}

#[test]
fn user_profile_accessors_prefer_richer_fields() {
    let user = UserProfile {
        username: Some("ada".to_owned()),
        display_name: Some("Ada L".to_owned()),
        avatar_url: Some("https://img/a.png".to_owned()),
        x_avatar_url: Some("https://img/x.png".to_owned()),
        ..UserProfile::default()
    };
    assert_eq!(user.display(), Some("Ada L"));
    assert_eq!(user.avatar(), Some("https://img/a.png"));
    assert_eq!(user.initial(), 'A');

    let sparse = UserProfile {
        username: Some("grace".to_owned()),
        x_avatar_url: Some("https://img/x.png".to_owned()),
        ..UserProfile::default()
    };
    assert_eq!(sparse.display(), Some("grace"));
    assert_eq!(sparse.avatar(), Some("https://img/x.png"));
    assert_eq!(sparse.initial(), 'G');

    assert_eq!(UserProfile::default().initial(), 'U');
    assert!(!UserProfile::default().is_connected());
}
