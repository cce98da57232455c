use chrono::NaiveDate;
use lifedash_core::{
    ActionStatus, Event, EventSchedule, LayoutConfig, LayoutService, LayoutServiceError, Snapshot,
    SnapshotError,
};
use std::fs;

const SNAPSHOT: &str = r#"{
  "events": [
    { "name": "Flight to Oslo", "date": "2026-10-22", "weight": 8,
      "actions": [ { "name": "Pack", "status": "todo" }, { "name": "Visa", "status": "done" } ] },
    { "name": "Workshop", "startDate": "2026-10-26", "durationDays": 2, "weight": 5,
      "tags": ["Work"] }
  ],
  "icons": [
    { "icon": "plane", "tags": ["flight", "travel"] },
    { "icon": "briefcase", "tags": ["work"] }
  ]
}"#;

fn now() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .expect("valid time")
}

#[test]
fn decodes_point_and_range_events() {
    let snapshot = Snapshot::from_json_str(SNAPSHOT).expect("snapshot should decode");
    assert_eq!(snapshot.events.len(), 2);

    let flight = &snapshot.events[0];
    assert_eq!(flight.weight().get(), 8);
    assert_eq!(flight.actions()[1].status, ActionStatus::Done);

    let workshop = &snapshot.events[1];
    assert_eq!(
        workshop.schedule(),
        EventSchedule::Range {
            start: NaiveDate::from_ymd_opt(2026, 10, 26).expect("valid date"),
            duration_days: 2,
        }
    );
    assert_eq!(workshop.tags(), ["work".to_string()]);
}

#[test]
fn event_wire_shape_survives_serialization() {
    let snapshot = Snapshot::from_json_str(SNAPSHOT).expect("snapshot should decode");
    let json = serde_json::to_value(&snapshot.events[1]).expect("serialize");
    assert_eq!(json["startDate"], "2026-10-26");
    assert_eq!(json["durationDays"], 2);
    assert!(json.get("date").is_none());

    let decoded: Event = serde_json::from_value(json).expect("decode");
    assert_eq!(decoded, snapshot.events[1]);
}

#[test]
fn rejects_malformed_events_with_reason() {
    let cases = [
        (r#"{ "name": "", "date": "2026-10-20", "weight": 3 }"#, "name must not be empty"),
        (r#"{ "name": "X", "weight": 3 }"#, "either `date` or `startDate`"),
        (
            r#"{ "name": "X", "startDate": "2026-10-20", "durationDays": -1, "weight": 3 }"#,
            "must be positive",
        ),
        (r#"{ "name": "X", "date": "2026-10-20", "weight": 11 }"#, "outside [1, 10]"),
        (r#"{ "name": "X", "date": "2026-02-30", "weight": 3 }"#, ""),
        (
            r#"{ "name": "X", "date": "2026-10-20", "weight": 3, "actions": [ { "name": "a", "status": "maybe" } ] }"#,
            "",
        ),
    ];

    for (event, expected) in cases {
        let raw = format!(r#"{{ "events": [ {event} ] }}"#);
        let err = Snapshot::from_json_str(&raw).expect_err("malformed event must be rejected");
        assert!(
            err.to_string().contains(expected),
            "case {event}: unexpected error {err}"
        );
    }
}

#[test]
fn service_loads_file_and_matches_icons() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("snapshot.json");
    fs::write(&path, SNAPSHOT).expect("write snapshot");

    let service = LayoutService::default();
    let snapshot = service.load_snapshot(&path).expect("snapshot should load");
    let bubble = service.bubble_map(&snapshot, now());

    let icons: Vec<Option<&str>> = bubble.nodes.iter().map(|n| n.icon.as_deref()).collect();
    assert_eq!(icons, [Some("plane"), Some("briefcase")]);
    assert_eq!(bubble.nodes[0].children.len(), 1);

    let ribbon = service.ribbon(&snapshot, now());
    assert_eq!(ribbon.spans.len(), 2);
    assert_eq!((ribbon.spans[1].start_idx, ribbon.spans[1].end_idx), (7, 8));
}

#[test]
fn service_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = LayoutService::default()
        .load_snapshot(dir.path().join("missing.json"))
        .expect_err("missing file must fail");
    assert!(matches!(
        err,
        LayoutServiceError::Snapshot(SnapshotError::Io { .. })
    ));
}

#[test]
fn service_rejects_invalid_config() {
    let config = LayoutConfig {
        gamma: 0.0,
        ..LayoutConfig::default()
    };
    let err = LayoutService::new(config).expect_err("gamma 0 must be rejected");
    assert!(matches!(err, LayoutServiceError::Config(_)));
}

#[test]
fn service_uses_configured_window() {
    let config = LayoutConfig {
        window_days: 5,
        ..LayoutConfig::default()
    };
    let service = LayoutService::new(config).expect("valid config");
    let snapshot = Snapshot::from_json_str(SNAPSHOT).expect("snapshot should decode");
    let ribbon = service.ribbon(&snapshot, now());
    assert_eq!(ribbon.days.len(), 5);
    assert_eq!(ribbon.spans.len(), 1, "workshop starts after the window");
}
