use chrono::{NaiveDate, NaiveDateTime};
use lifedash_core::{
    layout_bubble_map, Action, BubbleLayout, Event, EventSchedule, IconCatalog, LayoutConfig,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(0, 0, 0).expect("valid time")
}

fn point(name: &str, on: NaiveDate, weight: i64, actions: Vec<Action>) -> Event {
    Event::new(name, EventSchedule::Point(on), weight, actions).expect("valid event")
}

fn todos(count: usize) -> Vec<Action> {
    (0..count).map(|i| Action::todo(format!("step {i}"))).collect()
}

fn layout(events: &[Event], now: NaiveDateTime) -> BubbleLayout {
    layout_bubble_map(events, now, &LayoutConfig::default(), &IconCatalog::default())
}

#[test]
fn urgent_and_distant_events_end_to_end() {
    let now = midnight(2026, 10, 19);
    let events = vec![
        point("A", date(2026, 10, 19), 9, todos(3)),
        point("B", date(2026, 12, 18), 2, Vec::new()),
    ];

    let result = layout(&events, now);
    assert_eq!(result.nodes.len(), 2);

    let a = &result.nodes[0];
    assert_eq!(a.name, "A");
    assert_eq!(a.days_from_now, 0.5);
    assert!(a.x > 0.0 && a.x < 10.0, "A should sit near the left edge, got {}", a.x);
    assert_eq!(a.children.len(), 3);
    assert_eq!(a.color, "hsl(25.0, 92.0%, 55.0%)");
    assert_eq!(a.glow, "hsla(25.0, 92.0%, 55.0%, 0.40)");
    assert_eq!(a.y, 53.5);
    assert_eq!(a.radius, 53.0);

    let b = &result.nodes[1];
    assert_eq!(b.name, "B");
    assert_eq!(b.x, 100.0);
    assert!(b.children.is_empty());
    assert_eq!(b.color, "hsl(220.0, 8.0%, 35.0%)");
    assert_eq!(b.glow, "transparent");

    assert_eq!(result.spine, vec![[a.x, a.y], [b.x, b.y]]);
}

#[test]
fn four_children_orbit_at_quarter_turns_from_twelve_o_clock() {
    let now = midnight(2026, 10, 19);
    let result = layout(&[point("Move", date(2026, 10, 25), 5, todos(4))], now);
    let node = &result.nodes[0];
    let orbit = node.radius / 10.0 + LayoutConfig::default().orbit_margin;
    let eps = 1e-9;

    let expected = [
        (node.x, node.y - orbit),
        (node.x + orbit, node.y),
        (node.x, node.y + orbit),
        (node.x - orbit, node.y),
    ];
    assert_eq!(node.children.len(), 4);
    for (child, (ex, ey)) in node.children.iter().zip(expected) {
        assert!((child.x - ex).abs() < eps, "{} x {} != {}", child.name, child.x, ex);
        assert!((child.y - ey).abs() < eps, "{} y {} != {}", child.name, child.y, ey);
    }
    assert!(node.children[0].y < node.y);
}

#[test]
fn done_actions_are_tallied_but_not_orbiting() {
    let now = midnight(2026, 10, 19);
    let actions = vec![
        Action::todo("Buy paint"),
        Action::done("Pick color"),
        Action::todo("Paint wall"),
    ];
    let result = layout(&[point("Bedroom", date(2026, 10, 30), 4, actions)], now);
    let node = &result.nodes[0];

    let names: Vec<&str> = node.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Buy paint", "Paint wall"]);
    assert_eq!(node.todo_count, 2);
    assert_eq!(node.done_count, 1);
    assert_eq!(node.children[0].radius, 3.0);
    assert_eq!(node.children[1].radius, 6.0);
    assert!(node.children[0].color.starts_with("hsla("));
}

#[test]
fn heavy_busy_node_stays_inside_canvas() {
    let now = midnight(2026, 10, 19);
    let result = layout(&[point("Launch", date(2026, 10, 21), 10, todos(30))], now);
    assert_eq!(result.nodes[0].y, LayoutConfig::default().y_max);
}

#[test]
fn ranged_event_anchors_on_start_date() {
    let now = midnight(2026, 10, 19);
    let ranged = Event::new(
        "Course",
        EventSchedule::Range {
            start: date(2026, 10, 26),
            duration_days: 5,
        },
        4,
        Vec::new(),
    )
    .expect("valid event");
    let result = layout(&[ranged], now);
    assert_eq!(result.nodes[0].date, date(2026, 10, 26));
    assert_eq!(result.nodes[0].days_from_now, 7.0);
}

#[test]
fn spine_runs_in_time_order() {
    let now = midnight(2026, 10, 19);
    let events = vec![
        point("Late", date(2026, 11, 30), 3, Vec::new()),
        point("Soon", date(2026, 10, 21), 3, Vec::new()),
        point("Mid", date(2026, 11, 2), 3, Vec::new()),
    ];
    let result = layout(&events, now);
    let names: Vec<&str> = result.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["Soon", "Mid", "Late"]);
    assert!(result.spine.windows(2).all(|pair| pair[0][0] <= pair[1][0]));
}

#[test]
fn identical_input_gives_byte_identical_output() {
    let now = date(2026, 10, 19).and_hms_opt(7, 45, 0).expect("valid time");
    let events = vec![
        point("Gym", date(2026, 10, 20), 3, todos(2)),
        point("Taxes", date(2026, 11, 12), 8, todos(5)),
        point("Visit", date(2026, 10, 28), 6, Vec::new()),
    ];

    let first = layout(&events, now);
    let second = layout(&events, now);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}

#[test]
fn input_order_does_not_change_layout() {
    let now = midnight(2026, 10, 19);
    let events = vec![
        point("Gym", date(2026, 10, 20), 3, todos(2)),
        point("Taxes", date(2026, 11, 12), 8, todos(5)),
        point("Call", date(2026, 10, 20), 3, todos(1)),
        point("Visit", date(2026, 10, 28), 6, Vec::new()),
    ];
    let mut shuffled = events.clone();
    shuffled.reverse();
    shuffled.swap(0, 2);

    assert_eq!(layout(&events, now), layout(&shuffled, now));
}

#[test]
fn empty_input_is_an_empty_layout() {
    let result = layout(&[], midnight(2026, 10, 19));
    assert!(result.nodes.is_empty());
    assert!(result.spine.is_empty());
}

#[test]
fn serialized_node_uses_camel_case_wire_names() {
    let now = midnight(2026, 10, 19);
    let result = layout(&[point("Gym", date(2026, 10, 20), 3, todos(1))], now);
    let json = serde_json::to_value(&result).expect("serialize");
    let node = &json["nodes"][0];
    assert_eq!(node["date"], "2026-10-20");
    assert_eq!(node["todoCount"], 1);
    assert_eq!(node["doneCount"], 0);
    assert!(node.get("daysFromNow").is_some());
    assert!(node.get("icon").is_none());
    assert_eq!(json["spine"][0].as_array().map(Vec::len), Some(2));
}
