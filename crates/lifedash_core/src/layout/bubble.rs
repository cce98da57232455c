//! Bubble-map placement.
//!
//! # Responsibility
//! - Place one parent node per event on the compressed axis.
//! - Arrange each parent's open actions on a circular orbit.
//! - Emit the spine polyline through all parents in time order.
//!
//! # Invariants
//! - Output depends only on the event set, `now` and the config; event
//!   input order does not matter.
//! - `y` never exceeds `config.y_max`.
//! - Child 0 sits at 12 o'clock (angle `-π/2` in a Y-down frame) and
//!   children advance clockwise at equal steps.
//! - Child radii vary by index through fixed modulo arithmetic, never
//!   randomness.

use crate::config::LayoutConfig;
use crate::icon::catalog::IconCatalog;
use crate::layout::clock::days_from_now;
use crate::layout::time_axis::axis_position;
use crate::layout::urgency::{glow_color, urgency_color};
use crate::model::event::Event;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Placed parent node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedNode {
    pub name: String,
    pub date: NaiveDate,
    pub days_from_now: f64,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
    pub glow: String,
    pub todo_count: usize,
    pub done_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub children: Vec<PlacedChild>,
}

/// Orbiting open action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedChild {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
}

/// Complete bubble-map output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BubbleLayout {
    pub nodes: Vec<PlacedNode>,
    /// Parent centers in ascending `x`.
    pub spine: Vec<[f64; 2]>,
}

/// Lays out every event as a parent node with orbiting children.
pub fn layout_bubble_map(
    events: &[Event],
    now: NaiveDateTime,
    config: &LayoutConfig,
    icons: &IconCatalog,
) -> BubbleLayout {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by(|a, b| canonical_order(a, b));

    let nodes: Vec<PlacedNode> = ordered
        .into_iter()
        .map(|event| place_node(event, now, config, icons))
        .collect();

    // Canonical order is by date, and x is non-decreasing in date.
    let spine = nodes.iter().map(|node| [node.x, node.y]).collect();

    BubbleLayout { nodes, spine }
}

fn canonical_order(a: &Event, b: &Event) -> Ordering {
    let sa = a.schedule();
    let sb = b.schedule();
    sa.start()
        .cmp(&sb.start())
        .then_with(|| sa.end().cmp(&sb.end()))
        .then_with(|| a.name().cmp(b.name()))
        .then_with(|| a.weight().cmp(&b.weight()))
        .then_with(|| a.actions().cmp(b.actions()))
        .then_with(|| a.tags().cmp(b.tags()))
}

fn place_node(
    event: &Event,
    now: NaiveDateTime,
    config: &LayoutConfig,
    icons: &IconCatalog,
) -> PlacedNode {
    let date = event.schedule().start();
    let days = days_from_now(date, now);
    let weight = event.weight().as_f64();
    let open = event.todo_count();
    let child_count = open as f64;

    let x = axis_position(days, config);
    let y = node_y(child_count, weight, config);
    let radius = node_radius(child_count, weight, config);
    let color = urgency_color(days, None, config);
    let child_color = urgency_color(days, Some(config.child_opacity), config);

    let orbit = radius / 10.0 + config.orbit_margin;
    let children = event
        .todo_actions()
        .zip(orbit_positions(x, y, orbit, open))
        .enumerate()
        .map(|(index, (action, [cx, cy]))| PlacedChild {
            name: action.name.clone(),
            x: cx,
            y: cy,
            radius: child_radius(index, config),
            color: child_color.clone(),
        })
        .collect();

    PlacedNode {
        name: event.name().to_string(),
        date,
        days_from_now: days,
        x,
        y,
        radius,
        color,
        glow: glow_color(days),
        todo_count: open,
        done_count: event.done_count(),
        icon: icons.match_event(event).map(str::to_string),
        children,
    }
}

/// `min(y_max, children * child_y_factor + weight * weight_y_factor + y_base)`.
pub fn node_y(child_count: f64, weight: f64, config: &LayoutConfig) -> f64 {
    (child_count * config.child_y_factor + weight * config.weight_y_factor + config.y_base)
        .min(config.y_max)
}

/// `base_radius + weight * weight_radius_factor + children * child_radius_factor`.
pub fn node_radius(child_count: f64, weight: f64, config: &LayoutConfig) -> f64 {
    config.base_radius
        + weight * config.weight_radius_factor
        + child_count * config.child_radius_factor
}

/// Evenly spaced points on a circle, first at 12 o'clock, then clockwise
/// (Y grows downward).
pub fn orbit_positions(center_x: f64, center_y: f64, orbit: f64, count: usize) -> Vec<[f64; 2]> {
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f64;
    (0..count)
        .map(|index| {
            let angle = -FRAC_PI_2 + step * index as f64;
            [center_x + angle.cos() * orbit, center_y + angle.sin() * orbit]
        })
        .collect()
}

/// `child_base_radius + (index * stride) % modulo`.
pub fn child_radius(index: usize, config: &LayoutConfig) -> f64 {
    let stride = config.child_radius_stride as usize;
    let modulo = config.child_radius_modulo as usize;
    config.child_base_radius + (index.wrapping_mul(stride) % modulo) as f64
}
