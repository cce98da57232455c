//! Dated event input model.
//!
//! # Responsibility
//! - Define the validated shape the layout engine consumes.
//! - Decode snapshot wire records (`EventRecord`) into `Event` and reject
//!   malformed input at this boundary.
//!
//! # Invariants
//! - `name` is never blank.
//! - `weight` is always within `[MIN_WEIGHT, MAX_WEIGHT]`.
//! - A range schedule lasts at least one day and its end date is
//!   representable.
//! - Tags are lowercase, trimmed and deduplicated in first-seen order.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest accepted importance weight.
pub const MIN_WEIGHT: u8 = 1;
/// Highest accepted importance weight.
pub const MAX_WEIGHT: u8 = 10;

/// Importance weight guaranteed to be within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Weight(u8);

impl Weight {
    /// Builds a weight, rejecting values outside `[MIN_WEIGHT, MAX_WEIGHT]`.
    pub fn new(value: i64) -> Result<Self, EventValidationError> {
        if value < i64::from(MIN_WEIGHT) || value > i64::from(MAX_WEIGHT) {
            return Err(EventValidationError::WeightOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

/// Completion state of one sub-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Todo,
    Done,
}

/// Sub-item of an event. Only `todo` actions orbit their parent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub status: ActionStatus,
}

impl Action {
    pub fn todo(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ActionStatus::Todo,
        }
    }

    pub fn done(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ActionStatus::Done,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == ActionStatus::Todo
    }
}

/// When an event happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventSchedule {
    /// Single-day event.
    Point(NaiveDate),
    /// Multi-day event covering `start..=start + duration_days - 1`.
    Range { start: NaiveDate, duration_days: u32 },
}

impl EventSchedule {
    /// Anchor date used for time-axis placement.
    pub fn start(&self) -> NaiveDate {
        match self {
            Self::Point(date) => *date,
            Self::Range { start, .. } => *start,
        }
    }

    /// Inclusive last day.
    pub fn end(&self) -> NaiveDate {
        match self {
            Self::Point(date) => *date,
            Self::Range {
                start,
                duration_days,
            } => start
                .checked_add_days(Days::new(u64::from(duration_days.saturating_sub(1))))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    fn range(start: NaiveDate, duration_days: i64) -> Result<Self, EventValidationError> {
        if duration_days <= 0 {
            return Err(EventValidationError::NonPositiveDuration(duration_days));
        }
        let days = u32::try_from(duration_days)
            .map_err(|_| EventValidationError::DurationTooLong(duration_days))?;
        if start
            .checked_add_days(Days::new(u64::from(days - 1)))
            .is_none()
        {
            return Err(EventValidationError::DurationTooLong(duration_days));
        }
        Ok(Self::Range {
            start,
            duration_days: days,
        })
    }
}

/// Validated dated item of interest.
///
/// Decoding goes through `EventRecord`, so a deserialized `Event` has
/// already passed every check `Event::new` performs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EventRecord", into = "EventRecord")]
pub struct Event {
    name: String,
    schedule: EventSchedule,
    weight: Weight,
    actions: Vec<Action>,
    tags: Vec<String>,
}

impl Event {
    /// Builds an event with no tags.
    pub fn new(
        name: impl Into<String>,
        schedule: EventSchedule,
        weight: i64,
        actions: Vec<Action>,
    ) -> Result<Self, EventValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EventValidationError::EmptyName);
        }
        let weight = Weight::new(weight)?;
        if let EventSchedule::Range {
            start,
            duration_days,
        } = schedule
        {
            EventSchedule::range(start, i64::from(duration_days))?;
        }
        if let Some(index) = actions.iter().position(|a| a.name.trim().is_empty()) {
            return Err(EventValidationError::EmptyActionName(index));
        }

        Ok(Self {
            name,
            schedule,
            weight,
            actions,
            tags: Vec::new(),
        })
    }

    /// Replaces tags with their normalized form.
    pub fn with_tags<I, S>(mut self, tags: I) -> Result<Self, EventValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalize_tags(tags)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schedule(&self) -> EventSchedule {
        self.schedule
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Open actions, in input order.
    pub fn todo_actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter().filter(|action| action.is_open())
    }

    pub fn todo_count(&self) -> usize {
        self.todo_actions().count()
    }

    pub fn done_count(&self) -> usize {
        self.actions.len() - self.todo_count()
    }
}

fn normalize_tags<I, S>(tags: I) -> Result<Vec<String>, EventValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = BTreeSet::new();
    let mut normalized = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if tag.is_empty() {
            return Err(EventValidationError::EmptyTag);
        }
        if seen.insert(tag.clone()) {
            normalized.push(tag);
        }
    }
    Ok(normalized)
}

/// Snapshot wire shape of one event.
///
/// Exactly one of `date` or `start_date` must be present; `duration_days`
/// only accompanies `start_date` and defaults to one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i64>,
    pub weight: i64,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl TryFrom<EventRecord> for Event {
    type Error = EventValidationError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let schedule = match (record.date, record.start_date, record.duration_days) {
            (Some(_), Some(_), _) => return Err(EventValidationError::ConflictingDates),
            (Some(_), None, Some(_)) => return Err(EventValidationError::DurationWithoutStart),
            (Some(date), None, None) => EventSchedule::Point(date),
            (None, Some(start), duration) => EventSchedule::range(start, duration.unwrap_or(1))?,
            (None, None, _) => return Err(EventValidationError::MissingDate),
        };

        Event::new(record.name, schedule, record.weight, record.actions)?.with_tags(record.tags)
    }
}

impl From<Event> for EventRecord {
    fn from(event: Event) -> Self {
        let (date, start_date, duration_days) = match event.schedule {
            EventSchedule::Point(date) => (Some(date), None, None),
            EventSchedule::Range {
                start,
                duration_days,
            } => (None, Some(start), Some(i64::from(duration_days))),
        };
        Self {
            name: event.name,
            date,
            start_date,
            duration_days,
            weight: i64::from(event.weight.get()),
            actions: event.actions,
            tags: event.tags,
        }
    }
}

/// Reasons an event is rejected before layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    EmptyName,
    WeightOutOfRange(i64),
    MissingDate,
    ConflictingDates,
    DurationWithoutStart,
    NonPositiveDuration(i64),
    DurationTooLong(i64),
    EmptyActionName(usize),
    EmptyTag,
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "event name must not be empty"),
            Self::WeightOutOfRange(value) => write!(
                f,
                "event weight {value} is outside [{MIN_WEIGHT}, {MAX_WEIGHT}]"
            ),
            Self::MissingDate => write!(f, "event must have either `date` or `startDate`"),
            Self::ConflictingDates => {
                write!(f, "event must not have both `date` and `startDate`")
            }
            Self::DurationWithoutStart => {
                write!(f, "event `durationDays` requires `startDate`")
            }
            Self::NonPositiveDuration(value) => {
                write!(f, "event `durationDays` must be positive, got {value}")
            }
            Self::DurationTooLong(value) => {
                write!(f, "event `durationDays` {value} runs past the calendar range")
            }
            Self::EmptyActionName(index) => {
                write!(f, "event action #{index} has an empty name")
            }
            Self::EmptyTag => write!(f, "event tags must not be empty"),
        }
    }
}

impl Error for EventValidationError {}
