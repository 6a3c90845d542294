//! Event/Extent arena produced by the layout resolver.
//!
//! # Responsibility
//! - Hold events and extents for one render cycle.
//! - Guard layout outputs (vertical position, column) until they are final.
//!
//! # Invariants
//! - `EventId`/`ExtentId` index into the owning `Timeline` only.
//! - Two events are equal iff label and date match.
//! - `order` contains exactly the endpoints of all extents.

use crate::layout::{LayoutError, LayoutResult};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Leading token of a date whose year is unknown.
pub const UNKNOWN_YEAR: &str = "XXXX";

/// Arena index of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub(crate) usize);

/// Arena index of an extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtentId(pub(crate) usize);

impl EventId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl ExtentId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Point in time on the diagram.
#[derive(Debug, Clone)]
pub struct Event {
    pub label: String,
    /// `None` when absent or when the year is unknown.
    pub date: Option<String>,
    /// Extent whose endpoints stand in for this event.
    pub bounded_by: Option<ExtentId>,
    /// Events this one must be drawn above.
    pub layout_above: BTreeSet<EventId>,
    vertical_position: Option<u32>,
}

impl Event {
    /// Creates an event, dropping dates that start with [`UNKNOWN_YEAR`].
    pub fn new(label: impl Into<String>, date: Option<&str>) -> Self {
        Self {
            label: label.into(),
            date: date
                .filter(|value| !value.starts_with(UNKNOWN_YEAR))
                .map(str::to_string),
            bounded_by: None,
            layout_above: BTreeSet::new(),
            vertical_position: None,
        }
    }

    pub fn is_dated(&self) -> bool {
        self.date.is_some()
    }

    /// Vertical position assigned by placement.
    ///
    /// # Errors
    /// - `PrematureAccess` before the event has been placed.
    pub fn vertical_position(&self) -> LayoutResult<u32> {
        self.vertical_position
            .ok_or_else(|| LayoutError::PrematureAccess(format!("position of event `{self}`")))
    }

    pub(crate) fn set_vertical_position(&mut self, y: u32) {
        self.vertical_position = Some(y);
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.date == other.date
    }
}

impl Eq for Event {}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.date {
            Some(date) => write!(f, "{} ({date})", self.label),
            None => write!(f, "{} (undated)", self.label),
        }
    }
}

/// Interval spanning two events, drawn as a bar in a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extent {
    pub label: String,
    pub from: EventId,
    pub to: EventId,
    column: u32,
    column_settled: bool,
}

impl Extent {
    pub fn new(label: impl Into<String>, from: EventId, to: EventId) -> Self {
        Self {
            label: label.into(),
            from,
            to,
            column: 0,
            column_settled: false,
        }
    }

    /// Final horizontal lane.
    ///
    /// # Errors
    /// - `PrematureAccess` while column assignment has not converged.
    pub fn column(&self) -> LayoutResult<u32> {
        if self.column_settled {
            Ok(self.column)
        } else {
            Err(LayoutError::PrematureAccess(format!(
                "column of extent `{}`",
                self.label
            )))
        }
    }

    /// Column value during fixed-point iteration.
    pub(crate) fn working_column(&self) -> u32 {
        self.column
    }

    pub(crate) fn set_column(&mut self, column: u32) {
        self.column = column;
    }

    pub(crate) fn settle_column(&mut self) {
        self.column_settled = true;
    }
}

/// Resolved diagram: extents plus vertically ordered events.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    events: Vec<Event>,
    extents: Vec<Extent>,
    order: Vec<EventId>,
}

impl Timeline {
    pub(crate) fn from_parts(events: Vec<Event>, extents: Vec<Extent>, order: Vec<EventId>) -> Self {
        Self {
            events,
            extents,
            order,
        }
    }

    pub fn event(&self, id: EventId) -> &Event {
        &self.events[id.0]
    }

    pub(crate) fn event_mut(&mut self, id: EventId) -> &mut Event {
        &mut self.events[id.0]
    }

    pub fn extent(&self, id: ExtentId) -> &Extent {
        &self.extents[id.0]
    }

    /// Ids of the diagram's events, top to bottom.
    pub fn ordered_event_ids(&self) -> &[EventId] {
        &self.order
    }

    /// Diagram events, top to bottom.
    pub fn events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.order.iter().map(|id| &self.events[id.0])
    }

    /// Extents in resource order.
    pub fn extents(&self) -> &[Extent] {
        &self.extents
    }

    pub fn extent_ids(&self) -> impl Iterator<Item = ExtentId> {
        (0..self.extents.len()).map(ExtentId)
    }

    /// Vertical distance from an extent's start event to its finish event.
    pub fn extent_span(&self, id: ExtentId) -> LayoutResult<i64> {
        let extent = self.extent(id);
        let from = self.event(extent.from).vertical_position()?;
        let to = self.event(extent.to).vertical_position()?;
        Ok(i64::from(to) - i64::from(from))
    }

    /// Human-readable dump of extents and ordered events.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for extent in &self.extents {
            out.push_str(&format!(
                "{}\n  from: {}\n  to: {}\n",
                extent.label,
                self.event(extent.from),
                self.event(extent.to)
            ));
        }
        for event in self.events() {
            out.push_str(&format!("{event}\n"));
        }
        out
    }
}
