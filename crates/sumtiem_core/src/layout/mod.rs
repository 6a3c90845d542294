//! Timeline layout engine.
//!
//! # Responsibility
//! - Resolve materialized resources into events and extents (`resolve`).
//! - Assign columns and a vertical order from partial layout hints.
//! - Place ordered events on the canvas (`place`).
//!
//! # Invariants
//! - Steps run in a fixed order; each consumes the previous step's output.
//! - Fatal conditions abort the pass; multi-value conditions only warn.

mod order;
mod place;
mod resolve;
mod spacing;

pub use place::{event_height, place};
pub use resolve::{resolve, EVENT_TYPE, EXTENT_TYPE};
pub use spacing::allocate;

use crate::config::TimelineConfig;
use crate::diagnostics::LayoutObserver;
use crate::model::resource::ResourceGraph;
use crate::model::timeline::Timeline;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Fatal layout failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Resource lacks the type marker required by its role.
    TypeMismatch {
        resource: String,
        expected: &'static str,
    },
    /// A layout output was read before it was final.
    PrematureAccess(String),
    /// A required relation is absent.
    MissingProperty {
        resource: String,
        property: &'static str,
    },
    UnknownResource(String),
    /// Column assignment did not settle; the `layoutRightOf` graph has a cycle.
    ColumnsDiverged { passes: usize },
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { resource, expected } => {
                write!(f, "expected `{resource}` to have the type {expected}")
            }
            Self::PrematureAccess(what) => write!(f, "{what} read before layout completed"),
            Self::MissingProperty { resource, property } => {
                write!(f, "`{resource}` has no `{property}` value")
            }
            Self::UnknownResource(id) => write!(f, "unknown resource `{id}`"),
            Self::ColumnsDiverged { passes } => write!(
                f,
                "column assignment did not converge after {passes} passes; layoutRightOf is cyclic"
            ),
        }
    }
}

impl Error for LayoutError {}

/// Resolves and places a timeline in one call.
pub fn layout(
    graph: &ResourceGraph,
    config: &TimelineConfig,
    observer: &dyn LayoutObserver,
) -> LayoutResult<Timeline> {
    let mut timeline = resolve(graph, observer)?;
    place(&mut timeline, config);
    Ok(timeline)
}
