//! Layout diagnostics hooks.
//!
//! # Responsibility
//! - Report non-fatal data problems (multi-valued properties, dangling links).
//! - Offer verbose dumps of input facts and resolved timelines.
//!
//! # Invariants
//! - Observers never influence layout results.
//! - Default hook implementations do nothing.

use crate::model::fact::Fact;
use crate::model::timeline::Timeline;
use crate::ntriples::write_ntriples;
use log::{debug, warn};

/// Receives diagnostics from materialization and layout.
pub trait LayoutObserver {
    /// A cardinality-one property had `count` values; the first one is used.
    fn multiple_values(&self, _resource_id: &str, _property: &str, _count: usize) {}

    /// A relation pointed at a resource of the wrong kind and was skipped.
    fn dangling_reference(&self, _resource_id: &str, _property: &str, _target: &str) {}

    /// Input facts before materialization.
    fn facts(&self, _facts: &[Fact]) {}

    /// Resolved timeline before placement.
    fn timeline(&self, _timeline: &Timeline) {}
}

/// Observer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl LayoutObserver for NoopObserver {}

/// Observer that forwards diagnostics to the `log` facade.
///
/// Warnings always go to `warn!`; dumps go to `debug!` only when `verbose`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver {
    verbose: bool,
}

impl LogObserver {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl LayoutObserver for LogObserver {
    fn multiple_values(&self, resource_id: &str, property: &str, count: usize) {
        warn!(
            "event=multiple_values module=layout status=warn resource={} property={} count={}",
            resource_id, property, count
        );
    }

    fn dangling_reference(&self, resource_id: &str, property: &str, target: &str) {
        warn!(
            "event=dangling_reference module=layout status=warn resource={} property={} target={}",
            resource_id, property, target
        );
    }

    fn facts(&self, facts: &[Fact]) {
        if !self.verbose {
            return;
        }
        let mut sorted = facts.to_vec();
        sorted.sort_by(|a, b| a.subject.cmp(&b.subject));
        debug!("input facts:\n{}", write_ntriples(&sorted));
    }

    fn timeline(&self, timeline: &Timeline) {
        if self.verbose {
            debug!("resolved timeline:\n{}", timeline.describe());
        }
    }
}
