//! Domain model for timeline diagrams.
//!
//! # Responsibility
//! - Define the fact tuples consumed from the parser/reasoner boundary.
//! - Define materialized resources and the Event/Extent arena built from them.
//!
//! # Invariants
//! - Resource identity is unique within one materialization pass.
//! - Events and extents refer to each other through arena ids, never through
//!   owned back-references.

pub mod fact;
pub mod resource;
pub mod timeline;
