//! Resource materialization from flat facts.
//!
//! # Responsibility
//! - Turn facts into a graph of typed resources keyed by identity.
//! - Keep only predicates named by the configured property map.
//!
//! # Invariants
//! - Every identity maps to exactly one resource.
//! - Output depends only on the facts and configuration, never on prior runs.

mod namespace;
mod properties;

pub use namespace::Namespaces;
pub use properties::{
    PropertyMap, BOUNDS, DATE, FINISH, LABEL, LAYOUT_ABOVE, LAYOUT_RIGHT_OF, START, TYPE,
};

use crate::diagnostics::{LayoutObserver, NoopObserver};
use crate::model::fact::{Fact, Term};
use crate::model::resource::ResourceGraph;
use log::debug;
use std::collections::HashMap;

/// Materializer bound to one property map and namespace table.
pub struct Materializer<'a> {
    predicates: HashMap<String, String>,
    namespaces: &'a Namespaces,
}

impl<'a> Materializer<'a> {
    pub fn new(properties: &PropertyMap, namespaces: &'a Namespaces) -> Self {
        Self {
            predicates: properties.invert(namespaces),
            namespaces,
        }
    }

    /// Builds the resource graph for `facts`.
    ///
    /// Forward references are fine: resources are created on first mention.
    pub fn materialize(&self, facts: &[Fact], observer: &dyn LayoutObserver) -> ResourceGraph {
        observer.facts(facts);

        let mut graph = ResourceGraph::new();
        let mut kept = 0usize;
        for fact in facts {
            let Some(property) = self.predicates.get(&fact.predicate) else {
                continue;
            };
            kept += 1;

            if property == TYPE {
                let type_name = self.namespaces.abbreviate(fact.object.value());
                graph.get_or_insert(&fact.subject).add_type(type_name);
                continue;
            }

            match &fact.object {
                Term::Literal(value) => {
                    graph
                        .get_or_insert(&fact.subject)
                        .add_data(property, value.as_str());
                }
                Term::Node(target) => {
                    graph.get_or_insert(&fact.subject);
                    graph.get_or_insert(target);
                    graph
                        .get_or_insert(&fact.subject)
                        .add_object(property, target.as_str());
                }
            }
        }

        debug!(
            "event=materialize module=materialize status=ok facts={} kept={} resources={}",
            facts.len(),
            kept,
            graph.len()
        );
        graph
    }
}

/// Materializes `facts` with the default namespace table and no diagnostics.
pub fn materialize(properties: &PropertyMap, facts: &[Fact]) -> ResourceGraph {
    let namespaces = Namespaces::default();
    Materializer::new(properties, &namespaces).materialize(facts, &NoopObserver)
}
