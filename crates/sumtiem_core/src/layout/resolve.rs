//! Resource graph to timeline resolution.

use super::order::sort_events;
use super::{LayoutError, LayoutResult};
use crate::diagnostics::LayoutObserver;
use crate::materialize::{BOUNDS, DATE, FINISH, LABEL, LAYOUT_ABOVE, LAYOUT_RIGHT_OF, START};
use crate::model::resource::{Resource, ResourceGraph};
use crate::model::timeline::{Event, EventId, Extent, ExtentId, Timeline};
use indexmap::IndexSet;
use log::info;
use std::collections::HashMap;

pub const EVENT_TYPE: &str = "sum:Event";
pub const EXTENT_TYPE: &str = "sum:Extent";

/// Builds the ordered timeline for `graph`.
///
/// # Errors
/// - `TypeMismatch` when an extent endpoint is not an event, or a
///   `layoutRightOf` target is not an extent.
/// - `MissingProperty` when an extent has no start or finish.
/// - `ColumnsDiverged` when `layoutRightOf` relations form a cycle.
pub fn resolve(graph: &ResourceGraph, observer: &dyn LayoutObserver) -> LayoutResult<Timeline> {
    let mut resolver = Resolver::new(graph, observer);
    resolver.build_extents()?;
    resolver.link_bounds();
    resolver.link_layout_order();
    let passes = resolver.assign_columns()?;
    resolver.redirect_bounded_endpoints();

    let Resolver { events, extents, .. } = resolver;
    let mut order = collect_endpoints(&extents);
    sort_events(&events, &mut order);

    info!(
        "event=layout_resolved module=layout status=ok extents={} events={} column_passes={}",
        extents.len(),
        order.len(),
        passes
    );
    let timeline = Timeline::from_parts(events, extents, order);
    observer.timeline(&timeline);
    Ok(timeline)
}

struct Resolver<'a> {
    graph: &'a ResourceGraph,
    observer: &'a dyn LayoutObserver,
    events: Vec<Event>,
    event_ids: HashMap<String, EventId>,
    extents: Vec<Extent>,
    extent_ids: HashMap<String, ExtentId>,
}

impl<'a> Resolver<'a> {
    fn new(graph: &'a ResourceGraph, observer: &'a dyn LayoutObserver) -> Self {
        Self {
            graph,
            observer,
            events: Vec::new(),
            event_ids: HashMap::new(),
            extents: Vec::new(),
            extent_ids: HashMap::new(),
        }
    }

    fn warn_data(&self, resource: &Resource, property: &str) {
        let count = resource.data_count(property);
        if count > 1 {
            self.observer.multiple_values(&resource.id, property, count);
        }
    }

    fn warn_objects(&self, resource: &Resource, property: &str) {
        let count = resource.object_count(property);
        if count > 1 {
            self.observer.multiple_values(&resource.id, property, count);
        }
    }

    /// Returns the event for `id`, creating it on first request.
    fn resolve_event(&mut self, id: &str) -> LayoutResult<EventId> {
        let graph = self.graph;
        let resource = graph
            .get(id)
            .ok_or_else(|| LayoutError::UnknownResource(id.to_string()))?;
        if !resource.has_type(EVENT_TYPE) {
            return Err(LayoutError::TypeMismatch {
                resource: id.to_string(),
                expected: EVENT_TYPE,
            });
        }
        if let Some(existing) = self.event_ids.get(id) {
            return Ok(*existing);
        }

        self.warn_data(resource, LABEL);
        self.warn_data(resource, DATE);
        let event = Event::new(
            resource.first_data(LABEL).unwrap_or_default(),
            resource.first_data(DATE),
        );
        let event_id = EventId(self.events.len());
        self.events.push(event);
        self.event_ids.insert(id.to_string(), event_id);
        Ok(event_id)
    }

    fn build_extents(&mut self) -> LayoutResult<()> {
        let graph = self.graph;
        for resource in graph.iter().filter(|r| r.has_type(EXTENT_TYPE)) {
            self.warn_objects(resource, START);
            self.warn_objects(resource, FINISH);
            self.warn_data(resource, LABEL);

            let start = required_object(resource, START)?;
            let finish = required_object(resource, FINISH)?;
            let from = self.resolve_event(start)?;
            let to = self.resolve_event(finish)?;

            let extent_id = ExtentId(self.extents.len());
            self.extents.push(Extent::new(
                resource.first_data(LABEL).unwrap_or_default(),
                from,
                to,
            ));
            self.extent_ids.insert(resource.id.clone(), extent_id);
        }
        Ok(())
    }

    fn link_bounds(&mut self) {
        let graph = self.graph;
        for resource in graph
            .iter()
            .filter(|r| r.has_type(EVENT_TYPE) && r.has_objects(BOUNDS))
        {
            // Events that no extent references are never drawn.
            let Some(&event_id) = self.event_ids.get(&resource.id) else {
                continue;
            };
            self.warn_objects(resource, BOUNDS);
            let Some(target) = resource.first_object(BOUNDS) else {
                continue;
            };
            match self.extent_ids.get(target) {
                Some(&extent_id) => self.events[event_id.0].bounded_by = Some(extent_id),
                None => self
                    .observer
                    .dangling_reference(&resource.id, BOUNDS, target),
            }
        }
    }

    fn link_layout_order(&mut self) {
        let graph = self.graph;
        for resource in graph
            .iter()
            .filter(|r| r.has_type(EVENT_TYPE) && r.has_objects(LAYOUT_ABOVE))
        {
            let Some(&event_id) = self.event_ids.get(&resource.id) else {
                continue;
            };
            for target in resource.objects(LAYOUT_ABOVE) {
                match self.event_ids.get(target) {
                    Some(&below) => {
                        self.events[event_id.0].layout_above.insert(below);
                    }
                    None => self
                        .observer
                        .dangling_reference(&resource.id, LAYOUT_ABOVE, target),
                }
            }
        }
    }

    /// Iterates `column = 1 + max(column of layoutRightOf targets)` to a fixed
    /// point and returns the number of passes.
    fn assign_columns(&mut self) -> LayoutResult<usize> {
        let graph = self.graph;
        let constrained: Vec<(ExtentId, Vec<ExtentId>)> = graph
            .iter()
            .filter(|r| r.has_type(EXTENT_TYPE) && r.has_objects(LAYOUT_RIGHT_OF))
            .map(|resource| -> LayoutResult<(ExtentId, Vec<ExtentId>)> {
                let targets = resource
                    .objects(LAYOUT_RIGHT_OF)
                    .map(|target| self.extent_id(target))
                    .collect::<LayoutResult<Vec<_>>>()?;
                Ok((self.extent_id(&resource.id)?, targets))
            })
            .collect::<LayoutResult<_>>()?;

        // An acyclic graph settles one depth level per pass, plus a final
        // pass without changes.
        let max_passes = self.extents.len() + 1;
        let mut passes = 0;
        loop {
            passes += 1;
            if passes > max_passes {
                return Err(LayoutError::ColumnsDiverged { passes: max_passes });
            }
            let mut changed = false;
            for (extent_id, targets) in &constrained {
                let column = targets
                    .iter()
                    .map(|target| self.extents[target.0].working_column())
                    .max()
                    .unwrap_or(0)
                    + 1;
                let extent = &mut self.extents[extent_id.0];
                if extent.working_column() != column {
                    extent.set_column(column);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        for extent in &mut self.extents {
            extent.settle_column();
        }
        Ok(passes)
    }

    fn extent_id(&self, id: &str) -> LayoutResult<ExtentId> {
        self.extent_ids
            .get(id)
            .copied()
            .ok_or_else(|| LayoutError::TypeMismatch {
                resource: id.to_string(),
                expected: EXTENT_TYPE,
            })
    }

    /// Replaces bounded endpoints with their bounding extent's endpoints.
    ///
    /// One hop per endpoint, applied in extent order, so an extent processed
    /// earlier is seen with its endpoints already replaced.
    fn redirect_bounded_endpoints(&mut self) {
        for index in 0..self.extents.len() {
            let from = self.extents[index].from;
            if let Some(bound) = self.events[from.0].bounded_by {
                self.extents[index].from = self.extents[bound.0].from;
            }
            let to = self.extents[index].to;
            if let Some(bound) = self.events[to.0].bounded_by {
                self.extents[index].to = self.extents[bound.0].to;
            }
        }
    }
}

fn required_object<'r>(resource: &'r Resource, property: &'static str) -> LayoutResult<&'r str> {
    resource
        .first_object(property)
        .ok_or_else(|| LayoutError::MissingProperty {
            resource: resource.id.clone(),
            property,
        })
}

/// Union of extent endpoints in first-seen order.
fn collect_endpoints(extents: &[Extent]) -> Vec<EventId> {
    let mut seen = IndexSet::new();
    for extent in extents {
        seen.insert(extent.from);
        seen.insert(extent.to);
    }
    seen.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::Resolver;
    use crate::diagnostics::NoopObserver;
    use crate::materialize::{materialize, PropertyMap};
    use crate::model::fact::Fact;

    const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    const SUM: &str = "http://github.com/rybesh/sumtiem/";
    const START: &str = "http://www.w3.org/2006/time#intervalStartedBy";
    const FINISH: &str = "http://www.w3.org/2006/time#intervalFinishedBy";

    /// Extents `x0..`, each `layoutRightOf` its predecessor, emitted in `order`.
    fn chain(order: impl Iterator<Item = usize>) -> Vec<Fact> {
        let mut facts = vec![
            Fact::node("urn:a", RDF_TYPE, format!("{SUM}Event")),
            Fact::node("urn:b", RDF_TYPE, format!("{SUM}Event")),
        ];
        for index in order {
            let id = format!("urn:x{index}");
            facts.push(Fact::node(id.as_str(), RDF_TYPE, format!("{SUM}Extent")));
            facts.push(Fact::node(id.as_str(), START, "urn:a"));
            facts.push(Fact::node(id.as_str(), FINISH, "urn:b"));
            if index > 0 {
                facts.push(Fact::node(
                    id.as_str(),
                    format!("{SUM}layoutRightOf"),
                    format!("urn:x{}", index - 1),
                ));
            }
        }
        facts
    }

    /// Runs column assignment and checks every `x{i}` lands in column `i`.
    fn column_passes(facts: &[Fact], len: usize) -> usize {
        let graph = materialize(&PropertyMap::default(), facts);
        let mut resolver = Resolver::new(&graph, &NoopObserver);
        resolver.build_extents().expect("extents");
        let passes = resolver.assign_columns().expect("acyclic chain converges");
        for index in 0..len {
            let id = resolver.extent_ids[&format!("urn:x{index}")];
            assert_eq!(resolver.extents[id.0].column(), Ok(index as u32));
        }
        passes
    }

    #[test]
    fn chain_converges_within_its_length() {
        let len = 5;

        // Dependents first: each pass settles one more level, then one quiet pass.
        assert_eq!(column_passes(&chain((0..len).rev()), len), len);
        // Dependencies first: settles in one pass, then one quiet pass.
        assert_eq!(column_passes(&chain(0..len), len), 2);
    }
}
