#![allow(dead_code)]

use std::cell::RefCell;
use sumtiem_core::{Fact, LayoutObserver};

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const DATE: &str = "http://purl.org/dc/terms/date";
pub const START: &str = "http://www.w3.org/2006/time#intervalStartedBy";
pub const FINISH: &str = "http://www.w3.org/2006/time#intervalFinishedBy";
pub const BOUNDS: &str = "http://www.w3.org/2006/time#intervalIn";
pub const ABOVE: &str = "http://github.com/rybesh/sumtiem/layoutAbove";
pub const RIGHT_OF: &str = "http://github.com/rybesh/sumtiem/layoutRightOf";

pub fn ex(local: &str) -> String {
    format!("https://example.org/nonnosus/{local}")
}

pub fn sum(local: &str) -> String {
    format!("http://github.com/rybesh/sumtiem/{local}")
}

/// Builds fact lists in the shape the reasoner hands over.
#[derive(Default)]
pub struct Facts {
    facts: Vec<Fact>,
}

impl Facts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event(mut self, id: &str, label: &str, date: Option<&str>) -> Self {
        self.facts.push(Fact::node(ex(id), RDF_TYPE, sum("Event")));
        self.facts.push(Fact::literal(ex(id), LABEL, label));
        if let Some(date) = date {
            self.facts.push(Fact::literal(ex(id), DATE, date));
        }
        self
    }

    pub fn extent(mut self, id: &str, label: &str, from: &str, to: &str) -> Self {
        self.facts.push(Fact::node(ex(id), RDF_TYPE, sum("Extent")));
        self.facts.push(Fact::literal(ex(id), LABEL, label));
        self.facts.push(Fact::node(ex(id), START, ex(from)));
        self.facts.push(Fact::node(ex(id), FINISH, ex(to)));
        self
    }

    pub fn above(mut self, upper: &str, lower: &str) -> Self {
        self.facts.push(Fact::node(ex(upper), ABOVE, ex(lower)));
        self
    }

    pub fn right_of(mut self, extent: &str, other: &str) -> Self {
        self.facts.push(Fact::node(ex(extent), RIGHT_OF, ex(other)));
        self
    }

    pub fn bounds(mut self, event: &str, extent: &str) -> Self {
        self.facts.push(Fact::node(ex(event), BOUNDS, ex(extent)));
        self
    }

    pub fn push(mut self, fact: Fact) -> Self {
        self.facts.push(fact);
        self
    }

    pub fn build(self) -> Vec<Fact> {
        self.facts
    }
}

/// Observer that keeps every diagnostic for assertions.
#[derive(Default)]
pub struct RecordingObserver {
    pub multiple: RefCell<Vec<(String, String, usize)>>,
    pub dangling: RefCell<Vec<(String, String, String)>>,
}

impl LayoutObserver for RecordingObserver {
    fn multiple_values(&self, resource_id: &str, property: &str, count: usize) {
        self.multiple
            .borrow_mut()
            .push((resource_id.to_string(), property.to_string(), count));
    }

    fn dangling_reference(&self, resource_id: &str, property: &str, target: &str) {
        self.dangling.borrow_mut().push((
            resource_id.to_string(),
            property.to_string(),
            target.to_string(),
        ));
    }
}
