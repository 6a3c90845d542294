//! Logical property names and their configured predicates.

use super::namespace::Namespaces;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const TYPE: &str = "type";
pub const LABEL: &str = "label";
pub const DATE: &str = "date";
pub const START: &str = "start";
pub const FINISH: &str = "finish";
pub const BOUNDS: &str = "bounds";
pub const LAYOUT_ABOVE: &str = "layoutAbove";
pub const LAYOUT_RIGHT_OF: &str = "layoutRightOf";

const DEFAULT_PROPERTIES: &[(&str, &str)] = &[
    (TYPE, "rdf:type"),
    (LABEL, "rdfs:label"),
    (DATE, "dc:date"),
    (START, "time:intervalStartedBy"),
    (FINISH, "time:intervalFinishedBy"),
    (BOUNDS, "time:intervalIn"),
    (LAYOUT_ABOVE, "sum:layoutAbove"),
    (LAYOUT_RIGHT_OF, "sum:layoutRightOf"),
];

/// Logical property name to qualified predicate name (`prefix:local`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap(IndexMap<String, String>);

impl Default for PropertyMap {
    fn default() -> Self {
        DEFAULT_PROPERTIES
            .iter()
            .map(|(name, predicate)| (name.to_string(), predicate.to_string()))
            .collect()
    }
}

impl FromIterator<(String, String)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl PropertyMap {
    pub fn predicate(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Full predicate IRI to logical name.
    pub fn invert(&self, namespaces: &Namespaces) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|(name, predicate)| (namespaces.expand(predicate), name.clone()))
            .collect()
    }
}
