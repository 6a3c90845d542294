//! Materialized resource nodes.
//!
//! # Responsibility
//! - Aggregate every fact about one identity into typed property sets.
//!
//! # Invariants
//! - Value sets keep first-insertion order; "first value" always means the
//!   value that was materialized first.
//! - Object properties store resource ids, never owned resources.

use indexmap::{IndexMap, IndexSet};

/// One subject or object identity with its aggregated properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resource {
    pub id: String,
    /// Abbreviated type names, e.g. `sum:Event`.
    pub types: IndexSet<String>,
    /// Logical property name to literal values.
    pub data_props: IndexMap<String, IndexSet<String>>,
    /// Logical property name to related resource ids.
    pub object_props: IndexMap<String, IndexSet<String>>,
}

impl Resource {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.contains(type_name)
    }

    pub fn add_type(&mut self, type_name: impl Into<String>) {
        self.types.insert(type_name.into());
    }

    /// Adds a literal value, creating the property set on first use.
    pub fn add_data(&mut self, property: &str, value: impl Into<String>) {
        self.data_props
            .entry(property.to_string())
            .or_default()
            .insert(value.into());
    }

    /// Adds a related resource id, creating the property set on first use.
    pub fn add_object(&mut self, property: &str, target: impl Into<String>) {
        self.object_props
            .entry(property.to_string())
            .or_default()
            .insert(target.into());
    }

    /// Literal values of `property` in insertion order.
    pub fn data(&self, property: &str) -> impl Iterator<Item = &str> + '_ {
        self.data_props
            .get(property)
            .into_iter()
            .flat_map(|values| values.iter().map(String::as_str))
    }

    /// Related resource ids of `property` in insertion order.
    pub fn objects(&self, property: &str) -> impl Iterator<Item = &str> + '_ {
        self.object_props
            .get(property)
            .into_iter()
            .flat_map(|values| values.iter().map(String::as_str))
    }

    pub fn first_data(&self, property: &str) -> Option<&str> {
        self.data(property).next()
    }

    pub fn first_object(&self, property: &str) -> Option<&str> {
        self.objects(property).next()
    }

    pub fn data_count(&self, property: &str) -> usize {
        self.data_props.get(property).map_or(0, IndexSet::len)
    }

    pub fn object_count(&self, property: &str) -> usize {
        self.object_props.get(property).map_or(0, IndexSet::len)
    }

    pub fn has_objects(&self, property: &str) -> bool {
        self.object_count(property) > 0
    }
}

/// Resources of one materialization pass, keyed by id in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceGraph {
    resources: IndexMap<String, Resource>,
}

impl ResourceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the resource for `id`, creating an empty one on first use.
    pub fn get_or_insert(&mut self, id: &str) -> &mut Resource {
        self.resources
            .entry(id.to_string())
            .or_insert_with(|| Resource::new(id))
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> + '_ {
        self.resources.values()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn into_resources(self) -> Vec<Resource> {
        self.resources.into_values().collect()
    }
}

impl FromIterator<Resource> for ResourceGraph {
    fn from_iter<T: IntoIterator<Item = Resource>>(iter: T) -> Self {
        Self {
            resources: iter
                .into_iter()
                .map(|resource| (resource.id.clone(), resource))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Resource, ResourceGraph};

    #[test]
    fn first_value_is_first_inserted() {
        let mut resource = Resource::new("ex:a");
        resource.add_data("label", "zeta");
        resource.add_data("label", "alpha");
        resource.add_data("label", "zeta");

        assert_eq!(resource.first_data("label"), Some("zeta"));
        assert_eq!(resource.data_count("label"), 2);
        assert_eq!(resource.data_count("date"), 0);
        assert_eq!(resource.first_object("start"), None);
    }

    #[test]
    fn graph_creates_resources_lazily_once() {
        let mut graph = ResourceGraph::new();
        graph.get_or_insert("ex:a").add_type("sum:Event");
        graph.get_or_insert("ex:b");
        graph.get_or_insert("ex:a").add_type("sum:Extent");

        assert_eq!(graph.len(), 2);
        let ids: Vec<&str> = graph.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["ex:a", "ex:b"]);
        assert_eq!(graph.get("ex:a").map(|r| r.types.len()), Some(2));
    }
}
