//! Prefix table used to expand and abbreviate IRIs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const DEFAULT_NAMESPACES: &[(&str, &str)] = &[
    ("", "https://example.org/nonnosus/"),
    ("dc", "http://purl.org/dc/terms/"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("sum", "http://github.com/rybesh/sumtiem/"),
    ("time", "http://www.w3.org/2006/time#"),
];

/// Ordered prefix to base-IRI table.
///
/// Abbreviation picks the first prefix (in table order) whose base matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespaces(IndexMap<String, String>);

impl Default for Namespaces {
    fn default() -> Self {
        DEFAULT_NAMESPACES
            .iter()
            .map(|(prefix, base)| (prefix.to_string(), base.to_string()))
            .collect()
    }
}

impl FromIterator<(String, String)> for Namespaces {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Namespaces {
    pub fn base(&self, prefix: &str) -> Option<&str> {
        self.0.get(prefix).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0
            .iter()
            .map(|(prefix, base)| (prefix.as_str(), base.as_str()))
    }

    /// Expands `prefix:local` to a full IRI.
    ///
    /// Names without a known prefix are returned unchanged.
    pub fn expand(&self, qname: &str) -> String {
        match qname.split_once(':') {
            Some((prefix, local)) => match self.base(prefix) {
                Some(base) => format!("{base}{local}"),
                None => qname.to_string(),
            },
            None => qname.to_string(),
        }
    }

    /// Shortens an IRI to `prefix:local`, or returns it unchanged.
    pub fn abbreviate(&self, iri: &str) -> String {
        for (prefix, base) in self.iter() {
            if let Some(local) = iri.strip_prefix(base) {
                return format!("{prefix}:{local}");
            }
        }
        iri.to_string()
    }
}
