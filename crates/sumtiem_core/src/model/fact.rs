//! Subject-predicate-object facts.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Object position of a fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Term {
    /// Reference to another resource (IRI or blank node label).
    Node(String),
    /// Literal string value.
    Literal(String),
}

impl Term {
    /// Returns the raw lexical value regardless of term kind.
    pub fn value(&self) -> &str {
        match self {
            Self::Node(value) | Self::Literal(value) => value,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// One statement as produced by the external parser or reasoner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

impl Fact {
    /// Creates a fact whose object refers to another resource.
    pub fn node(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: Term::Node(object.into()),
        }
    }

    /// Creates a fact whose object is a literal string.
    pub fn literal(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: Term::Literal(object.into()),
        }
    }

    pub fn is_literal(&self) -> bool {
        self.object.is_literal()
    }
}

impl Display for Fact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.object {
            Term::Node(value) => write!(f, "{} {} {}", self.subject, self.predicate, value),
            Term::Literal(value) => {
                write!(f, "{} {} {:?}", self.subject, self.predicate, value)
            }
        }
    }
}
