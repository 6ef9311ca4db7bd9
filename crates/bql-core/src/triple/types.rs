//! Triple type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{TripleError, TripleResult};
use super::node::Node;
use super::object::Object;
use super::predicate::Predicate;

/// A `<subject predicate object>` statement.
///
/// All three components are always present; triples are never modified
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triple {
    subject: Node,
    predicate: Predicate,
    object: Object,
}

impl Triple {
    pub fn new(subject: Node, predicate: Predicate, object: impl Into<Object>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }

    pub fn subject(&self) -> &Node {
        &self.subject
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn object(&self) -> &Object {
        &self.object
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.subject, self.predicate, self.object)
    }
}

/// Builder for triples assembled from parts that may be missing
#[derive(Debug, Clone, Default)]
pub struct TripleBuilder {
    subject: Option<Node>,
    predicate: Option<Predicate>,
    object: Option<Object>,
}

impl TripleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(mut self, subject: Node) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn object(mut self, object: impl Into<Object>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Build the triple, naming every missing component on failure
    pub fn build(self) -> TripleResult<Triple> {
        match (self.subject, self.predicate, self.object) {
            (Some(s), Some(p), Some(o)) => Ok(Triple::new(s, p, o)),
            (s, p, o) => {
                let missing = [
                    (s.is_none(), "subject"),
                    (p.is_none(), "predicate"),
                    (o.is_none(), "object"),
                ]
                .into_iter()
                .filter_map(|(absent, name)| absent.then_some(name))
                .collect();
                Err(TripleError::MissingComponents { missing })
            }
        }
    }
}
