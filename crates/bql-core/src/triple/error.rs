//! Triple error types

use thiserror::Error;

use super::node::NodeError;
use super::predicate::PredicateError;

/// Errors that can occur while building, parsing or reifying triples
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripleError {
    /// One or more of subject, predicate and object were not provided
    #[error("cannot create triple with missing {}", .missing.join(", "))]
    MissingComponents { missing: Vec<&'static str> },

    /// The line does not have the `<subject> <predicate> <object>` shape
    #[error("could not split subject, predicate and object out of {line:?}")]
    Split { line: String },

    #[error("failed to parse subject {segment:?}: {source}")]
    Subject {
        segment: String,
        source: NodeError,
    },

    #[error("failed to parse predicate {segment:?}: {source}")]
    Predicate {
        segment: String,
        source: PredicateError,
    },

    #[error("failed to parse object {segment:?}: {source}")]
    Object {
        segment: String,
        source: PredicateError,
    },

    /// Reification of an immutable predicate needs an anchor it does not have
    #[error("cannot reify predicate {predicate}: immutable predicates carry no time anchor")]
    MissingTimeAnchor { predicate: String },

    #[error("invalid reification predicate: {0}")]
    Reification(#[from] PredicateError),
}

/// Result type for triple operations
pub type TripleResult<T> = Result<T, TripleError>;
