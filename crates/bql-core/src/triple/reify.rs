//! Reification
//!
//! Reifying `<s p o>` introduces a fresh blank node `b` and three triples
//! that make each component of the original statement addressable:
//!
//! ```text
//! <s p o>
//! <b _subject   s>
//! <b _predicate p>
//! <b _object    o>
//! ```

use tracing::trace;

use super::error::{TripleError, TripleResult};
use super::node::Node;
use super::object::Object;
use super::predicate::{Predicate, PredicateKind};
use super::types::Triple;

pub const SUBJECT_PREDICATE: &str = "_subject";
pub const PREDICATE_PREDICATE: &str = "_predicate";
pub const OBJECT_PREDICATE: &str = "_object";

/// Predicate used for one reified component.
///
/// Immutable predicates flip to a temporal `base` reusing the original
/// anchor; anything else yields an immutable `base`. Immutable predicates
/// have no anchor, so the first branch ends in `MissingTimeAnchor`.
fn reification_predicate(base: &str, p: &Predicate) -> TripleResult<Predicate> {
    match p.kind() {
        PredicateKind::Immutable => {
            let anchor = p
                .time_anchor()
                .ok_or_else(|| TripleError::MissingTimeAnchor {
                    predicate: p.to_string(),
                })?;
            Ok(Predicate::new_temporal(base, anchor)?)
        }
        PredicateKind::Temporal => Ok(Predicate::new_immutable(base)?),
    }
}

impl Triple {
    /// Reify the triple.
    ///
    /// Returns the original triple followed by the three reified ones, and
    /// the blank node they share as subject.
    pub fn reify(&self) -> TripleResult<(Vec<Triple>, Node)> {
        let p = self.predicate();
        let subject_p = reification_predicate(SUBJECT_PREDICATE, p)?;
        let predicate_p = reification_predicate(PREDICATE_PREDICATE, p)?;
        let object_p = reification_predicate(OBJECT_PREDICATE, p)?;

        let b = Node::new_blank();
        let triples = vec![
            self.clone(),
            Triple::new(b.clone(), subject_p, Object::Node(self.subject().clone())),
            Triple::new(b.clone(), predicate_p, Object::Predicate(p.clone())),
            Triple::new(b.clone(), object_p, self.object().clone()),
        ];
        trace!(triple = %self, blank = %b, "reified triple");
        Ok((triples, b))
    }
}
