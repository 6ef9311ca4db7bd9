//! Parsing serialized triples
//!
//! A serialized triple is one line holding `<subject> <predicate> <object>`
//! separated by whitespace. The subject always ends in `>` and the predicate
//! always ends in `]`, so the line is split at the first `>` followed by
//! whitespace and a `"`, and at the first `]` followed by whitespace and
//! either `/` or `"`.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::error::{TripleError, TripleResult};
use super::literal::LiteralBuilder;
use super::node::Node;
use super::object::Object;
use super::predicate::Predicate;
use super::types::Triple;

lazy_static! {
    /// Boundary between subject and predicate
    static ref PREDICATE_SPLIT: Regex =
        Regex::new(r#">\s+""#).expect("predicate split pattern is valid");
    /// Boundary between predicate and object
    static ref OBJECT_SPLIT: Regex =
        Regex::new(r#"(\]\s+/)|(\]\s+")"#).expect("object split pattern is valid");
}

impl Triple {
    /// Parse one serialized triple
    pub fn parse<B: LiteralBuilder + ?Sized>(line: &str, builder: &B) -> TripleResult<Self> {
        parse_triple(line, builder)
    }
}

/// Parse one serialized triple, using `builder` for literal objects
pub fn parse_triple<B: LiteralBuilder + ?Sized>(line: &str, builder: &B) -> TripleResult<Triple> {
    let raw = line.trim();
    let split = || TripleError::Split {
        line: raw.to_string(),
    };

    let (Some(ps), Some(os)) = (PREDICATE_SPLIT.find(raw), OBJECT_SPLIT.find(raw)) else {
        debug!(line = raw, "triple line has no subject/predicate/object boundaries");
        return Err(split());
    };
    // The predicate has to sit between the two boundaries.
    if os.start() + 1 < ps.end() - 1 {
        debug!(line = raw, "triple line boundaries out of order");
        return Err(split());
    }

    let subject = &raw[..ps.start() + 1];
    let predicate = &raw[ps.end() - 1..os.start() + 1];
    let object = &raw[os.end() - 1..];

    let s = Node::parse(subject).map_err(|source| TripleError::Subject {
        segment: subject.to_string(),
        source,
    })?;
    let p = Predicate::parse(predicate).map_err(|source| TripleError::Predicate {
        segment: predicate.to_string(),
        source,
    })?;
    let o = Object::parse(object, builder).map_err(|source| TripleError::Object {
        segment: object.to_string(),
        source,
    })?;

    Ok(Triple::new(s, p, o))
}
