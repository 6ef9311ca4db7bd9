//! Triple objects: a node, a predicate or a literal

use serde::{Deserialize, Serialize};
use std::fmt;

use super::literal::{Literal, LiteralBuilder};
use super::node::Node;
use super::predicate::{Predicate, PredicateResult};

/// Which variant an [`Object`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    Node,
    Predicate,
    Literal,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => write!(f, "node"),
            Self::Predicate => write!(f, "predicate"),
            Self::Literal => write!(f, "literal"),
        }
    }
}

/// The object of a triple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Object {
    Node(Node),
    Predicate(Predicate),
    Literal(Literal),
}

impl Object {
    /// Parse an object, trying node, literal and predicate forms in that order.
    ///
    /// When none of them match, the predicate error is returned.
    pub fn parse<B: LiteralBuilder + ?Sized>(text: &str, builder: &B) -> PredicateResult<Self> {
        if let Ok(node) = Node::parse(text) {
            return Ok(Self::Node(node));
        }
        if let Ok(literal) = builder.parse(text) {
            return Ok(Self::Literal(literal));
        }
        Predicate::parse(text).map(Self::Predicate)
    }

    pub fn object_type(&self) -> ObjectType {
        match self {
            Self::Node(_) => ObjectType::Node,
            Self::Predicate(_) => ObjectType::Predicate,
            Self::Literal(_) => ObjectType::Literal,
        }
    }

    pub fn node(&self) -> Option<&Node> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn predicate(&self) -> Option<&Predicate> {
        match self {
            Self::Predicate(p) => Some(p),
            _ => None,
        }
    }

    pub fn literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(l) => Some(l),
            _ => None,
        }
    }
}

impl From<Node> for Object {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Predicate> for Object {
    fn from(predicate: Predicate) -> Self {
        Self::Predicate(predicate)
    }
}

impl From<Literal> for Object {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(n) => n.fmt(f),
            Self::Predicate(p) => p.fmt(f),
            Self::Literal(l) => l.fmt(f),
        }
    }
}
