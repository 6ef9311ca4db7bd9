//! Triple data model
//!
//! A triple is a `<subject predicate object>` statement where the subject is
//! a [`Node`], the predicate a [`Predicate`] and the object any of the two
//! or a [`Literal`].
//!
//! # Example
//!
//! ```rust
//! use bql_core::triple::{parse_triple, DefaultBuilder, ObjectType};
//!
//! let line = r#"/user<joe>  "met"@[2016-04-10T04:21:00Z]  /user<mary>"#;
//! let triple = parse_triple(line, &DefaultBuilder).unwrap();
//! assert_eq!(triple.subject().to_string(), "/user<joe>");
//! assert_eq!(triple.object().object_type(), ObjectType::Node);
//!
//! let (reified, blank) = triple.reify().unwrap();
//! assert_eq!(reified.len(), 4);
//! assert_eq!(reified[1].subject(), &blank);
//! ```

mod error;
mod literal;
mod node;
mod object;
mod parse;
mod predicate;
mod reify;
mod types;

pub use error::{TripleError, TripleResult};
pub use literal::{
    BoundedBuilder, DefaultBuilder, Literal, LiteralBuilder, LiteralError, LiteralResult,
    LiteralType, LiteralValue,
};
pub use node::{Node, NodeError, NodeId, NodeResult, NodeType, BLANK_NODE_TYPE};
pub use object::{Object, ObjectType};
pub use parse::parse_triple;
pub use predicate::{Predicate, PredicateError, PredicateKind, PredicateResult};
pub use reify::{OBJECT_PREDICATE, PREDICATE_PREDICATE, SUBJECT_PREDICATE};
pub use types::{Triple, TripleBuilder};
