//! BQL Core
//!
//! Lexical and data-model front end of the BQL graph query language:
//!
//! - [`lexer`] - tokenizes query text into a typed token stream
//! - [`triple`] - nodes, predicates, literals, triples, triple parsing and reification
//!
//! # Features
//!
//! - `stream` (default) - run the lexer on a tokio task feeding a bounded queue
//!
//! # Example
//!
//! ```rust
//! use bql_core::lexer::{tokenize, TokenType};
//! use bql_core::triple::{DefaultBuilder, Triple};
//!
//! let tokens = tokenize(r#"select ?o from ?g where { /user<joe> "knows"@[] ?o };"#);
//! assert_eq!(tokens.last().map(|t| t.token_type), Some(TokenType::Eof));
//!
//! let triple = Triple::parse(r#"/user<joe> "knows"@[] /user<mary>"#, &DefaultBuilder).unwrap();
//! assert_eq!(triple.predicate().id(), "knows");
//! ```

pub mod lexer;
pub mod triple;

// Re-export main types at crate root
pub use lexer::{tokenize, Lexer, Token, TokenType};
pub use triple::{
    parse_triple, DefaultBuilder, Literal, LiteralBuilder, Node, Object, ObjectType, Predicate,
    Triple, TripleBuilder, TripleError,
};
