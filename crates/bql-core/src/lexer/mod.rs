//! BQL Query Lexer
//!
//! Turns BQL query text into a typed token stream for the query parser.
//!
//! # Lexical elements
//!
//! ```text
//! binding    ::= "?" LETTER+
//! node       ::= "/" type "<" id ">"            ("\<" escapes "<" inside the id)
//! predicate  ::= '"' id '"@[' anchor? "]"        ('\"' escapes '"' inside the id)
//! literal    ::= '"' value '"^^type:' kind       (kind: bool | int64 | float64 | text | blob)
//! keyword    ::= LETTER+                         (case-insensitive, fixed table)
//! punctuation::= "{" | "}" | "(" | ")" | "." | ";" | "," | "<" | ">" | "="
//! ```
//!
//! Scan errors never surface as Rust errors: the stream ends with a single
//! [`TokenType::Error`] token whose message reads `[lexer:LINE:COL] message`.
//!
//! # Example
//!
//! ```rust
//! use bql_core::lexer::{tokenize, TokenType};
//!
//! let tokens = tokenize("?name");
//! assert_eq!(tokens[0].token_type, TokenType::Binding);
//! assert_eq!(tokens[0].text, "?name");
//! assert_eq!(tokens[1].token_type, TokenType::Eof);
//! ```

mod keywords;
mod scanner;
#[cfg(feature = "stream")]
pub mod stream;
mod token;

pub use keywords::{is_keyword, lookup_keyword};
pub use scanner::Lexer;
#[cfg(feature = "stream")]
pub use stream::{spawn, StreamConfig, TokenStream};
pub use token::{Token, TokenType};

/// Scan the whole input eagerly
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}
