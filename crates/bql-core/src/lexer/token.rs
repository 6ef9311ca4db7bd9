//! Token types for the BQL lexer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token types in the BQL query language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    // === Control ===
    /// Scan error; the token carries the positioned error message
    Error,
    /// End of input
    Eof,

    // === Keywords ===
    /// "select" - starts a query
    Query,
    From,
    Where,
    As,
    Type,
    Id,
    At,
    Before,
    After,
    Between,
    Count,
    Distinct,
    Sum,
    Group,
    By,
    Order,
    Having,
    Asc,
    Desc,
    Limit,
    Not,
    And,
    Or,

    // === Graph values ===
    /// Variable binding, `?name`
    Binding,
    /// Node, `/type<id>`
    Node,
    /// Literal, `"value"^^type:kind`
    Literal,
    /// Predicate, `"id"@[anchor]`
    Predicate,

    // === Punctuation ===
    LBracket,
    RBracket,
    LPar,
    RPar,
    Dot,
    Semicolon,
    Comma,
    Lt,
    Gt,
    Eq,
}

impl TokenType {
    /// Check if this is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenType::Query
                | TokenType::From
                | TokenType::Where
                | TokenType::As
                | TokenType::Type
                | TokenType::Id
                | TokenType::At
                | TokenType::Before
                | TokenType::After
                | TokenType::Between
                | TokenType::Count
                | TokenType::Distinct
                | TokenType::Sum
                | TokenType::Group
                | TokenType::By
                | TokenType::Order
                | TokenType::Having
                | TokenType::Asc
                | TokenType::Desc
                | TokenType::Limit
                | TokenType::Not
                | TokenType::And
                | TokenType::Or
        )
    }

    /// Check if this is a single-character punctuation token
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenType::LBracket
                | TokenType::RBracket
                | TokenType::LPar
                | TokenType::RPar
                | TokenType::Dot
                | TokenType::Semicolon
                | TokenType::Comma
                | TokenType::Lt
                | TokenType::Gt
                | TokenType::Eq
        )
    }

    /// Check if this token ends the stream (EOF or ERROR)
    pub fn is_terminal(&self) -> bool {
        matches!(self, TokenType::Error | TokenType::Eof)
    }

    /// Canonical display name
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Error => "ERROR",
            TokenType::Eof => "EOF",
            TokenType::Query => "QUERY",
            TokenType::From => "FROM",
            TokenType::Where => "WHERE",
            TokenType::As => "AS",
            TokenType::Type => "TYPE",
            TokenType::Id => "ID",
            TokenType::At => "AT",
            TokenType::Before => "BEFORE",
            TokenType::After => "AFTER",
            TokenType::Between => "BETWEEN",
            TokenType::Count => "COUNT",
            TokenType::Distinct => "DISTINCT",
            TokenType::Sum => "SUM",
            TokenType::Group => "GROUP",
            TokenType::By => "BY",
            TokenType::Order => "ORDER",
            TokenType::Having => "HAVING",
            TokenType::Asc => "ASC",
            TokenType::Desc => "DESC",
            TokenType::Limit => "LIMIT",
            TokenType::Not => "NOT",
            TokenType::And => "AND",
            TokenType::Or => "OR",
            TokenType::Binding => "BINDING",
            TokenType::Node => "NODE",
            TokenType::Literal => "LITERAL",
            TokenType::Predicate => "PREDICATE",
            TokenType::LBracket => "LEFT_BRACKET",
            TokenType::RBracket => "RIGHT_BRACKET",
            TokenType::LPar => "LEFT_PARENT",
            TokenType::RPar => "RIGHT_PARENT",
            TokenType::Dot => "DOT",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Comma => "COMMA",
            TokenType::Lt => "LT",
            TokenType::Gt => "GT",
            TokenType::Eq => "EQ",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token
///
/// `text` is always the raw slice of input consumed for the token.
/// `error_message` is only set on [`TokenType::Error`] tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Byte offset of the token start in the original input
    pub offset: usize,
}

impl Token {
    pub fn new(token_type: TokenType, text: impl Into<String>, offset: usize) -> Self {
        Self {
            token_type,
            text: text.into(),
            error_message: None,
            offset,
        }
    }

    pub fn error(text: impl Into<String>, message: impl Into<String>, offset: usize) -> Self {
        Self {
            token_type: TokenType::Error,
            text: text.into(),
            error_message: Some(message.into()),
            offset,
        }
    }

    pub fn is_error(&self) -> bool {
        self.token_type == TokenType::Error
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_message {
            Some(msg) => write!(f, "{}({:?}): {}", self.token_type, self.text, msg),
            None => write!(f, "{}({:?})", self.token_type, self.text),
        }
    }
}
