//! Typed literals
//!
//! A literal is written `"value"^^type:kind` with kind one of `bool`,
//! `int64`, `float64`, `text` or `blob`. Blob values are hex encoded.
//!
//! Literals are only created through a [`LiteralBuilder`], which lets callers
//! bound the size of text and blob values.
//!
//! # Example
//!
//! ```rust
//! use bql_core::triple::{DefaultBuilder, LiteralBuilder, LiteralValue};
//!
//! let lit = DefaultBuilder.parse(r#""42"^^type:int64"#).unwrap();
//! assert_eq!(lit.value(), &LiteralValue::Int64(42));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const TYPE_MARKER: &str = "\"^^type:";

/// Errors raised while building or parsing literals
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("literal {0:?} should start with a \" delimiter")]
    MissingQuote(String),

    #[error("literal {0:?} requires a type definition; missing ^^type:")]
    MissingType(String),

    #[error("invalid literal type {0}")]
    UnknownType(String),

    #[error("invalid {literal_type} value {value:?}: {reason}")]
    InvalidValue {
        literal_type: LiteralType,
        value: String,
        reason: String,
    },

    #[error("{literal_type} literal of {len} bytes exceeds the maximum of {max}")]
    TooLong {
        literal_type: LiteralType,
        len: usize,
        max: usize,
    },
}

pub type LiteralResult<T> = Result<T, LiteralError>;

/// Literal type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralType {
    Bool,
    Int64,
    Float64,
    Text,
    Blob,
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int64 => write!(f, "int64"),
            Self::Float64 => write!(f, "float64"),
            Self::Text => write!(f, "text"),
            Self::Blob => write!(f, "blob"),
        }
    }
}

impl FromStr for LiteralType {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bool" => Ok(Self::Bool),
            "int64" => Ok(Self::Int64),
            "float64" => Ok(Self::Float64),
            "text" => Ok(Self::Text),
            "blob" => Ok(Self::Blob),
            other => Err(LiteralError::UnknownType(other.to_string())),
        }
    }
}

/// Value held by a literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    Bool(bool),
    Int64(i64),
    Float64(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl LiteralValue {
    pub fn literal_type(&self) -> LiteralType {
        match self {
            Self::Bool(_) => LiteralType::Bool,
            Self::Int64(_) => LiteralType::Int64,
            Self::Float64(_) => LiteralType::Float64,
            Self::Text(_) => LiteralType::Text,
            Self::Blob(_) => LiteralType::Blob,
        }
    }

    /// Decode the unescaped text of a literal value
    fn decode(literal_type: LiteralType, value: String) -> LiteralResult<Self> {
        let invalid = |reason: String, value: String| LiteralError::InvalidValue {
            literal_type,
            value,
            reason,
        };
        match literal_type {
            LiteralType::Bool => value
                .parse()
                .map(Self::Bool)
                .map_err(|e: std::str::ParseBoolError| invalid(e.to_string(), value)),
            LiteralType::Int64 => value
                .parse()
                .map(Self::Int64)
                .map_err(|e: std::num::ParseIntError| invalid(e.to_string(), value)),
            LiteralType::Float64 => value
                .parse()
                .map(Self::Float64)
                .map_err(|e: std::num::ParseFloatError| invalid(e.to_string(), value)),
            LiteralType::Text => Ok(Self::Text(value)),
            LiteralType::Blob => hex::decode(&value)
                .map(Self::Blob)
                .map_err(|e| invalid(e.to_string(), value)),
        }
    }
}

/// A typed scalar usable as a triple object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    value: LiteralValue,
}

impl Literal {
    pub fn value(&self) -> &LiteralValue {
        &self.value
    }

    pub fn literal_type(&self) -> LiteralType {
        self.value.literal_type()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match &self.value {
            LiteralValue::Bool(b) => b.to_string(),
            LiteralValue::Int64(i) => i.to_string(),
            LiteralValue::Float64(x) => x.to_string(),
            LiteralValue::Text(s) => s.replace('"', "\\\""),
            LiteralValue::Blob(bytes) => hex::encode(bytes),
        };
        write!(f, "\"{}\"^^type:{}", text, self.literal_type())
    }
}

/// Split `"value"^^type:kind` into its type and unescaped value
fn split_literal(text: &str) -> LiteralResult<(LiteralType, String)> {
    let raw = text.trim();
    if !raw.starts_with('"') {
        return Err(LiteralError::MissingQuote(raw.to_string()));
    }
    let idx = match raw.rfind(TYPE_MARKER) {
        Some(idx) if idx > 0 => idx,
        _ => return Err(LiteralError::MissingType(raw.to_string())),
    };
    let literal_type = raw[idx + TYPE_MARKER.len()..].parse()?;
    Ok((literal_type, raw[1..idx].replace("\\\"", "\"")))
}

/// Builds literals, optionally enforcing limits
pub trait LiteralBuilder {
    /// Build a literal out of a typed value
    fn build(&self, value: LiteralValue) -> LiteralResult<Literal>;

    /// Parse a literal from its `"value"^^type:kind` text form
    fn parse(&self, text: &str) -> LiteralResult<Literal> {
        let (literal_type, value) = split_literal(text)?;
        self.build(LiteralValue::decode(literal_type, value)?)
    }
}

/// Builder without limits
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBuilder;

impl LiteralBuilder for DefaultBuilder {
    fn build(&self, value: LiteralValue) -> LiteralResult<Literal> {
        Ok(Literal { value })
    }
}

/// Builder rejecting text and blob values over a byte limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedBuilder {
    pub max_text_len: usize,
    pub max_blob_len: usize,
}

impl BoundedBuilder {
    /// Same limit for text and blob values
    pub fn new(max_len: usize) -> Self {
        Self {
            max_text_len: max_len,
            max_blob_len: max_len,
        }
    }

    pub fn with_limits(max_text_len: usize, max_blob_len: usize) -> Self {
        Self {
            max_text_len,
            max_blob_len,
        }
    }
}

impl LiteralBuilder for BoundedBuilder {
    fn build(&self, value: LiteralValue) -> LiteralResult<Literal> {
        let (len, max) = match &value {
            LiteralValue::Text(s) => (s.len(), self.max_text_len),
            LiteralValue::Blob(b) => (b.len(), self.max_blob_len),
            _ => return DefaultBuilder.build(value),
        };
        if len > max {
            return Err(LiteralError::TooLong {
                literal_type: value.literal_type(),
                len,
                max,
            });
        }
        DefaultBuilder.build(value)
    }
}
