//! Predicates
//!
//! A predicate is written `"id"@[anchor]`. An empty anchor, `"id"@[]`,
//! makes an immutable predicate; an RFC 3339 timestamp makes a temporal one.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const ANCHOR_OPEN: &str = "\"@[";

/// Errors raised while building or parsing predicates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    #[error("predicate {0:?} should start with a \" delimiter")]
    MissingQuote(String),

    #[error("predicate {0:?} requires time anchor information; missing \"@[")]
    MissingAnchor(String),

    #[error("predicate {0:?} time anchor should end with a ] delimiter")]
    MissingAnchorEnd(String),

    #[error("predicate id must not be empty")]
    EmptyId,

    #[error("invalid time anchor {anchor:?}: {source}")]
    InvalidAnchor {
        anchor: String,
        source: chrono::ParseError,
    },
}

pub type PredicateResult<T> = Result<T, PredicateError>;

/// Whether a predicate carries a time anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredicateKind {
    Immutable,
    Temporal,
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immutable => write!(f, "IMMUTABLE"),
            Self::Temporal => write!(f, "TEMPORAL"),
        }
    }
}

/// A typed relation label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    anchor: Option<DateTime<Utc>>,
}

impl Predicate {
    pub fn new_immutable(id: impl Into<String>) -> PredicateResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(PredicateError::EmptyId);
        }
        Ok(Self { id, anchor: None })
    }

    pub fn new_temporal(id: impl Into<String>, anchor: DateTime<Utc>) -> PredicateResult<Self> {
        let mut predicate = Self::new_immutable(id)?;
        predicate.anchor = Some(anchor);
        Ok(predicate)
    }

    /// Parse a predicate from its `"id"@[anchor]` text form
    pub fn parse(text: &str) -> PredicateResult<Self> {
        let raw = text.trim();
        if !raw.starts_with('"') {
            return Err(PredicateError::MissingQuote(raw.to_string()));
        }
        // Anchors never contain quotes, so the last marker is the real one.
        let idx = match raw.rfind(ANCHOR_OPEN) {
            Some(idx) if idx > 0 => idx,
            _ => return Err(PredicateError::MissingAnchor(raw.to_string())),
        };
        if !raw.ends_with(']') {
            return Err(PredicateError::MissingAnchorEnd(raw.to_string()));
        }
        let id = raw[1..idx].replace("\\\"", "\"");
        let anchor = &raw[idx + ANCHOR_OPEN.len()..raw.len() - 1];
        if anchor.is_empty() {
            return Self::new_immutable(id);
        }
        let ta = DateTime::parse_from_rfc3339(anchor).map_err(|source| {
            PredicateError::InvalidAnchor {
                anchor: anchor.to_string(),
                source,
            }
        })?;
        Self::new_temporal(id, ta.with_timezone(&Utc))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> PredicateKind {
        match self.anchor {
            Some(_) => PredicateKind::Temporal,
            None => PredicateKind::Immutable,
        }
    }

    pub fn time_anchor(&self) -> Option<DateTime<Utc>> {
        self.anchor
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.replace('"', "\\\"");
        match &self.anchor {
            Some(ta) => write!(
                f,
                "\"{}\"@[{}]",
                id,
                ta.to_rfc3339_opts(SecondsFormat::AutoSi, true)
            ),
            None => write!(f, "\"{}\"@[]", id),
        }
    }
}
