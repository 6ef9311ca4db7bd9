//! Graph nodes
//!
//! A node is written `/type<id>`. The type is a slash-prefixed path and the
//! id is everything between the first `<` and the closing `>`, with `\<`
//! standing for a literal `<`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Type used for blank nodes created during reification
pub const BLANK_NODE_TYPE: &str = "/_";

/// Errors raised while building or parsing nodes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("node {0:?} should start ID section with a < delimiter")]
    MissingIdStart(String),

    #[error("node {0:?} should end with a > delimiter")]
    MissingIdEnd(String),

    #[error("invalid node type {node_type:?}: {reason}")]
    InvalidType {
        node_type: String,
        reason: &'static str,
    },

    #[error("invalid node id {id:?}: {reason}")]
    InvalidId { id: String, reason: &'static str },
}

pub type NodeResult<T> = Result<T, NodeError>;

/// Node type, e.g. `/user` or `/org/team`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeType(String);

impl NodeType {
    pub fn new(node_type: impl Into<String>) -> NodeResult<Self> {
        let node_type = node_type.into();
        let reason = if !node_type.starts_with('/') {
            Some("must start with /")
        } else if node_type.len() == 1 {
            Some("must name a type after /")
        } else if node_type.chars().any(|c| c.is_whitespace() || c == '<' || c == '>') {
            Some("must not contain whitespace or angle brackets")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(NodeError::InvalidType { node_type, reason }),
            None => Ok(Self(node_type)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Node id, unescaped
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> NodeResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(NodeError::InvalidId {
                id,
                reason: "must not be empty",
            });
        }
        if id.contains('>') {
            return Err(NodeError::InvalidId {
                id,
                reason: "must not contain >",
            });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.replace('<', "\\<"))
    }
}

/// A graph node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Node {
    node_type: NodeType,
    id: NodeId,
}

impl Node {
    pub fn new(node_type: NodeType, id: NodeId) -> Self {
        Self { node_type, id }
    }

    /// Parse a node from its `/type<id>` text form
    pub fn parse(text: &str) -> NodeResult<Self> {
        let raw = text.trim();
        let Some(lt) = raw.find('<') else {
            return Err(NodeError::MissingIdStart(raw.to_string()));
        };
        if !raw.ends_with('>') {
            return Err(NodeError::MissingIdEnd(raw.to_string()));
        }
        let node_type = NodeType::new(&raw[..lt])?;
        let id = NodeId::new(raw[lt + 1..raw.len() - 1].replace("\\<", "<"))?;
        Ok(Self::new(node_type, id))
    }

    /// Create a fresh blank node, `/_<uuid>`
    pub fn new_blank() -> Self {
        Self {
            node_type: NodeType(BLANK_NODE_TYPE.to_string()),
            id: NodeId(Uuid::new_v4().to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.node_type.as_str() == BLANK_NODE_TYPE
    }

    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", self.node_type, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let node = Node::parse("/user<joe>").unwrap();
        assert_eq!(node.node_type().as_str(), "/user");
        assert_eq!(node.id().as_str(), "joe");
        assert_eq!(node.to_string(), "/user<joe>");
    }

    #[test]
    fn test_parse_nested_type_and_trim() {
        let node = Node::parse("  /org/team<core devs>\t").unwrap();
        assert_eq!(node.node_type().as_str(), "/org/team");
        assert_eq!(node.id().as_str(), "core devs");
    }

    #[test]
    fn test_escaped_angle_in_id() {
        let node = Node::parse(r"/cmp<a\<b>").unwrap();
        assert_eq!(node.id().as_str(), "a<b");
        assert_eq!(node.to_string(), r"/cmp<a\<b>");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Node::parse("/user"),
            Err(NodeError::MissingIdStart(_))
        ));
        assert!(matches!(
            Node::parse("/user<joe"),
            Err(NodeError::MissingIdEnd(_))
        ));
        assert!(matches!(
            Node::parse("user<joe>"),
            Err(NodeError::InvalidType { .. })
        ));
        assert!(matches!(
            Node::parse("/<joe>"),
            Err(NodeError::InvalidType { .. })
        ));
        assert!(matches!(
            Node::parse("/user<>"),
            Err(NodeError::InvalidId { .. })
        ));
        assert!(matches!(
            Node::parse(r#""42"^^type:int64"#),
            Err(NodeError::MissingIdStart(_))
        ));
    }

    #[test]
    fn test_blank_nodes_are_fresh() {
        let a = Node::new_blank();
        let b = Node::new_blank();
        assert!(a.is_blank());
        assert_ne!(a, b);
        assert_eq!(Node::parse(&a.to_string()).unwrap(), a);
    }
}
