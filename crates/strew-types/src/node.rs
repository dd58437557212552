use bytes::Bytes;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Property map of an object node. Iteration follows insertion order.
pub type Map = IndexMap<String, Node>;

/// A node in the keyed value tree that the engine decomposes.
///
/// The tree is immutable from the engine's point of view; every traversal
/// parameter is a shared reference and caller data is never modified.
///
/// Binary buffers are a first-class node kind, distinct from arrays of
/// numbers. Converting a tree to [`serde_json::Value`] encodes binary data
/// as an array of numbers, which loses that distinction -- the conversion
/// is one-way lossy for binary nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    /// Raw binary buffer.
    Binary(Bytes),
    Array(Vec<Node>),
    /// Mapping of property name to child node, in insertion order.
    Object(Map),
}

/// Coarse type tag of a [`Node`], used by handler applicability predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Binary,
    Array,
    Object,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "boolean",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Binary => "binary",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        };
        f.write_str(name)
    }
}

impl Node {
    /// Create an empty object node.
    pub fn object() -> Self {
        Node::Object(Map::new())
    }

    /// The coarse type tag of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Null => NodeKind::Null,
            Node::Bool(_) => NodeKind::Bool,
            Node::Number(_) => NodeKind::Number,
            Node::String(_) => NodeKind::String,
            Node::Binary(_) => NodeKind::Binary,
            Node::Array(_) => NodeKind::Array,
            Node::Object(_) => NodeKind::Object,
        }
    }

    /// Returns `true` if this node is a plain object.
    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// Returns `true` if this node is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// The property map, if this node is an object.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    /// The string content, if this node is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// The binary content, if this node is a binary buffer.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Node::Binary(b) => Some(b),
            _ => None,
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Number(value.into())
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Node::Number(value.into())
    }
}

impl From<Bytes> for Node {
    fn from(value: Bytes) -> Self {
        Node::Binary(value)
    }
}

impl From<Vec<u8>> for Node {
    fn from(value: Vec<u8>) -> Self {
        Node::Binary(Bytes::from(value))
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Array(value)
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(b) => Node::Bool(b),
            serde_json::Value::Number(n) => Node::Number(n),
            serde_json::Value::String(s) => Node::String(s),
            serde_json::Value::Array(items) => {
                Node::Array(items.into_iter().map(Node::from).collect())
            }
            serde_json::Value::Object(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (key, entry) in entries {
                    map.insert(key, Node::from(entry));
                }
                Node::Object(map)
            }
        }
    }
}

impl From<&Node> for serde_json::Value {
    /// Binary nodes become arrays of numbers; the distinction from a
    /// numeric array is lost.
    fn from(node: &Node) -> Self {
        match node {
            Node::Null => serde_json::Value::Null,
            Node::Bool(b) => serde_json::Value::Bool(*b),
            Node::Number(n) => serde_json::Value::Number(n.clone()),
            Node::String(s) => serde_json::Value::String(s.clone()),
            Node::Binary(bytes) => serde_json::Value::Array(
                bytes
                    .iter()
                    .map(|b| serde_json::Value::Number((*b).into()))
                    .collect(),
            ),
            Node::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Node::Object(map) => {
                let mut entries = serde_json::Map::new();
                for (key, child) in map {
                    entries.insert(key.clone(), serde_json::Value::from(child));
                }
                serde_json::Value::Object(entries)
            }
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) => n.serialize(serializer),
            Node::String(s) => serializer.serialize_str(s),
            Node::Binary(bytes) => serializer.serialize_bytes(bytes),
            Node::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Object(map) => {
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (key, child) in map {
                    entries.serialize_entry(key, child)?;
                }
                entries.end()
            }
        }
    }
}
