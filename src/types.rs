use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::{missing_key, SheetError, SheetResult};

//==============================================================================
// Scalar values
//==============================================================================

/// A normalized data value taken from a value column
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// The empty-string placeholder used for blank and example cells
    pub fn empty() -> Self {
        Scalar::Text(String::new())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Falsy values: empty text, `false` and zero
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Text(s) => !s.is_empty(),
            Scalar::Int(i) => *i != 0,
            Scalar::Float(f) => *f != 0.0,
            Scalar::Bool(b) => *b,
        }
    }

    /// Equality that treats `1` and `1.0` as the same number
    pub fn same_value(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Int(a), Scalar::Float(b)) | (Scalar::Float(b), Scalar::Int(a)) => {
                (*a as f64) == *b
            }
            (Scalar::Bool(a), Scalar::Int(b)) | (Scalar::Int(b), Scalar::Bool(a)) => {
                i64::from(*a) == *b
            }
            _ => self == other,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Scalar::Text(s) => Value::String(s.clone()),
            Scalar::Int(i) => Value::from(*i),
            Scalar::Float(f) => Value::from(*f),
            Scalar::Bool(b) => Value::Bool(*b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

//==============================================================================
// Extraction tree
//==============================================================================

/// One value slot of an extraction tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Scalar(Scalar),
    /// A nested block of keys
    Table(Tree),
    /// Instances of a repeatable group
    List(Vec<Tree>),
}

impl Node {
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Scalar(_) => "value",
            Node::Table(_) => "table",
            Node::List(_) => "list",
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Tree> {
        match self {
            Node::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Tree]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Node::Scalar(s) => s.is_truthy(),
            Node::Table(t) => !t.is_empty(),
            Node::List(items) => !items.is_empty(),
        }
    }

    pub fn same_value(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Scalar(a), Node::Scalar(b)) => a.same_value(b),
            _ => self == other,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Node::Scalar(s) => s.to_json(),
            Node::Table(t) => t.to_json(),
            Node::List(items) => Value::Array(items.iter().map(Tree::to_json).collect()),
        }
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Scalar(value)
    }
}

impl From<Tree> for Node {
    fn from(tree: Tree) -> Self {
        Node::Table(tree)
    }
}

macro_rules! node_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Node {
                fn from(value: $t) -> Self {
                    Node::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

node_from_scalar!(&str, String, i64, f64, bool);

/// Nested key/value structure recovered from a labeled grid.
///
/// Keys keep their first-seen order; repeatable-path discovery depends on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tree {
    entries: IndexMap<String, Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    /// Set a key, keeping its original position when it already exists
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) {
        self.entries.insert(key.into(), node.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Required lookup; a missing key is fatal for the caller
    pub fn field(&self, key: &str) -> SheetResult<&Node> {
        self.entries
            .get(key)
            .ok_or_else(|| missing_key(key, self.entries.keys().cloned()))
    }

    pub fn scalar(&self, key: &str) -> SheetResult<&Scalar> {
        let node = self.field(key)?;
        node.as_scalar()
            .ok_or_else(|| type_error(key, "value", node))
    }

    /// Required text value (numbers are not converted)
    pub fn text(&self, key: &str) -> SheetResult<&str> {
        let scalar = self.scalar(key)?;
        scalar.as_str().ok_or_else(|| {
            SheetError::Type(format!("'{}' must be text, found {:?}", key, scalar))
        })
    }

    pub fn table(&self, key: &str) -> SheetResult<&Tree> {
        let node = self.field(key)?;
        node.as_table()
            .ok_or_else(|| type_error(key, "table", node))
    }

    pub fn list(&self, key: &str) -> SheetResult<&[Tree]> {
        let node = self.field(key)?;
        node.as_list().ok_or_else(|| type_error(key, "list", node))
    }

    /// JSON copy of a required field
    pub fn json(&self, key: &str) -> SheetResult<Value> {
        Ok(self.field(key)?.to_json())
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

fn type_error(key: &str, expected: &str, found: &Node) -> SheetError {
    SheetError::Type(format!(
        "'{}' must be a {}, found a {}",
        key,
        expected,
        found.kind()
    ))
}

impl FromIterator<(String, Node)> for Tree {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
