use std::fmt;

/// A node of a decoded OSML tree.
///
/// Leaves are always strings: quoted strings and bare tokens alike. Numeric
/// interpretation is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Folder(Vec<Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&[Value]> {
        match self {
            Value::Folder(items) => Some(items),
            Value::String(_) => None,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Value::Folder(_))
    }

    /// Child at `index`; `None` for strings and out-of-range indexes.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.as_folder().and_then(|items| items.get(index))
    }

    /// Follows a path of child indexes, e.g. `[1, 1, 1, 2]`.
    pub fn at(&self, path: &[usize]) -> Option<&Value> {
        path.iter().try_fold(self, |node, &index| node.get(index))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Folder(items)
    }
}

/// Renders the tree back into OSML with every leaf quoted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s.replace('"', "\"\"")),
            Value::Folder(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("}")
            }
        }
    }
}
