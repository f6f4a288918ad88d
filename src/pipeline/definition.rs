use crate::error::GraphError;
use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the reserved entry-point step.
pub const GATEWAY: &str = "gateway";

/// Property holding the predecessors of a step.
pub const NEEDS: &str = "needs";

/// Properties of a single step, in document order.
pub type Properties = serde_json::Map<String, Value>;

/// A pipeline specification: step name to properties, in document order.
///
/// A step may be declared without any properties (`gateway:` with no body), which is
/// kept as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specification {
    steps: IndexMap<String, Option<Properties>>,
}

impl Specification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step, or replaces the properties of an existing one in place.
    pub fn insert(&mut self, step: impl Into<String>, properties: Option<Properties>) {
        self.steps.insert(step.into(), properties);
    }

    /// Builder-style variant of [`Specification::insert`].
    pub fn with_step(mut self, step: impl Into<String>, properties: Option<Properties>) -> Self {
        self.insert(step, properties);
        self
    }

    pub fn get(&self, step: &str) -> Option<&Option<Properties>> {
        self.steps.get(step)
    }

    pub fn contains(&self, step: &str) -> bool {
        self.steps.contains_key(step)
    }

    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.steps.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, Option<Properties>> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<'a> IntoIterator for &'a Specification {
    type Item = (&'a String, &'a Option<Properties>);
    type IntoIter = Iter<'a, String, Option<Properties>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, Option<Properties>)> for Specification {
    fn from_iter<T: IntoIterator<Item = (S, Option<Properties>)>>(iter: T) -> Self {
        Self {
            steps: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Declared predecessors of a step: a single name or a list of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Needs {
    One(String),
    Many(Vec<String>),
}

impl Needs {
    /// Reads a raw `needs` value. `null` and the empty string count as "not declared".
    pub fn from_value(step: &str, value: &Value) -> Result<Option<Self>, GraphError> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => Ok(Some(Needs::One(s.clone()))),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    _ => Err(GraphError::InvalidNeeds {
                        step: step.to_string(),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|names| Some(Needs::Many(names))),
            _ => Err(GraphError::InvalidNeeds {
                step: step.to_string(),
            }),
        }
    }

    /// Collapses a list of predecessors: one name becomes a bare string.
    pub fn from_names(mut names: Vec<String>) -> Self {
        if names.len() == 1 {
            Needs::One(names.remove(0))
        } else {
            Needs::Many(names)
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            Needs::One(name) => vec![name],
            Needs::Many(names) => names,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Needs::One(name) => Value::String(name.clone()),
            Needs::Many(names) => Value::Array(names.iter().cloned().map(Value::String).collect()),
        }
    }
}

/// A previously saved coordinate pair, as found in the document.
///
/// Coordinates are kept raw (number, numeric string, or anything else) and only parsed
/// when the graph is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedPosition {
    #[serde(default)]
    pub x: Value,
    #[serde(default)]
    pub y: Value,
}

impl SavedPosition {
    pub fn new(x: impl Into<Value>, y: impl Into<Value>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Step name to saved coordinates.
pub type SavedCanvas = IndexMap<String, SavedPosition>;
