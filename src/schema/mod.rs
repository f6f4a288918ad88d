//! Property-type table for pod properties.
//!
//! The table maps a property name to its declared [`PropertyKind`]. It is built once,
//! never mutated afterwards, and handed explicitly to whatever needs it (see
//! [`FlowConverter`](crate::converter::FlowConverter)), so tests can swap in a custom schema.

mod property;

pub use property::{PropertyDefinition, PropertyKind};

use crate::error::SchemaError;
use ahash::AHashMap;
use serde_json::Value;
use std::fmt;
use tracing::error;

const BUILTIN_SCHEMA: &str = include_str!("../../data/pod_properties.json");

/// Immutable lookup from property name to declared kind.
#[derive(Debug, Clone, Default)]
pub struct PropertyTypes {
    kinds: AHashMap<String, PropertyKind>,
}

impl PropertyTypes {
    /// An empty table: every property passes through decoding unchanged.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The pod schema shipped with the crate.
    ///
    /// Falls back to an empty table, logging an error, if the embedded schema does not
    /// parse. `tests/unit.rs` loads it, so a broken schema fails the test suite.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_SCHEMA).unwrap_or_else(|err| {
            error!(%err, "Embedded pod schema is invalid, booleans will not be decoded");
            Self::empty()
        })
    }

    /// Parses a schema document of the form `[{"name": "...", "type": "bool"}, ...]`.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        let definitions: Vec<PropertyDefinition> =
            serde_json::from_str(json).map_err(|e| SchemaError::Parse(e.to_string()))?;
        Ok(Self::from_entries(
            definitions.into_iter().map(|d| (d.name, d.kind)),
        ))
    }

    /// Builds a table from `(name, kind)` pairs. Later entries win.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, PropertyKind)>,
        S: Into<String>,
    {
        Self {
            kinds: entries.into_iter().map(|(n, k)| (n.into(), k)).collect(),
        }
    }

    pub fn kind_of(&self, property: &str) -> Option<PropertyKind> {
        self.kinds.get(property).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Decodes a stored property value back to its declared type.
    ///
    /// Only `bool` properties are coerced: the UI stores them as text, so `"true"` becomes
    /// `true` and every other value becomes `false` (a value that is already a boolean is
    /// kept). Integer and enumerated kinds are passed through unchanged because parsed
    /// documents already carry them with the right type.
    pub fn decode(&self, property: &str, value: &Value) -> Value {
        match self.kind_of(property) {
            Some(PropertyKind::Bool) => Value::Bool(match value {
                Value::Bool(b) => *b,
                Value::String(s) => s == "true",
                _ => false,
            }),
            _ => value.clone(),
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
