use super::definition::{Properties, SavedCanvas, SavedPosition, Specification};
use crate::error::DocumentError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Document-type tag that prefixes the pipeline text form.
pub const FLOW_TAG: &str = "!Flow";

/// A whole pipeline document: free-form `with` metadata plus the ordered pods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub with: Properties,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pods: Specification,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl FlowDocument {
    pub fn new(with: Properties, pods: Specification) -> Self {
        Self { with, pods }
    }

    /// Parses the pipeline text form. The leading `!Flow` tag is optional.
    pub fn from_text(text: &str) -> Result<Self, DocumentError> {
        let body = text.trim_start();
        let body = body.strip_prefix(FLOW_TAG).unwrap_or(body);
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(body).map_err(|e| DocumentError::Parse(e.to_string()))
    }

    /// Serializes to the pipeline text form: the `!Flow` tag line followed by YAML.
    pub fn to_text(&self) -> Result<String, DocumentError> {
        let yaml =
            serde_yaml::to_string(self).map_err(|e| DocumentError::Serialize(e.to_string()))?;
        Ok(format!("{}\n{}", FLOW_TAG, yaml))
    }

    /// Coordinates saved under `with.board.canvas`, if any.
    ///
    /// Entries whose value is `null` are ignored; any other non-mapping entry is an error.
    pub fn saved_canvas(&self) -> Result<Option<SavedCanvas>, DocumentError> {
        let canvas = match self.with.get("board").and_then(|board| board.get("canvas")) {
            None | Some(Value::Null) => return Ok(None),
            Some(canvas) => canvas,
        };
        let entries: IndexMap<String, Option<SavedPosition>> =
            serde_json::from_value(canvas.clone())
                .map_err(|e| DocumentError::InvalidCanvas(e.to_string()))?;
        Ok(Some(
            entries
                .into_iter()
                .filter_map(|(step, position)| position.map(|p| (step, p)))
                .collect(),
        ))
    }
}
