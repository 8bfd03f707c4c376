use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A raw delta: `{ "ops": [ { "insert": ..., "attributes": {...} }, ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDelta {
    pub ops: Vec<DeltaOp>,
}

impl RawDelta {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaOp {
    /// `None` for `retain` / `delete` ops, which a document delta should not contain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert: Option<Insert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
}

impl DeltaOp {
    pub fn text(text: &str) -> Self {
        Self {
            insert: Some(Insert::Text(text.to_string())),
            attributes: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Value) -> Self {
        if let Value::Object(map) = attributes {
            self.attributes = Some(map);
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Insert {
    Text(String),
    Embed(Map<String, Value>),
}
