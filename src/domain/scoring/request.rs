use crate::domain::errors::ScoreError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named input fields for a single scoring call.
///
/// There is no shared schema: each model reads the fields it needs through
/// [`ScoreRequest::number`] and [`ScoreRequest::numbers`], which apply the
/// model's defaults and reject values of the wrong shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreRequest {
    fields: Map<String, Value>,
}

impl ScoreRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful for embedding callers and tests.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// Reads a scalar. Absent and `null` fall back to `default`.
    pub fn number(&self, field: &str, default: f64) -> Result<f64, ScoreError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(default),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| ScoreError::invalid_field(field, "a number")),
        }
    }

    /// Reads an ordered sequence of numbers. Absent and `null` yield an empty vec.
    pub fn numbers(&self, field: &str) -> Result<Vec<f64>, ScoreError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_f64()
                        .ok_or_else(|| ScoreError::invalid_field(field, "a sequence of numbers"))
                })
                .collect(),
            Some(_) => Err(ScoreError::invalid_field(field, "a sequence of numbers")),
        }
    }
}

impl From<Map<String, Value>> for ScoreRequest {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Untyped payloads: `null` is an empty request, any non-object is rejected.
impl TryFrom<Value> for ScoreRequest {
    type Error = ScoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ScoreError::invalid_field("data", "an object")),
        }
    }
}
