//! Diagnosis documents produced by the upstream analysis service.
//!
//! Parsing is deliberately forgiving: a document that is valid JSON never
//! fails to load because of an unexpected shape.  Missing or mistyped fields
//! collapse to "nothing here" (no analysis, no conditions, no name, no hint),
//! which the classifier turns into the default profile.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

// ---------------------------------------------------------------------------
// DiagnosisError
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a diagnosis document.
#[derive(Debug, Error)]
pub enum DiagnosisError {
    /// The document could not be read.
    #[error("cannot read diagnosis document: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON.
    #[error("invalid diagnosis JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// A single diagnosed health issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Free-text condition name; `None` when the source omitted it.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

impl Condition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// A condition whose name was not supplied.
    pub fn unnamed() -> Self {
        Self { name: None }
    }
}

// ---------------------------------------------------------------------------
// DiagnosisAnalysis
// ---------------------------------------------------------------------------

/// The `analysis` section of a diagnosis response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisAnalysis {
    #[serde(default, deserialize_with = "lenient_conditions")]
    pub conditions: Vec<Condition>,

    /// Specialty the analysis recommends visiting, if any.
    #[serde(
        rename = "whichSpecialityHospitalToGo",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub specialty_hint: Option<String>,
}

// ---------------------------------------------------------------------------
// DiagnosisResponse
// ---------------------------------------------------------------------------

/// Top-level diagnosis response document.
///
/// # Example
/// ```rust
/// use care_navigator::diagnosis::DiagnosisResponse;
///
/// let json = r#"{ "analysis": { "conditions": [ { "name": "Migraine" }, 42 ] } }"#;
/// let response = DiagnosisResponse::from_json(json).unwrap();
/// assert_eq!(response.conditions().len(), 2);
/// assert_eq!(response.conditions()[1].name, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct DiagnosisResponse {
    pub analysis: Option<DiagnosisAnalysis>,
}

impl From<Value> for DiagnosisResponse {
    /// Any document that is not an object, or whose `analysis` is not an
    /// object, is a response without analysis.
    fn from(value: Value) -> Self {
        let analysis = match value {
            Value::Object(mut map) => map
                .remove("analysis")
                .filter(Value::is_object)
                // Every field of DiagnosisAnalysis is itself lenient, so an
                // object always converts.
                .and_then(|a| serde_json::from_value(a).ok()),
            _ => None,
        };
        Self { analysis }
    }
}

impl DiagnosisResponse {
    pub fn from_json(json: &str) -> Result<Self, DiagnosisError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DiagnosisError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, DiagnosisError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Conditions of the analysis, or an empty slice.
    pub fn conditions(&self) -> &[Condition] {
        self.analysis
            .as_ref()
            .map(|a| a.conditions.as_slice())
            .unwrap_or(&[])
    }

    pub fn specialty_hint(&self) -> Option<&str> {
        self.analysis.as_ref()?.specialty_hint.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Lenient field deserializers
// ---------------------------------------------------------------------------

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_conditions<'de, D>(deserializer: D) -> Result<Vec<Condition>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .iter()
        .map(|item| Condition {
            name: item.get("name").and_then(Value::as_str).map(str::to_owned),
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
