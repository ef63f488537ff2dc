//! Analysis report returned by the compile service
//!
//! The service is asked for a fixed JSON shape, but nothing enforces it.
//! Every field is therefore optional and read leniently: a field that is
//! missing, `null` or of the wrong type falls back to its default instead of
//! rejecting the whole report.

use crate::error::{AnalyzeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(default, deserialize_with = "lenient::value")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub contract_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub pragma: String,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub license: Option<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub errors: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub warnings: Vec<String>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub functions: Vec<FunctionInfo>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub events: Vec<EventInfo>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub state_vars: Vec<StateVarInfo>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub modifiers: Vec<String>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub has_constructor: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub constructor_params: String,
    #[serde(default, deserialize_with = "lenient::value")]
    pub gas_estimates: GasEstimates,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub security_issues: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub suggestions: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub visibility: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mutability: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub params: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub returns: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub params: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateVarInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub ty: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub visibility: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasEstimates {
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub deployment: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_map")]
    pub functions: BTreeMap<String, String>,
}

impl AnalysisReport {
    /// Parse a report from the raw JSON text of the service reply
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Read a report from an already parsed JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(AnalyzeError::malformed(format!(
                "expected a JSON object, found {}",
                lenient::type_name(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Failed compile: the service says so or reported errors
    pub fn is_failure(&self) -> bool {
        !self.success || !self.errors.is_empty()
    }

    /// Gas estimate for a function, if the service gave one
    pub fn function_gas(&self, name: &str) -> Option<&str> {
        self.gas_estimates.functions.get(name).map(String::as_str)
    }
}

/// Deserializers that fall back to defaults on shape mismatches
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::collections::BTreeMap;
    use tracing::warn;

    pub(super) fn type_name(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Render a scalar as text; arrays of scalars join with ", "
    fn text(value: &Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().filter_map(text).collect();
                Some(parts.join(", "))
            }
            Value::Object(_) => Some(value.to_string()),
        }
    }

    pub fn value<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let raw = Value::deserialize(deserializer)?;
        if raw.is_null() {
            return Ok(T::default());
        }
        Ok(serde_json::from_value(raw.clone()).unwrap_or_else(|_| {
            warn!(found = type_name(&raw), "discarding malformed report field");
            T::default()
        }))
    }

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(text(&raw).unwrap_or_default())
    }

    /// Empty strings count as absent
    pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(text(&raw).filter(|s| !s.is_empty()))
    }

    /// A list of messages; a lone string becomes a one-element list
    pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(match raw {
            Value::Array(items) => items.iter().filter_map(text).collect(),
            Value::String(s) if !s.is_empty() => vec![s],
            Value::Null | Value::String(_) => Vec::new(),
            other => {
                warn!(found = type_name(&other), "discarding malformed report list");
                Vec::new()
            }
        })
    }

    /// A list of objects; entries that are not objects are skipped
    pub fn entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let raw = Value::deserialize(deserializer)?;
        let Value::Array(items) = raw else {
            if !raw.is_null() {
                warn!(found = type_name(&raw), "discarding malformed report list");
            }
            return Ok(Vec::new());
        };
        Ok(items
            .into_iter()
            .filter(|item| {
                let keep = item.is_object();
                if !keep {
                    warn!(found = type_name(item), "skipping malformed report entry");
                }
                keep
            })
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect())
    }

    pub fn string_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(match raw {
            Value::Object(map) => map
                .iter()
                .filter_map(|(k, v)| text(v).map(|v| (k.clone(), v)))
                .collect(),
            _ => BTreeMap::new(),
        })
    }
}
