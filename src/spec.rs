//! Declarative parameter specifications.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

use crate::error::{Error, Result};
use crate::value::Value;

/// An attribute mapping describing one parameter.
///
/// Every spec carries a `name` and a `type` tag; the remaining attributes are
/// read by the constructor registered for that tag. Specs serialize as plain
/// JSON objects.
///
/// # Examples
///
/// ```
/// use design_space::ParamSpec;
///
/// let spec = ParamSpec::new("lr", "pow").with("lb", 1e-5).with("ub", 1e-1);
/// assert_eq!(spec.name().unwrap(), "lr");
/// assert_eq!(spec.type_tag().unwrap(), "pow");
///
/// let parsed: ParamSpec =
///     serde_json::from_str(r#"{"name": "lr", "type": "pow", "lb": 1e-5, "ub": 1e-1}"#).unwrap();
/// assert_eq!(parsed, spec);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSpec(Map<String, Json>);

impl ParamSpec {
    /// Creates a spec with the given name and type tag.
    #[must_use]
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        let mut attrs = Map::new();
        attrs.insert("name".into(), Json::String(name.into()));
        attrs.insert("type".into(), Json::String(type_tag.into()));
        Self(attrs)
    }

    /// Sets an attribute, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Json>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// The parameter name.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is absent or not a string.
    pub fn name(&self) -> Result<&str> {
        self.str("name")
    }

    /// The type tag resolved against the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if `type` is absent or not a string.
    pub fn type_tag(&self) -> Result<&str> {
        self.str("type")
    }

    /// Raw attribute lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Json> {
        self.0.get(key)
    }

    /// Reads a string attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute is absent or not a string.
    pub fn str(&self, key: &str) -> Result<&str> {
        self.require(key)?
            .as_str()
            .ok_or_else(|| invalid(key, "expected a string"))
    }

    /// Reads a numeric attribute as `f64`.
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute is absent or not a number.
    pub fn f64(&self, key: &str) -> Result<f64> {
        self.require(key)?
            .as_f64()
            .ok_or_else(|| invalid(key, "expected a number"))
    }

    /// Reads a numeric attribute, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute is present but not a number.
    pub fn f64_or(&self, key: &str, default: f64) -> Result<f64> {
        match self.0.get(key) {
            None | Some(Json::Null) => Ok(default),
            Some(_) => self.f64(key),
        }
    }

    /// Reads an integral attribute. Floats with no fractional part are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute is absent or not an integer.
    #[allow(clippy::cast_possible_truncation)]
    pub fn i64(&self, key: &str) -> Result<i64> {
        let raw = self.require(key)?;
        if let Some(v) = raw.as_i64() {
            return Ok(v);
        }
        match raw.as_f64() {
            Some(v) if v.fract() == 0.0 && v.is_finite() => Ok(v as i64),
            _ => Err(invalid(key, "expected an integer")),
        }
    }

    /// Reads an array attribute as native values.
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute is absent, not an array, or holds
    /// something other than scalars.
    pub fn values(&self, key: &str) -> Result<Vec<Value>> {
        let items = self
            .require(key)?
            .as_array()
            .ok_or_else(|| invalid(key, "expected an array"))?;
        items
            .iter()
            .map(|item| {
                serde_json::from_value(item.clone())
                    .map_err(|_| invalid(key, "array items must be scalars"))
            })
            .collect()
    }

    fn require(&self, key: &str) -> Result<&Json> {
        self.0.get(key).ok_or_else(|| Error::MissingAttribute {
            key: key.to_owned(),
        })
    }
}

impl From<Map<String, Json>> for ParamSpec {
    fn from(attrs: Map<String, Json>) -> Self {
        Self(attrs)
    }
}

impl TryFrom<Json> for ParamSpec {
    type Error = Error;

    fn try_from(value: Json) -> Result<Self> {
        match value {
            Json::Object(attrs) => Ok(Self(attrs)),
            _ => Err(invalid("<spec>", "expected an object")),
        }
    }
}

fn invalid(key: &str, reason: &str) -> Error {
    Error::InvalidAttribute {
        key: key.to_owned(),
        reason: reason.to_owned(),
    }
}
