//! Configuration validation shared by every widget kind.
//!
//! Hosts holding loosely-typed configuration pass a [`serde_json::Value`];
//! it must be an object. Recognized keys are deserialized into the widget's
//! options type, unknown keys are ignored.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};

/// Validate a dynamic configuration and deserialize it into partial options.
///
/// `None` yields default (empty) options unless `required` is set.
pub(crate) fn parse_options<T>(widget: &'static str, value: Option<&Value>, required: bool) -> ConfigResult<T>
where
    T: DeserializeOwned + Default,
{
    let result = match value {
        None if required => Err(ConfigError::Missing { widget }),
        None => return Ok(T::default()),
        Some(value) if !value.is_object() => Err(ConfigError::NotAMapping {
            widget,
            found: value_kind(value),
        }),
        Some(value) => {
            serde_json::from_value(value.clone()).map_err(|err| ConfigError::InvalidField {
                widget,
                message: err.to_string(),
            })
        }
    };
    if let Err(err) = &result {
        tracing::warn!("{}", err);
    }
    result
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
