mod types;

pub use types::*;

use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Checks a job's raw `input` against the request schema.
///
/// `prompt` must be a non-empty string; `sampling_params`, when present, must
/// be an object and defaults to empty. Unknown keys are ignored. The error
/// text is safe to hand back to the caller.
pub fn validate(input: &Value) -> Result<GenerateRequest> {
    match input {
        Value::Null => return Err(Error::validation("missing field `input`")),
        Value::Object(_) => {}
        other => {
            return Err(Error::validation(format!(
                "input must be an object, got {}",
                type_name(other)
            )));
        }
    }

    let request = GenerateRequest::deserialize(input)
        .map_err(|e| Error::validation(e.to_string()))?;

    if request.prompt.is_empty() {
        return Err(Error::validation("field `prompt` must not be empty"));
    }

    Ok(request)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
