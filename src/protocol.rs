/*!
 * JSON request/response protocol.
 *
 * A request is one JSON object whose `action` field selects the operation:
 * - `validate_single`: validate one sentence
 * - `validate_quiz`: validate every question of a quiz
 * - `suggest_fix`: propose a corrected verb form
 *
 * Requests with any other action, or none, produce no response.
 */

use std::io::Read;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::app_config::OutputConfig;
use crate::errors::{AppError, ValidatorError};
use crate::validation::{ErrorValidator, Quiz, QuizReport, QuizRunner, ValidationVerdict};

/// Input of the `validate_single` action
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ValidateSingleRequest {
    #[serde(default)]
    pub sentence: String,
    #[serde(default)]
    pub error_word: String,
    #[serde(default)]
    pub explanation: String,
}

/// Input of the `validate_quiz` action
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ValidateQuizRequest {
    #[serde(default)]
    pub quiz: Quiz,
}

/// Input of the `suggest_fix` action
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SuggestFixRequest {
    #[serde(default)]
    pub sentence: String,
    #[serde(default)]
    pub error_word: String,
}

/// Output of the `suggest_fix` action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestFixResponse {
    pub suggested_fix: Option<String>,
}

/// A parsed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ValidateSingle(ValidateSingleRequest),
    ValidateQuiz(ValidateQuizRequest),
    SuggestFix(SuggestFixRequest),
}

/// A response ready to be written out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Verdict(ValidationVerdict),
    Quiz(QuizReport),
    Fix(SuggestFixResponse),
}

impl Request {
    /// Parse a request from JSON text.
    ///
    /// Returns `Ok(None)` for an unrecognized or missing action.
    pub fn parse(input: &str) -> Result<Option<Self>, ValidatorError> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| ValidatorError::InvalidRequest(format!("not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Interpret an already decoded JSON value as a request
    pub fn from_value(value: Value) -> Result<Option<Self>, ValidatorError> {
        let Some(object) = value.as_object() else {
            return Err(ValidatorError::InvalidRequest(
                "request must be a JSON object".to_string(),
            ));
        };

        let action = object.get("action").and_then(Value::as_str).map(str::to_owned);

        let request = match action.as_deref() {
            Some("validate_single") => Self::ValidateSingle(decode(value)?),
            Some("validate_quiz") => Self::ValidateQuiz(decode(value)?),
            Some("suggest_fix") => Self::SuggestFix(decode(value)?),
            other => {
                debug!("Ignoring request with unrecognized action: {:?}", other);
                return Ok(None);
            }
        };

        debug!("Parsed request: {:?}", action);
        Ok(Some(request))
    }

    /// Run the request against a validator
    pub fn handle(&self, validator: &ErrorValidator<'_>) -> Response {
        match self {
            Self::ValidateSingle(req) => Response::Verdict(validator.validate(
                &req.sentence,
                &req.error_word,
                &req.explanation,
            )),
            Self::ValidateQuiz(req) => Response::Quiz(QuizRunner::new(validator).run(&req.quiz)),
            Self::SuggestFix(req) => Response::Fix(SuggestFixResponse {
                suggested_fix: validator.suggest_fix(&req.sentence, &req.error_word),
            }),
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ValidatorError> {
    serde_json::from_value(value).map_err(|e| {
        let message = e.to_string();
        match missing_field_name(&message) {
            Some(field) => ValidatorError::MissingField(field.to_string()),
            None => ValidatorError::InvalidRequest(message),
        }
    })
}

// serde reports absent fields as "missing field `name`"
fn missing_field_name(message: &str) -> Option<&str> {
    message.strip_prefix("missing field `")?.split('`').next()
}

/// Read one request from a stream and produce its response
pub fn process<R: Read>(
    mut reader: R,
    validator: &ErrorValidator<'_>,
) -> Result<Option<Response>, AppError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    let request = Request::parse(&input)?;
    Ok(request.map(|request| request.handle(validator)))
}

/// Serialize a response according to the output settings
pub fn render(response: &Response, output: &OutputConfig) -> Result<String, AppError> {
    if !output.pretty {
        return Ok(serde_json::to_string(response)?);
    }

    let indent = " ".repeat(output.indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    response.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| AppError::Unknown(e.to_string()))
}
