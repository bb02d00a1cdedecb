/*!
 * Tests for the JSON request protocol
 */

use anyhow::Result;
use serde_json::{json, Value};

use estcheck::app_config::OutputConfig;
use estcheck::protocol::{self, Request, Response};
use estcheck::validation::ErrorValidator;
use estcheck::{AppError, ValidatorError};

fn respond(request: Value) -> Result<Option<Value>> {
    let validator = ErrorValidator::default();
    let response = protocol::process(request.to_string().as_bytes(), &validator)?;
    Ok(match response {
        Some(response) => Some(serde_json::to_value(&response)?),
        None => None,
    })
}

#[test]
fn test_validateSingle_shouldProduceWireVerdict() -> Result<()> {
    let response = respond(json!({
        "action": "validate_single",
        "sentence": "ma näed raamatut",
        "error_word": "näed",
        "explanation": "Verb peab lõppema n-iga"
    }))?
    .expect("validate_single should respond");

    assert_eq!(
        response,
        json!({
            "valid": true,
            "error_count": 1,
            "errors": [{"type": "verb_agreement", "word": "näed", "position": 1}],
            "message": "Single error detected"
        })
    );
    Ok(())
}

#[test]
fn test_suggestFix_shouldReturnSuggestion() -> Result<()> {
    let response = respond(json!({
        "action": "suggest_fix",
        "sentence": "me loe raamatut",
        "error_word": "loe"
    }))?;
    assert_eq!(response, Some(json!({"suggested_fix": "loeme"})));
    Ok(())
}

#[test]
fn test_validateQuiz_withMissingQuiz_shouldReportEmpty() -> Result<()> {
    let response = respond(json!({"action": "validate_quiz"}))?.expect("quiz should respond");
    assert_eq!(response["total_questions"], 0);
    assert_eq!(response["all_valid"], true);
    assert_eq!(response["details"], json!([]));
    Ok(())
}

#[test]
fn test_unknownAction_shouldProduceNoResponse() -> Result<()> {
    assert_eq!(respond(json!({"action": "delete_everything"}))?, None);
    assert_eq!(respond(json!({}))?, None);
    Ok(())
}

#[test]
fn test_questionWithoutAnswer_shouldReportMissingField() {
    let validator = ErrorValidator::default();
    let input = json!({
        "action": "validate_quiz",
        "quiz": {"questions": [{"question": "'ma loed'", "explanation": "x"}]}
    })
    .to_string();

    let result = protocol::process(input.as_bytes(), &validator);
    assert!(matches!(
        result,
        Err(AppError::Validator(ValidatorError::MissingField(field))) if field == "correctAnswer"
    ));
}

#[test]
fn test_nullSentence_shouldBeInvalidRequest() {
    let result = Request::parse(r#"{"action": "validate_single", "sentence": null}"#);
    assert!(result.is_err());
}

#[test]
fn test_render_compact_shouldMatchSerdeOutput() -> Result<()> {
    let validator = ErrorValidator::default();
    let request = Request::parse(r#"{"action": "suggest_fix", "sentence": "ma loe", "error_word": "loe"}"#)?
        .expect("suggest_fix should parse");
    let response = request.handle(&validator);
    assert!(matches!(response, Response::Fix(_)));

    let rendered = protocol::render(&response, &OutputConfig::default())?;
    assert_eq!(rendered, r#"{"suggested_fix":"loen"}"#);
    Ok(())
}
