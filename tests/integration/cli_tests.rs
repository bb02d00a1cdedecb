/*!
 * End-to-end tests running the estcheck binary
 */

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use anyhow::Result;
use serde_json::Value;

use crate::common;

fn estcheck(args: &[&str], stdin: &str, work_dir: &Path) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_estcheck"))
        .args(args)
        .current_dir(work_dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())?;

    Ok(child.wait_with_output()?)
}

#[test]
fn test_stdinRequest_shouldWriteJsonResponse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = estcheck(
        &[],
        r#"{"action": "suggest_fix", "sentence": "nad loe", "error_word": "loe"}"#,
        temp_dir.path(),
    )?;

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["suggested_fix"], "loevad");
    Ok(())
}

#[test]
fn test_unknownAction_shouldPrintNothing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = estcheck(&["request"], r#"{"action": "noop"}"#, temp_dir.path())?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_malformedRequest_shouldExitWithFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = estcheck(&[], "this is not json", temp_dir.path())?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_quizCommand_withStrictConfig_shouldFailOnInvalidQuestion() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_quiz(temp_dir.path(), "quiz.json")?;
    common::create_test_file(temp_dir.path(), "estcheck.json", r#"{"quiz": {"strict": true}}"#)?;

    let output = estcheck(&["quiz", "quiz.json"], "", temp_dir.path())?;

    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["invalid_questions"], 1);
    Ok(())
}

#[test]
fn test_quizCommand_withoutStrict_shouldSucceed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_quiz(temp_dir.path(), "quiz.json")?;

    let output = estcheck(&["quiz", "quiz.json", "--pretty"], "", temp_dir.path())?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("\n  \"total_questions\": 2"));
    Ok(())
}

#[test]
fn test_validateCommand_shouldReportVerdict() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = estcheck(
        &["validate", "-s", "ohtlik tee", "-e", "tee"],
        "",
        temp_dir.path(),
    )?;

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["valid"], false);
    assert_eq!(json["error_count"], 2);
    Ok(())
}

#[test]
fn test_casesCommand_shouldListMatchingCases() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = estcheck(&["cases", "majast"], "", temp_dir.path())?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.trim(), "majast: partitiiv, elatiiv");
    Ok(())
}

#[test]
fn test_configOption_withCustomFile_shouldApplyItsSettings() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(
        temp_dir.path(),
        "custom.json",
        r#"{"output": {"pretty": true, "indent": 4}}"#,
    )?;

    let output = estcheck(
        &["--config", "custom.json", "suggest", "-s", "ma loe", "-e", "loe"],
        "",
        temp_dir.path(),
    )?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout, "{\n    \"suggested_fix\": \"loen\"\n}\n");
    Ok(())
}

#[test]
fn test_logLevelFlag_shouldOverrideConfigFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "estcheck.json", r#"{"log_level": "error"}"#)?;
    let args = ["validate", "-s", "ma loed raamatut", "-e", "loed"];

    let quiet = estcheck(&args, "", temp_dir.path())?;
    assert!(quiet.status.success());
    assert!(quiet.stderr.is_empty());

    let mut verbose_args = vec!["-l", "debug"];
    verbose_args.extend(args);
    let verbose = estcheck(&verbose_args, "", temp_dir.path())?;

    assert!(verbose.status.success());
    let stderr = String::from_utf8(verbose.stderr)?;
    assert!(stderr.contains("DEBUG"));
    assert!(stderr.contains("Using configuration"));

    let json: Value = serde_json::from_slice(&verbose.stdout)?;
    assert_eq!(json["valid"], true);
    Ok(())
}
