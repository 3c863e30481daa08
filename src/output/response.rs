//! CLI response formatting and output.
//!
//! Provides the plain-text line writers, the JSON envelope, and exit code
//! mapping.

use debug_guard::error::Hint;
use debug_guard::{Error, ErrorCode, Result};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn write_line<W: Write>(mut handle: W, line: &str, context: &str) -> Result<()> {
    if let Err(e) = writeln!(handle, "{}", line) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(e.to_string(), Some(context.to_string())));
    }
    Ok(())
}

/// Print one report line to stdout.
pub fn print_line(line: &str) -> Result<()> {
    write_line(io::stdout().lock(), line, "write stdout")
}

/// Print one diagnostic line to stderr.
pub fn print_error_line(line: &str) -> Result<()> {
    write_line(io::stderr().lock(), line, "write stderr")
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    let payload = response.to_json()?;
    print_line(&payload)
}

pub fn print_json_result<T: Serialize>(result: Result<T>) -> Result<()> {
    match result {
        Ok(data) => print_response(&CliResponse::success(data)),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

/// Plain-text form of a fatal error, for runs without `--json`.
pub fn print_error_text(err: &Error) -> Result<()> {
    let detail = err
        .details
        .get("problem")
        .or_else(|| err.details.get("error"))
        .and_then(|v| v.as_str());

    let mut line = match detail {
        Some(detail) if detail != err.message => format!("error: {}: {}", err.message, detail),
        _ => format!("error: {}", err.message),
    };
    for hint in &err.hints {
        line.push_str(&format!("\nhint: {}", hint.message));
    }
    print_error_line(&line)
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidJson
        | ErrorCode::ConfigInvalidValue
        | ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::FileProcessingFailed
        | ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_carries_code_and_hints() {
        let err = Error::config_invalid_value("guard", None, "guard must not be blank")
            .with_hint("Remove the key to use the default guard");

        let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

        assert!(json.contains("\"success\": false"));
        assert!(json.contains("\"code\": \"config.invalid_value\""));
        assert!(json.contains("Remove the key to use the default guard"));
    }

    #[test]
    fn success_envelope_omits_error() {
        let json = CliResponse::success(serde_json::json!({ "total_changes": 2 }))
            .to_json()
            .unwrap();

        assert!(json.contains("\"success\": true"));
        assert!(json.contains("\"total_changes\": 2"));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn config_errors_exit_with_2() {
        assert_eq!(exit_code_for_error(ErrorCode::ConfigInvalidJson), 2);
        assert_eq!(exit_code_for_error(ErrorCode::ValidationInvalidArgument), 2);
        assert_eq!(exit_code_for_error(ErrorCode::FileProcessingFailed), 1);
    }

    #[test]
    fn write_line_appends_newline() {
        let mut buf = Vec::new();
        write_line(&mut buf, "Total: 0 statements wrapped in 0 files", "test").unwrap();
        assert_eq!(buf, b"Total: 0 statements wrapped in 0 files\n");
    }
}
