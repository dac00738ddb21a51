//! FFI-friendly JSON entrypoint for language bindings.
//!
//! ## Response Envelope
//!
//! - Success: `{"ok": true, "data": ...}`
//! - Error: `{"ok": false, "error": {"code": "...", "message": "...", "details": ...}}`
//!
//! ## Strict Parsing
//!
//! - Optional keys fall back to defaults when missing or `null`
//! - Required keys (`content`, `record`, `output_id`) must be present
//! - Values of the wrong type are errors, never silently defaulted

use serde_json::{Map, Value, json};
use xmlpack_types::{InputType, Options, RECORD_SCHEMA_VERSION};

use crate::error::{ResponseEnvelope, XmlpackError};
use crate::{
    AnalyzeRequest, ProcessRequest, RenderRequest, analyze_workflow, process_workflow,
    render_workflow, templates,
};

/// Run an xmlpack operation with JSON arguments, returning JSON output.
///
/// Modes: `analyze`, `render`, `process`, `templates`, `version`.
///
/// ```
/// use xmlpack_core::ffi::run_json;
///
/// let out = run_json("analyze", r#"{"content": "a b c", "input_type": "text"}"#);
/// let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
/// assert_eq!(parsed["ok"], true);
/// assert_eq!(parsed["data"]["word_count"], 3);
/// ```
pub fn run_json(mode: &str, args_json: &str) -> String {
    match run_json_inner(mode, args_json) {
        Ok(data) => ResponseEnvelope::success(data).to_json(),
        Err(err) => ResponseEnvelope::error(&err).to_json(),
    }
}

fn run_json_inner(mode: &str, args_json: &str) -> Result<Value, XmlpackError> {
    let args: Value = serde_json::from_str(args_json)?;
    if !args.is_object() {
        return Err(XmlpackError::invalid_field("arguments", "a JSON object"));
    }

    match mode {
        "analyze" => {
            let request = parse_analyze_request(&args)?;
            Ok(serde_json::to_value(analyze_workflow(&request))?)
        }
        "render" => {
            let request = parse_render_request(&args)?;
            Ok(serde_json::to_value(render_workflow(&request))?)
        }
        "process" => {
            let request = parse_process_request(&args)?;
            Ok(serde_json::to_value(process_workflow(&request))?)
        }
        "templates" => Ok(serde_json::to_value(templates())?),
        "version" => Ok(json!({
            "version": version(),
            "record_schema_version": RECORD_SCHEMA_VERSION,
        })),
        _ => Err(XmlpackError::unknown_mode(mode)),
    }
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

fn parse_analyze_request(args: &Value) -> Result<AnalyzeRequest, XmlpackError> {
    Ok(AnalyzeRequest {
        content: parse_required_string(args, "content")?,
        input_type: parse_input_type(args)?,
        options: parse_options(args)?,
    })
}

fn parse_render_request(args: &Value) -> Result<RenderRequest, XmlpackError> {
    // `analysis` is accepted as an alias for callers that name the record
    // after the analyze step.
    let record = match (args.get("record"), args.get("analysis")) {
        (Some(record @ Value::Object(_)), _) | (None, Some(record @ Value::Object(_))) => {
            record.clone()
        }
        (None, None) => return Err(XmlpackError::missing_field("record")),
        _ => return Err(XmlpackError::invalid_field("record", "a JSON object")),
    };
    Ok(RenderRequest {
        record,
        output_id: parse_required_string(args, "output_id")?,
        template: parse_string(args, "template", "default")?,
        options: parse_options(args)?,
    })
}

fn parse_process_request(args: &Value) -> Result<ProcessRequest, XmlpackError> {
    Ok(ProcessRequest {
        content: parse_required_string(args, "content")?,
        input_type: parse_input_type(args)?,
        output_id: parse_required_string(args, "output_id")?,
        template: parse_string(args, "template", "default")?,
        options: parse_options(args)?,
    })
}

// ============================================================================
// Strict parsing helpers
// ============================================================================

/// Parse a required string field: missing -> error, non-string -> error.
fn parse_required_string(args: &Value, field: &str) -> Result<String, XmlpackError> {
    match args.get(field) {
        None | Some(Value::Null) => Err(XmlpackError::missing_field(field)),
        Some(v) => v
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| XmlpackError::invalid_field(field, "a string")),
    }
}

/// Parse a string field strictly: missing/null -> default, non-string -> error.
fn parse_string(args: &Value, field: &str, default: &str) -> Result<String, XmlpackError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(v) => v
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| XmlpackError::invalid_field(field, "a string")),
    }
}

/// Unknown type tags read as text; only a non-string value is an error.
fn parse_input_type(args: &Value) -> Result<InputType, XmlpackError> {
    parse_string(args, "input_type", "text").map(|tag| InputType::from_tag(&tag))
}

fn parse_options(args: &Value) -> Result<Options, XmlpackError> {
    match args.get("options") {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(XmlpackError::invalid_field("options", "a JSON object")),
    }
}
