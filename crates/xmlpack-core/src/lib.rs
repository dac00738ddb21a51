//! # xmlpack-core
//!
//! **Tier 3 (Façade)**
//!
//! The primary library interface for xmlpack. It wires the analyzer and the
//! renderer into request/receipt workflows and exposes a JSON-in/JSON-out
//! entry point for bindings in [`ffi`].
//!
//! ## Example
//!
//! ```rust
//! use xmlpack_core::{ProcessRequest, process_workflow};
//! use xmlpack_core::types::InputType;
//!
//! let receipt = process_workflow(&ProcessRequest {
//!     content: "# Plan\n- ship it".to_string(),
//!     input_type: InputType::Markdown,
//!     output_id: "plan-1".to_string(),
//!     template: "task_packet".to_string(),
//!     ..ProcessRequest::default()
//! });
//! assert!(receipt.xml_output.starts_with("<TaskPacket id=\"plan-1\""));
//! assert_eq!(receipt.analysis.structure.sections, ["# Plan"]);
//! ```

pub mod error;
pub mod ffi;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use xmlpack_types::{AnalysisRecord, FieldValue, InputType, Options, TemplateInfo, TemplateVariant};

pub use xmlpack_types as types;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeRequest {
    pub content: String,
    pub input_type: InputType,
    pub options: Options,
}

/// Render a record that may have been stored and read back as JSON.
///
/// `record` is kept as raw JSON so fields the typed record does not know
/// about still show up in the field dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    pub record: Value,
    pub output_id: String,
    pub template: String,
    pub options: Options,
}

impl RenderRequest {
    pub fn from_record(record: &AnalysisRecord, output_id: impl Into<String>) -> Self {
        Self {
            record: serde_json::to_value(record).unwrap_or_default(),
            output_id: output_id.into(),
            template: TemplateVariant::Default.to_string(),
            options: Options::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessRequest {
    pub content: String,
    pub input_type: InputType,
    pub output_id: String,
    pub template: String,
    pub options: Options,
}

// ============================================================================
// Receipts
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderReceipt {
    pub output_id: String,
    /// The template actually used, after unknown names fall back to `default`.
    pub template: TemplateVariant,
    pub xml_output: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessReceipt {
    pub output_id: String,
    pub analysis: AnalysisRecord,
    pub xml_output: String,
}

// ============================================================================
// Workflows
// ============================================================================

pub fn analyze_workflow(request: &AnalyzeRequest) -> AnalysisRecord {
    info!(input_type = %request.input_type, "analyze");
    xmlpack_analysis::analyze(&request.content, request.input_type, &request.options)
}

pub fn render_workflow(request: &RenderRequest) -> RenderReceipt {
    let template = TemplateVariant::from_name(&request.template);
    info!(output_id = %request.output_id, %template, "render");
    let xml_output = xmlpack_render::render_fields(
        &FieldValue::from_json(&request.record),
        &request.output_id,
        template.as_str(),
        &request.options,
    );
    RenderReceipt {
        output_id: request.output_id.clone(),
        template,
        xml_output,
    }
}

/// Analyze then render. The same options map feeds both steps.
pub fn process_workflow(request: &ProcessRequest) -> ProcessReceipt {
    info!(
        input_type = %request.input_type,
        output_id = %request.output_id,
        "process"
    );
    let analysis =
        xmlpack_analysis::analyze(&request.content, request.input_type, &request.options);
    let xml_output = xmlpack_render::render(
        &analysis,
        &request.output_id,
        &request.template,
        &request.options,
    );
    ProcessReceipt {
        output_id: request.output_id.clone(),
        analysis,
        xml_output,
    }
}

pub fn templates() -> Vec<TemplateInfo> {
    xmlpack_render::list_templates()
}
