//! # xmlpack-types
//!
//! **Tier 0 (Record Contract)**
//!
//! Pure data structures for analysis records. No I/O or business logic.
//!
//! ## What belongs here
//! * The analysis record and its sections
//! * Input type and template variant tags
//! * The closed `FieldValue` tree used by the generic field dump
//!
//! ## What does NOT belong here
//! * Analysis computation logic (use xmlpack-analysis)
//! * XML rendering (use xmlpack-render)
//! * File I/O operations

pub mod fields;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use fields::{FieldValue, Fields, Scalar};

/// Schema version for serialized analysis records.
pub const RECORD_SCHEMA_VERSION: u32 = 1;

/// Caller-supplied processing options, stored verbatim on the record.
pub type Options = Map<String, Value>;

/// Key/value pairs lifted from the head of the content, in first-seen order.
pub type Metadata = IndexMap<String, String>;

// ---------------
// Tags
// ---------------

/// Declared format of the analyzed content.
///
/// Unknown tags are treated as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputType {
    #[default]
    Text,
    Markdown,
    Json,
    Xml,
}

impl InputType {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "markdown" => InputType::Markdown,
            "json" => InputType::Json,
            "xml" => InputType::Xml,
            _ => InputType::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Markdown => "markdown",
            InputType::Json => "json",
            InputType::Xml => "xml",
        }
    }
}

impl From<String> for InputType {
    fn from(tag: String) -> Self {
        InputType::from_tag(&tag)
    }
}

impl From<InputType> for String {
    fn from(tag: InputType) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// XML shape produced by the renderer.
///
/// Unrecognized names fall back to [`TemplateVariant::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateVariant {
    #[default]
    Default,
    TaskPacket,
    AnalysisReport,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 3] = [
        TemplateVariant::Default,
        TemplateVariant::TaskPacket,
        TemplateVariant::AnalysisReport,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "task_packet" => TemplateVariant::TaskPacket,
            "analysis_report" => TemplateVariant::AnalysisReport,
            _ => TemplateVariant::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateVariant::Default => "default",
            TemplateVariant::TaskPacket => "task_packet",
            TemplateVariant::AnalysisReport => "analysis_report",
        }
    }
}

impl From<String> for TemplateVariant {
    fn from(name: String) -> Self {
        TemplateVariant::from_name(&name)
    }
}

impl From<TemplateVariant> for String {
    fn from(variant: TemplateVariant) -> Self {
        variant.as_str().to_string()
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------
// Analysis record
// ---------------

/// The structured summary produced by one analyzer invocation.
///
/// Every field has a serde default so partially populated records (for
/// example ones read back from external storage) still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRecord {
    /// Bookkeeping only; never feeds into any other field.
    pub timestamp: String,
    pub input_type: InputType,
    pub content_length: usize,
    pub word_count: usize,
    pub basic_stats: BasicStats,
    pub structure: Structure,
    pub metadata: Metadata,
    pub complexity_score: u32,
    pub processing_options: Options,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_features: Option<MarkdownFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_structure: Option<JsonStructure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml_structure: Option<XmlStructure>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicStats {
    pub line_count: usize,
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub word_count: usize,
    pub paragraph_count: usize,
    pub sentence_count: usize,
}

/// Lines classified into at most one bucket each, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Structure {
    pub sections: Vec<String>,
    pub lists: Vec<String>,
    pub code_blocks: Vec<String>,
    pub links: Vec<String>,
}

// -----------------
// Markdown features
// -----------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownFeatures {
    pub headers: HeaderCounts,
    pub formatting: FormattingCounts,
    pub links: usize,
    pub images: usize,
    pub tables: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub total: usize,
}

/// Marker-based counts. `italic` and `code_inline` are differences and go
/// negative on unbalanced input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingCounts {
    pub bold: usize,
    pub italic: i64,
    pub code_inline: i64,
    pub code_blocks: usize,
}

// -----------------
// JSON structure
// -----------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonStructure {
    pub valid: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_arrays: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_objects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JsonStructure {
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

// -----------------
// XML structure
// -----------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlStructure {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl XmlStructure {
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

// -----------------
// Task packets
// -----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// A unit of work derived from a record; only lives inside a task packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub priority: Priority,
    pub estimated_hours: u32,
}

/// Entry in the template catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfo {
    pub name: String,
    pub schema_file: String,
    pub description: String,
}
