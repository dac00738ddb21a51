//! # xmlpack-render
//!
//! **Tier 1 (Template Renderer)**
//!
//! Lays an analysis record out as an XML document in one of the
//! [`TemplateVariant`] shapes.
//!
//! ## What belongs here
//! * The element tree and its pretty writer
//! * Key-to-element-name mapping and the generic field dump
//! * Effort estimation, task derivation and the template catalog
//!
//! ## What does NOT belong here
//! * Content analysis (use xmlpack-analysis)
//! * Persistence or identifier generation
//!
//! Rendering cannot fail. Unknown template names render as `default`, and
//! records with missing or mistyped fields fall back to `"unknown"` and `0`.

pub mod dump;
pub mod element;
pub mod naming;
pub mod tasks;
pub mod templates;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;
use xmlpack_types::{AnalysisRecord, FieldValue, Options, TemplateVariant};

pub use dump::{MAX_SEQUENCE_ITEMS, field_dump};
pub use element::XmlElement;
pub use naming::element_name;
pub use tasks::{build_tasks, estimate_effort};
pub use templates::list_templates;

/// Render `record` with the named template, stamped with the current time.
///
/// `options` is accepted for callers that thread per-request settings through;
/// no template reads it yet.
pub fn render(
    record: &AnalysisRecord,
    output_id: &str,
    template: &str,
    options: &Options,
) -> String {
    render_fields(&FieldValue::from(record), output_id, template, options)
}

/// [`render`] with an explicit `generated` timestamp.
pub fn render_at(
    record: &AnalysisRecord,
    output_id: &str,
    template: &str,
    options: &Options,
    generated: &str,
) -> String {
    render_fields_at(
        &FieldValue::from(record),
        output_id,
        template,
        options,
        generated,
    )
}

/// Render a loosely-typed record, such as one read back from storage as JSON.
pub fn render_fields(
    record: &FieldValue,
    output_id: &str,
    template: &str,
    options: &Options,
) -> String {
    render_fields_at(record, output_id, template, options, &now_rfc3339())
}

pub fn render_fields_at(
    record: &FieldValue,
    output_id: &str,
    template: &str,
    options: &Options,
    generated: &str,
) -> String {
    let variant = TemplateVariant::from_name(template);
    if variant.as_str() != template {
        debug!(requested = template, "unknown template, using default");
    }
    debug!(
        template = %variant,
        output_id,
        options = options.len(),
        "rendering record"
    );
    templates::build(variant, record, output_id, generated).to_document()
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}
