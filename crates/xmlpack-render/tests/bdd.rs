use serde_json::json;
use xmlpack_analysis::analyze;
use xmlpack_render::{render_at, render_fields_at};
use xmlpack_types::{AnalysisRecord, FieldValue, InputType, Options};

const GENERATED: &str = "2026-05-04T03:02:01Z";

fn analyzed(content: &str, input_type: InputType) -> AnalysisRecord {
    analyze(content, input_type, &Options::new())
}

// ── Given an analyzed markdown document ─────────────────────────────

#[test]
fn given_markdown_record_when_rendered_as_report_then_summary_matches_record() {
    let record = analyzed("# Plan\n## Scope\n- one\n- two\n", InputType::Markdown);
    let xml = render_at(&record, "r-1", "analysis_report", &Options::new(), GENERATED);
    assert!(xml.starts_with("<AnalysisReport "));
    assert!(xml.contains("<SectionCount>2</SectionCount>"));
    assert!(xml.contains("<ListCount>2</ListCount>"));
    assert!(xml.contains("<MarkdownFeatures>"));
}

#[test]
fn given_many_sections_when_rendered_as_task_packet_then_eight_tasks_at_most() {
    let content: String = (1..=9).map(|i| format!("# Part {i}\n")).collect();
    let record = analyzed(&content, InputType::Markdown);
    let xml = render_at(&record, "p", "task_packet", &Options::new(), GENERATED);
    assert_eq!(xml.matches("<Task id=").count(), 8);
    assert!(xml.contains("<Title>Process: # Part 5</Title>"));
    assert!(!xml.contains("# Part 6"));
}

// ── Given invalid structured input ──────────────────────────────────

#[test]
fn given_invalid_json_record_when_rendered_then_error_appears_in_dump() {
    let record = analyzed("{not valid", InputType::Json);
    let xml = render_at(&record, "j", "default", &Options::new(), GENERATED);
    assert!(xml.contains("<JsonStructure>"));
    assert!(xml.contains("<Valid>false</Valid>"));
    assert!(xml.contains("<Error>"));
}

// ── Given an unknown template name ──────────────────────────────────

#[test]
fn given_unknown_template_when_rendered_then_default_shape_is_used() {
    let record = analyzed("plain words", InputType::Text);
    let xml = render_at(&record, "u", "bogus", &Options::new(), GENERATED);
    assert!(xml.starts_with("<Output id=\"u\" generated=\"2026-05-04T03:02:01Z\" template=\"default\">"));
}

// ── Given a stored record with gaps ─────────────────────────────────

#[test]
fn given_record_without_input_type_when_rendered_then_unknown_is_shown() {
    let record = FieldValue::from_json(&json!({"word_count": 5, "complexity_score": 17}));
    let xml = render_fields_at(&record, "s", "task_packet", &Options::new(), GENERATED);
    assert!(xml.contains("<ComplexityScore>17</ComplexityScore>"));
    assert!(xml.contains("<EstimatedEffort>Very High (2+ weeks)</EstimatedEffort>"));
    assert_eq!(xml.matches("<Task id=").count(), 3);
}

#[test]
fn given_long_sequence_when_dumped_then_only_ten_items_appear() {
    let record = FieldValue::from_json(&json!({"tags": (0..25).collect::<Vec<u32>>()}));
    let xml = render_fields_at(&record, "s", "default", &Options::new(), GENERATED);
    assert_eq!(xml.matches("<Item>").count(), 10);
}
