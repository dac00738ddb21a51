//! The template catalog and one builder per variant.

use xmlpack_types::{FieldValue, TemplateInfo, TemplateVariant};

use crate::dump::field_dump;
use crate::element::XmlElement;
use crate::tasks::{build_tasks, estimate_effort};

pub fn list_templates() -> Vec<TemplateInfo> {
    TemplateVariant::ALL
        .iter()
        .map(|variant| {
            let (schema_file, description) = match variant {
                TemplateVariant::Default => (
                    "template-schema.xml",
                    "Generic XML output with analysis results",
                ),
                TemplateVariant::TaskPacket => (
                    "taskpacket-schema.xml",
                    "Structured task breakdown with effort estimates",
                ),
                TemplateVariant::AnalysisReport => (
                    "analysis-schema.xml",
                    "Detailed analysis report with summary",
                ),
            };
            TemplateInfo {
                name: variant.as_str().to_string(),
                schema_file: schema_file.to_string(),
                description: description.to_string(),
            }
        })
        .collect()
}

/// Summary values read off a loosely-typed record, with defaults for
/// anything missing or mistyped.
pub(crate) struct RecordView<'a> {
    record: &'a FieldValue,
}

impl<'a> RecordView<'a> {
    pub(crate) fn new(record: &'a FieldValue) -> Self {
        Self { record }
    }

    fn input_type(&self) -> String {
        match self.record.get("input_type") {
            Some(FieldValue::Scalar(scalar)) => scalar.to_string(),
            _ => "unknown".to_string(),
        }
    }

    fn count(&self, key: &str) -> u64 {
        self.record
            .get(key)
            .and_then(FieldValue::as_u64)
            .unwrap_or(0)
    }

    fn structure(&self, key: &str) -> &'a [FieldValue] {
        self.record
            .get("structure")
            .and_then(|structure| structure.get(key))
            .and_then(FieldValue::as_sequence)
            .unwrap_or(&[])
    }

    fn sections(&self) -> Vec<String> {
        self.structure("sections")
            .iter()
            .map(FieldValue::to_text)
            .collect()
    }
}

pub(crate) fn build(
    variant: TemplateVariant,
    record: &FieldValue,
    output_id: &str,
    generated: &str,
) -> XmlElement {
    let view = RecordView::new(record);
    let root = match variant {
        TemplateVariant::Default => XmlElement::new("Output"),
        TemplateVariant::TaskPacket => XmlElement::new("TaskPacket"),
        TemplateVariant::AnalysisReport => XmlElement::new("AnalysisReport"),
    }
    .attr("id", output_id)
    .attr("generated", generated)
    .attr("template", variant.as_str());

    match variant {
        TemplateVariant::Default => default_output(root, &view),
        TemplateVariant::TaskPacket => task_packet(root, &view),
        TemplateVariant::AnalysisReport => analysis_report(root, &view),
    }
}

fn default_output(root: XmlElement, view: &RecordView<'_>) -> XmlElement {
    let metadata = XmlElement::new("Metadata")
        .child(XmlElement::leaf("InputType", view.input_type()))
        .child(XmlElement::leaf("WordCount", view.count("word_count").to_string()))
        .child(XmlElement::leaf(
            "ComplexityScore",
            view.count("complexity_score").to_string(),
        ));

    let mut analysis = XmlElement::new("Analysis");
    field_dump(view.record, &mut analysis);

    root.child(metadata).child(analysis)
}

fn task_packet(root: XmlElement, view: &RecordView<'_>) -> XmlElement {
    let score = view.count("complexity_score");
    let metadata = XmlElement::new("Metadata")
        .child(XmlElement::leaf("ComplexityScore", score.to_string()))
        .child(XmlElement::leaf("EstimatedEffort", estimate_effort(score)));

    let tasks = build_tasks(&view.sections(), score)
        .into_iter()
        .enumerate()
        .fold(XmlElement::new("Tasks"), |tasks, (index, task)| {
            tasks.child(
                XmlElement::new("Task")
                    .attr("id", format!("task_{}", index + 1))
                    .child(XmlElement::leaf("Title", task.title))
                    .child(XmlElement::leaf("Priority", task.priority.as_str()))
                    .child(XmlElement::leaf(
                        "EstimatedHours",
                        task.estimated_hours.to_string(),
                    )),
            )
        });

    root.child(metadata).child(tasks)
}

fn analysis_report(root: XmlElement, view: &RecordView<'_>) -> XmlElement {
    let summary = XmlElement::new("Summary")
        .child(XmlElement::leaf("WordCount", view.count("word_count").to_string()))
        .child(XmlElement::leaf("InputType", view.input_type()))
        .child(XmlElement::leaf(
            "ComplexityScore",
            view.count("complexity_score").to_string(),
        ))
        .child(XmlElement::leaf(
            "SectionCount",
            view.structure("sections").len().to_string(),
        ))
        .child(XmlElement::leaf(
            "ListCount",
            view.structure("lists").len().to_string(),
        ));

    let mut detailed = XmlElement::new("DetailedAnalysis");
    field_dump(view.record, &mut detailed);

    root.child(summary).child(detailed)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn catalog_lists_every_variant_once() {
        let names: Vec<String> = list_templates().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["default", "task_packet", "analysis_report"]);
    }

    #[test]
    fn view_defaults_missing_fields() {
        let record = FieldValue::from_json(&json!({}));
        let view = RecordView::new(&record);
        assert_eq!(view.input_type(), "unknown");
        assert_eq!(view.count("word_count"), 0);
        assert!(view.sections().is_empty());
    }

    #[test]
    fn view_tolerates_mistyped_fields() {
        let record = FieldValue::from_json(&json!({
            "word_count": "12",
            "complexity_score": -4,
            "structure": {"sections": "not a list"}
        }));
        let view = RecordView::new(&record);
        assert_eq!(view.count("word_count"), 12);
        assert_eq!(view.count("complexity_score"), 0);
        assert!(view.sections().is_empty());
    }
}
