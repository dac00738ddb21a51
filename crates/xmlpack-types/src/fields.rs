//! Loosely-typed view of a record used by the generic field dump.
//!
//! A record (typed or decoded from arbitrary JSON) is lowered into a small
//! closed tree of scalars, ordered mappings and sequences.

use std::fmt;

use serde_json::{Number, Value};

use crate::{
    AnalysisRecord, BasicStats, JsonStructure, MarkdownFeatures, Structure, XmlStructure,
};

/// Ordered key/value pairs; keys may repeat when built from foreign input.
pub type Fields = Vec<(String, FieldValue)>;

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Null => f.write_str("null"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(Scalar),
    Mapping(Fields),
    Sequence(Vec<FieldValue>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Scalar(Scalar::Text(value.into()))
    }

    pub fn number(value: impl Into<Number>) -> Self {
        FieldValue::Scalar(Scalar::Number(value.into()))
    }

    pub fn boolean(value: bool) -> Self {
        FieldValue::Scalar(Scalar::Bool(value))
    }

    pub fn strings(items: &[String]) -> Self {
        FieldValue::Sequence(items.iter().map(FieldValue::text).collect())
    }

    /// Lower a JSON value, keeping object key order.
    ///
    /// Recursion is bounded by the parser's nesting limit on the way in.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Scalar(Scalar::Null),
            Value::Bool(b) => FieldValue::boolean(*b),
            Value::Number(n) => FieldValue::Scalar(Scalar::Number(n.clone())),
            Value::String(s) => FieldValue::text(s.as_str()),
            Value::Array(items) => {
                FieldValue::Sequence(items.iter().map(FieldValue::from_json).collect())
            }
            Value::Object(map) => FieldValue::Mapping(
                map.iter()
                    .map(|(k, v)| (k.clone(), FieldValue::from_json(v)))
                    .collect(),
            ),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Scalar(Scalar::Text(s)) => Value::String(s.clone()),
            FieldValue::Scalar(Scalar::Number(n)) => Value::Number(n.clone()),
            FieldValue::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
            FieldValue::Scalar(Scalar::Null) => Value::Null,
            FieldValue::Sequence(items) => {
                Value::Array(items.iter().map(FieldValue::to_json).collect())
            }
            FieldValue::Mapping(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }

    /// Text content used when a value lands inside a single XML element:
    /// scalars verbatim, containers as compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Scalar(scalar) => scalar.to_string(),
            other => other.to_json().to_string(),
        }
    }

    /// First value stored under `key` when this is a mapping.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        match self {
            FieldValue::Mapping(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Non-negative integer view; numeric text is accepted too.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::Scalar(Scalar::Number(n)) => n.as_u64(),
            FieldValue::Scalar(Scalar::Text(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<&BasicStats> for FieldValue {
    fn from(stats: &BasicStats) -> Self {
        FieldValue::Mapping(vec![
            ("line_count".into(), FieldValue::number(stats.line_count)),
            (
                "character_count".into(),
                FieldValue::number(stats.character_count),
            ),
            (
                "character_count_no_spaces".into(),
                FieldValue::number(stats.character_count_no_spaces),
            ),
            ("word_count".into(), FieldValue::number(stats.word_count)),
            (
                "paragraph_count".into(),
                FieldValue::number(stats.paragraph_count),
            ),
            (
                "sentence_count".into(),
                FieldValue::number(stats.sentence_count),
            ),
        ])
    }
}

impl From<&Structure> for FieldValue {
    fn from(structure: &Structure) -> Self {
        FieldValue::Mapping(vec![
            ("sections".into(), FieldValue::strings(&structure.sections)),
            ("lists".into(), FieldValue::strings(&structure.lists)),
            (
                "code_blocks".into(),
                FieldValue::strings(&structure.code_blocks),
            ),
            ("links".into(), FieldValue::strings(&structure.links)),
        ])
    }
}

impl From<&MarkdownFeatures> for FieldValue {
    fn from(md: &MarkdownFeatures) -> Self {
        let headers = FieldValue::Mapping(vec![
            ("h1".into(), FieldValue::number(md.headers.h1)),
            ("h2".into(), FieldValue::number(md.headers.h2)),
            ("h3".into(), FieldValue::number(md.headers.h3)),
            ("total".into(), FieldValue::number(md.headers.total)),
        ]);
        let formatting = FieldValue::Mapping(vec![
            ("bold".into(), FieldValue::number(md.formatting.bold)),
            ("italic".into(), FieldValue::number(md.formatting.italic)),
            (
                "code_inline".into(),
                FieldValue::number(md.formatting.code_inline),
            ),
            (
                "code_blocks".into(),
                FieldValue::number(md.formatting.code_blocks),
            ),
        ]);
        FieldValue::Mapping(vec![
            ("headers".into(), headers),
            ("formatting".into(), formatting),
            ("links".into(), FieldValue::number(md.links)),
            ("images".into(), FieldValue::number(md.images)),
            ("tables".into(), FieldValue::boolean(md.tables)),
        ])
    }
}

impl From<&JsonStructure> for FieldValue {
    fn from(js: &JsonStructure) -> Self {
        let mut fields: Fields = vec![("valid".into(), FieldValue::boolean(js.valid))];
        if let Some(value_type) = &js.value_type {
            fields.push(("type".into(), FieldValue::text(value_type.as_str())));
        }
        if let Some(keys) = &js.keys {
            fields.push(("keys".into(), FieldValue::strings(keys)));
        }
        if let Some(length) = js.length {
            fields.push(("length".into(), FieldValue::number(length)));
        }
        if let Some(depth) = js.depth {
            fields.push(("depth".into(), FieldValue::number(depth)));
        }
        if let Some(has_arrays) = js.has_arrays {
            fields.push(("has_arrays".into(), FieldValue::boolean(has_arrays)));
        }
        if let Some(has_objects) = js.has_objects {
            fields.push(("has_objects".into(), FieldValue::boolean(has_objects)));
        }
        if let Some(error) = &js.error {
            fields.push(("error".into(), FieldValue::text(error.as_str())));
        }
        FieldValue::Mapping(fields)
    }
}

impl From<&XmlStructure> for FieldValue {
    fn from(xs: &XmlStructure) -> Self {
        let mut fields: Fields = vec![("valid".into(), FieldValue::boolean(xs.valid))];
        if let Some(root_tag) = &xs.root_tag {
            fields.push(("root_tag".into(), FieldValue::text(root_tag.as_str())));
        }
        if let Some(elements) = xs.elements {
            fields.push(("elements".into(), FieldValue::number(elements)));
        }
        if let Some(attributes) = xs.attributes {
            fields.push(("attributes".into(), FieldValue::number(attributes)));
        }
        if let Some(depth) = xs.depth {
            fields.push(("depth".into(), FieldValue::number(depth)));
        }
        if let Some(namespaces) = &xs.namespaces {
            fields.push(("namespaces".into(), FieldValue::strings(namespaces)));
        }
        if let Some(error) = &xs.error {
            fields.push(("error".into(), FieldValue::text(error.as_str())));
        }
        FieldValue::Mapping(fields)
    }
}

impl From<&AnalysisRecord> for FieldValue {
    fn from(record: &AnalysisRecord) -> Self {
        let metadata = record
            .metadata
            .iter()
            .map(|(k, v)| (k.clone(), FieldValue::text(v.as_str())))
            .collect();
        let options = record
            .processing_options
            .iter()
            .map(|(k, v)| (k.clone(), FieldValue::from_json(v)))
            .collect();

        let mut fields: Fields = vec![
            ("timestamp".into(), FieldValue::text(record.timestamp.as_str())),
            (
                "input_type".into(),
                FieldValue::text(record.input_type.as_str()),
            ),
            (
                "content_length".into(),
                FieldValue::number(record.content_length),
            ),
            ("word_count".into(), FieldValue::number(record.word_count)),
            ("basic_stats".into(), (&record.basic_stats).into()),
            ("structure".into(), (&record.structure).into()),
            ("metadata".into(), FieldValue::Mapping(metadata)),
            (
                "complexity_score".into(),
                FieldValue::number(record.complexity_score),
            ),
            ("processing_options".into(), FieldValue::Mapping(options)),
        ];
        if let Some(md) = &record.markdown_features {
            fields.push(("markdown_features".into(), md.into()));
        }
        if let Some(js) = &record.json_structure {
            fields.push(("json_structure".into(), js.into()));
        }
        if let Some(xs) = &record.xml_structure {
            fields.push(("xml_structure".into(), xs.into()));
        }
        FieldValue::Mapping(fields)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn from_json_keeps_object_order() {
        let value = FieldValue::from_json(&json!({"zeta": 1, "alpha": [true, null]}));
        let FieldValue::Mapping(fields) = value else {
            panic!("expected mapping");
        };
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn containers_stringify_as_compact_json() {
        let value = FieldValue::strings(&["# A".to_string(), "# B".to_string()]);
        assert_eq!(value.to_text(), r##"["# A","# B"]"##);
        assert_eq!(FieldValue::boolean(false).to_text(), "false");
        assert_eq!(FieldValue::number(7u32).to_text(), "7");
    }

    #[test]
    fn record_lowering_follows_field_order() {
        let record = AnalysisRecord {
            markdown_features: Some(MarkdownFeatures::default()),
            ..AnalysisRecord::default()
        };
        let FieldValue::Mapping(fields) = FieldValue::from(&record) else {
            panic!("expected mapping");
        };
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "timestamp",
                "input_type",
                "content_length",
                "word_count",
                "basic_stats",
                "structure",
                "metadata",
                "complexity_score",
                "processing_options",
                "markdown_features",
            ]
        );
    }

    #[test]
    fn as_u64_accepts_numeric_text() {
        assert_eq!(FieldValue::text(" 12 ").as_u64(), Some(12));
        assert_eq!(FieldValue::text("many").as_u64(), None);
        assert_eq!(FieldValue::number(-3i64).as_u64(), None);
    }
}
