//! Generic field dump: a record mapping laid out as nested elements.

use xmlpack_types::FieldValue;

use crate::element::XmlElement;
use crate::naming::element_name;

/// Fields that never appear in the dump.
pub const SKIPPED_FIELDS: [&str; 2] = ["timestamp", "processing_options"];

/// Sequences are cut to this many `Item` children.
pub const MAX_SEQUENCE_ITEMS: usize = 10;

/// Append one child per record field to `parent`.
///
/// Mappings get one level of children holding stringified values, sequences
/// become `Item` children, and scalars become text. A record that is not a
/// mapping contributes nothing.
pub fn field_dump(record: &FieldValue, parent: &mut XmlElement) {
    let FieldValue::Mapping(fields) = record else {
        return;
    };
    for (key, value) in fields {
        if SKIPPED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        parent.push(field_element(key, value));
    }
}

fn field_element(key: &str, value: &FieldValue) -> XmlElement {
    let name = element_name(key);
    match value {
        FieldValue::Mapping(entries) => {
            entries
                .iter()
                .fold(XmlElement::new(name), |element, (sub_key, sub_value)| {
                    element.child(XmlElement::leaf(element_name(sub_key), sub_value.to_text()))
                })
        }
        FieldValue::Sequence(items) => items
            .iter()
            .take(MAX_SEQUENCE_ITEMS)
            .fold(XmlElement::new(name), |element, item| {
                element.child(XmlElement::leaf("Item", item.to_text()))
            }),
        FieldValue::Scalar(scalar) => XmlElement::leaf(name, scalar.to_string()),
    }
}
