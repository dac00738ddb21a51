//! Fuzz target for template rendering.
//!
//! Arbitrary JSON is treated as an analysis record and rendered with every
//! template. Validates:
//! - No panics on missing, mistyped or foreign fields
//! - Output is a single well-formed document
//! - Rendering is deterministic for a fixed timestamp

#![no_main]

use libfuzzer_sys::fuzz_target;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde_json::Value;
use xmlpack_render::render_fields_at;
use xmlpack_types::{FieldValue, Options};

const MAX_INPUT_SIZE: usize = 32 * 1024;
const GENERATED: &str = "2026-01-01T00:00:00Z";
const TEMPLATES: [&str; 4] = ["default", "task_packet", "analysis_report", "unknown"];

fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;
    let mut open = 0usize;
    let mut roots = 0usize;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => {
                if open == 0 {
                    roots += 1;
                }
                open += 1;
            }
            Ok(Event::Empty(_)) if open == 0 => roots += 1,
            Ok(Event::End(_)) => open -= 1,
            Ok(Event::Text(text)) => {
                assert!(text.unescape().is_ok(), "bad text in {xml}");
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => panic!("rendered XML does not parse: {err}\n{xml}"),
        }
    }
    assert_eq!(open, 0);
    assert_eq!(roots, 1);
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(value) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    let record = FieldValue::from_json(&value);
    let output_id = value
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("fuzz");
    for template in TEMPLATES {
        let xml = render_fields_at(&record, output_id, template, &Options::new(), GENERATED);
        assert_well_formed(&xml);
        let again = render_fields_at(&record, output_id, template, &Options::new(), GENERATED);
        assert_eq!(xml, again);
    }
});
