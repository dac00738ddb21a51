//! Fuzz target for the XML shape probe.
//!
//! A valid result always names its root and counts it; an invalid one
//! always carries an error message.

#![no_main]

use libfuzzer_sys::fuzz_target;
use xmlpack_analysis::xml::xml_structure;

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    let shape = xml_structure(content);
    if shape.valid {
        assert!(shape.root_tag.is_some());
        let elements = shape.elements.unwrap_or(0);
        let depth = shape.depth.unwrap_or(0);
        assert!(elements >= 1);
        assert!(depth < elements);
        assert!(shape.error.is_none());
    } else {
        assert!(shape.error.is_some());
        assert!(shape.root_tag.is_none());
    }
});
