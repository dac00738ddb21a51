//! Fuzz target for the content analyzer.
//!
//! Validates:
//! - No panics on arbitrary UTF-8 content, under every input type
//! - The complexity score stays within its bound
//! - Exactly the section matching the input type is populated

#![no_main]

use libfuzzer_sys::fuzz_target;
use xmlpack_analysis::{MAX_COMPLEXITY, analyze};
use xmlpack_types::{InputType, Options};

const MAX_INPUT_SIZE: usize = 64 * 1024;
const TYPES: [InputType; 4] = [
    InputType::Text,
    InputType::Markdown,
    InputType::Json,
    InputType::Xml,
];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    if rest.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(content) = std::str::from_utf8(rest) else {
        return;
    };

    let input_type = TYPES[selector as usize % TYPES.len()];
    let record = analyze(content, input_type, &Options::new());

    assert!(record.complexity_score <= MAX_COMPLEXITY);
    assert_eq!(record.word_count, record.basic_stats.word_count);
    assert_eq!(record.content_length, content.chars().count());
    assert_eq!(record.markdown_features.is_some(), input_type == InputType::Markdown);
    assert_eq!(record.json_structure.is_some(), input_type == InputType::Json);
    assert_eq!(record.xml_structure.is_some(), input_type == InputType::Xml);
    assert!(record.metadata.len() <= 20);
});
