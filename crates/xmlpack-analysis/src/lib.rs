//! # xmlpack-analysis
//!
//! **Tier 1 (Content Analyzer)**
//!
//! Turns raw text plus a declared input type into an [`AnalysisRecord`].
//! Every pass is a pure function over the content; nothing is cached and no
//! state survives an invocation.
//!
//! Malformed JSON or XML never fails the analysis. The failure is recorded in
//! the type-specific section with `valid = false` and the parser's message.

pub mod complexity;
pub mod json;
pub mod markdown;
pub mod metadata;
pub mod stats;
pub mod structure;
pub mod xml;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;
use xmlpack_types::{AnalysisRecord, InputType, Options};

pub use complexity::{KEYWORD_WEIGHTS, MAX_COMPLEXITY, complexity_score};
pub use structure::{LineKind, classify_line};

/// Analyze `content` declared as `input_type`.
///
/// `options` is copied onto the record unchanged.
pub fn analyze(content: &str, input_type: InputType, options: &Options) -> AnalysisRecord {
    debug!(
        input_type = %input_type,
        bytes = content.len(),
        "analyzing content"
    );

    let basic_stats = stats::basic_stats(content);
    let record = AnalysisRecord {
        timestamp: now_rfc3339(),
        input_type,
        content_length: basic_stats.character_count,
        word_count: basic_stats.word_count,
        structure: structure::analyze_structure(content),
        metadata: metadata::extract_metadata(content),
        complexity_score: complexity_score(content, basic_stats.word_count),
        processing_options: options.clone(),
        markdown_features: (input_type == InputType::Markdown)
            .then(|| markdown::markdown_features(content)),
        json_structure: (input_type == InputType::Json).then(|| json::json_structure(content)),
        xml_structure: (input_type == InputType::Xml).then(|| xml::xml_structure(content)),
        basic_stats,
    };

    debug!(
        words = record.word_count,
        complexity = record.complexity_score,
        "analysis complete"
    );
    record
}

/// Non-overlapping, left-to-right occurrence count of `needle`.
pub(crate) fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}
