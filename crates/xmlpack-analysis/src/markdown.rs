//! Marker-counting Markdown probe.
//!
//! Counts are raw substring occurrences, not a parse. Header levels only match
//! after a line break, so a header on the very first line is not counted in
//! `h1`/`h2`/`h3` (it still counts toward `total`).

use xmlpack_types::{FormattingCounts, HeaderCounts, MarkdownFeatures};

use crate::count_occurrences;

pub fn markdown_features(content: &str) -> MarkdownFeatures {
    let headers = HeaderCounts {
        h1: count_occurrences(content, "\n# "),
        h2: count_occurrences(content, "\n## "),
        h3: count_occurrences(content, "\n### "),
        total: content.split('\n').filter(|l| l.starts_with('#')).count(),
    };

    let bold = count_occurrences(content, "**");
    let stars = count_occurrences(content, "*");
    let fences = count_occurrences(content, "```");
    let ticks = count_occurrences(content, "`");
    let formatting = FormattingCounts {
        bold,
        italic: stars as i64 - 2 * bold as i64,
        code_inline: ticks as i64 - 3 * fences as i64,
        code_blocks: fences / 2,
    };

    MarkdownFeatures {
        headers,
        formatting,
        links: count_occurrences(content, "]("),
        images: count_occurrences(content, "!["),
        tables: count_occurrences(content, "|") > 2,
    }
}
