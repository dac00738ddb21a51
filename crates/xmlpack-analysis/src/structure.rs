//! Line classification into sections, lists, code blocks and links.

use xmlpack_types::Structure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Section,
    List,
    CodeBlock,
    Link,
}

/// Classify one raw line. Buckets are tested in order and the first match
/// wins, so a line lands in at most one of them.
pub fn classify_line(raw: &str) -> Option<LineKind> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }
    if line.starts_with('#') {
        Some(LineKind::Section)
    } else if is_list_item(line) {
        Some(LineKind::List)
    } else if line.starts_with("```") || raw.starts_with("    ") {
        Some(LineKind::CodeBlock)
    } else if line.contains('[') && line.contains("](") {
        Some(LineKind::Link)
    } else {
        None
    }
}

pub fn analyze_structure(content: &str) -> Structure {
    let mut structure = Structure::default();
    for raw in content.split('\n') {
        let bucket = match classify_line(raw) {
            Some(LineKind::Section) => &mut structure.sections,
            Some(LineKind::List) => &mut structure.lists,
            Some(LineKind::CodeBlock) => &mut structure.code_blocks,
            Some(LineKind::Link) => &mut structure.links,
            None => continue,
        };
        bucket.push(raw.trim().to_string());
    }
    structure
}

fn is_list_item(line: &str) -> bool {
    let mut chars = line.chars();
    match chars.next() {
        Some('-' | '*' | '+') => true,
        Some(c) if c.is_ascii_digit() => chars.next() == Some('.'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_win_over_links() {
        assert_eq!(classify_line("# [Title](url)"), Some(LineKind::Section));
    }

    #[test]
    fn list_markers() {
        assert_eq!(classify_line("- item"), Some(LineKind::List));
        assert_eq!(classify_line("  * item"), Some(LineKind::List));
        assert_eq!(classify_line("+ item"), Some(LineKind::List));
        assert_eq!(classify_line("7. step"), Some(LineKind::List));
        assert_eq!(classify_line("10. step"), None);
        assert_eq!(classify_line("3x"), None);
    }

    #[test]
    fn indented_lines_are_code_unless_they_look_like_lists() {
        assert_eq!(classify_line("    let x = 1;"), Some(LineKind::CodeBlock));
        assert_eq!(classify_line("    - nested"), Some(LineKind::List));
        assert_eq!(classify_line("```rust"), Some(LineKind::CodeBlock));
    }

    #[test]
    fn links_need_both_markers() {
        assert_eq!(classify_line("see [docs](http://x)"), Some(LineKind::Link));
        assert_eq!(classify_line("see [docs] later"), None);
    }

    #[test]
    fn stored_lines_are_trimmed_and_ordered() {
        let structure = analyze_structure("  # One\ntext\n- a\n# Two\n   \n- b");
        assert_eq!(structure.sections, ["# One", "# Two"]);
        assert_eq!(structure.lists, ["- a", "- b"]);
        assert!(structure.code_blocks.is_empty());
    }
}
