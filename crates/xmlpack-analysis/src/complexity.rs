//! Bounded complexity heuristic over length, structure and keyword density.

use crate::count_occurrences;

pub const MAX_COMPLEXITY: u32 = 20;

/// Weighted lexicon; each case-insensitive substring hit adds its weight.
pub const KEYWORD_WEIGHTS: [(&str, u32); 14] = [
    ("complex", 1),
    ("integrate", 1),
    ("system", 1),
    ("process", 1),
    ("workflow", 2),
    ("automation", 2),
    ("api", 2),
    ("database", 2),
    ("security", 2),
    ("performance", 2),
    ("scalability", 3),
    ("architecture", 2),
    ("framework", 1),
    ("algorithm", 2),
];

const MAX_SECTION_POINTS: usize = 5;
const MAX_LIST_POINTS: usize = 3;
const LIST_LINES_PER_POINT: usize = 3;

pub fn complexity_score(content: &str, word_count: usize) -> u32 {
    let mut score = length_points(word_count) as u64;

    let mut sections = 0usize;
    let mut list_lines = 0usize;
    for line in content.split('\n') {
        let line = line.trim();
        if line.starts_with('#') {
            sections += 1;
        } else if line.starts_with(['-', '*', '+']) {
            list_lines += 1;
        }
    }
    score += sections.min(MAX_SECTION_POINTS) as u64;
    score += (list_lines / LIST_LINES_PER_POINT).min(MAX_LIST_POINTS) as u64;

    let lower = content.to_lowercase();
    for (keyword, weight) in KEYWORD_WEIGHTS {
        let hits = count_occurrences(&lower, keyword) as u64;
        score = score.saturating_add(hits.saturating_mul(weight as u64));
    }

    score.min(MAX_COMPLEXITY as u64) as u32
}

fn length_points(word_count: usize) -> u32 {
    match word_count {
        n if n > 1000 => 3,
        n if n > 500 => 2,
        n if n > 200 => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_tiers() {
        assert_eq!(length_points(200), 0);
        assert_eq!(length_points(201), 1);
        assert_eq!(length_points(501), 2);
        assert_eq!(length_points(1001), 3);
    }

    #[test]
    fn sections_cap_at_five() {
        let content = "# a\n".repeat(9);
        assert_eq!(complexity_score(&content, 18), 5);
    }

    #[test]
    fn every_three_list_lines_add_a_point() {
        assert_eq!(complexity_score("- a\n- b", 4), 0);
        assert_eq!(complexity_score("- a\n* b\n+ c", 6), 1);
        assert_eq!(complexity_score(&"- x\n".repeat(30), 60), 3);
    }

    #[test]
    fn numbered_items_do_not_count_as_list_lines() {
        assert_eq!(complexity_score("1. a\n2. b\n3. c", 6), 0);
    }

    #[test]
    fn keywords_are_weighted_and_case_insensitive() {
        assert_eq!(complexity_score("Scalability", 1), 3);
        assert_eq!(complexity_score("API api Api", 3), 6);
        // "processing" still contains "process".
        assert_eq!(complexity_score("processing", 1), 1);
    }

    #[test]
    fn score_is_clamped() {
        let content = "architecture ".repeat(50);
        assert_eq!(complexity_score(&content, 50), MAX_COMPLEXITY);
    }
}
