use xmlpack_types::BasicStats;

pub fn basic_stats(content: &str) -> BasicStats {
    BasicStats {
        line_count: content.split('\n').count(),
        character_count: content.chars().count(),
        character_count_no_spaces: content.chars().filter(|c| *c != ' ').count(),
        word_count: content.split_whitespace().count(),
        paragraph_count: content
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .count(),
        sentence_count: content
            .chars()
            .filter(|c| matches!(c, '.' | '!' | '?'))
            .count(),
    }
}
