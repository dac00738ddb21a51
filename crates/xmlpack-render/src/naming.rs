/// Element name for a record key.
///
/// Every run of ASCII letters is title-cased and underscores and spaces are
/// dropped, so `word_count` becomes `WordCount` and `h1` becomes `H1`.
/// Characters that cannot appear in an XML name are removed, and a name that
/// would not start with an ASCII letter gets a `Field` prefix.
pub fn element_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    let mut in_word = false;
    for c in key.chars() {
        if c.is_ascii_alphabetic() {
            name.push(if in_word {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            });
            in_word = true;
            continue;
        }
        if is_wide_name_char(c) {
            // Kept as written; letters continue the current word.
            name.push(c);
            in_word = c.is_alphabetic();
            continue;
        }
        in_word = false;
        if c.is_ascii_digit() || c == '-' || c == '.' {
            name.push(c);
        }
    }

    match name.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => name,
        _ => format!("Field{name}"),
    }
}

/// Non-ASCII characters permitted inside an XML 1.0 name.
fn is_wide_name_char(c: char) -> bool {
    matches!(c,
        '\u{B7}'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{203F}'..='\u{2040}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}
