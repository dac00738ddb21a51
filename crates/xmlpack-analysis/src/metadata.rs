use xmlpack_types::Metadata;

/// Only the head of the document is scanned for `key: value` lines.
pub const METADATA_SCAN_LINES: usize = 20;
const MAX_KEY_CHARS: usize = 50;
const MAX_VALUE_CHARS: usize = 200;

pub fn extract_metadata(content: &str) -> Metadata {
    let mut metadata = Metadata::new();
    for line in content.split('\n').take(METADATA_SCAN_LINES) {
        if line.trim().starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        if key.chars().count() >= MAX_KEY_CHARS {
            continue;
        }
        let value = value.trim();
        if value.is_empty() || value.chars().count() >= MAX_VALUE_CHARS {
            continue;
        }
        let key = key.trim().to_lowercase().replace(' ', "_");
        metadata.insert(key, value.to_string());
    }
    metadata
}
