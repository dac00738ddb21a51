use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("no such file or directory")
        || haystack.contains("cannot find the file")
    {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(
            &mut out,
            "Omit the path (or pass `-`) to read content from stdin.",
        );
    }

    if haystack.contains("invalid analysis record") {
        push_hint(
            &mut out,
            "`xmlpack render` expects the JSON object written by `xmlpack analyze`.",
        );
        push_hint(
            &mut out,
            "Use `xmlpack process` to analyze and render raw content in one step.",
        );
    }

    if haystack.contains("invalid config file") {
        push_hint(
            &mut out,
            "Check the config file JSON, e.g. {\"profiles\": {\"default\": {\"template\": \"task_packet\"}}}.",
        );
        push_hint(
            &mut out,
            "Set `XMLPACK_CONFIG` to point at a different config file.",
        );
    }

    if haystack.contains("stream did not contain valid utf-8") {
        push_hint(&mut out, "Input must be UTF-8 encoded text.");
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
