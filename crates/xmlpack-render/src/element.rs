//! Minimal element tree and pretty writer.

use quick_xml::escape::{escape, partial_escape};

const INDENT: &str = "  ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Text-only element.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Serialize as a standalone document: two-space indentation, one element
    /// per line, trailing newline, no declaration.
    pub fn to_document(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out, 0);
        out
    }

    fn write_into(&self, out: &mut String, level: usize) {
        let pad = INDENT.repeat(level);
        out.push_str(&pad);
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }

        if self.children.is_empty() {
            if self.text.is_empty() {
                out.push_str("/>\n");
            } else {
                out.push('>');
                out.push_str(&escape_text(&self.text));
                out.push_str(&format!("</{}>\n", self.name));
            }
            return;
        }

        out.push_str(">\n");
        if !self.text.is_empty() {
            out.push_str(&INDENT.repeat(level + 1));
            out.push_str(&escape_text(&self.text));
            out.push('\n');
        }
        for child in &self.children {
            child.write_into(out, level + 1);
        }
        out.push_str(&pad);
        out.push_str(&format!("</{}>\n", self.name));
    }
}

/// Escape markup and drop characters XML 1.0 cannot carry at all.
fn escape_text(raw: &str) -> String {
    let allowed: String = raw.chars().filter(|c| is_xml_char(*c)).collect();
    partial_escape(allowed.as_str()).into_owned()
}

fn escape_attr(raw: &str) -> String {
    let allowed: String = raw.chars().filter(|c| is_xml_char(*c)).collect();
    escape(allowed.as_str()).into_owned()
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || ('\u{20}'..='\u{D7FF}').contains(&c)
        || ('\u{E000}'..='\u{FFFD}').contains(&c)
        || c >= '\u{10000}'
}
