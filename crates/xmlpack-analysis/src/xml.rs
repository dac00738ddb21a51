//! XML shape probe built on the `quick-xml` pull parser.
//!
//! The parser is streaming, so nesting depth falls out of the open-element
//! count and no recursion is needed.

use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::PrefixDeclaration;
use tracing::debug;
use xmlpack_types::XmlStructure;

pub fn xml_structure(content: &str) -> XmlStructure {
    match XmlShape::scan(content) {
        Ok(shape) => XmlStructure {
            valid: true,
            root_tag: Some(shape.root_tag),
            elements: Some(shape.elements),
            attributes: Some(shape.attributes),
            depth: Some(shape.depth),
            namespaces: Some(shape.namespaces),
            error: None,
        },
        Err(error) => {
            debug!(%error, "content is not well-formed XML");
            XmlStructure::invalid(error)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlShape {
    pub root_tag: String,
    /// Every element, the root included.
    pub elements: usize,
    /// Attributes across all elements; namespace declarations excluded.
    pub attributes: usize,
    /// Deepest element level; the root is level 0.
    pub depth: usize,
    /// Prefixes declared on the root, in order. `""` is the default namespace.
    pub namespaces: Vec<String>,
}

impl XmlShape {
    pub fn scan(content: &str) -> Result<Self, String> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().check_end_names = true;

        let mut shape = XmlShape::default();
        let mut seen_root = false;
        let mut open = 0usize;
        let mut entities = Entities::default();

        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(err) => {
                    return Err(format!("{err} (at byte {})", reader.buffer_position()));
                }
            };
            match event {
                Event::Start(start) => {
                    shape.visit(&start, open, &mut seen_root, &entities)?;
                    open += 1;
                }
                Event::Empty(start) => {
                    shape.visit(&start, open, &mut seen_root, &entities)?;
                }
                Event::End(end) => {
                    if open == 0 {
                        return Err(format!(
                            "unexpected end tag </{}>",
                            String::from_utf8_lossy(end.name().as_ref())
                        ));
                    }
                    open -= 1;
                }
                Event::Text(text) => {
                    if open == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                        return Err("text content outside the root element".to_string());
                    }
                    text.unescape_with(|name| entities.resolve(name))
                        .map_err(|err| err.to_string())?;
                }
                Event::DocType(doctype) => {
                    entities.declare(&String::from_utf8_lossy(&doctype));
                }
                Event::CData(_) if open == 0 => {
                    return Err("CDATA section outside the root element".to_string());
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err("document has no root element".to_string());
        }
        if open > 0 {
            return Err(format!("{open} element(s) not closed at end of input"));
        }
        Ok(shape)
    }

    fn visit(
        &mut self,
        start: &BytesStart<'_>,
        level: usize,
        seen_root: &mut bool,
        entities: &Entities,
    ) -> Result<(), String> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        if level == 0 {
            if *seen_root {
                return Err(format!("extra content after the root element: <{name}>"));
            }
            *seen_root = true;
            self.root_tag = name;
        }
        self.elements += 1;
        self.depth = self.depth.max(level);

        for attr in start.attributes() {
            let attr = attr.map_err(|err| err.to_string())?;
            attr.unescape_value_with(|name| entities.resolve(name))
                .map_err(|err| err.to_string())?;
            match attr.key.as_namespace_binding() {
                Some(binding) => {
                    if level == 0 {
                        self.namespaces.push(match binding {
                            PrefixDeclaration::Default => String::new(),
                            PrefixDeclaration::Named(prefix) => {
                                String::from_utf8_lossy(prefix).into_owned()
                            }
                        });
                    }
                }
                None => self.attributes += 1,
            }
        }
        Ok(())
    }
}

/// General entities declared in the internal DTD subset.
///
/// Parameter entities and external (`SYSTEM`/`PUBLIC`) declarations are not
/// recorded, so references to them stay unresolved.
#[derive(Debug, Default)]
struct Entities {
    declared: BTreeMap<String, String>,
}

impl Entities {
    fn declare(&mut self, doctype: &str) {
        const KEYWORD: &str = "<!ENTITY";
        let mut rest = doctype;
        while let Some(at) = rest.find(KEYWORD) {
            rest = rest[at + KEYWORD.len()..].trim_start();
            if rest.starts_with('%') {
                continue;
            }
            let name_end = rest
                .find(|c: char| c.is_whitespace())
                .unwrap_or(rest.len());
            let (name, tail) = rest.split_at(name_end);
            rest = tail.trim_start();
            let Some(quote) = rest.chars().next().filter(|c| matches!(c, '"' | '\'')) else {
                continue;
            };
            let body = &rest[1..];
            let Some(end) = body.find(quote) else {
                break;
            };
            // The first declaration of a name is binding.
            self.declared
                .entry(name.to_string())
                .or_insert_with(|| body[..end].to_string());
            rest = &body[end + 1..];
        }
    }

    fn resolve(&self, name: &str) -> Option<&str> {
        resolve_predefined_entity(name).or_else(|| self.declared.get(name).map(String::as_str))
    }
}
