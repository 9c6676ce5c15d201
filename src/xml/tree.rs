use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;
use tracing::{debug, warn};

use crate::core::CfdiError;

/// A parsed XML document: an arena of elements in document order.
///
/// Elements are stored pre-order, so the descendants of any element occupy
/// the contiguous index range that follows it.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<ElementData>,
}

#[derive(Debug, Clone)]
struct ElementData {
    name: String,
    local_start: usize,
    namespace: Option<String>,
    attributes: Vec<Attribute>,
    parent: Option<usize>,
    /// One past the last descendant.
    end: usize,
}

/// An attribute as written in the source, qualified name included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Borrowed handle to one element of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    doc: &'a Document,
    index: usize,
}

/// Iterator over a contiguous run of elements in document order.
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    doc: &'a Document,
    range: std::ops::Range<usize>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.range.next()?;
        Some(Element {
            doc: self.doc,
            index,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl Document {
    /// The top-level (document) element.
    pub fn root(&self) -> Element<'_> {
        Element { doc: self, index: 0 }
    }

    /// Every element, the document element first.
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            doc: self,
            range: 0..self.elements.len(),
        }
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false for a successfully parsed document.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> Element<'a> {
    fn data(&self) -> &'a ElementData {
        &self.doc.elements[self.index]
    }

    /// Qualified name as written, e.g. `tfd:TimbreFiscalDigital`.
    pub fn name(&self) -> &'a str {
        &self.data().name
    }

    /// Name without its prefix.
    pub fn local_name(&self) -> &'a str {
        let data = self.data();
        &data.name[data.local_start..]
    }

    /// Namespace prefix, if the name has one.
    pub fn prefix(&self) -> Option<&'a str> {
        let data = self.data();
        (data.local_start > 0).then(|| &data.name[..data.local_start - 1])
    }

    /// Resolved namespace URI, `None` when unbound or undeclared.
    pub fn namespace(&self) -> Option<&'a str> {
        self.data().namespace.as_deref()
    }

    /// Raw attribute value by exact qualified name.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.data()
            .attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// All attributes in source order.
    pub fn attributes(&self) -> &'a [Attribute] {
        &self.data().attributes
    }

    pub fn parent(&self) -> Option<Element<'a>> {
        self.data().parent.map(|index| Element {
            doc: self.doc,
            index,
        })
    }

    /// Proper descendants in document order.
    pub fn descendants(&self) -> Elements<'a> {
        Elements {
            doc: self.doc,
            range: self.index + 1..self.data().end,
        }
    }

    /// Direct children in document order.
    pub fn children(&self) -> impl Iterator<Item = Element<'a>> + 'a {
        let index = self.index;
        self.descendants()
            .filter(move |e| e.data().parent == Some(index))
    }

    /// Position in document order; the document element is 0.
    pub fn position(&self) -> usize {
        self.index
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.index == other.index
    }
}

impl Eq for Element<'_> {}

fn malformed(detail: impl std::fmt::Display) -> CfdiError {
    CfdiError::MalformedDocument(detail.to_string())
}

/// Parse XML text into a [`Document`].
///
/// Rejects anything that is not well-formed: syntax errors, mismatched or
/// unclosed tags, a missing or repeated document element, and non-blank
/// text outside the document element. Prefixes that are not declared are
/// tolerated and leave the element without a namespace URI.
pub fn parse_document(text: &str) -> Result<Document, CfdiError> {
    let mut reader = NsReader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut elements: Vec<ElementData> = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    loop {
        let (resolved, event) = reader.read_resolved_event().map_err(malformed)?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                if open.is_empty() && !elements.is_empty() {
                    return Err(malformed("more than one document element"));
                }
                let namespace = match resolved {
                    ResolveResult::Bound(ns) => Some(
                        std::str::from_utf8(ns.as_ref())
                            .map_err(malformed)?
                            .to_string(),
                    ),
                    ResolveResult::Unbound => None,
                    ResolveResult::Unknown(prefix) => {
                        warn!(
                            prefix = %String::from_utf8_lossy(&prefix),
                            "element prefix is not bound to a declared namespace"
                        );
                        None
                    }
                };
                let index = elements.len();
                elements.push(element_data(e, namespace, open.last().copied())?);
                if matches!(event, Event::Start(_)) {
                    open.push(index);
                } else {
                    elements[index].end = index + 1;
                }
            }
            Event::End(ref e) => {
                let index = open
                    .pop()
                    .ok_or_else(|| malformed("closing tag without an open element"))?;
                if e.name().as_ref() != elements[index].name.as_bytes() {
                    return Err(malformed(format!(
                        "expected </{}>, found </{}>",
                        elements[index].name,
                        String::from_utf8_lossy(e.name().as_ref())
                    )));
                }
                elements[index].end = elements.len();
            }
            Event::Text(ref t) if open.is_empty() => {
                if !t.iter().all(u8::is_ascii_whitespace) {
                    return Err(malformed("text outside the document element"));
                }
            }
            Event::CData(_) if open.is_empty() => {
                return Err(malformed("CDATA outside the document element"));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(&index) = open.last() {
        return Err(malformed(format!(
            "unclosed element <{}>",
            elements[index].name
        )));
    }
    if elements.is_empty() {
        return Err(malformed("no document element"));
    }

    debug!(elements = elements.len(), "parsed XML document");
    Ok(Document { elements })
}

fn element_data(
    e: &BytesStart<'_>,
    namespace: Option<String>,
    parent: Option<usize>,
) -> Result<ElementData, CfdiError> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(malformed)?
        .to_string();
    let local_start = name.find(':').map_or(0, |i| i + 1);

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(malformed)?;
        let name = std::str::from_utf8(attr.key.as_ref())
            .map_err(malformed)?
            .to_string();
        let value = attr.unescape_value().map_err(malformed)?.into_owned();
        attributes.push(Attribute { name, value });
    }

    Ok(ElementData {
        name,
        local_start,
        namespace,
        attributes,
        parent,
        end: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_in_document_order() {
        let doc = parse_document(r#"<a><b x="1"><c/></b><d/></a>"#).unwrap();
        let names: Vec<_> = doc.elements().map(|e| e.name()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
        assert_eq!(doc.len(), 4);

        let b = doc.elements().nth(1).unwrap();
        assert_eq!(b.attribute("x"), Some("1"));
        assert_eq!(b.descendants().count(), 1);
        assert_eq!(b.parent(), Some(doc.root()));
        assert_eq!(doc.root().children().count(), 2);
    }

    #[test]
    fn splits_prefix_and_resolves_namespace() {
        let doc = parse_document(
            r#"<cfdi:Comprobante xmlns:cfdi="http://www.sat.gob.mx/cfd/4"><x:Y/></cfdi:Comprobante>"#,
        )
        .unwrap();
        let root = doc.root();
        assert_eq!(root.prefix(), Some("cfdi"));
        assert_eq!(root.local_name(), "Comprobante");
        assert_eq!(root.namespace(), Some("http://www.sat.gob.mx/cfd/4"));

        let undeclared = root.descendants().next().unwrap();
        assert_eq!(undeclared.local_name(), "Y");
        assert_eq!(undeclared.namespace(), None);
    }

    #[test]
    fn unescapes_attribute_values() {
        let doc = parse_document(r#"<a Nombre="A &amp; B"/>"#).unwrap();
        assert_eq!(doc.root().attribute("Nombre"), Some("A & B"));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in [
            "<not-xml",
            "",
            "plain text",
            "<a><b></a>",
            "<a>",
            "<a/><b/>",
            "<a/>trailing",
            r#"<a x="1" x="2"/>"#,
        ] {
            let err = parse_document(input).unwrap_err();
            assert!(
                matches!(err, CfdiError::MalformedDocument(_)),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn accepts_prolog_and_comments() {
        let doc = parse_document(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- x -->\n<a/>\n",
        )
        .unwrap();
        assert_eq!(doc.root().name(), "a");
    }
}
