#![forbid(unsafe_code)]

//! Boomi process documents
//!
//! Reads a process XML file and extracts the two things the rules look at:
//! the `<shape>` elements and every element that references a component via
//! `componentId`. The rest of the document is only checked for
//! well-formedness.

use crate::error::ProcessError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Shape type that terminates a process branch
pub const RETURN_DOCUMENTS: &str = "returndocuments";

/// A `<shape>` element of a process diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Value of `shapetype` (or `type`), if present
    pub shape_type: Option<String>,
    /// Trimmed `userlabel` (or `label`); empty when unlabeled
    pub label: String,
}

impl Shape {
    /// Returns true if this shape ends a branch with a Return Documents step
    pub fn is_return_documents(&self) -> bool {
        self.shape_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(RETURN_DOCUMENTS))
    }
}

/// An element carrying a `componentId` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRef {
    /// Trimmed component identifier
    pub component_id: String,
    /// Label of the referencing element; empty when unlabeled
    pub label: String,
}

/// The parts of a process document the rules inspect, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessDocument {
    pub shapes: Vec<Shape>,
    pub component_refs: Vec<ComponentRef>,
}

impl ProcessDocument {
    /// Read and parse a process file
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::NotFound` if the file does not exist,
    /// `ProcessError::Read` for other I/O failures (including invalid UTF-8),
    /// and the XML variants if the content is not well-formed.
    pub fn read(path: &Path) -> Result<Self, ProcessError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProcessError::NotFound,
            _ => ProcessError::Read(e),
        })?;
        Self::parse(&content)
    }

    /// Parse a process document from an XML string
    pub fn parse(xml: &str) -> Result<Self, ProcessError> {
        let mut reader = Reader::from_str(xml);
        let mut document = ProcessDocument::default();
        let mut open: Vec<String> = Vec::new();
        let mut saw_root = false;
        let mut root_closed = false;

        loop {
            let event = reader.read_event().map_err(|e| ProcessError::Xml {
                position: reader.error_position() as u64,
                message: e.to_string(),
            })?;

            match event {
                Event::Start(element) => {
                    if root_closed {
                        return Err(misplaced(&reader, "element after the root element"));
                    }
                    saw_root = true;
                    open.push(String::from_utf8_lossy(element.name().as_ref()).into_owned());
                    document.collect(&reader, &element)?;
                }
                Event::Empty(element) => {
                    if root_closed {
                        return Err(misplaced(&reader, "element after the root element"));
                    }
                    saw_root = true;
                    root_closed = open.is_empty();
                    document.collect(&reader, &element)?;
                }
                Event::End(_) => {
                    open.pop();
                    root_closed = open.is_empty();
                }
                Event::Text(text) => {
                    let content = text.unescape().map_err(|e| ProcessError::Xml {
                        position: reader.buffer_position() as u64,
                        message: e.to_string(),
                    })?;
                    if open.is_empty() && !content.trim().is_empty() {
                        return Err(misplaced(&reader, "text outside the root element"));
                    }
                }
                Event::CData(_) if open.is_empty() => {
                    return Err(misplaced(&reader, "CDATA outside the root element"));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(name) = open.pop() {
            return Err(ProcessError::Unclosed(name));
        }
        if !saw_root {
            return Err(ProcessError::NoRootElement);
        }

        Ok(document)
    }

    fn collect(&mut self, reader: &Reader<&[u8]>, element: &BytesStart) -> Result<(), ProcessError> {
        let attrs = ElementAttributes::read(reader, element)?;

        if element.local_name().as_ref() == b"shape" {
            self.shapes.push(Shape {
                shape_type: attrs.shape_type.clone(),
                label: attrs.label(),
            });
        }

        if let Some(component_id) = attrs.component_id.as_deref().map(str::trim)
            && !component_id.is_empty()
        {
            self.component_refs.push(ComponentRef {
                component_id: component_id.to_string(),
                label: attrs.label(),
            });
        }

        Ok(())
    }
}

fn misplaced(reader: &Reader<&[u8]>, message: &str) -> ProcessError {
    ProcessError::Xml {
        position: reader.buffer_position() as u64,
        message: message.to_string(),
    }
}

/// Attributes of interest on a single element
#[derive(Debug, Default)]
struct ElementAttributes {
    shape_type: Option<String>,
    userlabel: Option<String>,
    label: Option<String>,
    component_id: Option<String>,
}

impl ElementAttributes {
    fn read(reader: &Reader<&[u8]>, element: &BytesStart) -> Result<Self, ProcessError> {
        let xml_error = |message: String| ProcessError::Xml {
            position: reader.buffer_position() as u64,
            message,
        };

        let mut attrs = ElementAttributes::default();
        for attr in element.attributes() {
            let attr = attr.map_err(|e| xml_error(e.to_string()))?;
            let value = attr
                .unescape_value()
                .map_err(|e| xml_error(e.to_string()))?
                .into_owned();

            // Prefixed attributes such as `xsi:type` are not Boomi's
            match attr.key.as_ref() {
                b"shapetype" => attrs.shape_type = Some(value),
                b"type" => {
                    attrs.shape_type.get_or_insert(value);
                }
                b"userlabel" => attrs.userlabel = Some(value),
                b"label" => attrs.label = Some(value),
                b"componentId" => attrs.component_id = Some(value),
                _ => {}
            }
        }

        Ok(attrs)
    }

    /// Boomi stores the visible label in `userlabel`; `label` is the fallback
    fn label(&self) -> String {
        self.userlabel
            .as_deref()
            .filter(|l| !l.is_empty())
            .or(self.label.as_deref())
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}
