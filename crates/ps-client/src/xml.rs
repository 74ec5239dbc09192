//! XML codec for web service payloads.
//!
//! Entities are serialized straight into `<element>...</element>` fragments
//! (no namespace declarations) and wrapped in the `<prestashop>` envelope.
//! Responses are sliced into the elements the caller asked for before being
//! handed to serde, so the root element names can be runtime strings.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};

/// Root element of every web service document.
pub const ENVELOPE: &str = "prestashop";

/// Serialize `value` as a single `<element>` fragment.
pub fn to_fragment<T: Serialize>(element: &str, value: &T) -> Result<String> {
    quick_xml::se::to_string_with_root(element, value)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Wrap fragments in the `<prestashop>` envelope.
pub fn envelope<S: AsRef<str>>(fragments: &[S]) -> String {
    let mut body = String::from("<prestashop>\n");
    for fragment in fragments {
        body.push_str(fragment.as_ref());
    }
    body.push_str("\n</prestashop>");
    body
}

/// Deserialize one element slice produced by [`extract_elements`].
pub fn from_fragment<T: DeserializeOwned>(fragment: &str) -> Result<T> {
    quick_xml::de::from_str(fragment)
        .map_err(|e| Error::malformed(format!("cannot decode element: {}", e)))
}

/// Raw text of every outermost element named `name`, in document order.
///
/// Same-named elements nested inside a match stay part of that match, so
/// `<category>` blocks that contain `<associations><categories><category>`
/// come back whole.
pub fn extract_elements<'a>(xml: &'a str, name: &str) -> Result<Vec<&'a str>> {
    let mut reader = Reader::from_str(xml);
    let target = name.as_bytes();
    let mut found = Vec::new();
    let mut open: Option<usize> = None;
    let mut depth = 0usize;

    loop {
        let before = position(&reader)?;
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == target => {
                if open.is_none() {
                    open = Some(before);
                }
                depth += 1;
            }
            Ok(Event::End(e)) if e.local_name().as_ref() == target => {
                if let Some(start) = open {
                    depth -= 1;
                    if depth == 0 {
                        found.push(&xml[start..position(&reader)?]);
                        open = None;
                    }
                }
            }
            Ok(Event::Empty(e)) if e.local_name().as_ref() == target && open.is_none() => {
                found.push(&xml[before..position(&reader)?]);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::malformed(format!("invalid XML: {}", e))),
        }
    }

    Ok(found)
}

/// First outermost element named `name`.
pub fn extract_element<'a>(xml: &'a str, name: &str) -> Result<&'a str> {
    extract_elements(xml, name)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::malformed(format!("no <{}> element in response", name)))
}

/// `id` attribute of every element named `name`, in document order.
pub fn extract_ids(xml: &str, name: &str) -> Result<Vec<u64>> {
    let mut reader = Reader::from_str(xml);
    let target = name.as_bytes();
    let mut ids = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.local_name().as_ref() == target => {
                let id = e
                    .attributes()
                    .flatten()
                    .find(|a| a.key.as_ref() == b"id")
                    .and_then(|a| std::str::from_utf8(&a.value).ok()?.trim().parse::<u64>().ok())
                    .ok_or_else(|| {
                        tracing::warn!(element = name, "element without a numeric id attribute");
                        Error::malformed(format!("<{}> without a numeric id attribute", name))
                    })?;
                ids.push(id);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::malformed(format!("invalid XML: {}", e))),
        }
    }

    Ok(ids)
}

/// First `<message>` of a PrestaShop `<errors>` document.
pub fn parse_error_message(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    let mut in_message = false;
    let mut message = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"message" => in_message = true,
            Ok(Event::End(e)) if e.local_name().as_ref() == b"message" => {
                let message = message.trim();
                return (!message.is_empty()).then(|| message.to_string());
            }
            Ok(Event::Text(t)) if in_message => message.push_str(&t.unescape().ok()?),
            Ok(Event::CData(c)) if in_message => {
                message.push_str(std::str::from_utf8(&c.into_inner()).ok()?)
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

fn position(reader: &Reader<&[u8]>) -> Result<usize> {
    usize::try_from(reader.buffer_position())
        .map_err(|_| Error::malformed("response too large to index"))
}
