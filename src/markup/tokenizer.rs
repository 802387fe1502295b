/*!
 * Tolerant tag tokenizer.
 *
 * Wraps the `quick-xml` reader configured for HTML fragments and reduces its
 * output to the three events the checker and the inventory care about:
 * open tags, close tags and syntax errors. Text, comments and everything else
 * is skipped. A `<` followed by whitespace is text, not a tag. End names are
 * not checked against start names here; balancing is left to the caller.
 */

use quick_xml::escape::resolve_html5_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// An opening tag with its attributes in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag {
    /// Tag name exactly as written
    pub name: String,
    /// `(name, value)` pairs, values entity-decoded; the first of a
    /// repeated name wins
    pub attributes: Vec<(String, String)>,
    /// Written as `<name ... />`
    pub self_closing: bool,
}

/// Structural event emitted while scanning a fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    /// `<name attr="value">` or `<name/>`
    Open(OpenTag),
    /// `</name>`
    Close(String),
    /// The reader gave up on the input; no further events follow
    SyntaxError(String),
}

/// Iterator of [`TagEvent`]s over one markup fragment
pub struct MarkupTokenizer<'a> {
    reader: Reader<&'a [u8]>,
    finished: bool,
}

impl<'a> MarkupTokenizer<'a> {
    /// Create a tokenizer over `input`
    pub fn new(input: &'a str) -> Self {
        let mut reader = Reader::from_str(input);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = false;
        config.expand_empty_elements = false;

        Self {
            reader,
            finished: false,
        }
    }

    fn open_tag(start: &BytesStart<'_>, self_closing: bool) -> Result<OpenTag, String> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        let mut parsed = start.html_attributes();
        parsed.with_checks(false);
        for attribute in parsed {
            let attribute = attribute.map_err(|e| e.to_string())?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            if attributes.iter().any(|(seen, _)| *seen == key) {
                continue;
            }
            // Unknown entities are kept verbatim rather than rejected
            let value = match attribute.unescape_value_with(resolve_html5_entity) {
                Ok(value) => value.into_owned(),
                Err(_) => String::from_utf8_lossy(&attribute.value).into_owned(),
            };
            attributes.push((key, value));
        }

        Ok(OpenTag {
            name,
            attributes,
            self_closing,
        })
    }

    /// A name that is empty or starts with whitespace came from a stray `<`
    fn is_text_bracket(name: &[u8]) -> bool {
        name.first().is_none_or(|b| b.is_ascii_whitespace())
    }

    fn fail(&mut self, message: String) -> Option<TagEvent> {
        self.finished = true;
        Some(TagEvent::SyntaxError(message))
    }
}

impl Iterator for MarkupTokenizer<'_> {
    type Item = TagEvent;

    fn next(&mut self) -> Option<TagEvent> {
        if self.finished {
            return None;
        }

        loop {
            match self.reader.read_event() {
                Ok(Event::Start(start) | Event::Empty(start))
                    if Self::is_text_bracket(start.name().as_ref()) =>
                {
                    continue;
                }
                Ok(Event::End(end)) if Self::is_text_bracket(end.name().as_ref()) => continue,
                Ok(Event::Start(start)) => {
                    return match Self::open_tag(&start, false) {
                        Ok(tag) => Some(TagEvent::Open(tag)),
                        Err(message) => self.fail(message),
                    };
                }
                Ok(Event::Empty(start)) => {
                    return match Self::open_tag(&start, true) {
                        Ok(tag) => Some(TagEvent::Open(tag)),
                        Err(message) => self.fail(message),
                    };
                }
                Ok(Event::End(end)) => {
                    let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                    return Some(TagEvent::Close(name));
                }
                Ok(Event::Eof) => {
                    self.finished = true;
                    return None;
                }
                Ok(_) => continue,
                Err(e) => return self.fail(e.to_string()),
            }
        }
    }
}

/// Tokenize `input` into a vector of events
pub fn tokenize(input: &str) -> Vec<TagEvent> {
    MarkupTokenizer::new(input).collect()
}
