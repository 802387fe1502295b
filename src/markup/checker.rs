/*!
 * Translation markup checker.
 *
 * Checks one translated string against the [`AllowList`] built from the
 * source strings. Two phases:
 *
 * 1. Pre-checks on the raw text: bracket balance and empty tag names. The
 *    tokenizer is lenient about both, so they are caught up front.
 * 2. An event scan over the tokenizer output. Each open tag is pushed on a
 *    stack and looked up in the allow-list (tag, then each attribute name,
 *    then its value). Each close tag must match the top of the stack.
 *
 * The first problem found is the only one reported.
 */

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ValidationError;

use super::allow_list::AllowList;
use super::tokenizer::{MarkupTokenizer, OpenTag, TagEvent};

/// Matches tags whose name is empty or blank: `<>`, `</>`, `< />`
static EMPTY_TAG_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\s*/?\s*>").expect("Invalid empty tag name regex"));

/// Elements that never get an explicit close tag
pub const SELF_CLOSING_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "br", "col", "command", "embed", "frame", "hr", "img", "input",
    "isindex", "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Whether `tag_name` is a void element
pub fn is_self_closing(tag_name: &str) -> bool {
    SELF_CLOSING_ELEMENTS.contains(&tag_name)
}

/// Walk the characters of the translation. On an opening bracket, ensure
/// another tag is not currently open. On a closing bracket, ensure a tag is
/// open. At the end, ensure no tag is left open.
pub fn check_brackets(translation: &str) -> Result<(), ValidationError> {
    let mut is_tag_open = false;

    for ch in translation.chars() {
        match ch {
            '<' if is_tag_open => return Err(ValidationError::malformed(translation)),
            '<' => is_tag_open = true,
            '>' if !is_tag_open => return Err(ValidationError::malformed(translation)),
            '>' => is_tag_open = false,
            _ => {}
        }
    }

    if is_tag_open {
        return Err(ValidationError::malformed(translation));
    }

    Ok(())
}

/// Reject `<>`, `</>` and friends
pub fn check_empty_tag_names(translation: &str) -> Result<(), ValidationError> {
    if EMPTY_TAG_NAME_REGEX.is_match(translation) {
        return Err(ValidationError::malformed(translation));
    }
    Ok(())
}

#[derive(Debug)]
enum ScanState {
    Scanning,
    Finished(Result<(), ValidationError>),
}

/// Event-driven checker for a single translation.
///
/// Once a result is reached every further event is ignored.
#[derive(Debug)]
pub struct TranslationChecker<'a> {
    translation: &'a str,
    allow_list: &'a AllowList,
    open_elements: Vec<String>,
    state: ScanState,
}

impl<'a> TranslationChecker<'a> {
    pub fn new(translation: &'a str, allow_list: &'a AllowList) -> Self {
        Self {
            translation,
            allow_list,
            open_elements: Vec::new(),
            state: ScanState::Scanning,
        }
    }

    /// Whether the result has already been decided
    pub fn is_finished(&self) -> bool {
        matches!(self.state, ScanState::Finished(_))
    }

    /// Dispatch one tokenizer event
    pub fn handle_event(&mut self, event: &TagEvent) {
        match event {
            TagEvent::Open(tag) => self.on_open_tag(tag),
            TagEvent::Close(name) => self.on_close_tag(name),
            TagEvent::SyntaxError(message) => self.on_syntax_error(message),
        }
    }

    pub fn on_open_tag(&mut self, tag: &OpenTag) {
        if self.is_finished() {
            return;
        }

        self.open_elements.push(tag.name.clone());

        if let Err(err) = self.check_open_tag(tag) {
            self.finish_with(Err(err));
            return;
        }

        // No close event ever arrives for these
        if is_self_closing(&tag.name) {
            self.on_close_tag(&tag.name);
        } else if tag.self_closing {
            trace!("<{}/> is not a void element and stays open", tag.name);
        }
    }

    pub fn on_close_tag(&mut self, tag_name: &str) {
        if self.is_finished() {
            return;
        }

        let last_opened = self.open_elements.pop();
        if last_opened.as_deref() != Some(tag_name) {
            trace!(
                "Close tag </{}> does not match {:?}",
                tag_name,
                last_opened
            );
            self.finish_with(Err(ValidationError::malformed(self.translation)));
        }
    }

    pub fn on_syntax_error(&mut self, message: &str) {
        if self.is_finished() {
            return;
        }

        trace!("Tokenizer error: {}", message);
        self.finish_with(Err(ValidationError::malformed(self.translation)));
    }

    /// Decide the result once the input is exhausted
    pub fn finish(self) -> Result<(), ValidationError> {
        match self.state {
            ScanState::Finished(result) => result,
            ScanState::Scanning if !self.open_elements.is_empty() => {
                Err(ValidationError::malformed(self.translation))
            }
            ScanState::Scanning => Ok(()),
        }
    }

    fn finish_with(&mut self, result: Result<(), ValidationError>) {
        self.state = ScanState::Finished(result);
    }

    fn check_open_tag(&self, tag: &OpenTag) -> Result<(), ValidationError> {
        let allowed_attributes =
            self.allow_list
                .attributes(&tag.name)
                .ok_or_else(|| ValidationError::UnexpectedTag {
                    tag_name: tag.name.clone(),
                })?;

        for (name, value) in &tag.attributes {
            let allowed_values =
                allowed_attributes
                    .get(name)
                    .ok_or_else(|| ValidationError::UnexpectedAttribute {
                        tag_name: tag.name.clone(),
                        attribute_name: name.clone(),
                    })?;

            if !allowed_values.contains(value) {
                return Err(ValidationError::UnexpectedAttributeValue {
                    tag_name: tag.name.clone(),
                    attribute_name: name.clone(),
                    attribute_value: value.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Check a translation for malformed or unexpected markup
pub fn check_translation(translation: &str, allow_list: &AllowList) -> Result<(), ValidationError> {
    check_brackets(translation)?;
    check_empty_tag_names(translation)?;

    let mut checker = TranslationChecker::new(translation, allow_list);
    for event in MarkupTokenizer::new(translation) {
        checker.handle_event(&event);
        if checker.is_finished() {
            break;
        }
    }

    checker.finish()
}
