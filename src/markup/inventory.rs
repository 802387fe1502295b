/*!
 * Tag inventory of source strings.
 *
 * Every tag, attribute and attribute value found in the untranslated strings
 * is saved into an [`AllowList`]. Source strings are trusted: malformed markup
 * is skipped, never reported.
 */

use log::{debug, trace};

use super::allow_list::AllowList;
use super::tokenizer::{MarkupTokenizer, TagEvent};

/// Accumulates source strings into an [`AllowList`]
#[derive(Debug, Default)]
pub struct TagInventory {
    allow_list: AllowList,
    sources_seen: usize,
}

impl TagInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one source string and record its open tags
    pub fn add_source(&mut self, source: &str) {
        self.sources_seen += 1;

        // Fast path for the bulk of strings
        if !source.contains('<') {
            return;
        }

        for event in MarkupTokenizer::new(source) {
            match event {
                TagEvent::Open(tag) => {
                    self.allow_list.record(
                        &tag.name,
                        tag.attributes
                            .iter()
                            .map(|(name, value)| (name.as_str(), value.as_str())),
                    );
                }
                TagEvent::Close(_) => {}
                TagEvent::SyntaxError(message) => {
                    trace!("Skipping rest of source string ({}): {}", message, source);
                }
            }
        }
    }

    /// Number of source strings fed so far
    pub fn sources_seen(&self) -> usize {
        self.sources_seen
    }

    /// Finish and hand out the allow-list
    pub fn finish(self) -> AllowList {
        debug!(
            "Tag inventory: {} tags from {} source strings",
            self.allow_list.len(),
            self.sources_seen
        );
        self.allow_list
    }
}

impl<S: AsRef<str>> Extend<S> for TagInventory {
    fn extend<I: IntoIterator<Item = S>>(&mut self, sources: I) {
        for source in sources {
            self.add_source(source.as_ref());
        }
    }
}

/// Build an allow-list from all source strings
pub fn build_allow_list<I, S>(sources: I) -> AllowList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut inventory = TagInventory::new();
    inventory.extend(sources);
    inventory.finish()
}
