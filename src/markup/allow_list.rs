/*!
 * Allow-list of markup found in source strings.
 *
 * A three-level lookup: tag name → attribute name → set of literal values.
 * Presence of a tag means the tag may appear in translations, presence of an
 * attribute under a tag means it may appear on that tag, and presence of a
 * value means that exact value may be used.
 *
 * Example for an anchor element with multiple possible hrefs:
 *
 * ```json
 * { "a": { "href": ["/signin", "/signup"] } }
 * ```
 */

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Literal attribute values allowed for one tag + attribute
pub type ValueSet = BTreeSet<String>;

/// Attributes allowed on one tag
pub type AttributeAllowList = BTreeMap<String, ValueSet>;

/// Tags, attributes and values allowed in translations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowList {
    tags: BTreeMap<String, AttributeAllowList>,
}

impl AllowList {
    /// Create an empty allow-list
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tag and its attributes.
    ///
    /// The tag is recorded even when it has no attributes.
    pub(crate) fn record<'a, I>(&mut self, tag_name: &str, attributes: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let allowed_attributes = self.tags.entry(tag_name.to_string()).or_default();
        for (name, value) in attributes {
            allowed_attributes
                .entry(name.to_string())
                .or_default()
                .insert(value.to_string());
        }
    }

    /// Attributes allowed on `tag_name`, `None` if the tag itself is not allowed
    pub fn attributes(&self, tag_name: &str) -> Option<&AttributeAllowList> {
        self.tags.get(tag_name)
    }

    /// Values allowed for `attribute_name` on `tag_name`
    pub fn values(&self, tag_name: &str, attribute_name: &str) -> Option<&ValueSet> {
        self.attributes(tag_name)
            .and_then(|attributes| attributes.get(attribute_name))
    }

    pub fn allows_tag(&self, tag_name: &str) -> bool {
        self.tags.contains_key(tag_name)
    }

    pub fn allows_attribute(&self, tag_name: &str, attribute_name: &str) -> bool {
        self.values(tag_name, attribute_name).is_some()
    }

    pub fn allows_value(&self, tag_name: &str, attribute_name: &str, value: &str) -> bool {
        self.values(tag_name, attribute_name)
            .is_some_and(|values| values.contains(value))
    }

    /// Allowed tag names in sorted order
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Pretty JSON rendering, used for debug output and the `tags` command
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
