/*!
 * Error types for the l10n-lint application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a translated string is rejected.
///
/// Exactly one of these is reported per string: the first problem found
/// stops the scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Unbalanced brackets, an empty tag name, a misnested or unclosed
    /// element, or a syntax error raised by the tokenizer
    #[error("Malformed HTML: {translation}")]
    MalformedHtml {
        /// The complete offending translation
        translation: String,
    },

    /// A tag that never appears in the source strings
    #[error("Unexpected tag: {tag_name}")]
    UnexpectedTag {
        /// Name of the tag
        tag_name: String,
    },

    /// An attribute that never appears on this tag in the source strings
    #[error("Unexpected attribute: {attribute_name}")]
    UnexpectedAttribute {
        /// Name of the tag carrying the attribute
        tag_name: String,
        /// Name of the attribute
        attribute_name: String,
    },

    /// An attribute value that never appears for this tag and attribute
    #[error("Unexpected attribute value: {attribute_name}={attribute_value}")]
    UnexpectedAttributeValue {
        /// Name of the tag carrying the attribute
        tag_name: String,
        /// Name of the attribute
        attribute_name: String,
        /// The literal (entity-decoded) value
        attribute_value: String,
    },
}

impl ValidationError {
    /// Build a malformed-markup error for the given translation
    pub fn malformed(translation: &str) -> Self {
        Self::MalformedHtml {
            translation: translation.to_string(),
        }
    }

    /// Short upper-case label used in report lines
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::MalformedHtml { .. } => "MALFORMED HTML",
            Self::UnexpectedTag { .. } => "UNEXPECTED TAG",
            Self::UnexpectedAttribute { .. } => "UNEXPECTED ATTRIBUTE",
            Self::UnexpectedAttributeValue { .. } => "UNEXPECTED ATTRIBUTE VALUE",
        }
    }
}

/// Errors that can occur while reading a translation catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The file does not exist
    #[error("Catalog not found: {0:?}")]
    NotFound(PathBuf),

    /// The gettext parser rejected the file
    #[error("Failed to parse catalog {path:?}: {message}")]
    Parse {
        /// Path of the catalog
        path: PathBuf,
        /// Parser error message
        message: String,
    },
}
