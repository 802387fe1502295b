/*!
 * Lint results and their human-readable rendering.
 */

use std::path::PathBuf;

use crate::errors::ValidationError;

/// One rejected translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFailure {
    /// The translated string as found in the catalog
    pub translation: String,
    /// Why it was rejected
    pub error: ValidationError,
}

impl TranslationFailure {
    /// Log line for this failure, `src` being the catalog it came from
    pub fn describe(&self, src: &str) -> String {
        let label = self.error.kind_label();
        match &self.error {
            ValidationError::MalformedHtml { translation } => {
                format!("{} ({}): {}", label, src, translation)
            }
            ValidationError::UnexpectedTag { tag_name } => {
                format!("{} ({}): {} [{}]", label, src, tag_name, self.translation)
            }
            ValidationError::UnexpectedAttribute { attribute_name, .. } => {
                format!("{} ({}): {} [{}]", label, src, attribute_name, self.translation)
            }
            ValidationError::UnexpectedAttributeValue {
                attribute_name,
                attribute_value,
                ..
            } => format!(
                "{} ({}): {}={} [{}]",
                label, src, attribute_name, attribute_value, self.translation
            ),
        }
    }
}

/// Results for one translated catalog
#[derive(Debug, Clone, Default)]
pub struct FileReport {
    pub path: PathBuf,
    /// Number of translated strings checked
    pub checked: usize,
    pub failures: Vec<TranslationFailure>,
}

impl FileReport {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Log lines for every failure in this file
    pub fn describe_failures(&self) -> Vec<String> {
        let src = self.path.display().to_string();
        self.failures.iter().map(|f| f.describe(&src)).collect()
    }
}

/// Results of a whole run
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    pub files: Vec<FileReport>,
}

impl LintReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total number of rejected translations
    pub fn error_count(&self) -> usize {
        self.files.iter().map(|f| f.failures.len()).sum()
    }

    /// Total number of translations checked
    pub fn checked_count(&self) -> usize {
        self.files.iter().map(|f| f.checked).sum()
    }

    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let file_count = self.file_count();
        let error_count = self.error_count();

        if error_count != 0 {
            format!(
                "Found {} {} in {} {}",
                error_count,
                pluralize(error_count, "error", "errors"),
                file_count,
                pluralize(file_count, "file", "files")
            )
        } else {
            format!(
                "Checked {} {} for invalid translations",
                file_count,
                pluralize(file_count, "file", "files")
            )
        }
    }
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
