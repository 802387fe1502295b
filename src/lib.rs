/*!
 * # l10n-lint - Lint your translations
 *
 * A Rust library for checking that translated strings in gettext catalogs
 * only use the HTML markup found in the original strings.
 *
 * ## Features
 *
 * - Build an allow-list of tags, attributes and attribute values from
 *   the untranslated `.pot` templates
 * - Reject translations with malformed HTML (unbalanced brackets, empty
 *   tag names, misnested or unclosed elements)
 * - Reject translations with unexpected tags, attributes or attribute values
 * - Per-file error reporting with an overall pass/fail status
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `catalog`: String extraction from `.po`/`.pot` files
 * - `markup`: Markup checks:
 *   - `markup::tokenizer`: Tolerant tag tokenizer
 *   - `markup::allow_list`: Tag → attribute → value lookup
 *   - `markup::inventory`: Allow-list construction from source strings
 *   - `markup::checker`: Translation validation
 * - `report`: Per-file results and log line formatting
 * - `file_utils`: Input discovery (directories and glob patterns)
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod catalog;
pub mod errors;
pub mod file_utils;
pub mod markup;
pub mod report;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{CatalogError, ValidationError};
pub use markup::{AllowList, build_allow_list, check_translation};
pub use report::{FileReport, LintReport, TranslationFailure};
