/*!
 * Markup checks for translated strings.
 *
 * - `tokenizer`: Tolerant tag tokenizer over HTML fragments
 * - `allow_list`: Tags, attributes and values seen in source strings
 * - `inventory`: Builds the allow-list from source strings
 * - `checker`: Validates a translation against the allow-list
 */

pub mod tokenizer;
pub mod allow_list;
pub mod inventory;
pub mod checker;

// Re-export main types
pub use allow_list::{AllowList, AttributeAllowList, ValueSet};
pub use checker::{check_translation, TranslationChecker};
pub use inventory::{build_allow_list, TagInventory};
pub use tokenizer::{MarkupTokenizer, OpenTag, TagEvent};
