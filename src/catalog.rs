/*!
 * String extraction from gettext catalogs.
 *
 * Untranslated strings come from the msgid side of a template (`.pot`),
 * translated strings from the msgstr side of a catalog (`.po`). The header
 * entry (empty msgid) is never returned, nor are empty strings.
 */

use std::path::Path;

use log::debug;
use polib::catalog::Catalog;
use polib::message::MessageView;
use polib::po_file;

use crate::errors::CatalogError;

/// Parse a `.po` or `.pot` file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }

    po_file::parse(path).map_err(|e| CatalogError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// All source strings of a catalog, singular and plural forms
pub fn untranslated_strings(catalog: &Catalog) -> Vec<String> {
    let mut strings = Vec::new();

    for message in catalog.messages() {
        let msgid = message.msgid();
        if msgid.is_empty() {
            continue;
        }
        strings.push(msgid.to_string());

        if message.is_plural() {
            if let Ok(plural) = message.msgid_plural() {
                if !plural.is_empty() {
                    strings.push(plural.to_string());
                }
            }
        }
    }

    strings
}

/// All non-empty translations of a catalog, every plural form included
pub fn translated_strings(catalog: &Catalog) -> Vec<String> {
    let mut strings = Vec::new();

    for message in catalog.messages() {
        if message.msgid().is_empty() {
            continue;
        }

        if message.is_plural() {
            if let Ok(forms) = message.msgstr_plural() {
                strings.extend(forms.iter().filter(|form| !form.is_empty()).cloned());
            }
        } else if let Ok(msgstr) = message.msgstr() {
            if !msgstr.is_empty() {
                strings.push(msgstr.to_string());
            }
        }
    }

    strings
}

/// Source strings of one template file
pub fn extract_untranslated<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CatalogError> {
    let catalog = load_catalog(&path)?;
    let strings = untranslated_strings(&catalog);
    debug!("{} source strings in {:?}", strings.len(), path.as_ref());
    Ok(strings)
}

/// Translated strings of one catalog file
pub fn extract_translated<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CatalogError> {
    let catalog = load_catalog(&path)?;
    let strings = translated_strings(&catalog);
    debug!("{} translated strings in {:?}", strings.len(), path.as_ref());
    Ok(strings)
}

/// Source strings of several templates, concatenated in order
pub fn collect_untranslated<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>, CatalogError> {
    let mut strings = Vec::new();
    for path in paths {
        strings.extend(extract_untranslated(path)?);
    }
    Ok(strings)
}
