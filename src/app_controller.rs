use anyhow::{Context, Result, anyhow};
use log::{debug, error, info, trace, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::catalog;
use crate::file_utils::FileManager;
use crate::markup::{AllowList, build_allow_list, check_translation};
use crate::report::{FileReport, LintReport, TranslationFailure};

// @module: Application controller for translation linting

/// Main application controller for translation linting
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Template files holding the source strings
    pub fn untranslated_files(&self) -> Result<Vec<PathBuf>> {
        FileManager::expand_inputs(&self.config.untranslated, "pot")
    }

    /// Catalog files to check
    pub fn translated_files(&self) -> Result<Vec<PathBuf>> {
        FileManager::expand_inputs(&self.config.translated, "po")
    }

    /// Create a list of expected tags, attributes, and attribute values from
    /// the untranslated files
    pub fn build_allow_list(&self) -> Result<AllowList> {
        let files = self.untranslated_files()?;
        if files.is_empty() {
            return Err(anyhow!(
                "No untranslated files match {:?}",
                self.config.untranslated
            ));
        }

        let sources = catalog::collect_untranslated(&files)?;
        let allow_list = build_allow_list(&sources);

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "Allow-list from {} files:\n{}",
                files.len(),
                allow_list.to_json_pretty()?
            );
        }

        Ok(allow_list)
    }

    /// Check each translation of one catalog against the allow-list
    pub fn check_file(&self, path: &Path, allow_list: &AllowList) -> Result<FileReport> {
        let translations = catalog::extract_translated(path)
            .with_context(|| format!("Failed to read translations from {:?}", path))?;

        let mut report = FileReport::new(path.to_path_buf());
        for translation in translations {
            trace!("{}", translation);
            report.checked += 1;

            if let Err(err) = check_translation(&translation, allow_list) {
                debug!("Error: {:?}", err);
                report.failures.push(TranslationFailure {
                    translation,
                    error: err,
                });
            }
        }

        Ok(report)
    }

    /// Run the main workflow:
    /// 1. Build the allow-list from the untranslated files.
    /// 2. Create a list of all translated files to be checked.
    /// 3. Check each translation in those files, logging every discrepancy.
    pub fn run(&self) -> Result<LintReport> {
        let start_time = std::time::Instant::now();

        let allow_list = self.build_allow_list()?;

        let files = self.translated_files()?;
        if files.is_empty() {
            warn!("No translated files match {:?}", self.config.translated);
        }

        let mut report = LintReport::default();
        for file in files {
            let file_report = self.check_file(&file, &allow_list)?;
            for line in file_report.describe_failures() {
                error!("{}", line);
            }
            report.files.push(file_report);
        }

        info!(
            "Checked {} translations in {:.2?}",
            report.checked_count(),
            start_time.elapsed()
        );

        Ok(report)
    }
}
