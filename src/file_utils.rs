use anyhow::{Context, Result, anyhow};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File discovery utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Expand glob patterns into the files they match
    pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
        let paths = glob::glob(pattern).map_err(|e| anyhow!("Invalid pattern '{}': {}", pattern, e))?;

        let mut result = Vec::new();
        for entry in paths {
            let path = entry.with_context(|| format!("Failed to read match of '{}'", pattern))?;
            if path.is_file() {
                result.push(path);
            }
        }

        Ok(result)
    }

    /// Resolve inputs into a sorted, deduplicated list of files.
    ///
    /// A directory is walked for files ending in `extension`; anything else is
    /// treated as a glob pattern (a plain file path matches itself).
    pub fn expand_inputs<S: AsRef<str>>(inputs: &[S], extension: &str) -> Result<Vec<PathBuf>> {
        let mut files = BTreeSet::new();

        for input in inputs {
            let input = input.as_ref();
            if Self::dir_exists(input) {
                files.extend(Self::find_files(input, extension)?);
            } else {
                files.extend(Self::expand_pattern(input)?);
            }
        }

        Ok(files.into_iter().collect())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }
}
