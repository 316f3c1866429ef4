use crate::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "settings.json";
const DEFAULT_FILE_EXT: &str = ".md";

/// Run configuration, read once from `settings.json` and passed down explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    /// Root of the Obsidian vault; categories are its direct subfolders
    pub obsidian_vault_path: PathBuf,

    /// Root of the Astro content tree the vault is mirrored into
    pub astro_content_path: PathBuf,

    /// File name suffixes to convert (e.g. ".md")
    #[serde(default = "default_file_extensions")]
    pub file_extensions: Vec<String>,

    /// Substrings that exclude a file when found anywhere in its name.
    /// Despite the key name these are matched against file names, not folders.
    #[serde(default)]
    pub exclude_folders: Vec<String>,

    /// Category subfolders to process, in order
    #[serde(default)]
    pub categories: Vec<String>,

    /// Append the category name to every note's tags
    #[serde(default)]
    pub tag_category: bool,
}

fn default_file_extensions() -> Vec<String> {
    vec![DEFAULT_FILE_EXT.to_string()]
}

impl SyncConfig {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            obsidian_vault_path: source.into(),
            astro_content_path: dest.into(),
            file_extensions: default_file_extensions(),
            exclude_folders: Vec::new(),
            categories: Vec::new(),
            tag_category: false,
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_folders = excludes.into_iter().map(Into::into).collect();
        self
    }

    /// Load config from a JSON file. A missing file is an error, not defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SyncError::Config(format!(
                "settings file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
        let config: SyncConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn has_extension(&self, file_name: &str) -> bool {
        self.file_extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }

    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.exclude_folders
            .iter()
            .any(|needle| file_name.contains(needle.as_str()))
    }

    /// Maps a path under the vault root to the same relative path under the content root.
    /// Paths outside the vault root are returned unchanged.
    pub fn target_path(&self, source: &Path) -> PathBuf {
        match source.strip_prefix(&self.obsidian_vault_path) {
            Ok(rel) => self.astro_content_path.join(rel),
            Err(_) => source.to_path_buf(),
        }
    }
}
