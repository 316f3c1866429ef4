//! Walks the configured categories and mirrors converted notes into the
//! content tree.
//!
//! Only the top level of each `<vault>/<category>` folder is read. A missing
//! category folder is skipped; every other I/O failure aborts the run,
//! leaving whatever was already written in place.

use crate::config::SyncConfig;
use crate::convert::Transformer;
use crate::error::{Result, SyncError};
use crate::model::{OutputNote, RawNote};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What a run did, file by file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Target paths written
    pub written: Vec<PathBuf>,
    /// Source files read but dropped for lacking front matter
    pub skipped: Vec<PathBuf>,
    /// Source files never read because their name matched an exclusion
    pub excluded: Vec<PathBuf>,
    /// Categories whose source folder does not exist
    pub missing_categories: Vec<String>,
}

pub fn run(config: &SyncConfig) -> Result<SyncReport> {
    let transformer = Transformer::from_config(config);
    let mut report = SyncReport::default();

    for category in &config.categories {
        sync_category(config, &transformer, category, &mut report)?;
    }

    info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        excluded = report.excluded.len(),
        "sync complete"
    );
    Ok(report)
}

fn sync_category(
    config: &SyncConfig,
    transformer: &Transformer,
    category: &str,
    report: &mut SyncReport,
) -> Result<()> {
    let source_dir = config.obsidian_vault_path.join(category);

    let Some(files) = list_files(&source_dir)? else {
        debug!(category, dir = %source_dir.display(), "category folder missing, skipping");
        report.missing_categories.push(category.to_string());
        return Ok(());
    };
    info!(category, entries = files.len(), "syncing category");

    for (name, source_path) in files {
        if !config.has_extension(&name) {
            continue;
        }
        if config.is_excluded(&name) {
            debug!(file = %source_path.display(), "excluded");
            report.excluded.push(source_path);
            continue;
        }

        let bytes = fs::read(&source_path).map_err(|e| SyncError::io(&source_path, e))?;
        // Invalid UTF-8 is decoded with replacement characters, not treated as a failure.
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let note = RawNote {
            source_path,
            category: category.to_string(),
            text,
        };

        match convert_note(config, transformer, &note) {
            Some(output) => {
                write_note(&output)?;
                debug!(path = %output.target_path.display(), "wrote");
                report.written.push(output.target_path);
            }
            None => {
                debug!(file = %note.source_path.display(), "no front matter, skipped");
                report.skipped.push(note.source_path);
            }
        }
    }

    Ok(())
}

/// Regular files directly inside `dir`, sorted by name.
/// `Ok(None)` when the directory does not exist.
fn list_files(dir: &Path) -> Result<Option<Vec<(String, PathBuf)>>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(SyncError::io(dir, e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SyncError::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| SyncError::io(entry.path(), e))?;
        if file_type.is_file() {
            files.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
        }
    }
    files.sort();
    Ok(Some(files))
}

/// Converts a note and pairs it with its mirrored destination path.
pub fn convert_note(
    config: &SyncConfig,
    transformer: &Transformer,
    note: &RawNote,
) -> Option<OutputNote> {
    let text = transformer.transform(&note.file_name(), &note.text, &note.category)?;
    Some(OutputNote {
        target_path: config.target_path(&note.source_path),
        text,
    })
}

/// Writes the note, creating parent directories and replacing any existing file.
pub fn write_note(note: &OutputNote) -> Result<()> {
    if let Some(parent) = note.target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }
    fs::write(&note.target_path, &note.text).map_err(|e| SyncError::io(&note.target_path, e))
}
