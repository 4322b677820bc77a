use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::app_config::Config;
use crate::errors::AppError;

// @module: File and directory utilities

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

    /// Find media files below `dir`, skipping the tool's own output folders
    pub fn find_media_files<P: AsRef<Path>>(dir: P, config: &Config) -> Result<Vec<PathBuf>, AppError> {
        let mut result = Vec::new();

        let walker = WalkDir::new(dir.as_ref())
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry, &config.skip_dir_suffix));

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if entry.file_type().is_file() && config.is_media_file(path) {
                result.push(path.to_path_buf());
            }
        }

        debug!("Found {} media file(s) in {:?}", result.len(), dir.as_ref());
        Ok(result)
    }

    /// List the side-files sitting next to `media_file` and named after it.
    ///
    /// `Movie.mkv` pairs with `Movie.en.srt` or `Movie (fr).ass` but not with
    /// `Other.en.srt`. Results are sorted by file name.
    pub fn find_side_files<P: AsRef<Path>>(media_file: P, config: &Config) -> Result<Vec<PathBuf>, AppError> {
        let media_file = media_file.as_ref();
        let dir = match media_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let stem = media_file
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .ok_or_else(|| AppError::File(format!("Media file has no name: {:?}", media_file)))?;

        let mut result = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || !config.is_subtitle_file(&path) {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                warn!("Skipping side-file with a non UTF-8 name: {:?}", path);
                continue;
            };

            if name.starts_with(&stem) {
                result.push(path);
            }
        }

        result.sort();
        Ok(result)
    }
}

fn is_skipped_dir(entry: &DirEntry, suffix: &str) -> bool {
    // The walk root is never skipped
    entry.depth() > 0
        && !suffix.is_empty()
        && entry.file_type().is_dir()
        && entry.file_name().to_string_lossy().ends_with(suffix)
}
