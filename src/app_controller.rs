use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::filename_guess::guess_language;
use crate::lang_tag::{LanguageTag, PreferenceList};
use crate::selection::SelectionSlot;
use crate::subtype::{SubtypeRank, classify};

// @module: Application controller for side-file selection

/// A side-file chosen for one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub tag: LanguageTag,
    pub subtype: SubtypeRank,
}

impl fmt::Display for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {}]", self.path.display(), self.tag, self.subtype)
    }
}

/// Outcome of the selection for one media file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSelection {
    pub media: PathBuf,
    /// Best side-file in one of the reference languages
    pub reference: Option<SelectedFile>,
    /// Best side-file in the target language
    pub target: Option<SelectedFile>,
    /// The target file follows the audio track (closed captions or dubtitles)
    pub target_is_cc_or_dub: bool,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    reference: PreferenceList,
    target: PreferenceList,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let reference = config.reference_preferences()?;
        let target = config.target_preferences()?;
        debug!("Reference languages: {}, target language: {}", reference, target);

        Ok(Self { config, reference, target })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process a single media file or every media file below a directory
    pub fn run<P: AsRef<Path>>(&self, input_path: P) -> Result<Vec<MediaSelection>> {
        let input_path = input_path.as_ref();

        if FileManager::file_exists(input_path) {
            Ok(vec![self.select_for_media(input_path)?])
        } else if FileManager::dir_exists(input_path) {
            self.run_folder(input_path)
        } else {
            Err(anyhow!("Input path does not exist: {:?}", input_path))
        }
    }

    /// Process every media file below `input_dir`
    pub fn run_folder<P: AsRef<Path>>(&self, input_dir: P) -> Result<Vec<MediaSelection>> {
        let start_time = std::time::Instant::now();
        let input_dir = input_dir.as_ref();

        let media_files = FileManager::find_media_files(input_dir, &self.config)?;
        if media_files.is_empty() {
            warn!("No media files found in {:?}", input_dir);
            return Ok(Vec::new());
        }

        let folder_pb = ProgressBar::new(media_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result);
        folder_pb.set_message("Scanning side-files");

        let mut selections = Vec::with_capacity(media_files.len());
        for media in &media_files {
            match self.select_for_media(media) {
                Ok(selection) => selections.push(selection),
                Err(e) => warn!("Skipping {:?}: {:#}", media, e),
            }
            folder_pb.inc(1);
        }
        folder_pb.finish_and_clear();

        info!(
            "Scanned {} media file(s) in {:.2?}",
            media_files.len(),
            start_time.elapsed()
        );
        Ok(selections)
    }

    /// Pick the reference and target side-files of one media file
    pub fn select_for_media<P: AsRef<Path>>(&self, media: P) -> Result<MediaSelection> {
        let media = media.as_ref();
        let candidates = FileManager::find_side_files(media, &self.config)
            .with_context(|| format!("Failed to list side-files of {:?}", media))?;
        debug!("{} side-file candidate(s) for {:?}", candidates.len(), media);

        let selection = self.select_candidates(media, &candidates);
        match (&selection.reference, &selection.target) {
            (Some(reference), Some(target)) => {
                info!("{:?}: reference {} / target {}", media, reference, target)
            }
            _ => warn!("{:?}: missing reference or target side-file", media),
        }
        Ok(selection)
    }

    /// Run both slots over an explicit list of candidate paths
    pub fn select_candidates(&self, media: &Path, candidates: &[PathBuf]) -> MediaSelection {
        let mut reference = SelectionSlot::new();
        let mut target = SelectionSlot::new();
        let mut by_name = Vec::new();

        for path in candidates {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            let tag = match guess_language(name) {
                Ok(tag) => tag,
                Err(e) => {
                    debug!("{}", e);
                    continue;
                }
            };

            reference.consider(&self.reference, &tag, name);

            if self.config.dubs_only && classify(name) != SubtypeRank::Dub {
                debug!("'{}' ignored for the target: not dubtitles", name);
            } else {
                target.consider(&self.target, &tag, name);
            }

            by_name.push((name, path));
        }

        let resolve = |slot: SelectionSlot| {
            let subtype = slot.subtype();
            slot.into_best().and_then(|(tag, name)| {
                by_name
                    .iter()
                    .find(|(candidate, _)| *candidate == name)
                    .map(|(_, path)| SelectedFile {
                        path: path.to_path_buf(),
                        tag,
                        subtype: subtype.unwrap_or_default(),
                    })
            })
        };

        let reference = resolve(reference);
        let target = resolve(target);
        let target_is_cc_or_dub = target.as_ref().is_some_and(|t| t.subtype.is_cc_or_dub());

        MediaSelection {
            media: media.to_path_buf(),
            reference,
            target,
            target_is_cc_or_dub,
        }
    }
}
