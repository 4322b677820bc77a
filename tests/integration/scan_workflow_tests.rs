/*!
 * End-to-end tests for scanning a media library
 */

use anyhow::Result;
use isolang::Language;
use std::path::PathBuf;
use langpick::app_config::Config;
use langpick::app_controller::Controller;
use langpick::lang_tag::LanguageTag;
use langpick::subtype::SubtypeRank;
use crate::common;

fn config(reference: &[&str], target: &str) -> Config {
    Config {
        reference_languages: reference.iter().map(|s| s.to_string()).collect(),
        target_language: target.to_string(),
        ..Config::default()
    }
}

/// Test a single media file gets the best reference and target side-files
#[test]
fn test_run_withSingleFile_shouldPickBestSideFiles() -> Result<()> {
    common::init_test_logger();
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    let media = common::create_test_media(root, "Movie.mkv")?;
    for name in [
        "Movie.fr.srt",
        "Movie.en.srt",
        "Movie.en.stripped_sdh.srt",
        "Movie.ja.srt",
        "Movie.ja.closedcaptions.srt",
        "Movie.de.closedcaptions.srt",
        "Movie.srt",
    ] {
        common::create_test_subtitle(root, name)?;
    }

    let controller = Controller::with_config(config(&["en", "fr"], "ja"))?;
    let selections = controller.run(&media)?;

    assert_eq!(selections.len(), 1);
    let selection = &selections[0];
    assert_eq!(selection.media, media);

    let reference = selection.reference.as_ref().expect("reference side-file");
    assert_eq!(reference.path, root.join("Movie.en.srt"));
    assert_eq!(reference.tag, LanguageTag::new(Language::Eng));
    assert_eq!(reference.subtype, SubtypeRank::Sub);

    let target = selection.target.as_ref().expect("target side-file");
    assert_eq!(target.path, root.join("Movie.ja.closedcaptions.srt"));
    assert_eq!(target.subtype, SubtypeRank::Cc);
    assert!(selection.target_is_cc_or_dub);
    Ok(())
}

/// Test a directory run covers every media file and resets slots per file
#[test]
fn test_run_withDirectory_shouldProcessEachMediaFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_media(root, "ep1.mkv")?;
    common::create_test_media(root, "ep2.mp4")?;
    common::create_test_subtitle(root, "ep1.en-US.srt")?;
    common::create_test_subtitle(root, "ep1 (es).srt")?;
    common::create_test_subtitle(root, "ep2.en.srt")?;
    common::create_test_media(root, "ep1.media/ep1.mkv")?;

    let controller = Controller::with_config(config(&["en-US", "en"], "es"))?;
    let selections = controller.run(root)?;

    assert_eq!(selections.len(), 2);

    let ep1 = &selections[0];
    assert_eq!(ep1.media, root.join("ep1.mkv"));
    assert_eq!(ep1.reference.as_ref().map(|f| f.path.clone()), Some(root.join("ep1.en-US.srt")));
    assert_eq!(ep1.target.as_ref().map(|f| f.path.clone()), Some(root.join("ep1 (es).srt")));
    assert!(!ep1.target_is_cc_or_dub);

    let ep2 = &selections[1];
    assert_eq!(ep2.media, root.join("ep2.mp4"));
    assert_eq!(ep2.reference.as_ref().map(|f| f.path.clone()), Some(root.join("ep2.en.srt")));
    assert!(ep2.target.is_none());
    Ok(())
}

/// Test dubs-only mode ignores plain target subtitles
#[test]
fn test_select_candidates_withDubsOnly_shouldRequireDubtitles() -> Result<()> {
    let mut cfg = config(&["en"], "es");
    cfg.dubs_only = true;
    let controller = Controller::with_config(cfg)?;

    let media = PathBuf::from("Movie.mkv");
    let plain = vec![PathBuf::from("Movie.es.srt"), PathBuf::from("Movie.es.closedcaptions.srt")];
    let selection = controller.select_candidates(&media, &plain);
    assert!(selection.target.is_none());

    let with_dub = vec![PathBuf::from("Movie.es.srt"), PathBuf::from("Movie.es.dubtitles.srt")];
    let selection = controller.select_candidates(&media, &with_dub);
    let target = selection.target.expect("dubtitles should be selected");
    assert_eq!(target.path, PathBuf::from("Movie.es.dubtitles.srt"));
    assert!(selection.target_is_cc_or_dub);
    Ok(())
}

/// Test untagged side-files never fill a slot
#[test]
fn test_select_candidates_withUntaggedFiles_shouldLeaveSlotsEmpty() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;

    let candidates = vec![PathBuf::from("Movie.srt"), PathBuf::from("Movie.english.srt")];
    let selection = controller.select_candidates(&PathBuf::from("Movie.mkv"), &candidates);

    assert!(selection.reference.is_none());
    assert!(selection.target.is_none());
    Ok(())
}

/// Test invalid configuration is refused up front
#[test]
fn test_with_config_withInvalidLanguage_shouldFail() {
    assert!(Controller::with_config(config(&["en", "zz"], "ja")).is_err());
    assert!(Controller::with_config(config(&["en"], "qq")).is_err());
}

/// Test a missing input path is an error
#[test]
fn test_run_withMissingPath_shouldFail() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;
    assert!(controller.run("./definitely/not/here.mkv").is_err());
    Ok(())
}
