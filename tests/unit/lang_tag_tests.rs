/*!
 * Tests for language tags and preference list parsing
 */

use isolang::Language;
use langpick::errors::LangError;
use langpick::lang_tag::{LanguageTag, PreferenceList, parse_preferences};

#[test]
fn test_parse_preferences_withValidTokens_shouldKeepOrder() {
    let prefs = parse_preferences(["en-US", "fr", "pt-BR"]).unwrap();

    let tags: Vec<&LanguageTag> = prefs.iter().collect();
    assert_eq!(tags.len(), 3);
    assert_eq!(*tags[0], LanguageTag::with_subtag(Language::Eng, "US"));
    assert_eq!(*tags[1], LanguageTag::new(Language::Fra));
    assert_eq!(*tags[2], LanguageTag::with_subtag(Language::Por, "BR"));
}

#[test]
fn test_parse_preferences_withUnknownCode_shouldFailWithoutPartialList() {
    let result = parse_preferences(["en-US", "zz-ZZ"]);

    assert_eq!(
        result,
        Err(LangError::InvalidLanguageToken {
            code: "zz".to_string(),
            token: "zz-ZZ".to_string(),
        })
    );
    assert!(result.unwrap_err().to_string().contains("'zz'"));
}

#[test]
fn test_parse_preferences_withEmptyInput_shouldReturnEmptyList() {
    let prefs = parse_preferences(Vec::<String>::new()).unwrap();
    assert!(prefs.is_empty());
}

#[test]
fn test_position_withSubtags_shouldCompareExactly() {
    let prefs = parse_preferences(["en-US", "en"]).unwrap();

    assert_eq!(prefs.position(&LanguageTag::with_subtag(Language::Eng, "US")), Some(0));
    assert_eq!(prefs.position(&LanguageTag::new(Language::Eng)), Some(1));
    // Subtags are case-sensitive
    assert_eq!(prefs.position(&LanguageTag::with_subtag(Language::Eng, "us")), None);
    assert!(!prefs.contains(&LanguageTag::with_subtag(Language::Eng, "GB")));
}

#[test]
fn test_tag_equality_withDifferentCodeForms_shouldMatchSameRecord() {
    let two_letter: LanguageTag = "de-AT".parse().unwrap();
    let bibliographic: LanguageTag = "ger-AT".parse().unwrap();
    assert_eq!(two_letter, bibliographic);
    assert_eq!(two_letter.code(), "deu");
    assert_eq!(two_letter.name(), "German");
}

#[test]
fn test_preference_list_fromStr_shouldSplitOnCommas() {
    let prefs: PreferenceList = "en-US, fr ,,ja".parse().unwrap();
    assert_eq!(prefs.len(), 3);
    assert_eq!(prefs.first(), Some(&LanguageTag::with_subtag(Language::Eng, "US")));
    assert_eq!(prefs.to_string(), "en-US,fr,ja");
}
