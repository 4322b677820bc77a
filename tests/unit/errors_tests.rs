/*!
 * Tests for error types and conversions
 */

use langpick::errors::{AppError, ConfigError, LangError};

#[test]
fn test_langError_invalidLanguageToken_shouldNameCode() {
    let error = LangError::InvalidLanguageToken {
        code: "zz".to_string(),
        token: "zz-ZZ".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("'zz'"));
    assert!(display.contains("zz-ZZ"));
}

#[test]
fn test_langError_noTagFound_shouldNameFile() {
    let error = LangError::NoTagFound { filename: "movie.srt".to_string() };
    assert!(error.to_string().contains("movie.srt"));
}

#[test]
fn test_appError_fromLangError_shouldWrap() {
    let error: AppError = LangError::NoTagFound { filename: "x".to_string() }.into();
    assert!(matches!(error, AppError::Language(_)));
    assert!(error.to_string().starts_with("Language error"));
}

#[test]
fn test_appError_fromConfigError_shouldWrap() {
    let error: AppError = ConfigError::Empty("media_extensions").into();
    assert!(matches!(error, AppError::Config(_)));
    assert!(error.to_string().contains("media_extensions"));
}

#[test]
fn test_appError_fromIoError_shouldBeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::File(ref msg) if msg.contains("missing")));
}

#[test]
fn test_appError_fromAnyhow_shouldBeUnknown() {
    let error: AppError = anyhow::anyhow!("boom").into();
    assert!(matches!(error, AppError::Unknown(ref msg) if msg == "boom"));
}
