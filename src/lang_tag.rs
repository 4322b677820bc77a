/*!
 * Language tags and user preference lists.
 *
 * A `LanguageTag` pairs a canonical language record with an optional
 * secondary subtag (an ISO 3166-1 region or an ISO 15924 script, kept as
 * an opaque string). A `PreferenceList` is the user's ordered ranking of
 * acceptable tags, most wanted first.
 */

use isolang::Language;
use std::fmt;
use std::str::FromStr;

use crate::errors::LangError;
use crate::language_utils::lookup_language;

/// A language record plus an optional region or script subtag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    /// Canonical language record
    pub language: Language,

    /// Region or script qualifier, compared case-sensitively as supplied
    pub subtag: Option<String>,
}

impl LanguageTag {
    /// Tag without a subtag
    pub fn new(language: Language) -> Self {
        Self { language, subtag: None }
    }

    /// Tag with a subtag; an empty subtag is the same as none
    pub fn with_subtag(language: Language, subtag: impl Into<String>) -> Self {
        let subtag = subtag.into();
        Self {
            language,
            subtag: (!subtag.is_empty()).then_some(subtag),
        }
    }

    /// Parse a `primary[-subtag[-ignored...]]` token.
    ///
    /// Only the first segment after the primary code is kept as subtag.
    pub fn parse(token: &str) -> Result<Self, LangError> {
        let mut parts = token.split('-');
        let code = parts.next().unwrap_or_default();

        let language = lookup_language(code).ok_or_else(|| LangError::InvalidLanguageToken {
            code: code.to_string(),
            token: token.to_string(),
        })?;

        Ok(match parts.next() {
            Some(subtag) => Self::with_subtag(language, subtag),
            None => Self::new(language),
        })
    }

    /// ISO 639-3 code of the language record
    pub fn code(&self) -> &'static str {
        self.language.to_639_3()
    }

    /// English name of the language record
    pub fn name(&self) -> &'static str {
        self.language.to_name()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.language.to_639_1().unwrap_or_else(|| self.language.to_639_3());
        match &self.subtag {
            Some(subtag) => write!(f, "{}-{}", code, subtag),
            None => write!(f, "{}", code),
        }
    }
}

impl FromStr for LanguageTag {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Ordered list of desired language tags, index 0 being the most preferred
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceList {
    tags: Vec<LanguageTag>,
}

impl PreferenceList {
    /// Priority rank of a tag, or `None` when the tag is not desired
    pub fn position(&self, tag: &LanguageTag) -> Option<usize> {
        self.tags.iter().position(|candidate| candidate == tag)
    }

    /// Whether the tag appears in the list
    pub fn contains(&self, tag: &LanguageTag) -> bool {
        self.position(tag).is_some()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageTag> {
        self.tags.iter()
    }

    /// Most preferred tag
    pub fn first(&self) -> Option<&LanguageTag> {
        self.tags.first()
    }
}

impl From<Vec<LanguageTag>> for PreferenceList {
    fn from(tags: Vec<LanguageTag>) -> Self {
        Self { tags }
    }
}

impl fmt::Display for PreferenceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.tags.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join(","))
    }
}

/// Comma-separated form, e.g. `"en-US,fr"`
impl FromStr for PreferenceList {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_preferences(s.split(',').map(str::trim).filter(|token| !token.is_empty()))
    }
}

/// Turn user-declared tokens into an ordered preference list.
///
/// Fails on the first token whose primary code is unknown; no partial list
/// is returned.
pub fn parse_preferences<I, S>(tokens: I) -> Result<PreferenceList, LangError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| LanguageTag::parse(token.as_ref()))
        .collect::<Result<Vec<_>, _>>()
        .map(PreferenceList::from)
}
