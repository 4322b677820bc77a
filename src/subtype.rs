use std::fmt;

// @module: Side-file subtype classification from file name keywords

/// Functional category of a subtitle-like side-file, least to most preferred
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SubtypeRank {
    /// Subtitles with the SDH annotations removed
    StrippedSdh,
    /// Plain subtitles
    #[default]
    Sub,
    /// Transcript of the dubbed dialogue
    Dub,
    /// Closed captions
    Cc,
}

impl SubtypeRank {
    // @returns: Short display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::StrippedSdh => "stripped SDH",
            Self::Sub => "subtitles",
            Self::Dub => "dubtitles",
            Self::Cc => "closed captions",
        }
    }

    /// Closed captions and dubtitles follow the audio rather than a translation
    pub fn is_cc_or_dub(&self) -> bool {
        matches!(self, Self::Cc | Self::Dub)
    }
}

impl fmt::Display for SubtypeRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Keywords checked in order; the first contained one wins
const SUBTYPE_KEYWORDS: &[(&str, SubtypeRank)] = &[
    ("closedcaptions", SubtypeRank::Cc),
    ("dubtitles", SubtypeRank::Dub),
    ("subtitles", SubtypeRank::Sub),
    ("dialog", SubtypeRank::Sub),
    ("stripped_sdh", SubtypeRank::StrippedSdh),
];

/// Classify a file name by the subtype keyword it contains.
///
/// Names without any keyword are assumed to be ordinary subtitles.
pub fn classify(filename: &str) -> SubtypeRank {
    let lowered = filename.to_lowercase();

    SUBTYPE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|&(_, rank)| rank)
        .unwrap_or_default()
}
