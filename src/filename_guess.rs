/*!
 * Language tag extraction from side-file names.
 *
 * The scanner looks for a BCP 47 style tag (`en`, `eng`, `pt-BR`, `zh-Hans`)
 * right before the extension of a file name, e.g. `Movie.en-US.srt`,
 * `Movie (fr).ass` or `Movie [de].srt`. It is a slightly improved version of
 * the lookup mpv performs when it auto-loads external subtitle files.
 *
 * Two attempts are made: the second one peels one more trailing segment so
 * that a qualifier after the tag (`Movie.en.forced.srt`) does not hide it.
 */

use log::trace;

use crate::errors::LangError;
use crate::lang_tag::LanguageTag;
use crate::language_utils::lookup_language;

/// Number of trailing segments peeled before giving up
const MAX_ATTEMPTS: usize = 2;

/// Letters allowed in a single subtag segment
const MAX_SEGMENT_LETTERS: usize = 8;

/// Location of a syntactically valid tag inside a file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpan<'a> {
    /// Byte offset of the tag in the original file name
    pub start: usize,
    /// Byte length of the tag, hyphens included
    pub len: usize,
    /// The tag text, e.g. `"en-US"`
    pub text: &'a str,
}

/// Guess the language of a side-file from its name.
///
/// Only the first subtag after the primary code is kept; a tag that is
/// well-formed but names no known language is reported as `NoTagFound`.
pub fn guess_language(filename: &str) -> Result<LanguageTag, LangError> {
    let no_tag = || LangError::NoTagFound {
        filename: filename.to_string(),
    };

    let span = find_language_tag(filename).ok_or_else(no_tag)?;

    let (code, subtag) = match span.text.split_once('-') {
        Some((code, rest)) => (code, rest.split('-').next()),
        None => (span.text, None),
    };

    let language = lookup_language(code).ok_or_else(no_tag)?;
    trace!("'{}' resolved to {} from tag '{}'", filename, language.to_639_3(), span.text);

    Ok(match subtag {
        Some(subtag) => LanguageTag::with_subtag(language, subtag),
        None => LanguageTag::new(language),
    })
}

/// Find where a language tag sits in a file name, without resolving it.
pub fn find_language_tag(filename: &str) -> Option<TagSpan<'_>> {
    let mut window = (0, filename.len());

    for attempt in 1..=MAX_ATTEMPTS {
        window = peel_suffix(filename, window);
        let (start, end) = window;

        if end - start < 2 {
            return None;
        }

        match scan_attempt(&filename.as_bytes()[start..end]) {
            Some((offset, len)) => {
                let tag_start = start + offset;
                return Some(TagSpan {
                    start: tag_start,
                    len,
                    text: &filename[tag_start..tag_start + len],
                });
            }
            None => trace!("attempt {} found no tag in '{}'", attempt, &filename[start..end]),
        }
    }

    None
}

/// Narrow `window` to its base name minus one extension, whitespace trimmed.
///
/// Windows are byte ranges of the original name so that a match maps back
/// to it without any offset bookkeeping by the caller.
fn peel_suffix(filename: &str, (start, end): (usize, usize)) -> (usize, usize) {
    let current = &filename[start..end];

    let base_start = current.rfind('/').map_or(0, |pos| pos + 1);
    let base = &current[base_start..];
    let stem = match base.rfind('.') {
        Some(dot) => &base[..dot],
        None => base,
    };

    let leading_ws = stem.len() - stem.trim_start().len();
    let trimmed_len = stem.trim().len();

    let new_start = start + base_start + leading_ws;
    (new_start, new_start + trimmed_len)
}

/// Backward scan of one working string.
///
/// Returns the tag's byte offset and length relative to `name` when the
/// trailing characters form a valid tag.
fn scan_attempt(name: &[u8]) -> Option<(usize, usize)> {
    let byte_at = |cursor: isize| -> Option<u8> {
        usize::try_from(cursor).ok().and_then(|idx| name.get(idx).copied())
    };

    let mut cursor = name.len() as isize - 1;
    let mut delimiter = b'.';
    if byte_at(cursor) == Some(b')') {
        delimiter = b'(';
        cursor -= 1;
    }
    if byte_at(cursor) == Some(b']') {
        delimiter = b'[';
        cursor -= 1;
    }

    let mut valid = true;
    let mut length = 0;
    let mut boundary = 0;

    loop {
        while byte_at(cursor).is_some_and(|b| b.is_ascii_alphabetic()) {
            length += 1;
            cursor -= 1;
        }

        if length < boundary + 1 || length > boundary + MAX_SEGMENT_LETTERS {
            valid = false;
        }

        if byte_at(cursor) == Some(b'-') {
            length += 1;
            cursor -= 1;
            boundary = length;
        } else {
            break;
        }
    }

    // Primary subtag is 2 or 3 letters and something must come before the delimiter
    if length < boundary + 2
        || length > boundary + 3
        || cursor <= 0
        || byte_at(cursor) != Some(delimiter)
    {
        valid = false;
    }

    let start = (cursor + 1) as usize;
    if length > boundary + 3 && !name[start..start + length].contains(&b'-') {
        valid = false;
    }

    valid.then_some((start, length))
}
