use isolang::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// @module: Language directory
//
// Resolves ISO 639-1 (2-letter), ISO 639-2/T, ISO 639-2/B and ISO 639-3
// (3-letter) codes as well as English language names to a canonical
// `isolang::Language` record.

/// ISO 639-2/B codes that differ from their ISO 639-2/T counterpart
static BIBLIOGRAPHIC_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("alb", "sqi"), // Albanian
        ("arm", "hye"), // Armenian
        ("baq", "eus"), // Basque
        ("bur", "mya"), // Burmese
        ("chi", "zho"), // Chinese
        ("cze", "ces"), // Czech
        ("dut", "nld"), // Dutch
        ("fre", "fra"), // French
        ("geo", "kat"), // Georgian
        ("ger", "deu"), // German
        ("gre", "ell"), // Greek
        ("ice", "isl"), // Icelandic
        ("mac", "mkd"), // Macedonian
        ("may", "msa"), // Malay
        ("mao", "mri"), // Maori
        ("per", "fas"), // Persian
        ("rum", "ron"), // Romanian
        ("slo", "slk"), // Slovak
        ("tib", "bod"), // Tibetan
        ("wel", "cym"), // Welsh
    ])
});

/// Resolve any recognized identifier (2 or 3-letter code, or English name)
/// to its canonical language record.
///
/// Codes are matched case-insensitively and surrounding whitespace is ignored.
/// Names are only tried for inputs longer than three characters so that
/// short noise never resolves through the name table.
pub fn lookup_language(code: &str) -> Option<Language> {
    let normalized_code = code.trim().to_lowercase();

    match normalized_code.len() {
        0 | 1 => None,
        2 => Language::from_639_1(&normalized_code),
        3 => Language::from_639_3(&normalized_code).or_else(|| {
            BIBLIOGRAPHIC_CODES
                .get(normalized_code.as_str())
                .and_then(|part2t| Language::from_639_3(part2t))
        }),
        _ => lookup_by_name(code.trim()),
    }
}

fn lookup_by_name(name: &str) -> Option<Language> {
    if let Some(lang) = Language::from_name(name) {
        return Some(lang);
    }

    // "english" and "ENGLISH" are both accepted for "English"
    let mut chars = name.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect::<String>(),
        None => return None,
    };
    Language::from_name(&capitalized)
}
