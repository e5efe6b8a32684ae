//! Stem/extension splitting and delimiter tokenization shared by both normalizers.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that separate tokens in a release name.
pub const DELIMITERS: &[char] = &['.', '-', '_', ' '];

/// Characters that mark a token as leftover bracket junk.
pub const BRACKET_CHARS: &[char] = &['[', ']', '{', '}', '(', ')'];

/// First `(YYYY)` with a plausible release year.
static PAREN_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((?P<year>(?:19|20)\d{2})\)").expect("valid year regex"));

/// A `_(YYYY)` suffix at the end of a stem.
static READY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_\((?:19|20)\d{2}\)$").expect("valid suffix regex"));

/// Split a filename into `(stem, extension)` at the final `.`.
///
/// Returns `None` when there is no extension or either side would be empty.
pub fn split_stem(filename: &str) -> Option<(&str, &str)> {
    let dot = filename.rfind('.')?;
    let (stem, ext) = (&filename[..dot], &filename[dot + 1..]);
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some((stem, ext))
}

/// Split a stem on runs of delimiters, dropping empty tokens.
pub fn tokenize(stem: &str) -> Vec<&str> {
    stem.split(DELIMITERS).filter(|t| !t.is_empty()).collect()
}

/// True for a bare 4-digit token in the 1900–2099 range.
pub fn is_year(token: &str) -> bool {
    token.len() == 4
        && token.bytes().all(|b| b.is_ascii_digit())
        && (token.starts_with("19") || token.starts_with("20"))
}

/// True for a non-empty token made only of ASCII digits.
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// True if the token contains any bracket or parenthesis.
pub fn has_bracket(token: &str) -> bool {
    token.contains(BRACKET_CHARS)
}

/// True if the stem already ends in `_(YYYY)`.
pub fn has_ready_suffix(stem: &str) -> bool {
    READY_SUFFIX.is_match(stem)
}

/// Remove the first `(YYYY)` from the stem, returning the year and the spliced stem.
pub fn take_paren_year(stem: &str) -> Option<(String, String)> {
    let caps = PAREN_YEAR.captures(stem)?;
    let whole = caps.get(0)?;
    let year = caps.name("year")?.as_str().to_string();
    let mut rest = String::with_capacity(stem.len());
    rest.push_str(&stem[..whole.start()]);
    rest.push_str(&stem[whole.end()..]);
    Some((year, rest))
}

/// Reduce any run of two or more underscores to a single `_`.
pub fn collapse_underscores(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_underscore = false;
    for c in text.chars() {
        if c == '_' {
            if !last_underscore {
                out.push(c);
            }
            last_underscore = true;
        } else {
            out.push(c);
            last_underscore = false;
        }
    }
    out
}
