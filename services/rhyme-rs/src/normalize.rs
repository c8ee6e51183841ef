//! Punctuation handling for written verse.

/// Typographic marks that are not ASCII punctuation
const TYPOGRAPHIC_PUNCTUATION: &[char] = &['–', '—', '«', '»', '“', '”', '„', '‘', '’', '…', '¡', '¿'];

fn is_punctuation_char(c: char) -> bool {
    c.is_ascii_punctuation() || TYPOGRAPHIC_PUNCTUATION.contains(&c)
}

/// True for a non-empty token made only of punctuation
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_punctuation_char)
}

/// Remove punctuation and collapse whitespace
pub fn strip_punctuation(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| !is_punctuation_char(*c))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Last word of a verse line, lower-cased and without punctuation.
///
/// Tokens may hold several words. Falls back to the last raw token when
/// every token is punctuation; `None` for a line with no tokens at all.
pub fn last_word<S: AsRef<str>>(tokens: &[S]) -> Option<String> {
    let stripped = tokens.iter().rev().find_map(|token| {
        strip_punctuation(token.as_ref())
            .split_whitespace()
            .last()
            .map(str::to_string)
    });

    stripped
        .or_else(|| tokens.last().map(|t| t.as_ref().trim().to_string()))
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
}
