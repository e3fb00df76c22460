use core::str::Chars;

const QUOTES: [char; 2] = ['\'', '"'];

/// Split a token on its first `=`. The `=` itself is not included in either
/// half; everything after it, including any further `=`, is the second half.
#[inline]
#[must_use]
pub fn split_equals(token: &str) -> Option<(&str, &str)> {
    // `=` is ASCII, so both halves land on char boundaries.
    memchr::memchr(b'=', token.as_bytes()).map(|i| (&token[..i], &token[i + 1..]))
}

/// Remove every leading `-`.
#[inline]
#[must_use]
pub fn trim_dashes(token: &str) -> &str {
    token.trim_start_matches('-')
}

/// Remove every single and double quote from both ends.
#[inline]
#[must_use]
pub fn trim_quotes(token: &str) -> &str {
    token.trim_matches(QUOTES)
}

/// Remove exactly one layer of matching quotes, if the token has them.
/// Returns [`None`] if the token isn't wrapped in a matching pair.
#[inline]
#[must_use]
pub fn strip_quote_pair(token: &str) -> Option<&str> {
    match token.as_bytes() {
        [b'\'', .., b'\''] | [b'"', .., b'"'] => Some(&token[1..token.len() - 1]),
        _ => None,
    }
}

/// Remove whitespace, quotes, and dashes from both ends of a name, so that
/// `  '--name'  ` becomes `name`.
#[inline]
#[must_use]
pub fn trim_name(name: &str) -> &str {
    name.trim_matches(|c: char| c.is_whitespace() || c == '-' || QUOTES.contains(&c))
}

/// The individual flag characters of an abbreviation cluster, left to right,
/// with the leading dashes removed.
#[inline]
pub fn cluster_chars(token: &str) -> Chars<'_> {
    trim_dashes(token).chars()
}
