pub trait Normalizer {
    fn normalize(&self, token: &str) -> String;
}

/// Keeps ASCII letters, lowercased. Everything else is dropped.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsciiNormalizer {}

impl AsciiNormalizer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Normalizer for AsciiNormalizer {
    fn normalize(&self, token: &str) -> String {
        normalize(token)
    }
}

/// Maps a token to its lookup key: the ASCII letters of `token`, lowercased,
/// in order.
///
/// A token without letters gives an empty key, which is not a checkable word.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Whether `token` has anything left to check after normalization.
pub fn is_checkable(token: &str) -> bool {
    token.chars().any(|ch| ch.is_ascii_alphabetic())
}
