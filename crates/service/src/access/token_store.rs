use std::collections::HashSet;

/// Static allow-list of shared-secret tokens, built once at startup.
///
/// Lookups compare the candidate against every configured token and do not
/// stop at the first differing byte. Only token length can leak through
/// timing.
#[derive(Clone, Debug, Default)]
pub struct TokenStore {
    tokens: HashSet<String>,
}

impl TokenStore {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| !t.is_empty())
            .collect();
        Self { tokens }
    }

    /// Exact match against one of the configured tokens. Empty never matches.
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.is_valid_bytes(candidate.as_bytes())
    }

    /// Same as `is_valid` for raw header bytes, which need not be ASCII.
    pub fn is_valid_bytes(&self, candidate: &[u8]) -> bool {
        if candidate.is_empty() {
            return false;
        }
        self.tokens
            .iter()
            .fold(false, |acc, token| acc | constant_time_eq(token.as_bytes(), candidate))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
