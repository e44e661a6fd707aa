// ABOUTME: Literal token replacement rules for resolved keys
// ABOUTME: Maps ENV_<key> occurrences to their environment values

/// Prefix that turns a key name into its placeholder token.
pub const TOKEN_PREFIX: &str = "ENV_";

/// A single substitution rule: the literal token `ENV_<key>` and the value
/// that replaces it. Replacers are independent of each other; keys are
/// assumed not to overlap.
#[derive(Debug, Clone)]
pub struct Replacer {
    token: String,
    value: String,
}

impl Replacer {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            token: format!("{}{}", TOKEN_PREFIX, key),
            value: value.to_string(),
        }
    }

    /// Replace every occurrence of the token in a single line.
    pub fn apply(&self, line: &str) -> String {
        line.replace(&self.token, &self.value)
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}
