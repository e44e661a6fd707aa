// ABOUTME: Key set resolution against the process environment
// ABOUTME: Builds the immutable key/value mapping used for substitution

use std::collections::HashMap;
use std::env;

use super::error::{EngineError, Result};
use super::replacer::Replacer;

/// Resolved key/value mapping for one generation run.
///
/// Keys are checked in the order they were supplied; the mapping itself
/// carries no ordering.
#[derive(Debug, Clone)]
pub struct KeyValues {
    values: HashMap<String, String>,
}

impl KeyValues {
    /// Resolve every key against the environment.
    ///
    /// An unset variable and an empty one are treated the same: both abort
    /// the run before anything is written.
    pub fn from_env(keys: &[String]) -> Result<Self> {
        let mut values = HashMap::with_capacity(keys.len());

        for key in keys {
            match env::var(key) {
                Ok(value) if !value.is_empty() => {
                    values.insert(key.clone(), value);
                }
                _ => {
                    return Err(EngineError::MissingEnvironmentVariable { key: key.clone() });
                }
            }
        }

        Ok(Self { values })
    }

    /// Build one replacer per resolved key.
    pub fn replacers(&self) -> Vec<Replacer> {
        self.values
            .iter()
            .map(|(key, value)| Replacer::new(key, value))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_all_keys() {
        env::set_var("SAFEKEEPER_TEST_KEYS_A", "alpha");
        env::set_var("SAFEKEEPER_TEST_KEYS_B", "beta");

        let keys = vec![
            "SAFEKEEPER_TEST_KEYS_A".to_string(),
            "SAFEKEEPER_TEST_KEYS_B".to_string(),
        ];
        let resolved = KeyValues::from_env(&keys).unwrap();

        assert_eq!(resolved.len(), 2);
        assert_eq!(
            resolved.get("SAFEKEEPER_TEST_KEYS_A"),
            Some(&"alpha".to_string())
        );
        assert_eq!(
            resolved.get("SAFEKEEPER_TEST_KEYS_B"),
            Some(&"beta".to_string())
        );

        env::remove_var("SAFEKEEPER_TEST_KEYS_A");
        env::remove_var("SAFEKEEPER_TEST_KEYS_B");
    }

    #[test]
    fn test_unset_key_fails() {
        let keys = vec!["SAFEKEEPER_TEST_KEYS_UNSET".to_string()];
        let result = KeyValues::from_env(&keys);

        match result {
            Err(EngineError::MissingEnvironmentVariable { key }) => {
                assert_eq!(key, "SAFEKEEPER_TEST_KEYS_UNSET");
            }
            other => panic!("expected MissingEnvironmentVariable, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_value_fails() {
        env::set_var("SAFEKEEPER_TEST_KEYS_EMPTY", "");

        let keys = vec!["SAFEKEEPER_TEST_KEYS_EMPTY".to_string()];
        let result = KeyValues::from_env(&keys);
        assert!(result.is_err());

        env::remove_var("SAFEKEEPER_TEST_KEYS_EMPTY");
    }

    #[test]
    fn test_failure_reports_first_missing_key() {
        env::set_var("SAFEKEEPER_TEST_KEYS_PRESENT", "here");

        // Supply order decides which key the error names.
        let keys = vec![
            "SAFEKEEPER_TEST_KEYS_PRESENT".to_string(),
            "SAFEKEEPER_TEST_KEYS_GONE_1".to_string(),
            "SAFEKEEPER_TEST_KEYS_GONE_2".to_string(),
        ];

        match KeyValues::from_env(&keys) {
            Err(EngineError::MissingEnvironmentVariable { key }) => {
                assert_eq!(key, "SAFEKEEPER_TEST_KEYS_GONE_1");
            }
            other => panic!("expected MissingEnvironmentVariable, got {:?}", other),
        }

        env::remove_var("SAFEKEEPER_TEST_KEYS_PRESENT");
    }
}
