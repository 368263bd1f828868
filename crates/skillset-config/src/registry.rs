//! Keys the resolver actively asks for

/// Key holding the ticket tracker base URL used for PR descriptions
pub const TASKS_MANAGER_BASE_URL: &str = "tasksManagerSystemBaseUrl";

/// A configuration key paired with the question shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownKey {
    /// Key in `skills-configs.json`
    pub key: &'static str,
    /// Prompt shown when the key is missing
    pub prompt: &'static str,
}

/// Known keys, in prompt order
pub const KNOWN_KEYS: &[KnownKey] = &[KnownKey {
    key: TASKS_MANAGER_BASE_URL,
    prompt: "Enter your tasks manager system base URL used for ticket links \
             (e.g. https://your-company.atlassian.net/browse), or leave empty to skip: ",
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_base_url() {
        let keys: Vec<_> = KNOWN_KEYS.iter().map(|k| k.key).collect();
        assert_eq!(keys, vec![TASKS_MANAGER_BASE_URL]);
        assert!(KNOWN_KEYS.iter().all(|k| !k.prompt.is_empty()));
    }
}
