use crate::env::string_or;

#[derive(Clone, Debug)]
pub struct ApiKeyConfig {
    pub key: String,
}

impl ApiKeyConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn from_env() -> Self {
        Self {
            key: string_or("API_KEY", "learnhub-development-api-key"),
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        !self.key.is_empty() && self.key == candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let config = ApiKeyConfig::new("abc");
        assert!(config.matches("abc"));
        assert!(!config.matches("abd"));
        assert!(!ApiKeyConfig::new("").matches(""));
    }
}
