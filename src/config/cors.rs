use std::env;

/// CORS configuration for the API.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    /// Origins allowed to call the API, comma-separated in the environment
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Self {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(origins) if !origins.trim().is_empty() => Self {
                allowed_origins: origins
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect(),
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_localhost() {
        let config = CorsConfig::default();
        assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
    }
}
