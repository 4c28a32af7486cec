//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
///
/// Passed into the generator at construction; there is no process-wide
/// state, so tests can build sites from fixture configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // URL
    pub url: String,

    // Directory
    pub content_dir: String,
    pub pages_dir: String,
    pub templates_dir: String,
    pub static_dir: String,
    pub output_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            language: "en".to_string(),

            url: "https://example.com".to_string(),

            content_dir: "content/posts".to_string(),
            pages_dir: "pages".to_string(),
            templates_dir: "templates".to_string(),
            static_dir: "static".to_string(),
            output_dir: "dist".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.language, "en");
        assert_eq!(config.output_dir, "dist");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Essa
url: https://essankov.github.io
description: Personal blog
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Essa");
        assert_eq!(config.url, "https://essankov.github.io");
        assert_eq!(config.description, "Personal blog");
        // Unspecified fields keep their defaults
        assert_eq!(config.content_dir, "content/posts");
    }
}
