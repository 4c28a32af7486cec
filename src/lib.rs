//! papyrus: a small Markdown blog generator
//!
//! Turns a tree of Markdown posts, page fragments, and placeholder
//! templates into a deployable set of HTML pages, a grouped blog
//! listing, and an RSS feed.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main site handle
///
/// Configuration plus the resolved input and output directories;
/// everything downstream receives these explicitly.
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Markdown content directory
    pub content_dir: std::path::PathBuf,
    /// Page fragment directory
    pub pages_dir: std::path::PathBuf,
    /// Template directory
    pub templates_dir: std::path::PathBuf,
    /// Static asset directory
    pub static_dir: std::path::PathBuf,
    /// Output directory
    pub output_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site instance from a base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("site.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let pages_dir = base_dir.join(&config.pages_dir);
        let templates_dir = base_dir.join(&config.templates_dir);
        let static_dir = base_dir.join(&config.static_dir);
        let output_dir = base_dir.join(&config.output_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            pages_dir,
            templates_dir,
            static_dir,
            output_dir,
        })
    }

    /// Build the static site
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Remove the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Scaffold a new post
    pub fn new_post(&self, title: &str) -> Result<()> {
        commands::new::run(self, title)
    }
}
