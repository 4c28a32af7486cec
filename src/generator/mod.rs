//! Generator module - builds the output tree from content, pages, and templates

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::content::{sort_records, FrontMatter, MarkdownRenderer, PostRecord};
use crate::helpers::date::{display_date, parse_date};
use crate::helpers::html::escape_html;
use crate::helpers::text::reading_time;
use crate::templates::{render, RenderContext, TemplateSet};
use crate::Site;

pub mod feed;
pub mod listing;
pub mod meta;

use meta::PageKind;

/// Preload line injected into Arabic post pages
const ARABIC_FONT_PRELOAD: &str = "  <link rel=\"preload\" href=\"../fonts/Jali-Arabic-Regular.woff2\" as=\"font\" type=\"font/woff2\" crossorigin>\n";

/// Errors that abort the whole build
#[derive(Debug, Error)]
pub enum BuildError {
    /// Two content files resolved to the same output path
    #[error("duplicate slug `{slug}` in {file:?}, already used by {first:?}")]
    SlugCollision {
        slug: String,
        file: PathBuf,
        first: PathBuf,
    },

    /// A date was present in front-matter but could not be parsed
    #[error("invalid date `{value}` in {file:?}")]
    InvalidDate { value: String, file: PathBuf },
}

/// Static site generator
pub struct Generator<'a> {
    site: &'a Site,
    templates: TemplateSet,
    renderer: MarkdownRenderer,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    ///
    /// Fails fast when the base template is missing.
    pub fn new(site: &'a Site) -> Result<Self> {
        let templates = TemplateSet::load(&site.templates_dir)?;

        Ok(Self {
            site,
            templates,
            renderer: MarkdownRenderer::new(),
        })
    }

    /// Generate the entire site
    ///
    /// Stages run in strict order; each depends on the previous one.
    pub fn generate(&self) -> Result<()> {
        // Clean destination, then rebuild it from scratch
        if self.site.output_dir.exists() {
            fs::remove_dir_all(&self.site.output_dir)
                .with_context(|| format!("Failed to clean {:?}", self.site.output_dir))?;
        }
        fs::create_dir_all(self.site.output_dir.join("posts"))
            .with_context(|| format!("Failed to create {:?}", self.site.output_dir))?;

        self.copy_static()?;

        let mut records = self.build_posts()?;
        sort_records(&mut records);

        self.build_listing(&records)?;
        self.build_pages()?;
        self.build_feed(&records)?;

        Ok(())
    }

    /// Copy the static asset tree verbatim into the output root
    fn copy_static(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() {
                let relative = path.strip_prefix(static_dir)?;
                let dest = self.site.output_dir.join(relative);

                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &dest)
                    .with_context(|| format!("Failed to copy asset {:?}", path))?;
                copied += 1;
            }
        }

        tracing::info!("Copied {} static assets", copied);
        Ok(())
    }

    /// Build every post page, returning the collected records
    fn build_posts(&self) -> Result<Vec<PostRecord>> {
        let content_dir = &self.site.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut sources: Vec<PathBuf> = fs::read_dir(content_dir)
            .with_context(|| format!("Failed to read content directory {:?}", content_dir))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && is_markdown_file(p))
            .collect();
        sources.sort();

        let mut records = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for path in sources {
            let record = self
                .build_post(&path)
                .with_context(|| format!("Failed to build post {:?}", path))?;

            // A later post must never silently overwrite an earlier one
            if let Some(first) = seen.get(&record.slug) {
                return Err(BuildError::SlugCollision {
                    slug: record.slug,
                    file: path,
                    first: first.clone(),
                }
                .into());
            }
            seen.insert(record.slug.clone(), path);
            records.push(record);
        }

        tracing::info!("Built {} posts", records.len());
        Ok(records)
    }

    /// Build one post page and its record
    fn build_post(&self, path: &Path) -> Result<PostRecord> {
        let text = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&text);

        // A document missing any or all metadata still builds
        let title = fm.get("title").unwrap_or("Untitled").to_string();
        let description = fm.get("description").unwrap_or("").to_string();
        let lang = fm.get("lang").unwrap_or("en").to_string();
        let dir = fm.get("dir").unwrap_or("ltr").to_string();
        let slug = match fm.get("slug") {
            Some(s) => s.to_string(),
            None => slug_from_filename(path),
        };
        let date = match fm.get("date") {
            Some(value) => parse_date(value).ok_or_else(|| BuildError::InvalidDate {
                value: value.to_string(),
                file: path.to_path_buf(),
            })?,
            None => default_date(),
        };

        let body_html = self.renderer.render(body);
        let date_display = display_date(&date);
        let rt = reading_time(body, &lang);
        let back_text = if lang == "ar" {
            "جميع المقالات"
        } else {
            "All posts"
        };

        let nav = self.build_nav("../", "");
        let post_body = format!(
            "\n{}\n\n  <main class=\"main\">\n    <div class=\"content\">\n\n      <a href=\"../blog.html\" class=\"back-link\">{}</a>\n\n      <header class=\"post-header\">\n        <h1>{}</h1>\n        <div class=\"post-meta\">\n          <span>{}</span>\n          <span class=\"reading-time\">{}</span>\n        </div>\n      </header>\n\n      <article class=\"post-content\">{}</article>\n\n{}\n\n    </div>\n  </main>\n",
            nav,
            back_text,
            escape_html(&title),
            date_display,
            rt,
            body_html,
            self.build_footer(),
        );

        let extra_preloads = if lang == "ar" { ARABIC_FONT_PRELOAD } else { "" };

        let page_title = format!("{} — {}", title, self.site.config.title);
        let url = format!(
            "{}/posts/{}.html",
            self.site.config.url.trim_end_matches('/'),
            slug
        );
        let meta_tags = meta::build_meta_tags(&page_title, &description, PageKind::Article, &url);

        let html = self.render_page(&lang, &dir, &page_title, &meta_tags, "../", extra_preloads, &post_body);

        let output_path = self.site.output_dir.join("posts").join(format!("{}.html", slug));
        fs::write(&output_path, html)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated post: {:?}", output_path);

        Ok(PostRecord {
            title,
            date,
            date_display,
            description,
            slug,
            lang,
            dir,
        })
    }

    /// Build blog.html with the post list grouped by month
    fn build_listing(&self, records: &[PostRecord]) -> Result<()> {
        let post_list = listing::render_post_list(records);

        let fragment = self.read_page_fragment("blog.html")?;
        let mut fragment_ctx = RenderContext::new();
        fragment_ctx.insert("post_list", post_list);
        let blog_content = render(&fragment, &fragment_ctx);

        let nav = self.build_nav("", "blog");
        let body = format!(
            "\n{}\n\n  <main class=\"main\">\n    <div class=\"content\">\n\n      {}\n\n{}\n\n    </div>\n  </main>\n",
            nav,
            blog_content,
            self.build_footer(),
        );

        let title = format!("Blog — {}", self.site.config.title);
        let url = format!("{}/blog.html", self.site.config.url.trim_end_matches('/'));
        let meta_tags =
            meta::build_meta_tags(&title, &self.site.config.description, PageKind::Website, &url);

        let html = self.render_page("en", "ltr", &title, &meta_tags, "", "", &body);

        let output_path = self.site.output_dir.join("blog.html");
        fs::write(&output_path, html)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::info!("Generated blog.html");

        Ok(())
    }

    /// Build the simple pages: index.html, about.html, 404.html
    fn build_pages(&self) -> Result<()> {
        let site_url = self.site.config.url.trim_end_matches('/');
        let site_title = &self.site.config.title;

        // Index (hero page, no nav and no footer)
        let index_fragment = self.read_page_fragment("index.html")?;
        let index_body = self.build_hero_body(&index_fragment);
        let meta_tags = meta::build_meta_tags(
            site_title,
            &self.site.config.description,
            PageKind::Website,
            &format!("{}/", site_url),
        );
        let html = self.render_page("en", "ltr", site_title, &meta_tags, "", "", &index_body);
        fs::write(self.site.output_dir.join("index.html"), html)?;
        tracing::info!("Generated index.html");

        // About
        let about_fragment = self.read_page_fragment("about.html")?;
        let nav = self.build_nav("", "about");
        let about_body = format!(
            "\n{}\n\n  <main class=\"main\">\n    <div class=\"content\">\n\n      <section class=\"post-header\">\n        <h1>About</h1>\n      </section>\n\n      <div class=\"about-content\">\n        {}      </div>\n\n{}\n\n    </div>\n  </main>\n",
            nav,
            about_fragment,
            self.build_footer(),
        );
        let title = format!("About — {}", site_title);
        let meta_tags = meta::build_meta_tags(
            &title,
            &self.site.config.description,
            PageKind::Website,
            &format!("{}/about.html", site_url),
        );
        let html = self.render_page("en", "ltr", &title, &meta_tags, "", "", &about_body);
        fs::write(self.site.output_dir.join("about.html"), html)?;
        tracing::info!("Generated about.html");

        // 404 (hero page, no meta tags)
        let four04_fragment = self.read_page_fragment("404.html")?;
        let four04_body = self.build_hero_body(&four04_fragment);
        let title = format!("404 — {}", site_title);
        let html = self.render_page("en", "ltr", &title, "", "", "", &four04_body);
        fs::write(self.site.output_dir.join("404.html"), html)?;
        tracing::info!("Generated 404.html");

        Ok(())
    }

    /// Build feed.xml from the sorted records
    fn build_feed(&self, records: &[PostRecord]) -> Result<()> {
        let rss = feed::build_feed(&self.site.config, records);

        let output_path = self.site.output_dir.join("feed.xml");
        fs::write(&output_path, rss)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::info!("Generated feed.xml");

        Ok(())
    }

    /// Render the base template with the full placeholder set
    ///
    /// Every placeholder the template declares is always supplied, so no
    /// raw `{{...}}` marker can leak into output.
    #[allow(clippy::too_many_arguments)]
    fn render_page(
        &self,
        lang: &str,
        dir: &str,
        title: &str,
        meta_tags: &str,
        root: &str,
        extra_preloads: &str,
        body: &str,
    ) -> String {
        let mut context = RenderContext::new();
        context.insert("lang", lang);
        context.insert("dir", dir);
        context.insert("title", escape_html(title));
        context.insert("meta_tags", meta_tags);
        context.insert("root", root);
        context.insert("extra_preloads", extra_preloads);
        context.insert("body", body);
        render(self.templates.base(), &context)
    }

    /// Read one fragment from the pages directory
    fn read_page_fragment(&self, name: &str) -> Result<String> {
        let path = self.site.pages_dir.join(name);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read page fragment {:?}", path))
    }

    /// Nav bar with the active link highlighted and root-prefixed hrefs
    fn build_nav(&self, root: &str, active: &str) -> String {
        let blog_cls = if active == "blog" { " class=\"active\"" } else { "" };
        let about_cls = if active == "about" { " class=\"active\"" } else { "" };
        format!(
            "  <nav class=\"topnav\">\n    <div class=\"topnav-logo\"><a href=\"{}index.html\">{}</a></div>\n    <ul class=\"topnav-links\">\n      <li><a href=\"{}blog.html\"{}>Blog</a></li>\n      <li><a href=\"{}about.html\"{}>About</a></li>\n      <li>\n        <button class=\"theme-toggle\" id=\"theme-toggle\" aria-label=\"Toggle theme\">\n          <span class=\"icon\">&#9790;</span>\n          <span class=\"label\">Dark</span>\n        </button>\n      </li>\n    </ul>\n  </nav>",
            root,
            escape_html(&self.site.config.title),
            root,
            blog_cls,
            root,
            about_cls,
        )
    }

    /// Shared page footer
    fn build_footer(&self) -> String {
        format!(
            "      <footer class=\"footer\">\n        <p>&copy; {} {}. All rights reserved.</p>\n      </footer>",
            Utc::now().year(),
            escape_html(&self.site.config.title),
        )
    }

    /// Hero layout used by index.html and 404.html
    fn build_hero_body(&self, fragment: &str) -> String {
        format!(
            "\n  <main class=\"main\">\n    <div class=\"hero\">\n      {}    </div>\n  </main>\n",
            fragment
        )
    }
}

/// Date applied when front-matter has none
fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

/// Default slug: slugified file stem
fn slug_from_filename(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");
    slug::slugify(stem)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
