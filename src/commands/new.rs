//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Site;

/// Scaffold a new content file with a front-matter block
pub fn run(site: &Site, title: &str) -> Result<()> {
    let slug = slug::slugify(title);
    fs::create_dir_all(&site.content_dir)?;

    let file_path = site.content_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let today = chrono::Local::now().format("%Y-%m-%d");
    let content = format!("---\ntitle: {}\ndate: {}\ndescription:\n---\n\n", title, today);

    fs::write(&file_path, content)?;
    println!("Created: {:?}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use tempfile::TempDir;

    #[test]
    fn test_new_post_scaffold_parses_back() {
        let dir = TempDir::new().unwrap();
        let site = crate::Site::new(dir.path()).unwrap();

        run(&site, "My First Post").unwrap();

        let path = site.content_dir.join("my-first-post.md");
        let text = fs::read_to_string(&path).unwrap();
        let (fm, _) = FrontMatter::parse(&text);
        assert_eq!(fm.get("title"), Some("My First Post"));
        assert!(fm.get("date").is_some());
    }

    #[test]
    fn test_new_post_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let site = crate::Site::new(dir.path()).unwrap();

        run(&site, "Same Title").unwrap();
        assert!(run(&site, "Same Title").is_err());
    }
}
