//! Post record model

use chrono::NaiveDate;

/// Metadata produced by building one content file
///
/// Never mutated after creation; the listing page and the feed are two
/// projections of the same sorted record collection.
#[derive(Debug, Clone)]
pub struct PostRecord {
    /// Post title
    pub title: String,

    /// Publication date (calendar date, no time component)
    pub date: NaiveDate,

    /// Formatted display date (like "Feb 14, 2026")
    pub date_display: String,

    /// Short description for meta tags and the feed
    pub description: String,

    /// URL-safe identifier, unique across the site
    pub slug: String,

    /// Language code (defaults to "en")
    pub lang: String,

    /// Text direction (defaults to "ltr")
    pub dir: String,
}

impl PostRecord {
    /// Permanent URL of the post page
    pub fn permalink(&self, site_url: &str) -> String {
        format!("{}/posts/{}.html", site_url.trim_end_matches('/'), self.slug)
    }
}

/// Sort records newest first
///
/// Ties on the date are broken by descending slug so the global order
/// is deterministic.
pub fn sort_records(records: &mut [PostRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.slug.cmp(&a.slug)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str, date: &str) -> PostRecord {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        PostRecord {
            title: slug.to_string(),
            date,
            date_display: crate::helpers::date::display_date(&date),
            description: String::new(),
            slug: slug.to_string(),
            lang: "en".to_string(),
            dir: "ltr".to_string(),
        }
    }

    #[test]
    fn test_sort_newest_first() {
        let mut records = vec![record("old", "2025-12-01"), record("new", "2026-02-14")];
        sort_records(&mut records);
        assert_eq!(records[0].slug, "new");
        assert_eq!(records[1].slug, "old");
    }

    #[test]
    fn test_sort_equal_dates_break_ties_on_descending_slug() {
        let mut records = vec![record("a-post", "2026-03-01"), record("b-post", "2026-03-01")];
        sort_records(&mut records);
        assert_eq!(records[0].slug, "b-post");
        assert_eq!(records[1].slug, "a-post");
    }

    #[test]
    fn test_permalink() {
        let rec = record("hello-world", "2026-01-01");
        assert_eq!(
            rec.permalink("https://example.com/"),
            "https://example.com/posts/hello-world.html"
        );
    }
}
