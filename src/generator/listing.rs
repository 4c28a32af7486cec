//! Month grouping and the blog listing fragment

use chrono::Datelike;
use std::collections::HashMap;

use crate::content::PostRecord;
use crate::helpers::date::month_label;
use crate::helpers::html::escape_html;

/// Posts published within one calendar month
///
/// Derived from the sorted record collection on every build, never
/// persisted.
#[derive(Debug)]
pub struct MonthGroup<'a> {
    /// Human-readable label (like "March 2026")
    pub label: String,
    /// Records in document order (newest first within the group)
    pub posts: Vec<&'a PostRecord>,
}

/// Partition sorted records into month groups
///
/// Groups keep their first-seen order, which is chronological descending
/// when the input is already sorted.
pub fn group_by_month(records: &[PostRecord]) -> Vec<MonthGroup<'_>> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    let mut index: HashMap<(i32, u32), usize> = HashMap::new();

    for record in records {
        let key = (record.date.year(), record.date.month());
        match index.get(&key) {
            Some(&i) => groups[i].posts.push(record),
            None => {
                index.insert(key, groups.len());
                groups.push(MonthGroup {
                    label: month_label(&record.date),
                    posts: vec![record],
                });
            }
        }
    }

    groups
}

/// Render the grouped post list fragment for the blog page
///
/// Zero records render an empty fragment, not an error.
pub fn render_post_list(records: &[PostRecord]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for group in group_by_month(records) {
        lines.push(r#"      <div class="post-group">"#.to_string());
        lines.push(format!(
            r#"        <div class="post-group-label">{}</div>"#,
            escape_html(&group.label)
        ));
        lines.push(r#"        <ul class="post-list">"#.to_string());
        for post in &group.posts {
            lines.push(r#"          <li class="post-item">"#.to_string());
            lines.push(format!(
                r#"            <a href="posts/{}.html">{}</a>"#,
                escape_html(&post.slug),
                escape_html(&post.title)
            ));
            lines.push(format!(
                r#"            <span class="post-date">{}</span>"#,
                escape_html(&post.date_display)
            ));
            lines.push("          </li>".to_string());
        }
        lines.push("        </ul>".to_string());
        lines.push("      </div>".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{sort_records, PostRecord};
    use chrono::NaiveDate;

    fn record(title: &str, slug: &str, date: &str) -> PostRecord {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        PostRecord {
            title: title.to_string(),
            date,
            date_display: crate::helpers::date::display_date(&date),
            description: String::new(),
            slug: slug.to_string(),
            lang: "en".to_string(),
            dir: "ltr".to_string(),
        }
    }

    #[test]
    fn test_groups_preserve_descending_month_order() {
        let mut records = vec![
            record("Old", "old", "2025-11-20"),
            record("B", "b", "2026-03-01"),
            record("A", "a", "2026-03-15"),
            record("Dec", "dec", "2025-12-05"),
        ];
        sort_records(&mut records);

        let groups = group_by_month(&records);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["March 2026", "December 2025", "November 2025"]);
        assert_eq!(groups[0].posts[0].slug, "a");
        assert_eq!(groups[0].posts[1].slug, "b");
    }

    #[test]
    fn test_year_disambiguates_same_named_months() {
        let mut records = vec![
            record("This year", "this", "2026-03-01"),
            record("Last year", "last", "2025-03-01"),
        ];
        sort_records(&mut records);

        let groups = group_by_month(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "March 2026");
        assert_eq!(groups[1].label, "March 2025");
    }

    #[test]
    fn test_render_one_link_per_record() {
        let mut records = vec![
            record("Post A", "post-a", "2026-02-14"),
            record("Post B", "post-b", "2026-02-01"),
        ];
        sort_records(&mut records);

        let html = render_post_list(&records);
        assert_eq!(html.matches("<li class=\"post-item\">").count(), 2);
        assert_eq!(html.matches("post-group-label").count(), 1);
        assert!(html.contains("February 2026"));
        assert!(html.contains(r#"<a href="posts/post-a.html">Post A</a>"#));
        // Newest first within the group
        assert!(html.find("Post A").unwrap() < html.find("Post B").unwrap());
    }

    #[test]
    fn test_render_escapes_titles() {
        let records = vec![record("Tips & <tricks>", "tips", "2026-01-05")];
        let html = render_post_list(&records);
        assert!(html.contains("Tips &amp; &lt;tricks&gt;"));
    }

    #[test]
    fn test_render_empty_listing() {
        assert_eq!(render_post_list(&[]), "");
    }
}
