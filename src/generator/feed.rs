//! RSS 2.0 feed serialization

use chrono::{NaiveDate, Utc};

use crate::config::SiteConfig;
use crate::content::PostRecord;
use crate::helpers::html::escape_html;

/// Serialize the sorted post collection into an RSS 2.0 document
///
/// `lastBuildDate` reflects generation time, so two builds of identical
/// content may differ there. Items follow the global post order.
pub fn build_feed(config: &SiteConfig, records: &[PostRecord]) -> String {
    let site_url = config.url.trim_end_matches('/');
    let now = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();

    let mut feed = String::new();
    feed.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    feed.push_str("<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n");
    feed.push_str("  <channel>\n");
    feed.push_str(&format!(
        "    <title>{}</title>\n",
        escape_html(&config.title)
    ));
    feed.push_str(&format!("    <link>{}</link>\n", site_url));
    feed.push_str(&format!(
        "    <description>{}</description>\n",
        escape_html(&config.description)
    ));
    feed.push_str(&format!("    <language>{}</language>\n", config.language));
    feed.push_str(&format!("    <lastBuildDate>{}</lastBuildDate>\n", now));
    feed.push_str(&format!(
        "    <atom:link href=\"{}/feed.xml\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        site_url
    ));

    for post in records {
        let url = post.permalink(site_url);
        feed.push_str("    <item>\n");
        feed.push_str(&format!("      <title>{}</title>\n", escape_html(&post.title)));
        feed.push_str(&format!("      <link>{}</link>\n", escape_html(&url)));
        feed.push_str(&format!(
            "      <guid isPermaLink=\"true\">{}</guid>\n",
            escape_html(&url)
        ));
        feed.push_str(&format!("      <pubDate>{}</pubDate>\n", pub_date(&post.date)));
        feed.push_str(&format!(
            "      <description>{}</description>\n",
            escape_html(&post.description)
        ));
        feed.push_str("    </item>\n");
    }

    feed.push_str("  </channel>\n");
    feed.push_str("</rss>\n");

    feed
}

/// Publication timestamp: midnight UTC in RFC-822 style
fn pub_date(date: &NaiveDate) -> String {
    format!("{} 00:00:00 GMT", date.format("%a, %d %b %Y"))
}
