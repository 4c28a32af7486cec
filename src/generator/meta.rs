//! Social/sharing meta tags

use crate::helpers::html::escape_html;

/// Content type for the og:type meta tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Website,
    Article,
}

impl PageKind {
    fn as_str(self) -> &'static str {
        match self {
            PageKind::Website => "website",
            PageKind::Article => "article",
        }
    }
}

/// Build the OG and Twitter meta tag block for a page
///
/// The tag order is fixed. Website pages carry two extra Twitter tags
/// that article pages deliberately omit.
pub fn build_meta_tags(title: &str, description: &str, kind: PageKind, url: &str) -> String {
    let t = escape_html(title);
    let d = escape_html(description);
    let u = escape_html(url);

    let mut lines = vec![
        format!(r#"  <meta name="description" content="{}">"#, d),
        format!(r#"  <meta property="og:title" content="{}">"#, t),
        format!(r#"  <meta property="og:description" content="{}">"#, d),
        format!(r#"  <meta property="og:type" content="{}">"#, kind.as_str()),
        format!(r#"  <meta property="og:url" content="{}">"#, u),
        r#"  <meta name="twitter:card" content="summary">"#.to_string(),
    ];

    if kind == PageKind::Website {
        lines.push(format!(r#"  <meta name="twitter:title" content="{}">"#, t));
        lines.push(format!(r#"  <meta name="twitter:description" content="{}">"#, d));
    }

    lines.join("\n")
}
