//! Auxiliary output files.
//!
//! - **Sitemap**: canonical URLs of every indexable page (`sitemap.xml`)
//! - **Robots**: crawler rules pointing at the sitemap (`robots.txt`)
//!
//! Both work from the `PageMetadata` already assembled during the build, so
//! no record is parsed twice.

pub mod robots;
pub mod sitemap;

use std::borrow::Cow;

/// Elements whose surrounding whitespace never renders.
const BLOCK_TAGS: &[&str] = &[
    "!doctype", "html", "head", "body", "meta", "link", "title", "script", "style", "noscript",
    "header", "footer", "main", "nav", "section", "article", "aside", "div", "p", "h1", "h2",
    "h3", "h4", "h5", "h6", "ul", "ol", "li", "dl", "dt", "dd", "details", "summary", "form",
    "fieldset", "table", "thead", "tbody", "tr", "td", "th", "blockquote", "pre", "figure",
    "figcaption", "hr",
];

/// Strip indentation and blank lines from generated XML.
///
/// Only for documents without mixed content, where every line break sits
/// between two elements.
pub fn minify_xml(content: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled {
        return Cow::Borrowed(content);
    }
    Cow::Owned(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(""),
    )
}

/// Strip indentation and blank lines from generated HTML.
///
/// A line break between two block-level tags is dropped; any other break
/// becomes a single space, so words and inline elements stay separated.
/// Contents of `<pre>` blocks are left untouched.
pub fn minify_markup(content: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled {
        return Cow::Borrowed(content);
    }

    let mut out = String::with_capacity(content.len());
    let mut in_pre = false;

    for raw in content.lines() {
        if in_pre {
            out.push('\n');
            out.push_str(raw);
            if raw.contains("</pre>") {
                in_pre = false;
            }
            continue;
        }

        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if !out.is_empty() && !(ends_with_block_tag(&out) && starts_with_block_tag(line)) {
            out.push(' ');
        }
        out.push_str(line);

        if line.contains("<pre") && !line.contains("</pre>") {
            in_pre = true;
        }
    }

    Cow::Owned(out)
}

fn is_block_tag(tag: &str) -> bool {
    let name: String = tag
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '!')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    BLOCK_TAGS.contains(&name.as_str())
}

fn ends_with_block_tag(html: &str) -> bool {
    html.ends_with('>') && html.rfind('<').is_some_and(|i| is_block_tag(&html[i + 1..]))
}

fn starts_with_block_tag(line: &str) -> bool {
    line.strip_prefix('<').is_some_and(is_block_tag)
}
