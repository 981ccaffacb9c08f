//! Sitemap generation.
//!
//! Lists the canonical URL of every indexable page:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://trembach.law/customs-law-miami/</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    generator::minify_xml,
    log,
    meta::PageMetadata,
    utils::write::{WriteStatus, write_if_changed},
};
use anyhow::{Context, Result};
use std::borrow::Cow;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled.
pub fn build_sitemap(config: &SiteConfig, pages: &[PageMetadata]) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = Sitemap::build(config, pages);
        sitemap.write(config)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    /// Indexable pages with a canonical URL, deduplicated, in page order.
    fn build(config: &SiteConfig, pages: &[PageMetadata]) -> Self {
        let mut urls: Vec<String> = Vec::with_capacity(pages.len());
        for url in pages
            .iter()
            .filter(|meta| meta.is_indexable())
            .filter_map(|meta| meta.canonical_url(config))
        {
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for loc in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&loc));
            xml.push_str("</loc>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(&config.build.sitemap.path);
        let count = self.urls.len();
        let xml = self.into_xml();
        let xml = minify_xml(&xml, config.build.minify);

        let status = write_if_changed(&sitemap_path, xml.as_bytes())
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        if status == WriteStatus::Written {
            log!("sitemap"; "{} ({} urls)", config.root_relative(&sitemap_path).display(), count);
        }
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use std::fs;
    use tempfile::TempDir;

    fn meta(config: &SiteConfig, path: &str, robots: Option<&str>) -> PageMetadata {
        let mut builder = PageMetadata::builder("t", "d").canonical(path);
        if let Some(robots) = robots {
            builder = builder.robots(robots);
        }
        builder.build(config)
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap { urls: vec![] }.into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_skips_noindex_and_missing_canonical() {
        let config = test_site_config();
        let pages = [
            meta(&config, "/customs-law-miami/", None),
            meta(&config, "/thank-you/", Some("noindex, nofollow")),
            meta(&config, "", None),
            meta(&config, "/trade-remedies-houston/", Some("index, follow")),
        ];
        let xml = Sitemap::build(&config, &pages).into_xml();

        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://trembach.law/customs-law-miami/</loc>"));
        assert!(xml.contains("<loc>https://trembach.law/trade-remedies-houston/</loc>"));
        assert!(!xml.contains("thank-you"));
    }

    #[test]
    fn test_sitemap_dedups() {
        let config = test_site_config();
        let pages = [
            meta(&config, "/customs-law-miami/", None),
            meta(&config, "customs-law-miami/", None),
        ];
        assert_eq!(Sitemap::build(&config, &pages).urls.len(), 1);
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let xml = Sitemap {
            urls: vec!["https://trembach.law/search?q=a&b=c".to_string()],
        }
        .into_xml();

        assert!(xml.contains("<loc>https://trembach.law/search?q=a&amp;b=c</loc>"));
    }

    #[test]
    fn test_build_sitemap_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut config = test_site_config();
        config.build.output = dir.path().to_path_buf();
        config.build.minify = false;

        build_sitemap(&config, &[meta(&config, "/customs-law-miami/", None)]).unwrap();
        let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://trembach.law/customs-law-miami/</loc>"));

        config.build.sitemap.enable = false;
        fs::remove_file(dir.path().join("sitemap.xml")).unwrap();
        build_sitemap(&config, &[]).unwrap();
        assert!(!dir.path().join("sitemap.xml").exists());
    }
}
