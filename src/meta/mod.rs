//! Per-page metadata request.
//!
//! A `PageMetadata` is assembled fresh for every page render and consumed by
//! the head manager; it is never cached or shared between pages.
//!
//! ```ignore
//! let meta = PageMetadata::builder("Customs Lawyer in Miami", "Trade and customs counsel.")
//!     .canonical("customs-lawyer-miami")
//!     .keywords("customs lawyer, miami")
//!     .schema(generator.local_business())
//!     .build(&config);
//! ```

pub mod url;

use crate::config::SiteConfig;
use crate::schema::StructuredData;

pub const DEFAULT_OG_TYPE: &str = "website";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// Comma-separated keyword hint.
    pub keywords: Option<String>,
    /// Path joined with `site.url`; empty means no canonical link.
    pub canonical: String,
    pub og_type: String,
    /// Absolute URL of the social preview image.
    pub og_image: String,
    pub robots: Option<String>,
    /// Emitted in this order, one script per fragment.
    pub schema: Vec<StructuredData>,
}

impl PageMetadata {
    pub fn builder(title: impl Into<String>, description: impl Into<String>) -> MetadataBuilder {
        MetadataBuilder {
            title: title.into(),
            description: description.into(),
            keywords: None,
            canonical: String::new(),
            og_type: None,
            og_image: None,
            robots: None,
            schema: Vec::new(),
        }
    }

    /// Absolute canonical URL, if the page declares one.
    pub fn canonical_url(&self, config: &SiteConfig) -> Option<String> {
        url::canonical_url(&config.site.url, &self.canonical)
    }

    /// Whether search engines may index this page.
    pub fn is_indexable(&self) -> bool {
        !self
            .robots
            .as_deref()
            .is_some_and(|r| r.to_ascii_lowercase().contains("noindex"))
    }
}

/// Builder filling unset fields from the site defaults.
#[derive(Debug, Clone)]
pub struct MetadataBuilder {
    title: String,
    description: String,
    keywords: Option<String>,
    canonical: String,
    og_type: Option<String>,
    og_image: Option<String>,
    robots: Option<String>,
    schema: Vec<StructuredData>,
}

impl MetadataBuilder {
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn canonical(mut self, path: impl Into<String>) -> Self {
        self.canonical = path.into();
        self
    }

    pub fn og_type(mut self, og_type: impl Into<String>) -> Self {
        self.og_type = Some(og_type.into());
        self
    }

    pub fn og_image(mut self, image: impl Into<String>) -> Self {
        self.og_image = Some(image.into());
        self
    }

    pub fn robots(mut self, robots: impl Into<String>) -> Self {
        self.robots = Some(robots.into());
        self
    }

    /// Append one structured-data fragment.
    pub fn schema(mut self, fragment: impl Into<StructuredData>) -> Self {
        self.schema.push(fragment.into());
        self
    }

    /// Finish, taking title/description/image defaults from the site config.
    ///
    /// Empty title or description fall back to the site defaults; with
    /// `build.title_suffix` the title becomes `"{title} | {site name}"`.
    pub fn build(self, config: &SiteConfig) -> PageMetadata {
        let site = &config.site;

        let title = if self.title.is_empty() {
            site.title.clone()
        } else if config.build.title_suffix && !site.name.is_empty() {
            format!("{} | {}", self.title, site.name)
        } else {
            self.title
        };

        let description = if self.description.is_empty() {
            site.description.clone()
        } else {
            self.description
        };

        PageMetadata {
            title,
            description,
            keywords: self.keywords.filter(|k| !k.trim().is_empty()),
            canonical: self.canonical,
            og_type: self.og_type.unwrap_or_else(|| DEFAULT_OG_TYPE.into()),
            og_image: self
                .og_image
                .filter(|image| !image.is_empty())
                .unwrap_or_else(|| site.image.clone()),
            robots: self.robots.filter(|r| !r.trim().is_empty()),
            schema: self.schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use crate::schema::SchemaGenerator;

    #[test]
    fn test_defaults_from_site() {
        let config = test_site_config();
        let meta = PageMetadata::builder("", "").build(&config);

        assert_eq!(meta.title, config.site.title);
        assert_eq!(meta.description, config.site.description);
        assert_eq!(meta.og_type, "website");
        assert_eq!(meta.og_image, "https://trembach.law/og-image.jpg");
        assert!(meta.schema.is_empty());
        assert!(meta.canonical_url(&config).is_none());
    }

    #[test]
    fn test_title_suffix() {
        let mut config = test_site_config();
        config.build.title_suffix = true;
        let meta = PageMetadata::builder("Customs Lawyer Miami", "d").build(&config);
        assert_eq!(meta.title, "Customs Lawyer Miami | Trembach Law");
    }

    #[test]
    fn test_canonical_url() {
        let config = test_site_config();
        let meta = PageMetadata::builder("t", "d")
            .canonical("foo-bar")
            .build(&config);
        assert_eq!(
            meta.canonical_url(&config).as_deref(),
            Some("https://trembach.law/foo-bar")
        );
    }

    #[test]
    fn test_schema_order_preserved() {
        let config = test_site_config();
        let generator = SchemaGenerator::new(&config);
        let meta = PageMetadata::builder("t", "d")
            .schema(generator.faq(&[]))
            .schema(generator.local_business())
            .schema(generator.breadcrumb(&[]))
            .build(&config);

        let types: Vec<_> = meta.schema.iter().map(StructuredData::schema_type).collect();
        assert_eq!(types, ["FAQPage", "LegalService", "BreadcrumbList"]);
    }

    #[test]
    fn test_robots_and_indexable() {
        let config = test_site_config();
        let meta = PageMetadata::builder("t", "d").build(&config);
        assert!(meta.is_indexable());

        let meta = PageMetadata::builder("t", "d")
            .robots("NoIndex, nofollow")
            .build(&config);
        assert!(!meta.is_indexable());

        let meta = PageMetadata::builder("t", "d").robots("  ").build(&config);
        assert!(meta.robots.is_none());
    }
}
