//! Page-owned head tags derived from `PageMetadata`.
//!
//! Open Graph and Twitter Card tags repeat the page title, description and
//! image; site-level values (site name, locale, twitter handle) come from
//! the config.

use crate::config::SiteConfig;
use crate::meta::PageMetadata;

use super::HeadTag;

pub const TWITTER_CARD: &str = "summary_large_image";

/// Site-level Open Graph values shared by every page.
pub struct OgDefaults<'a> {
    pub site_name: &'a str,
    pub locale: &'a str,
    pub twitter_site: Option<&'a str>,
}

impl<'a> OgDefaults<'a> {
    pub fn from_config(config: &'a SiteConfig) -> Self {
        Self {
            site_name: &config.site.name,
            locale: &config.site.locale,
            twitter_site: config.site.twitter.as_deref().filter(|h| !h.is_empty()),
        }
    }
}

/// Every tag a page owns, in emission order.
pub fn head_tags(meta: &PageMetadata, config: &SiteConfig) -> Vec<HeadTag> {
    let defaults = OgDefaults::from_config(config);
    let canonical = meta.canonical_url(config);
    let mut tags = Vec::with_capacity(20 + meta.schema.len());

    tags.push(HeadTag::Title(meta.title.clone()));
    tags.push(HeadTag::name("description", &meta.description));
    if let Some(keywords) = &meta.keywords {
        tags.push(HeadTag::name("keywords", keywords));
    }
    if let Some(robots) = &meta.robots {
        tags.push(HeadTag::name("robots", robots));
    }
    if let Some(url) = &canonical {
        tags.push(HeadTag::link("canonical", url));
    }

    // Open Graph
    tags.push(HeadTag::property("og:title", &meta.title));
    tags.push(HeadTag::property("og:description", &meta.description));
    tags.push(HeadTag::property("og:type", &meta.og_type));
    if !meta.og_image.is_empty() {
        tags.push(HeadTag::property("og:image", &meta.og_image));
    }
    if let Some(url) = &canonical {
        tags.push(HeadTag::property("og:url", url));
    }
    if !defaults.site_name.is_empty() {
        tags.push(HeadTag::property("og:site_name", defaults.site_name));
    }
    if !defaults.locale.is_empty() {
        tags.push(HeadTag::property("og:locale", defaults.locale));
    }

    // Twitter Card
    tags.push(HeadTag::name("twitter:card", TWITTER_CARD));
    tags.push(HeadTag::name("twitter:title", &meta.title));
    tags.push(HeadTag::name("twitter:description", &meta.description));
    if !meta.og_image.is_empty() {
        tags.push(HeadTag::name("twitter:image", &meta.og_image));
    }
    if let Some(handle) = defaults.twitter_site {
        tags.push(HeadTag::name("twitter:site", handle));
    }

    tags.extend(
        meta.schema
            .iter()
            .map(|fragment| HeadTag::JsonLd(fragment.to_json())),
    );

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use crate::schema::SchemaGenerator;

    fn find<'a>(tags: &'a [HeadTag], key: &str) -> Option<&'a HeadTag> {
        tags.iter().find(|t| t.key().as_deref() == Some(key))
    }

    #[test]
    fn test_full_tag_set() {
        let config = test_site_config();
        let meta = PageMetadata::builder("Customs Lawyer Miami", "Counsel for importers.")
            .keywords("customs lawyer, miami")
            .canonical("customs-lawyer-miami")
            .build(&config);
        let tags = head_tags(&meta, &config);

        assert_eq!(
            find(&tags, "link:canonical"),
            Some(&HeadTag::link(
                "canonical",
                "https://trembach.law/customs-lawyer-miami"
            ))
        );
        assert_eq!(
            find(&tags, "meta:property:og:url"),
            Some(&HeadTag::property(
                "og:url",
                "https://trembach.law/customs-lawyer-miami"
            ))
        );
        assert!(find(&tags, "meta:name:keywords").is_some());
        assert!(find(&tags, "meta:name:twitter:site").is_some());
        assert!(find(&tags, "meta:name:robots").is_none());
        assert_eq!(
            find(&tags, "meta:name:twitter:card"),
            Some(&HeadTag::name("twitter:card", "summary_large_image"))
        );
    }

    #[test]
    fn test_no_canonical_no_og_url() {
        let config = test_site_config();
        let meta = PageMetadata::builder("t", "d").build(&config);
        let tags = head_tags(&meta, &config);

        assert!(find(&tags, "link:canonical").is_none());
        assert!(find(&tags, "meta:property:og:url").is_none());
    }

    #[test]
    fn test_keys_are_unique() {
        let config = test_site_config();
        let meta = PageMetadata::builder("t", "d")
            .keywords("k")
            .robots("noindex")
            .canonical("x")
            .build(&config);
        let tags = head_tags(&meta, &config);

        let mut keys: Vec<_> = tags.iter().filter_map(HeadTag::key).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_one_script_per_fragment_in_order() {
        let config = test_site_config();
        let generator = SchemaGenerator::new(&config);
        let meta = PageMetadata::builder("t", "d")
            .schema(generator.web_page("t", "d", "https://trembach.law/x"))
            .schema(generator.faq(&[]))
            .build(&config);
        let tags = head_tags(&meta, &config);

        let scripts: Vec<_> = tags.iter().filter(|t| matches!(t, HeadTag::JsonLd(_))).collect();
        assert_eq!(scripts.len(), 2);
        assert!(scripts[0].to_string().contains(r#""@type":"WebPage""#));
        assert!(scripts[1].to_string().contains(r#""@type":"FAQPage""#));
    }

    #[test]
    fn test_empty_schema_no_scripts() {
        let config = test_site_config();
        let meta = PageMetadata::builder("t", "d").build(&config);
        assert!(
            !head_tags(&meta, &config)
                .iter()
                .any(|t| matches!(t, HeadTag::JsonLd(_)))
        );
    }
}
