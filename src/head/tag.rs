//! Head element model and its HTML rendering.

use std::fmt;

use crate::utils::html::{escape, escape_attr, escape_script_text};

pub const JSON_LD_TYPE: &str = "application/ld+json";

/// Which attribute names a `<meta>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaAttr {
    /// `<meta name="...">` (description, robots, twitter:*)
    Name,
    /// `<meta property="...">` (og:*)
    Property,
}

impl MetaAttr {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// One element inside `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Charset(String),
    Title(String),
    Meta {
        attr: MetaAttr,
        key: String,
        content: String,
    },
    Link {
        rel: String,
        href: String,
    },
    /// Body is JSON text, written unescaped apart from `</`.
    JsonLd(String),
}

impl HeadTag {
    pub fn name(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Meta {
            attr: MetaAttr::Name,
            key: key.into(),
            content: content.into(),
        }
    }

    pub fn property(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Meta {
            attr: MetaAttr::Property,
            key: key.into(),
            content: content.into(),
        }
    }

    pub fn link(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            rel: rel.into(),
            href: href.into(),
        }
    }

    /// Identity of a tag that may appear at most once per head.
    ///
    /// `None` for tags that can repeat (stylesheets, JSON-LD scripts).
    pub fn key(&self) -> Option<String> {
        match self {
            Self::Charset(_) => Some("charset".into()),
            Self::Title(_) => Some("title".into()),
            Self::Meta { attr, key, .. } => Some(format!("meta:{}:{}", attr.as_str(), key)),
            Self::Link { rel, .. } if matches!(rel.as_str(), "canonical" | "icon") => {
                Some(format!("link:{rel}"))
            }
            Self::Link { .. } | Self::JsonLd(_) => None,
        }
    }
}

impl fmt::Display for HeadTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Charset(charset) => write!(f, r#"<meta charset="{}">"#, escape_attr(charset)),
            Self::Title(title) => write!(f, "<title>{}</title>", escape(title)),
            Self::Meta { attr, key, content } => write!(
                f,
                r#"<meta {}="{}" content="{}">"#,
                attr.as_str(),
                escape_attr(key),
                escape_attr(content)
            ),
            Self::Link { rel, href } => write!(
                f,
                r#"<link rel="{}" href="{}">"#,
                escape_attr(rel),
                escape_attr(href)
            ),
            Self::JsonLd(json) => write!(
                f,
                r#"<script type="{JSON_LD_TYPE}">{}</script>"#,
                escape_script_text(json)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_meta_tags() {
        assert_eq!(
            HeadTag::name("description", "Tariffs & \"duties\"").to_string(),
            r#"<meta name="description" content="Tariffs &amp; &quot;duties&quot;">"#
        );
        assert_eq!(
            HeadTag::property("og:type", "website").to_string(),
            r#"<meta property="og:type" content="website">"#
        );
    }

    #[test]
    fn test_render_title_and_link() {
        assert_eq!(
            HeadTag::Title("Import <Export>".into()).to_string(),
            "<title>Import &lt;Export&gt;</title>"
        );
        assert_eq!(
            HeadTag::link("canonical", "https://trembach.law/foo-bar").to_string(),
            r#"<link rel="canonical" href="https://trembach.law/foo-bar">"#
        );
    }

    #[test]
    fn test_render_json_ld_unescaped() {
        let tag = HeadTag::JsonLd(r#"{"text":"A & B"}"#.into());
        assert_eq!(
            tag.to_string(),
            r#"<script type="application/ld+json">{"text":"A & B"}</script>"#
        );

        let hostile = HeadTag::JsonLd(r#"{"text":"</script>"}"#.into());
        assert_eq!(hostile.to_string().matches("</script>").count(), 1);

        let comment = HeadTag::JsonLd(r#"{"text":"<!--<script>"}"#.into());
        let html = comment.to_string();
        assert!(!html.contains("<!--"));
        assert!(html.ends_with("</script>"));
    }

    #[test]
    fn test_keys() {
        assert_eq!(HeadTag::Title("x".into()).key().as_deref(), Some("title"));
        assert_eq!(
            HeadTag::property("og:title", "x").key().as_deref(),
            Some("meta:property:og:title")
        );
        assert_eq!(
            HeadTag::link("canonical", "x").key().as_deref(),
            Some("link:canonical")
        );
        assert_eq!(HeadTag::link("stylesheet", "/a.css").key(), None);
        assert_eq!(HeadTag::JsonLd("{}".into()).key(), None);
    }
}
