//! Document head model and metadata application.
//!
//! | Module    | Purpose                                            |
//! |-----------|----------------------------------------------------|
//! | `tag`     | `HeadTag` element model and HTML rendering         |
//! | `tags`    | Page-owned tags derived from `PageMetadata`        |
//! | `manager` | `HeadManager`: apply / replace / release page tags |
//!
//! A `Head` holds site-owned entries (charset, viewport, default title,
//! stylesheets) plus the tags of at most one page. Page tags displace
//! site-owned entries with the same key instead of duplicating them.

mod manager;
mod tag;
mod tags;

pub use manager::HeadManager;
pub use tag::HeadTag;
pub use tags::head_tags;

use crate::config::SiteConfig;

/// Who inserted a head entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Owner {
    /// Base template, present on every page.
    Site,
    /// Inserted by the head manager for the current page.
    Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeadEntry {
    tag: HeadTag,
    owner: Owner,
    /// Site entry hidden by a page tag with the same key.
    displaced: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Head {
    entries: Vec<HeadEntry>,
}

impl Head {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base head shared by every page: charset, viewport, site defaults.
    pub fn base(config: &SiteConfig) -> Self {
        let site = &config.site;
        let mut head = Self::new();

        head.push_site(HeadTag::Charset("utf-8".into()));
        head.push_site(HeadTag::name(
            "viewport",
            "width=device-width, initial-scale=1",
        ));
        if !site.title.is_empty() {
            head.push_site(HeadTag::Title(site.title.clone()));
        }
        if !site.description.is_empty() {
            head.push_site(HeadTag::name("description", &site.description));
        }
        if let Some(icon) = &config.build.head.icon {
            head.push_site(HeadTag::link("icon", icon));
        }
        for style in &config.build.head.styles {
            head.push_site(HeadTag::link("stylesheet", style));
        }

        head
    }

    /// Append a site-owned entry.
    pub fn push_site(&mut self, tag: HeadTag) {
        self.entries.push(HeadEntry {
            tag,
            owner: Owner::Site,
            displaced: false,
        });
    }

    /// Insert page-owned tags, displacing keyed entries they replace.
    fn insert_page(&mut self, tags: Vec<HeadTag>) {
        for tag in tags {
            if let Some(key) = tag.key() {
                self.entries
                    .retain(|e| !(e.owner == Owner::Page && e.tag.key().as_ref() == Some(&key)));
                for entry in &mut self.entries {
                    if entry.owner == Owner::Site && entry.tag.key().as_ref() == Some(&key) {
                        entry.displaced = true;
                    }
                }
            }
            self.entries.push(HeadEntry {
                tag,
                owner: Owner::Page,
                displaced: false,
            });
        }
    }

    /// Drop every page-owned entry and restore displaced site entries.
    fn remove_page(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.owner == Owner::Site);
        for entry in &mut self.entries {
            entry.displaced = false;
        }
        before - self.entries.len()
    }

    /// Visible tags in document order.
    pub fn tags(&self) -> impl Iterator<Item = &HeadTag> {
        self.entries
            .iter()
            .filter(|e| !e.displaced)
            .map(|e| &e.tag)
    }

    /// Visible tag with the given key.
    pub fn get(&self, key: &str) -> Option<&HeadTag> {
        self.tags().find(|t| t.key().as_deref() == Some(key))
    }

    pub fn title(&self) -> Option<&str> {
        match self.get("title") {
            Some(HeadTag::Title(title)) => Some(title),
            _ => None,
        }
    }

    /// Bodies of all JSON-LD scripts, in order.
    pub fn json_ld(&self) -> impl Iterator<Item = &str> {
        self.tags().filter_map(|t| match t {
            HeadTag::JsonLd(json) => Some(json.as_str()),
            _ => None,
        })
    }

    /// Keys that occur more than once among visible tags.
    pub fn duplicate_keys(&self) -> Vec<String> {
        let mut seen = rustc_hash::FxHashSet::default();
        let mut duplicates = Vec::new();
        for key in self.tags().filter_map(HeadTag::key) {
            if !seen.insert(key.clone()) && !duplicates.contains(&key) {
                duplicates.push(key);
            }
        }
        duplicates
    }

    pub fn len(&self) -> usize {
        self.tags().count()
    }

    /// Render `<head>...</head>` with one tag per line.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<head>\n");
        for tag in self.tags() {
            html.push_str("  ");
            html.push_str(&tag.to_string());
            html.push('\n');
        }
        html.push_str("</head>");
        html
    }
}
