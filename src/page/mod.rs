//! Landing page records.
//!
//! Each city × practice-area page is one TOML file under the content
//! directory. A single template renders every record, and the FAQ list feeds
//! both the visible accordion and the FAQPage JSON-LD.
//!
//! ```toml
//! city = "Miami"
//! practice_area = "Customs Law"
//! title = "Miami Customs Lawyer"
//! description = "Customs audits, seizures and penalties in South Florida."
//!
//! [hero]
//! heading = "Miami Customs & Trade Attorneys"
//!
//! [[faq]]
//! question = "What should I do after a CBP seizure notice?"
//! answer = "Contact counsel before the 30-day petition deadline."
//! ```

mod assemble;
mod load;
mod slug;

pub use assemble::page_metadata;
pub use load::{load_pages, scan_pages};
pub use slug::slugify;

use serde::Deserialize;
use std::path::PathBuf;

use crate::schema::{BreadcrumbItem, FaqItem};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationPage {
    /// URL path segment; derived from city and practice area when absent.
    pub slug: Option<String>,
    pub city: String,
    pub practice_area: String,
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub robots: Option<String>,
    pub og_image: Option<String>,
    /// Open Graph type, `website` when absent.
    pub og_type: Option<String>,
    /// Emit LocalBusiness structured data on this page.
    pub local_business: bool,
    pub hero: Hero,
    pub sections: Vec<Section>,
    pub services: Vec<ServiceEntry>,
    pub faq: Vec<FaqItem>,
    pub links: Vec<InternalLink>,
    /// Explicit trail; defaults to Home → practice area → page.
    pub breadcrumbs: Vec<BreadcrumbItem>,

    /// Source file (internal use only)
    #[serde(skip)]
    pub source: PathBuf,
}

impl Default for LocationPage {
    fn default() -> Self {
        Self {
            slug: None,
            city: String::new(),
            practice_area: String::new(),
            title: String::new(),
            description: String::new(),
            keywords: None,
            robots: None,
            og_image: None,
            og_type: None,
            local_business: true,
            hero: Hero::default(),
            sections: Vec::new(),
            services: Vec::new(),
            faq: Vec::new(),
            links: Vec::new(),
            breadcrumbs: Vec::new(),
            source: PathBuf::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Hero {
    pub heading: String,
    pub subheading: String,
    /// Call-to-action label for the phone button.
    pub cta: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Section {
    pub heading: String,
    /// Markdown body.
    pub body: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceEntry {
    pub name: String,
    pub description: String,
    /// schema.org `serviceType`; falls back to the page's practice area.
    pub service_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InternalLink {
    pub label: String,
    pub href: String,
}

impl LocationPage {
    /// Slug as written, or derived from city and practice area.
    pub fn resolved_slug(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.trim_matches('/').to_string(),
            _ => slugify(&format!("{} {}", self.practice_area, self.city)),
        }
    }

    /// Why the explicit slug cannot serve as both URL path and output
    /// directory: URL schemes, empty or dot segments, backslashes and `:`.
    pub fn slug_problem(&self) -> Option<String> {
        let raw = self.slug.as_deref().unwrap_or_default().trim();
        if raw.contains("://") {
            return Some(format!("`{raw}` contains a URL scheme, use a path"));
        }

        let slug = self.resolved_slug();
        for segment in slug.split('/') {
            if segment.is_empty() {
                return Some(format!("`{raw}` contains `//`"));
            }
            if segment == "." || segment == ".." {
                return Some(format!("`{raw}` contains a `{segment}` segment"));
            }
            if segment.contains(['\\', ':']) {
                return Some(format!("`{raw}` contains `\\` or `:`"));
            }
        }
        None
    }

    /// Relative URL path of the page, e.g. `/customs-law-miami/`.
    pub fn path(&self) -> String {
        format!("/{}/", self.resolved_slug())
    }

    /// Heading shown in the hero, falling back to the page title.
    pub fn heading(&self) -> &str {
        if self.hero.heading.is_empty() {
            &self.title
        } else {
            &self.hero.heading
        }
    }

    /// Breadcrumb trail for this page.
    pub fn breadcrumb_trail(&self) -> Vec<BreadcrumbItem> {
        if !self.breadcrumbs.is_empty() {
            return self.breadcrumbs.clone();
        }

        let mut trail = vec![BreadcrumbItem::new("Home", "/")];
        if !self.practice_area.is_empty() {
            trail.push(BreadcrumbItem::new(
                self.practice_area.clone(),
                format!("/{}/", slugify(&self.practice_area)),
            ));
        }
        let name = if self.city.is_empty() {
            self.title.clone()
        } else {
            self.city.clone()
        };
        trail.push(BreadcrumbItem::new(name, self.path()));
        trail
    }
}

#[cfg(test)]
pub(crate) fn test_page() -> LocationPage {
    toml::from_str(
        r#"
city = "Miami"
practice_area = "Customs Law"
title = "Miami Customs Lawyer"
description = "Customs audits, seizures and penalties in South Florida."
keywords = "customs lawyer miami, cbp seizure attorney"

[hero]
heading = "Miami Customs & Trade Attorneys"
subheading = "Counsel for importers at PortMiami and MIA."
cta = "Call now"

[[sections]]
heading = "Why importers call us"
body = "We handle **CBP seizures**, penalties and audits."

[[services]]
name = "Seizure Petitions"
description = "Petitions for relief from forfeiture."

[[services]]
name = "Tariff Classification"
description = "HTS classification and binding rulings."
service_type = "Trade Compliance"

[[faq]]
question = "What should I do after a CBP seizure notice?"
answer = "Contact counsel before the 30-day petition deadline."

[[faq]]
question = "Can you help with Section 301 duties?"
answer = "Yes, including exclusion requests & refunds."

[[links]]
label = "Customs Lawyer Houston"
href = "/customs-law-houston/"
"#,
    )
    .unwrap()
}
