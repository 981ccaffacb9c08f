//! Structured-data fragment types and their JSON-LD shape.
//!
//! Each fragment renders to a standalone JSON-LD object carrying its own
//! `@context`, so every fragment can live in its own `<script>` element.

use serde::Deserialize;
use serde_json::{Map, Value, json};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Start a JSON-LD object with `@context` and `@type` in that order.
fn object(kind: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("@context".into(), SCHEMA_CONTEXT.into());
    map.insert("@type".into(), kind.into());
    map
}

/// Insert `value` under `key` unless it is empty.
fn insert_non_empty(map: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        map.insert(key.into(), value.into());
    }
}

/// A nested reference to the firm (`isPartOf`, `provider`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub kind: String,
    pub name: String,
    pub url: String,
}

impl EntityRef {
    fn to_value(&self) -> Value {
        json!({
            "@type": self.kind,
            "name": self.name,
            "url": self.url,
        })
    }
}

// ============================================================================
// WebPage
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebPageSchema {
    pub title: String,
    pub description: String,
    pub url: String,
    pub website: Option<EntityRef>,
    pub language: Option<String>,
}

impl WebPageSchema {
    pub fn to_value(&self) -> Value {
        let mut map = object("WebPage");
        map.insert("name".into(), self.title.as_str().into());
        map.insert("description".into(), self.description.as_str().into());
        map.insert("url".into(), self.url.as_str().into());
        if let Some(site) = &self.website {
            map.insert("isPartOf".into(), site.to_value());
        }
        if let Some(language) = &self.language {
            map.insert("inLanguage".into(), language.as_str().into());
        }
        Value::Object(map)
    }
}

// ============================================================================
// BreadcrumbList
// ============================================================================

/// One breadcrumb trail entry, as authored in page records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbSchema {
    /// Trail in display order; position is index + 1.
    pub items: Vec<BreadcrumbItem>,
}

impl BreadcrumbSchema {
    pub fn to_value(&self) -> Value {
        let elements: Vec<Value> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                json!({
                    "@type": "ListItem",
                    "position": i + 1,
                    "name": item.name,
                    "item": item.url,
                })
            })
            .collect();

        let mut map = object("BreadcrumbList");
        map.insert("itemListElement".into(), Value::Array(elements));
        Value::Object(map)
    }
}

// ============================================================================
// LocalBusiness
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostalAddress {
    pub street: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl PostalAddress {
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("@type".into(), "PostalAddress".into());
        for (key, value) in [
            ("streetAddress", &self.street),
            ("addressLocality", &self.locality),
            ("addressRegion", &self.region),
            ("postalCode", &self.postal_code),
            ("addressCountry", &self.country),
        ] {
            if let Some(value) = value {
                map.insert(key.into(), value.as_str().into());
            }
        }
        Value::Object(map)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBusinessSchema {
    /// schema.org type (`LegalService` by default).
    pub kind: String,
    pub name: String,
    pub description: String,
    pub url: String,
    /// E.164 phone number.
    pub telephone: String,
    pub email: String,
    pub image: String,
    pub address: Option<PostalAddress>,
    pub area_served: Vec<String>,
    pub price_range: Option<String>,
    pub same_as: Vec<String>,
}

impl LocalBusinessSchema {
    pub fn to_value(&self) -> Value {
        let mut map = object(&self.kind);
        map.insert("name".into(), self.name.as_str().into());
        insert_non_empty(&mut map, "description", &self.description);
        map.insert("url".into(), self.url.as_str().into());
        insert_non_empty(&mut map, "telephone", &self.telephone);
        insert_non_empty(&mut map, "email", &self.email);
        insert_non_empty(&mut map, "image", &self.image);
        if let Some(address) = &self.address {
            map.insert("address".into(), address.to_value());
        }
        if !self.area_served.is_empty() {
            map.insert("areaServed".into(), json!(self.area_served));
        }
        if let Some(range) = &self.price_range {
            map.insert("priceRange".into(), range.as_str().into());
        }
        if !self.same_as.is_empty() {
            map.insert("sameAs".into(), json!(self.same_as));
        }
        Value::Object(map)
    }
}

// ============================================================================
// Service
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSchema {
    pub name: String,
    pub description: String,
    pub service_type: String,
    pub url: String,
    pub provider: Option<EntityRef>,
    pub area_served: Option<String>,
}

impl ServiceSchema {
    /// Restrict the service to a city or region.
    pub fn with_area_served(mut self, area: impl Into<String>) -> Self {
        self.area_served = Some(area.into());
        self
    }

    pub fn to_value(&self) -> Value {
        let mut map = object("Service");
        map.insert("name".into(), self.name.as_str().into());
        map.insert("description".into(), self.description.as_str().into());
        map.insert("serviceType".into(), self.service_type.as_str().into());
        map.insert("url".into(), self.url.as_str().into());
        if let Some(provider) = &self.provider {
            map.insert("provider".into(), provider.to_value());
        }
        if let Some(area) = &self.area_served {
            map.insert("areaServed".into(), area.as_str().into());
        }
        Value::Object(map)
    }
}

// ============================================================================
// FAQPage
// ============================================================================

/// One question/answer pair, shared by the visible accordion and FAQPage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
impl FaqItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqSchema {
    pub items: Vec<FaqItem>,
}

impl FaqSchema {
    pub fn to_value(&self) -> Value {
        let entities: Vec<Value> = self
            .items
            .iter()
            .map(|item| {
                json!({
                    "@type": "Question",
                    "name": item.question,
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": item.answer,
                    },
                })
            })
            .collect();

        let mut map = object("FAQPage");
        map.insert("mainEntity".into(), Value::Array(entities));
        Value::Object(map)
    }
}
