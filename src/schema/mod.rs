//! schema.org structured data (JSON-LD).
//!
//! | Module     | Purpose                                              |
//! |------------|------------------------------------------------------|
//! | `types`    | Fragment structs and their JSON-LD shape             |
//! | `generate` | `SchemaGenerator`: pure constructors over `SiteConfig` |
//!
//! Fragments are plain data: all inputs are strings, so serialization can
//! never fail and there are no cycles.

mod generate;
mod types;

pub use generate::SchemaGenerator;
pub use types::{
    BreadcrumbItem, BreadcrumbSchema, EntityRef, FaqItem, FaqSchema, LocalBusinessSchema,
    PostalAddress, ServiceSchema, WebPageSchema,
};

use serde_json::Value;

/// One JSON-LD fragment embedded in a page head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuredData {
    WebPage(WebPageSchema),
    Breadcrumb(BreadcrumbSchema),
    LocalBusiness(LocalBusinessSchema),
    Service(ServiceSchema),
    Faq(FaqSchema),
}

impl StructuredData {
    /// The schema.org `@type` this fragment emits.
    pub fn schema_type(&self) -> &str {
        match self {
            Self::WebPage(_) => "WebPage",
            Self::Breadcrumb(_) => "BreadcrumbList",
            Self::LocalBusiness(business) => &business.kind,
            Self::Service(_) => "Service",
            Self::Faq(_) => "FAQPage",
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::WebPage(schema) => schema.to_value(),
            Self::Breadcrumb(schema) => schema.to_value(),
            Self::LocalBusiness(schema) => schema.to_value(),
            Self::Service(schema) => schema.to_value(),
            Self::Faq(schema) => schema.to_value(),
        }
    }

    /// Compact JSON text for a `<script type="application/ld+json">` body.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl From<WebPageSchema> for StructuredData {
    fn from(schema: WebPageSchema) -> Self {
        Self::WebPage(schema)
    }
}

impl From<BreadcrumbSchema> for StructuredData {
    fn from(schema: BreadcrumbSchema) -> Self {
        Self::Breadcrumb(schema)
    }
}

impl From<LocalBusinessSchema> for StructuredData {
    fn from(schema: LocalBusinessSchema) -> Self {
        Self::LocalBusiness(schema)
    }
}

impl From<ServiceSchema> for StructuredData {
    fn from(schema: ServiceSchema) -> Self {
        Self::Service(schema)
    }
}

impl From<FaqSchema> for StructuredData {
    fn from(schema: FaqSchema) -> Self {
        Self::Faq(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_and_type_come_first() {
        let data = StructuredData::from(FaqSchema { items: vec![] });
        let json = data.to_json();
        assert!(json.starts_with(r#"{"@context":"https://schema.org","@type":"FAQPage""#));
    }

    #[test]
    fn test_schema_type_follows_business_kind() {
        let business = LocalBusinessSchema {
            kind: "Attorney".into(),
            name: "Trembach Law".into(),
            description: String::new(),
            url: "https://trembach.law/".into(),
            telephone: String::new(),
            email: String::new(),
            image: String::new(),
            address: None,
            area_served: vec![],
            price_range: None,
            same_as: vec![],
        };
        let data = StructuredData::from(business);
        assert_eq!(data.schema_type(), "Attorney");
        assert_eq!(data.to_value()["@type"], "Attorney");
        // Empty optional fields are omitted
        assert!(data.to_value().get("telephone").is_none());
    }

    #[test]
    fn test_every_fragment_round_trips_as_json() {
        let fragments: Vec<StructuredData> = vec![
            WebPageSchema {
                title: String::new(),
                description: String::new(),
                url: String::new(),
                website: None,
                language: None,
            }
            .into(),
            ServiceSchema {
                name: "Customs Audits".into(),
                description: "Defense in CBP audits".into(),
                service_type: "Customs Law".into(),
                url: "https://trembach.law/customs-audits".into(),
                provider: None,
                area_served: None,
            }
            .into(),
        ];
        for fragment in fragments {
            let parsed: Value = serde_json::from_str(&fragment.to_json()).unwrap();
            assert_eq!(parsed, fragment.to_value());
        }
    }
}
