//! Structured-data generators.
//!
//! `SchemaGenerator` borrows the immutable site config, so every generator is
//! a pure function of (config, arguments). Relative URLs are resolved against
//! `site.url` with the same join rules as the canonical link.

use crate::config::SiteConfig;
use crate::meta::url::absolute_url;

use super::{
    BreadcrumbItem, BreadcrumbSchema, EntityRef, FaqItem, FaqSchema, LocalBusinessSchema,
    PostalAddress, ServiceSchema, WebPageSchema,
};

#[derive(Debug, Clone, Copy)]
pub struct SchemaGenerator<'a> {
    config: &'a SiteConfig,
}

impl<'a> SchemaGenerator<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    fn resolve(&self, url: &str) -> String {
        absolute_url(&self.config.site.url, url)
    }

    /// Reference to the firm as its business type.
    fn provider(&self) -> EntityRef {
        let site = &self.config.site;
        EntityRef {
            kind: site.business.kind.clone(),
            name: site.name.clone(),
            url: self.resolve(""),
        }
    }

    /// WebPage for a single page. Any strings are accepted, including empty.
    pub fn web_page(&self, title: &str, description: &str, url: &str) -> WebPageSchema {
        let site = &self.config.site;
        WebPageSchema {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            website: Some(EntityRef {
                kind: "WebSite".into(),
                name: site.name.clone(),
                url: self.resolve(""),
            }),
            language: Some(site.language()),
        }
    }

    /// BreadcrumbList in input order. Empty input yields an empty trail.
    pub fn breadcrumb(&self, items: &[BreadcrumbItem]) -> BreadcrumbSchema {
        BreadcrumbSchema {
            items: items
                .iter()
                .map(|item| BreadcrumbItem::new(item.name.clone(), self.resolve(&item.url)))
                .collect(),
        }
    }

    /// The firm as a LocalBusiness, derived from config only.
    pub fn local_business(&self) -> LocalBusinessSchema {
        let site = &self.config.site;
        let business = &site.business;

        let address = business.has_address().then(|| PostalAddress {
            street: business.street.clone(),
            locality: business.city.clone(),
            region: business.region.clone(),
            postal_code: business.postal_code.clone(),
            country: business.country.clone(),
        });

        LocalBusinessSchema {
            kind: business.kind.clone(),
            name: site.name.clone(),
            description: site.description.clone(),
            url: self.resolve(""),
            telephone: site.phone.clone(),
            email: site.email.clone(),
            image: site.image.clone(),
            address,
            area_served: business.area_served.clone(),
            price_range: business.price_range.clone(),
            same_as: business.same_as.clone(),
        }
    }

    pub fn service(
        &self,
        name: &str,
        description: &str,
        service_type: &str,
        url: &str,
    ) -> ServiceSchema {
        ServiceSchema {
            name: name.to_string(),
            description: description.to_string(),
            service_type: service_type.to_string(),
            url: url.to_string(),
            provider: Some(self.provider()),
            area_served: None,
        }
    }

    /// FAQPage in input order, question and answer text kept verbatim.
    pub fn faq(&self, items: &[FaqItem]) -> FaqSchema {
        FaqSchema {
            items: items.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use crate::schema::StructuredData;

    #[test]
    fn test_breadcrumb_preserves_order_and_positions() {
        let config = test_site_config();
        let generator = SchemaGenerator::new(&config);
        let items = vec![
            BreadcrumbItem::new("Home", "/"),
            BreadcrumbItem::new("Customs Law", "/customs-law"),
            BreadcrumbItem::new("Miami", "https://trembach.law/customs-law/miami"),
        ];

        let value = generator.breadcrumb(&items).to_value();
        let list = value["itemListElement"].as_array().unwrap();

        assert_eq!(list.len(), 3);
        for (i, (entry, item)) in list.iter().zip(&items).enumerate() {
            assert_eq!(entry["position"], i + 1);
            assert_eq!(entry["name"], item.name.as_str());
        }
        assert_eq!(list[0]["item"], "https://trembach.law/");
        assert_eq!(list[1]["item"], "https://trembach.law/customs-law");
        assert_eq!(list[2]["item"], "https://trembach.law/customs-law/miami");
    }

    #[test]
    fn test_breadcrumb_empty() {
        let config = test_site_config();
        let schema = SchemaGenerator::new(&config).breadcrumb(&[]);
        assert!(schema.items.is_empty());
        assert_eq!(schema.to_value()["itemListElement"], serde_json::json!([]));
    }

    #[test]
    fn test_faq_preserves_count_order_and_text() {
        let config = test_site_config();
        let items = vec![
            FaqItem::new("What is a CF-28?", "A <b>Request for Information</b> & more."),
            FaqItem::new("Do I need a customs broker?", "Not always; \"it depends\"."),
            FaqItem::new("How fast can you respond?", "Within 24 hours."),
        ];

        let value = SchemaGenerator::new(&config).faq(&items).to_value();
        let entities = value["mainEntity"].as_array().unwrap();

        assert_eq!(entities.len(), items.len());
        for (entity, item) in entities.iter().zip(&items) {
            assert_eq!(entity["@type"], "Question");
            assert_eq!(entity["name"], item.question.as_str());
            assert_eq!(entity["acceptedAnswer"]["text"], item.answer.as_str());
        }
    }

    #[test]
    fn test_local_business_is_idempotent() {
        let config = test_site_config();
        let generator = SchemaGenerator::new(&config);

        let first = StructuredData::from(generator.local_business()).to_json();
        let second = StructuredData::from(generator.local_business()).to_json();
        assert_eq!(first, second);
    }

    #[test]
    fn test_local_business_from_config() {
        let config = test_site_config();
        let value = SchemaGenerator::new(&config).local_business().to_value();

        assert_eq!(value["@type"], "LegalService");
        assert_eq!(value["name"], "Trembach Law");
        assert_eq!(value["url"], "https://trembach.law/");
        assert_eq!(value["telephone"], "+13055550100");
        assert_eq!(value["address"]["addressLocality"], "Miami");
        assert_eq!(value["areaServed"][0], "United States");
        assert!(value.get("priceRange").is_none());
    }

    #[test]
    fn test_web_page_accepts_empty_strings() {
        let config = test_site_config();
        let value = SchemaGenerator::new(&config).web_page("", "", "").to_value();

        assert_eq!(value["name"], "");
        assert_eq!(value["url"], "");
        assert_eq!(value["isPartOf"]["@type"], "WebSite");
        assert_eq!(value["inLanguage"], "en-US");
    }

    #[test]
    fn test_service_has_provider() {
        let config = test_site_config();
        let value = SchemaGenerator::new(&config)
            .service(
                "Tariff Classification",
                "HTS classification rulings",
                "Customs Law",
                "https://trembach.law/tariff-classification",
            )
            .with_area_served("Miami")
            .to_value();

        assert_eq!(value["serviceType"], "Customs Law");
        assert_eq!(value["provider"]["@type"], "LegalService");
        assert_eq!(value["provider"]["name"], "Trembach Law");
        assert_eq!(value["areaServed"], "Miami");
    }
}
