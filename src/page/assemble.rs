//! Metadata assembly for a landing page record.

use crate::config::SiteConfig;
use crate::meta::PageMetadata;
use crate::meta::url::absolute_url;
use crate::schema::SchemaGenerator;

use super::LocationPage;

/// Build the metadata request for `page`.
///
/// Fragments, in order: WebPage, BreadcrumbList, one Service per listed
/// service, FAQPage (when the page has questions), LocalBusiness (unless
/// disabled on the page).
pub fn page_metadata(config: &SiteConfig, page: &LocationPage) -> PageMetadata {
    let generator = SchemaGenerator::new(config);
    let path = page.path();
    let url = absolute_url(&config.site.url, &path);

    let mut builder = PageMetadata::builder(page.title.clone(), page.description.clone())
        .canonical(path)
        .schema(generator.web_page(&page.title, &page.description, &url))
        .schema(generator.breadcrumb(&page.breadcrumb_trail()));

    for service in &page.services {
        let service_type = service
            .service_type
            .as_deref()
            .unwrap_or(&page.practice_area);
        let mut schema =
            generator.service(&service.name, &service.description, service_type, &url);
        if !page.city.is_empty() {
            schema = schema.with_area_served(page.city.clone());
        }
        builder = builder.schema(schema);
    }

    if !page.faq.is_empty() {
        builder = builder.schema(generator.faq(&page.faq));
    }
    if page.local_business {
        builder = builder.schema(generator.local_business());
    }

    if let Some(keywords) = &page.keywords {
        builder = builder.keywords(keywords.clone());
    }
    if let Some(robots) = &page.robots {
        builder = builder.robots(robots.clone());
    }
    if let Some(og_type) = &page.og_type {
        builder = builder.og_type(og_type.clone());
    }
    if let Some(image) = &page.og_image {
        builder = builder.og_image(absolute_url(&config.site.url, image));
    }

    builder.build(config)
}
