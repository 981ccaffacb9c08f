//! Body blocks of the landing page template.

use pulldown_cmark::{Options, Parser, html};

use crate::config::SiteConfig;
use crate::page::LocationPage;
use crate::schema::BreadcrumbItem;
use crate::utils::html::{escape, escape_attr};

use super::form::FORM_ANCHOR;

/// Render trusted Markdown copy to HTML.
pub fn markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

pub fn site_header(config: &SiteConfig) -> String {
    let site = &config.site;
    let mut out = String::from("<header class=\"site-header\">\n");
    out.push_str(&format!(
        "<a class=\"brand\" href=\"/\">{}</a>\n",
        escape(&site.name)
    ));
    if !site.phone.is_empty() {
        out.push_str(&format!(
            "<a class=\"phone\" href=\"tel:{}\">{}</a>\n",
            escape_attr(&site.phone),
            escape(site.phone_label())
        ));
    }
    out.push_str("</header>\n");
    out
}

pub fn hero(config: &SiteConfig, page: &LocationPage) -> String {
    let mut out = String::from("<section class=\"hero\">\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape(page.heading())));
    if !page.hero.subheading.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", escape(&page.hero.subheading)));
    }
    if let Some(cta) = &page.hero.cta {
        // Phone when configured, otherwise the on-page evaluation form
        let href = if config.site.phone.is_empty() {
            format!("#{FORM_ANCHOR}")
        } else {
            format!("tel:{}", config.site.phone)
        };
        out.push_str(&format!(
            "<a class=\"cta\" href=\"{}\">{}</a>\n",
            escape_attr(&href),
            escape(cta)
        ));
    }
    out.push_str("</section>\n");
    out
}

pub fn breadcrumbs(trail: &[BreadcrumbItem]) -> String {
    if trail.is_empty() {
        return String::new();
    }

    let mut out = String::from("<nav class=\"breadcrumbs\" aria-label=\"Breadcrumb\">\n<ol>\n");
    let last = trail.len() - 1;
    for (i, item) in trail.iter().enumerate() {
        if i == last {
            out.push_str(&format!(
                "<li aria-current=\"page\">{}</li>\n",
                escape(&item.name)
            ));
        } else {
            out.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                escape_attr(&item.url),
                escape(&item.name)
            ));
        }
    }
    out.push_str("</ol>\n</nav>\n");
    out
}

pub fn sections(page: &LocationPage) -> String {
    page.sections
        .iter()
        .map(|section| {
            let mut out = String::from("<section class=\"copy\">\n");
            if !section.heading.is_empty() {
                out.push_str(&format!("<h2>{}</h2>\n", escape(&section.heading)));
            }
            out.push_str(&markdown(&section.body));
            out.push_str("</section>\n");
            out
        })
        .collect()
}

pub fn services(page: &LocationPage) -> String {
    if page.services.is_empty() {
        return String::new();
    }

    let heading = match (page.practice_area.is_empty(), page.city.is_empty()) {
        (false, false) => format!("{} Services in {}", page.practice_area, page.city),
        (false, true) => format!("{} Services", page.practice_area),
        _ => "Our Services".to_string(),
    };

    let mut out = String::from("<section class=\"services\">\n");
    out.push_str(&format!("<h2>{}</h2>\n<ul>\n", escape(&heading)));
    for service in &page.services {
        out.push_str(&format!(
            "<li>\n<h3>{}</h3>\n<p>{}</p>\n</li>\n",
            escape(&service.name),
            escape(&service.description)
        ));
    }
    out.push_str("</ul>\n</section>\n");
    out
}

/// FAQ accordion, built from the same list as the FAQPage JSON-LD.
pub fn faq(page: &LocationPage) -> String {
    if page.faq.is_empty() {
        return String::new();
    }

    let mut out = String::from("<section class=\"faq\">\n<h2>Frequently Asked Questions</h2>\n");
    for item in &page.faq {
        out.push_str(&format!(
            "<details>\n<summary>{}</summary>\n<p>{}</p>\n</details>\n",
            escape(&item.question),
            escape(&item.answer)
        ));
    }
    out.push_str("</section>\n");
    out
}

pub fn related_links(page: &LocationPage) -> String {
    if page.links.is_empty() {
        return String::new();
    }

    let mut out = String::from("<nav class=\"related\">\n<h2>Related Pages</h2>\n<ul>\n");
    for link in &page.links {
        out.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape_attr(&link.href),
            escape(&link.label)
        ));
    }
    out.push_str("</ul>\n</nav>\n");
    out
}

pub fn site_footer(config: &SiteConfig) -> String {
    let site = &config.site;
    let mut out = String::from("<footer class=\"site-footer\">\n");
    out.push_str(&format!("<p>{}</p>\n", escape(&site.name)));
    if !site.email.is_empty() {
        out.push_str(&format!(
            "<p><a href=\"mailto:{}\">{}</a></p>\n",
            escape_attr(&site.email),
            escape(&site.email)
        ));
    }
    out.push_str("</footer>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use crate::page::test_page;

    #[test]
    fn test_markdown() {
        assert_eq!(markdown("We handle **seizures**."), "<p>We handle <strong>seizures</strong>.</p>\n");
    }

    #[test]
    fn test_markdown_soft_break_survives_minify() {
        let html = markdown("We handle **seizures**\n*penalties* too.");
        let minified = crate::generator::minify_markup(&html, true);
        assert!(minified.contains("seizures</strong> <em>penalties"), "{minified}");
    }

    #[test]
    fn test_hero_cta_uses_phone() {
        let config = test_site_config();
        let html = hero(&config, &test_page());
        assert!(html.contains("<h1>Miami Customs &amp; Trade Attorneys</h1>"));
        assert!(html.contains(r#"href="tel:+13055550100""#));
    }

    #[test]
    fn test_hero_cta_without_phone() {
        let mut config = test_site_config();
        config.site.phone.clear();
        let html = hero(&config, &test_page());
        assert!(html.contains(r##"href="#evaluation""##));
    }

    #[test]
    fn test_faq_accordion_matches_record() {
        let page = test_page();
        let html = faq(&page);
        assert_eq!(html.matches("<details>").count(), page.faq.len());
        assert!(html.contains("<summary>Can you help with Section 301 duties?</summary>"));
        assert!(html.contains("exclusion requests &amp; refunds"));
    }

    #[test]
    fn test_breadcrumbs_last_is_current() {
        let html = breadcrumbs(&test_page().breadcrumb_trail());
        assert!(html.contains(r#"<li><a href="/">Home</a></li>"#));
        assert!(html.contains(r#"<li aria-current="page">Miami</li>"#));
        assert_eq!(breadcrumbs(&[]), "");
    }

    #[test]
    fn test_services_heading() {
        let html = services(&test_page());
        assert!(html.contains("<h2>Customs Law Services in Miami</h2>"));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_empty_blocks() {
        let page = LocationPage::default();
        assert_eq!(faq(&page), "");
        assert_eq!(services(&page), "");
        assert_eq!(related_links(&page), "");
        assert_eq!(sections(&page), "");
    }
}
