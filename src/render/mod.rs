//! Landing page template.
//!
//! Every location record is rendered by the same template. The head comes
//! from a `Head` kept in sync by `HeadManager`, so the served document
//! already carries the page's title, meta tags and JSON-LD.

mod body;
mod form;

use crate::config::SiteConfig;
use crate::head::Head;
use crate::page::LocationPage;
use crate::utils::html::escape_attr;

/// Render the full document for `page` around an already-synchronized head.
pub fn render_page(config: &SiteConfig, page: &LocationPage, head: &Head) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!doctype html>\n");
    html.push_str(&format!(
        "<html lang=\"{}\">\n",
        escape_attr(&config.site.language())
    ));
    html.push_str(&head.to_html());
    html.push_str("\n<body>\n");
    html.push_str(&body::site_header(config));

    html.push_str("<main>\n");
    html.push_str(&body::hero(config, page));
    html.push_str(&body::breadcrumbs(&page.breadcrumb_trail()));
    html.push_str(&body::sections(page));
    html.push_str(&body::services(page));
    html.push_str(&body::faq(page));
    html.push_str(&body::related_links(page));
    html.push_str(&form::form_section(
        &config.build.form,
        &page.resolved_slug(),
    ));
    html.push_str("</main>\n");

    html.push_str(&body::site_footer(config));
    html.push_str(&form::form_script(&config.build.form));
    html.push_str("</body>\n</html>\n");
    html
}
