//! Lead-capture form mount point.
//!
//! The form is an opaque, separately shipped module. The page only renders a
//! placeholder with a loading fallback, a `<noscript>` plain form posting to
//! the configured endpoint, and a module script that hydrates the placeholder.

use crate::config::FormConfig;
use crate::utils::html::{escape, escape_attr};

pub const FORM_ANCHOR: &str = "evaluation";

/// Form section placed at the end of `<main>`.
pub fn form_section(form: &FormConfig, page_slug: &str) -> String {
    let mut out = format!("<section id=\"{FORM_ANCHOR}\" class=\"evaluation\">\n");
    out.push_str("<h2>Request a Free Case Evaluation</h2>\n");
    out.push_str(&format!(
        "<div data-lead-form data-page=\"{}\">\n<p class=\"loading\">Loading form…</p>\n</div>\n",
        escape_attr(page_slug)
    ));

    if let Some(action) = &form.action {
        out.push_str("<noscript>\n");
        out.push_str(&format!(
            "<form method=\"post\" action=\"{}\">\n",
            escape_attr(action)
        ));
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"page\" value=\"{}\">\n",
            escape_attr(page_slug)
        ));
        for (name, label, kind) in [
            ("name", "Name", "text"),
            ("email", "Email", "email"),
            ("phone", "Phone", "tel"),
        ] {
            out.push_str(&format!(
                "<label>{} <input type=\"{kind}\" name=\"{name}\" required></label>\n",
                escape(label)
            ));
        }
        out.push_str("<label>How can we help? <textarea name=\"message\"></textarea></label>\n");
        out.push_str("<button type=\"submit\">Send</button>\n</form>\n</noscript>\n");
    }

    out.push_str("</section>\n");
    out
}

/// Deferred module script for the form, if configured.
pub fn form_script(form: &FormConfig) -> String {
    form.script
        .as_deref()
        .map(|src| {
            format!(
                "<script type=\"module\" src=\"{}\"></script>\n",
                escape_attr(src)
            )
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_only() {
        let html = form_section(&FormConfig::default(), "customs-law-miami");
        assert!(html.contains(r#"data-page="customs-law-miami""#));
        assert!(html.contains("Loading form"));
        assert!(!html.contains("<noscript>"));
        assert_eq!(form_script(&FormConfig::default()), "");
    }

    #[test]
    fn test_noscript_fallback_and_script() {
        let form = FormConfig {
            script: Some("/assets/lead-form.js".into()),
            action: Some("/api/lead".into()),
        };
        let html = form_section(&form, "customs-law-miami");
        assert!(html.contains(r#"<form method="post" action="/api/lead">"#));
        assert!(html.contains(r#"name="email""#));
        assert_eq!(
            form_script(&form),
            "<script type=\"module\" src=\"/assets/lead-form.js\"></script>\n"
        );
    }
}
