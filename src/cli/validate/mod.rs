//! SEO lint for page records and site configuration.
//!
//! Errors fail the command unless `--warn-only` is given:
//! - empty description
//! - record that does not load: parse error, duplicate slug, or a slug with a
//!   URL scheme, `//`, or a `.`/`..` segment
//! - config validation errors
//!
//! Warnings never fail it:
//! - description longer than 160 characters, title longer than 60
//! - page without FAQ entries
//! - internal link to a path no page record renders

mod report;

use anyhow::{Result, bail};
use rustc_hash::FxHashSet;

use crate::cli::ValidateArgs;
use crate::config::{ConfigDiagnostic, SiteConfig};
use crate::log;
use crate::page::{LocationPage, page_metadata, scan_pages};
use crate::utils::{plural_count, plural_s};

use report::ValidationReport;

const MAX_DESCRIPTION: usize = 160;
const MAX_TITLE: usize = 60;

/// Validate site config and every page record.
pub fn validate_site(args: &ValidateArgs, config: &SiteConfig) -> Result<()> {
    let report = lint_site(config)?;
    report.print();
    log!("validate"; "{}", report);

    let errors = report.error_count();
    if errors > 0 && !args.warn_only {
        bail!("validation failed: {} error{}", errors, plural_s(errors));
    }
    Ok(())
}

/// Collect findings for the config and every record without printing.
fn lint_site(config: &SiteConfig) -> Result<ValidationReport> {
    let mut report = ValidationReport::default();
    check_config(config, &mut report);

    let (pages, errors) = scan_pages(&config.build.content)?;
    log!(
        "validate";
        "validating {}",
        plural_count(pages.len() + errors.len(), "page")
    );

    for err in &errors {
        let source = err
            .path()
            .map(|path| config.root_relative(path).display().to_string())
            .unwrap_or_default();
        report.error(source, err.field(), err.to_string());
    }

    let known: FxHashSet<String> = pages.iter().map(LocationPage::path).collect();
    for page in &pages {
        let source = config.root_relative(&page.source).display().to_string();
        check_page(config, page, &known, &source, &mut report);
    }
    Ok(report)
}

fn check_config(config: &SiteConfig, report: &mut ValidationReport) {
    let source = config.root_relative(&config.config_path).display().to_string();
    let diag = config.diagnostics();

    let message = |d: &ConfigDiagnostic| match &d.hint {
        Some(hint) => format!("{} ({hint})", d.message),
        None => d.message.clone(),
    };
    for d in diag.errors() {
        report.error(&source, d.field.as_str(), message(d));
    }
    for d in diag.warnings() {
        report.warn(&source, d.field.as_str(), message(d));
    }
}

fn check_page(
    config: &SiteConfig,
    page: &LocationPage,
    known: &FxHashSet<String>,
    source: &str,
    report: &mut ValidationReport,
) {
    let meta = page_metadata(config, page);

    let description = meta.description.trim();
    if page.description.trim().is_empty() {
        report.error(source, "description", "is empty");
    } else if description.chars().count() > MAX_DESCRIPTION {
        report.warn(
            source,
            "description",
            format!(
                "is {} characters, search results truncate after {MAX_DESCRIPTION}",
                description.chars().count()
            ),
        );
    }

    let title_len = meta.title.chars().count();
    if title_len > MAX_TITLE {
        report.warn(
            source,
            "title",
            format!("is {title_len} characters, search results truncate after {MAX_TITLE}"),
        );
    }

    if page.faq.is_empty() {
        report.warn(source, "faq", "no entries, the page gets no FAQPage structured data");
    }

    for link in &page.links {
        let href = link.href.trim();
        if href.starts_with('/') && !href.starts_with("//") && !known.contains(href) {
            report.warn(source, "links", format!("`{href}` is not rendered by any page record"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use crate::page::test_page;
    use std::fs;
    use tempfile::TempDir;

    fn lint(page: &LocationPage) -> ValidationReport {
        let config = test_site_config();
        let known: FxHashSet<String> = ["/customs-law-houston/".to_string()].into_iter().collect();
        let mut report = ValidationReport::default();
        check_page(&config, page, &known, "page.toml", &mut report);
        report
    }

    fn fields(report: &ValidationReport) -> Vec<&str> {
        report
            .findings("page.toml")
            .iter()
            .map(|f| f.field.as_str())
            .collect()
    }

    #[test]
    fn test_clean_page() {
        let report = lint(&test_page());
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn test_length_warnings() {
        let page = LocationPage {
            title: "T".repeat(61),
            description: "d".repeat(161),
            ..test_page()
        };
        let report = lint(&page);
        assert_eq!(report.error_count(), 0);
        assert_eq!(fields(&report), ["description", "title"]);
    }

    #[test]
    fn test_empty_description_is_error() {
        let page = LocationPage {
            description: "  ".into(),
            ..test_page()
        };
        let report = lint(&page);
        assert_eq!(report.error_count(), 1);
        assert_eq!(fields(&report), ["description"]);
    }

    #[test]
    fn test_missing_faq_and_unknown_link() {
        let mut page = test_page();
        page.faq.clear();
        page.links[0].href = "/customs-law-tampa/".into();
        let report = lint(&page);
        assert_eq!(report.error_count(), 0);
        assert_eq!(fields(&report), ["faq", "links"]);
    }

    fn site_with(records: &[(&str, &str)]) -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        let mut config = test_site_config();
        config.root = dir.path().to_path_buf();
        config.config_path = dir.path().join("site.toml");
        config.build.normalize(dir.path());
        fs::create_dir_all(&config.build.content).unwrap();
        for (name, content) in records {
            fs::write(config.build.content.join(name), content).unwrap();
        }
        (dir, config)
    }

    #[test]
    fn test_bad_slugs_reported_per_record() {
        let (_dir, config) = site_with(&[
            ("escape.toml", "slug = \"../escaped\"\ndescription = \"d\""),
            ("double.toml", "slug = \"customs//miami\"\ndescription = \"d\""),
            ("absolute.toml", "slug = \"https://trembach.law/x\"\ndescription = \"d\""),
        ]);
        let report = lint_site(&config).unwrap();

        assert_eq!(report.error_count(), 3);
        for (file, needle) in [
            ("content/escape.toml", ".."),
            ("content/double.toml", "//"),
            ("content/absolute.toml", "scheme"),
        ] {
            let findings = report.findings(file);
            assert_eq!(findings.len(), 1, "{file}");
            assert_eq!(findings[0].field, "slug");
            assert!(findings[0].message.contains(needle), "{}", findings[0].message);
        }
    }

    #[test]
    fn test_validate_site_warn_only() {
        let (_dir, config) = site_with(&[("blank.toml", "slug = \"blank\"\ntitle = \"Blank\"")]);

        assert!(validate_site(&ValidateArgs::default(), &config).is_err());
        assert!(validate_site(&ValidateArgs { warn_only: true }, &config).is_ok());
    }
}
