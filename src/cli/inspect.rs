//! Head inspection: simulate navigations across pages.
//!
//! Every requested page is applied, in order, to one shared head through a
//! single `HeadManager`, the same way a browser session would move between
//! pages. The final head is printed, so stale or duplicated tags show up
//! directly in the output.

use anyhow::{Result, bail};
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::cli::InspectArgs;
use crate::config::SiteConfig;
use crate::head::{Head, HeadManager};
use crate::page::{LocationPage, load_pages, page_metadata};
use crate::{debug, log};

pub fn inspect_pages(args: &InspectArgs, config: &SiteConfig) -> Result<()> {
    let pages = load_pages(&config.build.content)?;
    let head = navigate(config, &pages, &args.slugs, args.release)?;

    if args.json {
        println!("{}", json_ld_array(&head)?);
    } else {
        println!("{}", head.to_html());
    }
    Ok(())
}

/// Apply each slug's metadata in sequence and return the resulting head.
///
/// With `release`, the last page is unmounted before returning, which must
/// leave exactly the site head.
fn navigate(
    config: &SiteConfig,
    pages: &[LocationPage],
    slugs: &[String],
    release: bool,
) -> Result<Head> {
    let by_slug: FxHashMap<String, &LocationPage> =
        pages.iter().map(|p| (p.resolved_slug(), p)).collect();

    let mut head = Head::base(config);
    let mut manager = HeadManager::new(config);

    for slug in slugs {
        let key = slug.trim_matches('/');
        let Some(page) = by_slug.get(key) else {
            bail!("no page record with slug `{}`", key);
        };

        let meta = page_metadata(config, page);
        let outcome = manager.apply(&mut head, &meta);
        debug!("inspect"; "{}: {:?}", key, outcome);
    }

    if release && manager.is_present() {
        let removed = manager.release(&mut head);
        debug!("inspect"; "released {} page tags", removed);
    }

    let duplicates = head.duplicate_keys();
    if !duplicates.is_empty() {
        log!("warning"; "duplicate head keys: {}", duplicates.join(", "));
    }
    Ok(head)
}

/// JSON-LD fragments of `head`, pretty-printed as one array.
fn json_ld_array(head: &Head) -> Result<String> {
    let fragments = head
        .json_ld()
        .map(serde_json::from_str::<Value>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(serde_json::to_string_pretty(&fragments)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use crate::page::test_page;

    fn houston() -> LocationPage {
        LocationPage {
            city: "Houston".into(),
            practice_area: "Trade Remedies".into(),
            title: "Houston Trade Remedies Attorney".into(),
            description: "Antidumping and countervailing duty counsel.".into(),
            keywords: None,
            faq: vec![],
            ..test_page()
        }
    }

    #[test]
    fn test_navigation_leaves_latest_page_only() {
        let config = test_site_config();
        let pages = [test_page(), houston()];
        let slugs = ["customs-law-miami".to_string(), "trade-remedies-houston".to_string()];

        let head = navigate(&config, &pages, &slugs, false).unwrap();
        let html = head.to_html();

        assert_eq!(head.title(), Some("Houston Trade Remedies Attorney"));
        assert!(head.duplicate_keys().is_empty());
        assert!(!html.contains("Miami Customs Lawyer"));
        assert!(!html.contains("customs-law-miami"));
        assert!(!html.contains("FAQPage"));
        assert!(head.get("meta:name:keywords").is_none());
    }

    #[test]
    fn test_release_restores_site_head() {
        let config = test_site_config();
        let slugs = ["customs-law-miami".to_string()];
        let head = navigate(&config, &[test_page()], &slugs, true).unwrap();

        assert_eq!(head, Head::base(&config));
        assert_eq!(head.json_ld().count(), 0);
    }

    #[test]
    fn test_unknown_slug() {
        let config = test_site_config();
        let err = navigate(&config, &[test_page()], &["nowhere".to_string()], false).unwrap_err();
        assert!(err.to_string().contains("nowhere"));
    }

    #[test]
    fn test_json_ld_array() {
        let config = test_site_config();
        let head = navigate(&config, &[test_page()], &["/customs-law-miami/".to_string()], false).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_ld_array(&head).unwrap()).unwrap();
        let types: Vec<_> = parsed.iter().map(|v| v["@type"].as_str().unwrap()).collect();
        assert_eq!(
            types,
            ["WebPage", "BreadcrumbList", "Service", "Service", "FAQPage", "LegalService"]
        );
    }
}
