//! `robots.txt` generation.

use crate::{
    config::SiteConfig,
    log,
    meta::url::absolute_url,
    utils::write::{WriteStatus, write_if_changed},
};
use anyhow::{Context, Result};

/// Write `robots.txt` into the output directory if enabled.
pub fn build_robots(config: &SiteConfig) -> Result<()> {
    if !config.build.robots.enable {
        return Ok(());
    }

    let path = config.build.output.join("robots.txt");
    let status = write_if_changed(&path, robots_txt(config).as_bytes())
        .with_context(|| format!("Failed to write robots.txt to {}", path.display()))?;

    if status == WriteStatus::Written {
        log!("robots"; "{}", config.root_relative(&path).display());
    }
    Ok(())
}

fn robots_txt(config: &SiteConfig) -> String {
    let mut out = String::from("User-agent: *\n");

    if config.build.robots.disallow.is_empty() {
        out.push_str("Disallow:\n");
    }
    for path in &config.build.robots.disallow {
        out.push_str("Disallow: ");
        out.push_str(path.trim());
        out.push('\n');
    }

    if config.build.sitemap.enable && !config.site.url.is_empty() {
        let sitemap = config.build.sitemap.path.to_string_lossy().replace('\\', "/");
        out.push_str("\nSitemap: ");
        out.push_str(&absolute_url(&config.site.url, &sitemap));
        out.push('\n');
    }

    out
}
