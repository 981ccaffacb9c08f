//! Site initialization.
//!
//! Scaffolds `site.toml`, a content directory holding one example page
//! record, and a `.gitignore` for the output directory.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::log;

const SITE_TEMPLATE: &str = r#"[site]
name = "Example Law Firm"
url = "https://example.com"
title = "International Trade & Customs Attorneys"
description = "Customs, export controls and trade remedies counsel for importers and exporters."
image = "https://example.com/og-image.jpg"
locale = "en_US"
phone = "+13055550100"
phone_display = "(305) 555-0100"
email = "intake@example.com"

[site.business]
kind = "LegalService"
city = "Miami"
region = "FL"
country = "US"
area_served = ["United States"]

[build]
content = "content"
output = "public"
minify = true
title_suffix = false

[build.robots]
disallow = []

[build.form]
# script = "/assets/lead-form.js"
# action = "/api/lead"
"#;

const PAGE_TEMPLATE: &str = r#"city = "Miami"
practice_area = "Customs Law"
title = "Miami Customs Lawyer"
description = "Customs audits, seizures and penalties in South Florida."
keywords = "customs lawyer miami, cbp seizure attorney"

[hero]
heading = "Miami Customs & Trade Attorneys"
subheading = "Counsel for importers at PortMiami and MIA."
cta = "Call for a free consultation"

[[sections]]
heading = "How we help"
body = """
We represent importers in **CBP seizures**, penalty proceedings and
customs audits.
"""

[[services]]
name = "Seizure Petitions"
description = "Petitions for relief from seizure and forfeiture."

[[faq]]
question = "What should I do after a CBP seizure notice?"
answer = "Contact counsel before the 30-day petition deadline."
"#;

/// Create a new site at the configured root.
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();

    if config.config_path.exists() {
        bail!(
            "{} already exists, refusing to overwrite",
            config.config_path.display()
        );
    }

    let content = root.join(&config.build.content);
    fs::create_dir_all(&content)
        .with_context(|| format!("Failed to create {}", content.display()))?;

    write_new(&config.config_path, SITE_TEMPLATE)?;
    write_new(&content.join("customs-law-miami.toml"), PAGE_TEMPLATE)?;

    let ignore = root.join(".gitignore");
    if !ignore.exists() {
        let output = config.build.output.to_string_lossy();
        write_new(&ignore, &format!("/{}/\n", output.trim_matches('/')))?;
    }

    log!("init"; "site initialized in {}", root.display());
    Ok(())
}

fn write_new(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        bail!("{} already exists, refusing to overwrite", path.display());
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
