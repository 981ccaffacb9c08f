//! `[build]` section: paths and output toggles.
//!
//! ```toml
//! [build]
//! content = "content"
//! output = "public"
//! minify = true
//! title_suffix = true
//!
//! [build.sitemap]
//! enable = true
//!
//! [build.robots]
//! disallow = ["/thank-you/"]
//!
//! [build.form]
//! script = "/assets/lead-form.js"
//! action = "/api/lead"
//!
//! [build.head]
//! icon = "/favicon.ico"
//! styles = ["/assets/site.css"]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Directory holding one TOML record per landing page.
    pub content: PathBuf,
    /// Output directory for rendered HTML.
    pub output: PathBuf,
    /// Strip indentation and blank lines from generated markup.
    pub minify: bool,
    /// Remove the output directory before building.
    #[serde(skip)]
    pub clean: bool,
    /// Render titles as `"{page title} | {site name}"`.
    pub title_suffix: bool,
    pub sitemap: SitemapConfig,
    pub robots: RobotsConfig,
    pub form: FormConfig,
    pub head: HeadConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            minify: true,
            clean: false,
            title_suffix: false,
            sitemap: SitemapConfig::default(),
            robots: RobotsConfig::default(),
            form: FormConfig::default(),
            head: HeadConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub const CONTENT: FieldPath = FieldPath::new("build.content");
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");
    pub const SITEMAP_PATH: FieldPath = FieldPath::new("build.sitemap.path");

    /// Resolve relative directories against the project root.
    pub fn normalize(&mut self, root: &Path) {
        self.content = root.join(&self.content);
        self.output = root.join(&self.output);
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.content == self.output {
            diag.error_with_hint(
                Self::OUTPUT,
                "output directory must differ from content directory",
                "the output directory is overwritten on every build",
            );
        } else if self.content.starts_with(&self.output) {
            diag.error_with_hint(
                Self::CONTENT,
                "content directory must not be inside the output directory",
                "`build --clean` removes the output directory",
            );
        }
        if self.sitemap.enable && self.sitemap.path.is_absolute() {
            diag.error(
                Self::SITEMAP_PATH,
                "sitemap path must be relative to the output directory",
            );
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    pub enable: bool,
    /// Output path, relative to the output directory.
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    pub enable: bool,
    /// Paths listed as `Disallow:` for all user agents.
    pub disallow: Vec<String>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enable: true,
            disallow: Vec::new(),
        }
    }
}

/// Lead-capture form mount point. The form itself ships as a separate module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Module URL loaded lazily into the form placeholder.
    pub script: Option<String>,
    /// Endpoint for the no-JavaScript fallback form.
    pub action: Option<String>,
}

/// Site-wide head entries that are not owned by any page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeadConfig {
    pub icon: Option<String>,
    pub styles: Vec<String>,
}
