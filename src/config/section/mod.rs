//! Configuration section definitions.
//!
//! | Module  | TOML Section | Purpose                                  |
//! |---------|--------------|------------------------------------------|
//! | `site`  | `[site]`     | Firm identity, business details          |
//! | `build` | `[build]`    | Paths, sitemap, robots, form, site head  |

mod build;
mod site;

pub use build::{BuildSectionConfig, FormConfig, HeadConfig, RobotsConfig, SitemapConfig};
pub use site::{BusinessConfig, SiteInfoConfig};
