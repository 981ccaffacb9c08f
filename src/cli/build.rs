//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Init** - Clean (if requested) and create the output directory
//! - **Load** - Parse every page record under the content directory
//! - **Render** - Parallel metadata assembly, head application and rendering
//! - **Generate** - Sitemap and robots.txt from the assembled metadata

use crate::{
    config::SiteConfig,
    debug,
    generator::{minify_markup, robots::build_robots, sitemap::build_sitemap},
    head::{Head, HeadManager},
    log,
    logger::ProgressLine,
    meta::PageMetadata,
    page::{LocationPage, load_pages, page_metadata},
    render::render_page,
    schema::StructuredData,
    utils::{
        plural_count,
        write::{WriteStatus, write_if_changed},
    },
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{fs, path::Path};

/// Outcome of rendering one page.
struct Rendered {
    meta: PageMetadata,
    status: WriteStatus,
}

/// Build the entire site.
///
/// Pipeline: init -> load -> render -> generate
pub fn build_site(config: &SiteConfig) -> Result<()> {
    init_output(&config.build.output, config.build.clean)?;

    let pages = load_pages(&config.build.content)?;
    if pages.is_empty() {
        log!(
            "warning";
            "no page records found in {}",
            config.root_relative(&config.build.content).display()
        );
    }

    let base = Head::base(config);
    let progress = ProgressLine::new("build", &[("pages", pages.len())]);

    let rendered = pages
        .par_iter()
        .map(|page| {
            let result = render_one(config, &base, page);
            progress.inc("pages");
            result
        })
        .collect::<Result<Vec<_>>>()?;
    progress.finish();

    let written = rendered
        .iter()
        .filter(|r| r.status == WriteStatus::Written)
        .count();
    log!(
        "build";
        "{} written, {} unchanged",
        plural_count(written, "page"),
        rendered.len() - written
    );

    let metas: Vec<_> = rendered.into_iter().map(|r| r.meta).collect();
    let (sitemap_result, robots_result) =
        rayon::join(|| build_sitemap(config, &metas), || build_robots(config));
    sitemap_result?;
    robots_result?;

    log!("build"; "done");
    Ok(())
}

/// Assemble, apply and render a single page into `output/<slug>/index.html`.
fn render_one(config: &SiteConfig, base: &Head, page: &LocationPage) -> Result<Rendered> {
    let meta = page_metadata(config, page);

    let mut head = base.clone();
    HeadManager::new(config).apply(&mut head, &meta);

    let html = render_page(config, page, &head);
    let html = minify_markup(&html, config.build.minify);

    let path = output_path(&config.build.output, page);
    let status = write_if_changed(&path, html.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!(
        "build";
        "{} -> {} ({} head tags: {})",
        page.source.display(),
        config.root_relative(&path).display(),
        head.len(),
        meta.schema
            .iter()
            .map(StructuredData::schema_type)
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(Rendered { meta, status })
}

fn output_path(output: &Path, page: &LocationPage) -> std::path::PathBuf {
    output.join(page.resolved_slug()).join("index.html")
}

/// Ensure the output directory exists, clearing it first when `clean` is set.
fn init_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}
