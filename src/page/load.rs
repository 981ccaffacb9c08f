//! Content directory scanning and record parsing.

use jwalk::WalkDir;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::LocationPage;

/// Page record errors, each naming the offending file.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content directory `{0}` does not exist")]
    MissingDir(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse `{0}`")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("`{0}` has no usable slug, set `slug` or `city`/`practice_area`")]
    EmptySlug(PathBuf),

    #[error("`{path}` has an invalid slug: {reason}")]
    InvalidSlug { path: PathBuf, reason: String },

    #[error("slug `{slug}` is used by both `{first}` and `{second}`")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl ContentError {
    /// Record file the error is about, `None` for directory-level errors.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::MissingDir(_) => None,
            Self::Io(path, _) | Self::Parse(path, _) | Self::EmptySlug(path) => Some(path.as_path()),
            Self::InvalidSlug { path, .. } => Some(path.as_path()),
            Self::DuplicateSlug { second, .. } => Some(second.as_path()),
        }
    }

    /// Record field the error is about.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptySlug(_) | Self::InvalidSlug { .. } | Self::DuplicateSlug { .. } => "slug",
            _ => "record",
        }
    }
}

/// Collect `*.toml` record files under `dir`, sorted for stable output.
fn collect_record_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort();
    files
}

/// Parse one record file.
pub fn load_page(path: &Path) -> Result<LocationPage, ContentError> {
    let content =
        fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
    let mut page: LocationPage =
        toml::from_str(&content).map_err(|err| ContentError::Parse(path.to_path_buf(), err))?;
    page.source = path.to_path_buf();

    if page.resolved_slug().is_empty() {
        return Err(ContentError::EmptySlug(page.source));
    }
    if let Some(reason) = page.slug_problem() {
        return Err(ContentError::InvalidSlug {
            path: page.source,
            reason,
        });
    }
    Ok(page)
}

/// Parse every record under `dir`, keeping failed records as errors.
///
/// Pages are sorted by slug, errors follow file order. The second record
/// claiming a slug is reported as `DuplicateSlug` and left out.
pub fn scan_pages(dir: &Path) -> Result<(Vec<LocationPage>, Vec<ContentError>), ContentError> {
    if !dir.is_dir() {
        return Err(ContentError::MissingDir(dir.to_path_buf()));
    }

    let results: Vec<_> = collect_record_files(dir)
        .par_iter()
        .map(|path| load_page(path))
        .collect();

    let mut pages = Vec::with_capacity(results.len());
    let mut errors = Vec::new();
    let mut seen: FxHashMap<String, PathBuf> = FxHashMap::default();
    for result in results {
        match result {
            Ok(page) => {
                let slug = page.resolved_slug();
                if let Some(first) = seen.get(&slug) {
                    errors.push(ContentError::DuplicateSlug {
                        slug,
                        first: first.clone(),
                        second: page.source,
                    });
                } else {
                    seen.insert(slug, page.source.clone());
                    pages.push(page);
                }
            }
            Err(err) => errors.push(err),
        }
    }

    pages.sort_by_cached_key(LocationPage::resolved_slug);
    Ok((pages, errors))
}

/// Load every record under `dir`, failing on the first bad record.
///
/// Pages are returned sorted by slug.
pub fn load_pages(dir: &Path) -> Result<Vec<LocationPage>, ContentError> {
    let (pages, errors) = scan_pages(dir)?;
    match errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(pages),
    }
}
