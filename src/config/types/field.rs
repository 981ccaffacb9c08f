//! Config field path used in diagnostics.

/// Dotted path of a config field, e.g. `site.url` or `build.sitemap.path`.
///
/// ```ignore
/// diag.error(SiteInfoConfig::URL, "must be an absolute URL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
