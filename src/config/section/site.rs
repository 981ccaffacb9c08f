//! `[site]` section: firm identity shared by every page.
//!
//! Every schema generator and every page reads these values; they are never
//! mutated after loading.
//!
//! ```toml
//! [site]
//! name = "Trembach Law"
//! url = "https://trembach.law"
//! title = "International Trade & Customs Attorneys"
//! description = "Customs compliance, tariff classification and trade remedies."
//! image = "https://trembach.law/og-image.jpg"
//! twitter = "@trembachlaw"
//! locale = "en_US"
//! phone = "+13055550100"
//! phone_display = "(305) 555-0100"
//! email = "info@trembach.law"
//!
//! [site.business]
//! kind = "LegalService"
//! city = "Miami"
//! region = "FL"
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::config::{ConfigDiagnostics, FieldPath};

/// E.164: `+`, country code, up to 15 digits total, no leading zero.
static E164: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{6,14}$").unwrap());

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Firm name, used for `og:site_name` and schema `name`.
    pub name: String,
    /// Absolute base URL every canonical path is joined with.
    pub url: String,
    /// Default document title.
    pub title: String,
    /// Default meta description.
    pub description: String,
    /// Default social preview image (absolute URL).
    pub image: String,
    /// Twitter handle including `@`.
    pub twitter: Option<String>,
    /// Open Graph locale, e.g. `en_US`.
    pub locale: String,
    /// Phone in E.164 format for structured data and `tel:` links.
    pub phone: String,
    /// Phone as shown to visitors.
    pub phone_display: String,
    pub email: String,
    pub business: BusinessConfig,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            title: String::new(),
            description: String::new(),
            image: String::new(),
            twitter: None,
            locale: "en_US".into(),
            phone: String::new(),
            phone_display: String::new(),
            email: String::new(),
            business: BusinessConfig::default(),
        }
    }
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const NAME: FieldPath = FieldPath::new("site.name");
    pub const IMAGE: FieldPath = FieldPath::new("site.image");
    pub const PHONE: FieldPath = FieldPath::new("site.phone");
    pub const EMAIL: FieldPath = FieldPath::new("site.email");
    pub const TWITTER: FieldPath = FieldPath::new("site.twitter");

    /// BCP 47 language tag for `<html lang>`, derived from the OG locale.
    ///
    /// `en_US` -> `en-US`
    pub fn language(&self) -> String {
        self.locale.replace('_', "-")
    }

    /// Phone for display, falling back to the E.164 form.
    pub fn phone_label(&self) -> &str {
        if self.phone_display.is_empty() {
            &self.phone
        } else {
            &self.phone_display
        }
    }

    /// Validate site identity.
    ///
    /// # Checks
    /// - `url` is an absolute http(s) URL with a host
    /// - `name` is set
    /// - `phone` is E.164 when present
    /// - `email` looks like an address when present
    /// - `image` is absolute when present
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(Self::NAME, "site name is required");
        }

        validate_absolute_url(&self.url, Self::URL, true, diag);
        validate_absolute_url(&self.image, Self::IMAGE, false, diag);

        if !self.phone.is_empty() && !E164.is_match(&self.phone) {
            diag.error_with_hint(
                Self::PHONE,
                format!("'{}' is not in E.164 format", self.phone),
                "use format like +13055550100, put the display form in site.phone_display",
            );
        }

        if !self.email.is_empty() && !self.email.contains('@') {
            diag.error(Self::EMAIL, format!("'{}' is not an email address", self.email));
        }

        if let Some(handle) = &self.twitter
            && !handle.starts_with('@')
        {
            diag.warn(Self::TWITTER, format!("handle '{handle}' should start with '@'"));
        }

        self.business.validate(diag);
    }
}

/// Validate an absolute http(s) URL using the `url` crate.
fn validate_absolute_url(
    value: &str,
    field: FieldPath,
    required: bool,
    diag: &mut ConfigDiagnostics,
) {
    if value.is_empty() {
        if required {
            diag.error_with_hint(field, "URL is required", "e.g.: \"https://example.com\"");
        }
        return;
    }

    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}

/// `[site.business]`: local business details for LocalBusiness structured data.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BusinessConfig {
    /// schema.org type, a LocalBusiness subtype.
    pub kind: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
    pub price_range: Option<String>,
    pub area_served: Vec<String>,
    /// Profile URLs (LinkedIn, Avvo, ...).
    pub same_as: Vec<String>,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            kind: "LegalService".into(),
            street: None,
            city: None,
            region: None,
            postal_code: None,
            country: None,
            price_range: None,
            area_served: Vec::new(),
            same_as: Vec::new(),
        }
    }
}

impl BusinessConfig {
    pub const KIND: FieldPath = FieldPath::new("site.business.kind");
    pub const SAME_AS: FieldPath = FieldPath::new("site.business.same_as");

    /// Whether any postal address field is configured.
    pub fn has_address(&self) -> bool {
        [
            &self.street,
            &self.city,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .any(|field| field.is_some())
    }

    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.kind.trim().is_empty() {
            diag.error_with_hint(
                Self::KIND,
                "business kind must not be empty",
                "use \"LegalService\" or another LocalBusiness subtype",
            );
        }
        for profile in &self.same_as {
            if url::Url::parse(profile).is_err() {
                diag.error(Self::SAME_AS, format!("'{profile}' is not an absolute URL"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn valid_site() -> SiteInfoConfig {
        SiteInfoConfig {
            name: "Trembach Law".into(),
            url: "https://trembach.law".into(),
            phone: "+13055550100".into(),
            email: "info@trembach.law".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.locale, "en_US");
        assert_eq!(config.site.business.kind, "LegalService");
        assert!(config.site.twitter.is_none());
        assert!(!config.site.business.has_address());
    }

    #[test]
    fn test_language_from_locale() {
        let site = SiteInfoConfig {
            locale: "es_MX".into(),
            ..Default::default()
        };
        assert_eq!(site.language(), "es-MX");
    }

    #[test]
    fn test_phone_label_fallback() {
        let mut site = valid_site();
        assert_eq!(site.phone_label(), "+13055550100");
        site.phone_display = "(305) 555-0100".into();
        assert_eq!(site.phone_label(), "(305) 555-0100");
    }

    #[test]
    fn test_validate_ok() {
        let mut diag = ConfigDiagnostics::new();
        valid_site().validate(&mut diag);
        assert!(!diag.has_errors(), "{:?}", diag.errors());
    }

    #[test]
    fn test_validate_rejects_bad_phone_and_url() {
        let site = SiteInfoConfig {
            url: "ftp://trembach.law".into(),
            phone: "305-555-0100".into(),
            ..valid_site()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert!(fields.contains(&SiteInfoConfig::URL));
        assert!(fields.contains(&SiteInfoConfig::PHONE));
    }

    #[test]
    fn test_validate_requires_url_and_name() {
        let mut diag = ConfigDiagnostics::new();
        SiteInfoConfig::default().validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert!(fields.contains(&SiteInfoConfig::URL));
        assert!(fields.contains(&SiteInfoConfig::NAME));
    }

    #[test]
    fn test_twitter_without_at_is_warning() {
        let site = SiteInfoConfig {
            twitter: Some("trembachlaw".into()),
            ..valid_site()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_business_address_parsing() {
        let config = test_parse_config(
            "[site.business]\ncity = \"Miami\"\ncountry = \"US\"\narea_served = [\"Florida\", \"Texas\"]",
        );
        let business = &config.site.business;
        assert!(business.has_address());
        assert_eq!(business.city.as_deref(), Some("Miami"));
        assert_eq!(business.area_served, vec!["Florida", "Texas"]);
    }
}
