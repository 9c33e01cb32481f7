// File: ./src/config.rs
// Widget configuration: source selection, endpoint, locale, test seams.
use anyhow::Result;
use camino::Utf8PathBuf;
use chrono::Locale;
use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "https://images-api.nasa.gov".to_string()
}

fn default_term() -> String {
    "Moon Landing".to_string()
}

fn default_resource() -> Utf8PathBuf {
    Utf8PathBuf::from("response.json")
}

/// Which backing source the widget synchronizes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A bundled JSON listing of dated events.
    Local,
    /// The public image-search API.
    #[default]
    Remote,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct WidgetConfig {
    #[serde(default)]
    pub source: SourceKind,
    /// Path of the local listing. Only read when `source` is `local`.
    #[serde(default = "default_resource")]
    pub resource: Utf8PathBuf,
    /// Base URL of the search API. Only used when `source` is `remote`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Initial search term.
    #[serde(default = "default_term")]
    pub term: String,
    /// Locale tag ("en-US", "fr_FR"). Empty means: ask the operating system,
    /// falling back to en_US.
    #[serde(default)]
    pub locale: String,
    /// How long the widget stays in `Loading` after records are applied, in
    /// milliseconds. Lets consumers observe the loading indicator; a test
    /// seam, default off.
    #[serde(default)]
    pub loading_hold_ms: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            // Match the serde defaults
            resource: default_resource(),
            endpoint: default_endpoint(),
            term: default_term(),
            locale: String::new(),
            loading_hold_ms: 0,
        }
    }
}

impl WidgetConfig {
    /// Parse a TOML fragment. Callers own where the text comes from; the
    /// crate never touches config paths or environment variables itself.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: WidgetConfig = toml::from_str(text)
            .map_err(|e| anyhow::anyhow!("Failed to parse widget config: {}", e))?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the configured locale tag to a chrono locale.
    ///
    /// An empty tag consults the system locale; unknown tags fall back to
    /// `en_US` rather than failing the whole widget over month names.
    pub fn resolve_locale(&self) -> Locale {
        let tag = if self.locale.is_empty() {
            sys_locale::get_locale().unwrap_or_default()
        } else {
            self.locale.clone()
        };
        // sys-locale reports BCP-47 ("en-US"); chrono wants POSIX ("en_US").
        Locale::try_from(tag.replace('-', "_").as_str()).unwrap_or(Locale::en_US)
    }
}
