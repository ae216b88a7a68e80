use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// Outbound fetch timeout in seconds, 0 disables it
    pub timeout: u64,
    /// User agent sent when fetching recipe pages
    pub user_agent: String,
    /// Field name to CSS selector table
    pub selectors: SelectorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with WPRM__ prefix
    /// 2. The given file, or config.toml in the current directory
    /// 3. Default values
    ///
    /// Environment variable format: WPRM__SELECTORS__TITLE
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_config(path)
    }

    /// Fetch timeout, `None` when disabled
    pub fn fetch_timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then_some(Duration::from_secs(self.timeout))
    }
}

/// CSS selectors for every scraped field.
///
/// Row selectors (`*_row`) pick one node per list entry; the other list
/// selectors are applied relative to each row. Defaults follow the
/// WP Recipe Maker plugin markup.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SelectorConfig {
    pub ingredient_row: String,
    pub ingredient_amount: String,
    pub ingredient_unit: String,
    pub ingredient_name: String,

    pub instruction_row: String,
    pub instruction_text: String,

    pub nutrition_row: String,
    pub nutrition_value: String,
    pub nutrition_unit: String,
    pub nutrition_label: String,

    pub servings: String,
    pub servings_unit: String,
    pub cuisine: String,
    pub course: String,
    pub author: String,
    pub prep_time: String,
    pub prep_time_unit: String,
    pub cook_time: String,
    pub cook_time_unit: String,
    /// Every match is joined, so value and unit selectors go in one group
    pub total_time: String,
    pub summary: String,
    pub title: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        let s = |value: &str| value.to_string();
        Self {
            ingredient_row: s(".wprm-recipe-ingredient-group .wprm-recipe-ingredient"),
            ingredient_amount: s(".wprm-recipe-ingredient-amount"),
            ingredient_unit: s(".wprm-recipe-ingredient-unit"),
            ingredient_name: s(".wprm-recipe-ingredient-name"),

            instruction_row: s(
                ".wprm-recipe-instruction-group .wprm-recipe-instructions .wprm-recipe-instruction",
            ),
            instruction_text: s(".wprm-recipe-instruction-text"),

            nutrition_row: s(".wprm-nutrition-label-text-nutrition-container"),
            nutrition_value: s(".wprm-nutrition-label-text-nutrition-value"),
            nutrition_unit: s(".wprm-nutrition-label-text-nutrition-unit"),
            nutrition_label: s(".wprm-nutrition-label-text-nutrition-label"),

            servings: s(".wprm-recipe-servings"),
            servings_unit: s(".wprm-recipe-servings-unit"),
            cuisine: s(".wprm-recipe-cuisine"),
            course: s(".wprm-recipe-course"),
            author: s(".wprm-recipe-author"),
            prep_time: s(".wprm-recipe-prep_time"),
            prep_time_unit: s(".wprm-recipe-prep_time-unit"),
            cook_time: s(".wprm-recipe-cook_time"),
            cook_time_unit: s(".wprm-recipe-cook_time-unit"),
            total_time: s(".wprm-recipe-total_time, .wprm-recipe-total_time-unit"),
            summary: s(".wprm-recipe-summary"),
            title: s(".breadcrumb_last"),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String {
    "localhost:4000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; WprmRecipeScraper/0.1)".to_string()
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        // Optional config file (can be missing)
        None => File::with_name("config").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: WPRM__SELECTORS__TITLE
        .add_source(
            Environment::with_prefix("WPRM")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr, "localhost:4000");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.fetch_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.selectors.title, ".breadcrumb_last");
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let config = AppConfig {
            timeout: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.fetch_timeout(), None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = std::env::temp_dir().join(format!("wprm-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "listen_addr = \"127.0.0.1:8080\"").unwrap();
        writeln!(file, "[selectors]").unwrap();
        writeln!(file, "title = \"h1.entry-title\"").unwrap();
        drop(file);

        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.selectors.title, "h1.entry-title");
        assert_eq!(
            config.selectors.servings,
            SelectorConfig::default().servings
        );
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = Path::new("/nonexistent/wprm-config.toml");
        assert!(load_config(Some(path)).is_err());
    }
}
