//! Widget configuration.

use serde::{Deserialize, Serialize};

use crate::{Breakpoints, ConfigError, DragMode, LogFormat, LogLevel};

/// Catalog endpoint serving the recommended products.
pub const DEFAULT_PRODUCTS_URL: &str = "https://gist.githubusercontent.com/sevindi/5765c5812bbc823a38b3cf52f233651/raw/56261d81af8561bf0a7cf692fe572f9e1e91f37/products.json";

/// Configuration for one carousel instance.
///
/// Every field has a default, so an empty JSON object is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Selector of the element the widget is inserted after.
    pub anchor_selector: String,
    /// Heading shown above the track.
    pub title: String,
    /// URL of the JSON product list.
    pub products_url: String,
    /// Storage key of the cached product list.
    pub products_key: String,
    /// Storage key of the favorite ids.
    pub favorites_key: String,
    /// Text appended to prices.
    pub currency_suffix: String,
    /// Responsive item counts.
    pub breakpoints: Breakpoints,
    /// CSS transition used when the track settles or pages.
    pub settle_transition: String,
    /// Clamp the track to its bounds while the pointer is still down.
    pub clamp_while_dragging: bool,
    /// Pointer travel (px) after which a gesture counts as a drag and no
    /// longer opens the product on release.
    pub click_slop_px: f64,
    /// Minimum level written to the console.
    pub log_level: LogLevel,
    /// Console output format.
    pub log_format: LogFormat,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            anchor_selector: ".product-detail".to_string(),
            title: "You Might Also Like".to_string(),
            products_url: DEFAULT_PRODUCTS_URL.to_string(),
            products_key: "products".to_string(),
            favorites_key: "favorites".to_string(),
            currency_suffix: "TL".to_string(),
            breakpoints: Breakpoints::default(),
            settle_transition: "transform 0.3s ease-in-out".to_string(),
            clamp_while_dragging: false,
            click_slop_px: 5.0,
            log_level: LogLevel::Info,
            log_format: LogFormat::Human,
        }
    }
}

impl CarouselConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anchor_selector.trim().is_empty() {
            return Err(ConfigError::Invalid("anchor_selector is empty".into()));
        }
        if self.products_url.trim().is_empty() {
            return Err(ConfigError::Invalid("products_url is empty".into()));
        }
        if self.products_key.is_empty() || self.favorites_key.is_empty() {
            return Err(ConfigError::Invalid("storage keys must not be empty".into()));
        }
        if self.products_key == self.favorites_key {
            return Err(ConfigError::Invalid(format!(
                "products_key and favorites_key are both {:?}",
                self.products_key
            )));
        }
        if !(self.click_slop_px.is_finite() && self.click_slop_px >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "click_slop_px must be a non-negative number, got {}",
                self.click_slop_px
            )));
        }
        self.breakpoints.validate()
    }

    /// Drag behavior selected by `clamp_while_dragging`.
    pub fn drag_mode(&self) -> DragMode {
        if self.clamp_while_dragging {
            DragMode::Clamped
        } else {
            DragMode::RubberBand
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = CarouselConfig::from_json("{}").unwrap();
        assert_eq!(config, CarouselConfig::default());
        assert_eq!(config.anchor_selector, ".product-detail");
        assert_eq!(config.products_key, "products");
        assert_eq!(config.favorites_key, "favorites");
        assert_eq!(config.drag_mode(), DragMode::RubberBand);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "title": "Similar items",
            "currency_suffix": "EUR",
            "clamp_while_dragging": true,
            "log_level": "debug",
            "log_format": "json"
        }"#;
        let config = CarouselConfig::from_json(json).unwrap();

        assert_eq!(config.title, "Similar items");
        assert_eq!(config.currency_suffix, "EUR");
        assert_eq!(config.drag_mode(), DragMode::Clamped);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.products_url, DEFAULT_PRODUCTS_URL);
    }

    #[test]
    fn test_malformed_json() {
        let result = CarouselConfig::from_json("{\"title\": ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_shared_storage_key() {
        let result = CarouselConfig::from_json(r#"{"favorites_key": "products"}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_negative_slop() {
        let result = CarouselConfig::from_json(r#"{"click_slop_px": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_breakpoints() {
        let result = CarouselConfig::from_json(r#"{"breakpoints": [{"max_width": 500, "items_visible": 2}]}"#);
        assert!(result.is_err());
    }
}
