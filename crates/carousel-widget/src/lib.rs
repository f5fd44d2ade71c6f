//! "You Might Also Like" product carousel for product detail pages.
//!
//! Compiled to WebAssembly and loaded on a product detail page. On start the
//! widget looks for its anchor (`.product-detail` by default), inserts itself
//! right after it and loads products from the local cache or the catalog
//! endpoint. Pages without the anchor are left untouched.
//!
//! The page may carry a configuration block:
//!
//! ```html
//! <script type="application/json" id="pdp-carousel-config">
//!   { "title": "Similar items", "currency_suffix": "EUR" }
//! </script>
//! ```

mod components;
mod dom;
mod source;
mod storage;

use carousel_core::{CarouselConfig, StructuredLogger};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

pub use components::Carousel;
pub use source::HttpSource;
pub use storage::BrowserStorage;

/// Component name used in log entries.
pub const COMPONENT: &str = "pdp-carousel";

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init(page_config());
}

/// Mount the carousel after the configured anchor.
///
/// Does nothing when the anchor is missing. Calling this twice on the same
/// page mounts two carousels.
pub fn init(config: CarouselConfig) {
    let logger = StructuredLogger::new(COMPONENT)
        .with_anchor(config.anchor_selector.clone())
        .with_min_level(config.log_level)
        .with_format(config.log_format);

    let Some(document) = dom::document() else {
        return;
    };
    let Some(anchor) = dom::find_anchor(&document, &config.anchor_selector) else {
        logger.debug("Anchor not found, carousel not mounted");
        return;
    };

    let container = match dom::insert_container_after(&document, &anchor) {
        Ok(container) => container,
        Err(e) => {
            logger
                .error_builder("Failed to insert carousel container")
                .field("error", dom::describe_js(&e))
                .emit();
            return;
        }
    };

    logger.debug("Mounting carousel");
    leptos::mount::mount_to(container, move || view! { <Carousel config=config logger=logger/> })
        .forget();
}

/// Configuration from the page's JSON block, or defaults.
fn page_config() -> CarouselConfig {
    let Some(text) = dom::document().and_then(|d| dom::config_text(&d)) else {
        return CarouselConfig::default();
    };

    CarouselConfig::from_json(&text).unwrap_or_else(|e| {
        StructuredLogger::new(COMPONENT)
            .error_builder("Invalid carousel configuration, using defaults")
            .field("error", e.to_string())
            .emit();
        CarouselConfig::default()
    })
}
