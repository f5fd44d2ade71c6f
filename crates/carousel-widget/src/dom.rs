//! Page integration: anchor lookup, container injection and measurement.

use carousel_core::{parse_px, parse_translate_x, StructuredLogger, TrackMetrics};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Class of the element inserted after the anchor.
pub const CONTAINER_CLASS: &str = "custom-carousel-container";

/// Id of the optional JSON configuration block on the page.
pub const CONFIG_ELEMENT_ID: &str = "pdp-carousel-config";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Width of the layout viewport, the width media queries match against.
pub fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// First element matching `selector`. An invalid selector counts as absent.
pub fn find_anchor(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Create the widget container directly after `anchor`.
pub fn insert_container_after(document: &Document, anchor: &Element) -> Result<HtmlElement, JsValue> {
    let container = document.create_element("div")?;
    container.set_class_name(CONTAINER_CLASS);
    anchor.after_with_node_1(&container)?;
    container.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

/// Text of the page's configuration block, if present.
pub fn config_text(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// Measure the wrapper, the track and the first item.
pub fn measure_track(wrapper: &HtmlElement, track: &HtmlElement) -> TrackMetrics {
    let viewport_width = wrapper.get_bounding_client_rect().width();
    let scroll_width = f64::from(track.scroll_width());
    let item_width = track
        .query_selector(".carousel-item")
        .ok()
        .flatten()
        .map(|item| outer_width(&item))
        .unwrap_or(0.0);

    TrackMetrics::new(item_width, viewport_width, scroll_width)
}

/// Rendered width plus horizontal margins.
fn outer_width(element: &Element) -> f64 {
    let width = element.get_bounding_client_rect().width();
    let margins = computed_property(element, "margin-left")
        .and_then(|m| parse_px(&m))
        .unwrap_or(0.0)
        + computed_property(element, "margin-right")
            .and_then(|m| parse_px(&m))
            .unwrap_or(0.0);
    width + margins
}

/// Horizontal translation currently rendered for `track`, mid-transition
/// included.
pub fn rendered_offset(track: &Element) -> Option<f64> {
    computed_property(track, "transform").and_then(|t| parse_translate_x(&t))
}

fn computed_property(element: &Element, name: &str) -> Option<String> {
    let style = web_sys::window()?.get_computed_style(element).ok().flatten()?;
    style.get_property_value(name).ok()
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str, logger: &StructuredLogger) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        logger
            .warn_builder("Failed to open product page")
            .field("url", url)
            .field("error", describe_js(&e))
            .emit();
    }
}

/// Readable form of a thrown JS value.
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
