//! Stylesheet injected alongside the carousel markup.

use crate::Breakpoints;

/// Margin on each side of an item, as set in `.carousel-item`.
const ITEM_MARGIN_PX: f64 = 4.0;

const BASE_STYLES: &str = r#"
.custom-carousel-container {
    position: relative;
    padding: 20px;
    background-color: #f4f5f7;
    border-style: none;
    font-family: 'Open Sans', sans-serif;
    overflow: hidden;
}

.custom-carousel {
    position: relative;
    width: 80%;
    margin: 20px auto;
    align-items: center;
}

.custom-carousel h2 {
    padding-bottom: 10px;
    font-family: 'Open Sans', sans-serif;
    font-size: 32px;
    line-height: 43px;
    color: #29323b;
    font-weight: lighter;
}

.carousel-wrapper {
    position: relative;
    overflow: hidden;
    display: flex;
    justify-content: flex-start;
    align-items: center;
}

.carousel-item {
    margin: 4px;
    display: flex;
    flex-direction: column;
    background: #fff;
    border-radius: 0px;
    overflow: hidden;
    position: relative;
    justify-content: space-between;
}

.carousel-item img {
    width: 100%;
    height: auto;
    object-fit: cover;
    cursor: pointer;
    -webkit-user-drag: none;
}

.carousel-item .product-name {
    font-size: 13px;
    margin: 10px 8px 4px;
    text-align: left;
    flex-grow: 1;
    cursor: pointer;
    color: #302e2b;
}

.carousel-item .price {
    font-size: 18px;
    color: #223ca9;
    margin: 5px 8px 10px;
    text-align: left;
}

.carousel-item .heart {
    position: absolute;
    top: 12px;
    right: 14px;
    width: 30px;
    height: 30px;
    background: #fff;
    border-radius: 10%;
    display: flex;
    justify-content: center;
    align-items: center;
    box-shadow: 0 2px 5px rgba(0, 0, 0, 0.2);
    cursor: pointer;
    font-size: 18px;
    color: #ccc;
    transition: color 0.3s;
}

.custom-carousel-arrow {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    border: none;
    color: #373737;
    font-size: 20px;
    width: 40px;
    height: 40px;
    cursor: pointer;
    z-index: 10;
    background: none;
}

.custom-carousel-arrow.left {
    left: -40px;
}

.custom-carousel-arrow.right {
    right: -40px;
}
"#;

/// Render the widget stylesheet.
///
/// Item widths come from `breakpoints`, so the measured item width used for
/// snapping and paging follows the same bands.
pub fn render_stylesheet(breakpoints: &Breakpoints, settle_transition: &str) -> String {
    let mut css = String::from(BASE_STYLES);
    let bands = breakpoints.bands();

    css.push_str(&format!(
        r#"
.carousel-track {{
    display: flex;
    transition: {transition};
    width: max-content;
    align-items: stretch;
    user-select: none;
    touch-action: pan-y;
}}
"#,
        transition = settle_transition
    ));

    if let Some(widest) = bands.last() {
        css.push_str(&item_rule(widest.items_visible, true));
    }

    let mut previous_max: Option<u32> = None;
    for (index, band) in bands.iter().enumerate() {
        let query = match (previous_max, band.max_width) {
            (None, Some(max)) => format!("(max-width: {}px)", max),
            (Some(prev), Some(max)) => {
                format!("(min-width: {}px) and (max-width: {}px)", prev + 1, max)
            }
            (Some(prev), None) => format!("(min-width: {}px)", prev + 1),
            (None, None) => {
                // A single open band is already covered by the base rule.
                continue;
            }
        };

        css.push_str(&format!("\n@media {} {{", query));
        css.push_str(&item_rule(band.items_visible, false));
        if index == 0 {
            css.push_str(
                r#"
    .custom-carousel h2 {
        font-size: 27px;
    }

    .custom-carousel {
        margin: 0;
    }
"#,
            );
        }
        css.push_str("}\n");
        previous_max = band.max_width;
    }

    css
}

/// Item width rule: `items_visible` outer boxes, margins included, per
/// viewport width.
fn item_rule(items_visible: f64, with_max_width: bool) -> String {
    let width = format!("calc(100% / {} - {}px)", items_visible, 2.0 * ITEM_MARGIN_PX);
    if with_max_width {
        format!(
            "\n.carousel-item {{\n    flex: 0 0 {w};\n    max-width: {w};\n}}\n",
            w = width
        )
    } else {
        format!("\n    .carousel-item {{\n        flex: 0 0 {};\n    }}\n", width)
    }
}
