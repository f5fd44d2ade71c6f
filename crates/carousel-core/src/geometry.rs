//! Track geometry: bounds, snapping and paging.
//!
//! Offsets are horizontal translations of the track in CSS pixels. `0` shows
//! the first item flush left; moving towards the end of the list makes the
//! offset more negative, down to [`TrackMetrics::min_offset`].

/// Paging direction of an arrow control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the start of the list (offset grows towards `0`).
    Left,
    /// Towards the end of the list (offset shrinks towards the lower bound).
    Right,
}

/// Measured dimensions of the carousel, captured from the rendered page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    /// Outer width of one item, margins included.
    pub item_width: f64,
    /// Visible width of the wrapper around the track.
    pub viewport_width: f64,
    /// Full scrollable width of the track.
    pub scroll_width: f64,
}

impl TrackMetrics {
    pub fn new(item_width: f64, viewport_width: f64, scroll_width: f64) -> Self {
        Self {
            item_width,
            viewport_width,
            scroll_width,
        }
    }

    /// Most negative offset allowed: the end of the track aligned with the
    /// right edge of the viewport. `0` when the track fits the viewport.
    pub fn min_offset(&self) -> f64 {
        (self.viewport_width - self.scroll_width).min(0.0)
    }

    /// Restrict `offset` to `[min_offset, 0]`.
    pub fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(self.min_offset(), 0.0)
    }

    /// Settle a raw drag offset on the nearest item boundary.
    ///
    /// A raw offset past the start settles at `0`. Without a usable item
    /// width the offset is only clamped.
    pub fn snap(&self, raw: f64) -> f64 {
        if raw.is_nan() || raw >= 0.0 {
            return 0.0;
        }
        if self.item_width <= 0.0 {
            return self.clamp(raw);
        }

        let nearest_index = (raw.abs() / self.item_width).round();
        self.clamp(-(nearest_index * self.item_width))
    }

    /// Move one item in `direction` from `offset`, staying in bounds.
    pub fn step(&self, offset: f64, direction: Direction) -> f64 {
        let next = match direction {
            Direction::Left => offset + self.item_width,
            Direction::Right => offset - self.item_width,
        };
        self.clamp(next)
    }

    /// Number of items fully visible at once.
    pub fn items_per_page(&self) -> usize {
        if self.item_width <= 0.0 {
            return 0;
        }
        // Absorb sub-pixel rounding from layout.
        ((self.viewport_width + 0.5) / self.item_width).floor() as usize
    }
}

/// Parse a CSS pixel length such as `"4px"` or `"-12.5px"`.
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    if number.is_empty() {
        return None;
    }
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Extract the horizontal translation from a CSS transform value.
///
/// Understands computed values (`none`, `matrix(...)`, `matrix3d(...)`) and
/// the inline `translateX(...px)` form the widget writes itself.
pub fn parse_translate_x(transform: &str) -> Option<f64> {
    let transform = transform.trim();
    if transform.is_empty() || transform == "none" {
        return Some(0.0);
    }

    let (name, args) = transform.strip_suffix(')')?.split_once('(')?;
    let args: Vec<&str> = args.split(',').map(str::trim).collect();

    match name.trim() {
        "matrix" if args.len() == 6 => args[4].parse().ok(),
        "matrix3d" if args.len() == 16 => args[12].parse().ok(),
        "translateX" | "translate" | "translate3d" => args.first().and_then(|a| parse_px(a)),
        _ => None,
    }
}
