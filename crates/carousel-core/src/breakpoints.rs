//! Responsive bands controlling how many items fit the viewport.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One viewport band. Applies up to and including `max_width`; the last
/// band is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    #[serde(default)]
    pub max_width: Option<u32>,
    pub items_visible: f64,
}

impl Breakpoint {
    pub fn up_to(max_width: u32, items_visible: f64) -> Self {
        Self {
            max_width: Some(max_width),
            items_visible,
        }
    }

    pub fn open(items_visible: f64) -> Self {
        Self {
            max_width: None,
            items_visible,
        }
    }
}

/// Ordered list of bands, narrowest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoints(Vec<Breakpoint>);

impl Default for Breakpoints {
    fn default() -> Self {
        Self(vec![
            Breakpoint::up_to(768, 2.0),
            Breakpoint::up_to(1200, 4.0),
            Breakpoint::open(6.5),
        ])
    }
}

impl Breakpoints {
    pub fn new(bands: Vec<Breakpoint>) -> Result<Self, ConfigError> {
        let breakpoints = Self(bands);
        breakpoints.validate()?;
        Ok(breakpoints)
    }

    /// Check ordering and values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some((last, bounded)) = self.0.split_last() else {
            return Err(ConfigError::Invalid("at least one breakpoint is required".into()));
        };
        if last.max_width.is_some() {
            return Err(ConfigError::Invalid(
                "the widest breakpoint must not have a max_width".into(),
            ));
        }

        let mut previous = None;
        for band in bounded {
            let Some(max) = band.max_width else {
                return Err(ConfigError::Invalid(
                    "only the widest breakpoint may omit max_width".into(),
                ));
            };
            if previous.is_some_and(|p| max <= p) {
                return Err(ConfigError::Invalid(format!(
                    "breakpoint max_width {} is not ascending",
                    max
                )));
            }
            previous = Some(max);
        }

        if let Some(band) = self
            .0
            .iter()
            .find(|b| !(b.items_visible.is_finite() && b.items_visible > 0.0))
        {
            return Err(ConfigError::Invalid(format!(
                "items_visible must be positive, got {}",
                band.items_visible
            )));
        }

        Ok(())
    }

    /// Bands, narrowest first.
    pub fn bands(&self) -> &[Breakpoint] {
        &self.0
    }

    /// Band applying to a viewport `width` in CSS pixels.
    pub fn band_for(&self, width: f64) -> Option<&Breakpoint> {
        self.0
            .iter()
            .find(|b| b.max_width.map_or(true, |max| width <= f64::from(max)))
    }

    /// Items visible at a viewport `width`.
    pub fn items_visible(&self, width: f64) -> f64 {
        self.band_for(width).map_or(1.0, |b| b.items_visible)
    }
}
