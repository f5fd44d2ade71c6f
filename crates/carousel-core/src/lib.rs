//! Platform-independent logic for the product-detail-page carousel.
//!
//! This crate provides:
//! - `Product` / `ProductId` - product records as served by the catalog endpoint
//! - `Favorites` - the persisted set of favorite product ids
//! - `Store` - typed key/value access over a pluggable `KvBackend`
//! - `load_products` - cache-or-fetch product loading through a `ProductSource`
//! - `TrackMetrics` - snap, paging and clamping arithmetic for the track
//! - `DragTracker` - the pointer drag state machine
//! - `CarouselConfig` - widget configuration with defaults
//! - `StructuredLogger` - structured logging to the console or stderr
//!
//! # Example
//!
//! ```rust
//! use carousel_core::{Direction, TrackMetrics};
//!
//! let metrics = TrackMetrics::new(100.0, 650.0, 1000.0);
//! assert_eq!(metrics.step(0.0, Direction::Left), 0.0);
//! assert_eq!(metrics.step(0.0, Direction::Right), -100.0);
//! ```

mod breakpoints;
mod config;
mod drag;
mod error;
mod favorites;
mod geometry;
mod loader;
mod logging;
mod product;
mod storage;
mod style;

pub use breakpoints::{Breakpoint, Breakpoints};
pub use config::CarouselConfig;
pub use drag::{starts_drag, DragMode, DragPhase, DragTracker};
pub use error::{ConfigError, FetchError, StorageError};
pub use favorites::{toggle_favorite, Favorites};
pub use geometry::{parse_px, parse_translate_x, Direction, TrackMetrics};
pub use loader::{load_products, LoadOutcome, ProductSource};
pub use logging::{LogBuilder, LogEntry, LogFormat, LogLevel, StructuredLogger};
pub use product::{Product, ProductId};
pub use storage::{KvBackend, MemoryBackend, Store};
pub use style::render_stylesheet;

