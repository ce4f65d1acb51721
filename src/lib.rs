//! Multi-year calendar rendered as plain text, months tiled in a grid.
//!
//! Features:
//! - Lazy, single-pass rendering over any span of years
//! - Configurable months per row, cell width and gaps
//! - Localized weekday and month names

pub mod args;
pub mod calendar;
pub mod dates;
pub mod error;
pub mod group;
pub mod locale;
pub mod logging;
pub mod month;
pub mod row;
pub mod text;
pub mod types;

pub use calendar::{Calendar, RenderLines, render};
pub use error::CalendarError;
pub use types::Layout;
