#![warn(clippy::all, rust_2018_idioms)]

pub mod buffer;
pub mod color;
pub mod fill;
pub mod history;
pub mod util;

pub use buffer::PixelBuffer;
pub use color::{Color, ColorParseError};
pub use fill::{FillError, FillResult, flood_fill};
pub use history::{BoundedHistory, HistoryError, Snapshot};
