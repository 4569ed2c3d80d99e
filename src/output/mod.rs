//! Report renderers
//!
//! - [`TextRenderer`]: the two-section console report with a bar chart
//! - [`JsonRenderer`]: the same data as JSON (requires the `serde` feature)

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod json;
mod text;

#[cfg(feature = "serde")]
pub use json::JsonRenderer;
pub use text::TextRenderer;
