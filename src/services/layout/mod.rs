// Layout service module
// Grid positions and header lists for the calendar frame

use thiserror::Error;

use crate::utils::range::RangeError;

pub mod cache;
pub mod grid;
pub mod headers;
pub mod renderer;

pub use cache::LayoutCache;
pub use grid::{last_grid_row, to_grid_row};
pub use headers::{build_headers, build_headers_with_options, warn_unknown_option};
pub use renderer::{
    DefaultDayRenderer, DefaultRenderers, DefaultTimeRenderer, HeaderContent, HeaderRenderers,
    Renderer,
};

/// Reasons a layout cannot be computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("minute precision must be positive")]
    ZeroPrecision,
    #[error("displayed interval must be positive")]
    ZeroInterval,
    #[error("calendar minutes exceed the supported grid range")]
    Overflow,
}
