// File: crates/lakechart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod line;
pub mod mark;
pub mod record;
pub mod scale;
pub mod theme;
pub mod toggle;
pub mod types;

pub use axis::{Axis, TickFormat};
pub use chart::{Chart, RenderOptions, SceneError};
pub use dataset::DatasetError;
pub use mark::{Mark, Scene};
pub use record::{DataRecord, Series};
pub use scale::LinearScale;
pub use theme::Theme;
pub use toggle::{ToggleControl, Visibility, VisibilityController};
