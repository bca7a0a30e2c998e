//! slider-rs: range-slider data-model core.
//!
//! This crate implements the Model side of an MVP range-slider widget: an
//! ordered point sequence on a bounded scale with step-quantized movement,
//! decimal-safe arithmetic, and percent-of-scale conversions. Rendering and
//! gesture handling belong to host View/Presenter layers, which consume the
//! [`api::Model`] query surface and its change notifications.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{Model, ModelChanges, ModelObserver, ObserverId, ScaleKind, SliderConfig};
pub use error::{SliderError, SliderResult};
