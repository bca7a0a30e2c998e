pub mod config;
pub mod model;

pub use config::{ScaleKind, SliderConfig};
pub use model::{Model, ModelChanges, ModelObserver, ObserverId};
