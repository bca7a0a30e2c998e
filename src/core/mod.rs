pub mod decimal;
pub mod percent;
pub mod point;
pub mod processor;
pub mod range;
pub(crate) mod scale;
pub mod set;

pub use percent::PercentScale;
pub use point::{IntervalState, PointState, ScaleInterval, ScalePoint, ScaleState};
pub use processor::ScaleProcessor;
pub use range::RangeScale;
pub use set::SetScale;
