//! The Model: subject façade over one scale processor.
//!
//! Every mutator forwards to the processor and, on success, notifies the
//! attached observers with a fresh [`ScaleState`] snapshot plus a change
//! descriptor scoped to the single changed point or to the whole state.
//! Failed mutations produce no notification. Observers receive a snapshot,
//! never the live processor, so notification order cannot observe partial
//! mutation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::api::config::SliderConfig;
use crate::core::point::{IntervalState, PointState, ScaleState};
use crate::core::processor::ScaleProcessor;

/// Handle returned by [`Model::attach`], used to detach the observer later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(u64);

/// Scope of a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelChanges {
    /// A single point moved or was re-set.
    Point { index: usize },
    /// The whole scale state changed (boundaries, step, batch or structural
    /// updates).
    All,
}

/// Observer half of the subject/observer pairing between Model and View.
pub trait ModelObserver {
    fn update(&mut self, state: &ScaleState, changes: ModelChanges);
}

/// Subject owning one scale processor and an insertion-ordered observer
/// registry.
pub struct Model {
    processor: ScaleProcessor,
    observers: IndexMap<ObserverId, Box<dyn ModelObserver>>,
    next_observer_id: u64,
}

impl Model {
    /// Builds a model from a configuration object. Construction never fails;
    /// invalid configurations fall back to the selected variant's defaults.
    #[must_use]
    pub fn new(config: &SliderConfig) -> Self {
        Self {
            processor: ScaleProcessor::from_config(config),
            observers: IndexMap::new(),
            next_observer_id: 0,
        }
    }

    /// Registers an observer; the returned id detaches it again. Each
    /// registration gets a distinct id, so the registry cannot hold
    /// duplicates.
    pub fn attach(&mut self, observer: Box<dyn ModelObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.insert(id, observer);
        id
    }

    /// Removes an observer; returns `false` for an unknown id.
    pub fn detach(&mut self, id: ObserverId) -> bool {
        self.observers.shift_remove(&id).is_some()
    }

    #[must_use]
    pub fn number_of_observers(&self) -> usize {
        self.observers.len()
    }

    pub fn set_point_value(&mut self, index: usize, value: f64) -> bool {
        let applied = self.processor.set_point(value, index);
        if applied {
            self.notify(ModelChanges::Point { index });
        }
        applied
    }

    pub fn set_point_values(&mut self, values: &[f64]) -> bool {
        let applied = self.processor.set_points(values);
        if applied {
            self.notify(ModelChanges::All);
        }
        applied
    }

    pub fn move_point(&mut self, offset: f64, index: usize) -> bool {
        let applied = self.processor.move_point(offset, index);
        if applied {
            self.notify(ModelChanges::Point { index });
        }
        applied
    }

    pub fn move_point_in_percent(&mut self, index: usize, percent_offset: f64) -> bool {
        let applied = self.processor.move_point_in_percent(index, percent_offset);
        if applied {
            self.notify(ModelChanges::Point { index });
        }
        applied
    }

    pub fn add_point(&mut self, value: f64, insert_index: usize) -> bool {
        let applied = self.processor.add_point(value, insert_index);
        if applied {
            self.notify(ModelChanges::All);
        }
        applied
    }

    pub fn prepend_point(&mut self, value: f64) -> bool {
        let applied = self.processor.prepend_point(value);
        if applied {
            self.notify(ModelChanges::All);
        }
        applied
    }

    pub fn append_point(&mut self, value: f64) -> bool {
        let applied = self.processor.append_point(value);
        if applied {
            self.notify(ModelChanges::All);
        }
        applied
    }

    pub fn remove_point(&mut self, index: usize) -> bool {
        let applied = self.processor.remove_point(index);
        if applied {
            self.notify(ModelChanges::All);
        }
        applied
    }

    pub fn set_min_border(&mut self, min: f64) -> bool {
        let applied = self.processor.set_min_boundary(min);
        if applied {
            self.notify(ModelChanges::All);
        }
        applied
    }

    pub fn set_max_border(&mut self, max: f64) -> bool {
        let applied = self.processor.set_max_boundary(max);
        if applied {
            self.notify(ModelChanges::All);
        }
        applied
    }

    pub fn set_step(&mut self, step: f64) -> bool {
        let applied = self.processor.set_step(step);
        if applied {
            self.notify(ModelChanges::All);
        }
        applied
    }

    #[must_use]
    pub fn min_border(&self) -> f64 {
        self.processor.min()
    }

    #[must_use]
    pub fn max_border(&self) -> f64 {
        self.processor.max()
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.processor.step()
    }

    #[must_use]
    pub fn number_of_points(&self) -> usize {
        self.processor.number_of_points()
    }

    #[must_use]
    pub fn point_value(&self, index: usize) -> Option<f64> {
        self.processor.point_value(index)
    }

    /// Percent position of a point on the scale.
    #[must_use]
    pub fn point_location_on_scale(&self, index: usize) -> Option<f64> {
        self.processor.point_percent(index)
    }

    #[must_use]
    pub fn point_values(&self) -> Vec<f64> {
        self.processor.point_values()
    }

    /// Percent positions of every point.
    #[must_use]
    pub fn point_scale(&self) -> Vec<f64> {
        self.processor.point_percents()
    }

    /// Lengths of every interval, boundary gaps included.
    #[must_use]
    pub fn distances(&self) -> Vec<f64> {
        self.processor.distances()
    }

    #[must_use]
    pub fn distance_to_borders(&self, index: usize) -> Option<[f64; 2]> {
        self.processor.distance_to_borders(index)
    }

    #[must_use]
    pub fn view(&self, value: f64) -> String {
        self.processor.view(value)
    }

    #[must_use]
    pub fn point_state(&self, index: usize) -> Option<PointState> {
        self.processor.point_state(index)
    }

    #[must_use]
    pub fn interval_state(&self, index: usize) -> Option<IntervalState> {
        self.processor.interval_state(index)
    }

    #[must_use]
    pub fn scale_state(&self) -> ScaleState {
        self.processor.scale_state()
    }

    #[must_use]
    pub fn grid(&self, density: f64, from: Option<f64>, to: Option<f64>) -> Vec<PointState> {
        self.processor.grid(density, from, to)
    }

    fn notify(&mut self, changes: ModelChanges) {
        let state = self.processor.scale_state();
        for observer in self.observers.values_mut() {
            observer.update(&state, changes);
        }
    }
}
