use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use slider_rs::core::ScaleState;
use slider_rs::{Model, ModelChanges, ModelObserver, SliderConfig};

/// Records every notification it receives, sharing the log with the test body.
struct RecordingObserver {
    log: Rc<RefCell<Vec<(ModelChanges, ScaleState)>>>,
}

impl RecordingObserver {
    fn attached(model: &mut Model) -> Rc<RefCell<Vec<(ModelChanges, ScaleState)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        model.attach(Box::new(Self { log: Rc::clone(&log) }));
        log
    }
}

impl ModelObserver for RecordingObserver {
    fn update(&mut self, state: &ScaleState, changes: ModelChanges) {
        self.log.borrow_mut().push((changes, state.clone()));
    }
}

fn range_model() -> Model {
    let config = SliderConfig {
        range: Some([0.0, 10.0]),
        values: Some(vec![1.0, 2.5, 5.0, 10.0]),
        step: Some(2.0),
        ..SliderConfig::default()
    };
    Model::new(&config)
}

#[test]
fn exposes_point_locations_as_percents() {
    let model = range_model();
    assert_eq!(model.point_location_on_scale(0), Some(10.0));
    assert_eq!(model.point_location_on_scale(1), Some(25.0));
    assert_eq!(model.point_location_on_scale(2), Some(50.0));
    assert_eq!(model.point_location_on_scale(3), Some(100.0));
    assert_eq!(model.point_location_on_scale(4), None);
}

#[test]
fn exposes_point_values_and_distances() {
    let model = range_model();
    assert_eq!(model.point_values(), vec![1.0, 2.5, 5.0, 10.0]);
    assert_eq!(model.point_value(2), Some(5.0));
    assert_eq!(model.point_scale(), vec![10.0, 25.0, 50.0, 100.0]);
    assert_eq!(model.distances(), vec![1.0, 1.5, 2.5, 5.0, 0.0]);
    assert_eq!(model.distance_to_borders(0), Some([1.0, 1.5]));
    assert_eq!(model.distance_to_borders(3), Some([5.0, 0.0]));
    assert_eq!(model.distance_to_borders(9), None);
}

#[test]
fn set_point_value_notifies_with_point_scope() {
    let mut model = range_model();
    let log = RecordingObserver::attached(&mut model);

    assert!(!model.set_point_value(0, 2.6)); // exceeds right neighbor
    assert!(!model.set_point_value(0, -1.0));
    assert!(log.borrow().is_empty()); // failures never notify

    assert!(model.set_point_value(0, 1.5));
    assert_eq!(model.point_value(0), Some(1.5));
    assert!(model.set_point_value(0, 1.0));

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].0, ModelChanges::Point { index: 0 });
    assert_eq!(log[0].1.points[0].value, 1.5);
    assert_eq!(log[1].1.points[0].value, 1.0);
}

#[test]
fn border_and_step_mutations_notify_with_all_scope() {
    let mut model = range_model();
    let log = RecordingObserver::attached(&mut model);

    assert!(!model.set_min_border(1.1));
    assert!(model.set_min_border(1.0));
    assert_eq!(model.min_border(), 1.0);
    assert!(model.set_min_border(0.0));

    assert!(!model.set_max_border(0.9));
    assert!(model.set_max_border(20.0));
    assert_eq!(model.max_border(), 20.0);
    assert_eq!(model.point_scale(), vec![5.0, 12.5, 25.0, 50.0]);

    assert!(!model.set_step(25.0));
    assert!(model.set_step(10.0));
    assert_eq!(model.step(), 10.0);

    let log = log.borrow();
    assert_eq!(log.len(), 4);
    assert!(log.iter().all(|entry| entry.0 == ModelChanges::All));
}

#[test]
fn batch_and_structural_mutations_notify_with_all_scope() {
    let mut model = range_model();
    let log = RecordingObserver::attached(&mut model);

    assert!(model.set_point_values(&[0.0, 2.0, 4.0, 8.0]));
    assert!(!model.set_point_values(&[4.0, 2.0, 4.0, 8.0]));
    assert!(model.add_point(3.0, 2));
    assert!(model.remove_point(2));
    assert!(model.append_point(9.0));
    assert!(model.prepend_point(0.0));

    let log = log.borrow();
    assert_eq!(log.len(), 5);
    assert!(log.iter().all(|entry| entry.0 == ModelChanges::All));
}

#[test]
fn move_point_notifies_with_point_scope() {
    let mut model = range_model();
    let log = RecordingObserver::attached(&mut model);

    assert!(!model.move_point(0.0, 1)); // insignificant offsets never notify
    assert!(model.move_point(2.0, 2));
    assert!(model.move_point_in_percent(3, -20.0));

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].0, ModelChanges::Point { index: 2 });
    assert_eq!(log[1].0, ModelChanges::Point { index: 3 });
}

#[test]
fn detached_observers_stop_receiving_notifications() {
    let mut model = range_model();

    let log = Rc::new(RefCell::new(Vec::new()));
    let id = model.attach(Box::new(RecordingObserver { log: Rc::clone(&log) }));
    assert_eq!(model.number_of_observers(), 1);

    assert!(model.set_point_value(0, 1.5));
    assert_eq!(log.borrow().len(), 1);

    assert!(model.detach(id));
    assert!(!model.detach(id)); // unknown id after removal
    assert_eq!(model.number_of_observers(), 0);

    assert!(model.set_point_value(0, 2.0));
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn observers_are_notified_in_attach_order() {
    let mut model = range_model();
    let first = RecordingObserver::attached(&mut model);
    let second = RecordingObserver::attached(&mut model);

    assert!(model.set_point_value(0, 1.5));
    assert_eq!(first.borrow().len(), 1);
    assert_eq!(second.borrow().len(), 1);
}

#[test]
fn set_model_walks_indices_and_renders_views() {
    let set: Vec<serde_json::Value> = ('a'..='z').map(|c| json!(c.to_string())).collect();
    let mut model = Model::new(&SliderConfig::for_set(set, vec![10.0, 20.0], 1.0));

    assert!(model.move_point(-10.0, 0));
    assert_eq!(model.point_value(0), Some(0.0));

    assert!(model.move_point(25.0, 1));
    assert_eq!(model.point_value(1), Some(25.0));

    assert_eq!(model.view(0.0), "a");
    assert_eq!(model.view(25.0), "z");
    assert_eq!(model.scale_state().points[1].view, "z");
}

#[test]
fn model_state_snapshots_are_consistent() {
    let model = range_model();
    let state = model.scale_state();

    assert_eq!(state.min.value, 0.0);
    assert_eq!(state.max.value, 10.0);
    assert_eq!(state.step, 2.0);
    assert_eq!(state.intervals.len(), state.points.len() + 1);

    assert_eq!(model.point_state(1).expect("point").value, 2.5);
    assert_eq!(model.interval_state(1).expect("interval").value, 1.5);
    assert!(model.point_state(7).is_none());
    assert!(model.interval_state(7).is_none());

    let grid = model.grid(2.0, None, None);
    assert_eq!(grid.len(), 6);
    assert_eq!(grid.last().expect("grid end").value, 10.0);
}
