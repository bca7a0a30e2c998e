use serde_json::json;
use slider_rs::core::SetScale;
use slider_rs::{ScaleKind, SliderConfig};

fn alphabet() -> Vec<serde_json::Value> {
    ('a'..='z').map(|letter| json!(letter.to_string())).collect()
}

fn alphabet_config(values: Vec<f64>, step: f64) -> SliderConfig {
    SliderConfig::for_set(alphabet(), values, step)
}

#[test]
fn builds_with_boundary_defaults_spanning_the_set() {
    let scale = SetScale::from_config(&alphabet_config(vec![10.0, 20.0], 1.0));
    assert_eq!(scale.min_boundary_state().value, 0.0);
    assert_eq!(scale.max_boundary_state().value, 25.0);
    assert_eq!(scale.last_index_of_set(), 25);
    let state = scale.scale_state();
    assert_eq!(state.points.len(), 2);
    assert_eq!(state.intervals.len(), 3);
}

#[test]
fn invalid_config_falls_back_to_the_alphabet_defaults() {
    let fallback_cases = [
        // Missing set.
        SliderConfig {
            kind: ScaleKind::Set,
            values: Some(vec![0.0]),
            step: Some(1.0),
            ..SliderConfig::default()
        },
        // Null item in the set.
        SliderConfig {
            kind: ScaleKind::Set,
            set: Some(vec![json!("a"), json!(null), json!("c")]),
            values: Some(vec![0.0]),
            step: Some(1.0),
            ..SliderConfig::default()
        },
        // Fractional point value.
        alphabet_config(vec![1.5], 1.0),
        // Negative point value.
        alphabet_config(vec![-2.0], 1.0),
        // Fractional step.
        alphabet_config(vec![3.0], 0.5),
        // Max beyond the last set index.
        SliderConfig {
            max: Some(40.0),
            ..alphabet_config(vec![3.0], 1.0)
        },
        // Decreasing values.
        alphabet_config(vec![5.0, 3.0], 1.0),
    ];

    for config in fallback_cases {
        let scale = SetScale::from_config(&config);
        assert_eq!(scale.min_boundary_state().value, 0.0);
        assert_eq!(scale.max_boundary_state().value, 25.0);
        assert_eq!(scale.point_state(0).expect("default point").value, 0.0);
        assert_eq!(scale.scale_state().step, 1.0);
        assert_eq!(scale.point_state(0).expect("default point").view, "a");
    }
}

#[test]
fn move_point_walks_and_clamps_on_set_indices() {
    let mut scale = SetScale::from_config(&alphabet_config(vec![10.0, 20.0], 1.0));

    assert!(scale.move_point(-10.0, 0));
    assert_eq!(scale.point_state(0).expect("point").value, 0.0);

    // A 25-index jump from 20 clamps at the max boundary index.
    assert!(scale.move_point(25.0, 1));
    assert_eq!(scale.point_state(1).expect("point").value, 25.0);
}

#[test]
fn integral_guards_apply_to_runtime_mutators() {
    let mut scale = SetScale::from_config(&alphabet_config(vec![10.0, 20.0], 1.0));

    assert!(!scale.set_point(10.5, 0));
    assert!(scale.set_point(11.0, 0));

    assert!(!scale.set_step(1.5));
    assert!(scale.set_step(2.0));

    assert!(!scale.set_min_boundary(0.5));
    assert!(!scale.set_min_boundary(-1.0));
    assert!(scale.set_min_boundary(1.0));

    assert!(!scale.set_max_boundary(24.5));
    assert!(!scale.set_max_boundary(26.0)); // beyond the last set index
    assert!(scale.set_max_boundary(24.0));

    assert!(!scale.add_point(12.5, 1));
    assert!(scale.add_point(12.0, 1));
}

#[test]
fn set_points_requires_a_non_decreasing_index_batch() {
    let mut scale = SetScale::from_config(&alphabet_config(vec![5.0, 10.0], 1.0));

    assert!(!scale.set_points(&[2.0, 1.0]));
    assert!(!scale.set_points(&[2.5, 7.0]));
    assert!(!scale.set_points(&[-1.0, 7.0]));
    assert_eq!(
        scale.scale_state().points.iter().map(|p| p.value).collect::<Vec<_>>(),
        vec![5.0, 10.0]
    );

    assert!(scale.set_points(&[2.0, 7.0]));
    assert_eq!(
        scale.scale_state().points.iter().map(|p| p.value).collect::<Vec<_>>(),
        vec![2.0, 7.0]
    );
}

#[test]
fn views_index_into_the_set() {
    let scale = SetScale::from_config(&alphabet_config(vec![0.0, 25.0], 1.0));
    assert_eq!(scale.point_state(0).expect("point").view, "a");
    assert_eq!(scale.point_state(1).expect("point").view, "z");
    assert_eq!(scale.min_boundary_state().view, "a");
    assert_eq!(scale.max_boundary_state().view, "z");
    assert_eq!(scale.view(7.0), "h");
}

#[test]
fn non_string_items_are_stringified() {
    let items = vec![json!(1), json!(true), json!({ "label": "c" })];
    let scale = SetScale::from_config(&SliderConfig::for_set(items, vec![0.0, 1.0], 1.0));
    assert_eq!(scale.view(0.0), "1");
    assert_eq!(scale.view(1.0), "true");
    assert_eq!(scale.view(2.0), "{\"label\":\"c\"}");
}

#[test]
fn grid_requires_integral_density_and_window() {
    let scale = SetScale::from_config(&alphabet_config(vec![10.0], 1.0));

    assert!(scale.grid(0.5, None, None).is_empty());
    assert!(scale.grid(1.0, Some(0.5), Some(5.0)).is_empty());
    assert!(scale.grid(1.0, Some(0.0), Some(5.5)).is_empty());

    let grid = scale.grid(10.0, None, None);
    let values: Vec<f64> = grid.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![0.0, 10.0, 20.0, 25.0]);
    let views: Vec<&str> = grid.iter().map(|p| p.view.as_str()).collect();
    assert_eq!(views, vec!["a", "k", "u", "z"]);
}

#[test]
fn explicit_integer_boundaries_are_honored() {
    let config = SliderConfig {
        min: Some(5.0),
        max: Some(15.0),
        ..alphabet_config(vec![10.0], 1.0)
    };
    let scale = SetScale::from_config(&config);
    assert_eq!(scale.min_boundary_state().value, 5.0);
    assert_eq!(scale.max_boundary_state().value, 15.0);
    assert_eq!(scale.min_boundary_state().view, "f");
    assert_eq!(scale.max_boundary_state().view, "p");
}
