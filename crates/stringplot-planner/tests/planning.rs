use proptest::prelude::*;
use stringplot_core::{collection_bounds, MachineGeometry, Path, Point};
use stringplot_planner::{travel_distance, PathFitter, PathScheduler};

fn triangle_ending_at(x: f64, y: f64) -> Path {
    vec![Point::new(x, y + 0.5), Point::new(x + 0.5, y), Point::new(x, y)]
}

fn arb_path() -> impl Strategy<Value = Path> {
    prop::collection::vec((-300.0f64..300.0, -300.0f64..300.0), 0..6)
        .prop_map(|pts| pts.into_iter().map(Point::from).collect())
}

#[test]
fn scheduler_prefers_near_end_points() {
    let paths = vec![
        triangle_ending_at(0.0, 0.0),
        triangle_ending_at(10.0, 10.0),
        triangle_ending_at(1.0, 1.0),
        triangle_ending_at(9.0, 9.0),
    ];
    assert_eq!(PathScheduler::default().schedule(&paths), vec![0, 2, 3, 1]);
}

#[test]
fn scheduler_window_is_positional() {
    // 1200 far paths, then one right next to path 0. With a window of
    // 1000 the close one is out of sight until enough far ones are taken.
    let mut paths = vec![triangle_ending_at(0.0, 0.0)];
    for i in 0..1200 {
        paths.push(triangle_ending_at(100.0 + i as f64, 100.0));
    }
    paths.push(triangle_ending_at(0.1, 0.1));
    let close = paths.len() - 1;

    let order = PathScheduler::default().schedule(&paths);
    assert_eq!(order.len(), paths.len());
    assert_ne!(order[1], close);

    let order = PathScheduler::new(5000).schedule(&paths);
    assert_eq!(order[1], close);
}

#[test]
fn scheduler_reduces_travel_on_shuffled_grid() {
    let mut paths = vec![triangle_ending_at(0.0, 0.0)];
    // a deterministic scatter over a 20 x 20 grid
    for i in 0..400u64 {
        let k = (i * 7919) % 400;
        paths.push(triangle_ending_at((k % 20) as f64, (k / 20) as f64));
    }
    let natural: Vec<usize> = (0..paths.len()).collect();
    let planned = PathScheduler::default().schedule(&paths);
    assert!(travel_distance(&paths, &planned) < travel_distance(&paths, &natural));
}

proptest! {
    #[test]
    fn schedule_is_a_permutation_of_candidates(paths in prop::collection::vec(arb_path(), 1..40)) {
        let order = PathScheduler::default().schedule(&paths);
        let mut expected: Vec<usize> = (1..paths.len()).filter(|&i| paths[i].len() >= 3).collect();
        if expected.len() <= 1 {
            expected = (1..paths.len()).collect();
        }
        expected.insert(0, 0);

        prop_assert_eq!(order[0], 0);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn refitting_does_not_drift(paths in prop::collection::vec(arb_path(), 1..20)) {
        let fitter = PathFitter::new(MachineGeometry::default().draw_rect());
        let once = fitter.fit(&paths).unwrap();
        let twice = fitter.fit(&once).unwrap();
        prop_assert_eq!(once.len(), twice.len());

        let rect = fitter.rect();
        let tolerance = (1.0 - 0.99) * rect.width().max(rect.height());
        for (a, b) in once.iter().flatten().zip(twice.iter().flatten()) {
            prop_assert!(a.distance_to(b) <= tolerance, "{} moved to {}", a, b);
        }
    }

    #[test]
    fn fitted_drawing_stays_inside_rectangle(paths in prop::collection::vec(arb_path(), 1..20)) {
        let fitter = PathFitter::new(MachineGeometry::default().draw_rect());
        let fitted = fitter.fit(&paths).unwrap();
        prop_assert!(fitted.iter().all(|p| p.len() >= 2));
        if let Some(b) = collection_bounds(&fitted).unwrap() {
            let rect = fitter.rect();
            prop_assert!(b.min_x >= rect.x_min && b.max_x <= rect.x_max);
            prop_assert!(b.min_y >= rect.y_min && b.max_y <= rect.y_max);
        }
    }
}
