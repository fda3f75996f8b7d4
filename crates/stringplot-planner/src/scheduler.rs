//! Draw-order scheduling
//!
//! Greedy nearest-neighbor on path end points with a bounded look-ahead.
//! Each pick only considers the first `window` unscheduled paths in their
//! original order, not the globally nearest ones, so a pick costs at most
//! `window` distance checks.

use stringplot_core::constants::{MIN_SCHEDULED_POINTS, SCHEDULER_WINDOW};
use stringplot_core::{Path, Point};

/// Orders a path collection for drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathScheduler {
    window: usize,
}

impl Default for PathScheduler {
    fn default() -> Self {
        Self {
            window: SCHEDULER_WINDOW,
        }
    }
}

impl PathScheduler {
    /// Scheduler with a custom look-ahead window (at least one path)
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Indices of `paths` in drawing order.
    ///
    /// Path 0 always goes first. Other paths need at least three vertices
    /// to be scheduled; shorter ones are left out of the order entirely.
    /// Among the first `window` remaining candidates, the one whose last
    /// vertex is closest to the last vertex of the previously scheduled
    /// path comes next (the earliest wins a tie). The final candidate is
    /// appended without a search.
    ///
    /// With at most one candidate there is nothing to order, and the whole
    /// collection is returned in its original order.
    pub fn schedule(&self, paths: &[Path]) -> Vec<usize> {
        let mut remaining: Vec<usize> = (1..paths.len())
            .filter(|&i| paths[i].len() >= MIN_SCHEDULED_POINTS)
            .collect();
        if remaining.len() <= 1 {
            return (0..paths.len()).collect();
        }
        tracing::info!("Planning {} paths", remaining.len());

        let mut order = vec![0];
        while remaining.len() > 1 {
            let from = order.last().and_then(|&i| paths[i].last()).copied();
            let pick = self.nearest_in_window(paths, &remaining, from);
            order.push(remaining.remove(pick));
        }
        order.extend(remaining.pop());

        order
    }

    /// Position in `remaining` of the best candidate within the window
    fn nearest_in_window(&self, paths: &[Path], remaining: &[usize], from: Option<Point>) -> usize {
        // an empty path 0 has no end point; take candidates in order
        let Some(from) = from else {
            return 0;
        };

        let window = &remaining[..remaining.len().min(self.window)];
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (pos, &k) in window.iter().enumerate() {
            let Some(end) = paths[k].last() else {
                continue;
            };
            let dx = end.x - from.x;
            let dy = end.y - from.y;
            let dist = dx * dx + dy * dy;
            if dist < best_dist {
                best = pos;
                best_dist = dist;
            }
        }
        best
    }
}

/// Pen-up travel of a drawing order: the distance from the end of each
/// drawn path to the start of the next
pub fn travel_distance(paths: &[Path], order: &[usize]) -> f64 {
    order
        .windows(2)
        .filter_map(|pair| {
            let end = paths[pair[0]].last()?;
            let start = paths[pair[1]].first()?;
            Some(end.distance_to(start))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A three-vertex path ending at (x, y)
    fn ending_at(x: f64, y: f64) -> Path {
        vec![Point::new(x + 1.0, y), Point::new(x, y + 1.0), Point::new(x, y)]
    }

    #[test]
    fn test_visits_nearer_end_first() {
        let paths = vec![
            ending_at(0.0, 0.0),
            ending_at(10.0, 10.0),
            ending_at(1.0, 1.0),
            ending_at(9.0, 9.0),
        ];
        assert_eq!(PathScheduler::default().schedule(&paths), vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_empty_and_single() {
        let scheduler = PathScheduler::default();
        assert!(scheduler.schedule(&[]).is_empty());
        assert_eq!(scheduler.schedule(&[ending_at(3.0, 3.0)]), vec![0]);
    }

    #[test]
    fn test_short_paths_are_not_scheduled() {
        let paths = vec![
            ending_at(0.0, 0.0),
            vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
            ending_at(5.0, 5.0),
            vec![],
            ending_at(1.0, 1.0),
        ];
        assert_eq!(PathScheduler::default().schedule(&paths), vec![0, 4, 2]);
    }

    #[test]
    fn test_single_candidate_keeps_original_order() {
        let paths = vec![
            ending_at(0.0, 0.0),
            vec![Point::new(1.0, 1.0)],
            ending_at(9.0, 9.0),
        ];
        assert_eq!(PathScheduler::default().schedule(&paths), vec![0, 1, 2]);
    }

    #[test]
    fn test_segments_only_are_all_kept() {
        // two-point strokes never qualify for reordering
        let paths: Vec<Path> = (0..5)
            .map(|i| vec![Point::new(i as f64, 0.0), Point::new(i as f64, 3.0)])
            .collect();
        assert_eq!(PathScheduler::default().schedule(&paths), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_first_path_is_kept_even_if_short() {
        let paths = vec![vec![], ending_at(9.0, 9.0), ending_at(1.0, 1.0)];
        assert_eq!(PathScheduler::default().schedule(&paths), vec![0, 1, 2]);
    }

    #[test]
    fn test_tie_goes_to_earliest() {
        let paths = vec![
            ending_at(0.0, 0.0),
            ending_at(5.0, 0.0),
            ending_at(0.0, 5.0),
            ending_at(50.0, 50.0),
        ];
        assert_eq!(PathScheduler::default().schedule(&paths), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_window_limits_the_search() {
        // the nearest path sits outside a window of two
        let paths = vec![
            ending_at(0.0, 0.0),
            ending_at(30.0, 30.0),
            ending_at(20.0, 20.0),
            ending_at(1.0, 1.0),
            ending_at(40.0, 40.0),
        ];
        assert_eq!(PathScheduler::new(2).schedule(&paths), vec![0, 2, 1, 4, 3]);
        assert_eq!(PathScheduler::default().schedule(&paths), vec![0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_travel_distance() {
        let paths = vec![
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            vec![Point::new(4.0, 4.0), Point::new(5.0, 5.0)],
        ];
        assert!((travel_distance(&paths, &[0, 1]) - 5.0).abs() < 1e-12);
        assert_eq!(travel_distance(&paths, &[0]), 0.0);
    }
}
