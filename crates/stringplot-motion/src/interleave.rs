//! Step ordering across the two axes.
//!
//! A move needs `n_left` and `n_right` steps. Issuing one axis after the
//! other would draw an L-shaped staircase, so the left steps are spread in
//! bursts between the right steps: one right step, then up to
//! `n_left / n_right` left steps, until the right steps run out. Whatever
//! left steps remain go last.

use crate::axis::AxisSide;

/// Iterator over the axis of each step in a move
#[derive(Debug, Clone)]
pub struct Interleave {
    left_remaining: u64,
    right_remaining: u64,
    slope: u64,
    burst: u64,
}

/// Plan the step order for a move of `n_left` left and `n_right` right steps
pub fn interleave(n_left: u64, n_right: u64) -> Interleave {
    let slope = if n_right > 0 { n_left / n_right } else { 0 };
    Interleave {
        left_remaining: n_left,
        right_remaining: n_right,
        slope,
        burst: 0,
    }
}

impl Iterator for Interleave {
    type Item = AxisSide;

    fn next(&mut self) -> Option<AxisSide> {
        if self.burst > 0 && self.left_remaining > 0 {
            self.burst -= 1;
            self.left_remaining -= 1;
            return Some(AxisSide::Left);
        }
        self.burst = 0;

        if self.right_remaining > 0 {
            self.right_remaining -= 1;
            self.burst = self.slope;
            return Some(AxisSide::Right);
        }

        if self.left_remaining > 0 {
            self.left_remaining -= 1;
            return Some(AxisSide::Left);
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.left_remaining + self.right_remaining) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Interleave {}

#[cfg(test)]
mod tests {
    use super::*;
    use AxisSide::{Left as L, Right as R};

    fn longest_run(plan: &[AxisSide], side: AxisSide) -> usize {
        let mut best = 0;
        let mut run = 0;
        for s in plan {
            if *s == side {
                run += 1;
                best = best.max(run);
            } else {
                run = 0;
            }
        }
        best
    }

    #[test]
    fn test_ten_by_three() {
        let plan: Vec<_> = interleave(10, 3).collect();
        assert_eq!(plan, vec![R, L, L, L, R, L, L, L, R, L, L, L, L]);
        assert!(longest_run(&plan, L) <= 10usize.div_ceil(3) + 1);
    }

    #[test]
    fn test_only_left() {
        let plan: Vec<_> = interleave(4, 0).collect();
        assert_eq!(plan, vec![L, L, L, L]);
    }

    #[test]
    fn test_only_right() {
        let plan: Vec<_> = interleave(0, 3).collect();
        assert_eq!(plan, vec![R, R, R]);
    }

    #[test]
    fn test_right_heavy_moves_issue_right_first() {
        // slope is zero, so the left steps trail the right ones
        let plan: Vec<_> = interleave(2, 5).collect();
        assert_eq!(plan, vec![R, R, R, R, R, L, L]);
    }

    #[test]
    fn test_empty_move() {
        assert_eq!(interleave(0, 0).count(), 0);
    }

    #[test]
    fn test_counts_are_exact() {
        for (nl, nr) in [(7, 2), (3, 3), (100, 7), (1, 9), (64, 63)] {
            let it = interleave(nl, nr);
            assert_eq!(it.len() as u64, nl + nr);
            let plan: Vec<_> = it.collect();
            assert_eq!(plan.iter().filter(|s| **s == L).count() as u64, nl);
            assert_eq!(plan.iter().filter(|s| **s == R).count() as u64, nr);
        }
    }
}
