//! Page fitting
//!
//! Artwork comes in whatever units its generator used. The fitter maps it
//! onto the drawable rectangle with a single uniform scale, keeping the
//! aspect ratio, centering it and leaving a small margin so no vertex
//! lands exactly on the physical limit.

use stringplot_core::constants::FIT_MARGIN;
use stringplot_core::geometry::is_drawable;
use stringplot_core::{collection_bounds, DrawBounds, DrawRect, Path, PathCollection, PathError, Point};

/// Uniform scale about a source center, then a shift to a destination center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub source_center: Point,
    pub scale: f64,
    pub target_center: Point,
}

impl FitTransform {
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.source_center.x) * self.scale + self.target_center.x,
            (p.y - self.source_center.y) * self.scale + self.target_center.y,
        )
    }

    /// Transform every drawable path, dropping degenerate ones
    pub fn apply_all(&self, paths: &[Path]) -> PathCollection {
        paths
            .iter()
            .filter(|p| is_drawable(p))
            .map(|p| p.iter().map(|v| self.apply(*v)).collect())
            .collect()
    }
}

/// Fits path collections into a drawable rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathFitter {
    rect: DrawRect,
    margin: f64,
}

impl PathFitter {
    pub fn new(rect: DrawRect) -> Self {
        Self {
            rect,
            margin: FIT_MARGIN,
        }
    }

    /// Override the fraction of the rectangle the drawing may fill
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn rect(&self) -> DrawRect {
        self.rect
    }

    /// The transform that fits `bounds` into the rectangle.
    ///
    /// A drawing relatively taller than the rectangle is limited by height,
    /// otherwise by width. A flat drawing (zero height) fits by width, a
    /// vertical one by height, and a single point is only re-centered.
    pub fn transform_for(&self, bounds: &DrawBounds) -> FitTransform {
        let (w, h) = (bounds.width(), bounds.height());
        let by_height = self.margin * self.rect.height() / h;
        let by_width = self.margin * self.rect.width() / w;

        let scale = match (w > 0.0, h > 0.0) {
            (false, false) => 1.0,
            (true, false) => by_width,
            (false, true) => by_height,
            (true, true) if w / h < self.rect.aspect_ratio() => by_height,
            (true, true) => by_width,
        };

        FitTransform {
            source_center: bounds.center(),
            scale,
            target_center: self.rect.center(),
        }
    }

    /// Fitted copy of `paths`. Paths with fewer than two vertices are dropped.
    pub fn fit(&self, paths: &[Path]) -> Result<PathCollection, PathError> {
        let Some(bounds) = collection_bounds(paths)? else {
            return Ok(Vec::new());
        };
        let transform = self.transform_for(&bounds);
        tracing::debug!(
            "Fitting drawing {} with scale {:.4}",
            bounds,
            transform.scale
        );
        Ok(transform.apply_all(paths))
    }

    /// Fit several channels of one image with a shared transform, so the
    /// passes still line up on the page
    pub fn fit_channels(&self, channels: &[PathCollection]) -> Result<Vec<PathCollection>, PathError> {
        let mut total: Option<DrawBounds> = None;
        for channel in channels {
            if let Some(b) = collection_bounds(channel)? {
                total = Some(total.map_or(b, |t| t.union(&b)));
            }
        }

        let Some(bounds) = total else {
            return Ok(channels.iter().map(|_| Vec::new()).collect());
        };
        let transform = self.transform_for(&bounds);
        tracing::debug!(
            "Fitting {} channels {} with scale {:.4}",
            channels.len(),
            bounds,
            transform.scale
        );
        Ok(channels.iter().map(|c| transform.apply_all(c)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stringplot_core::MachineGeometry;

    fn rect() -> DrawRect {
        DrawRect {
            x_min: 0.0,
            x_max: 40.0,
            y_min: 0.0,
            y_max: 20.0,
        }
    }

    fn line(a: (f64, f64), b: (f64, f64)) -> Path {
        vec![Point::from(a), Point::from(b)]
    }

    #[test]
    fn test_wide_drawing_fits_width() {
        // 10 x 1 is wider than 2:1
        let fitted = PathFitter::new(rect())
            .fit(&[line((0.0, 0.0), (10.0, 1.0))])
            .unwrap();
        let b = collection_bounds(&fitted).unwrap().unwrap();
        assert!((b.width() - 0.99 * 40.0).abs() < 1e-9);
        assert!((b.height() - 0.99 * 4.0).abs() < 1e-9);
        assert!((b.center().x - 20.0).abs() < 1e-9);
        assert!((b.center().y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_tall_drawing_fits_height() {
        let fitted = PathFitter::new(rect())
            .fit(&[line((5.0, 5.0), (6.0, 15.0))])
            .unwrap();
        let b = collection_bounds(&fitted).unwrap().unwrap();
        assert!((b.height() - 0.99 * 20.0).abs() < 1e-9);
        assert!((b.width() - 0.99 * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_paths_dropped() {
        let paths = vec![
            vec![Point::new(100.0, 100.0)],
            line((0.0, 0.0), (4.0, 2.0)),
            vec![],
        ];
        let fitted = PathFitter::new(rect()).fit(&paths).unwrap();
        assert_eq!(fitted.len(), 1);
        assert_eq!(fitted[0].len(), 2);
    }

    #[test]
    fn test_nothing_drawable() {
        let fitted = PathFitter::new(rect())
            .fit(&[vec![Point::new(1.0, 1.0)]])
            .unwrap();
        assert!(fitted.is_empty());
    }

    #[test]
    fn test_horizontal_line_fits_width() {
        let fitted = PathFitter::new(rect())
            .fit(&[line((1.0, 3.0), (2.0, 3.0))])
            .unwrap();
        assert!((fitted[0][0].x - 0.2).abs() < 1e-9);
        assert!((fitted[0][1].x - 39.8).abs() < 1e-9);
        assert!((fitted[0][0].y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_path_is_centered() {
        let fitted = PathFitter::new(rect())
            .fit(&[line((7.0, 7.0), (7.0, 7.0))])
            .unwrap();
        assert_eq!(fitted[0][0], Point::new(20.0, 10.0));
    }

    #[test]
    fn test_non_finite_coordinates_are_malformed() {
        let err = PathFitter::new(rect())
            .fit(&[line((0.0, 0.0), (1.0, 1.0)), line((f64::INFINITY, 0.0), (1.0, 1.0))])
            .unwrap_err();
        assert!(matches!(err, PathError::Malformed { path: 1, .. }));
    }

    #[test]
    fn test_input_is_not_modified() {
        let paths = vec![line((0.0, 0.0), (1.0, 1.0))];
        let before = paths.clone();
        let _ = PathFitter::new(rect()).fit(&paths).unwrap();
        assert_eq!(paths, before);
    }

    #[test]
    fn test_channels_share_one_transform() {
        let channels = vec![
            vec![line((0.0, 0.0), (1.0, 1.0))],
            vec![line((9.0, 4.0), (10.0, 5.0))],
            vec![],
            vec![line((5.0, 0.0), (5.0, 5.0))],
        ];
        let fitter = PathFitter::new(MachineGeometry::default().draw_rect());
        let fitted = fitter.fit_channels(&channels).unwrap();
        assert_eq!(fitted.len(), 4);
        assert!(fitted[2].is_empty());

        let union = DrawBounds::new(0.0, 0.0, 10.0, 5.0);
        let t = fitter.transform_for(&union);
        assert_eq!(fitted[1][0][1], t.apply(Point::new(10.0, 5.0)));
        assert_eq!(fitted[3][0][0], t.apply(Point::new(5.0, 0.0)));
    }
}
