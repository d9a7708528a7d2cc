//! Scatter rendering of sweep results.
//!
//! Pure visualization: consumes already-computed `(x, y)` pairs and writes
//! SVG files. No model logic lives here, and nothing here validates the
//! data beyond refusing to draw an empty set.

use std::{ops::Range, path::Path};

use plotters::prelude::*;
use thiserror::Error;

/// Radius ceiling for the zoomed view of a sweep, in meters.
///
/// Points at or below this radius are the nanofiber-scale results the
/// zoomed view isolates.
pub const ZOOM_RADIUS_LIMIT_METERS: f64 = 2.0e-5;

/// Errors that can occur while rendering a scatter plot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// There are no points to render.
    #[error("no points to plot")]
    Empty,

    /// The drawing backend failed.
    #[error("rendering failed: {context}")]
    Backend { context: String },
}

/// Title and axis labels for one scatter view.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ScatterPlot {
    /// Renders `points` as a scatter plot in an SVG file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::Empty`] if `points` is empty, or
    /// [`PlotError::Backend`] if the drawing backend fails.
    pub fn render(&self, points: &[(f64, f64)], path: &Path) -> Result<(), PlotError> {
        if points.is_empty() {
            return Err(PlotError::Empty);
        }

        let (x_range, y_range) = padded_ranges(points);

        let root = SVGBackend::new(path, (900, 600)).into_drawing_area();
        root.fill(&WHITE).map_err(backend)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(self.title.as_str(), ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(48)
            .y_label_area_size(80)
            .build_cartesian_2d(x_range, y_range)
            .map_err(backend)?;

        chart
            .configure_mesh()
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .y_label_formatter(&|y| format!("{y:.2e}"))
            .draw()
            .map_err(backend)?;

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, RED.filled())),
            )
            .map_err(backend)?;

        root.present().map_err(backend)?;
        Ok(())
    }
}

/// Returns the subset of points whose ordinate is at or below `limit`.
#[must_use]
pub fn zoomed(points: &[(f64, f64)], limit: f64) -> Vec<(f64, f64)> {
    points.iter().copied().filter(|&(_, y)| y <= limit).collect()
}

fn backend(err: impl std::fmt::Display) -> PlotError {
    PlotError::Backend {
        context: err.to_string(),
    }
}

/// Data bounds with a 5% margin so edge points aren't drawn on the frame.
fn padded_ranges(points: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
    (
        padded_axis(points.iter().map(|&(x, _)| x)),
        padded_axis(points.iter().map(|&(_, y)| y)),
    )
}

fn padded_axis(values: impl Iterator<Item = f64> + Clone) -> Range<f64> {
    let lo = values.clone().fold(f64::INFINITY, f64::min);
    let hi = values.fold(f64::NEG_INFINITY, f64::max);

    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        // A single value, or all values equal: pick a visible window.
        lo.abs().max(1.0) * 0.05
    };

    (lo - pad)..(hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_plot() -> ScatterPlot {
        ScatterPlot {
            title: "machine / polymer".into(),
            x_label: "Density (kg/m^3)".into(),
            y_label: "Final radius (m)".into(),
        }
    }

    #[test]
    fn writes_an_svg_file() {
        let path = std::env::temp_dir().join("rjs_models_scatter_test.svg");
        let points = [(900.0, 3.0e-5), (1200.0, 2.0e-5), (1500.0, 1.0e-5)];

        test_plot().render(&points, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
    }

    #[test]
    fn refuses_an_empty_set() {
        let path = std::env::temp_dir().join("rjs_models_scatter_empty.svg");
        let result = test_plot().render(&[], &path);
        assert!(matches!(result, Err(PlotError::Empty)));
    }

    #[test]
    fn zoom_keeps_only_small_ordinates() {
        let points = [(1.0, 3.0e-5), (2.0, 2.0e-5), (3.0, 1.0e-5)];
        let kept = zoomed(&points, ZOOM_RADIUS_LIMIT_METERS);
        assert_eq!(kept, vec![(2.0, 2.0e-5), (3.0, 1.0e-5)]);
    }

    #[test]
    fn single_point_gets_a_visible_window() {
        let range = padded_axis([5.0].into_iter());
        assert!(range.start < 5.0 && range.end > 5.0);
    }
}
