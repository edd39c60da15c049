//! Line-chart rendering of folded spectra
//!
//! Replaces the interactive HTML charts of the original workflow with PNG
//! artifacts, drawn directly into an image buffer.

use anyhow::{bail, Context, Result};
use image::{ImageBuffer, Rgb};
use std::path::Path;

/// Chart appearance and geometry.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Margin around the plot area, also home to the axis lines.
    pub margin: u32,
    pub background: Rgb<u8>,
    pub axis_color: Rgb<u8>,
    pub line_color: Rgb<u8>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 700,
            margin: 40,
            background: Rgb([255, 255, 255]),
            axis_color: Rgb([60, 60, 60]),
            line_color: Rgb([30, 90, 180]),
        }
    }
}

/// Render an `(x, y)` series as a line chart PNG.
///
/// The y range spans `[0, max(y)]` with a little headroom, matching how
/// the spectra read best: amplitude series are non-negative by
/// construction.
pub fn render_line_chart(
    xs: &[f64],
    ys: &[f64],
    config: &ChartConfig,
    path: &Path,
) -> Result<()> {
    if xs.len() != ys.len() {
        bail!(
            "chart series disagree on length: {} x values, {} y values",
            xs.len(),
            ys.len()
        );
    }
    if xs.len() < 2 {
        bail!("chart needs at least two points, got {}", xs.len());
    }
    if config.width <= 2 * config.margin + 1 || config.height <= 2 * config.margin + 1 {
        bail!("chart dimensions leave no plot area");
    }

    let mut img = ImageBuffer::from_pixel(config.width, config.height, config.background);

    let left = config.margin;
    let right = config.width - config.margin - 1;
    let top = config.margin;
    let bottom = config.height - config.margin - 1;

    // Axis lines along the left and bottom edges of the plot area.
    for y in top..=bottom {
        img.put_pixel(left, y, config.axis_color);
    }
    for x in left..=right {
        img.put_pixel(x, bottom, config.axis_color);
    }

    let x_min = xs.first().copied().unwrap_or(0.0);
    let x_max = xs.last().copied().unwrap_or(1.0);
    let x_span = (x_max - x_min).max(f64::EPSILON);

    let y_max = ys.iter().cloned().fold(0.0f64, f64::max);
    let y_span = (y_max * 1.05).max(f64::EPSILON);

    let plot_w = (right - left) as f64;
    let plot_h = (bottom - top) as f64;

    let to_pixel = |x: f64, y: f64| -> (i64, i64) {
        let px = left as f64 + (x - x_min) / x_span * plot_w;
        let py = bottom as f64 - (y / y_span) * plot_h;
        (px.round() as i64, py.round() as i64)
    };

    let mut prev = to_pixel(xs[0], ys[0]);
    for (&x, &y) in xs.iter().zip(ys).skip(1) {
        let next = to_pixel(x, y);
        draw_segment(&mut img, prev, next, config.line_color);
        prev = next;
    }

    img.save(path)
        .with_context(|| format!("writing chart to {}", path.display()))?;
    Ok(())
}

fn draw_segment(
    img: &mut ImageBuffer<Rgb<u8>, Vec<u8>>,
    (x0, y0): (i64, i64),
    (x1, y1): (i64, i64),
    color: Rgb<u8>,
) {
    let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let x = x0 as f64 + (x1 - x0) as f64 * t;
        let y = y0 as f64 + (y1 - y0) as f64 * t;
        let (x, y) = (x.round() as i64, y.round() as i64);
        if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}
