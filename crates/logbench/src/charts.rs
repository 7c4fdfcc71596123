// Dweve Logbench - Serial vs. Parallel Log Analyzer Benchmark Pipeline
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Chart rendering for benchmark results.
//!
//! Three independent renderers consume the same [`MetricsTable`] and each
//! produce one PNG: a log/log serial-vs-parallel time comparison, a
//! speedup chart with an ideal-speedup reference line and shaded overhead
//! region, and an efficiency chart with 100%/50% reference lines and a
//! shaded area under the curve.
//!
//! Rendering is idempotent: the same table and parameters always overwrite
//! the same named output with the same pixels. An empty table is rejected
//! before any backend call; a chart of nothing is a bug upstream, not a
//! blank image.

use crate::error::{BenchError, Result};
use crate::metrics::MetricsTable;
use plotters::prelude::*;
use std::path::Path;

/// Output bitmap width in pixels.
pub const CHART_WIDTH: u32 = 1200;

/// Output bitmap height in pixels.
pub const CHART_HEIGHT: u32 = 700;

/// Minimum-acceptable efficiency reference line, in percent.
pub const MIN_EFFICIENT_PCT: f64 = 50.0;

const SERIAL_COLOR: RGBColor = BLUE;
const PARALLEL_COLOR: RGBColor = RED;
const SPEEDUP_COLOR: RGBColor = RGBColor(0, 128, 0);
const OVERHEAD_COLOR: RGBColor = RGBColor(255, 165, 0);
const EFFICIENCY_COLOR: RGBColor = RGBColor(0, 0, 128);
const EFFICIENCY_FILL: RGBColor = RGBColor(173, 216, 230);

fn rerr<E: std::fmt::Display>(path: &Path) -> impl Fn(E) -> BenchError + '_ {
    move |e| BenchError::render(path, e.to_string())
}

fn ensure_non_empty(table: &MetricsTable, path: &Path) -> Result<()> {
    if table.is_empty() {
        return Err(BenchError::render(path, "metrics table has no rows"));
    }
    Ok(())
}

/// Log-scaled x domain padded around the measured corpus sizes.
fn x_domain(table: &MetricsTable) -> (f64, f64) {
    let lines = table.num_lines();
    let lo = *lines.first().expect("non-empty table") as f64;
    let hi = *lines.last().expect("non-empty table") as f64;
    ((lo * 0.8).max(1.0), hi * 1.25)
}

/// Renders the serial-vs-parallel time comparison, both axes log-scaled.
pub fn render_time_comparison(table: &MetricsTable, path: &Path) -> Result<()> {
    ensure_non_empty(table, path)?;
    tracing::debug!(chart = %path.display(), rows = table.len(), "rendering time comparison");

    let serial: Vec<(f64, f64)> = table
        .rows()
        .iter()
        .map(|r| (r.num_lines as f64, r.serial_time_s.max(1e-9)))
        .collect();
    let parallel: Vec<(f64, f64)> = table
        .rows()
        .iter()
        .map(|r| (r.num_lines as f64, r.parallel_time_s.max(1e-9)))
        .collect();

    let (x_lo, x_hi) = x_domain(table);
    let y_lo = serial
        .iter()
        .chain(&parallel)
        .map(|&(_, y)| y)
        .fold(f64::INFINITY, f64::min)
        * 0.5;
    let y_hi = serial
        .iter()
        .chain(&parallel)
        .map(|&(_, y)| y)
        .fold(0.0, f64::max)
        * 2.0;
    let y_hi = if y_hi > y_lo { y_hi } else { y_lo * 10.0 };

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(rerr(path))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Performance Comparison: Serial vs Parallel",
            ("sans-serif", 28).into_font(),
        )
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d((x_lo..x_hi).log_scale(), (y_lo..y_hi).log_scale())
        .map_err(rerr(path))?;

    chart
        .configure_mesh()
        .x_desc("Number of Log Lines")
        .y_desc("Execution Time (seconds)")
        .x_label_formatter(&|v| format!("{:.0}", v))
        .draw()
        .map_err(rerr(path))?;

    chart
        .draw_series(LineSeries::new(serial.clone(), SERIAL_COLOR.stroke_width(2)))
        .map_err(rerr(path))?
        .label("Serial")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], SERIAL_COLOR.stroke_width(2)));
    chart
        .draw_series(
            serial
                .iter()
                .map(|&p| Circle::new(p, 4, SERIAL_COLOR.filled())),
        )
        .map_err(rerr(path))?;

    chart
        .draw_series(LineSeries::new(
            parallel.clone(),
            PARALLEL_COLOR.stroke_width(2),
        ))
        .map_err(rerr(path))?
        .label("Parallel")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], PARALLEL_COLOR.stroke_width(2))
        });
    chart
        .draw_series(
            parallel
                .iter()
                .map(|&p| Circle::new(p, 4, PARALLEL_COLOR.filled())),
        )
        .map_err(rerr(path))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(rerr(path))?;

    root.present().map_err(rerr(path))
}

/// Renders the speedup chart: measured speedup vs. corpus size (x log),
/// an ideal-speedup reference line at `threads`, a shaded overhead region
/// between measured and ideal, and a `%.2fx` label at every point.
pub fn render_speedup(table: &MetricsTable, path: &Path, threads: u32) -> Result<()> {
    ensure_non_empty(table, path)?;
    tracing::debug!(chart = %path.display(), rows = table.len(), "rendering speedup");

    let measured: Vec<(f64, f64)> = table
        .rows()
        .iter()
        .map(|r| (r.num_lines as f64, r.speedup))
        .collect();
    let ideal = threads as f64;

    let (x_lo, x_hi) = x_domain(table);
    let y_max = measured
        .iter()
        .map(|&(_, y)| y)
        .fold(ideal, f64::max);
    let y_hi = y_max * 1.2 + 0.5;

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(rerr(path))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Parallel Speedup Analysis", ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(60)
        .build_cartesian_2d((x_lo..x_hi).log_scale(), 0f64..y_hi)
        .map_err(rerr(path))?;

    chart
        .configure_mesh()
        .x_desc("Number of Log Lines")
        .y_desc("Speedup (Serial Time / Parallel Time)")
        .x_label_formatter(&|v| format!("{:.0}", v))
        .draw()
        .map_err(rerr(path))?;

    // Overhead: the gap between the measured curve and the ideal line.
    let mut overhead: Vec<(f64, f64)> = measured.clone();
    overhead.extend(measured.iter().rev().map(|&(x, _)| (x, ideal)));
    chart
        .draw_series(std::iter::once(Polygon::new(
            overhead,
            OVERHEAD_COLOR.mix(0.2).filled(),
        )))
        .map_err(rerr(path))?
        .label("Overhead")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 18, y + 5)], OVERHEAD_COLOR.mix(0.4).filled())
        });

    chart
        .draw_series(LineSeries::new(
            vec![(x_lo, ideal), (x_hi, ideal)],
            PARALLEL_COLOR.stroke_width(2),
        ))
        .map_err(rerr(path))?
        .label(format!("Ideal Speedup ({} threads)", threads))
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], PARALLEL_COLOR.stroke_width(2))
        });

    chart
        .draw_series(LineSeries::new(
            measured.clone(),
            SPEEDUP_COLOR.stroke_width(3),
        ))
        .map_err(rerr(path))?
        .label("Measured Speedup")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], SPEEDUP_COLOR.stroke_width(3)));
    chart
        .draw_series(
            measured
                .iter()
                .map(|&p| Circle::new(p, 5, SPEEDUP_COLOR.filled())),
        )
        .map_err(rerr(path))?;

    chart
        .draw_series(measured.iter().map(|&(x, y)| {
            EmptyElement::at((x, y))
                + Text::new(
                    format!("{:.2}x", y),
                    (-14, -20),
                    ("sans-serif", 14).into_font().color(&SPEEDUP_COLOR),
                )
        }))
        .map_err(rerr(path))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(rerr(path))?;

    root.present().map_err(rerr(path))
}

/// Renders the efficiency chart: efficiency vs. corpus size (x log, y
/// clamped to [0, 110]), reference lines at 100% and 50%, a shaded area
/// under the measured curve, and a `%.1f%%` label at every point.
pub fn render_efficiency(table: &MetricsTable, path: &Path) -> Result<()> {
    ensure_non_empty(table, path)?;
    tracing::debug!(chart = %path.display(), rows = table.len(), "rendering efficiency");

    let measured: Vec<(f64, f64)> = table
        .rows()
        .iter()
        .map(|r| (r.num_lines as f64, r.efficiency_pct.clamp(0.0, 110.0)))
        .collect();
    let (x_lo, x_hi) = x_domain(table);

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(rerr(path))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Parallel Efficiency Analysis", ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(60)
        .build_cartesian_2d((x_lo..x_hi).log_scale(), 0f64..110f64)
        .map_err(rerr(path))?;

    chart
        .configure_mesh()
        .x_desc("Number of Log Lines")
        .y_desc("Efficiency (%)")
        .x_label_formatter(&|v| format!("{:.0}", v))
        .draw()
        .map_err(rerr(path))?;

    chart
        .draw_series(AreaSeries::new(
            measured.clone(),
            0.0,
            &EFFICIENCY_FILL.mix(0.35),
        ))
        .map_err(rerr(path))?
        .label("Efficiency Area")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 18, y + 5)], EFFICIENCY_FILL.mix(0.6).filled())
        });

    chart
        .draw_series(LineSeries::new(
            vec![(x_lo, 100.0), (x_hi, 100.0)],
            PARALLEL_COLOR.stroke_width(2),
        ))
        .map_err(rerr(path))?
        .label("Ideal Efficiency (100%)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], PARALLEL_COLOR.stroke_width(2))
        });

    chart
        .draw_series(LineSeries::new(
            vec![(x_lo, MIN_EFFICIENT_PCT), (x_hi, MIN_EFFICIENT_PCT)],
            OVERHEAD_COLOR.stroke_width(2),
        ))
        .map_err(rerr(path))?
        .label("Minimum Efficient (50%)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], OVERHEAD_COLOR.stroke_width(2))
        });

    chart
        .draw_series(LineSeries::new(
            measured.clone(),
            EFFICIENCY_COLOR.stroke_width(3),
        ))
        .map_err(rerr(path))?
        .label("Efficiency")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], EFFICIENCY_COLOR.stroke_width(3))
        });
    chart
        .draw_series(
            measured
                .iter()
                .map(|&p| Circle::new(p, 5, EFFICIENCY_COLOR.filled())),
        )
        .map_err(rerr(path))?;

    chart
        .draw_series(measured.iter().map(|&(x, y)| {
            EmptyElement::at((x, y))
                + Text::new(
                    format!("{:.1}%", y),
                    (-14, -20),
                    ("sans-serif", 14).into_font().color(&EFFICIENCY_COLOR),
                )
        }))
        .map_err(rerr(path))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(rerr(path))?;

    root.present().map_err(rerr(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricsTable;

    const SAMPLE: &str = "\
NumLines,SerialTime(s),ParallelTime(s),Speedup,Efficiency(%)
100,0.001200,0.000500,2.40,60.00
1000,0.012000,0.004000,3.00,75.00
10000,0.130000,0.036000,3.61,90.25
50000,0.640000,0.170000,3.76,94.12
100000,1.310000,0.340000,3.85,96.32
";

    fn sample_table() -> MetricsTable {
        MetricsTable::parse(SAMPLE).unwrap()
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let table = MetricsTable::default();

        let err = render_time_comparison(&table, &path).unwrap_err();
        assert!(matches!(err, BenchError::Render { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_all_three_charts_render_non_empty() {
        let dir = tempfile::tempdir().unwrap();
        let table = sample_table();

        let time = dir.path().join("time.png");
        let speedup = dir.path().join("speedup.png");
        let efficiency = dir.path().join("efficiency.png");

        render_time_comparison(&table, &time).unwrap();
        render_speedup(&table, &speedup, 4).unwrap();
        render_efficiency(&table, &efficiency).unwrap();

        for path in [&time, &speedup, &efficiency] {
            let len = std::fs::metadata(path).unwrap().len();
            assert!(len > 0, "{} is empty", path.display());
        }
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let table = sample_table();

        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        render_speedup(&table, &first, 4).unwrap();
        render_speedup(&table, &second, 4).unwrap();

        let a = std::fs::read(&first).unwrap();
        let b = std::fs::read(&second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rerender_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let table = sample_table();
        let path = dir.path().join("chart.png");

        render_efficiency(&table, &path).unwrap();
        let first = std::fs::read(&path).unwrap();
        render_efficiency(&table, &path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_x_domain_padding() {
        let table = sample_table();
        let (lo, hi) = x_domain(&table);
        assert!(lo < 100.0);
        assert!(hi > 100_000.0);
    }
}
