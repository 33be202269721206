// Phasebreak - Parallel Phase Breakdown Analyzer
//
// Copyright (c) 2025 Phasebreak contributors.
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

//! Chart renderers for breakdown series.
//!
//! Thread counts sit on a categorical x axis: bar and line positions use
//! the configuration index, and tick labels print the thread count, so a
//! 1/2/4/8 sweep is evenly spaced instead of bunched at the left.

use crate::error::{ChartError, Result};
use phasebreak_core::{BreakdownSeries, Phase};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::fs;
use std::path::{Path, PathBuf};

const TITLE_FONT_SIZE: u32 = 32;
const AXIS_LABEL_FONT_SIZE: u32 = 20;
const TICK_LABEL_FONT_SIZE: u32 = 16;
const LEGEND_FONT_SIZE: u32 = 16;

const BAR_WIDTH: f64 = 0.6;
const LINE_STROKE: u32 = 3;
const POINT_SIZE: u32 = 4;

/// One fill color per phase, in canonical phase order.
const PHASE_COLORS: [RGBColor; Phase::COUNT] = [
    RGBColor(52, 152, 219),  // build furthest - blue
    RGBColor(231, 76, 60),   // sample intervals - red
    RGBColor(46, 204, 113),  // build connections - green
    RGBColor(243, 156, 18),  // scan samples - orange
    RGBColor(155, 89, 182),  // scan non-sample - purple
];

fn phase_color(phase: Phase) -> RGBColor {
    PHASE_COLORS[phase.index()]
}

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    /// Raster output via the bitmap backend.
    Png,
    /// Vector output via the SVG backend.
    Svg,
}

impl ChartFormat {
    /// File extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

/// The four chart types produced for an analyzed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Stacked bars of per-phase milliseconds by thread count.
    StackedTime,
    /// Per-phase time lines across thread counts, log-scaled.
    PhaseScaling,
    /// Stacked bars of per-phase share of total time.
    PercentStacked,
    /// Per-phase speedup lines with an ideal-linear reference.
    Speedup,
}

impl ChartKind {
    /// All chart kinds, in render order.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::StackedTime,
        ChartKind::PhaseScaling,
        ChartKind::PercentStacked,
        ChartKind::Speedup,
    ];

    /// Output file name without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::StackedTime => "breakdown_stacked",
            Self::PhaseScaling => "breakdown_scaling",
            Self::PercentStacked => "breakdown_percentage",
            Self::Speedup => "breakdown_speedup",
        }
    }

    fn title(self, series: &BreakdownSeries) -> String {
        let name = match self {
            Self::StackedTime => "Time per Phase by Thread Count",
            Self::PhaseScaling => "Phase Time Scaling",
            Self::PercentStacked => "Phase Share of Total Time",
            Self::Speedup => "Phase Speedup vs 1 Thread",
        };
        format!("{name} {}", series.title_suffix())
    }
}

/// Configuration for chart rendering.
///
/// # Examples
///
/// ```
/// use phasebreak_chart::{ChartConfig, ChartFormat};
///
/// let config = ChartConfig::default();
/// assert_eq!(config.width, 1200);
/// assert!(config.formats.contains(&ChartFormat::Svg));
/// ```
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Directory the chart files are written into; created if absent.
    pub out_dir: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Formats to emit; every chart is written once per format.
    pub formats: Vec<ChartFormat>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("charts"),
            width: 1200,
            height: 700,
            formats: vec![ChartFormat::Png, ChartFormat::Svg],
        }
    }
}

/// Render every chart kind in every configured format.
///
/// Returns the paths written, in render order.
///
/// # Errors
///
/// [`ChartError::EmptySeries`] when the series has no configurations,
/// [`ChartError::OutputDir`] when the output directory cannot be
/// created, and [`ChartError::Backend`] when drawing fails.
pub fn render_all(series: &BreakdownSeries, config: &ChartConfig) -> Result<Vec<PathBuf>> {
    if series.config_count() == 0 {
        return Err(ChartError::EmptySeries);
    }
    fs::create_dir_all(&config.out_dir)
        .map_err(|e| ChartError::output_dir(&config.out_dir, e))?;

    let mut paths = Vec::with_capacity(ChartKind::ALL.len() * config.formats.len());
    for kind in ChartKind::ALL {
        for &format in &config.formats {
            paths.push(render_chart(series, kind, format, config)?);
        }
    }
    Ok(paths)
}

/// Render a single chart kind in a single format.
pub fn render_chart(
    series: &BreakdownSeries,
    kind: ChartKind,
    format: ChartFormat,
    config: &ChartConfig,
) -> Result<PathBuf> {
    let path = chart_path(&config.out_dir, kind, format);
    let size = (config.width, config.height);
    match format {
        ChartFormat::Svg => {
            let root = SVGBackend::new(&path, size).into_drawing_area();
            render_on(&root, series, kind)?;
        }
        ChartFormat::Png => {
            let root = BitMapBackend::new(&path, size).into_drawing_area();
            render_on(&root, series, kind)?;
        }
    }
    Ok(path)
}

/// Path a chart kind is written to for a format.
pub fn chart_path(out_dir: &Path, kind: ChartKind, format: ChartFormat) -> PathBuf {
    out_dir.join(format!("{}.{}", kind.file_stem(), format.extension()))
}

fn render_on<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &BreakdownSeries,
    kind: ChartKind,
) -> Result<()> {
    root.fill(&WHITE)?;
    match kind {
        ChartKind::StackedTime => draw_stacked_time(root, series)?,
        ChartKind::PhaseScaling => draw_phase_scaling(root, series)?,
        ChartKind::PercentStacked => draw_percent_stacked(root, series)?,
        ChartKind::Speedup => draw_speedup(root, series)?,
    }
    root.present()?;
    Ok(())
}

/// Tick formatter mapping configuration indices to thread counts.
fn thread_label(x: f64, thread_counts: &[u32]) -> String {
    let idx = x.round() as usize;
    if idx < thread_counts.len() && (x - idx as f64).abs() < 0.3 {
        thread_counts[idx].to_string()
    } else {
        String::new()
    }
}

fn draw_stacked_time<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &BreakdownSeries,
) -> Result<()> {
    let n = series.config_count();
    let totals: Vec<f64> = (0..n)
        .map(|i| series.phases.iter().map(|c| c.elapsed_ms[i]).sum())
        .collect();
    let y_max = totals.iter().fold(0.0_f64, |a, &b| a.max(b)) * 1.1;

    let mut chart = ChartBuilder::on(root)
        .caption(ChartKind::StackedTime.title(series), ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(n as f64 - 0.5), 0.0..y_max.max(1.0))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| thread_label(*x, &series.thread_counts))
        .y_desc("Time (ms)")
        .x_desc("Threads")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    // Stack bottom-up in canonical phase order.
    let mut bottoms = vec![0.0f64; n];
    for curve in &series.phases {
        let color = phase_color(curve.phase);
        for (i, &ms) in curve.elapsed_ms.iter().enumerate() {
            let x = i as f64;
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (x - BAR_WIDTH / 2.0, bottoms[i]),
                    (x + BAR_WIDTH / 2.0, bottoms[i] + ms),
                ],
                color.filled(),
            )))?;
            bottoms[i] += ms;
        }
        add_phase_legend(&mut chart, curve.phase)?;
    }

    draw_legend(&mut chart)
}

fn draw_phase_scaling<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &BreakdownSeries,
) -> Result<()> {
    let n = series.config_count();
    let positive: Vec<f64> = series
        .phases
        .iter()
        .flat_map(|c| c.elapsed_ms.iter().copied())
        .filter(|&v| v > 0.0)
        .collect();
    let y_min = positive.iter().fold(f64::MAX, |a, &b| a.min(b)).max(1e-3) * 0.8;
    let y_max = positive.iter().fold(0.0_f64, |a, &b| a.max(b)) * 2.0;

    let mut chart = ChartBuilder::on(root)
        .caption(ChartKind::PhaseScaling.title(series), ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(n as f64 - 0.5), (y_min..y_max.max(1.0)).log_scale())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| thread_label(*x, &series.thread_counts))
        .y_desc("Time (ms, log scale)")
        .x_desc("Threads")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    for curve in &series.phases {
        let color = phase_color(curve.phase);
        let data: Vec<(f64, f64)> = curve
            .elapsed_ms
            .iter()
            .enumerate()
            .filter(|(_, &v)| v > 0.0)
            .map(|(i, &v)| (i as f64, v))
            .collect();
        if data.is_empty() {
            continue;
        }
        chart
            .draw_series(LineSeries::new(data.clone(), color.stroke_width(LINE_STROKE)))?
            .label(curve.phase.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_STROKE))
            });
        chart.draw_series(PointSeries::of_element(
            data,
            POINT_SIZE,
            color.filled(),
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))?;
    }

    draw_legend(&mut chart)
}

fn draw_percent_stacked<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &BreakdownSeries,
) -> Result<()> {
    let n = series.config_count();

    let mut chart = ChartBuilder::on(root)
        .caption(ChartKind::PercentStacked.title(series), ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(n as f64 - 0.5), 0.0..100.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| thread_label(*x, &series.thread_counts))
        .y_desc("Share of total time (%)")
        .x_desc("Threads")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    let mut bottoms = vec![0.0f64; n];
    for curve in &series.phases {
        let color = phase_color(curve.phase);
        for (i, &pct) in curve.percent.iter().enumerate() {
            let x = i as f64;
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (x - BAR_WIDTH / 2.0, bottoms[i]),
                    (x + BAR_WIDTH / 2.0, (bottoms[i] + pct).min(100.0)),
                ],
                color.filled(),
            )))?;
            bottoms[i] += pct;
        }
        add_phase_legend(&mut chart, curve.phase)?;
    }

    draw_legend(&mut chart)
}

fn draw_speedup<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &BreakdownSeries,
) -> Result<()> {
    let n = series.config_count();
    let max_threads = series.thread_counts.iter().copied().max().unwrap_or(1);
    let max_speedup = series
        .phases
        .iter()
        .flat_map(|c| c.speedup.iter().copied())
        .fold(f64::from(max_threads), f64::max);
    let y_max = max_speedup * 1.1;

    let mut chart = ChartBuilder::on(root)
        .caption(ChartKind::Speedup.title(series), ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(n as f64 - 0.5), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| thread_label(*x, &series.thread_counts))
        .y_desc("Speedup vs 1 thread")
        .x_desc("Threads")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    // Ideal linear speedup equals the thread count itself.
    let ideal: Vec<(f64, f64)> = series
        .thread_counts
        .iter()
        .enumerate()
        .map(|(i, &t)| (i as f64, f64::from(t)))
        .collect();
    chart
        .draw_series(DashedLineSeries::new(ideal, 8, 6, BLACK.stroke_width(2)))?
        .label("Ideal (linear)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));

    for curve in &series.phases {
        let color = phase_color(curve.phase);
        let data: Vec<(f64, f64)> = curve
            .speedup
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect();
        chart
            .draw_series(LineSeries::new(data.clone(), color.stroke_width(LINE_STROKE)))?
            .label(curve.phase.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_STROKE))
            });
        chart.draw_series(PointSeries::of_element(
            data,
            POINT_SIZE,
            color.filled(),
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))?;
    }

    draw_legend(&mut chart)
}

/// Attach a legend entry for a phase drawn as bars, which have no
/// series handle of their own.
fn add_phase_legend<'a, DB, X, Y>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<X, Y>>,
    phase: Phase,
) -> Result<()>
where
    DB: DrawingBackend,
    X: Ranged<ValueType = f64>,
    Y: Ranged<ValueType = f64>,
{
    let color = phase_color(phase);
    chart
        .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
        .label(phase.label())
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
    Ok(())
}

fn draw_legend<'a, DB: DrawingBackend + 'a, CT: CoordTranslate>(
    chart: &mut ChartContext<'a, DB, CT>,
) -> Result<()> {
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_paths_are_distinct() {
        let dir = Path::new("out");
        let mut seen = std::collections::HashSet::new();
        for kind in ChartKind::ALL {
            for format in [ChartFormat::Png, ChartFormat::Svg] {
                assert!(seen.insert(chart_path(dir, kind, format)));
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_chart_path_naming() {
        let path = chart_path(Path::new("out"), ChartKind::Speedup, ChartFormat::Svg);
        assert_eq!(path, PathBuf::from("out/breakdown_speedup.svg"));
    }

    #[test]
    fn test_default_config_emits_both_formats() {
        let config = ChartConfig::default();
        assert_eq!(config.formats, vec![ChartFormat::Png, ChartFormat::Svg]);
    }
}
