//! SVG rendering of figures with plotters
//!
//! Every [`Layer`] kind maps onto plain plotters elements. SVG text has no
//! line breaks, so newlines in titles and axis labels are flattened to spaces;
//! annotation text is drawn line by line.

use crate::{
    figures::{Axes, BarSeries, Figure, Layer, Marker},
    Error, Result,
};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::path::Path;
use tracing::{debug, instrument};

const SIZE: (u32, u32) = (960, 640);
const FONT: &str = "sans-serif";

/// Share of a category slot covered by its group of bars
const GROUP_WIDTH: f64 = 0.8;

/// Number of pieces a dashed line is cut into; every other one is drawn
const DASHES: usize = 41;

const SERIES_COLORS: [RGBColor; 4] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
];

type Chart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn render_error(err: impl std::fmt::Display) -> Error {
    Error::Render(err.to_string())
}

/// Draw `figure` as an SVG document at `path`
#[instrument(skip(figure), fields(name = %figure.name))]
pub fn render_svg(figure: &Figure, path: &Path) -> Result<()> {
    let ([x0, x1], [y0, y1]) = plot_limits(figure);

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20).x_label_area_size(60).y_label_area_size(70);
    if let Some(title) = &figure.title {
        builder.caption(flatten(title), (FONT, 22).into_font());
    }
    let mut chart = builder
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(render_error)?;

    draw_mesh(&mut chart, &figure.axes, categories(figure))?;

    let mut has_legend = false;
    for (index, layer) in figure.layers.iter().enumerate() {
        has_legend |= draw_layer(&mut chart, layer, index, [y0, y1])?;
    }
    if has_legend {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_error)?;
    }

    root.present().map_err(render_error)?;
    debug!(path = %path.display(), "Rendered figure");
    Ok(())
}

/// Axis ranges: explicit limits when set, otherwise the padded data extent
fn plot_limits(figure: &Figure) -> ([f64; 2], [f64; 2]) {
    let mut x = Extent::empty();
    let mut y = Extent::empty();

    for layer in &figure.layers {
        match layer {
            Layer::Scatter { x: xs, y: ys, .. } => {
                for (&px, &py) in xs.iter().zip(ys) {
                    if let Some(py) = py {
                        x.include(px);
                        y.include(py);
                    }
                }
            }
            Layer::Bar {
                x: xs,
                heights,
                width,
                ..
            } => {
                y.include(0.0);
                for (&px, &h) in xs.iter().zip(heights) {
                    x.include(px - width / 2.0);
                    x.include(px + width / 2.0);
                    if let Some(h) = h {
                        y.include(h);
                    }
                }
            }
            Layer::GroupedBar { categories, series } => {
                x.include(-0.5);
                x.include(categories.len() as f64 - 0.5);
                y.include(0.0);
                for s in series {
                    s.heights.iter().flatten().for_each(|&h| y.include(h));
                    for &[lo, hi] in s.intervals.iter().flatten() {
                        y.include(lo);
                        y.include(hi);
                    }
                }
            }
            Layer::Segment { from, to, .. } => {
                for p in [from, to] {
                    x.include(p[0]);
                    y.include(p[1]);
                }
            }
            Layer::VerticalLine { x: px, .. } => x.include(*px),
            Layer::Annotation {
                point,
                text_position,
                ..
            } => {
                for p in [point, text_position] {
                    x.include(p[0]);
                    y.include(p[1]);
                }
            }
        }
    }

    (
        figure.axes.x_limits.unwrap_or_else(|| x.padded()),
        figure.axes.y_limits.unwrap_or_else(|| y.padded()),
    )
}

#[derive(Debug, Clone, Copy)]
struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, value: f64) {
        if value.is_finite() {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
    }

    /// Range with 5% padding; `[0, 1]` when nothing was included
    fn padded(self) -> [f64; 2] {
        if self.min > self.max {
            return [0.0, 1.0];
        }
        let span = self.max - self.min;
        let pad = if span > 0.0 { span * 0.05 } else { 0.5 };
        [self.min - pad, self.max + pad]
    }
}

/// Category names for a categorical x axis, if the figure has one
fn categories(figure: &Figure) -> Option<Vec<String>> {
    if let Some(labels) = &figure.axes.x_tick_labels {
        return Some(labels.clone());
    }
    figure.layers.iter().find_map(|layer| match layer {
        Layer::GroupedBar { categories, .. } => Some(categories.clone()),
        _ => None,
    })
}

fn draw_mesh(chart: &mut Chart<'_, '_>, axes: &Axes, categories: Option<Vec<String>>) -> Result<()> {
    // Categories sit at integer positions; other ticks stay unlabelled
    let category_label = |value: &f64| -> String {
        let Some(labels) = &categories else {
            return String::new();
        };
        let slot = value.round();
        if (value - slot).abs() > 1e-6 || slot < 0.0 {
            return String::new();
        }
        labels.get(slot as usize).map(|l| flatten(l)).unwrap_or_default()
    };

    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .disable_y_mesh()
        .label_style((FONT, 12).into_font());
    if let Some(label) = &axes.x_label {
        mesh.x_desc(flatten(label));
    }
    if let Some(label) = &axes.y_label {
        mesh.y_desc(flatten(label));
    }
    if let Some(ticks) = &axes.x_ticks {
        mesh.x_labels(ticks.len());
    }
    if let Some(labels) = &categories {
        mesh.x_labels(labels.len() * 2 + 1)
            .x_label_formatter(&category_label);
    }
    mesh.draw().map_err(render_error)
}

/// Draw one layer; returns whether it added a legend entry
fn draw_layer(chart: &mut Chart<'_, '_>, layer: &Layer, index: usize, y_range: [f64; 2]) -> Result<bool> {
    match layer {
        Layer::Scatter { label, marker, x, y } => {
            let color = SERIES_COLORS[index % SERIES_COLORS.len()];
            let style = match marker {
                Marker::Filled => color.filled(),
                Marker::Hollow => color.stroke_width(2),
            };
            let points: Vec<(f64, f64)> = x
                .iter()
                .zip(y)
                .filter_map(|(&px, &py)| py.map(|py| (px, py)))
                .collect();
            chart
                .draw_series(points.into_iter().map(|p| Circle::new(p, 4, style)))
                .map_err(render_error)?
                .label(flatten(label))
                .legend(move |(lx, ly)| Rectangle::new([(lx, ly - 5), (lx + 10, ly + 5)], style));
            Ok(true)
        }
        Layer::Bar {
            x,
            heights,
            width,
            colormap,
            color_positions,
        } => {
            let half = width / 2.0;
            let bars = x
                .iter()
                .zip(heights)
                .zip(color_positions)
                .filter_map(|((&px, &h), &t)| {
                    let color = colormap_color(colormap, t);
                    h.map(|h| Rectangle::new([(px - half, 0.0), (px + half, h)], color.filled()))
                });
            chart.draw_series(bars).map_err(render_error)?;
            Ok(false)
        }
        Layer::GroupedBar { series, .. } => {
            let bar_width = GROUP_WIDTH / series.len().max(1) as f64;
            for (s_idx, s) in series.iter().enumerate() {
                let color = SERIES_COLORS[s_idx % SERIES_COLORS.len()];
                let offset = -GROUP_WIDTH / 2.0 + bar_width * (s_idx as f64 + 0.5);
                let bars = s.heights.iter().enumerate().filter_map(|(slot, &h)| {
                    let center = slot as f64 + offset;
                    h.map(|h| {
                        Rectangle::new(
                            [(center - bar_width / 2.0, 0.0), (center + bar_width / 2.0, h)],
                            color.filled(),
                        )
                    })
                });
                chart
                    .draw_series(bars)
                    .map_err(render_error)?
                    .label(flatten(&s.label))
                    .legend(move |(lx, ly)| Rectangle::new([(lx, ly - 5), (lx + 10, ly + 5)], color.filled()));
                draw_error_bars(chart, s, offset, bar_width / 4.0)?;
            }
            Ok(!series.is_empty())
        }
        Layer::Segment { from, to, line_width } => {
            let style = BLACK.stroke_width(line_width.round().max(1.0) as u32);
            let segment = PathElement::new(vec![(from[0], from[1]), (to[0], to[1])], style);
            chart
                .draw_series(std::iter::once(segment))
                .map_err(render_error)?;
            Ok(false)
        }
        Layer::VerticalLine { x, dashed, alpha } => {
            let style = BLACK.mix(*alpha).stroke_width(1);
            let [y0, y1] = y_range;
            let (pieces, stride) = if *dashed { (DASHES, 2) } else { (1, 1) };
            let step = (y1 - y0) / pieces as f64;
            let dashes = (0..pieces).step_by(stride).map(|i| {
                let start = y0 + step * i as f64;
                PathElement::new(vec![(*x, start), (*x, start + step)], style)
            });
            chart.draw_series(dashes).map_err(render_error)?;
            Ok(false)
        }
        Layer::Annotation {
            text,
            point,
            text_position,
        } => {
            let anchor = (text_position[0], text_position[1]);
            let arrow = PathElement::new(vec![anchor, (point[0], point[1])], BLACK.stroke_width(1));
            chart
                .draw_series(std::iter::once(arrow))
                .map_err(render_error)?;

            let lines = text.lines().enumerate().map(|(i, line)| {
                EmptyElement::at(anchor)
                    + Text::new(line.trim().to_string(), (0, i as i32 * 15), (FONT, 13).into_font())
            });
            chart.draw_series(lines).map_err(render_error)?;
            Ok(false)
        }
    }
}

/// Vertical bar with caps for every interval of a grouped-bar series
fn draw_error_bars(chart: &mut Chart<'_, '_>, series: &BarSeries, offset: f64, cap: f64) -> Result<()> {
    for (slot, interval) in series.intervals.iter().enumerate() {
        let Some([lo, hi]) = *interval else {
            continue;
        };
        let x = slot as f64 + offset;
        let strokes = [
            vec![(x, lo), (x, hi)],
            vec![(x - cap, lo), (x + cap, lo)],
            vec![(x - cap, hi), (x + cap, hi)],
        ];
        chart
            .draw_series(
                strokes
                    .into_iter()
                    .map(|points| PathElement::new(points, BLACK.stroke_width(2))),
            )
            .map_err(render_error)?;
    }
    Ok(())
}

/// Color at position `t` of a named colormap; unknown names use one color
fn colormap_color(name: &str, t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    match name {
        "coolwarm" => diverging(t),
        "coolwarm_r" => diverging(1.0 - t),
        _ => SERIES_COLORS[0],
    }
}

/// Blue to grey to red
fn diverging(t: f64) -> RGBColor {
    const COOL: [f64; 3] = [59.0, 76.0, 192.0];
    const MID: [f64; 3] = [221.0, 221.0, 221.0];
    const WARM: [f64; 3] = [180.0, 4.0, 38.0];

    let (from, to, s) = if t < 0.5 {
        (COOL, MID, t * 2.0)
    } else {
        (MID, WARM, (t - 0.5) * 2.0)
    };
    let channel = |i: usize| (from[i] + (to[i] - from[i]) * s).round() as u8;
    RGBColor(channel(0), channel(1), channel(2))
}

fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
