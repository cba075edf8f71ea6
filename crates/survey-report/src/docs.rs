//! Time spent on documentation: how much participants usually spend versus
//! how much they think they should

use crate::{
    dataset::Table,
    figures::{Axes, Figure, Layer, Marker},
    Error, Result,
};
use rand::Rng;
use std::cmp::Ordering;
use survey_confidence::{BootstrapMean, ConfidenceLevel};
use survey_histogram::{arange_edges, EdgesBuilder, HistogramBuilder};
use tracing::{debug, instrument};

pub const USUAL_COLUMN: &str = "docs-usual";
pub const SHOULD_COLUMN: &str = "docs-should";

/// One participant's answers, in percent of working time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocsTime {
    pub usual: Option<f64>,
    pub should: Option<f64>,
}

impl DocsTime {
    /// `usual - should`, missing when either answer is missing
    pub fn diff(&self) -> Option<f64> {
        Some(self.usual? - self.should?)
    }
}

/// Participants ordered by usual time ascending, then difference descending
///
/// Missing values sort last under both keys.
#[derive(Debug, Clone, PartialEq)]
pub struct DocsTimeTable {
    rows: Vec<DocsTime>,
}

impl DocsTimeTable {
    pub fn from_table(table: &Table) -> Result<Self> {
        let usual = table.column(USUAL_COLUMN)?;
        let should = table.column(SHOULD_COLUMN)?;
        let rows = usual
            .iter()
            .zip(should)
            .map(|(&usual, &should)| DocsTime { usual, should })
            .collect();
        Ok(Self::from_rows(rows))
    }

    pub fn from_rows(mut rows: Vec<DocsTime>) -> Self {
        rows.sort_by(|a, b| {
            cmp_missing_last(a.usual, b.usual, false)
                .then_with(|| cmp_missing_last(a.diff(), b.diff(), true))
        });
        Self { rows }
    }

    pub fn rows(&self) -> &[DocsTime] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Differences in participant order, missing kept
    pub fn diffs(&self) -> Vec<Option<f64>> {
        self.rows.iter().map(DocsTime::diff).collect()
    }

    /// Differences with missing entries dropped
    pub fn present_diffs(&self) -> Vec<f64> {
        self.rows.iter().filter_map(DocsTime::diff).collect()
    }
}

fn cmp_missing_last(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) if descending => y.total_cmp(&x),
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn participant_positions(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// Scatter of usual and should time per participant
pub fn usual_should_figure(docs: &DocsTimeTable) -> Figure {
    let x = participant_positions(docs.len());
    Figure::new("plot_docs_usual_should")
        .with_axes(Axes::labelled("Participant ID", "Percent time"))
        .with_layer(Layer::Scatter {
            label: "% time one should\nspend on docs".to_string(),
            marker: Marker::Filled,
            x: x.clone(),
            y: docs.rows().iter().map(|r| r.should).collect(),
        })
        .with_layer(Layer::Scatter {
            label: "% time one usually\nspends on docs".to_string(),
            marker: Marker::Hollow,
            x,
            y: docs.rows().iter().map(|r| r.usual).collect(),
        })
}

/// Bar per participant of `usual - should`
///
/// Negative differences (spending less than one should) take the warm end
/// of the palette, everything else the cool end.
pub fn diff_compare_figure(docs: &DocsTimeTable) -> Figure {
    let heights = docs.diffs();
    let color_positions = heights
        .iter()
        .map(|h| match h {
            Some(h) if *h < 0.0 => 1.0,
            _ => 0.0,
        })
        .collect();

    Figure::new("plot_docs_diff_compare")
        .with_axes(Axes {
            y_limits: Some([-60.0, 60.0]),
            ..Axes::labelled("Participant ID", "Difference between\n\"usual\" and \"should\"")
        })
        .with_layer(Layer::Bar {
            x: participant_positions(heights.len()),
            heights,
            width: 0.8,
            colormap: "coolwarm".to_string(),
            color_positions,
        })
}

/// Histogram of differences with a bootstrap interval for their mean
#[instrument(skip(docs, bootstrap, rng), fields(n = docs.len()))]
pub fn diff_hist_figure<R: Rng + ?Sized>(
    docs: &DocsTimeTable,
    bootstrap: &BootstrapMean,
    level: ConfidenceLevel,
    rng: &mut R,
) -> Result<Figure> {
    let diffs = docs.present_diffs();
    if diffs.is_empty() {
        return Err(Error::InvalidParameter(
            "no participant answered both docs-time questions".to_string(),
        ));
    }

    let bounds = bootstrap.estimate(&diffs, &level.percentiles(), rng)?;
    let (lower, upper) = (bounds[0], bounds[1]);
    debug!(lower, upper, "Bootstrap interval for mean docs-time difference");

    let histogram = EdgesBuilder::new(arange_edges(-50.0, 50.0, 10.0)?)?.build(&diffs)?;
    let left_edges = histogram.left_edges();
    let color_positions = left_edges
        .iter()
        .map(|&edge| ((edge + 50.0) / 100.0).clamp(0.0, 1.0))
        .collect();
    let bar_top = histogram.max_count() as f64 + 2.0;

    Ok(Figure::new("plot_diff_hist")
        .with_title("Difference in participant views on\ntime spent on documentation")
        .with_axes(Axes {
            x_limits: Some([-60.0, 60.0]),
            y_limits: Some([0.0, 30.0]),
            x_ticks: Some(arange_edges(-100.0, 100.0, 20.0)?),
            ..Axes::labelled("Difference in % time (usual - should)", "Number of participants")
        })
        .with_layer(Layer::Bar {
            x: left_edges,
            heights: histogram.counts().into_iter().map(|c| Some(c as f64)).collect(),
            width: 8.0,
            colormap: "coolwarm_r".to_string(),
            color_positions,
        })
        .with_layer(Layer::Segment {
            from: [lower, bar_top],
            to: [upper, bar_top],
            line_width: 10.0,
        })
        .with_layer(Layer::VerticalLine {
            x: 0.0,
            dashed: true,
            alpha: 0.5,
        })
        .with_layer(Layer::Annotation {
            text: "Thinks they spend the\n right amount of time\non documentation".to_string(),
            point: [0.0, 15.0],
            text_position: [0.5, 19.0],
        }))
}
