//! Chart-ready figure descriptions
//!
//! A [`Figure`] carries everything a plotting backend needs: axes, labels,
//! limits and a stack of layers. Figures serialize to JSON so any renderer
//! can draw them.

use serde::Serialize;

/// One chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub axes: Axes,
    pub layers: Vec<Layer>,
}

impl Figure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            axes: Axes::default(),
            layers: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axes(mut self, axes: Axes) -> Self {
        self.axes = axes;
        self
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }
}

/// Axis labels, limits and ticks
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_limits: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_limits: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_ticks: Option<Vec<f64>>,
    /// Categorical tick labels, one per category position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_tick_labels: Option<Vec<String>>,
    /// Rotation of the x tick labels in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_tick_rotation: Option<f64>,
}

impl Axes {
    pub fn labelled(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            x_label: Some(x_label.into()),
            y_label: Some(y_label.into()),
            ..Self::default()
        }
    }
}

/// Marker fill of a scatter series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Filled,
    Hollow,
}

/// A drawable element of a figure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    Scatter {
        label: String,
        marker: Marker,
        x: Vec<f64>,
        y: Vec<Option<f64>>,
    },
    /// Bars at numeric positions; colors index into `colormap` on [0, 1]
    Bar {
        x: Vec<f64>,
        heights: Vec<Option<f64>>,
        width: f64,
        colormap: String,
        color_positions: Vec<f64>,
    },
    /// Bars grouped by category, one series per hue
    GroupedBar {
        categories: Vec<String>,
        series: Vec<BarSeries>,
    },
    Segment {
        from: [f64; 2],
        to: [f64; 2],
        line_width: f64,
    },
    VerticalLine {
        x: f64,
        dashed: bool,
        alpha: f64,
    },
    Annotation {
        text: String,
        point: [f64; 2],
        text_position: [f64; 2],
    },
}

/// One hue of a grouped bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub label: String,
    pub heights: Vec<Option<f64>>,
    /// Error bar `[lower, upper]` per category
    pub intervals: Vec<Option<[f64; 2]>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_layer_serialization_is_tagged() {
        let layer = Layer::VerticalLine {
            x: 0.0,
            dashed: true,
            alpha: 0.5,
        };
        assert_eq!(
            serde_json::to_value(&layer).unwrap(),
            json!({"kind": "vertical_line", "x": 0.0, "dashed": true, "alpha": 0.5})
        );
    }

    #[test]
    fn test_empty_axes_fields_are_omitted() {
        let figure = Figure::new("plot_x").with_axes(Axes::labelled("a", "b"));
        let value = serde_json::to_value(&figure).unwrap();
        assert_eq!(value["axes"], json!({"x_label": "a", "y_label": "b"}));
        assert!(value.get("title").is_none());
    }
}
