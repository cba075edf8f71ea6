//! Which open-source activities participants take part in

use crate::{
    dataset::{column_sum, Table},
    figures::{Axes, Figure, Layer},
};
use tracing::{debug, warn};

/// Word positions before which a line break goes in long activity labels
const WRAP_POSITIONS: [usize; 3] = [12, 8, 4];

/// Number of "yes" answers for one activity
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCount {
    pub activity: String,
    pub count: f64,
}

/// Yes-counts per activity, sorted ascending
///
/// Activities with `min_responses` answers or fewer are dropped; in the
/// survey these are the free-text "other" entries.
pub fn activity_counts(table: &Table, min_responses: f64) -> Vec<ActivityCount> {
    let mut counts: Vec<ActivityCount> = table
        .iter_columns()
        .filter_map(|(name, values)| {
            let count = column_sum(values);
            if count > min_responses {
                Some(ActivityCount {
                    activity: name.to_string(),
                    count,
                })
            } else {
                debug!(activity = name, count, "Dropping rarely chosen activity");
                None
            }
        })
        .collect();

    if counts.is_empty() {
        warn!("No activity passed the response threshold of {min_responses}");
    }

    counts.sort_by(|a, b| a.count.total_cmp(&b.count));
    counts
}

/// Break a long label into lines by inserting breaks between words
///
/// ```rust
/// use survey_report::contribs::wrap_label;
///
/// assert_eq!(wrap_label("Filed a bug report"), "Filed a bug report");
/// assert_eq!(wrap_label("one two three four five"), "one two three four \n five");
/// ```
pub fn wrap_label(label: &str) -> String {
    let mut words: Vec<&str> = label.split(' ').collect();
    for position in WRAP_POSITIONS {
        if position < words.len() {
            words.insert(position, "\n");
        }
    }
    words.join(" ")
}

/// Bar chart of yes-counts per activity
pub fn contrib_type_figure(counts: &[ActivityCount]) -> Figure {
    let labels = counts.iter().map(|c| wrap_label(&c.activity)).collect();

    Figure::new("plot_contrib_type_bar")
        .with_title("Open Source activities of SciPy attendees")
        .with_axes(Axes {
            y_label: Some("Number of yes responses".to_string()),
            x_tick_labels: Some(labels),
            x_tick_rotation: Some(45.0),
            ..Axes::default()
        })
        .with_layer(Layer::Bar {
            x: (0..counts.len()).map(|i| i as f64).collect(),
            heights: counts.iter().map(|c| Some(c.count)).collect(),
            width: 0.5,
            colormap: "tab10".to_string(),
            color_positions: vec![0.0; counts.len()],
        })
}
