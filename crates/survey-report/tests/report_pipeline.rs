//! End-to-end tests from CSV tables to figure JSON files

mod common;

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use survey_report::{Error, Layer, Report, ReportConfig, Table};

fn config_for(dir: &std::path::Path) -> ReportConfig {
    ReportConfig::default()
        .with_data_dir(dir)
        .with_output_dir(dir.join("figures"))
        .with_resamples(300)
        .with_seed(42)
}

const FIGURE_NAMES: [&str; 5] = [
    "plot_docs_usual_should",
    "plot_docs_diff_compare",
    "plot_diff_hist",
    "plot_contrib_type_bar",
    "plot_credit_enjoyment",
];

#[test]
fn test_report_writes_every_figure() {
    let dir = common::fixture_dir("writes");
    let config = config_for(&dir);

    let report = Report::from_config(&config).unwrap();
    let written = report.write_to(&config.output_dir).unwrap();

    assert_eq!(written.len(), 2 * FIGURE_NAMES.len());
    for name in FIGURE_NAMES {
        let path = config.output_dir.join(format!("{name}.json"));
        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], name);

        let path = config.output_dir.join(format!("{name}.svg"));
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"), "{name}.svg is not an SVG document");
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_seeded_runs_are_identical() {
    let dir = common::fixture_dir("seeded");
    let config = config_for(&dir);

    let first = Report::from_config(&config).unwrap();
    let second = Report::from_config(&config).unwrap();
    assert_eq!(first.figures(), second.figures());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_build_with_injected_rng() {
    let responses = Table::from_csv_reader(common::RESPONSES_CSV.as_bytes()).unwrap();
    let contribs = Table::from_csv_reader(common::CONTRIBS_CSV.as_bytes()).unwrap();
    let config = ReportConfig::default().with_resamples(500);

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let report = Report::build(&config, &responses, &contribs, &mut rng).unwrap();

    // Activities: bug reports 4, docs 3, reviews 3; the talk (1) is dropped
    let contrib = report.figure("plot_contrib_type_bar").unwrap();
    match &contrib.layers[0] {
        Layer::Bar { heights, .. } => {
            assert_eq!(heights, &vec![Some(3.0), Some(3.0), Some(4.0)]);
        }
        other => panic!("unexpected layer {other:?}"),
    }

    // Credit means: writing code 28/6, fixing bugs 17/6, managing 7/5
    let credit = report.figure("plot_credit_enjoyment").unwrap();
    match &credit.layers[0] {
        Layer::GroupedBar { categories, series } => {
            assert_eq!(
                categories,
                &vec![
                    "Writing Code".to_string(),
                    "Fixing Bugs".to_string(),
                    "Managing Communities".to_string(),
                ]
            );
            let credit_means: Vec<f64> = series[0].heights.iter().map(|h| h.unwrap()).collect();
            assert_relative_eq!(credit_means[0], 28.0 / 6.0, epsilon = 1e-12);
            assert_relative_eq!(credit_means[1], 17.0 / 6.0, epsilon = 1e-12);
            assert_relative_eq!(credit_means[2], 7.0 / 5.0, epsilon = 1e-12);

            for s in series {
                for (height, interval) in s.heights.iter().zip(&s.intervals) {
                    let [lo, hi] = interval.unwrap();
                    let h = height.unwrap();
                    assert!(lo <= hi);
                    assert!(lo <= h + 1e-12 && h <= hi + 1e-12);
                }
            }
        }
        other => panic!("unexpected layer {other:?}"),
    }

    // Diffs -10 -20 0 20 -20; the fifth participant has no usual answer
    let hist = report.figure("plot_diff_hist").unwrap();
    match &hist.layers[1] {
        Layer::Segment { from, to, .. } => {
            assert_eq!(from[1], 4.0);
            assert!(from[0] >= -20.0 && to[0] <= 20.0);
        }
        other => panic!("unexpected layer {other:?}"),
    }
}

#[test]
fn test_missing_input_file() {
    let dir = std::env::temp_dir().join("survey-report-does-not-exist");
    let config = ReportConfig::default().with_data_dir(&dir).with_seed(1);
    assert!(matches!(Report::from_config(&config), Err(Error::Io(_))));
}

#[test]
fn test_missing_docs_column() {
    let responses = Table::from_csv_reader("credit-credit_fixing_bugs\n3\n".as_bytes()).unwrap();
    let contribs = Table::from_csv_reader(common::CONTRIBS_CSV.as_bytes()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let result = Report::build(&ReportConfig::default(), &responses, &contribs, &mut rng);
    assert!(matches!(result, Err(Error::MissingColumn(name)) if name == "docs-usual"));
}
