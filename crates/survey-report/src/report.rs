//! Build every survey figure and write them to disk

use crate::{
    config::ReportConfig,
    contribs::{activity_counts, contrib_type_figure},
    credit::{credit_enjoyment_figure, tidy_responses},
    dataset::Table,
    docs::{diff_compare_figure, diff_hist_figure, usual_should_figure, DocsTimeTable},
    figures::Figure,
    render::render_svg,
    Result,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use survey_confidence::{BootstrapMean, ConfidenceLevel};
use tracing::{info, instrument};

/// All figures of one report run, in build order
#[derive(Debug, Clone)]
pub struct Report {
    figures: Vec<Figure>,
}

impl Report {
    /// Load both survey tables named by `config` and build the figures
    #[instrument(skip_all, fields(data_dir = %config.data_dir.display()))]
    pub fn from_config(config: &ReportConfig) -> Result<Self> {
        config.validate()?;
        let responses = Table::from_csv_path(config.responses_path())?;
        let contribs = Table::from_csv_path(config.contribs_path())?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::build(config, &responses, &contribs, &mut rng)
    }

    /// Build the figures from already loaded tables
    pub fn build<R: Rng + ?Sized>(
        config: &ReportConfig,
        responses: &Table,
        contribs: &Table,
        rng: &mut R,
    ) -> Result<Self> {
        let bootstrap = BootstrapMean::new().with_resamples(config.n_resamples);
        let level = ConfidenceLevel::new(config.confidence_level)?;

        let docs = DocsTimeTable::from_table(responses)?;
        let counts = activity_counts(contribs, config.min_contrib_responses);
        let tidy = tidy_responses(responses);

        let figures = vec![
            usual_should_figure(&docs),
            diff_compare_figure(&docs),
            diff_hist_figure(&docs, &bootstrap, level, rng)?,
            contrib_type_figure(&counts),
            credit_enjoyment_figure(&tidy, &bootstrap, level, rng)?,
        ];
        Ok(Self { figures })
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Find a figure by name
    pub fn figure(&self, name: &str) -> Option<&Figure> {
        self.figures.iter().find(|f| f.name == name)
    }

    /// Write `<dir>/<name>.json` and `<dir>/<name>.svg` per figure,
    /// creating `dir` if needed
    ///
    /// Returns the written paths in figure order, JSON before SVG.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(self.figures.len() * 2);
        for figure in &self.figures {
            let path = dir.join(format!("{}.json", figure.name));
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, figure)?;
            writer.flush()?;
            info!(path = %path.display(), "Wrote figure");
            written.push(path);

            let path = dir.join(format!("{}.svg", figure.name));
            render_svg(figure, &path)?;
            info!(path = %path.display(), "Rendered figure");
            written.push(path);
        }
        Ok(written)
    }
}
