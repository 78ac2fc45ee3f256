use anyhow::{Result, Context};
use log::{warn, info, debug};
use std::path::PathBuf;
use crate::app_config::Config;
use crate::changelog_parser;
use crate::feed_renderer::FeedRenderer;
use crate::file_utils::FileManager;
use crate::sample_changelog::SAMPLE_CHANGELOG;

// @module: Application controller for changelog conversion

/// Where the bilingual changelog text comes from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// The release notes compiled into the binary
    Builtin,

    /// A text file on disk
    File(PathBuf),

    /// Standard input
    Stdin,
}

impl InputSource {
    // @reads: Full changelog text
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Builtin => Ok(SAMPLE_CHANGELOG.to_string()),
            InputSource::File(path) => FileManager::read_to_string(path),
            InputSource::Stdin => FileManager::read_stdin(),
        }
    }
}

/// Main application controller for feed description generation
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Renderer built from the configured product name
    renderer: FeedRenderer,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let renderer = FeedRenderer::new(config.product_name.clone());
        Ok(Self { config, renderer })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse the changelog text and render the feed description
    pub fn generate(&self, text: &str) -> Result<String> {
        let sections = changelog_parser::parse_input(text)?;

        info!(
            "Parsed {} Chinese and {} English entries",
            sections.changelog_cn.len(),
            sections.changelog_en.len()
        );
        debug!(
            "Postscripts: {} Chinese, {} English",
            sections.ps_cn.len(),
            sections.ps_en.len()
        );

        Ok(self.renderer.render_sections(&sections))
    }

    /// Run the conversion, optionally writing the result to a file.
    ///
    /// The rendered description is always returned. An existing output file
    /// is left untouched unless `force_overwrite` is set.
    pub fn run(&self, source: InputSource, output: Option<PathBuf>, force_overwrite: bool) -> Result<String> {
        debug!("Reading changelog from {:?}", source);
        let text = source.read()?;
        let xml = self.generate(&text)?;

        if let Some(output_path) = output {
            if output_path.exists() && !force_overwrite {
                warn!("Output file already exists: {:?}. Use -f to force overwrite.", output_path);
                return Ok(xml);
            }

            FileManager::write_to_file(&output_path, &xml)?;
            info!("Success: {:?}", output_path);
        }

        Ok(xml)
    }
}
