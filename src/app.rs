use tracing::debug;

use crate::cli::OutputFormat;
use crate::cli::colors::ColorSupport;
use crate::config::Config;
use crate::core::{LoadStatus, RecordStore};
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
    pub color: ColorSupport,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let project_dir = std::env::current_dir()?;
        let mut config = Config::load(cli.config.as_deref(), &project_dir)?;

        if let Some(path) = &cli.document {
            config.storage.document_path.clone_from(path);
        }
        if let Some(path) = &cli.rows {
            config.storage.rows_path.clone_from(path);
        }

        let output_format = cli.output_format();
        let color = match output_format {
            OutputFormat::Robot => ColorSupport::None,
            OutputFormat::Human => ColorSupport::for_mode(config.display.color),
        };
        colored::control::set_override(color.has_color());
        console::set_colors_enabled(color.has_color());

        Ok(Self {
            config,
            output_format,
            color,
        })
    }

    /// Open the roster at the configured paths.
    pub fn open_store(&self) -> Result<(RecordStore, LoadStatus)> {
        let paths = self.config.store_paths();
        debug!(
            document = %paths.document.display(),
            rows = %paths.rows.display(),
            "opening store"
        );
        RecordStore::open(paths)
    }
}
