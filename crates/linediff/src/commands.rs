use crate::cli::Cli;
use anyhow::{Context, Result};
use linediff_compare::{compare, Comparison, DocumentSource, LoadOptions};
use linediff_core::{init_logging, Config};
use linediff_render::{write_styled, DiffStats, RenderedLine, StyleOptions};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Exit status when the documents differ and `--exit-code` is set
pub const EXIT_DIFFERENT: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Styled,
    Json,
    Stat,
}

/// Configuration and flags folded into what one run needs
#[derive(Debug, Clone)]
pub struct Settings {
    pub mode: OutputMode,
    pub style: StyleOptions,
    pub load: LoadOptions,
    pub exit_code: bool,
}

impl Settings {
    /// CLI flags win over configuration.
    pub fn resolve(cli: &Cli, config: &Config, is_terminal: bool) -> Self {
        let mode = if cli.json {
            OutputMode::Json
        } else if cli.stat {
            OutputMode::Stat
        } else {
            OutputMode::Styled
        };

        let color = cli.color.unwrap_or(config.render.color);
        let style = StyleOptions {
            color: mode == OutputMode::Styled && color.enabled(is_terminal),
            newline_marker: config.render.newline_marker && !cli.no_newline_marker,
            ..StyleOptions::default()
        };

        let mut load = LoadOptions::from(&config.load);
        if let Some(max_bytes) = cli.max_bytes {
            load.max_bytes = (max_bytes > 0).then_some(max_bytes);
        }

        Self {
            mode,
            style,
            load,
            exit_code: cli.exit_code,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    old: String,
    new: String,
    stats: DiffStats,
    lines: &'a [RenderedLine],
}

pub async fn execute(cli: Cli) -> Result<i32> {
    run(cli, &mut io::stdout()).await
}

/// Load both documents, then write the diff to `out`.
///
/// Nothing is written unless both documents loaded.
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> Result<i32> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(ref level) = cli.log_level {
        config.log.level = level.clone();
    }

    let _guard = init_logging(&config.log.level, config.log.file.as_deref().map(Path::new))
        .context("Failed to initialize logging")?;
    if let Some(warning) = config.version_warning() {
        warn!("{}", warning);
    }

    let settings = Settings::resolve(&cli, &config, io::stdout().is_terminal());
    debug!(?settings, "resolved settings");

    let old = DocumentSource::from_arg(&cli.old);
    let new = DocumentSource::from_arg(&cli.new);
    let comparison = compare(&old, &new, &settings.load)
        .await
        .with_context(|| format!("Cannot compare {} with {}", old, new))?;

    write_output(out, &comparison, &settings)?;
    out.flush()?;

    if settings.exit_code && !comparison.is_identical() {
        Ok(EXIT_DIFFERENT)
    } else {
        Ok(0)
    }
}

pub fn write_output<W: Write>(out: &mut W, comparison: &Comparison, settings: &Settings) -> Result<()> {
    match settings.mode {
        OutputMode::Styled => {
            write_styled(out, comparison.lines(), &settings.style)
                .context("Failed to write diff")?;
        }
        OutputMode::Stat => {
            writeln!(out, "{}", comparison.stats().summary())?;
        }
        OutputMode::Json => {
            let report = JsonReport {
                old: comparison.old_document().source().name(),
                new: comparison.new_document().source().name(),
                stats: comparison.stats(),
                lines: comparison.lines(),
            };
            serde_json::to_writer_pretty(&mut *out, &report).context("Failed to write JSON")?;
            writeln!(out)?;
        }
    }
    Ok(())
}
