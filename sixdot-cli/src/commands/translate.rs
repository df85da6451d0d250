//! Translate command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, InputSource};
use crate::output::{create_formatter, OutputFormat, TranslationRecord};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use sixdot_core::{BrailleTranslator, CapitalizationRule, Input};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the translate command
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Input files or patterns (supports glob); standard input when omitted
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Translate this text instead of reading files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Capital indicator rule: whole-word or per-letter
    #[arg(long, value_name = "RULE")]
    pub capitalization: Option<CapitalizationRule>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SIXDOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the source text before its Braille
    #[arg(long)]
    pub include_source: bool,

    /// Translate input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel translation
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TranslateArgs {
    /// Execute the translate command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting translation");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let translator = BrailleTranslator::with_config(config.to_core_config()?)
            .map_err(CliError::from)?;

        let sources = self.sources()?;
        let records = self.translate_all(&translator, &sources, &config)?;

        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = create_formatter(format, self.open_output()?, config.format_options());
        for record in &records {
            formatter.write_translation(record)?;
        }
        formatter.finish()?;

        log::info!("Translated {} input(s)", records.len());
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when run from tests
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }

    /// Configuration file values with command-line overrides applied
    fn effective_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        if let Some(rule) = self.capitalization {
            config.translation.capitalization = rule;
        }
        if self.include_source {
            config.output.include_source = true;
        }
        if self.parallel {
            config.performance.parallel = true;
        }
        if let Some(threads) = self.threads {
            if threads == 0 {
                anyhow::bail!("Thread count must be greater than 0");
            }
            config.performance.worker_threads = threads;
        }

        Ok(config)
    }

    fn sources(&self) -> Result<Vec<InputSource>> {
        if let Some(text) = &self.text {
            return Ok(vec![InputSource::Inline(text.clone())]);
        }

        if self.input.is_empty() {
            log::debug!("No input given, reading standard input");
            return Ok(vec![InputSource::Stdin]);
        }

        let files = resolve_patterns(&self.input)?;
        Ok(files.into_iter().map(InputSource::File).collect())
    }

    /// Translate every source, keeping input order
    fn translate_all(
        &self,
        translator: &BrailleTranslator,
        sources: &[InputSource],
        config: &CliConfig,
    ) -> Result<Vec<TranslationRecord>> {
        let mut reporter = ProgressReporter::new(self.quiet);
        reporter.init_inputs(sources.len() as u64);

        let translate = |source: &InputSource| -> Result<TranslationRecord> {
            let record = translate_source(translator, source)?;
            reporter.input_completed(&record.source);
            Ok(record)
        };

        let records = if config.performance.parallel && sources.len() > 1 {
            let threads = config.performance.worker_threads;
            log::info!(
                "Translating {} inputs in parallel ({} threads)",
                sources.len(),
                if threads == 0 { "auto".to_string() } else { threads.to_string() }
            );

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to create thread pool")?;
            pool.install(|| sources.par_iter().map(translate).collect::<Result<Vec<_>>>())?
        } else {
            sources.iter().map(translate).collect::<Result<Vec<_>>>()?
        };

        reporter.finish();
        Ok(records)
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }
}

fn translate_source(
    translator: &BrailleTranslator,
    source: &InputSource,
) -> Result<TranslationRecord> {
    let limit = translator.config().max_input_bytes();
    if let InputSource::File(path) = source {
        // Reject oversized files before reading them
        let size = FileReader::file_size(path)?;
        if size > limit as u64 {
            return Err(CliError::TranslationError(format!(
                "{source} is {size} bytes, limit is {limit} bytes"
            ))
            .into());
        }
    }

    let text = source.read(limit)?;
    if text.is_empty() {
        log::warn!("{source}: input is empty, nothing to translate");
    }

    let output = translator
        .process(Input::from_text(text.as_str()))
        .map_err(CliError::from)
        .with_context(|| format!("Failed to translate {source}"))?;

    if !output.is_fully_translated() {
        log::info!(
            "{source}: {} character(s) have no Braille cell and were copied as-is",
            output.metadata.stats.passthrough_chars
        );
    }

    Ok(TranslationRecord {
        source: source.to_string(),
        text,
        braille: output.braille,
        stats: output.metadata.stats,
    })
}

#[cfg(test)]
impl Default for TranslateArgs {
    fn default() -> Self {
        Self {
            input: Vec::new(),
            text: None,
            output: None,
            format: None,
            capitalization: None,
            config: None,
            include_source: false,
            parallel: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }
}
