use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    codegen::{GeneratedFiles, MODELS_DIR},
    metrics::GenerationStats,
    orchestrator::Orchestrator,
  },
  openapi::Document,
  ui::{Colors, GenerateCommand},
  utils::DocumentLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub base_url: Option<String>,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      base_url,
      verbose,
      quiet,
    } = command;

    let base_url = base_url.map(|url| url.trim().to_string());
    if base_url.as_deref().is_some_and(str::is_empty) {
      anyhow::bail!("--base-url must not be empty");
    }

    Ok(Self {
      input,
      output,
      base_url,
      verbose,
      quiet,
    })
  }

  async fn load_document(&self) -> anyhow::Result<Document> {
    let loader = DocumentLoader::open(&self.input)
      .await
      .with_context(|| format!("Failed to read {}", self.input.display()))?;
    Ok(loader.parse()?)
  }

  async fn write_output(&self, files: &GeneratedFiles) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(self.output.join(MODELS_DIR)).await?;
    for (file_type, code) in files.iter() {
      let path = self.output.join(file_type.relative_path());
      tokio::fs::write(&path, code)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
  }
}

/// Fails when `output` exists but is not a directory.
pub(crate) async fn check_output_dir(output: &Path) -> anyhow::Result<()> {
  match tokio::fs::metadata(output).await {
    Ok(metadata) if !metadata.is_dir() => {
      anyhow::bail!("Path {} already exists and is not a directory", output.display())
    }
    Ok(_) => Ok(()),
    Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
    Err(err) => Err(err).with_context(|| format!("Failed to inspect {}", output.display())),
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI document from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating TypeScript client...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Types generated:", stats.types_generated().to_string());
    self.stat("", format!("{} schemas", stats.schemas_generated));
    self.stat("", format!("{} parameters", stats.parameters_generated));
    self.stat("", format!("{} request bodies", stats.request_bodies_generated));
    self.stat("", format!("{} responses", stats.responses_generated));
    self.stat("Operations converted:", stats.operations_converted.to_string());
    self.stat("Methods generated:", stats.client_methods_generated.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.accent()),
          cycle.join(" -> ").with(self.colors.info())
        );
      }
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      if !warning.is_skipped_item() && !self.config.verbose {
        continue;
      }

      if !printed_header {
        println!();
        printed_header = true;
      }

      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self, files: &GeneratedFiles) {
    if self.config.quiet {
      return;
    }
    self.stat("Files written:", files.len().to_string());
    if self.config.verbose {
      for (file_type, _) in files.iter() {
        self.stat("Wrote:", file_type.relative_path().display().to_string());
      }
    }
    println!();
    println!(
      "{} {}",
      format_timestamp().with(self.colors.timestamp()),
      "Successfully generated TypeScript client".with(self.colors.success())
    );
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  check_output_dir(&config.output).await?;

  logger.log_loading();
  let document = config.load_document().await?;

  logger.log_generating();
  let orchestrator = Orchestrator::new(document, config.base_url.clone());
  let output = orchestrator.generate()?;
  logger.print_statistics(&output.stats);

  logger.log_writing();
  config.write_output(&output.files).await?;

  logger.log_success(&output.files);
  Ok(())
}
