use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use signup::app::App;
use signup::check;
use signup::config::Config;
use signup::form::{rules_for, FieldId, FormValues, Step};
use signup::logging;
use signup::ui::keybindings::{shortcuts_by_category_for_context, ShortcutContext};

#[derive(Parser)]
#[command(name = "signup")]
#[command(about = "Three-step signup form with review and submission")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Print the submitted record as JSON after the wizard exits
    #[arg(long)]
    emit_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a values file (.json, .toml, .yaml) without the TUI
    Check {
        /// File holding the form values
        file: PathBuf,
    },

    /// List the form fields and their validation rules
    Fields,

    /// List keyboard shortcuts for every screen
    Keys,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    // Determine if we're running in TUI mode (no subcommand)
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Check { file }) => {
            let valid = cmd_check(&file)?;
            if !valid {
                std::process::exit(1);
            }
        }
        Some(Commands::Fields) => cmd_fields(),
        Some(Commands::Keys) => cmd_keys(),
        None => {
            let emit_json = cli.emit_json;
            run_tui(config, logging_handle.log_file_path, emit_json)?;
        }
    }

    Ok(())
}

fn run_tui(config: Config, log_file_path: Option<PathBuf>, emit_json: bool) -> Result<()> {
    let reveal = config.ui.reveal_password_in_summary;
    let mut app = App::new(config);
    let result = app.run();

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if let Ok(metadata) = log_path.metadata() {
            if metadata.len() > 0 {
                eprintln!("Session log: {}", log_path.display());
            }
        }
    }

    result?;

    if emit_json {
        if let Some(values) = app.last_submission() {
            println!("{}", submission_json(values, reveal)?);
        }
    }

    Ok(())
}

fn submission_json(values: &FormValues, reveal: bool) -> Result<String> {
    let record = if reveal {
        values.clone()
    } else {
        values.redacted()
    };
    serde_json::to_string_pretty(&record).context("Failed to serialize submission")
}

/// Returns whether every step passed
fn cmd_check(file: &std::path::Path) -> Result<bool> {
    let values = check::load_values(file)?;
    let report = check::check_values(&values);

    print!("{}", report.render());
    if report.is_valid() {
        println!("All fields valid");
    } else {
        println!("{} error(s) found", report.error_count());
    }

    tracing::info!(
        file = %file.display(),
        errors = report.error_count(),
        "check finished"
    );
    Ok(report.is_valid())
}

fn cmd_fields() {
    println!("{:<6} {:<16} {:<18} Rules", "Step", "Key", "Label");
    println!("{}", "─".repeat(72));

    for step in Step::all() {
        for field in step.fields() {
            let rules = rules_for(*field)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "{:<6} {:<16} {:<18} {}",
                step.number(),
                field.key(),
                field.label(),
                rules
            );
        }
    }

    let secret: Vec<&str> = FieldId::all()
        .iter()
        .filter(|f| f.is_secret())
        .map(|f| f.key())
        .collect();
    println!();
    println!("Masked input: {}", secret.join(", "));
}

fn cmd_keys() {
    for context in ShortcutContext::all() {
        println!("{}", context.display_name());
        println!("{}", "─".repeat(40));
        for (category, shortcuts) in shortcuts_by_category_for_context(*context) {
            println!("  {}", category.display_name());
            for shortcut in shortcuts {
                println!("    {:<16} {}", shortcut.key_display(), shortcut.description);
            }
        }
        println!();
    }
}
