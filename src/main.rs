//! resumecraft: resume text analyzer

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use resumecraft::cli::{self, Cli, Commands, ConfigAction};
use resumecraft::config::{Config, OutputFormat};
use resumecraft::input::{InputManager, InputSource};
use resumecraft::output::export;
use resumecraft::output::formatter::{save_report_to_file, ReportGenerator};
use resumecraft::output::progress::Progress;
use resumecraft::Session;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

/// Settings resolved once from flags and the config file
struct AppContext {
    config: Config,
    config_path: PathBuf,
    use_colors: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))
    {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    };

    let use_colors = config.output.color && !cli.no_color && std::io::stdout().is_terminal();
    if !use_colors {
        colored::control::set_override(false);
    }

    let ctx = AppContext {
        config,
        config_path,
        use_colors,
    };

    if let Err(e) = run_command(cli.command, &ctx).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, ctx: &AppContext) -> Result<()> {
    match command {
        Commands::Parse { input } => {
            let session = load_session(input, None, ctx).await?;
            let record = session.record().context("No resume was parsed")?;
            println!("{}", serde_json::to_string_pretty(record)?);
        }

        Commands::Analyze {
            input,
            role,
            output,
            detailed,
            save,
        } => {
            let format = resolve_output_format(output.as_deref(), ctx)?;
            let session = load_session(input, role.as_deref(), ctx).await?;
            let detailed = detailed || ctx.config.output.detailed;
            emit_analysis(&session, format, detailed, save.as_deref(), ctx)?;
        }

        Commands::Optimize {
            input,
            role,
            output,
            save,
        } => {
            let format = resolve_output_format(output.as_deref(), ctx)?;
            let session = load_session(input, Some(&role), ctx).await?;

            let optimized_for = session
                .record()
                .and_then(|r| r.optimized_for.as_deref())
                .unwrap_or_default();
            if format == OutputFormat::Console && save.is_none() {
                println!("Optimized for \"{}\"!", optimized_for);
            } else {
                info!("Optimized for \"{}\"", optimized_for);
            }

            emit_analysis(&session, format, ctx.config.output.detailed, save.as_deref(), ctx)?;
        }

        Commands::Export {
            input,
            format,
            role,
            save,
        } => {
            let format = match format {
                Some(f) => cli::parse_export_format(&f).map_err(anyhow::Error::msg)?,
                None => ctx.config.export.format,
            };
            let session = load_session(input, role.as_deref(), ctx).await?;
            let record = session.record().context("No resume was parsed")?;

            let content = export::export(record, format, ctx.config.export.include_styles)
                .context("Failed to render export")?;

            match save {
                Some(path) => {
                    let path = path.unwrap_or_else(|| {
                        PathBuf::from(export::suggest_filename(
                            format,
                            ctx.config.export.timestamp_filenames,
                        ))
                    });
                    save_report_to_file(&content, &path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Saved {}", path.display());
                }
                None => println!("{}", content),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("# {}", ctx.config_path.display());
                print!("{}", ctx.config.to_toml_string()?);
            }

            Some(ConfigAction::Reset) => {
                Config::default()
                    .save_to(&ctx.config_path)
                    .with_context(|| format!("Failed to write {}", ctx.config_path.display()))?;
                println!("Configuration reset: {}", ctx.config_path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", ctx.config_path.display());
            }
        },
    }

    Ok(())
}

/// Read `input`, parse and analyze it, then optionally tailor it to `role`
async fn load_session(input: PathBuf, role: Option<&str>, ctx: &AppContext) -> Result<Session> {
    let source = InputSource::from(input);
    let mut progress = Progress::new(ctx.config.output.show_progress);

    let mut input_manager = InputManager::new();
    let text = input_manager
        .read_resume(&source)
        .await
        .with_context(|| format!("Failed to read resume from {}", source.display_name()))?;
    progress.advance();

    let mut session = Session::new();
    session.load_text(&text)?;
    progress.advance();

    if let Some(role) = role {
        let role = ctx.config.resolve_role(role);
        progress.advance();
        session.optimize(&role)?;
    }
    progress.finish();

    if let Some(report) = session.report() {
        info!(
            "Analyzed {}: overall {}/100, ATS {}/100",
            source.display_name(),
            report.overall_score,
            report.ats_score
        );
    }

    Ok(session)
}

fn resolve_output_format(flag: Option<&str>, ctx: &AppContext) -> Result<OutputFormat> {
    match flag {
        Some(f) => cli::parse_output_format(f).map_err(anyhow::Error::msg),
        None => Ok(ctx.config.output.format),
    }
}

fn emit_analysis(
    session: &Session,
    format: OutputFormat,
    detailed: bool,
    save: Option<&Path>,
    ctx: &AppContext,
) -> Result<()> {
    let (record, report) = session.current()?;
    let use_colors = ctx.use_colors && save.is_none();
    let generator = ReportGenerator::with_options(use_colors, detailed, true);
    let content = generator.generate_report(record, report, format)?;

    match save {
        Some(path) => {
            save_report_to_file(&content, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}
