//! Folio CLI
//!
//! Mount the portfolio interaction layer on a TOML-described page and replay
//! scripted input against it, headless.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_animation::RecordingEngine;
use folio_core::MemoryDocument;
use folio_page::{Page, PageConfig, PageSnapshot};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod fixture;
mod replay;

use fixture::{PageFixture, Script};
use replay::StepReport;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Replay portfolio page interactions headless", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a script of input events and print the final page state
    Replay {
        /// Page fixture (TOML element tree)
        page: PathBuf,

        /// Script of steps to replay
        script: PathBuf,

        /// Page configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report which components a page's markup enables
    Check {
        /// Page fixture (TOML element tree)
        page: PathBuf,

        /// Page configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays parseable
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Replay {
            page,
            script,
            config,
            json,
        } => cmd_replay(&page, &script, config.as_deref(), json),

        Commands::Check { page, config, json } => cmd_check(&page, config.as_deref(), json),
    }
}

fn load_config(path: Option<&Path>) -> Result<PageConfig> {
    match path {
        Some(path) => Ok(PageConfig::load(path)?),
        None => Ok(PageConfig::default()),
    }
}

fn mount(page: &Path, config: Option<&Path>) -> Result<(Page<MemoryDocument>, RecordingEngine)> {
    let fixture = PageFixture::load(page)?;
    let config = load_config(config)?;
    let mut engine = RecordingEngine::new();
    let page = Page::mount(fixture.build(), config, Some(&mut engine))
        .with_context(|| format!("failed to mount {}", page.display()))?;
    Ok((page, engine))
}

fn cmd_replay(page_path: &Path, script_path: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let (mut page, _engine) = mount(page_path, config)?;
    let script = Script::load(script_path)?;

    info!("Replaying {} steps against {}", script.steps.len(), page_path.display());
    let steps = replay::replay(&mut page, &script)
        .with_context(|| format!("replay of {} failed", script_path.display()))?;
    let snapshot = page.snapshot();

    if json {
        let out = json!({ "steps": steps, "snapshot": snapshot });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_steps(&steps);
        println!();
        print_snapshot(&snapshot);
    }
    Ok(())
}

fn cmd_check(page_path: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let (page, engine) = mount(page_path, config)?;
    let snapshot = page.snapshot();

    info!("Checked {}", page_path.display());
    if json {
        let out = json!({
            "navigation": snapshot.nav.is_some(),
            "contact_form": snapshot.form.is_some(),
            "project_modal": snapshot.modal.is_some(),
            "projects": page.projects().cards().len(),
            "listeners": snapshot.listeners,
            "animations": snapshot.animations,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let status = |enabled: bool| if enabled { "enabled" } else { "missing" };
    println!("Page: {}", page_path.display());
    println!("  navigation:    {}", status(snapshot.nav.is_some()));
    println!("  contact form:  {}", status(snapshot.form.is_some()));
    println!(
        "  project modal: {} ({} projects)",
        status(snapshot.modal.is_some()),
        page.projects().cards().len()
    );
    println!("  animations:    {} registrations", engine.registrations().len());
    println!("  listeners:     {}", listener_names(&snapshot));
    Ok(())
}

fn listener_names(snapshot: &PageSnapshot) -> String {
    snapshot
        .listeners
        .iter()
        .map(|l| format!("{l:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_steps(steps: &[StepReport]) {
    for step in steps {
        let mut line = format!("step {:>2} {:<8}", step.step, step.action);
        match step.action {
            "advance" => line.push_str(&format!("timers fired: {}", step.timers_fired)),
            "input" | "resize" => {}
            _ => {
                line.push_str(&format!("handled: {}", step.handled));
                if step.default_prevented {
                    line.push_str(" (default prevented)");
                }
            }
        }
        println!("{}", line.trim_end());
    }
}

fn print_snapshot(snapshot: &PageSnapshot) {
    if let Some(nav) = snapshot.nav {
        println!("navigation: {nav}");
    }
    if let Some(modal) = &snapshot.modal {
        match &modal.title {
            Some(title) if modal.open => println!("modal: open ({title})"),
            _ => println!("modal: closed"),
        }
    }
    if let Some(form) = &snapshot.form {
        match &form.message {
            Some(message) => println!("form: {} ({message})", form.phase),
            None => println!("form: {}", form.phase),
        }
    }
    println!("keyboard: {}", snapshot.keyboard_mode);
    println!("elapsed: {}ms", snapshot.elapsed_ms);
    println!("listeners: {}", listener_names(snapshot));
}
